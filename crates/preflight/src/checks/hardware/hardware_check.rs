use crate::checks::issue::{count_failures, CheckMessage, Dimension};
use crate::checks::probe::PlatformProbe;
use crate::console::Console;
use crate::error::ProbeError;
use log::{debug, warn};
use serde::Serialize;
use shared::models::ResourceRequirement;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceStatus {
    pub available_cpu: u32,
    pub available_memory_gb: f64,
    pub available_disk_gb: f64,
    pub is_valid: bool,
    pub messages: Vec<CheckMessage>,
    pub recommendations: Vec<String>,
}

impl ResourceStatus {
    fn new(available_cpu: u32, available_memory_gb: f64, available_disk_gb: f64) -> Self {
        Self {
            available_cpu,
            available_memory_gb,
            available_disk_gb,
            is_valid: true,
            messages: Vec::new(),
            recommendations: Vec::new(),
        }
    }

    fn pass(&mut self, dimension: Dimension, detail: String) {
        debug!("{dimension} check passed: {detail}");
        self.messages.push(CheckMessage::success(dimension, detail));
    }

    fn fail(&mut self, dimension: Dimension, detail: String, recommendations: Vec<String>) {
        warn!("{dimension} check failed: {detail}");
        self.is_valid = false;
        self.messages.push(CheckMessage::failure(dimension, detail));
        self.recommendations.extend(recommendations);
    }

    pub fn failure_count(&self) -> usize {
        count_failures(&self.messages)
    }

    /// Messages with their pass/fail glyph prefix.
    pub fn rendered_messages(&self) -> Vec<String> {
        self.messages.iter().map(CheckMessage::render).collect()
    }

    pub fn print(&self) {
        Console::title("Resources:");
        Console::info("CPU", &format!("{} cores", self.available_cpu));
        Console::info("Memory", &format!("{:.1} GB", self.available_memory_gb));
        Console::info("Free Disk", &format!("{:.1} GB", self.available_disk_gb));
        for message in &self.messages {
            message.print();
        }
    }
}

/// Compares `requirement` against live readings from `probe`.
///
/// Probes run CPU, memory, disk; the first probe error aborts the whole check.
pub fn validate_resources(
    probe: &dyn PlatformProbe,
    requirement: &ResourceRequirement,
) -> Result<ResourceStatus, ProbeError> {
    let cpu = probe.cpu_count()?;
    let memory_gb = probe.total_memory_gb()?;
    let disk_gb = probe.available_disk_gb()?;
    debug!("Probed host: {cpu} cores, {memory_gb:.1} GB memory, {disk_gb:.1} GB free disk");

    let mut status = ResourceStatus::new(cpu, memory_gb, disk_gb);

    let cpu_detail = format!(
        "{}: {cpu} cores available ({} cores required)",
        Dimension::Cpu,
        requirement.min_cpu
    );
    if cpu < requirement.min_cpu {
        let missing = requirement.min_cpu - cpu;
        status.fail(
            Dimension::Cpu,
            cpu_detail,
            vec![
                format!(
                    "Add at least {missing} more CPU core(s) or reduce the CPU requested per node"
                ),
                "Reduce the number of worker nodes".to_string(),
            ],
        );
    } else {
        status.pass(Dimension::Cpu, cpu_detail);
    }

    let memory_detail = format!(
        "{}: {memory_gb:.1} GB available ({:.1} GB required)",
        Dimension::Memory,
        requirement.min_memory_gb
    );
    if memory_gb < requirement.min_memory_gb {
        let missing = requirement.min_memory_gb - memory_gb;
        status.fail(
            Dimension::Memory,
            memory_detail,
            vec![
                format!("Free up {missing:.1} GB of memory"),
                "Close unnecessary applications".to_string(),
            ],
        );
    } else {
        status.pass(Dimension::Memory, memory_detail);
    }

    let disk_detail = format!(
        "{}: {disk_gb:.1} GB available ({:.1} GB required)",
        Dimension::Disk,
        requirement.min_disk_gb
    );
    if disk_gb < requirement.min_disk_gb {
        let missing = requirement.min_disk_gb - disk_gb;
        status.fail(
            Dimension::Disk,
            disk_detail,
            vec![
                format!("Free up {missing:.1} GB of disk space"),
                "Clean up disk space (unused images, build caches, logs)".to_string(),
            ],
        );
    } else {
        status.pass(Dimension::Disk, disk_detail);
    }

    Ok(status)
}
