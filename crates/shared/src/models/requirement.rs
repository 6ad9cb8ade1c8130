use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

const MB_PER_GB: f64 = 1024.0;
const GB_PER_TB: f64 = 1024.0;

lazy_static! {
    static ref MEMORY_SIZE: Regex = Regex::new(r"^([0-9]+)([MmGg])$").unwrap();
    static ref DISK_SIZE: Regex = Regex::new(r"^([0-9]+)([MmGgTt])$").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("Invalid {field} '{value}': expected format {expected}")]
    InvalidSize {
        field: String,
        value: String,
        expected: &'static str,
    },
}

/// Which unit set a size string may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeKind {
    Memory,
    Disk,
}

impl SizeKind {
    pub const fn expected_format(&self) -> &'static str {
        match self {
            Self::Memory => "<number>[M|G] (e.g. 512M, 4G)",
            Self::Disk => "<number>[M|G|T] (e.g. 500M, 20G, 1T)",
        }
    }

    fn pattern(&self) -> &'static Regex {
        match self {
            Self::Memory => &MEMORY_SIZE,
            Self::Disk => &DISK_SIZE,
        }
    }
}

/// Parses a size such as `2048M`, `4G` or `1T` into gigabytes.
///
/// `field` names the input in the error message, e.g. `master memory`.
pub fn parse_size(value: &str, kind: SizeKind, field: &str) -> Result<f64, FormatError> {
    let invalid = || FormatError::InvalidSize {
        field: field.to_string(),
        value: value.to_string(),
        expected: kind.expected_format(),
    };

    let captures = kind.pattern().captures(value).ok_or_else(invalid)?;
    let amount = captures[1].parse::<u64>().map_err(|_| invalid())? as f64;

    let gb = match captures[2].to_ascii_uppercase().as_str() {
        "M" => amount / MB_PER_GB,
        "G" => amount,
        "T" => amount * GB_PER_TB,
        _ => return Err(invalid()),
    };
    Ok(gb)
}

/// Raw size inputs for a single node role.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct NodeSpec {
    pub cpu: u32,
    pub memory: String,
    pub disk: String,
}

impl NodeSpec {
    pub fn new(cpu: u32, memory: impl Into<String>, disk: impl Into<String>) -> Self {
        Self {
            cpu,
            memory: memory.into(),
            disk: disk.into(),
        }
    }
}

/// A master node plus `worker_count` identical workers.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ClusterShape {
    pub master: NodeSpec,
    pub worker: NodeSpec,
    pub worker_count: u32,
}

impl ClusterShape {
    pub fn requirement(&self) -> Result<ResourceRequirement, FormatError> {
        ResourceRequirement::from_cluster(
            self.master.cpu,
            &self.master.memory,
            &self.master.disk,
            self.worker.cpu,
            &self.worker.memory,
            &self.worker.disk,
            self.worker_count,
        )
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Default)]
pub struct ResourceRequirement {
    pub min_cpu: u32,
    pub min_memory_gb: f64,
    pub min_disk_gb: f64,
}

impl ResourceRequirement {
    /// Sums the master requirement with `worker_count` copies of the worker
    /// requirement, one dimension at a time.
    ///
    /// Sizes are parsed master memory, worker memory, master disk, worker disk;
    /// the first invalid one is returned.
    #[allow(clippy::too_many_arguments)]
    pub fn from_cluster(
        master_cpu: u32,
        master_memory: &str,
        master_disk: &str,
        worker_cpu: u32,
        worker_memory: &str,
        worker_disk: &str,
        worker_count: u32,
    ) -> Result<Self, FormatError> {
        let master_memory_gb = parse_size(master_memory, SizeKind::Memory, "master memory")?;
        let worker_memory_gb = parse_size(worker_memory, SizeKind::Memory, "worker memory")?;
        let master_disk_gb = parse_size(master_disk, SizeKind::Disk, "master disk")?;
        let worker_disk_gb = parse_size(worker_disk, SizeKind::Disk, "worker disk")?;

        let workers = f64::from(worker_count);
        Ok(Self {
            min_cpu: master_cpu.saturating_add(worker_cpu.saturating_mul(worker_count)),
            min_memory_gb: master_memory_gb + worker_memory_gb * workers,
            min_disk_gb: master_disk_gb + worker_disk_gb * workers,
        })
    }
}

impl fmt::Display for ResourceRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CPU: {} cores", self.min_cpu)?;
        writeln!(f, "Memory: {:.1} GB", self.min_memory_gb)?;
        write!(f, "Disk: {:.1} GB", self.min_disk_gb)
    }
}
