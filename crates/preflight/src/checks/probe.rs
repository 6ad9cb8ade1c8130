use super::hardware::{cpu, memory, storage};
use super::software::port;
use crate::error::ProbeError;

/// Host readings the validators depend on.
///
/// `SystemProbe` queries the real machine; tests pass deterministic stand-ins.
pub trait PlatformProbe {
    fn cpu_count(&self) -> Result<u32, ProbeError>;

    fn total_memory_gb(&self) -> Result<f64, ProbeError>;

    /// Free space on the filesystem of the current working directory.
    fn available_disk_gb(&self) -> Result<f64, ProbeError>;

    /// True when a TCP listener cannot be bound on the port.
    fn is_port_bound(&self, port: u16) -> bool;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProbe;

impl SystemProbe {
    pub fn new() -> Self {
        Self
    }
}

impl PlatformProbe for SystemProbe {
    fn cpu_count(&self) -> Result<u32, ProbeError> {
        cpu::get_cpu_count()
    }

    fn total_memory_gb(&self) -> Result<f64, ProbeError> {
        memory::get_total_memory_gb()
    }

    fn available_disk_gb(&self) -> Result<f64, ProbeError> {
        storage::get_available_disk_gb()
    }

    fn is_port_bound(&self, port: u16) -> bool {
        port::try_bind_port(port).is_err()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_probe_reads_host() {
        let probe = SystemProbe::new();
        assert!(probe.cpu_count().unwrap() >= 1);
        assert!(probe.total_memory_gb().unwrap() > 0.0);
    }
}
