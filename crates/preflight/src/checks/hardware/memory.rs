use crate::error::ProbeError;
use sysinfo::{MemoryRefreshKind, RefreshKind, System};

pub const BYTES_TO_GB: f64 = 1024.0 * 1024.0 * 1024.0;

pub fn bytes_to_gb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_TO_GB
}

/// Total physical memory in GB. A zero reading means the OS query failed.
pub fn get_total_memory_gb() -> Result<f64, ProbeError> {
    let sys = System::new_with_specifics(
        RefreshKind::new().with_memory(MemoryRefreshKind::new().with_ram()),
    );
    match sys.total_memory() {
        0 => Err(ProbeError::Memory),
        total => Ok(bytes_to_gb(total)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_to_gb() {
        assert_eq!(bytes_to_gb(8 * 1024 * 1024 * 1024), 8.0);
        assert_eq!(bytes_to_gb(512 * 1024 * 1024), 0.5);
    }

    #[test]
    fn test_total_memory_is_positive() {
        let total = get_total_memory_gb().unwrap();
        assert!(total > 0.0, "Total memory should be greater than 0");
    }
}
