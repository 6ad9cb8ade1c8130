use crate::error::ProbeError;
use sysinfo::{CpuRefreshKind, RefreshKind, System};

/// Number of logical cores visible to the OS.
pub fn get_cpu_count() -> Result<u32, ProbeError> {
    let sys = System::new_with_specifics(RefreshKind::new().with_cpu(CpuRefreshKind::new()));
    match sys.cpus().len() {
        0 => Err(ProbeError::Cpu),
        count => Ok(u32::try_from(count).unwrap_or(u32::MAX)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpu_count_is_positive() {
        let cores = get_cpu_count().unwrap();
        assert!(cores >= 1);
    }
}
