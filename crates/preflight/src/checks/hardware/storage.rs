use super::memory::BYTES_TO_GB;
use crate::error::ProbeError;
use std::env;
use std::path::Path;

/// Free space on the filesystem holding the current working directory, in GB.
pub fn get_available_disk_gb() -> Result<f64, ProbeError> {
    let current_dir = env::current_dir().map_err(ProbeError::WorkingDirectory)?;
    get_available_space_gb(&current_dir)
}

/// Space available to unprivileged users (`f_bavail`) on the filesystem containing `path`.
#[cfg(unix)]
pub fn get_available_space_gb(path: &Path) -> Result<f64, ProbeError> {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let path_c = CString::new(path.as_os_str().as_bytes()).map_err(|e| ProbeError::Disk {
        path: path.to_path_buf(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidInput, e),
    })?;

    let mut stat: libc::statvfs = unsafe { std::mem::zeroed() };
    if unsafe { libc::statvfs(path_c.as_ptr(), &mut stat) } != 0 {
        return Err(ProbeError::Disk {
            path: path.to_path_buf(),
            source: std::io::Error::last_os_error(),
        });
    }

    #[allow(clippy::useless_conversion)]
    let bavail = u64::from(stat.f_bavail);
    #[allow(clippy::useless_conversion)]
    let frsize = u64::from(stat.f_frsize);
    Ok(bavail.saturating_mul(frsize) as f64 / BYTES_TO_GB)
}

#[cfg(not(unix))]
pub fn get_available_space_gb(_path: &Path) -> Result<f64, ProbeError> {
    Err(ProbeError::Unsupported)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[cfg(unix)]
    #[serial]
    fn test_available_disk_in_temp_dir() {
        let previous = env::current_dir().expect("Failed to read current directory");
        let scratch = tempfile::tempdir().expect("Failed to create temp directory");
        env::set_current_dir(scratch.path()).expect("Failed to change to temp directory");

        let free = get_available_disk_gb();
        env::set_current_dir(previous).expect("Failed to restore current directory");

        let free = free.unwrap();
        assert!(free >= 0.0, "Free storage should be non-negative");
    }

    #[test]
    #[cfg(unix)]
    fn test_missing_path_is_disk_error() {
        let result = get_available_space_gb(Path::new("/definitely/not/a/real/path"));
        assert!(matches!(result, Err(ProbeError::Disk { .. })));
    }
}
