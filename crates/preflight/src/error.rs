use shared::models::FormatError;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, PreflightError>;

#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("Failed to detect CPU information")]
    Cpu,
    #[error("Failed to read system memory information")]
    Memory,
    #[error("Failed to resolve current working directory: {0}")]
    WorkingDirectory(#[source] std::io::Error),
    #[error("Failed to read filesystem statistics for {}: {source}", .path.display())]
    Disk {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Disk space detection is not supported on this platform")]
    Unsupported,
}

#[derive(Debug, thiserror::Error)]
pub enum PreflightError {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("Resource probe failed: {0}")]
    Probe(#[from] ProbeError),
}
