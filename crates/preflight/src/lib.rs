pub mod checks;
pub mod cli;
pub mod console;
pub mod error;
pub mod utils;

pub use checks::{PlatformProbe, PreflightReport, SystemProbe};
pub use cli::Cli;
pub use error::{PreflightError, ProbeError, Result};
pub use utils::logging::setup_logging;
