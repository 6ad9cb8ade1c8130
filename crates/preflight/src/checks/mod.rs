pub mod hardware;
pub mod issue;
pub mod probe;
pub mod report;
pub mod software;

pub use probe::{PlatformProbe, SystemProbe};
pub use report::PreflightReport;
