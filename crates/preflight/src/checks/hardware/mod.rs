pub mod cpu;
pub mod hardware_check;
pub mod memory;
pub mod storage;

pub use hardware_check::{validate_resources, ResourceStatus};
