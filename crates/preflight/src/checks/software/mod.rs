pub mod port;

pub use port::{check_port, validate_port, PortStatus, REQUIRED_PORT};
