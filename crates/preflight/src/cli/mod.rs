pub mod command;

pub use command::{error_line, Cli, ClusterArgs, Commands};
