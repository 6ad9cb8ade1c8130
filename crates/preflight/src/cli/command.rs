use crate::checks::issue::FAILURE_GLYPH;
use crate::checks::software::REQUIRED_PORT;
use crate::checks::{PreflightReport, SystemProbe};
use crate::console::Console;
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;
use shared::models::{ClusterShape, NodeSpec, ResourceRequirement};

const APP_VERSION: &str = match option_env!("PREFLIGHT_VERSION") {
    Some(version) => version,
    None => env!("CARGO_PKG_VERSION"),
};

#[derive(Parser)]
#[command(author, version = APP_VERSION, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "PREFLIGHT_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check this host against the cluster requirements
    Check {
        #[command(flatten)]
        cluster: ClusterArgs,

        /// Port that must be free on this host
        #[arg(long, env = "PREFLIGHT_PORT", default_value_t = REQUIRED_PORT)]
        port: u16,

        /// Print the report as JSON instead of formatted text
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Print the aggregate requirement without probing the host
    Requirements {
        #[command(flatten)]
        cluster: ClusterArgs,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ClusterArgs {
    /// CPU cores for the master node
    #[arg(long, env = "PREFLIGHT_MASTER_CPU", default_value_t = 2)]
    pub master_cpu: u32,

    /// Memory for the master node, e.g. 4G or 4096M
    #[arg(long, env = "PREFLIGHT_MASTER_MEMORY", default_value = "4G")]
    pub master_memory: String,

    /// Disk for the master node, e.g. 20G or 1T
    #[arg(long, env = "PREFLIGHT_MASTER_DISK", default_value = "20G")]
    pub master_disk: String,

    /// CPU cores per worker node
    #[arg(long, env = "PREFLIGHT_WORKER_CPU", default_value_t = 2)]
    pub worker_cpu: u32,

    /// Memory per worker node
    #[arg(long, env = "PREFLIGHT_WORKER_MEMORY", default_value = "2G")]
    pub worker_memory: String,

    /// Disk per worker node
    #[arg(long, env = "PREFLIGHT_WORKER_DISK", default_value = "10G")]
    pub worker_disk: String,

    /// Number of worker nodes
    #[arg(long, env = "PREFLIGHT_WORKERS", default_value_t = 0)]
    pub workers: u32,
}

impl ClusterArgs {
    pub fn shape(&self) -> ClusterShape {
        ClusterShape {
            master: NodeSpec::new(self.master_cpu, &self.master_memory, &self.master_disk),
            worker: NodeSpec::new(self.worker_cpu, &self.worker_memory, &self.worker_disk),
            worker_count: self.workers,
        }
    }

    pub fn requirement(&self) -> Result<ResourceRequirement> {
        self.shape()
            .requirement()
            .context("Invalid cluster shape")
    }
}

/// One-line rendering of a command error, context chain included.
pub fn error_line(err: &anyhow::Error) -> String {
    format!("{FAILURE_GLYPH} {err:#}")
}

impl Cli {
    /// Runs the selected command. `Ok(false)` means the host was rejected.
    pub fn run(&self) -> Result<bool> {
        match &self.command {
            Commands::Check {
                cluster,
                port,
                json,
            } => {
                let requirement = cluster.requirement()?;
                info!(
                    "Checking host for 1 master and {} worker(s) on port {port}",
                    cluster.workers
                );

                let report = PreflightReport::run(&SystemProbe::new(), requirement, *port)
                    .context("Preflight check failed")?;

                if *json {
                    println!("{}", serde_json::to_string_pretty(&report)?);
                } else {
                    report.print();
                }
                Ok(report.is_valid())
            }
            Commands::Requirements { cluster } => {
                let requirement = cluster.requirement()?;
                info!(
                    "Aggregating requirement for 1 master and {} worker(s)",
                    cluster.workers
                );
                Console::title("Required:");
                println!("{requirement}");
                Ok(true)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_check_defaults() {
        let cli = Cli::try_parse_from(["preflight", "check"]).unwrap();
        let Commands::Check {
            cluster,
            port,
            json,
        } = cli.command
        else {
            panic!("expected check command");
        };

        assert_eq!(port, REQUIRED_PORT);
        assert!(!json);
        let requirement = cluster.requirement().unwrap();
        assert_eq!(requirement.min_cpu, 2);
        assert_eq!(requirement.min_memory_gb, 4.0);
        assert_eq!(requirement.min_disk_gb, 20.0);
    }

    #[test]
    fn test_check_with_workers() {
        let cli = Cli::try_parse_from([
            "preflight",
            "check",
            "--workers",
            "2",
            "--worker-memory",
            "2048M",
            "--master-disk",
            "1T",
            "--port",
            "7000",
        ])
        .unwrap();
        let Commands::Check { cluster, port, .. } = cli.command else {
            panic!("expected check command");
        };

        assert_eq!(port, 7000);
        let requirement = cluster.requirement().unwrap();
        assert_eq!(requirement.min_cpu, 6);
        assert_eq!(requirement.min_memory_gb, 8.0);
        assert_eq!(requirement.min_disk_gb, 1044.0);
    }

    #[test]
    fn test_invalid_size_is_reported_with_field() {
        let cli =
            Cli::try_parse_from(["preflight", "requirements", "--worker-disk", "10"]).unwrap();
        let err = cli.run().unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("Invalid cluster shape"));
        assert!(message.contains("worker disk"));
    }

    #[test]
    fn test_error_line_is_single_line_with_context() {
        let cli =
            Cli::try_parse_from(["preflight", "requirements", "--master-memory", "1T"]).unwrap();
        let line = error_line(&cli.run().unwrap_err());

        assert!(line.starts_with("✗ Invalid cluster shape: "));
        assert!(line.contains("master memory"));
        assert_eq!(line.lines().count(), 1);
    }
}
