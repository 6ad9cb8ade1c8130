use super::hardware::{validate_resources, ResourceStatus};
use super::probe::PlatformProbe;
use super::software::{check_port, PortStatus};
use crate::console::Console;
use crate::error::Result;
use serde::Serialize;
use shared::models::ResourceRequirement;

/// Combined outcome of the resource and port checks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreflightReport {
    pub requirement: ResourceRequirement,
    pub resources: ResourceStatus,
    pub port: PortStatus,
}

impl PreflightReport {
    pub fn run(
        probe: &dyn PlatformProbe,
        requirement: ResourceRequirement,
        port: u16,
    ) -> Result<Self> {
        let resources = validate_resources(probe, &requirement)?;
        let port = check_port(probe, port);
        Ok(Self {
            requirement,
            resources,
            port,
        })
    }

    pub fn is_valid(&self) -> bool {
        self.resources.is_valid && self.port.is_valid()
    }

    pub fn failure_count(&self) -> usize {
        self.resources.failure_count() + self.port.failure_count()
    }

    pub fn recommendations(&self) -> impl Iterator<Item = &String> {
        self.resources
            .recommendations
            .iter()
            .chain(self.port.recommendations.iter())
    }

    pub fn print(&self) {
        Console::section("Preflight Checks");
        Console::title("Required:");
        for line in self.requirement.to_string().lines() {
            if let Some((label, value)) = line.split_once(": ") {
                Console::info(label, value);
            }
        }

        self.resources.print();
        Console::title("Port:");
        self.port.print();

        let mut recommendations = self.recommendations().peekable();
        if recommendations.peek().is_some() {
            Console::title("Recommendations:");
            for recommendation in recommendations {
                Console::progress(recommendation);
            }
        }

        if self.is_valid() {
            Console::success("Host is ready for provisioning");
        } else {
            Console::error(&format!(
                "Host is not ready for provisioning ({} failed check(s))",
                self.failure_count()
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::probe::mock::MockProbe;
    use crate::checks::software::REQUIRED_PORT;
    use crate::error::PreflightError;

    fn requirement() -> ResourceRequirement {
        ResourceRequirement {
            min_cpu: 2,
            min_memory_gb: 4.0,
            min_disk_gb: 10.0,
        }
    }

    #[test]
    fn test_report_accepts_ready_host() {
        let probe = MockProbe::new(4, 8.0, 20.0);
        let report = PreflightReport::run(&probe, requirement(), REQUIRED_PORT).unwrap();

        assert!(report.is_valid());
        assert_eq!(report.failure_count(), 0);
        assert_eq!(report.recommendations().count(), 0);
    }

    #[test]
    fn test_report_rejects_on_busy_port_alone() {
        let probe = MockProbe::new(4, 8.0, 20.0).with_bound_port(REQUIRED_PORT);
        let report = PreflightReport::run(&probe, requirement(), REQUIRED_PORT).unwrap();

        assert!(report.resources.is_valid);
        assert!(!report.is_valid());
        assert_eq!(report.failure_count(), 1);
        assert_eq!(report.recommendations().count(), 1);
    }

    #[test]
    fn test_report_collects_all_recommendations() {
        let probe = MockProbe::new(1, 1.0, 1.0).with_bound_port(8080);
        let report = PreflightReport::run(&probe, requirement(), 8080).unwrap();

        assert_eq!(report.failure_count(), 4);
        assert_eq!(report.recommendations().count(), 7);
    }

    #[test]
    fn test_report_propagates_probe_error() {
        let mut probe = MockProbe::new(4, 8.0, 20.0);
        probe.fail_disk = true;
        let result = PreflightReport::run(&probe, requirement(), REQUIRED_PORT);
        assert!(matches!(result, Err(PreflightError::Probe(_))));
    }

    #[test]
    fn test_report_serializes_structured_messages() {
        let probe = MockProbe::new(1, 8.0, 20.0);
        let report = PreflightReport::run(&probe, requirement(), REQUIRED_PORT).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["resources"]["is_valid"], false);
        assert_eq!(json["resources"]["messages"][0]["severity"], "failure");
        assert_eq!(json["resources"]["messages"][0]["dimension"], "cpu");
        assert_eq!(json["port"]["is_open"], true);
        assert_eq!(json["requirement"]["min_cpu"], 2);
    }
}
