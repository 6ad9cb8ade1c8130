use crate::checks::issue::{count_failures, CheckMessage, Dimension};
use crate::checks::probe::PlatformProbe;
use log::{debug, warn};
use serde::Serialize;
use std::io::ErrorKind;
use std::net::{Ipv4Addr, Ipv6Addr, TcpListener};

/// Port the cluster API server must be able to listen on.
pub const REQUIRED_PORT: u16 = 6443;

/// Binds `[::]:<port>` (dual-stack) and releases it straight away.
///
/// Falls back to `0.0.0.0:<port>` on hosts without IPv6.
pub fn try_bind_port(port: u16) -> std::io::Result<()> {
    let listener = match TcpListener::bind((Ipv6Addr::UNSPECIFIED, port)) {
        Ok(listener) => listener,
        Err(e) if ipv6_unavailable(&e) => {
            debug!("IPv6 unavailable ({e}), checking port {port} on IPv4 only");
            TcpListener::bind((Ipv4Addr::UNSPECIFIED, port))?
        }
        Err(e) => return Err(e),
    };
    release_listener(listener, port);
    Ok(())
}

fn ipv6_unavailable(err: &std::io::Error) -> bool {
    matches!(err.kind(), ErrorKind::AddrNotAvailable | ErrorKind::Unsupported)
        || address_family_unsupported(err)
}

#[cfg(unix)]
fn address_family_unsupported(err: &std::io::Error) -> bool {
    err.raw_os_error() == Some(libc::EAFNOSUPPORT)
}

#[cfg(not(unix))]
fn address_family_unsupported(_err: &std::io::Error) -> bool {
    false
}

#[cfg(unix)]
fn release_listener(listener: TcpListener, port: u16) {
    use std::os::unix::io::IntoRawFd;

    let fd = listener.into_raw_fd();
    if unsafe { libc::close(fd) } != 0 {
        warn!(
            "Failed to release test listener on port {port}: {}",
            std::io::Error::last_os_error()
        );
    }
}

#[cfg(not(unix))]
fn release_listener(listener: TcpListener, _port: u16) {
    drop(listener);
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortStatus {
    pub port: u16,
    pub is_open: bool,
    pub messages: Vec<CheckMessage>,
    pub recommendations: Vec<String>,
}

impl PortStatus {
    pub const fn is_valid(&self) -> bool {
        self.is_open
    }

    pub fn failure_count(&self) -> usize {
        count_failures(&self.messages)
    }

    pub fn rendered_messages(&self) -> Vec<String> {
        self.messages.iter().map(CheckMessage::render).collect()
    }

    pub fn print(&self) {
        for message in &self.messages {
            message.print();
        }
    }
}

/// Checks that [`REQUIRED_PORT`] is free.
pub fn validate_port(probe: &dyn PlatformProbe) -> PortStatus {
    check_port(probe, REQUIRED_PORT)
}

pub fn check_port(probe: &dyn PlatformProbe, port: u16) -> PortStatus {
    if probe.is_port_bound(port) {
        warn!("Port {port} is already in use");
        PortStatus {
            port,
            is_open: false,
            messages: vec![CheckMessage::failure(
                Dimension::Port,
                format!("Port {port} is already in use"),
            )],
            recommendations: vec![format!(
                "Free up port {port} or configure a different port"
            )],
        }
    } else {
        debug!("Port {port} is available");
        PortStatus {
            port,
            is_open: true,
            messages: vec![CheckMessage::success(
                Dimension::Port,
                format!("Port {port} is available"),
            )],
            recommendations: Vec::new(),
        }
    }
}
