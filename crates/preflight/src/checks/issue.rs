use crate::console::Console;
use serde::Serialize;
use std::fmt;

pub const SUCCESS_GLYPH: &str = "✓";
pub const FAILURE_GLYPH: &str = "✗";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Failure,
}

impl Severity {
    pub const fn glyph(&self) -> &'static str {
        match self {
            Self::Success => SUCCESS_GLYPH,
            Self::Failure => FAILURE_GLYPH,
        }
    }

    /// Classifies a rendered message by its glyph prefix.
    pub fn from_rendered(message: &str) -> Option<Self> {
        if message.starts_with(SUCCESS_GLYPH) {
            Some(Self::Success)
        } else if message.starts_with(FAILURE_GLYPH) {
            Some(Self::Failure)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Cpu,
    Memory,
    Disk,
    Port,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Cpu => "CPU",
            Self::Memory => "Memory",
            Self::Disk => "Disk",
            Self::Port => "Port",
        };
        write!(f, "{label}")
    }
}

/// One outcome line of a check. Glyphs are only added when rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckMessage {
    pub severity: Severity,
    pub dimension: Dimension,
    pub detail: String,
}

impl CheckMessage {
    pub fn success(dimension: Dimension, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            dimension,
            detail: detail.into(),
        }
    }

    pub fn failure(dimension: Dimension, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Failure,
            dimension,
            detail: detail.into(),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Failure
    }

    pub fn render(&self) -> String {
        format!("{} {}", self.severity.glyph(), self.detail)
    }

    pub fn print(&self) {
        match self.severity {
            Severity::Success => Console::success(&self.detail),
            Severity::Failure => Console::error(&self.detail),
        }
    }
}

impl fmt::Display for CheckMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

pub fn count_failures(messages: &[CheckMessage]) -> usize {
    messages.iter().filter(|m| m.is_failure()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_prefixes_glyph() {
        let ok = CheckMessage::success(Dimension::Cpu, "CPU: 4 cores available (2 cores required)");
        let bad = CheckMessage::failure(Dimension::Port, "Port 6443 is already in use");

        assert_eq!(ok.render(), "✓ CPU: 4 cores available (2 cores required)");
        assert_eq!(bad.to_string(), "✗ Port 6443 is already in use");
    }

    #[test]
    fn test_rendered_prefix_matches_severity() {
        let messages = [
            CheckMessage::success(Dimension::Memory, "fine"),
            CheckMessage::failure(Dimension::Disk, "short"),
        ];
        for message in &messages {
            assert_eq!(
                Severity::from_rendered(&message.render()),
                Some(message.severity)
            );
        }
        assert_eq!(Severity::from_rendered("no glyph"), None);
        assert_eq!(count_failures(&messages), 1);
    }
}
