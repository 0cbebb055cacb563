use serde::{Deserialize, Serialize};

/// Reachability status of a monitored site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteStatus {
    /// No probe has completed yet
    #[default]
    Pending,
    Up,
    Down,
}

impl std::fmt::Display for SiteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SiteStatus::Pending => write!(f, "pending"),
            SiteStatus::Up => write!(f, "up"),
            SiteStatus::Down => write!(f, "down"),
        }
    }
}

/// Outcome of a single reachability probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeResult {
    /// Whether the request resolved without a transport error
    pub reachable: bool,

    /// Wall-clock time from request start to resolution or rejection
    pub latency_ms: u64,
}

impl ProbeResult {
    pub fn reachable(latency_ms: u64) -> Self {
        Self { reachable: true, latency_ms }
    }

    pub fn unreachable(latency_ms: u64) -> Self {
        Self { reachable: false, latency_ms }
    }
}

/// Classification of a status change between two consecutive probes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Status unchanged (up to up, down to down)
    None,
    /// Down to up
    Recovered,
    /// Up to down
    Degraded,
    /// The previous status was pending
    FirstResult,
}

impl std::fmt::Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Transition::None => write!(f, "none"),
            Transition::Recovered => write!(f, "recovered"),
            Transition::Degraded => write!(f, "degraded"),
            Transition::FirstResult => write!(f, "first-result"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&SiteStatus::Pending).unwrap(), "\"pending\"");
        assert_eq!(serde_json::to_string(&SiteStatus::Up).unwrap(), "\"up\"");
        assert_eq!(serde_json::from_str::<SiteStatus>("\"down\"").unwrap(), SiteStatus::Down);
    }

    #[test]
    fn test_unknown_status_rejected() {
        assert!(serde_json::from_str::<SiteStatus>("\"degraded\"").is_err());
    }
}
