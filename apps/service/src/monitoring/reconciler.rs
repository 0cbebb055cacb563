use super::types::{ProbeResult, SiteStatus, Transition};
use crate::notifier::Notice;

/// New state for a site derived from a probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reconciliation {
    pub status: SiteStatus,
    pub latency: u64,
    pub transition: Transition,
}

/// Map a probe onto the site's previous status
pub fn reconcile(previous: SiteStatus, probe: &ProbeResult) -> Reconciliation {
    let status = if probe.reachable { SiteStatus::Up } else { SiteStatus::Down };
    let latency = if probe.reachable { probe.latency_ms } else { 0 };

    let transition = match (previous, status) {
        (SiteStatus::Pending, _) => Transition::FirstResult,
        (SiteStatus::Down, SiteStatus::Up) => Transition::Recovered,
        (SiteStatus::Up, SiteStatus::Down) => Transition::Degraded,
        _ => Transition::None,
    };

    Reconciliation { status, latency, transition }
}

impl Transition {
    /// Notice to raise for this transition. Only state changes between
    /// settled statuses alert; a site that stays down stays quiet.
    pub fn notice(&self, url: &str) -> Option<Notice> {
        match self {
            Transition::Recovered => Some(Notice::success(format!("{url} is back UP!"))),
            Transition::Degraded => Some(Notice::error(format!("Alert: {url} is DOWN!"))),
            Transition::FirstResult | Transition::None => None,
        }
    }
}
