use std::time::SystemTime;

use tokio::sync::broadcast;
use tracing::debug;

use crate::models::Site;
use crate::notifier::Notice;

#[derive(Debug, Clone)]
pub enum DashboardEvent {
    /// Full registry after a mutation or reconciliation
    Sites(Vec<Site>),
    /// Transient notice to show as a toast
    Toast(Notice),
    /// A reconciliation pass over every site finished
    PassFinished { checked: usize, at: SystemTime },
}

/// Broadcast channel between the scheduler and whoever renders its state.
///
/// Cloning shares the same channel. Publishing with no subscribers is fine.
#[derive(Debug, Clone)]
pub struct DashboardBus {
    tx: broadcast::Sender<DashboardEvent>,
}

impl DashboardBus {
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel::<DashboardEvent>(64);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<DashboardEvent> {
        self.tx.subscribe()
    }

    pub fn publish_sites(&self, sites: &[Site]) {
        debug!(count = sites.len(), "Dashboard bus: publishing sites");
        self.publish(DashboardEvent::Sites(sites.to_vec()));
    }

    pub fn publish_toast(&self, notice: Notice) {
        self.publish(DashboardEvent::Toast(notice));
    }

    pub fn publish_pass_finished(&self, checked: usize) {
        debug!(checked, "Dashboard bus: pass finished");
        self.publish(DashboardEvent::PassFinished { checked, at: SystemTime::now() });
    }

    fn publish(&self, ev: DashboardEvent) {
        // Ignore errors if there are no receivers
        let _ = self.tx.send(ev);
    }
}

impl Default for DashboardBus {
    fn default() -> Self {
        Self::new()
    }
}
