use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{MissedTickBehavior, interval};

use super::checker::Prober;
use super::reconciler::{Reconciliation, reconcile};
use crate::database::SiteStore;
use crate::models::Site;
use crate::notifier::{Notice, Notifier};
use crate::registry::{RegistryError, SiteRegistry};
use crate::tui::bus::DashboardBus;

/// Requests accepted by a running scheduler
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedulerCommand {
    Add(String),
    Remove(i64),
    CheckNow,
    Shutdown,
}

/// Cloneable sender half used by the dashboard and CLI
#[derive(Debug, Clone)]
pub struct SchedulerHandle {
    tx: mpsc::Sender<SchedulerCommand>,
}

impl SchedulerHandle {
    pub fn channel(buffer: usize) -> (Self, mpsc::Receiver<SchedulerCommand>) {
        let (tx, rx) = mpsc::channel(buffer);
        (Self { tx }, rx)
    }

    pub async fn add(&self, url: impl Into<String>) -> bool {
        self.send(SchedulerCommand::Add(url.into())).await
    }

    pub async fn remove(&self, id: i64) -> bool {
        self.send(SchedulerCommand::Remove(id)).await
    }

    pub async fn check_now(&self) -> bool {
        self.send(SchedulerCommand::CheckNow).await
    }

    pub async fn shutdown(&self) -> bool {
        self.send(SchedulerCommand::Shutdown).await
    }

    async fn send(&self, command: SchedulerCommand) -> bool {
        if let Err(e) = self.tx.send(command).await {
            tracing::warn!("Scheduler is gone, dropping command: {}", e.0.describe());
            return false;
        }
        true
    }
}

impl SchedulerCommand {
    fn describe(&self) -> String {
        match self {
            SchedulerCommand::Add(url) => format!("add {url}"),
            SchedulerCommand::Remove(id) => format!("remove {id}"),
            SchedulerCommand::CheckNow => "check now".to_string(),
            SchedulerCommand::Shutdown => "shutdown".to_string(),
        }
    }
}

/// Monitoring scheduler - owns the registry and drives reconciliation
///
/// All registry mutation happens on the task that owns the scheduler, one
/// step at a time. A pass probes sites strictly in registry order and each
/// probe, reconciliation and store write finishes before the next probe starts.
pub struct MonitoringScheduler {
    registry: SiteRegistry,
    prober: Arc<dyn Prober>,
    store: Arc<dyn SiteStore>,
    notifier: Arc<dyn Notifier>,
    bus: DashboardBus,
    interval: Duration,
}

impl MonitoringScheduler {
    pub fn new(
        registry: SiteRegistry,
        prober: Arc<dyn Prober>,
        store: Arc<dyn SiteStore>,
        notifier: Arc<dyn Notifier>,
        bus: DashboardBus,
        interval: Duration,
    ) -> Self {
        Self { registry, prober, store, notifier, bus, interval }
    }

    /// Build a scheduler around the registry persisted in `store`
    pub async fn load(
        prober: Arc<dyn Prober>,
        store: Arc<dyn SiteStore>,
        notifier: Arc<dyn Notifier>,
        bus: DashboardBus,
        interval: Duration,
    ) -> anyhow::Result<Self> {
        let sites = store.load().await?;
        tracing::info!(count = sites.len(), "Loaded monitored sites");
        Ok(Self::new(SiteRegistry::from_sites(sites), prober, store, notifier, bus, interval))
    }

    pub fn registry(&self) -> &SiteRegistry {
        &self.registry
    }

    pub fn sites(&self) -> &[Site] {
        self.registry.all()
    }

    /// Add a site and probe it right away
    pub async fn add_site(&mut self, input: &str) -> Result<Site, RegistryError> {
        let site = match self.registry.add(input) {
            Ok(site) => site,
            Err(e) => {
                tracing::info!(input, error = %e, "Rejected site");
                self.notifier.notify(Notice::error(e.to_string()));
                return Err(e);
            }
        };

        tracing::info!(id = site.id, url = %site.url, "Added site");
        self.persist().await;
        self.bus.publish_sites(self.registry.all());
        self.notifier.notify(Notice::success("Website added successfully"));

        self.check_site(site.id).await;
        Ok(self.registry.get(site.id).cloned().unwrap_or(site))
    }

    /// Remove a site. Unknown ids are ignored.
    pub async fn remove_site(&mut self, id: i64) -> Option<Site> {
        let removed = self.registry.remove(id)?;
        tracing::info!(id, url = %removed.url, "Removed site");
        self.persist().await;
        self.bus.publish_sites(self.registry.all());
        Some(removed)
    }

    /// Probe one site and fold the outcome into the registry
    pub async fn check_site(&mut self, id: i64) -> Option<Reconciliation> {
        let (url, previous) = {
            let site = self.registry.get(id)?;
            (site.url.clone(), site.status)
        };

        let probe = self.prober.probe(&url).await;
        let outcome = reconcile(previous, &probe);

        tracing::debug!(
            id,
            url = %url,
            status = %outcome.status,
            latency = outcome.latency,
            transition = %outcome.transition,
            "Reconciled site"
        );

        self.registry.update(id, outcome.status, outcome.latency);
        self.persist().await;

        if let Some(notice) = outcome.transition.notice(&url) {
            self.notifier.notify(notice);
        }
        self.bus.publish_sites(self.registry.all());

        Some(outcome)
    }

    /// One sequential sweep over every site in registry order
    pub async fn run_pass(&mut self) -> usize {
        let ids = self.registry.ids();
        let mut checked = 0;

        for id in ids {
            if self.check_site(id).await.is_some() {
                checked += 1;
            }
        }

        tracing::debug!(checked, "Reconciliation pass finished");
        self.bus.publish_pass_finished(checked);
        checked
    }

    /// Run until shut down or every handle is dropped.
    ///
    /// The first tick fires immediately, so a non-empty registry is checked on
    /// startup. Commands are only picked up between passes.
    pub async fn run(mut self, mut commands: mpsc::Receiver<SchedulerCommand>) -> Self {
        let mut timer = interval(self.interval);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        self.bus.publish_sites(self.registry.all());

        loop {
            tokio::select! {
                _ = timer.tick() => {
                    if !self.registry.is_empty() {
                        self.run_pass().await;
                    }
                }
                command = commands.recv() => match command {
                    Some(SchedulerCommand::Add(url)) => {
                        let _ = self.add_site(&url).await;
                    }
                    Some(SchedulerCommand::Remove(id)) => {
                        self.remove_site(id).await;
                    }
                    Some(SchedulerCommand::CheckNow) => {
                        self.run_pass().await;
                    }
                    Some(SchedulerCommand::Shutdown) | None => {
                        tracing::info!("Scheduler stopping");
                        break;
                    }
                },
            }
        }

        self
    }

    /// Write the full registry. Failures are reported and the in-memory state
    /// is kept; the next successful write carries the complete snapshot.
    async fn persist(&self) {
        if let Err(e) = self.store.save(self.registry.all()).await {
            tracing::error!("Failed to save sites: {:#}", e);
            self.notifier.notify(Notice::error(format!("Failed to save sites: {e}")));
        }
    }
}
