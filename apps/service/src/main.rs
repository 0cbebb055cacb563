mod config;
mod database;
mod models;
mod monitoring;
mod notifier;
mod pool;
mod registry;
mod tui;
mod validation;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};

use config::{Config, ConfigSource};
use database::{LibsqlStore, MemoryStore, SiteStore};
use models::Site;
use monitoring::{HttpProber, MonitoringScheduler, Prober, SchedulerHandle};
use notifier::{DashboardNotifier, LogNotifier, Notifier};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tui::bus::{DashboardBus, DashboardEvent};

#[derive(Debug, Parser)]
#[command(name = "pingnotify", version, about = "Keep an eye on your websites")]
struct Cli {
    /// Path to the config file (defaults to ~/.config/pingnotify/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Keep sites in memory only; nothing is read from or written to disk
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Live dashboard with background checks (default)
    Dashboard,
    /// Run checks in the foreground and log state changes
    Watch,
    /// Add a website and check it once
    Add { url: String },
    /// Stop monitoring a website
    Remove { id: i64 },
    /// List monitored websites with their last known status
    List,
    /// Check every website once and print the results
    Check,
    /// Print the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Dashboard);
    let (config, source) = Config::from_config(cli.config.as_ref())?;

    // The dashboard owns the terminal, so its logs go to a file
    let _log_guard = match command {
        Command::Dashboard => Some(logger::init_file(&config.storage.log_path)),
        _ => {
            logger::init();
            None
        }
    };

    match &source {
        ConfigSource::Created(path) => tracing::info!(path = %path.display(), "Wrote default config"),
        ConfigSource::Existing(path) => tracing::debug!(path = %path.display(), "Loaded config"),
    }

    if let Command::Config = command {
        println!("{config}");
        return Ok(());
    }

    let store = open_store(&config, cli.ephemeral).await?;
    let prober: Arc<dyn Prober> = Arc::new(HttpProber::new(config.monitoring.probe_timeout())?);
    let bus = DashboardBus::new();
    let interval = Duration::from_secs(config.monitoring.interval_seconds);

    let notifier: Arc<dyn Notifier> = match command {
        Command::Dashboard => {
            Arc::new(DashboardNotifier::new(bus.clone(), config.notifications.system_alerts))
        }
        _ => Arc::new(LogNotifier),
    };

    let mut scheduler =
        MonitoringScheduler::load(prober, store, notifier, bus.clone(), interval).await?;

    match command {
        Command::Dashboard => {
            let initial = scheduler.sites().to_vec();
            let (handle, bus_rx, task) = spawn_scheduler(scheduler, &bus, 32);

            let toast = Duration::from_secs(config.notifications.toast_seconds);
            let outcome = tui::run_dashboard(initial, bus_rx, handle.clone(), toast).await;

            handle.shutdown().await;
            task.await?;
            outcome
        }
        Command::Watch => {
            tracing::info!(
                sites = scheduler.registry().len(),
                interval = config.monitoring.interval_seconds,
                "Watching websites, press Ctrl-C to stop"
            );
            let (handle, rx) = SchedulerHandle::channel(8);
            let task = tokio::spawn(scheduler.run(rx));

            tokio::signal::ctrl_c().await?;
            handle.shutdown().await;
            task.await?;
            Ok(())
        }
        Command::Add { url } => {
            let site = scheduler.add_site(&url).await?;
            print_sites(std::slice::from_ref(&site));
            Ok(())
        }
        Command::Remove { id } => match scheduler.remove_site(id).await {
            Some(site) => {
                println!("Removed {} ({})", site.url, site.id);
                Ok(())
            }
            None => bail!("No website with id {id}"),
        },
        Command::List => {
            print_sites(scheduler.sites());
            Ok(())
        }
        Command::Check => {
            scheduler.run_pass().await;
            print_sites(scheduler.sites());
            Ok(())
        }
        Command::Config => Ok(()),
    }
}

/// Subscribe to the bus, then start the scheduler task, so no event from the
/// first tick is missed
fn spawn_scheduler(
    scheduler: MonitoringScheduler,
    bus: &DashboardBus,
    buffer: usize,
) -> (SchedulerHandle, broadcast::Receiver<DashboardEvent>, JoinHandle<MonitoringScheduler>) {
    let bus_rx = bus.subscribe();
    let (handle, rx) = SchedulerHandle::channel(buffer);
    let task = tokio::spawn(scheduler.run(rx));
    (handle, bus_rx, task)
}

async fn open_store(config: &Config, ephemeral: bool) -> Result<Arc<dyn SiteStore>> {
    if ephemeral {
        return Ok(Arc::new(MemoryStore::new()));
    }

    let path = &config.storage.database_path;
    tracing::debug!(path = %path.display(), "Opening site store");
    let pool = pool::open_pool(path).await?;
    Ok(Arc::new(LibsqlStore::new(pool).await?))
}

fn print_sites(sites: &[Site]) {
    if sites.is_empty() {
        println!("No websites added yet.");
        return;
    }

    println!("{:<15} {:<8} {:>8}  URL", "ID", "STATUS", "LATENCY");
    for site in sites {
        println!(
            "{:<15} {:<8} {:>6}ms  {}",
            site.id,
            site.status.to_string(),
            site.latency,
            site.url
        );
    }
}
