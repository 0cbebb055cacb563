//! Monitoring engine - probes sites and folds results into the registry
//!
//! This module is responsible for:
//! - Issuing reachability probes
//! - Classifying status transitions
//! - Scheduling sequential reconciliation passes

pub mod checker;
pub mod reconciler;
pub mod scheduler;
pub mod types;

pub use checker::{HttpProber, Prober};
pub use scheduler::{MonitoringScheduler, SchedulerHandle};
