//! User-facing notices for state transitions and rejected actions.

use std::io::Write;

use crate::tui::bus::DashboardBus;

/// Title of system-level alerts
pub const ALERT_TITLE: &str = "PingNotify Alert";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), severity: Severity::Success }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), severity: Severity::Error }
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Notices go to the log only
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        match notice.severity {
            Severity::Error => tracing::warn!("{}", notice.message),
            Severity::Success => tracing::info!("{}", notice.message),
        }
    }
}

/// Destination for system-level alerts
pub trait AlertSink: Send + Sync {
    fn raise(&self, title: &str, body: &str);
}

/// Error-level log event plus a terminal bell on stderr
pub struct TerminalBell;

impl AlertSink for TerminalBell {
    fn raise(&self, title: &str, body: &str) {
        tracing::error!(target: "pingnotify::alert", title, "{body}");
        // stdout belongs to the dashboard
        let mut stderr = std::io::stderr();
        let _ = stderr.write_all(b"\x07");
        let _ = stderr.flush();
    }
}

/// Toasts on the dashboard, plus a system alert for errors when permitted
pub struct DashboardNotifier {
    bus: DashboardBus,
    system_alerts: bool,
    sink: Box<dyn AlertSink>,
}

impl DashboardNotifier {
    pub fn new(bus: DashboardBus, system_alerts: bool) -> Self {
        Self::with_sink(bus, system_alerts, Box::new(TerminalBell))
    }

    pub fn with_sink(bus: DashboardBus, system_alerts: bool, sink: Box<dyn AlertSink>) -> Self {
        Self { bus, system_alerts, sink }
    }
}

impl Notifier for DashboardNotifier {
    fn notify(&self, notice: Notice) {
        tracing::info!(severity = ?notice.severity, "{}", notice.message);
        if notice.severity == Severity::Error && self.system_alerts {
            self.sink.raise(ALERT_TITLE, &notice.message);
        }
        self.bus.publish_toast(notice);
    }
}

#[cfg(test)]
pub mod testing {
    use std::sync::Mutex;

    use super::{Notice, Notifier, Severity};

    /// Records every notice for assertions
    #[derive(Default)]
    pub struct RecordingNotifier {
        notices: Mutex<Vec<Notice>>,
    }

    impl RecordingNotifier {
        pub fn notices(&self) -> Vec<Notice> {
            self.notices.lock().unwrap().clone()
        }

        pub fn count(&self, severity: Severity) -> usize {
            self.notices().iter().filter(|n| n.severity == severity).count()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notice: Notice) {
            self.notices.lock().unwrap().push(notice);
        }
    }
}
