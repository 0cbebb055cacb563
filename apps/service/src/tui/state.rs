use std::time::{Duration, Instant, SystemTime};

use super::bus::DashboardEvent;
use crate::models::Site;
use crate::notifier::{Notice, Severity};
use crate::registry::SiteCounts;

/// Status notification level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Error,
}

impl From<Severity> for StatusLevel {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Success => StatusLevel::Success,
            Severity::Error => StatusLevel::Error,
        }
    }
}

/// Application state
pub struct AppState {
    pub sites: Vec<Site>,
    pub selected: usize,
    pub show_help: bool,

    // Add & delete
    pub show_add: bool,
    pub add_input: String,
    /// Site picked for removal, captured when the confirmation opens
    pub delete_target: Option<Site>,

    // Status notifications
    pub status_message: Option<(String, Instant, StatusLevel)>,
    pub toast_duration: Duration,

    // Last completed reconciliation pass
    pub last_pass: Option<(usize, SystemTime)>,
}

impl AppState {
    pub fn new(toast_duration: Duration) -> Self {
        Self {
            sites: Vec::new(),
            selected: 0,
            show_help: false,
            show_add: false,
            add_input: String::new(),
            delete_target: None,
            status_message: None,
            toast_duration,
            last_pass: None,
        }
    }

    /// Fold a scheduler event into the view
    pub fn apply(&mut self, event: DashboardEvent) {
        match event {
            DashboardEvent::Sites(sites) => {
                self.sites = sites;
                self.clamp_selection();
            }
            DashboardEvent::Toast(Notice { message, severity }) => {
                self.set_status(message, severity.into());
            }
            DashboardEvent::PassFinished { checked, at } => {
                self.last_pass = Some((checked, at));
            }
        }
    }

    /// Set a status notification (auto-clears after the toast duration)
    pub fn set_status(&mut self, msg: impl Into<String>, level: StatusLevel) {
        self.status_message = Some((msg.into(), Instant::now(), level));
    }

    /// Clear expired status messages
    pub fn clear_expired_status(&mut self) {
        if let Some((_, created, _)) = &self.status_message {
            if created.elapsed() > self.toast_duration {
                self.status_message = None;
            }
        }
    }

    /// Returns true if any popup overlay is open
    pub fn any_popup_open(&self) -> bool {
        self.show_help || self.show_add || self.delete_target.is_some()
    }

    pub fn counts(&self) -> SiteCounts {
        SiteCounts::from_sites(&self.sites)
    }

    pub fn selected_site(&self) -> Option<&Site> {
        self.sites.get(self.selected)
    }

    /// Ask for confirmation before removing the selected site
    pub fn open_delete(&mut self) {
        self.delete_target = self.selected_site().cloned();
    }

    pub fn open_add(&mut self) {
        self.add_input.clear();
        self.show_add = true;
    }

    /// Close the add popup and hand back what was typed
    pub fn take_add_input(&mut self) -> String {
        self.show_add = false;
        std::mem::take(&mut self.add_input)
    }

    pub fn next_site(&mut self) {
        if !self.sites.is_empty() {
            self.selected = (self.selected + 1) % self.sites.len();
        }
    }

    pub fn prev_site(&mut self) {
        if !self.sites.is_empty() {
            self.selected = if self.selected == 0 { self.sites.len() - 1 } else { self.selected - 1 };
        }
    }

    pub fn first_site(&mut self) {
        self.selected = 0;
    }

    pub fn last_site(&mut self) {
        self.selected = self.sites.len().saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        if self.selected >= self.sites.len() {
            self.selected = self.sites.len().saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitoring::types::SiteStatus;

    fn sites(n: i64) -> Vec<Site> {
        (1..=n).map(|i| Site::new(i, format!("https://{i}.test"))).collect()
    }

    #[test]
    fn test_navigation_wraps() {
        let mut state = AppState::new(Duration::from_secs(3));
        state.apply(DashboardEvent::Sites(sites(3)));

        state.prev_site();
        assert_eq!(state.selected, 2);
        state.next_site();
        assert_eq!(state.selected, 0);
        state.last_site();
        assert_eq!(state.selected_site().unwrap().id, 3);
    }

    #[test]
    fn test_selection_clamped_when_sites_shrink() {
        let mut state = AppState::new(Duration::from_secs(3));
        state.apply(DashboardEvent::Sites(sites(3)));
        state.last_site();

        state.apply(DashboardEvent::Sites(sites(1)));
        assert_eq!(state.selected, 0);

        state.apply(DashboardEvent::Sites(Vec::new()));
        assert!(state.selected_site().is_none());
    }

    #[test]
    fn test_toast_expires() {
        let mut state = AppState::new(Duration::from_millis(0));
        state.apply(DashboardEvent::Toast(Notice::error("Alert: https://a.test is DOWN!")));
        assert_eq!(state.status_message.as_ref().unwrap().2, StatusLevel::Error);

        std::thread::sleep(Duration::from_millis(5));
        state.clear_expired_status();
        assert!(state.status_message.is_none());
    }

    #[test]
    fn test_toast_levels_follow_notice_severity() {
        let mut state = AppState::new(Duration::from_secs(3));

        state.apply(DashboardEvent::Toast(Notice::success("https://a.test is back UP!")));
        assert_eq!(state.status_message.as_ref().unwrap().2, StatusLevel::Success);

        state.apply(DashboardEvent::Toast(Notice::error("Alert: https://a.test is DOWN!")));
        assert_eq!(state.status_message.as_ref().unwrap().2, StatusLevel::Error);

        // Informational lines are set by the view itself
        state.set_status("Checking all websites...", StatusLevel::Info);
        assert_eq!(state.status_message.as_ref().unwrap().2, StatusLevel::Info);
    }

    #[test]
    fn test_counts_follow_snapshot() {
        let mut state = AppState::new(Duration::from_secs(3));
        let mut snapshot = sites(2);
        snapshot[0].status = SiteStatus::Up;
        state.apply(DashboardEvent::Sites(snapshot));

        let counts = state.counts();
        assert_eq!((counts.total, counts.online, counts.offline), (2, 1, 0));
    }

    #[test]
    fn test_add_input_round_trip() {
        let mut state = AppState::new(Duration::from_secs(3));
        state.open_add();
        state.add_input.push_str("example.com");
        assert!(state.any_popup_open());

        assert_eq!(state.take_add_input(), "example.com");
        assert!(!state.show_add);
        assert!(state.add_input.is_empty());
    }
}
