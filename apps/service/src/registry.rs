//! Ordered collection of monitored sites.
//!
//! The registry is plain owned state. It never persists itself; the owner
//! (the scheduler or a one-shot CLI command) writes the full snapshot to the
//! store after each mutation.

use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

use crate::models::Site;
use crate::monitoring::types::SiteStatus;
use crate::validation::{normalize_url, validate_site_url};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Please enter a URL")]
    EmptyUrl,

    #[error("Website already exists")]
    DuplicateUrl,

    #[error("{0}")]
    InvalidUrl(String),
}

/// Aggregate counters shown in the dashboard header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SiteCounts {
    pub total: usize,
    pub online: usize,
    pub offline: usize,
    pub pending: usize,
}

impl SiteCounts {
    pub fn from_sites(sites: &[Site]) -> Self {
        let mut counts = Self { total: sites.len(), ..Self::default() };
        for site in sites {
            match site.status {
                SiteStatus::Up => counts.online += 1,
                SiteStatus::Down => counts.offline += 1,
                SiteStatus::Pending => counts.pending += 1,
            }
        }
        counts
    }

    /// Share of sites that are up, in percent of all sites
    pub fn online_percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.online as f64 / self.total as f64 * 100.0
    }
}

#[derive(Debug, Default)]
pub struct SiteRegistry {
    sites: Vec<Site>,
    last_issued_id: i64,
}

impl SiteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from previously persisted sites, keeping their order
    pub fn from_sites(sites: Vec<Site>) -> Self {
        let last_issued_id = sites.iter().map(|s| s.id).max().unwrap_or(0);
        Self { sites, last_issued_id }
    }

    /// Add a new site in `pending` state
    pub fn add(&mut self, input: &str) -> Result<Site, RegistryError> {
        let url = normalize_url(input).ok_or(RegistryError::EmptyUrl)?;

        let validation = validate_site_url(&url);
        if !validation.is_valid {
            return Err(RegistryError::InvalidUrl(
                validation.error.unwrap_or_else(|| "Invalid URL".to_string()),
            ));
        }

        if self.sites.iter().any(|s| s.url == url) {
            return Err(RegistryError::DuplicateUrl);
        }

        let site = Site::new(self.next_id(), url);
        self.sites.push(site.clone());
        Ok(site)
    }

    /// Remove a site by id. Returns the removed site, if any.
    pub fn remove(&mut self, id: i64) -> Option<Site> {
        let index = self.sites.iter().position(|s| s.id == id)?;
        Some(self.sites.remove(index))
    }

    /// Record a probe outcome. Latency is dropped unless the site is up.
    pub fn update(&mut self, id: i64, status: SiteStatus, latency: u64) {
        if let Some(site) = self.sites.iter_mut().find(|s| s.id == id) {
            site.status = status;
            site.latency = if status == SiteStatus::Up { latency } else { 0 };
        }
    }

    pub fn get(&self, id: i64) -> Option<&Site> {
        self.sites.iter().find(|s| s.id == id)
    }

    pub fn all(&self) -> &[Site] {
        &self.sites
    }

    pub fn ids(&self) -> Vec<i64> {
        self.sites.iter().map(|s| s.id).collect()
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    pub fn counts(&self) -> SiteCounts {
        SiteCounts::from_sites(&self.sites)
    }

    /// Millisecond timestamp ids, bumped when two sites land in the same
    /// millisecond or the clock goes backwards.
    fn next_id(&mut self) -> i64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or_default();
        let id = now.max(self.last_issued_id + 1);
        self.last_issued_id = id;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_normalizes_url() {
        let mut registry = SiteRegistry::new();
        let site = registry.add("example.com").unwrap();
        assert_eq!(site.url, "https://example.com");
        assert_eq!(site.status, SiteStatus::Pending);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_add_rejects_blank() {
        let mut registry = SiteRegistry::new();
        assert_eq!(registry.add(""), Err(RegistryError::EmptyUrl));
        assert_eq!(registry.add("   "), Err(RegistryError::EmptyUrl));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_add_rejects_duplicate_normalized_url() {
        let mut registry = SiteRegistry::new();
        registry.add("https://example.com").unwrap();
        assert_eq!(registry.add("example.com"), Err(RegistryError::DuplicateUrl));
        assert_eq!(registry.add("  https://example.com "), Err(RegistryError::DuplicateUrl));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_add_rejects_invalid_url() {
        let mut registry = SiteRegistry::new();
        assert!(matches!(registry.add("exa mple.com"), Err(RegistryError::InvalidUrl(_))));
        assert!(matches!(registry.add("ftp://example.com"), Err(RegistryError::InvalidUrl(_))));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let mut registry = SiteRegistry::new();
        let a = registry.add("a.test").unwrap();
        let b = registry.add("b.test").unwrap();
        let c = registry.add("c.test").unwrap();
        assert!(a.id < b.id && b.id < c.id);

        registry.remove(c.id);
        let d = registry.add("d.test").unwrap();
        assert!(d.id > c.id);
    }

    #[test]
    fn test_loaded_ids_are_not_reissued() {
        let far_future = i64::MAX / 2;
        let mut registry = SiteRegistry::from_sites(vec![Site::new(far_future, "https://a.test".into())]);
        let site = registry.add("b.test").unwrap();
        assert_eq!(site.id, far_future + 1);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut registry = SiteRegistry::new();
        let a = registry.add("a.test").unwrap();
        let b = registry.add("b.test").unwrap();
        let c = registry.add("c.test").unwrap();

        let removed = registry.remove(b.id).unwrap();
        assert_eq!(removed.id, b.id);
        assert_eq!(registry.ids(), vec![a.id, c.id]);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut registry = SiteRegistry::new();
        registry.add("a.test").unwrap();
        assert!(registry.remove(42).is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_update_zeroes_latency_unless_up() {
        let mut registry = SiteRegistry::new();
        let site = registry.add("a.test").unwrap();

        registry.update(site.id, SiteStatus::Up, 120);
        assert_eq!(registry.get(site.id).unwrap().latency, 120);

        registry.update(site.id, SiteStatus::Down, 300);
        let stored = registry.get(site.id).unwrap();
        assert_eq!(stored.status, SiteStatus::Down);
        assert_eq!(stored.latency, 0);

        registry.update(999, SiteStatus::Up, 5);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_counts() {
        let mut registry = SiteRegistry::new();
        let a = registry.add("a.test").unwrap();
        let b = registry.add("b.test").unwrap();
        registry.add("c.test").unwrap();
        registry.update(a.id, SiteStatus::Up, 10);
        registry.update(b.id, SiteStatus::Down, 0);

        let counts = registry.counts();
        assert_eq!(counts, SiteCounts { total: 3, online: 1, offline: 1, pending: 1 });
        assert!((counts.online_percent() - 100.0 / 3.0).abs() < f64::EPSILON * 100.0);
        assert_eq!(SiteCounts::default().online_percent(), 0.0);
    }
}
