use serde::{Deserialize, Serialize};

use crate::monitoring::types::SiteStatus;

/// Site model - one monitored target
///
/// This is also the persisted record shape:
/// `{"id": 1, "url": "https://example.com", "status": "up", "latency": 42}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub id: i64,
    pub url: String,
    pub status: SiteStatus,
    pub latency: u64,
}

impl Site {
    /// Create a new, not yet probed site
    pub fn new(id: i64, url: String) -> Self {
        Self { id, url, status: SiteStatus::Pending, latency: 0 }
    }

    /// URL without the leading `http://` or `https://`, as shown in lists
    pub fn display_url(&self) -> &str {
        self.url
            .strip_prefix("https://")
            .or_else(|| self.url.strip_prefix("http://"))
            .unwrap_or(&self.url)
    }
}
