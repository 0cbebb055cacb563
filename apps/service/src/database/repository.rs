use anyhow::{Context, Result};
use async_trait::async_trait;
use libsql::params;
use std::sync::Mutex;

use crate::models::Site;
use crate::pool::{StoreManager, StorePool};

/// Key under which the full registry is stored
pub const SITES_KEY: &str = "monitored_sites";

/// Store trait for abstracting registry persistence
#[async_trait]
pub trait SiteStore: Send + Sync {
    /// Load the persisted registry. A missing key yields an empty list.
    async fn load(&self) -> Result<Vec<Site>>;

    /// Replace the persisted registry with `sites`
    async fn save(&self, sites: &[Site]) -> Result<()>;
}

/// LibSQL-backed key-value store
pub struct LibsqlStore {
    pool: StorePool,
}

impl LibsqlStore {
    /// Create the store and make sure the schema exists
    pub async fn new(pool: StorePool) -> Result<Self> {
        let conn = pool.get().await?;
        super::initialize_database(&conn).await?;
        drop(conn);
        Ok(Self { pool })
    }

    async fn get_conn(&self) -> Result<deadpool::managed::Object<StoreManager>> {
        Ok(self.pool.get().await?)
    }

    pub async fn get_value(&self, key: &str) -> Result<Option<String>> {
        let conn = self.get_conn().await?;
        let mut rows = conn
            .query("SELECT value FROM kv_store WHERE key = ?", params![key])
            .await?;

        match rows.next().await? {
            Some(row) => Ok(Some(row.get::<String>(0)?)),
            None => Ok(None),
        }
    }

    pub async fn set_value(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.get_conn().await?;
        conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?, ?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, super::unix_now()],
        )
        .await?;
        Ok(())
    }
}

#[async_trait]
impl SiteStore for LibsqlStore {
    async fn load(&self) -> Result<Vec<Site>> {
        match self.get_value(SITES_KEY).await? {
            Some(json) => serde_json::from_str(&json).context("Stored site list is corrupt"),
            None => Ok(Vec::new()),
        }
    }

    async fn save(&self, sites: &[Site]) -> Result<()> {
        let json = serde_json::to_string(sites)?;
        self.set_value(SITES_KEY, &json).await
    }
}

/// In-process store for tests and `--ephemeral` runs
#[derive(Default)]
pub struct MemoryStore {
    value: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SiteStore for MemoryStore {
    async fn load(&self) -> Result<Vec<Site>> {
        let value = self.value.lock().map_err(|_| anyhow::anyhow!("Store lock poisoned"))?.clone();
        match value {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    async fn save(&self, sites: &[Site]) -> Result<()> {
        let json = serde_json::to_string(sites)?;
        *self.value.lock().map_err(|_| anyhow::anyhow!("Store lock poisoned"))? = Some(json);
        Ok(())
    }
}
