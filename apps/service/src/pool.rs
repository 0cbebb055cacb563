use deadpool::managed::{self, Pool, RecycleResult};
use libsql::{Connection, Database, Error as LibsqlError};

/// Hands out connections to the local site store
pub struct StoreManager {
    database: Database,
}

impl StoreManager {
    pub fn new(database: Database) -> Self {
        Self { database }
    }
}

impl managed::Manager for StoreManager {
    type Type = Connection;
    type Error = LibsqlError;

    async fn create(&self) -> Result<Self::Type, Self::Error> {
        self.database.connect()
    }

    async fn recycle(
        &self,
        conn: &mut Self::Type,
        _: &managed::Metrics,
    ) -> RecycleResult<Self::Error> {
        conn.query("SELECT 1", ())
            .await?
            .next()
            .await?
            .ok_or(LibsqlError::QueryReturnedNoRows)?;
        Ok(())
    }
}

pub type StorePool = Pool<StoreManager>;

/// Open (or create) the database file and wrap it in a pool
pub async fn open_pool(path: &std::path::Path) -> anyhow::Result<StorePool> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let database = libsql::Builder::new_local(path).build().await?;
    let pool = Pool::builder(StoreManager::new(database))
        .config(managed::PoolConfig::default())
        .build()?;
    Ok(pool)
}
