use crate::config::DatabaseConfig;
use anyhow::Context;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Pool, Sqlite, SqlitePool,
};
use std::str::FromStr;
use time::OffsetDateTime;

#[derive(Clone)]
pub struct Database {
    pub(crate) pool: Pool<Sqlite>,
}

/// Common methods for the primary database, extensions are implemented separately in every module.
impl Database {
    /// Opens database "connection".
    pub async fn create(pool: SqlitePool) -> anyhow::Result<Self> {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .with_context(|| "Failed to migrate database")?;

        Ok(Database { pool })
    }

    /// Creates a connection pool for the configured database, creating the database file if needed.
    pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
        let options = SqliteConnectOptions::from_str(&config.url)
            .with_context(|| format!("Cannot parse database URL: {}", config.url))?
            .create_if_missing(true);

        SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await
            .with_context(|| format!("Failed to connect to database: {}", config.url))
    }

    /// Returns current UTC time, truncated to seconds to match the database precision.
    pub fn utc_now() -> anyhow::Result<OffsetDateTime> {
        Ok(OffsetDateTime::now_utc().replace_nanosecond(0)?)
    }
}

impl AsRef<Database> for Database {
    fn as_ref(&self) -> &Self {
        self
    }
}
