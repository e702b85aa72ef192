pub mod dto;
pub mod error;
pub mod models;
pub mod repository;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use error::Result;

pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations");

/// Gateway to the Postgres store, holding one pool per capability level.
///
/// The read pool is meant to connect as a read-only role and serves the
/// public listing/read queries; the write pool connects as a privileged role
/// and is used for inserts, updates and migrations.
#[derive(Clone)]
pub struct Database {
    read_pool: PgPool,
    write_pool: PgPool,
}

impl Database {
    /// Connect both pools. Fails fast when either URL is unreachable so a
    /// misconfigured process never serves requests.
    pub async fn new(read_url: &str, write_url: &str) -> Result<Self> {
        let read_pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(read_url)
            .await?;

        let write_pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(write_url)
            .await?;

        Ok(Self {
            read_pool,
            write_pool,
        })
    }

    /// Build a gateway where both capability levels share one pool.
    /// Used by tests and single-role deployments.
    pub fn from_pool(pool: PgPool) -> Self {
        Self {
            read_pool: pool.clone(),
            write_pool: pool,
        }
    }

    pub fn read_pool(&self) -> &PgPool {
        &self.read_pool
    }

    pub fn write_pool(&self) -> &PgPool {
        &self.write_pool
    }

    pub async fn run_migrations(&self) -> Result<()> {
        MIGRATOR.run(&self.write_pool).await?;
        Ok(())
    }
}
