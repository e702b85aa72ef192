use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Privileged connection URL, used for writes and migrations.
    pub database_url: String,
    /// Read-only connection URL, used for the public read endpoints.
    pub database_read_url: String,
    /// Shared secret for mutating endpoints. Unset means always deny.
    pub admin_token: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("PORT must be a number")?
                .parse()?,
            database_url: std::env::var("DATABASE_URL")
                .context("Cannot load DATABASE_URL env variable")?,
            database_read_url: std::env::var("DATABASE_READ_URL")
                .context("Cannot load DATABASE_READ_URL env variable")?,
            admin_token: std::env::var("ADMIN_TOKEN").ok(),
        })
    }
}
