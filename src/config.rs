//! Environment-driven configuration.

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
}

impl Config {
    /// Read configuration from the environment with local-dev defaults.
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://campus.db".into()),
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into()),
        }
    }
}
