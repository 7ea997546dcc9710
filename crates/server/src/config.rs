use std::time::Duration;

use clap::Parser;
use sitelift_core::{DEFAULT_TIMEOUT_SECS, ScraperConfig};

/// Default `RUST_LOG` directive when none is set.
pub const DEFAULT_LOG_FILTER: &str = "sitelift_server=info,tower_http=info";

/// Service settings, read from flags or the environment
#[derive(Parser, Debug, Clone)]
#[command(name = "sitelift-server")]
#[command(version)]
#[command(about = "HTTP service for contact and outline extraction", long_about = None)]
pub struct Settings {
    /// Address to bind
    #[arg(long, env = "SITELIFT_BIND", default_value = "0.0.0.0")]
    pub bind: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Postgres connection string; visits are kept in memory when unset
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Timeout for fetching a source page, in seconds
    #[arg(long, env = "SITELIFT_FETCH_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub fetch_timeout: u64,

    /// Timeout for a whole request, in seconds
    #[arg(long, env = "SITELIFT_REQUEST_TIMEOUT", default_value_t = 30)]
    pub request_timeout: u64,
}

impl Settings {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    /// Scraper settings derived from these flags.
    pub fn scraper_config(&self) -> ScraperConfig {
        ScraperConfig::builder().timeout(self.fetch_timeout).build()
    }
}
