use std::{ops::Deref, time::Duration};

use crate::error::Result;
pub use clap::Parser;
use fyyur_types::config::BackendConfig;

#[derive(Debug, Clone, clap::Parser)]
#[command(version, about = "Fyyur web server")]
pub struct ServerConfig {
    #[arg(
        short,
        long,
        default_value_t = 3000,
        env = "FYYUR_LISTEN_PORT",
        help = "Port to listen on"
    )]
    pub port: u16,
    #[arg(
        short,
        long,
        default_value = "127.0.0.1",
        env = "FYYUR_LISTEN_ADDRESS",
        help = "Address to listen on"
    )]
    pub listen_address: String,

    #[arg(
        long,
        env = "FYYUR_SESSION_EXPIRY",
        default_value = "1h",
        help = "Visitor session expires after this period of inactivity (e.g. 30m, 1h)",
        value_parser = humantime::parse_duration
    )]
    pub session_expiry: Duration,

    #[command(flatten)]
    pub backend: BackendConfig,
}

impl ServerConfig {
    pub fn load() -> Result<Self> {
        ServerConfig::try_parse().map_err(|e| e.into())
    }
}

impl Deref for ServerConfig {
    type Target = BackendConfig;

    fn deref(&self) -> &Self::Target {
        &self.backend
    }
}
