use clap::Parser;
use std::{path::PathBuf, time::Duration};

#[derive(Debug, Clone, Parser)]
pub struct BackendConfig {
    #[arg(
        long,
        env = "FYYUR_DATABASE_URL",
        help = "Database URL e.g. sqlite://file.db, default is sqlite://[data-dir]/fyyur.db, where data-dir is set by --data-dir"
    )]
    database_url: Option<String>,

    #[arg(
        long,
        env = "FYYUR_DATA_DIR",
        help = "Data directory (database etc.), default is system default like ~/.local/share/fyyur",
        default_value_t = default_data_dir()
    )]
    data_dir: String,

    #[arg(
        long,
        env = "FYYUR_DB_TIMEOUT",
        default_value = "5s",
        help = "Upper bound for waiting on the database, in human friendly format (e.g. 5s, 500ms)",
        value_parser = humantime::parse_duration
    )]
    pub db_timeout: Duration,
}

fn default_data_dir() -> String {
    dirs::data_dir()
        .map(|p| p.join("fyyur"))
        .unwrap_or_else(|| PathBuf::from("fyyur"))
        .to_string_lossy()
        .to_string()
}

impl BackendConfig {
    pub fn data_dir(&self) -> PathBuf {
        PathBuf::from(&self.data_dir)
    }

    pub fn database_url(&self) -> String {
        self.database_url
            .clone()
            .unwrap_or_else(|| format!("sqlite://{}/fyyur.db", self.data_dir))
    }
}
