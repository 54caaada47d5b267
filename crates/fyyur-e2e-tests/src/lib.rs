use std::time::Duration;

use anyhow::{Result, anyhow};
use fyyur_server::config::{Parser, ServerConfig};
use rand::Rng as _;
use tempfile::TempDir;
use tokio::sync::oneshot;
use tracing::{debug, error};

fn random_port() -> Result<u16> {
    let mut rng = rand::rng();

    let mut retries = 3;
    while retries > 0 {
        let port: u16 = rng.random_range(3030..4030);
        let addr: std::net::SocketAddr = format!("127.0.0.1:{}", port).parse()?;
        match std::net::TcpStream::connect_timeout(&addr, Duration::from_millis(100)) {
            Err(e) if e.kind() == std::io::ErrorKind::ConnectionRefused => return Ok(port),
            Err(_) => retries -= 1,
            Ok(_) => retries -= 1,
        }
    }

    Err(anyhow!("Could not find a free port"))
}

pub struct ConfigGuard {
    #[allow(dead_code)]
    data_dir: TempDir,
}

pub fn test_config(test_name: &str) -> Result<(ServerConfig, ConfigGuard)> {
    let tmp_data_dir = TempDir::with_prefix(format!("fyyur_{}_", test_name))?;
    let data_dir = tmp_data_dir.path().to_string_lossy().to_string();
    let port = random_port()?.to_string();
    let args = &[
        "fyyur-e2e-tests",
        "--data-dir",
        &data_dir,
        "--port",
        &port,
        "--listen-address",
        "127.0.0.1",
    ];
    let config = ServerConfig::try_parse_from(args)?;
    Ok((
        config,
        ConfigGuard {
            data_dir: tmp_data_dir,
        },
    ))
}

pub fn base_url(args: &ServerConfig) -> String {
    format!("http://127.0.0.1:{}", args.port)
}

/// Stops the spawned server when dropped.
pub struct ServerGuard {
    shutdown: Option<oneshot::Sender<()>>,
}

impl Drop for ServerGuard {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

pub async fn spawn_server(args: ServerConfig) -> Result<ServerGuard> {
    let state = fyyur_server::build_state(&args).await?;
    let health_url = format!("{}/health", base_url(&args));
    let (tx, rx) = oneshot::channel::<()>();
    tokio::spawn(async move {
        let shutdown = async move {
            let _ = rx.await;
        };
        if let Err(e) = fyyur_server::run_graceful_with_state(args, state, shutdown).await {
            error!("Server failed: {e}");
        }
    });

    let client = reqwest::Client::new();
    for _ in 0..50 {
        match client.get(&health_url).send().await {
            Ok(response) if response.status().is_success() => {
                debug!("Server is up");
                return Ok(ServerGuard { shutdown: Some(tx) });
            }
            _ => tokio::time::sleep(Duration::from_millis(50)).await,
        }
    }
    Err(anyhow!("Server did not start"))
}

/// Client keeping the session cookie, so notices survive redirects.
pub fn browser() -> Result<reqwest::Client> {
    let client = reqwest::Client::builder().cookie_store(true).build()?;
    Ok(client)
}

pub struct TestEnv {
    pub base_url: String,
    pub client: reqwest::Client,
    _server: ServerGuard,
    _config: ConfigGuard,
}

impl TestEnv {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

pub async fn launch_env(test_name: &str) -> Result<TestEnv> {
    let (args, config) = test_config(test_name)?;
    let base_url = base_url(&args);
    let server = spawn_server(args).await?;
    Ok(TestEnv {
        base_url,
        client: browser()?,
        _server: server,
        _config: config,
    })
}
