pub mod migrate;
pub mod seed;

use fyyur_types::config::BackendConfig;

#[allow(async_fn_in_trait)]
pub trait Executor {
    async fn run(self) -> anyhow::Result<()>;
}

/// Opens the configured database, creating the data directory when the default location is used.
pub(crate) async fn open_pool(backend: &BackendConfig) -> anyhow::Result<fyyur_dal::Pool> {
    let data_dir = backend.data_dir();
    if !data_dir.is_dir() {
        tokio::fs::create_dir_all(&data_dir).await?;
    }
    let pool = fyyur_dal::new_pool_with_timeout(&backend.database_url(), backend.db_timeout).await?;
    Ok(pool)
}
