use crate::server::{
    config::{Config, StoreKind, REDIS_URL_VAR},
    error::{config::ConfigError, Error},
    service::catalog::CatalogService,
    store::{FileBackend, Store},
};

/// Connect to the persistence store selected by the configuration
pub async fn connect_to_store(config: &Config) -> Result<Store, Error> {
    let store = match config.store {
        StoreKind::Memory => {
            tracing::warn!("Using the in-memory store; catalog changes are lost on exit");

            Store::in_memory()
        }
        StoreKind::File => {
            let backend = FileBackend::new(&config.store_path);
            tracing::info!("Using file store at {}", config.store_path.display());

            Store::new(backend)
        }
        StoreKind::Redis => connect_to_redis(config).await?,
    };

    Ok(store)
}

#[cfg(feature = "redis")]
async fn connect_to_redis(config: &Config) -> Result<Store, Error> {
    use crate::server::store::RedisBackend;

    let url = config
        .redis_url
        .as_deref()
        .ok_or_else(|| ConfigError::MissingEnvVar(REDIS_URL_VAR.to_string()))?;

    let backend = RedisBackend::connect(url).await?;
    tracing::info!("Using Redis store");

    Ok(Store::new(backend))
}

#[cfg(not(feature = "redis"))]
async fn connect_to_redis(_config: &Config) -> Result<Store, Error> {
    Err(ConfigError::InvalidEnvValue {
        var: crate::server::config::STORE_VAR.to_string(),
        reason: format!(
            "redis store requires the `redis` feature (set {} after enabling it)",
            REDIS_URL_VAR
        ),
    }
    .into())
}

/// Connect to the store and load the catalog from it
pub async fn build_catalog(config: &Config) -> Result<CatalogService, Error> {
    let store = connect_to_store(config).await?;

    Ok(CatalogService::load(store, config.catalog.clone()).await)
}
