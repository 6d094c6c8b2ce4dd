//! Tests against a local Redis or Valkey at `redis://127.0.0.1:6379`

use entity::prelude::*;
use unistay::{
    model::query::ListingQuery,
    server::{
        error::Error,
        service::catalog::{CatalogConfig, CatalogService},
        store::{RedisBackend, Store},
    },
};
use unistay_test_utils::prelude::*;

static REDIS_URL: &str = "redis://127.0.0.1:6379";

/// Store namespaced per test run so parallel runs never share keys
async fn redis_store() -> Result<Store, Error> {
    let backend = RedisBackend::connect(REDIS_URL).await?;
    let prefix = format!(
        "unistay_test_{}_{}_",
        std::process::id(),
        chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
    );

    Ok(Store::new(backend).with_prefix(prefix))
}

#[tokio::test]
async fn reads_back_written_collection() -> Result<(), Error> {
    let store = redis_store().await?;
    let posts = vec![factory::post("p1", PostKind::News)];

    store.set("posts", &posts).await?;

    assert_eq!(store.try_get::<Vec<Post>>("posts").await?, Some(posts));
    assert_eq!(store.try_get::<Vec<Post>>("profiles").await?, None);

    Ok(())
}

#[tokio::test]
async fn catalog_persists_to_redis() -> Result<(), Error> {
    let store = redis_store().await?;
    let catalog = CatalogService::load(store.clone(), CatalogConfig::immediate()).await;

    let saved = catalog.save_listing(factory::listing("", "2")).await?;

    let reloaded = CatalogService::load(store, CatalogConfig::immediate()).await;
    let listings = reloaded.list_listings(&ListingQuery::default()).await;
    assert!(listings.contains(&saved));

    Ok(())
}
