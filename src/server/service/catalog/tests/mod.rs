
use entity::prelude::*;
use unistay_test_utils::prelude::*;

use crate::{
    model::query::{AffiliationFilter, ListingQuery, SortOrder},
    server::{
        data::{LISTINGS_KEY, POSTS_KEY, PROFILES_KEY},
        error::Error,
        service::catalog::{CatalogConfig, CatalogService},
        store::{FileBackend, Store},
        util::test::{test_catalog, test_store},
    },
};

/// Loads a seeded catalog over a file store whose directory path is a regular file, so
/// every write fails.
async fn unwritable_catalog(dir: &tempfile::TempDir) -> CatalogService {
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "x").unwrap();

    let store = Store::new(FileBackend::new(&blocker));

    CatalogService::load(store, CatalogConfig::immediate()).await
}
