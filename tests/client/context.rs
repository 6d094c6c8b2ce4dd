use std::sync::Arc;

use entity::prelude::*;
use unistay::{
    client::{
        context::{CatalogContext, DashboardStats},
        filter::config::FilterConfig,
        form::ListingForm,
    },
    server::error::Error,
};
use unistay_test_utils::prelude::*;

use crate::TestSetupExt;

fn catalog_setup() -> TestBuilder {
    TestBuilder::new()
        .with_affiliation(factory::affiliation("1", "MAK"))
        .with_affiliation(factory::affiliation("2", "KYU"))
        .with_listing(factory::listing("h1", "1"))
        .with_post(factory::post("p1", PostKind::News))
        .with_profile(factory::profile("s1"))
}

/// Expect load to fill every collection and the dashboard counts
#[tokio::test]
async fn loads_catalog() -> Result<(), Error> {
    let test = catalog_setup().build();
    let context = CatalogContext::load(Arc::new(test.into_catalog().await)).await?;

    let data = context.data().await;
    assert_eq!(data.affiliations, test.affiliations());
    assert_eq!(data.listings, test.listings());
    assert_eq!(
        context.stats().await,
        DashboardStats {
            listings: 1,
            posts: 1,
            profiles: 1
        }
    );

    Ok(())
}

/// Expect saving a new listing from the admin form to show up after the implicit refresh
#[tokio::test]
async fn save_refreshes_data() -> Result<(), Error> {
    let test = catalog_setup().build();
    let context = CatalogContext::load(Arc::new(test.into_catalog().await)).await?;

    let form = ListingForm {
        name: "Kikoni Annex".to_string(),
        affiliation_id: "2".to_string(),
        price_range: "UGX 400k".to_string(),
        distance: "1km from Main Gate".to_string(),
        amenities: "WiFi, Security".to_string(),
        ..Default::default()
    };
    let listing = form.into_listing(None).expect("form is valid");

    let saved = context.save_listing(listing.clone()).await?;

    assert!(!saved.id.is_empty());
    assert_eq!(saved, Listing { id: saved.id.clone(), ..listing });
    assert!(context.data().await.listings.contains(&saved));
    assert_eq!(context.stats().await.listings, 2);

    assert!(context.delete_listing(&saved.id).await?);
    assert_eq!(context.stats().await.listings, 1);

    Ok(())
}

/// Expect a failed save to leave the loaded data untouched
#[tokio::test]
async fn failed_save_keeps_data() -> Result<(), Error> {
    let test = catalog_setup().build();
    let context = CatalogContext::load(Arc::new(test.into_catalog().await)).await?;
    let before = context.data().await;

    let result = context.save_listing(factory::listing("", "404")).await;

    assert!(matches!(result, Err(Error::UnknownAffiliation(_))));
    assert_eq!(context.data().await, before);

    Ok(())
}

/// Expect post and profile writes to refresh their collections
#[tokio::test]
async fn post_and_profile_writes_refresh() -> Result<(), Error> {
    let test = catalog_setup().build();
    let context = CatalogContext::load(Arc::new(test.into_catalog().await)).await?;

    context.save_post(factory::post("", PostKind::Job)).await?;
    context.delete_profile("s1").await?;

    let stats = context.stats().await;
    assert_eq!(stats.posts, 2);
    assert_eq!(stats.profiles, 0);

    context.delete_post("p1").await?;
    context.save_profile(factory::profile("")).await?;

    let stats = context.stats().await;
    assert_eq!(stats.posts, 1);
    assert_eq!(stats.profiles, 1);

    Ok(())
}

/// Expect the filter controller to offer the loaded affiliations and query the same catalog
#[tokio::test]
async fn builds_filter_controller() -> Result<(), Error> {
    let test = catalog_setup().build();
    let context = CatalogContext::load(Arc::new(test.into_catalog().await)).await?;

    let controller = context.filter_controller(FilterConfig::default()).await;
    let mut receiver = controller.subscribe();
    controller.start().await;

    let snapshot = receiver
        .wait_for(|snapshot| snapshot.generation == 1)
        .await
        .expect("controller dropped")
        .clone();

    assert_eq!(snapshot.affiliations, test.affiliations());
    assert_eq!(snapshot.listings, test.listings());

    Ok(())
}
