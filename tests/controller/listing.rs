use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::prelude::*;
use unistay::{
    model::api::{ErrorDto, ListingQueryParams},
    server::controller::listing::{delete_listing, get_listings, put_listing},
};
use unistay_test_utils::prelude::*;

use crate::{util::test_utils::read_json, TestSetupExt};

fn catalog_setup() -> TestBuilder {
    TestBuilder::new()
        .with_affiliation(factory::affiliation("1", "MAK"))
        .with_affiliation(factory::affiliation("2", "KYU"))
        .with_listings([
            factory::priced_listing("h1", "1", "UGX 800k - 1.2M", 4.8, true),
            factory::priced_listing("h2", "2", "UGX 600k - 900k", 4.2, false),
            factory::priced_listing("h3", "1", "UGX 1.5M+", 4.9, false),
        ])
}

fn ids(listings: &[Listing]) -> Vec<&str> {
    listings.iter().map(|l| l.id.as_str()).collect()
}

#[tokio::test]
/// Expect 200 with listings filtered and sorted by the query parameters
async fn searches_listings() -> Result<(), TestError> {
    let test = catalog_setup().build();
    let state = test.into_app_state().await;

    let params = ListingQueryParams {
        affiliation_id: Some("1".to_string()),
        query: None,
        sort_by: Some("price-desc".to_string()),
    };
    let response = get_listings(State(state), Query(params))
        .await
        .unwrap()
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let listings: Vec<Listing> = read_json(response).await?;
    assert_eq!(ids(&listings), vec!["h3", "h1"]);

    Ok(())
}

#[tokio::test]
/// Expect the `all` sentinel and an unknown sort to behave like no parameters at all
async fn all_sentinel_and_unknown_sort_use_defaults() -> Result<(), TestError> {
    let test = catalog_setup().build();
    let state = test.into_app_state().await;

    let params = ListingQueryParams {
        affiliation_id: Some("all".to_string()),
        query: Some(String::new()),
        sort_by: Some("cheapest".to_string()),
    };
    let response = get_listings(State(state), Query(params))
        .await
        .unwrap()
        .into_response();

    let listings: Vec<Listing> = read_json(response).await?;
    assert_eq!(ids(&listings), vec!["h1", "h3", "h2"]);

    Ok(())
}

#[tokio::test]
/// Expect 200 with the stored listing, using the path ID over the body ID
async fn put_uses_path_id() -> Result<(), TestError> {
    let test = catalog_setup().build();
    let state = test.into_app_state().await;

    let mut body = factory::listing("h999", "2");
    body.name = "Renamed".to_string();
    let response = put_listing(State(state.clone()), Path("h1".to_string()), Json(body))
        .await
        .unwrap()
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let saved: Listing = read_json(response).await?;
    assert_eq!(saved.id, "h1");
    assert_eq!(saved.name, "Renamed");

    let listings = state.catalog.list_listings(&Default::default()).await;
    assert_eq!(listings.len(), 3);

    Ok(())
}

#[tokio::test]
/// Expect 422 when the listing references an unknown affiliation
async fn put_rejects_unknown_affiliation() -> Result<(), TestError> {
    let test = catalog_setup().build();
    let state = test.into_app_state().await;

    let result = put_listing(
        State(state),
        Path("new".to_string()),
        Json(factory::listing("", "99")),
    )
    .await;

    assert!(result.is_err());
    let response = result.err().unwrap().into_response();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let error: ErrorDto = read_json(response).await?;
    assert!(error.error.contains("99"));

    Ok(())
}

#[tokio::test]
/// Expect 422 and an unchanged catalog when the rating is outside 0 to 5
async fn put_rejects_out_of_range_rating() -> Result<(), TestError> {
    let test = catalog_setup().build();
    let state = test.into_app_state().await;

    let mut body = factory::listing("", "1");
    body.rating = 9.5;
    let result = put_listing(State(state.clone()), Path("new".to_string()), Json(body)).await;

    assert!(result.is_err());
    let response = result.err().unwrap().into_response();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let error: ErrorDto = read_json(response).await?;
    assert!(error.error.contains("9.5"));

    let listings = state.catalog.list_listings(&Default::default()).await;
    assert_eq!(listings.len(), 3);

    Ok(())
}

#[tokio::test]
/// Expect 204 whether or not the listing existed
async fn delete_returns_no_content() -> Result<(), TestError> {
    let test = catalog_setup().build();
    let state = test.into_app_state().await;

    for id in ["h1", "h1"] {
        let response = delete_listing(State(state.clone()), Path(id.to_string()))
            .await
            .unwrap()
            .into_response();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    let listings = state.catalog.list_listings(&Default::default()).await;
    assert_eq!(ids(&listings), vec!["h3", "h2"]);

    Ok(())
}
