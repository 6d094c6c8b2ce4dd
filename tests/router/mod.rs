use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use entity::prelude::*;
use tower::ServiceExt;
use unistay::{model::api::ErrorDto, server::router::routes};
use unistay_test_utils::prelude::*;

use crate::{util::test_utils::read_json, TestSetupExt};

async fn app() -> Router {
    let test = TestBuilder::new()
        .with_affiliation(factory::affiliation("1", "MAK"))
        .with_affiliation(factory::affiliation("2", "KYU"))
        .with_listings([
            factory::priced_listing("h1", "1", "UGX 800k - 1.2M", 4.8, true),
            factory::priced_listing("h2", "2", "UGX 600k - 900k", 4.2, false),
        ])
        .build();

    routes().with_state(test.into_app_state().await)
}

fn json_request(method: Method, uri: &str, body: &impl serde::Serialize) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

#[tokio::test]
/// Expect query string parameters in camelCase to reach the listing search
async fn get_listings_reads_query_string() -> Result<(), TestError> {
    let request = Request::get("/api/listings?affiliationId=all&sortBy=price-asc&query=wifi")
        .body(Body::empty())
        .unwrap();

    let response = app().await.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let listings: Vec<Listing> = read_json(response).await?;
    let ids: Vec<&str> = listings.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["h2", "h1"]);

    Ok(())
}

#[tokio::test]
/// Expect PUT to return the stored listing and 422 for an unknown affiliation
async fn put_listing_status_codes() -> Result<(), TestError> {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            "/api/listings/h2",
            &factory::listing("", "1"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let saved: Listing = read_json(response).await?;
    assert_eq!(saved.id, "h2");
    assert_eq!(saved.affiliation_id, "1");

    let response = app
        .oneshot(json_request(
            Method::PUT,
            "/api/listings/h3",
            &factory::listing("", "7"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let error: ErrorDto = read_json(response).await?;
    assert!(!error.error.is_empty());

    Ok(())
}

#[tokio::test]
/// Expect DELETE to return 204 for present and absent IDs
async fn delete_listing_returns_no_content() {
    let app = app().await;

    for uri in ["/api/listings/h1", "/api/listings/missing"] {
        let request = Request::delete(uri).body(Body::empty()).unwrap();

        let response = app.clone().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }
}

#[tokio::test]
/// Expect the OpenAPI document to describe every catalog route
async fn serves_openapi_document() -> Result<(), TestError> {
    let request = Request::get("/api/docs/openapi.json")
        .body(Body::empty())
        .unwrap();

    let response = app().await.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let document: serde_json::Value = read_json(response).await?;
    for path in [
        "/api/affiliations",
        "/api/listings",
        "/api/listings/{id}",
        "/api/posts",
        "/api/posts/{id}",
        "/api/profiles",
        "/api/profiles/{id}",
    ] {
        assert!(document["paths"].get(path).is_some(), "missing {}", path);
    }

    Ok(())
}
