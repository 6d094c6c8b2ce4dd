use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::prelude::*;

use crate::{
    model::{
        api::{ErrorDto, ListingQueryParams},
        query::ListingQuery,
    },
    server::{error::Error, model::app::AppState},
};

pub static LISTING_TAG: &str = "listing";

/// Search listings
///
/// Filters by affiliation, matches the query text against names and amenities and sorts the
/// results. Every parameter is optional; `affiliationId=all` disables the affiliation filter
/// and an unknown `sortBy` falls back to the default order.
#[utoipa::path(
    get,
    path = "/api/listings",
    tag = LISTING_TAG,
    params(ListingQueryParams),
    responses(
        (status = 200, description = "Success when searching listings", body = Vec<Listing>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_listings(
    State(state): State<AppState>,
    Query(params): Query<ListingQueryParams>,
) -> Result<impl IntoResponse, Error> {
    let query = ListingQuery::from(params);
    let listings = state.catalog.list_listings(&query).await;

    Ok((StatusCode::OK, Json(listings)))
}

/// Create or replace a listing
///
/// The path ID takes precedence over any ID in the body. An ID unknown to the catalog creates
/// a new listing under a generated ID, which is returned in the response body.
///
/// # Responses
/// - 200 (OK): The listing as stored
/// - 422 (Unprocessable Entity): The listing references an affiliation that does not exist
/// - 500 (Internal Server Error): The listing could not be persisted
#[utoipa::path(
    put,
    path = "/api/listings/{id}",
    tag = LISTING_TAG,
    params(("id" = String, Path, description = "Listing ID")),
    request_body = Listing,
    responses(
        (status = 200, description = "Success when saving the listing", body = Listing),
        (status = 422, description = "Listing references an unknown affiliation or has an invalid rating", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn put_listing(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(mut listing): Json<Listing>,
) -> Result<impl IntoResponse, Error> {
    listing.id = id;

    let listing = state.catalog.save_listing(listing).await?;

    Ok((StatusCode::OK, Json(listing)))
}

/// Delete a listing
///
/// Deleting an ID that does not exist also succeeds.
#[utoipa::path(
    delete,
    path = "/api/listings/{id}",
    tag = LISTING_TAG,
    params(("id" = String, Path, description = "Listing ID")),
    responses(
        (status = 204, description = "Listing deleted or never existed"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_listing(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    state.catalog.delete_listing(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
