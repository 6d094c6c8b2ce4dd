//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here together with its OpenAPI specification. The
//! collected document is served as JSON at `/api/docs/openapi.json`.

use axum::{routing::get, Json, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all catalog endpoints.
///
/// # Registered Endpoints
/// - `GET /api/affiliations` - List affiliations
/// - `GET /api/listings` - Search listings by affiliation, text and sort order
/// - `PUT /api/listings/{id}`, `DELETE /api/listings/{id}` - Save or delete a listing
/// - `GET /api/posts`, `PUT /api/posts/{id}`, `DELETE /api/posts/{id}` - Posts
/// - `GET /api/profiles`, `PUT /api/profiles/{id}`, `DELETE /api/profiles/{id}` - Profiles
/// - `GET /api/docs/openapi.json` - OpenAPI document for the endpoints above
///
/// # Returns
/// An Axum `Router<AppState>` ready to be given the application state.
///
/// # Example
/// ```ignore
/// let catalog = CatalogService::load(Store::in_memory(), CatalogConfig::default()).await;
/// let router = routes().with_state(AppState::from(catalog));
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "UniStay", description = "UniStay catalog API"), tags(
        (name = controller::affiliation::AFFILIATION_TAG, description = "Affiliation API routes"),
        (name = controller::listing::LISTING_TAG, description = "Listing API routes"),
        (name = controller::post::POST_TAG, description = "News, event and job post API routes"),
        (name = controller::profile::PROFILE_TAG, description = "Student spotlight API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::affiliation::get_affiliations))
        .routes(routes!(controller::listing::get_listings))
        .routes(routes!(
            controller::listing::put_listing,
            controller::listing::delete_listing
        ))
        .routes(routes!(controller::post::get_posts))
        .routes(routes!(
            controller::post::put_post,
            controller::post::delete_post
        ))
        .routes(routes!(controller::profile::get_profiles))
        .routes(routes!(
            controller::profile::put_profile,
            controller::profile::delete_profile
        ))
        .split_for_parts();

    routes.route("/api/docs/openapi.json", get(move || async move { Json(api) }))
}
