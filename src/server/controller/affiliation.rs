use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use entity::prelude::*;

use crate::{
    model::api::ErrorDto,
    server::{error::Error, model::app::AppState},
};

pub static AFFILIATION_TAG: &str = "affiliation";

/// Get every affiliation listings can belong to
#[utoipa::path(
    get,
    path = "/api/affiliations",
    tag = AFFILIATION_TAG,
    responses(
        (status = 200, description = "Success when retrieving affiliations", body = Vec<Affiliation>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_affiliations(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let affiliations = state.catalog.list_affiliations().await;

    Ok((StatusCode::OK, Json(affiliations)))
}
