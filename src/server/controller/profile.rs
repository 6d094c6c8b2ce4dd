use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::prelude::*;

use crate::{
    model::api::ErrorDto,
    server::{error::Error, model::app::AppState},
};

pub static PROFILE_TAG: &str = "profile";

/// Get every student spotlight profile
#[utoipa::path(
    get,
    path = "/api/profiles",
    tag = PROFILE_TAG,
    responses(
        (status = 200, description = "Success when retrieving profiles", body = Vec<Profile>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profiles(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let profiles = state.catalog.list_profiles().await;

    Ok((StatusCode::OK, Json(profiles)))
}

/// Create or replace a profile; the path ID takes precedence over the body
#[utoipa::path(
    put,
    path = "/api/profiles/{id}",
    tag = PROFILE_TAG,
    params(("id" = String, Path, description = "Profile ID")),
    request_body = Profile,
    responses(
        (status = 200, description = "Success when saving the profile", body = Profile),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn put_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(mut profile): Json<Profile>,
) -> Result<impl IntoResponse, Error> {
    profile.id = id;

    let profile = state.catalog.save_profile(profile).await?;

    Ok((StatusCode::OK, Json(profile)))
}

#[utoipa::path(
    delete,
    path = "/api/profiles/{id}",
    tag = PROFILE_TAG,
    params(("id" = String, Path, description = "Profile ID")),
    responses(
        (status = 204, description = "Profile deleted or never existed"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    state.catalog.delete_profile(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
