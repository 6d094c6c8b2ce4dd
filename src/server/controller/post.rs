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

pub static POST_TAG: &str = "post";

/// Get every news, event and job post
#[utoipa::path(
    get,
    path = "/api/posts",
    tag = POST_TAG,
    responses(
        (status = 200, description = "Success when retrieving posts", body = Vec<Post>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_posts(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let posts = state.catalog.list_posts().await;

    Ok((StatusCode::OK, Json(posts)))
}

/// Create or replace a post; the path ID takes precedence over the body
#[utoipa::path(
    put,
    path = "/api/posts/{id}",
    tag = POST_TAG,
    params(("id" = String, Path, description = "Post ID")),
    request_body = Post,
    responses(
        (status = 200, description = "Success when saving the post", body = Post),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn put_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(mut post): Json<Post>,
) -> Result<impl IntoResponse, Error> {
    post.id = id;

    let post = state.catalog.save_post(post).await?;

    Ok((StatusCode::OK, Json(post)))
}

#[utoipa::path(
    delete,
    path = "/api/posts/{id}",
    tag = POST_TAG,
    params(("id" = String, Path, description = "Post ID")),
    responses(
        (status = 204, description = "Post deleted or never existed"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    state.catalog.delete_post(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
