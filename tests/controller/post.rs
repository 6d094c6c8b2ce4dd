use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::prelude::*;
use unistay::server::controller::post::{delete_post, get_posts, put_post};
use unistay_test_utils::prelude::*;

use crate::{util::test_utils::read_json, TestSetupExt};

#[tokio::test]
/// Expect posts to be created, listed and deleted
async fn manages_posts() -> Result<(), TestError> {
    let test = TestBuilder::new().with_empty_posts().build();
    let state = test.into_app_state().await;

    let response = put_post(
        State(state.clone()),
        Path("new".to_string()),
        Json(factory::post("", PostKind::Event)),
    )
    .await
    .unwrap()
    .into_response();
    assert_eq!(response.status(), StatusCode::OK);
    let saved: Post = read_json(response).await?;
    assert!(saved.id.starts_with('p'));

    let response = get_posts(State(state.clone())).await.unwrap().into_response();
    let posts: Vec<Post> = read_json(response).await?;
    assert_eq!(posts, vec![saved.clone()]);

    let response = delete_post(State(state.clone()), Path(saved.id))
        .await
        .unwrap()
        .into_response();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(state.catalog.list_posts().await.is_empty());

    Ok(())
}
