use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    auth::jwt::AuthUser,
    error::ApiError,
    posts::{
        dto::{PostDetails, PostListItem, PostPayload},
        repo_types::Post,
        services::{authorize_owner, Access},
    },
    state::AppState,
};

pub fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route(
            "/posts/:id",
            get(get_post).put(update_post).delete(delete_post),
        )
}

#[instrument(skip(state))]
pub async fn list_posts(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<PostListItem>>, ApiError> {
    let posts = Post::list_by_owner(&state.db, user_id).await?;
    Ok(Json(posts.into_iter().map(PostListItem::from).collect()))
}

#[instrument(skip(state))]
pub async fn get_post(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<PostDetails>, ApiError> {
    let post = Post::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Post not found".into()))?;

    authorize_owner(&post, user_id, Access::Read, false)?;

    Ok(Json(post.into()))
}

#[instrument(skip(state, payload))]
pub async fn create_post(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<PostPayload>,
) -> Result<Json<PostDetails>, ApiError> {
    if payload.content.is_empty() {
        warn!("empty content on create");
        return Err(ApiError::Validation("content must not be empty".into()));
    }

    let post = Post::create(
        &state.db,
        user_id,
        payload.title.as_deref(),
        &payload.content,
        payload.cover_url.as_deref(),
        payload.is_public,
        payload.rating,
    )
    .await?;

    info!(post_id = %post.id, %user_id, "post created");
    Ok(Json(post.into()))
}

#[instrument(skip(state, payload))]
pub async fn update_post(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<PostPayload>,
) -> Result<Json<PostDetails>, ApiError> {
    if payload.content.is_empty() {
        warn!("empty content on update");
        return Err(ApiError::Validation("content must not be empty".into()));
    }

    let post = Post::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Post not found".into()))?;

    authorize_owner(
        &post,
        user_id,
        Access::Write,
        state.config.strict_denied_status,
    )?;

    let updated = Post::update(
        &state.db,
        id,
        payload.title.as_deref(),
        &payload.content,
        payload.cover_url.as_deref(),
        payload.is_public,
        payload.rating,
    )
    .await?;

    info!(post_id = %id, %user_id, "post updated");
    Ok(Json(updated.into()))
}

#[instrument(skip(state))]
pub async fn delete_post(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<(), ApiError> {
    let post = Post::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Post not found".into()))?;

    authorize_owner(
        &post,
        user_id,
        Access::Write,
        state.config.strict_denied_status,
    )?;

    Post::delete(&state.db, id).await?;

    info!(post_id = %id, %user_id, "post deleted");
    Ok(())
}
