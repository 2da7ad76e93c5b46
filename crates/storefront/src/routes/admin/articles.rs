//! Knowledge article management.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use gymstore_core::ArticleId;
use tracing::instrument;

use crate::error::Result;
use crate::middleware::RequireAdmin;
use crate::models::{Article, ArticleDraft};
use crate::state::AppState;

#[instrument(skip_all)]
pub async fn index(_admin: RequireAdmin, State(state): State<AppState>) -> Json<Vec<Article>> {
    Json(state.store().read().await.articles().to_vec())
}

#[instrument(skip(_admin, state))]
pub async fn create(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Json(draft): Json<ArticleDraft>,
) -> Result<(StatusCode, Json<Article>)> {
    let mut store = state.store().write().await;
    let article = store.add_article(&draft)?.clone();
    Ok((StatusCode::CREATED, Json(article)))
}

#[instrument(skip(_admin, state))]
pub async fn update(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<ArticleId>,
    Json(draft): Json<ArticleDraft>,
) -> Result<Json<Article>> {
    let mut store = state.store().write().await;
    Ok(Json(store.update_article(id, &draft)?.clone()))
}

#[instrument(skip(_admin, state))]
pub async fn destroy(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<ArticleId>,
) -> Result<StatusCode> {
    state.store().write().await.delete_article(id)?;
    Ok(StatusCode::NO_CONTENT)
}
