//! Request handlers.
//!
//! Each handler locks the shared [`ItemsApi`](itemlistapp::api::ItemsApi) for the
//! whole read-modify-write cycle, so concurrent requests never interleave their
//! reads and writes of the backing file.

use std::io::ErrorKind;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use itemlistapp::error::ItemsError;
use itemlistapp::model::{Item, NewItem};

use crate::server::AppState;

// === Error Response ===

#[derive(Debug, Serialize)]
struct ErrorResponse {
    detail: String,
}

/// Library error carried to the HTTP boundary.
#[derive(Debug)]
pub struct ApiError(ItemsError);

impl From<ItemsError> for ApiError {
    fn from(err: ItemsError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self.0 {
            ItemsError::ItemNotFound(id) => {
                tracing::debug!(id, "Delete target not found");
                (StatusCode::NOT_FOUND, "Item not found".to_string())
            }
            ItemsError::MissingAsset(path) => {
                tracing::error!(path = %path.display(), "Front-end document is missing");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "index.html not found".to_string(),
                )
            }
            other => {
                tracing::error!(error = %other, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };
        (status, Json(ErrorResponse { detail })).into_response()
    }
}

// === Page ===

pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    match tokio::fs::read_to_string(&state.index_file).await {
        Ok(body) => Ok(Html(body)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            Err(ItemsError::MissingAsset(state.index_file.clone()).into())
        }
        Err(e) => Err(ItemsError::Io(e).into()),
    }
}

// === Items ===

pub async fn list_items(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Item>>, ApiError> {
    let api = state.api.lock().await;
    Ok(Json(api.list_items()?))
}

pub async fn create_item(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewItem>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let mut api = state.api.lock().await;
    let item = api.create_item(payload)?;
    tracing::info!(id = item.id, "Created item");
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn delete_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    let mut api = state.api.lock().await;
    api.delete_item(id)?;
    tracing::info!(id, "Deleted item");
    Ok(StatusCode::NO_CONTENT)
}
