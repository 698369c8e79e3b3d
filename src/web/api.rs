//! REST handlers for queue definitions

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::error::ApiError;
use super::server::AppState;
use crate::queue::{queue_name_for, QueueDocument, QueueError, QueueRegistry, UploadedFile};

/// A queue as returned to the UI, with its highlighted markup
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueueView {
    pub name: String,
    pub yaml: String,
    pub formatted: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateQueueBody {
    pub name: String,
    pub yaml: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateQueueBody {
    pub yaml: String,
}

#[derive(Debug, Deserialize)]
pub struct FormatBody {
    #[serde(default)]
    pub yaml: serde_json::Value,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FormatResponse {
    pub formatted: String,
}

fn to_view(state: &AppState, document: &QueueDocument) -> QueueView {
    QueueView {
        name: document.name.clone(),
        yaml: document.yaml.clone(),
        formatted: state.highlighter.format(&document.yaml),
    }
}

/// Apply a change to a copy of the registry, persist it, then publish it.
///
/// The write lock is held across the save so concurrent mutations reach disk
/// in order. A failed save leaves the served registry untouched.
async fn commit<T>(
    state: &AppState,
    change: impl FnOnce(&mut QueueRegistry) -> Result<T, QueueError>,
) -> Result<T, ApiError> {
    let mut registry = state.registry.write().await;
    let mut next = registry.clone();
    let outcome = change(&mut next)?;

    if let Some(storage) = &state.storage {
        if let Err(e) = storage.save(&next).await {
            warn!("Rolling back queue change, save failed: {:#}", e);
            return Err(e.into());
        }
    }

    *registry = next;
    Ok(outcome)
}

/// `GET /api/queues`
pub async fn list_queues(State(state): State<AppState>) -> Json<Vec<QueueView>> {
    let registry = state.registry.read().await;
    debug!("Listing {} queues", registry.len());
    Json(
        registry
            .list()
            .into_iter()
            .map(|document| to_view(&state, document))
            .collect(),
    )
}

/// `POST /api/queues`
pub async fn create_queue(
    State(state): State<AppState>,
    Json(body): Json<CreateQueueBody>,
) -> Result<(StatusCode, Json<QueueView>), ApiError> {
    let document = commit(&state, |registry| {
        registry.create(&body.name, &body.yaml).cloned()
    })
    .await?;

    Ok((StatusCode::CREATED, Json(to_view(&state, &document))))
}

/// `GET /api/queues/:name`
pub async fn get_queue(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<QueueView>, ApiError> {
    let registry = state.registry.read().await;
    let document = registry
        .get(&name)
        .ok_or_else(|| QueueError::NotFound(name.clone()))?;
    Ok(Json(to_view(&state, document)))
}

/// `PUT /api/queues/:name`
pub async fn update_queue(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(body): Json<UpdateQueueBody>,
) -> Result<(StatusCode, Json<QueueView>), ApiError> {
    let created = commit(&state, |registry| registry.upsert(&name, &body.yaml)).await?;

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    let view = QueueView {
        formatted: state.highlighter.format(&body.yaml),
        name,
        yaml: body.yaml,
    };
    Ok((status, Json(view)))
}

/// `DELETE /api/queues/:name`
pub async fn delete_queue(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<StatusCode, ApiError> {
    commit(&state, |registry| registry.remove(&name)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /api/upload`: store an uploaded `.yaml` / `.yml` file
pub async fn upload_queue(
    State(state): State<AppState>,
    Json(file): Json<UploadedFile>,
) -> Result<(StatusCode, Json<QueueView>), ApiError> {
    let name = queue_name_for(&file)?;
    info!("📤 Upload {} -> queue {}", file.file_name, name);

    let created = commit(&state, |registry| registry.upsert(&name, &file.content)).await?;

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    let view = QueueView {
        formatted: state.highlighter.format(&file.content),
        name,
        yaml: file.content,
    };
    Ok((status, Json(view)))
}

/// `POST /api/format`: highlight arbitrary text without storing it
pub async fn format_yaml(
    State(state): State<AppState>,
    Json(body): Json<FormatBody>,
) -> Result<Json<FormatResponse>, ApiError> {
    let formatted = state.highlighter.format_value(&body.yaml)?;
    Ok(Json(FormatResponse { formatted }))
}
