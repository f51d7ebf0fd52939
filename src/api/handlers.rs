// Albums API handlers
// One handler per route; each maps straight onto a storage or fan-out operation

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use super::types::{current_timestamp, AlbumJson, ErrorResponse, HealthResponse, IndentedJson};
use crate::engine::{AlbumStorage, FanOutJoiner, InMemoryAlbumStorage};
use crate::models::{Album, JoinResult};
use crate::AlbumsError;

/// Shared application state for the Albums API
#[derive(Clone)]
pub struct AlbumsApiState {
    pub storage: Arc<dyn AlbumStorage>,
    pub joiner: Arc<FanOutJoiner>,
}

impl AlbumsApiState {
    pub fn new(storage: Arc<dyn AlbumStorage>, joiner: FanOutJoiner) -> Self {
        Self {
            storage,
            joiner: Arc::new(joiner),
        }
    }
}

impl Default for AlbumsApiState {
    fn default() -> Self {
        Self::new(
            Arc::new(InMemoryAlbumStorage::seeded()),
            FanOutJoiner::default(),
        )
    }
}

/// Health check endpoint - GET /health
pub async fn health_check() -> impl IntoResponse {
    IndentedJson(HealthResponse {
        status: "ok".to_string(),
        service: "albums-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: current_timestamp(),
    })
}

/// List every album - GET /albums
pub async fn get_albums(
    State(state): State<AlbumsApiState>,
) -> Result<IndentedJson<Vec<Album>>, ErrorResponse> {
    let albums = state.storage.list_albums().await?;
    debug!("Listing {} albums", albums.len());

    Ok(IndentedJson(albums))
}

/// Look up one album - GET /albumByID/:id
pub async fn get_album_by_id(
    State(state): State<AlbumsApiState>,
    Path(id): Path<String>,
) -> Result<IndentedJson<Album>, ErrorResponse> {
    debug!("Looking up album {}", id);

    let album = state.storage.get_album(&id).await?;

    album
        .map(IndentedJson)
        .ok_or_else(|| AlbumsError::NotFound(id).into())
}

/// Append a new album - POST /postAlbums
pub async fn post_albums(
    State(state): State<AlbumsApiState>,
    AlbumJson(album): AlbumJson<Album>,
) -> Result<(StatusCode, IndentedJson<Album>), ErrorResponse> {
    let album = state.storage.insert_album(album).await?;
    info!("➕ Added album {} ({})", album.id, album.title);

    Ok((StatusCode::CREATED, IndentedJson(album)))
}

/// Replace an album in place - PUT /updateAlbums/:id
///
/// The body's own `id` wins: updating `/updateAlbums/1` with `{"id": "42", ...}`
/// renames the record.
pub async fn update_albums(
    State(state): State<AlbumsApiState>,
    Path(id): Path<String>,
    AlbumJson(album): AlbumJson<Album>,
) -> Result<IndentedJson<Album>, ErrorResponse> {
    match state.storage.replace_album(&id, album).await? {
        Some(album) => {
            info!("✏️  Updated album {}", id);
            Ok(IndentedJson(album))
        }
        None => {
            debug!("Update of unknown album {}", id);
            Err(AlbumsError::NotFound(id).into())
        }
    }
}

/// Bind an optional delete body and throw it away
///
/// Empty or whitespace-only bodies are fine. Anything else must parse as an
/// album. No content type is required, so body-less clients never need one.
fn check_delete_body(body: &[u8]) -> crate::Result<()> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(());
    }

    serde_json::from_slice::<Album>(body)?;
    Ok(())
}

/// Remove an album - DELETE /deleteAlbums/:id
///
/// Answers with the remaining catalogue. A request body is optional; when one
/// is sent it must still bind to the album shape, but only the path id is used.
/// The body is checked before the lookup, so a malformed body is a 400 even
/// for an unknown id.
pub async fn delete_albums(
    State(state): State<AlbumsApiState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<IndentedJson<Vec<Album>>, ErrorResponse> {
    if let Err(e) = check_delete_body(&body) {
        warn!("Rejected delete body for album {}: {}", id, e);
        return Err(e.into());
    }

    match state.storage.delete_album(&id).await? {
        Some(remaining) => {
            info!("🗑️  Deleted album {} ({} left)", id, remaining.len());
            Ok(IndentedJson(remaining))
        }
        None => {
            debug!("Delete of unknown album {}", id);
            Err(AlbumsError::NotFound(id).into())
        }
    }
}

/// Fan out two downstream calls and join them - GET /handlerWithGorutine
pub async fn handler_with_goroutine(
    State(state): State<AlbumsApiState>,
) -> Result<IndentedJson<JoinResult>, ErrorResponse> {
    let result = state.joiner.fetch_and_join().await.map_err(|e| {
        error!("❌ Fan-out demo failed: {}", e);
        ErrorResponse::from(e)
    })?;

    Ok(IndentedJson(result))
}

/// Fallback for unknown routes
pub async fn not_found() -> impl IntoResponse {
    ErrorResponse::new(StatusCode::NOT_FOUND, "route not found")
}
