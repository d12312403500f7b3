use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tolk_types::{SessionEvent, SessionId};
use tower_http::trace::TraceLayer;

pub mod bridge;
pub mod error;
pub mod views;

pub use bridge::UiBridge;
pub use error::UiError;
pub use views::{CatalogView, OutputView, SessionView};

const INDEX_HTML: &str = include_str!("../assets/index.html");

#[derive(Clone)]
pub struct UiState {
    bridge: UiBridge,
    catalog: Arc<CatalogView>,
}

impl UiState {
    pub fn new(bridge: UiBridge, catalog: CatalogView) -> Self {
        Self {
            bridge,
            catalog: Arc::new(catalog),
        }
    }
}

pub fn router(state: UiState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/api/catalog", get(catalog))
        .route("/api/sessions", post(open_session))
        .route("/api/sessions/{id}", get(view_session).delete(close_session))
        .route("/api/sessions/{id}/events", post(send_event))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the front-end until `cancel` fires
pub async fn ui_loop(
    listener: TcpListener,
    state: UiState,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!("UI listening on http://{}", addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async move { cancel.cancelled().await })
        .await?;

    tracing::info!("UI server stopped");
    Ok(())
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health_check() -> &'static str {
    "OK"
}

async fn catalog(State(state): State<UiState>) -> Json<CatalogView> {
    Json(state.catalog.as_ref().clone())
}

async fn open_session(
    State(state): State<UiState>,
) -> Result<(StatusCode, Json<SessionView>), UiError> {
    let snapshot = state.bridge.open_session().await?;
    tracing::debug!("Opened session {}", snapshot.id);
    Ok((StatusCode::CREATED, Json(snapshot.into())))
}

async fn view_session(
    State(state): State<UiState>,
    Path(id): Path<SessionId>,
) -> Result<Json<SessionView>, UiError> {
    let snapshot = state.bridge.view_session(id).await?;
    Ok(Json(snapshot.into()))
}

async fn send_event(
    State(state): State<UiState>,
    Path(id): Path<SessionId>,
    Json(event): Json<SessionEvent>,
) -> Result<Json<SessionView>, UiError> {
    let snapshot = state.bridge.send_event(id, event).await?;
    Ok(Json(snapshot.into()))
}

async fn close_session(
    State(state): State<UiState>,
    Path(id): Path<SessionId>,
) -> Result<StatusCode, UiError> {
    state.bridge.close_session(id).await?;
    tracing::debug!("Closed session {}", id);
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests;
