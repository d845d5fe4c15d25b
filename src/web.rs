//! HTTP front end.
//!
//! Minimal JSON API for the browser client.
//! Endpoints (session chosen with `?session=<id>`, default `"default"`):
//! - GET  /health       - Health check
//! - GET  /init         - Start a new game
//! - POST /player_move  - Play the human move `{x, y}`
//! - GET  /ai_move      - Let the AI play its move
//! - POST /settings     - Update AI settings
//! - GET  /state        - Get current game state

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::constants::DEFAULT_SESSION;
use crate::session::{GameStateView, SessionError, SessionStore, SettingsUpdate};

/// Shared application state
pub struct AppState {
    pub sessions: SessionStore,
}

/// Selects the session a request operates on.
#[derive(Debug, Default, Deserialize)]
pub struct SessionQuery {
    #[serde(default)]
    pub session: Option<String>,
}

impl SessionQuery {
    fn id(&self) -> &str {
        self.session.as_deref().unwrap_or(DEFAULT_SESSION)
    }
}

/// Request to play a move at row `x`, column `y`.
#[derive(Debug, Deserialize)]
pub struct MoveRequest {
    pub x: usize,
    pub y: usize,
}

/// Health check response.
#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Acknowledgement for a settings update.
#[derive(Serialize, Deserialize)]
pub struct SettingsResponse {
    pub status: bool,
}

type ApiResult = Result<Json<GameStateView>, (StatusCode, Json<GameStateView>)>;

fn status_code(err: &SessionError) -> StatusCode {
    match err {
        SessionError::Move(_) => StatusCode::BAD_REQUEST,
        SessionError::Search(_) | SessionError::NotHumanTurn | SessionError::NotAiTurn => {
            StatusCode::CONFLICT
        }
    }
}

/// Create the application router with the given state.
pub fn create_app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/init", get(init_game))
        .route("/player_move", post(player_move))
        .route("/ai_move", get(ai_move))
        .route("/settings", post(update_settings))
        .route("/state", get(game_state))
        .layer(cors)
        .with_state(state)
}

/// Health check.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Reset the session and return the fresh state.
pub async fn init_game(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SessionQuery>,
) -> Json<GameStateView> {
    let session = state.sessions.get_or_create(query.id());
    let mut session = session.lock().await;
    session.reset();
    info!(session = query.id(), "game initialised");
    Json(session.view())
}

/// Get current game state.
pub async fn game_state(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SessionQuery>,
) -> Json<GameStateView> {
    let session = state.sessions.get_or_create(query.id());
    let session = session.lock().await;
    Json(session.view())
}

/// Play the human move.
pub async fn player_move(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SessionQuery>,
    Json(req): Json<MoveRequest>,
) -> ApiResult {
    let session = state.sessions.get_or_create(query.id());
    let mut session = session.lock().await;
    match session.submit_move((req.x, req.y)) {
        Ok(_) => Ok(Json(session.view())),
        Err(err) => {
            warn!(session = query.id(), x = req.x, y = req.y, %err, "move rejected");
            Err((status_code(&err), Json(session.view())))
        }
    }
}

/// Let the AI move. The search runs on the blocking pool while the session
/// lock is held.
pub async fn ai_move(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SessionQuery>,
) -> ApiResult {
    let session = state.sessions.get_or_create(query.id());
    let mut guard = session.lock_owned().await;

    let joined = tokio::task::spawn_blocking(move || {
        let result = guard.request_ai_move().map(|_| ());
        (result, guard.view())
    })
    .await;

    match joined {
        Ok((Ok(()), view)) => Ok(Json(view)),
        Ok((Err(err), view)) => {
            warn!(session = query.id(), %err, "AI move refused");
            Err((status_code(&err), Json(view)))
        }
        Err(join_err) => {
            warn!(session = query.id(), %join_err, "AI search task failed");
            let session = state.sessions.get_or_create(query.id());
            let mut view = session.lock().await.view();
            view.message = "AI search failed".to_string();
            Err((StatusCode::INTERNAL_SERVER_ERROR, Json(view)))
        }
    }
}

/// Update the session's AI settings.
pub async fn update_settings(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SessionQuery>,
    Json(update): Json<SettingsUpdate>,
) -> Json<SettingsResponse> {
    let session = state.sessions.get_or_create(query.id());
    session.lock().await.update_settings(&update);
    info!(session = query.id(), ?update, "settings updated");
    Json(SettingsResponse { status: true })
}

/// Creates a future that completes when a shutdown signal is received.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(%err, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, stopping server...");
}

/// Bind `addr` and serve until Ctrl+C.
pub async fn serve(addr: &str, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = create_app(state);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}
