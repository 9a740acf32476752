use crate::presentation::http::state::AppState;
use axum::{Json, extract::State, http::StatusCode};
use serde_json::{Value, json};

/// Liveness probe with a database round-trip. The engine is stateless apart
/// from Postgres, so "database reachable" is the whole health story.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let started = std::time::Instant::now();
    let database_up = match sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&state.db)
        .await
    {
        Ok(_) => true,
        Err(e) => {
            tracing::error!(error = %e, "health check failed, database unreachable");
            false
        }
    };

    let code = if database_up {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    let body = json!({
        "status": if database_up { "healthy" } else { "unhealthy" },
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "database": if database_up { "up" } else { "down" },
        "checked_in_ms": started.elapsed().as_millis() as u64,
    });
    (code, Json(body))
}
