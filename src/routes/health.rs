use axum::{extract::State, http::StatusCode, response::Json};
use serde::Serialize;
use sqlx::sqlite::SqlitePool;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    database: &'static str,
    timestamp: i64,
}

// GET /health - Liveness plus a round trip through the connection pool
pub async fn health_check(
    State(pool): State<SqlitePool>,
) -> (StatusCode, Json<HealthResponse>) {
    let reachable = match sqlx::query("SELECT 1").execute(&pool).await {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!("Health check could not reach the database: {}", e);
            false
        }
    };

    let (status, body_status, database) = if reachable {
        (StatusCode::OK, "ok", "up")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded", "down")
    };

    let response = HealthResponse {
        status: body_status,
        database,
        timestamp: chrono::Utc::now().timestamp(),
    };

    (status, Json(response))
}
