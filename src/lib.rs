use axum::{routing::get, Router};
use sqlx::sqlite::SqlitePool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod models;
pub mod routes;

/// Builds the full router over a connection pool.
pub fn app(pool: SqlitePool) -> Router {
    // Browser clients may call from any origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Root and health
        .route("/", get(|| async { "League Stats API - v1.0" }))
        .route("/health", get(routes::health::health_check))

        // Team endpoints
        .route("/times", get(routes::teams::get_teams).post(routes::teams::create_team))
        .route("/times/{id}", get(routes::teams::get_team_by_id).delete(routes::teams::delete_team))
        .route("/times/{id}/campeonatos", get(routes::teams::get_team_championships))

        // Athlete endpoints
        .route("/atletas", get(routes::athletes::get_athletes).post(routes::athletes::create_athlete))
        .route("/atletas/time/{id_time}", get(routes::athletes::get_team_athletes))
        .route("/atletas/{registro}", get(routes::athletes::get_athlete).delete(routes::athletes::delete_athlete))
        .route("/atletas/{registro}/time", get(routes::athletes::get_athlete_team))
        .route(
            "/atletas/{registro}/desempenho",
            get(routes::performance::get_performance).post(routes::performance::create_stat_line),
        )

        // Championship and game endpoints
        .route("/campeonatos/{edicao}/jogos", get(routes::championships::get_championship_games))
        .route("/jogos/{id}", get(routes::games::get_game_by_id))

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(pool)
}
