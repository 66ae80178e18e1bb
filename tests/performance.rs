mod common;

use axum::http::StatusCode;
use common::{count, get, post, seeded_pool};
use serde_json::json;

fn full_line(game: i64, minutes: i64, points: i64) -> serde_json::Value {
    json!({
        "jogos_idJogo": game,
        "minutosJogador": minutes,
        "pontos": points,
        "assistencias": 0,
        "rebotes": 0,
        "bloqueios": 0,
        "roubos": 0,
        "turnovers": 0,
        "faltasCometidas": 0,
        "arremessosConvertidos": 0,
        "arremessosTentados": 0,
        "lancesLivresConvertidos": 0,
        "lancesLivresTentados": 0,
        "bolasTresConvertidas": 0,
        "bolasTresTentadas": 0
    })
}

#[tokio::test]
async fn stat_lines_are_listed_per_game() {
    let app = league_stats_api::app(seeded_pool().await);

    let (status, body) = get(&app, "/atletas/7/desempenho").await;

    assert_eq!(status, StatusCode::OK);
    let lines = body.as_array().unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["jogos_idJogo"], 1);
    assert_eq!(lines[0]["minutosJogador"], 32);
    assert_eq!(lines[1]["pontos"], 30);
    assert_eq!(lines[1]["lancesLivresTentados"], 5);
}

#[tokio::test]
async fn summary_averages_and_records() {
    let app = league_stats_api::app(seeded_pool().await);

    let (status, body) = get(&app, "/atletas/7/desempenho?resumo=true").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["medias"],
        json!({ "pontos": 25.0, "rebotes": 7.5, "assistencias": 5.0, "eficiencia": 27.5 })
    );

    // game 2 was Minas (home) against Franca, the athlete's latest team
    assert_eq!(
        body["recordes"]["pontos"],
        json!({ "valor": 30, "dataJogo": "2024-03-08", "adversario": "Minas" })
    );
    assert_eq!(body["recordes"]["rebotes"]["valor"], 10);
    // game 1 was Franca (home) against Flamengo
    assert_eq!(
        body["recordes"]["assistencias"],
        json!({ "valor": 7, "dataJogo": "2024-03-01", "adversario": "Flamengo" })
    );
}

#[tokio::test]
async fn summary_without_stats_is_zeroed() {
    let app = league_stats_api::app(seeded_pool().await);

    let (status, body) = get(&app, "/atletas/8/desempenho?resumo=true").await;

    assert_eq!(status, StatusCode::OK);
    for field in ["pontos", "rebotes", "assistencias", "eficiencia"] {
        assert_eq!(body["medias"][field].as_f64(), Some(0.0), "{field}");
    }
    assert_eq!(body["recordes"], json!({}));
}

#[tokio::test]
async fn averages_round_to_one_decimal() {
    let pool = seeded_pool().await;
    let app = league_stats_api::app(pool.clone());

    let (status, _) = post(&app, "/atletas/7/desempenho", full_line(3, 10, 0)).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = get(&app, "/atletas/7/desempenho?resumo=true").await;

    // (20 + 30 + 0) / 3
    assert_eq!(body["medias"]["pontos"], 16.7);
    // (22 + 33 + 0) / 3
    assert_eq!(body["medias"]["eficiencia"], 18.3);
}

#[tokio::test]
async fn zero_minutes_and_points_are_valid() {
    let pool = seeded_pool().await;
    let app = league_stats_api::app(pool.clone());

    let (status, body) = post(&app, "/atletas/8/desempenho", full_line(1, 0, 0)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "message": "statistics recorded" }));
    assert_eq!(count(&pool, "SELECT COUNT(*) FROM atletasEstatisticasJogos WHERE atletas_registro = 8").await, 1);
}

#[tokio::test]
async fn missing_points_are_rejected() {
    let pool = seeded_pool().await;
    let app = league_stats_api::app(pool.clone());

    let mut line = full_line(1, 20, 0);
    line.as_object_mut().unwrap().remove("pontos");

    let (status, body) = post(&app, "/atletas/8/desempenho", line).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "missing required fields" }));
    assert_eq!(count(&pool, "SELECT COUNT(*) FROM atletasEstatisticasJogos").await, 2);
}

#[tokio::test]
async fn incomplete_counters_fail_at_the_datastore() {
    let app = league_stats_api::app(seeded_pool().await);

    let (status, body) = post(
        &app,
        "/atletas/8/desempenho",
        json!({ "jogos_idJogo": 1, "minutosJogador": 20, "pontos": 8 }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": "internal server error" }));
}

#[tokio::test]
async fn malformed_summary_flag_is_a_bad_request() {
    let app = league_stats_api::app(seeded_pool().await);

    let (status, body) = get(&app, "/atletas/7/desempenho?resumo=maybe").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "invalid request" }));
}
