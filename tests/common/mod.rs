#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tower::ServiceExt;

const SCHEMA: &str = include_str!("../fixtures/schema.sql");

const SEED: &str = r#"
INSERT INTO times (id, nome, sigla, cidade, estado, timeEscudo, dataCriacao) VALUES
    (1, 'Flamengo', 'FLA', 'Rio de Janeiro', 'RJ', 'https://img/fla.png', '1895-11-17'),
    (2, 'Franca', 'FRA', 'Franca', 'SP', NULL, NULL),
    (3, 'Minas', 'MIN', 'Belo Horizonte', 'MG', NULL, NULL);

INSERT INTO atletas (registro, nome, nomeCamisa, numeroCamisa, posicao, altura, peso, idade, paisOrigem, dataNascimento) VALUES
    (7, 'Bruno Silva', 'BRUNO', 7, 1, 1.91, 88.0, 30, 'Brasil', NULL),
    (8, 'Carlos Souza', 'CARLOS', 12, 4, 2.05, 104.5, NULL, NULL, '1990-01-01');

INSERT INTO atletasDoTime (atletas_registro, times_id, temporada) VALUES
    (7, 1, 2023),
    (7, 2, 2024),
    (8, 1, 2023),
    (8, 1, 2024);

INSERT INTO jogos (idJogo, dataJogo, quadra, timeCasa, timeFora, pontosCasa, pontosFora) VALUES
    (1, '2024-03-01', 'Pedrocao', 2, 1, 88, 80),
    (2, '2024-03-08', 'Arena Minas', 3, 2, 91, 95),
    (3, '2024-03-15', 'Maracanazinho', 1, 3, 70, 72);

INSERT INTO campeonatos (edicao, nome, localJogo) VALUES
    (2024, 'NBB', 'Brasil');

INSERT INTO timesDoCampeonato (campeonatos_edicao, times_id) VALUES
    (2024, 1),
    (2024, 2);

INSERT INTO jogosDoCampeonato (campeonatos_edicao, jogos_idJogo) VALUES
    (2024, 1),
    (2024, 2);

INSERT INTO atletasEstatisticasJogos (
    atletas_registro, jogos_idJogo, minutosJogador, pontos, assistencias, rebotes, bloqueios, roubos,
    turnovers, faltasCometidas, arremessosConvertidos, arremessosTentados,
    lancesLivresConvertidos, lancesLivresTentados, bolasTresConvertidas, bolasTresTentadas
) VALUES
    (7, 1, 32, 20, 7, 5, 0, 1, 2, 3, 8, 15, 2, 4, 2, 6),
    (7, 2, 36, 30, 3, 10, 1, 2, 4, 2, 12, 20, 4, 5, 2, 5);

INSERT INTO equipesEstatisticasJogos (times_id, jogos_idJogo, pontos) VALUES
    (2, 1, 88),
    (1, 1, 80),
    (1, 3, 70),
    (3, 3, 72);

INSERT INTO resultadoJogo (times_id, jogos_idJogo, vitoria) VALUES
    (2, 1, 1),
    (1, 1, 0),
    (1, 3, 0),
    (3, 3, 1);
"#;

/// Single-connection in-memory pool, so every query sees the same database.
pub async fn empty_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    sqlx::raw_sql(SCHEMA).execute(&pool).await.unwrap();
    pool
}

pub async fn seeded_pool() -> SqlitePool {
    let pool = empty_pool().await;
    sqlx::raw_sql(SEED).execute(&pool).await.unwrap();
    pool
}

pub async fn count(pool: &SqlitePool, sql: &str) -> i64 {
    sqlx::query_scalar(sql).fetch_one(pool).await.unwrap()
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, value)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::DELETE, uri, None).await
}
