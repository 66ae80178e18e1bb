use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqlitePool;
use crate::db;
use crate::error::{ApiError, MessageBody};
use crate::extract;
use crate::models::{GameStatLine, NewGameStatLine, PerformanceSummary, Records};

/// Query parameters for the performance endpoint
#[derive(Deserialize)]
pub struct PerformanceQuery {
    /// Return averages and records instead of the raw stat lines
    #[serde(default)]
    resumo: bool,
}

#[derive(Serialize)]
#[serde(untagged)]
pub enum Performance {
    Lines(Vec<GameStatLine>),
    Summary(PerformanceSummary),
}

// GET /atletas/:registroAtleta/desempenho - Stat lines, or ?resumo=true for averages and records
pub async fn get_performance(
    State(pool): State<SqlitePool>,
    extract::Path(registro): extract::Path<i64>,
    extract::Query(params): extract::Query<PerformanceQuery>,
) -> Result<Json<Performance>, ApiError> {
    if !params.resumo {
        let lines = db::get_athlete_stat_lines(&pool, registro).await?;
        return Ok(Json(Performance::Lines(lines)));
    }

    let medias = db::get_performance_averages(&pool, registro).await?;
    let records = db::get_performance_records(&pool, registro).await?;

    Ok(Json(Performance::Summary(PerformanceSummary {
        medias,
        recordes: Records::from_rows(records),
    })))
}

// POST /atletas/:registroAtleta/desempenho - Record one game's stat line
pub async fn create_stat_line(
    State(pool): State<SqlitePool>,
    extract::Path(registro): extract::Path<i64>,
    extract::Json(body): extract::Json<NewGameStatLine>,
) -> Result<(StatusCode, Json<MessageBody>), ApiError> {
    let line = body.validate()?;

    db::insert_stat_line(&pool, registro, &line).await?;
    tracing::info!("Recorded stat line for athlete {} in game {:?}", registro, line.jogo_id);

    Ok((StatusCode::CREATED, Json(MessageBody::new("statistics recorded"))))
}
