use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use sqlx::sqlite::SqlitePool;
use crate::db;
use crate::error::{ApiError, Entity, MessageBody};
use crate::extract;
use crate::models::{Athlete, AthleteDetail, AthleteTeam, NewAthlete};

fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

// GET /atletas - List all athletes
pub async fn get_athletes(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<Athlete>>, ApiError> {
    let rows = db::get_all_athletes(&pool).await?;
    let today = today();

    Ok(Json(rows.iter().map(|r| r.to_athlete(today)).collect()))
}

// GET /atletas/time/:idTime - Athletes assigned to a team, newest season first
pub async fn get_team_athletes(
    State(pool): State<SqlitePool>,
    extract::Path(team_id): extract::Path<i64>,
) -> Result<Json<Vec<Athlete>>, ApiError> {
    let rows = db::get_team_athletes(&pool, team_id).await?;
    let today = today();

    Ok(Json(rows.iter().map(|r| r.to_athlete(today)).collect()))
}

// GET /atletas/:registroAtleta - Athlete detail
pub async fn get_athlete(
    State(pool): State<SqlitePool>,
    extract::Path(registro): extract::Path<i64>,
) -> Result<Json<AthleteDetail>, ApiError> {
    let row = db::get_athlete_by_registro(&pool, registro)
        .await?
        .ok_or(ApiError::NotFound(Entity::Athlete))?;

    Ok(Json(row.to_athlete_detail(today())))
}

// GET /atletas/:registroAtleta/time - Athlete's current team
pub async fn get_athlete_team(
    State(pool): State<SqlitePool>,
    extract::Path(registro): extract::Path<i64>,
) -> Result<Json<AthleteTeam>, ApiError> {
    let team = db::get_current_team(&pool, registro)
        .await?
        .ok_or(ApiError::NotFound(Entity::AthleteTeam))?;

    Ok(Json(team))
}

// POST /atletas - Register an athlete
pub async fn create_athlete(
    State(pool): State<SqlitePool>,
    extract::Json(body): extract::Json<NewAthlete>,
) -> Result<(StatusCode, Json<MessageBody>), ApiError> {
    let athlete = body.validate()?;

    db::insert_athlete(&pool, &athlete).await?;
    tracing::info!("Registered athlete {}", athlete.registro);

    Ok((StatusCode::CREATED, Json(MessageBody::new("athlete created"))))
}

// DELETE /atletas/:registroAtleta - Delete an athlete with its stat lines and roster rows
pub async fn delete_athlete(
    State(pool): State<SqlitePool>,
    extract::Path(registro): extract::Path<i64>,
) -> Result<Json<MessageBody>, ApiError> {
    if !db::delete_athlete(&pool, registro).await? {
        return Err(ApiError::NotFound(Entity::Athlete));
    }

    tracing::info!("Deleted athlete {}", registro);
    Ok(Json(MessageBody::new("athlete deleted")))
}
