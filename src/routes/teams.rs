use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use sqlx::sqlite::SqlitePool;
use crate::db;
use crate::error::{ApiError, Entity, MessageBody};
use crate::extract;
use crate::models::{Championship, NewTeam, Team, TeamSummary};

// GET /times - List all teams
pub async fn get_teams(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<TeamSummary>>, ApiError> {
    let teams = db::get_all_teams(&pool).await?;

    Ok(Json(teams))
}

// GET /times/:id - Get team by ID
pub async fn get_team_by_id(
    State(pool): State<SqlitePool>,
    extract::Path(team_id): extract::Path<i64>,
) -> Result<Json<Team>, ApiError> {
    let team = db::get_team_by_id(&pool, team_id)
        .await?
        .ok_or(ApiError::NotFound(Entity::Team))?;

    Ok(Json(team))
}

// POST /times - Register a team
pub async fn create_team(
    State(pool): State<SqlitePool>,
    extract::Json(body): extract::Json<NewTeam>,
) -> Result<(StatusCode, Json<MessageBody>), ApiError> {
    let team = body.validate()?;

    db::insert_team(&pool, &team).await?;
    tracing::info!("Registered team {} ({})", team.nome, team.sigla);

    Ok((StatusCode::CREATED, Json(MessageBody::new("team created"))))
}

// DELETE /times/:id - Delete a team and everything referencing it
pub async fn delete_team(
    State(pool): State<SqlitePool>,
    extract::Path(team_id): extract::Path<i64>,
) -> Result<Json<MessageBody>, ApiError> {
    if !db::delete_team(&pool, team_id).await? {
        return Err(ApiError::NotFound(Entity::Team));
    }

    tracing::info!("Deleted team {}", team_id);
    Ok(Json(MessageBody::new("team deleted")))
}

// GET /times/:idTime/campeonatos - Championships the team is registered in
pub async fn get_team_championships(
    State(pool): State<SqlitePool>,
    extract::Path(team_id): extract::Path<i64>,
) -> Result<Json<Vec<Championship>>, ApiError> {
    if !db::team_exists(&pool, team_id).await? {
        return Err(ApiError::NotFound(Entity::Team));
    }

    let championships = db::get_team_championships(&pool, team_id).await?;

    Ok(Json(championships))
}
