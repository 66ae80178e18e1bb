use axum::{extract::State, response::Json};
use sqlx::sqlite::SqlitePool;
use crate::db;
use crate::error::{ApiError, Entity};
use crate::extract;
use crate::models::GameDetail;

// GET /jogos/:id - Game with both teams' names
pub async fn get_game_by_id(
    State(pool): State<SqlitePool>,
    extract::Path(game_id): extract::Path<i64>,
) -> Result<Json<GameDetail>, ApiError> {
    let game = db::get_game_by_id(&pool, game_id)
        .await?
        .ok_or(ApiError::NotFound(Entity::Game))?;

    Ok(Json(game))
}
