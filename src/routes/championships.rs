use axum::{extract::State, response::Json};
use sqlx::sqlite::SqlitePool;
use crate::db;
use crate::error::{ApiError, Entity};
use crate::extract;
use crate::models::Game;

// GET /campeonatos/:edicao/jogos - Games of a championship edition
pub async fn get_championship_games(
    State(pool): State<SqlitePool>,
    extract::Path(edicao): extract::Path<i64>,
) -> Result<Json<Vec<Game>>, ApiError> {
    if !db::championship_exists(&pool, edicao).await? {
        return Err(ApiError::NotFound(Entity::Championship));
    }

    let games = db::get_championship_games(&pool, edicao).await?;

    Ok(Json(games))
}
