use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// The entity a lookup failed to find; drives the 404 message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Team,
    Athlete,
    AthleteTeam,
    Championship,
    Game,
}

impl Entity {
    fn message(self) -> &'static str {
        match self {
            Entity::Team => "team not found",
            Entity::Athlete => "athlete not found",
            Entity::AthleteTeam => "team not found for athlete",
            Entity::Championship => "championship not found",
            Entity::Game => "game not found",
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{}", .0.message())]
    NotFound(Entity),
    #[error("missing required fields")]
    MissingFields,
    #[error("invalid request")]
    InvalidRequest,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Serialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::NotFound(entity) => (StatusCode::NOT_FOUND, entity.message().to_string()),
            ApiError::MissingFields | ApiError::InvalidRequest => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            ApiError::Database(err) => {
                tracing::error!(error = ?err, "database error while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(MessageBody::new(message))).into_response()
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!("rejected path parameters: {}", rejection);
        ApiError::InvalidRequest
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!("rejected query string: {}", rejection);
        ApiError::InvalidRequest
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("rejected request body: {}", rejection);
        ApiError::InvalidRequest
    }
}
