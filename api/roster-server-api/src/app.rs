use axum::{
    Json,
    extract::{FromRequest, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use roster_app::workflow::player::{
    create::CreatePlayerError, get::GetPlayerError, list::ListPlayersError,
    remove::RemovePlayerError, remove_all::RemoveAllPlayersError, update::UpdatePlayerError,
};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("method not allowed: {0}")]
    MethodNotAllowed(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            ServiceError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ServiceError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ServiceError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ServiceError::MethodNotAllowed(msg) => (StatusCode::METHOD_NOT_ALLOWED, msg),
            ServiceError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        let body = serde_json::json!({ "error": msg });
        (status, Json(body)).into_response()
    }
}

/// JSON request body whose decode failures are reported as [`ServiceError::BadRequest`].
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ServiceError))]
pub struct JsonBody<T>(pub T);

impl From<JsonRejection> for ServiceError {
    fn from(rejection: JsonRejection) -> Self {
        log::debug!("Rejected request body: {}", rejection.body_text());
        ServiceError::BadRequest(rejection.body_text())
    }
}

const PLAYER_NOT_FOUND: &str = "Player not found";
const STORAGE_FAILURE: &str = "Storage failure";

impl From<ListPlayersError> for ServiceError {
    fn from(value: ListPlayersError) -> Self {
        match value {
            ListPlayersError::RepositoryError => {
                ServiceError::Internal("Failed to list players".to_string())
            }
        }
    }
}

impl From<GetPlayerError> for ServiceError {
    fn from(value: GetPlayerError) -> Self {
        match value {
            GetPlayerError::NotFound => ServiceError::NotFound(PLAYER_NOT_FOUND.to_string()),
            GetPlayerError::RepositoryError => ServiceError::Internal(STORAGE_FAILURE.to_string()),
        }
    }
}

impl From<CreatePlayerError> for ServiceError {
    fn from(value: CreatePlayerError) -> Self {
        match value {
            CreatePlayerError::InvalidKey => {
                ServiceError::BadRequest("riotid must be 1 to 64 characters".to_string())
            }
            CreatePlayerError::AlreadyExists => {
                ServiceError::Conflict("Player already exists".to_string())
            }
            CreatePlayerError::RepositoryError => {
                ServiceError::Internal(STORAGE_FAILURE.to_string())
            }
        }
    }
}

impl From<UpdatePlayerError> for ServiceError {
    fn from(value: UpdatePlayerError) -> Self {
        match value {
            UpdatePlayerError::NotFound => ServiceError::NotFound(PLAYER_NOT_FOUND.to_string()),
            UpdatePlayerError::RepositoryError => {
                ServiceError::Internal(STORAGE_FAILURE.to_string())
            }
        }
    }
}

impl From<RemovePlayerError> for ServiceError {
    fn from(value: RemovePlayerError) -> Self {
        match value {
            RemovePlayerError::RepositoryError => {
                ServiceError::Internal(STORAGE_FAILURE.to_string())
            }
        }
    }
}

impl From<RemoveAllPlayersError> for ServiceError {
    fn from(value: RemoveAllPlayersError) -> Self {
        match value {
            RemoveAllPlayersError::RepositoryError => {
                ServiceError::Internal("Failed to delete players".to_string())
            }
        }
    }
}
