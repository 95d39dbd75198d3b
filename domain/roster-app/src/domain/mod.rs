use thiserror::Error;

pub mod player;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Storage error: {0}")]
    StorageError(String),
}

#[derive(Debug, Error)]
pub enum RepoCreateError {
    #[error("Resource already exists")]
    Conflict,
    #[error("Storage error: {0}")]
    StorageError(String),
}
