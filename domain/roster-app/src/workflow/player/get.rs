use std::sync::Arc;

use crate::domain::player::{PlayerRecord, PlayerRepository};

#[async_trait::async_trait]
pub trait GetPlayerUseCase {
    async fn get_player(&self, riot_id: &str) -> Result<PlayerRecord, GetPlayerError>;
}

#[derive(Debug)]
pub enum GetPlayerError {
    NotFound,
    RepositoryError,
}

pub struct GetPlayerUseCaseImpl<P: PlayerRepository> {
    player_repo: Arc<P>,
}

impl<P: PlayerRepository> GetPlayerUseCaseImpl<P> {
    pub fn new(player_repo: Arc<P>) -> Self {
        Self { player_repo }
    }
}

#[async_trait::async_trait]
impl<P: PlayerRepository + Send + Sync + 'static> GetPlayerUseCase for GetPlayerUseCaseImpl<P> {
    async fn get_player(&self, riot_id: &str) -> Result<PlayerRecord, GetPlayerError> {
        match self.player_repo.get_player(riot_id).await {
            Ok(Some(player)) => Ok(player),
            Ok(None) => Err(GetPlayerError::NotFound),
            Err(e) => {
                log::error!("Failed to retrieve player {}: {}", riot_id, e);
                Err(GetPlayerError::RepositoryError)
            }
        }
    }
}
