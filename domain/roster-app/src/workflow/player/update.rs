use std::sync::Arc;

use crate::domain::player::{PlayerPatch, PlayerRecord, PlayerRepository};

#[async_trait::async_trait]
pub trait UpdatePlayerUseCase {
    async fn update_player(
        &self,
        riot_id: &str,
        patch: PlayerPatch,
    ) -> Result<PlayerRecord, UpdatePlayerError>;
}

#[derive(Debug)]
pub enum UpdatePlayerError {
    NotFound,
    RepositoryError,
}

pub struct UpdatePlayerUseCaseImpl<P: PlayerRepository> {
    player_repo: Arc<P>,
}

impl<P: PlayerRepository> UpdatePlayerUseCaseImpl<P> {
    pub fn new(player_repo: Arc<P>) -> Self {
        Self { player_repo }
    }
}

#[async_trait::async_trait]
impl<P: PlayerRepository + Send + Sync + 'static> UpdatePlayerUseCase
    for UpdatePlayerUseCaseImpl<P>
{
    async fn update_player(
        &self,
        riot_id: &str,
        patch: PlayerPatch,
    ) -> Result<PlayerRecord, UpdatePlayerError> {
        match self.player_repo.update_player(riot_id, &patch).await {
            Ok(Some(player)) => {
                log::info!("Updated player {}", riot_id);
                Ok(player)
            }
            Ok(None) => Err(UpdatePlayerError::NotFound),
            Err(e) => {
                log::error!("Failed to update player {}: {}", riot_id, e);
                Err(UpdatePlayerError::RepositoryError)
            }
        }
    }
}
