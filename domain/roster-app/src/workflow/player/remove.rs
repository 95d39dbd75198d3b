use std::sync::Arc;

use crate::domain::player::{PlayerRecord, PlayerRepository};

#[async_trait::async_trait]
pub trait RemovePlayerUseCase {
    /// Deleting an unknown key is not an error, it yields `Ok(None)`.
    async fn remove_player(&self, riot_id: &str)
    -> Result<Option<PlayerRecord>, RemovePlayerError>;
}

#[derive(Debug)]
pub enum RemovePlayerError {
    RepositoryError,
}

pub struct RemovePlayerUseCaseImpl<P: PlayerRepository> {
    player_repo: Arc<P>,
}

impl<P: PlayerRepository> RemovePlayerUseCaseImpl<P> {
    pub fn new(player_repo: Arc<P>) -> Self {
        Self { player_repo }
    }
}

#[async_trait::async_trait]
impl<P: PlayerRepository + Send + Sync + 'static> RemovePlayerUseCase
    for RemovePlayerUseCaseImpl<P>
{
    async fn remove_player(
        &self,
        riot_id: &str,
    ) -> Result<Option<PlayerRecord>, RemovePlayerError> {
        match self.player_repo.delete_player(riot_id).await {
            Ok(removed) => {
                if removed.is_some() {
                    log::info!("Removed player {}", riot_id);
                }
                Ok(removed)
            }
            Err(e) => {
                log::error!("Failed to remove player {}: {}", riot_id, e);
                Err(RemovePlayerError::RepositoryError)
            }
        }
    }
}
