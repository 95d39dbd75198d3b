use std::sync::Arc;

use crate::domain::{
    RepoCreateError,
    player::{MAX_RIOT_ID_LEN, PlayerRecord, PlayerRepository},
};

#[async_trait::async_trait]
pub trait CreatePlayerUseCase {
    async fn create_player(&self, player: PlayerRecord) -> Result<PlayerRecord, CreatePlayerError>;
}

#[derive(Debug)]
pub enum CreatePlayerError {
    InvalidKey,
    AlreadyExists,
    RepositoryError,
}

pub struct CreatePlayerUseCaseImpl<P: PlayerRepository> {
    player_repo: Arc<P>,
}

impl<P: PlayerRepository> CreatePlayerUseCaseImpl<P> {
    pub fn new(player_repo: Arc<P>) -> Self {
        Self { player_repo }
    }
}

#[async_trait::async_trait]
impl<P: PlayerRepository + Send + Sync + 'static> CreatePlayerUseCase
    for CreatePlayerUseCaseImpl<P>
{
    async fn create_player(&self, player: PlayerRecord) -> Result<PlayerRecord, CreatePlayerError> {
        if !player.is_found() || player.riot_id.chars().count() > MAX_RIOT_ID_LEN {
            return Err(CreatePlayerError::InvalidKey);
        }
        match self.player_repo.insert_player(player).await {
            Ok(player) => {
                log::info!("Created player {}", player.riot_id);
                Ok(player)
            }
            Err(RepoCreateError::Conflict) => Err(CreatePlayerError::AlreadyExists),
            Err(RepoCreateError::StorageError(e)) => {
                log::error!("Failed to create player: {}", e);
                Err(CreatePlayerError::RepositoryError)
            }
        }
    }
}
