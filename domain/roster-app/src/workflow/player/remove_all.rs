use std::sync::Arc;

use crate::domain::player::{PlayerRecord, PlayerRepository};

#[async_trait::async_trait]
pub trait RemoveAllPlayersUseCase {
    async fn remove_all_players(&self) -> Result<Vec<PlayerRecord>, RemoveAllPlayersError>;
}

#[derive(Debug)]
pub enum RemoveAllPlayersError {
    RepositoryError,
}

pub struct RemoveAllPlayersUseCaseImpl<P: PlayerRepository> {
    player_repo: Arc<P>,
}

impl<P: PlayerRepository> RemoveAllPlayersUseCaseImpl<P> {
    pub fn new(player_repo: Arc<P>) -> Self {
        Self { player_repo }
    }
}

#[async_trait::async_trait]
impl<P: PlayerRepository + Send + Sync + 'static> RemoveAllPlayersUseCase
    for RemoveAllPlayersUseCaseImpl<P>
{
    async fn remove_all_players(&self) -> Result<Vec<PlayerRecord>, RemoveAllPlayersError> {
        match self.player_repo.delete_all_players().await {
            Ok(removed) => {
                log::info!("Removed all {} players", removed.len());
                Ok(removed)
            }
            Err(e) => {
                log::error!("Failed to remove all players: {}", e);
                Err(RemoveAllPlayersError::RepositoryError)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::player::MockPlayerRepository;

    use super::*;

    #[tokio::test]
    async fn test_remove_all_returns_snapshot_and_empties_store() {
        let players = vec![
            PlayerRecord::new("Jett-001"),
            PlayerRecord::new("Sage-002"),
            PlayerRecord::new("Sova-003"),
        ];
        let repo = MockPlayerRepository::with_players(players.clone());
        let use_case = RemoveAllPlayersUseCaseImpl::new(Arc::new(repo.clone()));

        let removed = use_case.remove_all_players().await.expect("remove failed");

        assert_eq!(removed, players);
        assert!(repo.get_players().is_empty());
    }

    #[tokio::test]
    async fn test_remove_all_failure_returns_no_snapshot() {
        let repo = MockPlayerRepository::with_players([PlayerRecord::new("Jett-001")]);
        repo.set_failing(true);
        let use_case = RemoveAllPlayersUseCaseImpl::new(Arc::new(repo.clone()));

        assert!(matches!(
            use_case.remove_all_players().await,
            Err(RemoveAllPlayersError::RepositoryError)
        ));
        assert_eq!(repo.get_players().len(), 1);
    }
}
