use std::sync::Arc;

use crate::domain::player::{PlayerRecord, PlayerRepository};

#[async_trait::async_trait]
pub trait ListPlayersUseCase {
    async fn list_players(&self) -> Result<Vec<PlayerRecord>, ListPlayersError>;
}

#[derive(Debug)]
pub enum ListPlayersError {
    RepositoryError,
}

pub struct ListPlayersUseCaseImpl<P: PlayerRepository> {
    player_repo: Arc<P>,
}

impl<P: PlayerRepository> ListPlayersUseCaseImpl<P> {
    pub fn new(player_repo: Arc<P>) -> Self {
        Self { player_repo }
    }
}

#[async_trait::async_trait]
impl<P: PlayerRepository + Send + Sync + 'static> ListPlayersUseCase for ListPlayersUseCaseImpl<P> {
    async fn list_players(&self) -> Result<Vec<PlayerRecord>, ListPlayersError> {
        self.player_repo.list_players().await.map_err(|e| {
            log::error!("Failed to list players: {}", e);
            ListPlayersError::RepositoryError
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::player::MockPlayerRepository;

    use super::*;

    #[tokio::test]
    async fn test_list_players_on_empty_store() {
        let use_case = ListPlayersUseCaseImpl::new(Arc::new(MockPlayerRepository::default()));
        let players = use_case.list_players().await.expect("listing failed");
        assert!(players.is_empty());
    }

    #[tokio::test]
    async fn test_list_players_storage_failure() {
        let repo = MockPlayerRepository::with_players([PlayerRecord::new("Jett-001")]);
        repo.set_failing(true);
        let use_case = ListPlayersUseCaseImpl::new(Arc::new(repo));
        assert!(matches!(
            use_case.list_players().await,
            Err(ListPlayersError::RepositoryError)
        ));
    }
}
