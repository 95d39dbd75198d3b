use std::sync::Arc;

use crate::{
    domain::player::PlayerRepository,
    workflow::player::{
        create::{CreatePlayerUseCase, CreatePlayerUseCaseImpl},
        get::{GetPlayerUseCase, GetPlayerUseCaseImpl},
        list::{ListPlayersUseCase, ListPlayersUseCaseImpl},
        remove::{RemovePlayerUseCase, RemovePlayerUseCaseImpl},
        remove_all::{RemoveAllPlayersUseCase, RemoveAllPlayersUseCaseImpl},
        update::{UpdatePlayerUseCase, UpdatePlayerUseCaseImpl},
    },
};

pub mod domain;
pub mod workflow;

pub struct Application {
    pub player_list_use_case: Box<dyn ListPlayersUseCase + Send + Sync + 'static>,
    pub player_get_use_case: Box<dyn GetPlayerUseCase + Send + Sync + 'static>,
    pub player_create_use_case: Box<dyn CreatePlayerUseCase + Send + Sync + 'static>,
    pub player_update_use_case: Box<dyn UpdatePlayerUseCase + Send + Sync + 'static>,
    pub player_remove_use_case: Box<dyn RemovePlayerUseCase + Send + Sync + 'static>,
    pub player_remove_all_use_case: Box<dyn RemoveAllPlayersUseCase + Send + Sync + 'static>,
}

pub fn build_application<P: PlayerRepository + Send + Sync + 'static>(
    player_repository: Arc<P>,
) -> Application {
    Application {
        player_list_use_case: Box::new(ListPlayersUseCaseImpl::new(player_repository.clone())),
        player_get_use_case: Box::new(GetPlayerUseCaseImpl::new(player_repository.clone())),
        player_create_use_case: Box::new(CreatePlayerUseCaseImpl::new(player_repository.clone())),
        player_update_use_case: Box::new(UpdatePlayerUseCaseImpl::new(player_repository.clone())),
        player_remove_use_case: Box::new(RemovePlayerUseCaseImpl::new(player_repository.clone())),
        player_remove_all_use_case: Box::new(RemoveAllPlayersUseCaseImpl::new(player_repository)),
    }
}
