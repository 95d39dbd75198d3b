use std::{
    collections::BTreeMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, Ordering},
    },
};

use crate::domain::{RepoCreateError, RepoError};

/// Longest accepted `riot_id`, in characters. The `players` key column has the same width.
pub const MAX_RIOT_ID_LEN: usize = 64;

/// A single player profile. `riot_id` ("Name-Tag") is the only lookup key.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlayerRecord {
    pub riot_id: String,
    pub irl_name: String,
    pub team: String,
    pub rank: String,
    pub role: String,
    pub main: String,
    pub acs: f64,
    pub kdr: f64,
    pub damage_per_round: f64,
    pub hs: f64,
}

impl PlayerRecord {
    pub fn new(riot_id: impl Into<String>) -> Self {
        Self {
            riot_id: riot_id.into(),
            ..Default::default()
        }
    }

    /// A record without a key is the zero value and never refers to a stored player.
    pub fn is_found(&self) -> bool {
        !self.riot_id.is_empty()
    }
}

/// Partial update of a [`PlayerRecord`].
///
/// `Some` overwrites the stored field, `None` leaves it alone. The key is not
/// part of the patch, so an update can never move a record to another key.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlayerPatch {
    pub irl_name: Option<String>,
    pub team: Option<String>,
    pub rank: Option<String>,
    pub role: Option<String>,
    pub main: Option<String>,
    pub acs: Option<f64>,
    pub kdr: Option<f64>,
    pub damage_per_round: Option<f64>,
    pub hs: Option<f64>,
}

fn map_string_to_option(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}

fn map_number_to_option(n: f64) -> Option<f64> {
    if n == 0.0 { None } else { Some(n) }
}

impl PlayerPatch {
    /// Builds a patch from a fully populated record, treating every zero value
    /// (empty string, `0.0`) as "not provided". A patch built this way cannot
    /// reset a field to zero.
    pub fn from_non_zero(record: PlayerRecord) -> Self {
        Self {
            irl_name: map_string_to_option(record.irl_name),
            team: map_string_to_option(record.team),
            rank: map_string_to_option(record.rank),
            role: map_string_to_option(record.role),
            main: map_string_to_option(record.main),
            acs: map_number_to_option(record.acs),
            kdr: map_number_to_option(record.kdr),
            damage_per_round: map_number_to_option(record.damage_per_round),
            hs: map_number_to_option(record.hs),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Applies the patch field by field, in data-model order.
    pub fn apply_to(&self, player: &mut PlayerRecord) {
        if let Some(value) = &self.irl_name {
            player.irl_name = value.clone();
        }
        if let Some(value) = &self.team {
            player.team = value.clone();
        }
        if let Some(value) = &self.rank {
            player.rank = value.clone();
        }
        if let Some(value) = &self.role {
            player.role = value.clone();
        }
        if let Some(value) = &self.main {
            player.main = value.clone();
        }
        if let Some(value) = self.acs {
            player.acs = value;
        }
        if let Some(value) = self.kdr {
            player.kdr = value;
        }
        if let Some(value) = self.damage_per_round {
            player.damage_per_round = value;
        }
        if let Some(value) = self.hs {
            player.hs = value;
        }
    }

    pub fn merge(&self, mut player: PlayerRecord) -> PlayerRecord {
        self.apply_to(&mut player);
        player
    }
}

#[async_trait::async_trait]
pub trait PlayerRepository {
    async fn list_players(&self) -> Result<Vec<PlayerRecord>, RepoError>;
    async fn get_player(&self, riot_id: &str) -> Result<Option<PlayerRecord>, RepoError>;
    async fn insert_player(&self, player: PlayerRecord) -> Result<PlayerRecord, RepoCreateError>;
    /// Returns `None` without touching the store when no player has this key.
    async fn update_player(
        &self,
        riot_id: &str,
        patch: &PlayerPatch,
    ) -> Result<Option<PlayerRecord>, RepoError>;
    async fn delete_player(&self, riot_id: &str) -> Result<Option<PlayerRecord>, RepoError>;
    /// Returns the removed records. Nothing is returned if the removal failed.
    async fn delete_all_players(&self) -> Result<Vec<PlayerRecord>, RepoError>;
}

#[derive(Clone, Default)]
pub struct MockPlayerRepository {
    pub players: Arc<Mutex<BTreeMap<String, PlayerRecord>>>,
    pub fail_storage: Arc<AtomicBool>,
}

#[allow(unused)]
impl MockPlayerRepository {
    pub fn with_players(players: impl IntoIterator<Item = PlayerRecord>) -> Self {
        let repo = Self::default();
        {
            let mut stored = repo.players.lock().unwrap();
            for player in players {
                stored.insert(player.riot_id.clone(), player);
            }
        }
        repo
    }

    pub fn set_failing(&self, failing: bool) {
        self.fail_storage.store(failing, Ordering::SeqCst);
    }

    pub fn get_players(&self) -> Vec<PlayerRecord> {
        self.players.lock().unwrap().values().cloned().collect()
    }

    fn check_storage(&self) -> Result<(), RepoError> {
        if self.fail_storage.load(Ordering::SeqCst) {
            Err(RepoError::StorageError("mock storage failure".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait::async_trait]
impl PlayerRepository for MockPlayerRepository {
    async fn list_players(&self) -> Result<Vec<PlayerRecord>, RepoError> {
        self.check_storage()?;
        Ok(self.get_players())
    }

    async fn get_player(&self, riot_id: &str) -> Result<Option<PlayerRecord>, RepoError> {
        self.check_storage()?;
        Ok(self.players.lock().unwrap().get(riot_id).cloned())
    }

    async fn insert_player(&self, player: PlayerRecord) -> Result<PlayerRecord, RepoCreateError> {
        self.check_storage()
            .map_err(|e| RepoCreateError::StorageError(e.to_string()))?;
        let mut players = self.players.lock().unwrap();
        if players.contains_key(&player.riot_id) {
            return Err(RepoCreateError::Conflict);
        }
        players.insert(player.riot_id.clone(), player.clone());
        Ok(player)
    }

    async fn update_player(
        &self,
        riot_id: &str,
        patch: &PlayerPatch,
    ) -> Result<Option<PlayerRecord>, RepoError> {
        self.check_storage()?;
        let mut players = self.players.lock().unwrap();
        Ok(players.get_mut(riot_id).map(|player| {
            patch.apply_to(player);
            player.clone()
        }))
    }

    async fn delete_player(&self, riot_id: &str) -> Result<Option<PlayerRecord>, RepoError> {
        self.check_storage()?;
        Ok(self.players.lock().unwrap().remove(riot_id))
    }

    async fn delete_all_players(&self) -> Result<Vec<PlayerRecord>, RepoError> {
        self.check_storage()?;
        let removed = std::mem::take(&mut *self.players.lock().unwrap());
        Ok(removed.into_values().collect())
    }
}
