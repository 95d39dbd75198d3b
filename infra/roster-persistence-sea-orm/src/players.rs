use roster_app::domain::{
    RepoCreateError, RepoError,
    player::{PlayerPatch, PlayerRecord, PlayerRepository},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Select, Set, SqlErr, TransactionTrait,
};

use crate::entity::player;

pub struct PlayerRepositoryImpl {
    db: DatabaseConnection,
}

impl PlayerRepositoryImpl {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_player(model: player::Model) -> PlayerRecord {
        PlayerRecord {
            riot_id: model.riot_id,
            irl_name: model.irl_name,
            team: model.team,
            rank: model.rank,
            role: model.role,
            main: model.main,
            acs: model.acs,
            kdr: model.kdr,
            damage_per_round: model.damage_per_round,
            hs: model.hs,
        }
    }

    /// Row-locking lookup (`FOR UPDATE` on MySQL). SQLite has no row locks and
    /// serializes writers instead.
    fn find_player_for_update(riot_id: &str) -> Select<player::Entity> {
        player::Entity::find_by_id(riot_id.to_string()).lock_exclusive()
    }

    /// Locks every row and the gaps between them, so no insert can land between
    /// the snapshot and the delete.
    fn find_all_for_update() -> Select<player::Entity> {
        player::Entity::find()
            .order_by_asc(player::Column::RiotId)
            .lock_exclusive()
    }

    fn player_to_active_model(player: &PlayerRecord) -> player::ActiveModel {
        player::ActiveModel {
            riot_id: Set(player.riot_id.clone()),
            irl_name: Set(player.irl_name.clone()),
            team: Set(player.team.clone()),
            rank: Set(player.rank.clone()),
            role: Set(player.role.clone()),
            main: Set(player.main.clone()),
            acs: Set(player.acs),
            kdr: Set(player.kdr),
            damage_per_round: Set(player.damage_per_round),
            hs: Set(player.hs),
        }
    }
}

#[async_trait::async_trait]
impl PlayerRepository for PlayerRepositoryImpl {
    async fn list_players(&self) -> Result<Vec<PlayerRecord>, RepoError> {
        let models = player::Entity::find()
            .order_by_asc(player::Column::RiotId)
            .all(&self.db)
            .await
            .map_err(|e| RepoError::StorageError(e.to_string()))?;

        Ok(models.into_iter().map(Self::model_to_player).collect())
    }

    async fn get_player(&self, riot_id: &str) -> Result<Option<PlayerRecord>, RepoError> {
        let model = player::Entity::find_by_id(riot_id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| RepoError::StorageError(e.to_string()))?;

        Ok(model.map(Self::model_to_player))
    }

    async fn insert_player(&self, player: PlayerRecord) -> Result<PlayerRecord, RepoCreateError> {
        let model = Self::player_to_active_model(&player)
            .insert(&self.db)
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => RepoCreateError::Conflict,
                _ => RepoCreateError::StorageError(e.to_string()),
            })?;

        Ok(Self::model_to_player(model))
    }

    async fn update_player(
        &self,
        riot_id: &str,
        patch: &PlayerPatch,
    ) -> Result<Option<PlayerRecord>, RepoError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| RepoError::StorageError(e.to_string()))?;

        let Some(existing) = Self::find_player_for_update(riot_id)
            .one(&txn)
            .await
            .map_err(|e| RepoError::StorageError(e.to_string()))?
        else {
            return Ok(None);
        };

        let merged = patch.merge(Self::model_to_player(existing));
        if patch.is_empty() {
            return Ok(Some(merged));
        }

        player::Entity::update_many()
            .set(Self::player_to_active_model(&merged))
            .filter(player::Column::RiotId.eq(riot_id))
            .exec(&txn)
            .await
            .map_err(|e| RepoError::StorageError(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| RepoError::StorageError(e.to_string()))?;

        Ok(Some(merged))
    }

    async fn delete_player(&self, riot_id: &str) -> Result<Option<PlayerRecord>, RepoError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| RepoError::StorageError(e.to_string()))?;

        let Some(existing) = Self::find_player_for_update(riot_id)
            .one(&txn)
            .await
            .map_err(|e| RepoError::StorageError(e.to_string()))?
        else {
            return Ok(None);
        };

        player::Entity::delete_by_id(riot_id.to_string())
            .exec(&txn)
            .await
            .map_err(|e| RepoError::StorageError(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| RepoError::StorageError(e.to_string()))?;

        Ok(Some(Self::model_to_player(existing)))
    }

    async fn delete_all_players(&self) -> Result<Vec<PlayerRecord>, RepoError> {
        // Snapshot and delete share one transaction; dropping it on error rolls back.
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| RepoError::StorageError(e.to_string()))?;

        let snapshot = Self::find_all_for_update()
            .all(&txn)
            .await
            .map_err(|e| RepoError::StorageError(e.to_string()))?;

        let result = player::Entity::delete_many()
            .exec(&txn)
            .await
            .map_err(|e| RepoError::StorageError(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| RepoError::StorageError(e.to_string()))?;

        log::debug!(
            "Deleted {} player rows, snapshot held {}",
            result.rows_affected,
            snapshot.len()
        );

        Ok(snapshot.into_iter().map(Self::model_to_player).collect())
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{ConnectionTrait, DbBackend, QueryTrait};

    use crate::{connect, create_schema};

    use super::*;

    async fn setup_repository() -> PlayerRepositoryImpl {
        // One connection, otherwise every pooled connection opens its own in-memory database.
        let db = connect("sqlite::memory:", 1)
            .await
            .expect("Failed to open in-memory database");
        create_schema(&db).await.expect("Failed to create schema");
        PlayerRepositoryImpl::new(db)
    }

    fn jett() -> PlayerRecord {
        PlayerRecord {
            riot_id: "Jett-001".to_string(),
            irl_name: "Sam Park".to_string(),
            team: "Bravo".to_string(),
            rank: "Immortal 2".to_string(),
            role: "Duelist".to_string(),
            main: "Jett".to_string(),
            acs: 251.5,
            kdr: 1.25,
            damage_per_round: 161.0,
            hs: 27.5,
        }
    }

    #[tokio::test]
    async fn test_insert_then_get_round_trip() {
        let repo = setup_repository().await;
        let zeroed = PlayerRecord::new("Jett-001");

        let inserted = repo
            .insert_player(zeroed.clone())
            .await
            .expect("insert failed");
        assert_eq!(inserted, zeroed);

        let fetched = repo.get_player("Jett-001").await.expect("lookup failed");
        assert_eq!(fetched, Some(zeroed));
    }

    #[tokio::test]
    async fn test_get_on_empty_store_misses() {
        let repo = setup_repository().await;
        for key in ["Jett-001", "Unknown-999", ""] {
            assert_eq!(repo.get_player(key).await.expect("lookup failed"), None);
        }
        assert!(repo.list_players().await.expect("list failed").is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_insert_conflicts() {
        let repo = setup_repository().await;
        repo.insert_player(jett()).await.expect("insert failed");

        let duplicate = PlayerRecord {
            team: "Other".to_string(),
            ..PlayerRecord::new("Jett-001")
        };
        assert!(matches!(
            repo.insert_player(duplicate).await,
            Err(RepoCreateError::Conflict)
        ));
        assert_eq!(
            repo.list_players().await.expect("list failed"),
            vec![jett()]
        );
    }

    #[tokio::test]
    async fn test_update_merges_present_fields() {
        let repo = setup_repository().await;
        repo.insert_player(jett()).await.expect("insert failed");

        let patch = PlayerPatch {
            team: Some("Alpha".to_string()),
            acs: Some(0.0),
            ..Default::default()
        };
        let updated = repo
            .update_player("Jett-001", &patch)
            .await
            .expect("update failed");

        let expected = PlayerRecord {
            team: "Alpha".to_string(),
            acs: 0.0,
            ..jett()
        };
        assert_eq!(updated, Some(expected.clone()));
        assert_eq!(
            repo.get_player("Jett-001").await.expect("lookup failed"),
            Some(expected.clone())
        );

        let again = repo
            .update_player("Jett-001", &patch)
            .await
            .expect("update failed");
        assert_eq!(again, Some(expected));
    }

    #[tokio::test]
    async fn test_update_missing_key_leaves_store_unchanged() {
        let repo = setup_repository().await;
        repo.insert_player(jett()).await.expect("insert failed");

        let patch = PlayerPatch {
            team: Some("Alpha".to_string()),
            ..Default::default()
        };
        let updated = repo
            .update_player("Unknown-999", &patch)
            .await
            .expect("update failed");

        assert_eq!(updated, None);
        assert_eq!(
            repo.list_players().await.expect("list failed"),
            vec![jett()]
        );
    }

    #[tokio::test]
    async fn test_delete_player_is_idempotent() {
        let repo = setup_repository().await;
        repo.insert_player(jett()).await.expect("insert failed");

        let removed = repo.delete_player("Jett-001").await.expect("delete failed");
        assert_eq!(removed, Some(jett()));

        let removed_again = repo.delete_player("Jett-001").await.expect("delete failed");
        assert_eq!(removed_again, None);
        assert_eq!(
            repo.get_player("Jett-001").await.expect("lookup failed"),
            None
        );
    }

    #[tokio::test]
    async fn test_delete_all_returns_snapshot_and_empties_store() {
        let repo = setup_repository().await;
        let players = vec![
            jett(),
            PlayerRecord {
                role: "Controller".to_string(),
                ..PlayerRecord::new("Omen-777")
            },
            PlayerRecord {
                role: "Sentinel".to_string(),
                kdr: 0.95,
                ..PlayerRecord::new("Sage-123")
            },
        ];
        for player in &players {
            repo.insert_player(player.clone())
                .await
                .expect("insert failed");
        }

        let before = repo.list_players().await.expect("list failed");
        let removed = repo.delete_all_players().await.expect("delete all failed");

        assert_eq!(removed.len(), players.len());
        assert_eq!(removed, before);
        assert!(repo.list_players().await.expect("list failed").is_empty());
    }

    #[tokio::test]
    async fn test_delete_all_on_empty_store() {
        let repo = setup_repository().await;
        assert!(
            repo.delete_all_players()
                .await
                .expect("delete all failed")
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_delete_all_failure_keeps_rows_and_returns_no_snapshot() {
        let repo = setup_repository().await;
        let players = vec![jett(), PlayerRecord::new("Omen-777")];
        for player in &players {
            repo.insert_player(player.clone())
                .await
                .expect("insert failed");
        }
        repo.db
            .execute_unprepared(
                "CREATE TRIGGER block_player_delete BEFORE DELETE ON players \
                 BEGIN SELECT RAISE(ABORT, 'blocked'); END;",
            )
            .await
            .expect("Failed to create trigger");

        assert!(matches!(
            repo.delete_all_players().await,
            Err(RepoError::StorageError(_))
        ));
        assert_eq!(repo.list_players().await.expect("list failed"), players);
    }

    #[tokio::test]
    async fn test_delete_player_failure_keeps_row() {
        let repo = setup_repository().await;
        repo.insert_player(jett()).await.expect("insert failed");
        repo.db
            .execute_unprepared(
                "CREATE TRIGGER block_player_delete BEFORE DELETE ON players \
                 BEGIN SELECT RAISE(ABORT, 'blocked'); END;",
            )
            .await
            .expect("Failed to create trigger");

        assert!(repo.delete_player("Jett-001").await.is_err());
        assert_eq!(
            repo.get_player("Jett-001").await.expect("lookup failed"),
            Some(jett())
        );
    }

    #[test]
    fn test_mutating_lookups_lock_rows_on_mysql() {
        let single = PlayerRepositoryImpl::find_player_for_update("Jett-001")
            .build(DbBackend::MySql)
            .to_string();
        assert!(single.ends_with("FOR UPDATE"), "{}", single);

        let all = PlayerRepositoryImpl::find_all_for_update()
            .build(DbBackend::MySql)
            .to_string();
        assert!(all.ends_with("FOR UPDATE"), "{}", all);

        let sqlite = PlayerRepositoryImpl::find_all_for_update()
            .build(DbBackend::Sqlite)
            .to_string();
        assert!(!sqlite.contains("FOR UPDATE"), "{}", sqlite);
    }
}
