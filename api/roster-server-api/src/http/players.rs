use axum::{
    Json,
    extract::{Path, State},
};
use roster_app::domain::player::{PlayerPatch, PlayerRecord};
use serde::{Deserialize, Serialize};

use crate::{
    app::{JsonBody, ServiceError},
    http::AppState,
};

/// Wire form of a player. Attributes missing from a request default to zero.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct JsonPlayer {
    #[serde(rename = "riotid")]
    pub riot_id: String,
    #[serde(rename = "irlname")]
    pub irl_name: String,
    pub team: String,
    pub rank: String,
    pub role: String,
    pub main: String,
    pub acs: f64,
    pub kdr: f64,
    #[serde(rename = "dpr")]
    pub damage_per_round: f64,
    pub hs: f64,
}

impl From<PlayerRecord> for JsonPlayer {
    fn from(player: PlayerRecord) -> Self {
        Self {
            riot_id: player.riot_id,
            irl_name: player.irl_name,
            team: player.team,
            rank: player.rank,
            role: player.role,
            main: player.main,
            acs: player.acs,
            kdr: player.kdr,
            damage_per_round: player.damage_per_round,
            hs: player.hs,
        }
    }
}

impl From<JsonPlayer> for PlayerRecord {
    fn from(player: JsonPlayer) -> Self {
        Self {
            riot_id: player.riot_id,
            irl_name: player.irl_name,
            team: player.team,
            rank: player.rank,
            role: player.role,
            main: player.main,
            acs: player.acs,
            kdr: player.kdr,
            damage_per_round: player.damage_per_round,
            hs: player.hs,
        }
    }
}

/// Update body. A field is applied only when its key is present and not `null`;
/// `riotid` is ignored, the path decides which player is updated.
#[derive(Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct JsonPlayerPatch {
    #[serde(rename = "irlname")]
    pub irl_name: Option<String>,
    pub team: Option<String>,
    pub rank: Option<String>,
    pub role: Option<String>,
    pub main: Option<String>,
    pub acs: Option<f64>,
    pub kdr: Option<f64>,
    #[serde(rename = "dpr")]
    pub damage_per_round: Option<f64>,
    pub hs: Option<f64>,
}

impl From<JsonPlayerPatch> for PlayerPatch {
    fn from(patch: JsonPlayerPatch) -> Self {
        Self {
            irl_name: patch.irl_name,
            team: patch.team,
            rank: patch.rank,
            role: patch.role,
            main: patch.main,
            acs: patch.acs,
            kdr: patch.kdr,
            damage_per_round: patch.damage_per_round,
            hs: patch.hs,
        }
    }
}

pub async fn get_all_players(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<JsonPlayer>>, ServiceError> {
    let players = app_state.app.player_list_use_case.list_players().await?;
    Ok(Json(players.into_iter().map(JsonPlayer::from).collect()))
}

pub async fn get_player(
    Path(riot_id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<JsonPlayer>, ServiceError> {
    let player = app_state
        .app
        .player_get_use_case
        .get_player(&riot_id)
        .await?;
    Ok(Json(player.into()))
}

pub async fn create_player(
    State(app_state): State<AppState>,
    JsonBody(player): JsonBody<JsonPlayer>,
) -> Result<Json<JsonPlayer>, ServiceError> {
    let player = app_state
        .app
        .player_create_use_case
        .create_player(player.into())
        .await?;
    Ok(Json(player.into()))
}

pub async fn update_player(
    Path(riot_id): Path<String>,
    State(app_state): State<AppState>,
    JsonBody(patch): JsonBody<JsonPlayerPatch>,
) -> Result<Json<JsonPlayer>, ServiceError> {
    let player = app_state
        .app
        .player_update_use_case
        .update_player(&riot_id, patch.into())
        .await?;
    Ok(Json(player.into()))
}

/// Responds with the removed player, or `null` if nothing matched the key.
pub async fn delete_player(
    Path(riot_id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<Option<JsonPlayer>>, ServiceError> {
    let removed = app_state
        .app
        .player_remove_use_case
        .remove_player(&riot_id)
        .await?;
    Ok(Json(removed.map(JsonPlayer::from)))
}

pub async fn delete_all_players(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<JsonPlayer>>, ServiceError> {
    let removed = app_state
        .app
        .player_remove_all_use_case
        .remove_all_players()
        .await?;
    Ok(Json(removed.into_iter().map(JsonPlayer::from).collect()))
}
