//! Rotating limited-time missions: sortie, archon hunt, arbitration.

use crate::dialect::{instant, RawInstant};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One stage of a multi-stage mission (a sortie variant or archon hunt node).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MissionStage {
    pub node: Option<String>,
    pub mission_type: Option<String>,
    pub modifier: Option<String>,
}

/// Shared normalized shape for multi-stage rotating content. Sorties and
/// archon hunts both project into it; the stages list keeps upstream order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimedMission {
    pub boss: Option<String>,
    pub faction: Option<String>,
    pub activation: Option<DateTime<Utc>>,
    pub expiry: Option<DateTime<Utc>>,
    pub stages: Vec<MissionStage>,
    pub reward_pool: Vec<String>,
}

/// Represents the hourly arbitration mission.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Arbitration {
    pub node: String,
    pub enemy: Option<String>,
    pub mission_type: Option<String>,
    pub expiry: Option<DateTime<Utc>>,
    pub is_archwing: bool,
    pub is_sharkwing: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawStage {
    #[serde(default, alias = "location")]
    node: Option<String>,
    #[serde(default, alias = "type")]
    mission_type: Option<String>,
    #[serde(default, alias = "modifierType")]
    modifier: Option<String>,
}

/// Raw sortie / archon hunt entry as either dialect emits it.
///
/// `faction`/`factionKey` and `boss`/`enemy` appear side by side in one
/// warframestat entry; a serde alias rejects the pair as a duplicate field,
/// so co-occurring names stay separate and merge in `normalize`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawTimedMission {
    #[serde(default)]
    boss: Option<String>,
    #[serde(default)]
    boss_name: Option<String>,
    #[serde(default)]
    enemy: Option<String>,
    #[serde(default)]
    faction: Option<String>,
    #[serde(default)]
    faction_key: Option<String>,
    #[serde(default)]
    enemy_faction: Option<String>,
    #[serde(default, alias = "start", alias = "startTime")]
    activation: Option<RawInstant>,
    #[serde(default, alias = "end", alias = "endTime")]
    expiry: Option<RawInstant>,
    #[serde(default, alias = "variants", alias = "nodes")]
    missions: Vec<RawStage>,
    #[serde(default, alias = "rewards")]
    reward_pool: Value,
}

impl RawTimedMission {
    pub(crate) fn normalize(&self) -> TimedMission {
        TimedMission {
            boss: self
                .boss
                .clone()
                .or_else(|| self.boss_name.clone())
                .or_else(|| self.enemy.clone()),
            faction: self
                .faction
                .clone()
                .or_else(|| self.faction_key.clone())
                .or_else(|| self.enemy_faction.clone()),
            activation: instant(&self.activation, &None),
            expiry: instant(&self.expiry, &None),
            stages: self
                .missions
                .iter()
                .map(|stage| MissionStage {
                    node: stage.node.clone(),
                    mission_type: stage.mission_type.clone(),
                    modifier: stage.modifier.clone(),
                })
                .collect(),
            reward_pool: reward_pool_items(&self.reward_pool),
        }
    }
}

/// Raw arbitration entry as either dialect emits it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawArbitration {
    #[serde(default, alias = "location")]
    node: Option<String>,
    #[serde(default, alias = "faction")]
    enemy: Option<String>,
    #[serde(default, alias = "type")]
    mission_type: Option<String>,
    #[serde(default, alias = "end")]
    expiry: Option<RawInstant>,
    #[serde(default)]
    archwing: Option<bool>,
    #[serde(default)]
    sharkwing: Option<bool>,
}

impl RawArbitration {
    pub(crate) fn normalize(&self) -> Option<Arbitration> {
        Some(Arbitration {
            node: self.node.clone()?,
            enemy: self.enemy.clone(),
            mission_type: self.mission_type.clone(),
            expiry: instant(&self.expiry, &None),
            is_archwing: self.archwing.unwrap_or(false),
            is_sharkwing: self.sharkwing.unwrap_or(false),
        })
    }
}

/// The reward pool arrives as a string list, a single string, or omitted.
fn reward_pool_items(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        Value::String(single) => vec![single.clone()],
        _ => Vec::new(),
    }
}
