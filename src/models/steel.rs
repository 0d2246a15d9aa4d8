//! Steel path honor rotation.

use crate::dialect::{instant, RawInstant};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One honor offering: item name plus its Steel Essence cost.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SteelPathReward {
    pub name: String,
    pub cost: Option<u32>,
}

/// Represents the weekly steel path state: the honor reward currently on
/// offer, the full rotation it cycles through and the window of the current
/// offer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SteelPath {
    pub current_reward: Option<SteelPathReward>,
    pub rotation: Vec<SteelPathReward>,
    pub activation: Option<DateTime<Utc>>,
    pub expiry: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawSteelReward {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    cost: Option<u32>,
}

impl RawSteelReward {
    fn normalize(&self) -> Option<SteelPathReward> {
        Some(SteelPathReward {
            name: self.name.clone()?,
            cost: self.cost,
        })
    }
}

/// Raw steel path record as either dialect emits it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawSteelPath {
    #[serde(default)]
    current_reward: Option<RawSteelReward>,
    #[serde(default)]
    rotation: Vec<RawSteelReward>,
    #[serde(default, alias = "start")]
    activation: Option<RawInstant>,
    #[serde(default, alias = "end")]
    expiry: Option<RawInstant>,
}

impl RawSteelPath {
    pub(crate) fn normalize(&self) -> SteelPath {
        SteelPath {
            current_reward: self
                .current_reward
                .as_ref()
                .and_then(RawSteelReward::normalize),
            rotation: self
                .rotation
                .iter()
                .filter_map(RawSteelReward::normalize)
                .collect(),
            activation: instant(&self.activation, &None),
            expiry: instant(&self.expiry, &None),
        }
    }
}
