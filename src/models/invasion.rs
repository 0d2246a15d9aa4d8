//! Faction invasions with opposing reward offers and completion progress.

use crate::dialect::{instant, RawInstant};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const DEFAULT_END_SCORE: i64 = 30_000;
const INFESTATION: &str = "Infestation";

/// One reward item with an optional stack count.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RewardItem {
    pub name: String,
    pub count: u32,
}

/// Represents the reward offered by one side of an invasion.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InvasionReward {
    pub items: Vec<RewardItem>,
}

impl InvasionReward {
    /// Display form: `"2x Detonite Injector, Mutagen Mass"`, or `"Unknown"`
    /// when the offer is empty.
    pub fn as_string(&self) -> String {
        if self.items.is_empty() {
            return "Unknown".to_string();
        }
        self.items
            .iter()
            .map(|item| {
                if item.count > 1 {
                    format!("{}x {}", item.count, item.name)
                } else {
                    item.name.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Represents one invasion: the contested node, both factions with their
/// reward offers, and progress toward resolution.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Invasion {
    pub node: String,
    pub attacking_faction: Option<String>,
    pub defending_faction: Option<String>,
    pub attacker_reward: InvasionReward,
    pub defender_reward: InvasionReward,
    /// Upstream completion convention: `((end_score + score) / (end_score * 2)) * 100`.
    /// Attacker and defender shares need not sum to 100 in the source data.
    pub completion_percent: f64,
    pub completed: bool,
    pub vs_infestation: bool,
    pub activation: Option<DateTime<Utc>>,
    /// Estimated seconds to resolution, extrapolated from recent score history.
    pub eta_seconds: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawRewardItem {
    #[serde(default, alias = "type")]
    name: Option<String>,
    #[serde(default)]
    count: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawReward {
    #[serde(default, alias = "countedItems")]
    items: Vec<RawRewardItem>,
}

impl RawReward {
    fn normalize(&self) -> InvasionReward {
        InvasionReward {
            items: self
                .items
                .iter()
                .filter_map(|item| {
                    Some(RewardItem {
                        name: item.name.clone()?,
                        count: item.count.unwrap_or(1),
                    })
                })
                .collect(),
        }
    }
}

/// Raw invasion entry as either dialect emits it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawInvasion {
    #[serde(default, alias = "location")]
    node: Option<String>,
    #[serde(default, alias = "factionAttacker")]
    attacking_faction: Option<String>,
    #[serde(default, alias = "factionDefender")]
    defending_faction: Option<String>,
    #[serde(default, alias = "rewardsAttacker")]
    attacker_reward: Option<RawReward>,
    #[serde(default, alias = "rewardsDefender")]
    defender_reward: Option<RawReward>,
    #[serde(default)]
    completion: Option<f64>,
    #[serde(default)]
    score: Option<i64>,
    #[serde(default)]
    end_score: Option<i64>,
    #[serde(default)]
    completed: Option<bool>,
    #[serde(default)]
    vs_infestation: Option<bool>,
    #[serde(default, alias = "start")]
    activation: Option<RawInstant>,
    #[serde(default)]
    score_history: Vec<(f64, f64)>,
}

impl RawInvasion {
    pub(crate) fn normalize(&self) -> Option<Invasion> {
        let node = self.node.clone()?;
        let attacking = self.attacking_faction.clone();
        let defending = self.defending_faction.clone();
        let vs_infestation = self.vs_infestation.unwrap_or_else(|| {
            attacking.as_deref() == Some(INFESTATION) || defending.as_deref() == Some(INFESTATION)
        });
        Some(Invasion {
            node,
            attacking_faction: attacking,
            defending_faction: defending,
            attacker_reward: self
                .attacker_reward
                .as_ref()
                .map(RawReward::normalize)
                .unwrap_or_default(),
            defender_reward: self
                .defender_reward
                .as_ref()
                .map(RawReward::normalize)
                .unwrap_or_default(),
            completion_percent: self.completion.unwrap_or_else(|| self.score_completion()),
            completed: self.completed.unwrap_or(false),
            vs_infestation,
            activation: instant(&self.activation, &None),
            eta_seconds: self.score_eta(),
        })
    }

    /// Upstream completion formula, preserved for display compatibility.
    fn score_completion(&self) -> f64 {
        let score = self.score.unwrap_or(0) as f64;
        let end_score = self.end_score.unwrap_or(DEFAULT_END_SCORE) as f64;
        if end_score == 0.0 {
            return 0.0;
        }
        ((end_score + score) / (end_score * 2.0)) * 100.0
    }

    /// Extrapolates resolution time from the slope of the last few score
    /// samples, when the source provides a history.
    fn score_eta(&self) -> Option<i64> {
        if self.score_history.len() < 2 {
            return None;
        }
        let recent = &self.score_history[self.score_history.len().saturating_sub(5)..];
        let (first_time, first_score) = recent[0];
        let (last_time, last_score) = recent[recent.len() - 1];
        let time_span = (last_time - first_time).abs();
        let score_change = (last_score - first_score).abs();
        if score_change <= 0.0 {
            return None;
        }
        let end_score = self.end_score.unwrap_or(DEFAULT_END_SCORE) as f64;
        let remaining = end_score - (self.score.unwrap_or(0) as f64).abs();
        if remaining <= 0.0 {
            return None;
        }
        let eta_seconds = remaining * (time_span / score_change);
        Some(eta_seconds as i64)
    }
}
