//! Alerts, operations/events and global boosters.

use crate::dialect::{instant, RawInstant};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Represents one timed alert mission and its reward, as displayed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub node: Option<String>,
    pub mission_type: Option<String>,
    pub faction: Option<String>,
    pub reward: Option<String>,
    pub activation: Option<DateTime<Utc>>,
    pub expiry: Option<DateTime<Utc>>,
}

/// Represents a running operation/event with optional progress.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub description: Option<String>,
    pub node: Option<String>,
    pub health_percent: Option<f64>,
    pub activation: Option<DateTime<Utc>>,
    pub expiry: Option<DateTime<Utc>>,
    pub rewards: Vec<String>,
}

/// Represents a global booster window (resource/affinity modifiers).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GlobalUpgrade {
    pub upgrade: Option<String>,
    pub operation: Option<String>,
    pub operation_symbol: Option<String>,
    pub operation_value: Option<f64>,
    pub description: Option<String>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawAlertMission {
    #[serde(default, alias = "location")]
    node: Option<String>,
    #[serde(default, alias = "missionType")]
    r#type: Option<String>,
    #[serde(default)]
    faction: Option<String>,
    #[serde(default)]
    reward: Option<Value>,
}

/// Raw alert entry as either dialect emits it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawAlert {
    #[serde(default)]
    mission: Option<RawAlertMission>,
    #[serde(default, alias = "start")]
    activation: Option<RawInstant>,
    #[serde(default, alias = "end")]
    expiry: Option<RawInstant>,
}

impl RawAlert {
    pub(crate) fn normalize(&self) -> Alert {
        let mission = self.mission.as_ref();
        Alert {
            node: mission.and_then(|m| m.node.clone()),
            mission_type: mission.and_then(|m| m.r#type.clone()),
            faction: mission.and_then(|m| m.faction.clone()),
            reward: mission.and_then(|m| m.reward.as_ref()).and_then(reward_string),
            activation: instant(&self.activation, &None),
            expiry: instant(&self.expiry, &None),
        }
    }
}

/// The alert reward arrives as a plain string or an object carrying one of
/// several display-string fields.
fn reward_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Object(map) => map
            .get("asString")
            .or_else(|| map.get("itemString"))
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    }
}

/// Raw event entry as either dialect emits it. Upstream event records carry
/// `description` and `tooltip` together, so the pair stays two fields and
/// merges in `normalize` instead of tripping serde's duplicate-field check.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawEvent {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    tooltip: Option<String>,
    #[serde(default, alias = "location")]
    node: Option<String>,
    #[serde(default)]
    health: Option<f64>,
    #[serde(default, alias = "start")]
    activation: Option<RawInstant>,
    #[serde(default, alias = "end")]
    expiry: Option<RawInstant>,
    #[serde(default)]
    rewards: Vec<Value>,
}

impl RawEvent {
    pub(crate) fn normalize(&self) -> Event {
        Event {
            description: self.description.clone().or_else(|| self.tooltip.clone()),
            node: self.node.clone(),
            health_percent: self.health,
            activation: instant(&self.activation, &None),
            expiry: instant(&self.expiry, &None),
            rewards: self.rewards.iter().filter_map(reward_string).collect(),
        }
    }
}

/// Raw global upgrade entry as either dialect emits it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawGlobalUpgrade {
    #[serde(default)]
    upgrade: Option<String>,
    #[serde(default)]
    operation: Option<String>,
    #[serde(default)]
    operation_symbol: Option<String>,
    #[serde(default, alias = "upgradeOperationValue")]
    operation_value: Option<f64>,
    #[serde(default)]
    desc: Option<String>,
    #[serde(default, alias = "activation")]
    start: Option<RawInstant>,
    #[serde(default, alias = "expiry")]
    end: Option<RawInstant>,
}

impl RawGlobalUpgrade {
    pub(crate) fn normalize(&self) -> GlobalUpgrade {
        GlobalUpgrade {
            upgrade: self.upgrade.clone(),
            operation: self.operation.clone(),
            operation_symbol: self.operation_symbol.clone(),
            operation_value: self.operation_value,
            description: self.desc.clone(),
            start: instant(&self.start, &None),
            end: instant(&self.end, &None),
        }
    }
}
