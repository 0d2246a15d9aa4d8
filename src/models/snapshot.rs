//! Aggregated normalized worldstate handed to display consumers.

use crate::dialect::ApiDialect;
use crate::models::{
    Alert, Arbitration, Event, Fissure, GlobalUpgrade, Invasion, Nightwave, SteelPath,
    TimedMission, VoidTrader, WorldCycles,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents one normalized worldstate poll: every category the overlay can
/// display, plus when and from which dialect it was fetched. Absent
/// categories are `None`/empty — consumers decide whether that hides a panel
/// or shows a placeholder.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorldstateSnapshot {
    pub cycles: WorldCycles,
    pub arbitration: Option<Arbitration>,
    pub fissures: Vec<Fissure>,
    pub sortie: Option<TimedMission>,
    pub archon_hunt: Option<TimedMission>,
    pub nightwave: Option<Nightwave>,
    pub steel_path: Option<SteelPath>,
    pub void_trader: Option<VoidTrader>,
    pub invasions: Vec<Invasion>,
    pub alerts: Vec<Alert>,
    pub events: Vec<Event>,
    pub global_upgrades: Vec<GlobalUpgrade>,
    pub fetched_at: DateTime<Utc>,
    #[serde(skip)]
    pub dialect: Option<ApiDialect>,
}
