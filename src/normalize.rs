//! Document-to-snapshot normalization.
//!
//! Every category is probed, unwrapped and decoded independently: a missing
//! or malformed category logs and degrades to `None`/empty without touching
//! the others, and nothing in here returns an error or panics past this
//! boundary. Field-name drift between dialects is absorbed by the raw decode
//! structs in `models`; this module owns document topology only.

use crate::dialect::{self, ApiDialect};
use crate::models::{
    sort_fissures, Alert, Arbitration, Event, Fissure, GlobalUpgrade, Invasion, Nightwave,
    RawAlert, RawArbitration, RawCycle, RawEvent, RawFissure, RawGlobalUpgrade, RawInvasion,
    RawNightwave, RawSteelPath, RawTimedMission, RawVoidTrader, SteelPath, TimedMission,
    VoidTrader, WorldCycle, WorldCycles, WorldstateSnapshot,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

const FISSURE_KEYS: &[&str] = &["fissures", "voidFissures", "fissureRotations"];
pub(crate) const ARCHON_KEYS: &[&str] = &["archonHunt", "archonHunts", "archonhunts"];
const UPGRADE_KEYS: &[&str] = &["upgrades", "globalUpgrades"];

/// Key preference per dialect: tenno.tools went plural, warframestat stayed
/// singular.
fn keyed(dialect: ApiDialect, plural: &'static str, singular: &'static str) -> [&'static str; 2] {
    match dialect {
        ApiDialect::TennoTools => [plural, singular],
        ApiDialect::WarframeStat => [singular, plural],
    }
}

impl WorldstateSnapshot {
    /// Normalizes a fetched worldstate document, detecting its dialect once.
    pub fn from_document(document: &Value, fetched_at: DateTime<Utc>) -> Self {
        Self::from_documents(document, None, fetched_at)
    }

    /// Normalizes a primary document plus an optional fallback document used
    /// to fill in categories the primary source does not carry.
    pub fn from_documents(
        document: &Value,
        fallback: Option<&Value>,
        fetched_at: DateTime<Utc>,
    ) -> Self {
        let dialect = ApiDialect::detect(document);
        debug!(dialect = dialect.as_str(), "normalizing worldstate document");

        let archon_hunt = normalize_timed_mission(document, ARCHON_KEYS, "archon hunt").or_else(|| {
            let fallback = fallback?;
            debug!("archon hunt absent from primary document, using fallback");
            normalize_timed_mission(fallback, ARCHON_KEYS, "archon hunt")
        });

        Self {
            cycles: normalize_cycles(document),
            arbitration: normalize_arbitration(document, dialect),
            fissures: normalize_fissures(document),
            sortie: normalize_timed_mission(
                document,
                &keyed(dialect, "sorties", "sortie"),
                "sortie",
            ),
            archon_hunt,
            nightwave: normalize_nightwave(document),
            steel_path: normalize_steel_path(document),
            void_trader: normalize_void_trader(document, dialect, fetched_at),
            invasions: normalize_invasions(document),
            alerts: normalize_alerts(document),
            events: normalize_events(document),
            global_upgrades: normalize_upgrades(document),
            fetched_at,
            dialect: Some(dialect),
        }
    }
}

fn normalize_cycles(document: &Value) -> WorldCycles {
    WorldCycles {
        cetus: normalize_cycle(document, "cetusCycle"),
        vallis: normalize_cycle(document, "vallisCycle"),
        cambion: normalize_cycle(document, "cambionCycle"),
        earth: normalize_cycle(document, "earthCycle"),
    }
}

fn normalize_cycle(document: &Value, key: &str) -> Option<WorldCycle> {
    let value = dialect::category(document, &[key])?;
    let entry = dialect::first_entry(value)?;
    match RawCycle::deserialize(entry) {
        Ok(raw) => raw.normalize(),
        Err(err) => {
            warn!(category = key, %err, "malformed world cycle entry");
            None
        }
    }
}

fn normalize_arbitration(document: &Value, dialect_kind: ApiDialect) -> Option<Arbitration> {
    let value = dialect::category(document, &keyed(dialect_kind, "arbitrations", "arbitration"))?;
    let entry = dialect::first_entry(value)?;
    match RawArbitration::deserialize(entry) {
        Ok(raw) => raw.normalize(),
        Err(err) => {
            warn!(category = "arbitration", %err, "malformed arbitration entry");
            None
        }
    }
}

/// Fissures come back pre-sorted by `(tier rank, expiry)` so list renderers
/// can reuse rows by index.
fn normalize_fissures(document: &Value) -> Vec<Fissure> {
    let Some(value) = dialect::category(document, FISSURE_KEYS) else {
        return Vec::new();
    };
    let mut fissures: Vec<Fissure> = dialect::entries(value)
        .into_iter()
        .filter_map(|entry| match RawFissure::deserialize(entry) {
            Ok(raw) => raw.normalize(),
            Err(err) => {
                warn!(category = "fissures", %err, "skipping malformed fissure entry");
                None
            }
        })
        .collect();
    sort_fissures(&mut fissures);
    fissures
}

fn normalize_timed_mission(document: &Value, keys: &[&str], label: &str) -> Option<TimedMission> {
    let value = dialect::category(document, keys)?;
    let entry = dialect::first_entry(value)?;
    match RawTimedMission::deserialize(entry) {
        Ok(raw) => Some(raw.normalize()),
        Err(err) => {
            warn!(category = label, %err, "malformed timed mission entry");
            None
        }
    }
}

fn normalize_nightwave(document: &Value) -> Option<Nightwave> {
    let value = dialect::category(document, &["nightwave"])?;
    let entry = dialect::first_entry(value)?;
    match RawNightwave::deserialize(entry) {
        Ok(raw) => Some(raw.normalize()),
        Err(err) => {
            warn!(category = "nightwave", %err, "malformed nightwave entry");
            None
        }
    }
}

fn normalize_steel_path(document: &Value) -> Option<SteelPath> {
    let value = dialect::category(document, &["steelPath", "steelpath"])?;
    let entry = dialect::first_entry(value)?;
    match RawSteelPath::deserialize(entry) {
        Ok(raw) => Some(raw.normalize()),
        Err(err) => {
            warn!(category = "steel path", %err, "malformed steel path entry");
            None
        }
    }
}

fn normalize_void_trader(
    document: &Value,
    dialect_kind: ApiDialect,
    now: DateTime<Utc>,
) -> Option<VoidTrader> {
    let value = dialect::category(document, &keyed(dialect_kind, "voidtraders", "voidTrader"))?;
    let entry = dialect::first_entry(value)?;
    match RawVoidTrader::deserialize(entry) {
        Ok(raw) => Some(raw.normalize(now)),
        Err(err) => {
            warn!(category = "void trader", %err, "malformed void trader entry");
            None
        }
    }
}

fn normalize_invasions(document: &Value) -> Vec<Invasion> {
    collect_entries(document, &["invasions"], "invasions", |entry| {
        RawInvasion::deserialize(entry).ok().and_then(|raw| raw.normalize())
    })
}

fn normalize_alerts(document: &Value) -> Vec<Alert> {
    collect_entries(document, &["alerts"], "alerts", |entry| {
        RawAlert::deserialize(entry).ok().map(|raw| raw.normalize())
    })
}

fn normalize_events(document: &Value) -> Vec<Event> {
    collect_entries(document, &["events"], "events", |entry| {
        RawEvent::deserialize(entry).ok().map(|raw| raw.normalize())
    })
}

fn normalize_upgrades(document: &Value) -> Vec<GlobalUpgrade> {
    collect_entries(document, UPGRADE_KEYS, "global upgrades", |entry| {
        RawGlobalUpgrade::deserialize(entry).ok().map(|raw| raw.normalize())
    })
}

fn collect_entries<T>(
    document: &Value,
    keys: &[&str],
    label: &str,
    decode: impl Fn(&Value) -> Option<T>,
) -> Vec<T> {
    let Some(value) = dialect::category(document, keys) else {
        return Vec::new();
    };
    let entries = dialect::entries(value);
    let total = entries.len();
    let decoded: Vec<T> = entries.into_iter().filter_map(|entry| decode(entry)).collect();
    if decoded.len() < total {
        warn!(
            category = label,
            dropped = total - decoded.len(),
            "skipped malformed entries"
        );
    }
    decoded
}

#[cfg(test)]
mod tests {
    use crate::models::{CyclePhase, FissureTier, WorldstateSnapshot};
    use chrono::{Duration, TimeZone, Utc};
    use serde_json::json;

    fn fetched_at() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap()
    }

    #[test]
    fn missing_categories_yield_stable_empty_snapshot() {
        let snapshot = WorldstateSnapshot::from_document(&json!({}), fetched_at());
        assert!(snapshot.cycles.cetus.is_none());
        assert!(snapshot.arbitration.is_none());
        assert!(snapshot.fissures.is_empty());
        assert!(snapshot.sortie.is_none());
        assert!(snapshot.archon_hunt.is_none());
        assert!(snapshot.steel_path.is_none());
        assert!(snapshot.void_trader.is_none());
        assert!(snapshot.invasions.is_empty());
        assert!(snapshot.alerts.is_empty());
        assert!(snapshot.events.is_empty());
        assert!(snapshot.global_upgrades.is_empty());
    }

    #[test]
    fn wrapped_and_bare_categories_normalize_identically() {
        let entry = json!({
            "location": "Sechura (Pluto)",
            "faction": "Corpus",
            "type": "Defense",
            "end": 1_788_000_000
        });
        let wrapped = json!({
            "arbitrations": { "time": 1_787_000_000, "data": [entry] },
            // Wrapper sentinel so detection picks the wrapped dialect.
            "fissures": { "time": 1_787_000_000, "data": [] }
        });
        let bare = json!({ "arbitration": entry });

        let from_wrapped = WorldstateSnapshot::from_document(&wrapped, fetched_at());
        let from_bare = WorldstateSnapshot::from_document(&bare, fetched_at());

        assert_eq!(from_wrapped.arbitration, from_bare.arbitration);
        let arbitration = from_wrapped.arbitration.expect("arbitration should normalize");
        assert_eq!(arbitration.node, "Sechura (Pluto)");
    }

    #[test]
    fn cetus_cycle_end_to_end() {
        let now = fetched_at();
        let expiry = now + Duration::hours(1);
        let document = json!({
            "cetusCycle": { "isDay": true, "expiry": expiry.to_rfc3339() }
        });

        let snapshot = WorldstateSnapshot::from_document(&document, now);
        let cetus = snapshot.cycles.cetus.expect("cetus cycle should normalize");
        assert_eq!(cetus.phase, CyclePhase::Day);
        assert_eq!(cetus.remaining_millis(now), 3_600_000);
        assert_eq!(
            crate::format::format_duration(cetus.remaining_millis(now), crate::format::DurationStyle::Long),
            "1h 0m 0s"
        );
    }

    #[test]
    fn one_malformed_category_does_not_block_the_others() {
        let document = json!({
            "sorties": "garbage-shape",
            "cetusCycle": { "isDay": false, "expiry": "2026-08-30T13:00:00Z" },
            "fissures": [
                { "node": "Apollo (Lua)", "tier": "Axi", "expiry": "2026-08-30T13:00:00Z" },
                42
            ]
        });
        let snapshot = WorldstateSnapshot::from_document(&document, fetched_at());

        assert!(snapshot.sortie.is_none());
        assert_eq!(snapshot.fissures.len(), 1);
        assert_eq!(
            snapshot.cycles.cetus.map(|cycle| cycle.phase),
            Some(CyclePhase::Night)
        );
    }

    #[test]
    fn categories_survive_entries_carrying_a_name_and_its_twin() {
        // Live warframestat documents emit these pairs together; neither
        // category may degrade over them.
        let document = json!({
            "sortie": {
                "boss": "Kela De Thaym",
                "faction": "Grineer",
                "factionKey": "Grineer",
                "expiry": "2026-08-30T16:00:00Z"
            },
            "events": [
                {
                    "description": "Thermia Fractures",
                    "tooltip": "Close the fractures on Orb Vallis",
                    "node": "Orb Vallis (Venus)"
                }
            ]
        });
        let snapshot = WorldstateSnapshot::from_document(&document, fetched_at());

        let sortie = snapshot.sortie.expect("sortie should normalize");
        assert_eq!(sortie.faction.as_deref(), Some("Grineer"));
        assert_eq!(snapshot.events.len(), 1);
        assert_eq!(
            snapshot.events[0].description.as_deref(),
            Some("Thermia Fractures")
        );
    }

    #[test]
    fn fissures_come_back_sorted_by_tier_then_expiry() {
        let early = "2026-08-30T13:00:00Z";
        let late = "2026-08-30T15:00:00Z";
        let document = json!({
            "fissures": [
                { "node": "axi-node", "tier": "Axi", "expiry": early },
                { "node": "lith-late", "tier": "Lith", "expiry": late },
                { "node": "lith-early", "tier": "Lith", "expiry": early },
                { "node": "mystery", "tier": "Void Storm?", "expiry": early }
            ]
        });
        let snapshot = WorldstateSnapshot::from_document(&document, fetched_at());
        let order: Vec<&str> = snapshot.fissures.iter().map(|f| f.node.as_str()).collect();
        assert_eq!(order, ["lith-early", "lith-late", "axi-node", "mystery"]);
        assert_eq!(snapshot.fissures[3].tier, FissureTier::Unknown("Void Storm?".to_string()));
    }

    #[test]
    fn keyed_object_categories_are_coerced_to_lists() {
        let document = json!({
            "invasions": {
                "inv-1": { "node": "Ose (Europa)", "score": 5_000, "endScore": 10_000 },
                "meta": { "updated": "2026-08-30" }
            }
        });
        let snapshot = WorldstateSnapshot::from_document(&document, fetched_at());
        assert_eq!(snapshot.invasions.len(), 1);
        assert_eq!(snapshot.invasions[0].completion_percent, 75.0);
    }

    #[test]
    fn archon_hunt_falls_back_to_secondary_document() {
        let primary = json!({
            "sorties": { "time": 1_787_000_000, "data": [] }
        });
        let fallback = json!({
            "archonHunt": {
                "boss": "Archon Boreal",
                "faction": "Narmer",
                "expiry": "2026-09-06T00:00:00Z",
                "missions": [{ "node": "Everest (Earth)", "type": "Capture" }]
            }
        });

        let snapshot =
            WorldstateSnapshot::from_documents(&primary, Some(&fallback), fetched_at());
        let hunt = snapshot.archon_hunt.expect("archon hunt should come from fallback");
        assert_eq!(hunt.boss.as_deref(), Some("Archon Boreal"));
        assert_eq!(hunt.stages.len(), 1);

        // Primary data wins when present.
        let primary_with_hunt = json!({
            "archonHunt": { "boss": "Archon Amar", "expiry": "2026-09-06T00:00:00Z" }
        });
        let snapshot =
            WorldstateSnapshot::from_documents(&primary_with_hunt, Some(&fallback), fetched_at());
        assert_eq!(
            snapshot.archon_hunt.and_then(|hunt| hunt.boss).as_deref(),
            Some("Archon Amar")
        );
    }

    #[test]
    fn steel_path_rotation_normalizes_from_the_document() {
        let document = json!({
            "steelPath": {
                "currentReward": { "name": "Umbra Forma Blueprint", "cost": 150 },
                "rotation": [
                    { "name": "Bishamo Pauldrons Blueprint", "cost": 15 },
                    { "name": "Umbra Forma Blueprint", "cost": 150 }
                ],
                "expiry": "2026-08-31T00:00:00Z"
            }
        });
        let snapshot = WorldstateSnapshot::from_document(&document, fetched_at());
        let steel = snapshot.steel_path.expect("steel path should normalize");
        assert_eq!(
            steel.current_reward.map(|reward| reward.name).as_deref(),
            Some("Umbra Forma Blueprint")
        );
        assert_eq!(steel.rotation.len(), 2);
    }

    #[test]
    fn void_trader_active_window_uses_fetch_instant() {
        let now = fetched_at();
        let document = json!({
            "voidTrader": {
                "character": "Baro Ki'Teer",
                "location": "Kronia Relay (Saturn)",
                "activation": (now - Duration::hours(2)).to_rfc3339(),
                "expiry": (now + Duration::hours(46)).to_rfc3339()
            }
        });
        let snapshot = WorldstateSnapshot::from_document(&document, now);
        let trader = snapshot.void_trader.expect("trader should normalize");
        assert!(trader.active);
        assert_eq!(trader.next_change(), trader.departure);
    }
}
