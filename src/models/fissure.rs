//! Void fissures and the relic tier ordering used to sort them.

use crate::dialect::{instant, RawInstant};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Rank assigned to tier labels the upstream has never used; sorts after
/// every known tier.
pub const UNKNOWN_TIER_RANK: u32 = 999;

/// Relic tier of a fissure mission. Labels are matched case-sensitively;
/// anything unrecognized is preserved and sorts last.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FissureTier {
    Lith,
    Meso,
    Neo,
    Axi,
    Requiem,
    Omnia,
    Unknown(String),
}

impl FissureTier {
    pub fn from_label(label: &str) -> FissureTier {
        match label {
            "Lith" => FissureTier::Lith,
            "Meso" => FissureTier::Meso,
            "Neo" => FissureTier::Neo,
            "Axi" => FissureTier::Axi,
            "Requiem" => FissureTier::Requiem,
            "Omnia" => FissureTier::Omnia,
            other => FissureTier::Unknown(other.to_string()),
        }
    }

    /// Total ordering for sort and display grouping: known tiers rank 1-6,
    /// unknown labels share the trailing sentinel rank.
    pub fn rank(&self) -> u32 {
        match self {
            FissureTier::Lith => 1,
            FissureTier::Meso => 2,
            FissureTier::Neo => 3,
            FissureTier::Axi => 4,
            FissureTier::Requiem => 5,
            FissureTier::Omnia => 6,
            FissureTier::Unknown(_) => UNKNOWN_TIER_RANK,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            FissureTier::Lith => "Lith",
            FissureTier::Meso => "Meso",
            FissureTier::Neo => "Neo",
            FissureTier::Axi => "Axi",
            FissureTier::Requiem => "Requiem",
            FissureTier::Omnia => "Omnia",
            FissureTier::Unknown(label) => label,
        }
    }
}

/// Represents one time-limited fissure mission.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Fissure {
    pub tier: FissureTier,
    pub node: String,
    pub mission_type: Option<String>,
    pub enemy: Option<String>,
    pub activation: Option<DateTime<Utc>>,
    pub expiry: Option<DateTime<Utc>>,
    pub is_storm: bool,
    pub is_hard: bool,
}

/// Stable sort by `(tier rank, expiry)`; unknown tiers last, ties keep their
/// incoming order. Sorting an already sorted list is a no-op.
pub fn sort_fissures(fissures: &mut [Fissure]) {
    fissures.sort_by(|a, b| {
        a.tier
            .rank()
            .cmp(&b.tier.rank())
            .then_with(|| a.expiry.cmp(&b.expiry))
    });
}

/// Raw fissure entry as either dialect emits it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawFissure {
    #[serde(default, alias = "location")]
    node: Option<String>,
    #[serde(default, alias = "type")]
    mission_type: Option<String>,
    #[serde(default, alias = "faction")]
    enemy: Option<String>,
    // `tier` and `relic` can share an entry; kept separate so the pair
    // never trips serde's duplicate-field check.
    #[serde(default)]
    tier: Option<String>,
    #[serde(default)]
    relic: Option<String>,
    #[serde(default, alias = "start")]
    activation: Option<RawInstant>,
    #[serde(default, alias = "end")]
    expiry: Option<RawInstant>,
    #[serde(default, alias = "storm")]
    is_storm: Option<bool>,
    #[serde(default, alias = "hard", alias = "steelPath")]
    is_hard: Option<bool>,
}

impl RawFissure {
    /// Builds the normalized fissure; entries without a node identity are
    /// dropped by the caller.
    pub(crate) fn normalize(&self) -> Option<Fissure> {
        let node = self.node.clone()?;
        let tier = self
            .tier
            .as_deref()
            .or(self.relic.as_deref())
            .map(FissureTier::from_label)
            .unwrap_or_else(|| FissureTier::Unknown(String::new()));
        Some(Fissure {
            tier,
            node,
            mission_type: self.mission_type.clone(),
            enemy: self.enemy.clone(),
            activation: instant(&self.activation, &None),
            expiry: instant(&self.expiry, &None),
            is_storm: self.is_storm.unwrap_or(false),
            is_hard: self.is_hard.unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{sort_fissures, Fissure, FissureTier, RawFissure, UNKNOWN_TIER_RANK};
    use chrono::{Duration, TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn known_tiers_rank_in_reward_order() {
        let ranks = [
            FissureTier::from_label("Lith"),
            FissureTier::from_label("Meso"),
            FissureTier::from_label("Neo"),
            FissureTier::from_label("Axi"),
            FissureTier::from_label("Requiem"),
            FissureTier::from_label("Omnia"),
        ]
        .map(|tier| tier.rank());
        assert!(ranks.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn unrecognized_labels_sort_after_everything() {
        let unknown = FissureTier::from_label("unknown-garbage");
        assert_eq!(unknown.rank(), UNKNOWN_TIER_RANK);
        assert!(unknown.rank() > FissureTier::Requiem.rank());
        assert!(unknown.rank() > FissureTier::Omnia.rank());
        // Matching is case-sensitive.
        assert_eq!(FissureTier::from_label("lith").rank(), UNKNOWN_TIER_RANK);
    }

    fn fissure(tier: &str, node: &str, expiry_offset_secs: i64) -> Fissure {
        Fissure {
            tier: FissureTier::from_label(tier),
            node: node.to_string(),
            mission_type: None,
            enemy: None,
            activation: None,
            expiry: Some(
                Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap()
                    + Duration::seconds(expiry_offset_secs),
            ),
            is_storm: false,
            is_hard: false,
        }
    }

    #[test]
    fn sort_orders_by_rank_then_expiry_and_is_idempotent() {
        let mut fissures = vec![
            fissure("Axi", "a", 100),
            fissure("Void", "unknown", 10),
            fissure("Lith", "late", 500),
            fissure("Lith", "early", 50),
        ];
        sort_fissures(&mut fissures);
        let order: Vec<&str> = fissures.iter().map(|f| f.node.as_str()).collect();
        assert_eq!(order, ["early", "late", "a", "unknown"]);

        let once = fissures.clone();
        sort_fissures(&mut fissures);
        assert_eq!(fissures, once);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let mut fissures = vec![
            fissure("Meso", "first", 60),
            fissure("Meso", "second", 60),
        ];
        sort_fissures(&mut fissures);
        assert_eq!(fissures[0].node, "first");
        assert_eq!(fissures[1].node, "second");
    }

    #[test]
    fn raw_entry_accepts_both_dialect_field_names() {
        let stat: RawFissure = serde_json::from_value(json!({
            "node": "Apollo (Lua)",
            "missionType": "Disruption",
            "enemy": "Corrupted",
            "tier": "Axi",
            "expiry": "2026-08-30T13:00:00Z",
            "isHard": true
        }))
        .expect("warframestat entry should decode");
        let normalized = stat.normalize().expect("entry should normalize");
        assert_eq!(normalized.tier, FissureTier::Axi);
        assert!(normalized.is_hard);

        let tenno: RawFissure = serde_json::from_value(json!({
            "location": "Apollo (Lua)",
            "type": "Disruption",
            "faction": "Corrupted",
            "relic": "Axi",
            "end": 1_700_000_000,
            "hard": true
        }))
        .expect("tenno.tools entry should decode");
        let normalized_tenno = tenno.normalize().expect("entry should normalize");
        assert_eq!(normalized_tenno.tier, FissureTier::Axi);
        assert_eq!(normalized_tenno.node, normalized.node);
        assert!(normalized_tenno.is_hard);
    }

    #[test]
    fn entry_with_both_tier_and_relic_decodes() {
        let raw: RawFissure = serde_json::from_value(json!({
            "node": "Hepit (Void)",
            "tier": "Lith",
            "relic": "Lith",
            "expiry": "2026-08-30T13:00:00Z"
        }))
        .expect("entry carrying both names should decode");
        assert_eq!(
            raw.normalize().expect("entry should normalize").tier,
            FissureTier::Lith
        );
    }

    #[test]
    fn tier_labels_round_trip_through_rank_and_label() {
        for name in ["Lith", "Meso", "Neo", "Axi", "Requiem", "Omnia"] {
            assert_eq!(FissureTier::from_label(name).label(), name);
        }
        let unknown = FissureTier::from_label("Void Storm?");
        assert_eq!(unknown.label(), "Void Storm?");
    }

    #[test]
    fn missing_node_is_rejected() {
        let raw: RawFissure =
            serde_json::from_value(json!({ "tier": "Neo" })).expect("entry should decode");
        assert!(raw.normalize().is_none());
    }
}
