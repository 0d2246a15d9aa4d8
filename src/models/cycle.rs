//! Open-world cycle state (day/night, warm/cold, fass/vome).

use crate::dialect::{instant, RawInstant};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Active phase of a two-phase world cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CyclePhase {
    Day,
    Night,
    Warm,
    Cold,
    Fass,
    Vome,
}

impl CyclePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            CyclePhase::Day => "day",
            CyclePhase::Night => "night",
            CyclePhase::Warm => "warm",
            CyclePhase::Cold => "cold",
            CyclePhase::Fass => "fass",
            CyclePhase::Vome => "vome",
        }
    }

    fn from_state(state: &str) -> Option<CyclePhase> {
        match state.to_ascii_lowercase().as_str() {
            "day" => Some(CyclePhase::Day),
            "night" => Some(CyclePhase::Night),
            "warm" => Some(CyclePhase::Warm),
            "cold" => Some(CyclePhase::Cold),
            "fass" => Some(CyclePhase::Fass),
            "vome" => Some(CyclePhase::Vome),
            _ => None,
        }
    }
}

/// Represents one region's cycle: the phase currently active and the absolute
/// instant it flips.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldCycle {
    pub phase: CyclePhase,
    pub expiry: DateTime<Utc>,
}

impl WorldCycle {
    /// Milliseconds until the phase flips, clamped to zero once past.
    pub fn remaining_millis(&self, now: DateTime<Utc>) -> i64 {
        (self.expiry - now).num_milliseconds().max(0)
    }
}

/// Cycle state for every tracked region. Regions absent from the upstream
/// document stay `None`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldCycles {
    pub cetus: Option<WorldCycle>,
    pub vallis: Option<WorldCycle>,
    pub cambion: Option<WorldCycle>,
    pub earth: Option<WorldCycle>,
}

/// Raw cycle entry as either dialect emits it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawCycle {
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    is_day: Option<bool>,
    #[serde(default)]
    is_warm: Option<bool>,
    #[serde(default, alias = "end")]
    expiry: Option<RawInstant>,
    #[serde(default)]
    end_time: Option<RawInstant>,
}

impl RawCycle {
    /// Builds the normalized cycle, preferring explicit phase flags over the
    /// free-text state field.
    pub(crate) fn normalize(&self) -> Option<WorldCycle> {
        let phase = match (self.is_day, self.is_warm) {
            (Some(true), _) => CyclePhase::Day,
            (Some(false), _) => CyclePhase::Night,
            (_, Some(true)) => CyclePhase::Warm,
            (_, Some(false)) => CyclePhase::Cold,
            _ => CyclePhase::from_state(self.state.as_deref()?)?,
        };
        let expiry = instant(&self.expiry, &self.end_time)?;
        Some(WorldCycle { phase, expiry })
    }
}

#[cfg(test)]
mod tests {
    use super::{CyclePhase, RawCycle, WorldCycle};
    use chrono::{Duration, TimeZone, Utc};
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawCycle {
        serde_json::from_value(value).expect("raw cycle should decode")
    }

    #[test]
    fn day_flag_wins_over_state_text() {
        let cycle = raw(json!({
            "isDay": true,
            "state": "night",
            "expiry": "2026-08-30T18:00:00Z"
        }))
        .normalize()
        .expect("cycle should normalize");
        assert_eq!(cycle.phase, CyclePhase::Day);
    }

    #[test]
    fn state_text_covers_cambion_phases() {
        let cycle = raw(json!({ "state": "Fass", "expiry": "2026-08-30T18:00:00Z" }))
            .normalize()
            .expect("cycle should normalize");
        assert_eq!(cycle.phase, CyclePhase::Fass);
    }

    #[test]
    fn epoch_end_field_is_accepted() {
        let cycle = raw(json!({ "isWarm": false, "end": 1_700_000_000 }))
            .normalize()
            .expect("cycle should normalize");
        assert_eq!(cycle.phase, CyclePhase::Cold);
        assert_eq!(cycle.expiry.timestamp(), 1_700_000_000);
    }

    #[test]
    fn missing_phase_or_expiry_yields_none() {
        assert!(raw(json!({ "expiry": "2026-08-30T18:00:00Z" })).normalize().is_none());
        assert!(raw(json!({ "isDay": true })).normalize().is_none());
    }

    #[test]
    fn phase_display_names_round_trip_through_state_text() {
        for phase in [
            CyclePhase::Day,
            CyclePhase::Night,
            CyclePhase::Warm,
            CyclePhase::Cold,
            CyclePhase::Fass,
            CyclePhase::Vome,
        ] {
            let cycle = raw(json!({ "state": phase.as_str(), "expiry": 1_700_000_000 }))
                .normalize()
                .expect("cycle should normalize");
            assert_eq!(cycle.phase, phase);
        }
    }

    #[test]
    fn remaining_clamps_to_zero_after_expiry() {
        let expiry = Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap();
        let cycle = WorldCycle {
            phase: CyclePhase::Night,
            expiry,
        };
        assert_eq!(cycle.remaining_millis(expiry - Duration::seconds(90)), 90_000);
        assert_eq!(cycle.remaining_millis(expiry + Duration::seconds(1)), 0);
    }
}
