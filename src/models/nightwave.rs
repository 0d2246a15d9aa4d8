//! Nightwave season and its active challenges.

use crate::dialect::{instant, RawInstant};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One active nightwave challenge.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NightwaveChallenge {
    pub title: Option<String>,
    pub description: Option<String>,
    pub is_daily: bool,
    pub is_elite: bool,
    pub expiry: Option<DateTime<Utc>>,
}

/// Represents the running nightwave season: identity, current phase and the
/// challenges active right now.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Nightwave {
    pub season: Option<i64>,
    pub tag: Option<String>,
    pub phase: Option<i64>,
    pub activation: Option<DateTime<Utc>>,
    pub expiry: Option<DateTime<Utc>>,
    pub active_challenges: Vec<NightwaveChallenge>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawChallenge {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    desc: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default, alias = "daily")]
    is_daily: Option<bool>,
    #[serde(default, alias = "elite")]
    is_elite: Option<bool>,
    #[serde(default, alias = "end")]
    expiry: Option<RawInstant>,
}

/// Raw nightwave record as either dialect emits it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawNightwave {
    #[serde(default)]
    season: Option<i64>,
    #[serde(default)]
    tag: Option<String>,
    #[serde(default)]
    phase: Option<i64>,
    #[serde(default, alias = "start")]
    activation: Option<RawInstant>,
    #[serde(default, alias = "end")]
    expiry: Option<RawInstant>,
    #[serde(default, alias = "challenges")]
    active_challenges: Vec<RawChallenge>,
}

impl RawNightwave {
    pub(crate) fn normalize(&self) -> Nightwave {
        Nightwave {
            season: self.season,
            tag: self.tag.clone(),
            phase: self.phase,
            activation: instant(&self.activation, &None),
            expiry: instant(&self.expiry, &None),
            active_challenges: self
                .active_challenges
                .iter()
                .map(|challenge| NightwaveChallenge {
                    title: challenge.title.clone(),
                    description: challenge
                        .desc
                        .clone()
                        .or_else(|| challenge.description.clone()),
                    is_daily: challenge.is_daily.unwrap_or(false),
                    is_elite: challenge.is_elite.unwrap_or(false),
                    expiry: instant(&challenge.expiry, &None),
                })
                .collect(),
        }
    }
}
