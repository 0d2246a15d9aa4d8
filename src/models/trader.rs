//! Void trader state and inventory.

use crate::dialect::{instant, RawInstant};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const DEFAULT_CHARACTER: &str = "Baro Ki'Teer";

/// One inventory offer: item name plus its two-currency price.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TraderItem {
    pub item: String,
    pub ducats: Option<u32>,
    pub credits: Option<u64>,
}

/// Represents the periodic void trader: active/inactive window bounds, the
/// relay he visits and the inventory carried while active. The inventory is
/// empty between visits.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VoidTrader {
    pub active: bool,
    pub character: String,
    pub location: Option<String>,
    pub arrival: Option<DateTime<Utc>>,
    pub departure: Option<DateTime<Utc>>,
    pub inventory: Vec<TraderItem>,
}

impl VoidTrader {
    /// Instant the current state flips: departure while active, arrival
    /// while away.
    pub fn next_change(&self) -> Option<DateTime<Utc>> {
        if self.active {
            self.departure
        } else {
            self.arrival
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawTraderItem {
    #[serde(default, alias = "name")]
    item: Option<String>,
    #[serde(default)]
    ducats: Option<u32>,
    #[serde(default)]
    credits: Option<u64>,
}

/// Raw void trader entry as either dialect emits it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawVoidTrader {
    #[serde(default)]
    active: Option<bool>,
    #[serde(default, alias = "name")]
    character: Option<String>,
    #[serde(default)]
    location: Option<String>,
    #[serde(default, alias = "start")]
    activation: Option<RawInstant>,
    #[serde(default, alias = "end")]
    expiry: Option<RawInstant>,
    #[serde(default, alias = "items")]
    inventory: Vec<RawTraderItem>,
}

impl RawVoidTrader {
    pub(crate) fn normalize(&self, now: DateTime<Utc>) -> VoidTrader {
        let arrival = instant(&self.activation, &None);
        let departure = instant(&self.expiry, &None);
        // Some sources omit the flag; derive it from the visit window.
        let active = self.active.unwrap_or_else(|| match (arrival, departure) {
            (Some(start), Some(end)) => start <= now && now < end,
            _ => false,
        });
        VoidTrader {
            active,
            character: self
                .character
                .clone()
                .unwrap_or_else(|| DEFAULT_CHARACTER.to_string()),
            location: self.location.clone(),
            arrival,
            departure,
            inventory: self
                .inventory
                .iter()
                .filter_map(|offer| {
                    Some(TraderItem {
                        item: offer.item.clone()?,
                        ducats: offer.ducats,
                        credits: offer.credits,
                    })
                })
                .collect(),
        }
    }
}
