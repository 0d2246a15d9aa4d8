//! Offline demo fixture.
//!
//! A small worldstate document with expiries pinned relative to `now`, so
//! countdowns run live without a network connection. Reachable only through
//! `WorldstateConfig::offline_demo`; production polls never fall back to it.

use chrono::{DateTime, Duration, Utc};
use serde_json::{json, Value};

/// Builds the fixture document. Cycle lengths roughly match the live game
/// (150-minute Cetus cycle, 100 of them day).
pub fn demo_document(now: DateTime<Utc>) -> Value {
    let iso = |offset: Duration| (now + offset).to_rfc3339();

    json!({
        "cetusCycle": {
            "isDay": true,
            "expiry": iso(Duration::minutes(73))
        },
        "vallisCycle": {
            "isWarm": false,
            "expiry": iso(Duration::minutes(11))
        },
        "cambionCycle": {
            "state": "fass",
            "expiry": iso(Duration::minutes(73))
        },
        "earthCycle": {
            "isDay": false,
            "expiry": iso(Duration::hours(2))
        },
        "arbitration": {
            "node": "Sechura (Pluto)",
            "enemy": "Corpus",
            "type": "Defense",
            "expiry": iso(Duration::minutes(42))
        },
        "fissures": [
            {
                "node": "Hepit (Void)",
                "missionType": "Capture",
                "enemy": "Corrupted",
                "tier": "Lith",
                "expiry": iso(Duration::minutes(50))
            },
            {
                "node": "Ukko (Void)",
                "missionType": "Capture",
                "enemy": "Corrupted",
                "tier": "Meso",
                "expiry": iso(Duration::minutes(35))
            },
            {
                "node": "Apollo (Lua)",
                "missionType": "Disruption",
                "enemy": "Corrupted",
                "tier": "Axi",
                "expiry": iso(Duration::minutes(80)),
                "isHard": true
            }
        ],
        "sortie": {
            "boss": "Kela De Thaym",
            "faction": "Grineer",
            "expiry": iso(Duration::hours(9)),
            "variants": [
                { "node": "Adaro (Sedna)", "missionType": "Exterminate", "modifier": "Augmented Armor" },
                { "node": "Hydron (Sedna)", "missionType": "Defense", "modifier": "Energy Reduction" },
                { "node": "Merrow (Sedna)", "missionType": "Assassination", "modifier": "Eximus Stronghold" }
            ]
        },
        "archonHunt": {
            "boss": "Archon Amar",
            "faction": "Narmer",
            "expiry": iso(Duration::days(4)),
            "missions": [
                { "node": "Cervantes (Earth)", "type": "Exterminate" },
                { "node": "Coba (Earth)", "type": "Defense" },
                { "node": "Oro (Earth)", "type": "Assassination" }
            ]
        },
        "nightwave": {
            "season": 13,
            "tag": "RadioLegionIntermission",
            "phase": 1,
            "expiry": iso(Duration::days(30)),
            "activeChallenges": [
                { "title": "Stay Frosty", "desc": "Kill 150 enemies with cold damage", "daily": true },
                { "title": "Protector", "desc": "Complete 3 defense missions", "elite": false }
            ]
        },
        "steelPath": {
            "currentReward": { "name": "Umbra Forma Blueprint", "cost": 150 },
            "rotation": [
                { "name": "Bishamo Pauldrons Blueprint", "cost": 15 },
                { "name": "10,000 Kuva", "cost": 55 },
                { "name": "Umbra Forma Blueprint", "cost": 150 }
            ],
            "activation": iso(Duration::days(-3)),
            "expiry": iso(Duration::days(4))
        },
        "voidTrader": {
            "character": "Baro Ki'Teer",
            "location": "Strata Relay (Earth)",
            "activation": iso(Duration::days(3)),
            "expiry": iso(Duration::days(5)),
            "active": false,
            "inventory": []
        },
        "invasions": [
            {
                "node": "Ose (Europa)",
                "attackingFaction": "Grineer",
                "defendingFaction": "Corpus",
                "attackerReward": { "items": [{ "name": "Detonite Injector", "count": 3 }] },
                "defenderReward": { "items": [{ "name": "Fieldron", "count": 3 }] },
                "score": 5_000,
                "endScore": 30_000,
                "completed": false
            }
        ],
        "alerts": [],
        "events": [],
        "upgrades": []
    })
}
