//! Typed Warframe worldstate client crate used by the overlay backend.

pub mod cache;
pub mod client;
pub mod config;
pub mod demo;
pub mod dialect;
pub mod error;
pub mod format;
pub mod models;
pub mod normalize;
pub mod reset;
pub mod settings;

pub use cache::WorldstateCache;
pub use client::WorldstateClient;
pub use config::{Platform, WorldstateConfig};
pub use dialect::ApiDialect;
pub use error::{Result, WorldstateError};
pub use format::{format_duration, DurationStyle};
pub use models::{
    Alert, Arbitration, CyclePhase, Event, Fissure, FissureTier, GlobalUpgrade, Invasion,
    InvasionReward, MissionStage, Nightwave, NightwaveChallenge, RewardItem, SteelPath,
    SteelPathReward, TimedMission, TraderItem, VoidTrader, WorldCycle, WorldCycles,
    WorldstateSnapshot, UNKNOWN_TIER_RANK,
};
pub use reset::{next_daily_reset, next_weekly_reset};
pub use settings::{SettingsManager, TimerSettings};
