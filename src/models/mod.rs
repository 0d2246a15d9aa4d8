mod alert;
mod cycle;
mod fissure;
mod invasion;
mod mission;
mod nightwave;
mod snapshot;
mod steel;
mod trader;

pub use alert::{Alert, Event, GlobalUpgrade};
pub use cycle::{CyclePhase, WorldCycle, WorldCycles};
pub use fissure::{sort_fissures, Fissure, FissureTier, UNKNOWN_TIER_RANK};
pub use invasion::{Invasion, InvasionReward, RewardItem};
pub use mission::{Arbitration, MissionStage, TimedMission};
pub use nightwave::{Nightwave, NightwaveChallenge};
pub use snapshot::WorldstateSnapshot;
pub use steel::{SteelPath, SteelPathReward};
pub use trader::{TraderItem, VoidTrader};

pub(crate) use alert::{RawAlert, RawEvent, RawGlobalUpgrade};
pub(crate) use cycle::RawCycle;
pub(crate) use fissure::RawFissure;
pub(crate) use invasion::RawInvasion;
pub(crate) use mission::{RawArbitration, RawTimedMission};
pub(crate) use nightwave::RawNightwave;
pub(crate) use steel::RawSteelPath;
pub(crate) use trader::RawVoidTrader;
