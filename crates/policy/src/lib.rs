//! Seed policy loop
//!
//! Decides which completed torrents should have qBittorrent's force-start
//! flag set based on time since completion, and applies the changes on a
//! fixed poll interval. Everything is recomputed from the WebUI each cycle;
//! no state survives across iterations.

mod actions;
mod actor;
mod config;
mod error;
mod tracker;
mod worker;

pub use actions::{compute_actions, select_candidates, ActionBatch};
pub use actor::{spawn_periodic_actor, ActorHandle, ActorMessage, PeriodicActor};
pub use config::{ConfigError, PolicyConfig};
pub use error::CycleError;
pub use tracker::{filter_by_tracker, TrackerLookup};
pub use worker::{create_force_seed_actor, run_cycle, CycleOutcome, ForceSeedHandle};
