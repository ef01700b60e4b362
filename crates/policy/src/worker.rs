//! Force-seed worker
//!
//! Runs one poll cycle against the qBittorrent WebUI at the configured
//! interval: authenticate, fetch the torrent list, classify, apply.

use std::time::Duration;

use chrono::Utc;
use qbittorrent::QBittorrentClient;

use crate::actions::{compute_actions, select_candidates};
use crate::actor::{spawn_periodic_actor, ActorHandle, PeriodicActor};
use crate::config::PolicyConfig;
use crate::error::CycleError;
use crate::tracker::filter_by_tracker;

/// Handle for communicating with ForceSeedActor
pub type ForceSeedHandle = ActorHandle;

/// What a completed cycle did.
#[derive(Debug, Clone, Copy, Default)]
pub struct CycleOutcome {
    pub forced: usize,
    pub unforced: usize,
}

/// Run one poll cycle.
///
/// Logs in (qBittorrent sessions are cheap, so every cycle re-authenticates
/// over the cookie-carrying client), fetches the full torrent list, narrows
/// it to completed torrents in managed categories, optionally filters by
/// tracker, then applies the force/unforce batches. The force batch is
/// applied first; if it fails the unforce batch is not attempted this cycle
/// and everything is recomputed on the next one.
pub async fn run_cycle(
    client: &QBittorrentClient,
    config: &PolicyConfig,
) -> Result<CycleOutcome, CycleError> {
    client
        .login(&config.username, &config.password)
        .await
        .map_err(CycleError::Auth)?;

    let torrents = client.torrents().await.map_err(CycleError::Fetch)?;

    let mut candidates = select_candidates(&torrents, &config.categories);
    if let Some(pattern) = &config.tracker_match {
        candidates = filter_by_tracker(client, pattern, candidates).await;
    }

    let batch = compute_actions(&candidates, Utc::now().timestamp(), config.force_days);

    if !batch.to_force.is_empty() {
        let hashes: Vec<&str> = batch.to_force.iter().map(String::as_str).collect();
        client
            .set_force_start(&hashes, true)
            .await
            .map_err(CycleError::Fetch)?;
        tracing::info!(
            "Force-start ON for {} torrents (categories={:?})",
            batch.to_force.len(),
            config.categories
        );
    }

    if !batch.to_unforce.is_empty() {
        let hashes: Vec<&str> = batch.to_unforce.iter().map(String::as_str).collect();
        client
            .set_force_start(&hashes, false)
            .await
            .map_err(CycleError::Fetch)?;
        tracing::info!(
            "Force-start OFF for {} torrents (categories={:?})",
            batch.to_unforce.len(),
            config.categories
        );
    }

    if batch.is_empty() {
        tracing::info!("No changes needed");
    }

    Ok(CycleOutcome {
        forced: batch.to_force.len(),
        unforced: batch.to_unforce.len(),
    })
}

/// Force-seed actor
///
/// Runs a poll cycle at the configured interval. Cycle failures are logged
/// and swallowed; the next tick starts over from a fresh login.
struct ForceSeedActor {
    client: QBittorrentClient,
    config: PolicyConfig,
}

impl PeriodicActor for ForceSeedActor {
    fn interval(&self) -> Duration {
        self.config.poll_interval
    }

    fn name(&self) -> &'static str {
        "force_seed"
    }

    async fn execute(&mut self) {
        match run_cycle(&self.client, &self.config).await {
            Ok(outcome) => {
                tracing::debug!(
                    "Cycle finished: {} forced, {} unforced",
                    outcome.forced,
                    outcome.unforced
                );
            }
            Err(e) => {
                tracing::error!("Cycle failed: {}", e);
            }
        }
    }
}

/// Create and start the force-seed actor
pub fn create_force_seed_actor(
    client: QBittorrentClient,
    config: PolicyConfig,
) -> ForceSeedHandle {
    spawn_periodic_actor(ForceSeedActor { client, config })
}
