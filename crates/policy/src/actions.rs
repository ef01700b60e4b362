use qbittorrent::TorrentInfo;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// The per-cycle action plan: hashes to force-start and to un-force-start.
///
/// The two sets are disjoint by construction and are recomputed from scratch
/// every cycle; nothing is carried over between iterations.
#[derive(Debug, Default, PartialEq)]
pub struct ActionBatch {
    pub to_force: Vec<String>,
    pub to_unforce: Vec<String>,
}

impl ActionBatch {
    pub fn is_empty(&self) -> bool {
        self.to_force.is_empty() && self.to_unforce.is_empty()
    }
}

/// Select the torrents the policy may act on.
///
/// A candidate must carry a managed category and be completed (recorded
/// completion time and 100% progress). Everything else is left alone no
/// matter its age or force-start state.
pub fn select_candidates<'a>(
    torrents: &'a [TorrentInfo],
    categories: &[String],
) -> Vec<&'a TorrentInfo> {
    torrents
        .iter()
        .filter(|t| {
            let category = t.category.trim();
            categories.iter().any(|c| c == category)
        })
        .filter(|t| t.is_completed())
        .collect()
}

/// Decide force/unforce actions for already-filtered candidates.
///
/// A candidate younger than `force_days` since completion should be
/// force-started; one at or past the threshold should have force-start
/// cleared. Candidates already in the desired state produce no action.
pub fn compute_actions(candidates: &[&TorrentInfo], now: i64, force_days: f64) -> ActionBatch {
    let mut batch = ActionBatch::default();

    for t in candidates {
        let age_days = (now - t.completion_on) as f64 / SECONDS_PER_DAY;
        if age_days < force_days {
            if !t.force_start {
                batch.to_force.push(t.hash.clone());
            }
        } else if t.force_start {
            batch.to_unforce.push(t.hash.clone());
        }
    }

    batch
}
