use async_trait::async_trait;
use qbittorrent::{QBittorrentClient, TorrentInfo};

/// Lookup of tracker URLs for a torrent hash.
///
/// A seam over the qBittorrent client so the tracker filter can be tested
/// without a live WebUI.
#[async_trait]
pub trait TrackerLookup: Send + Sync {
    /// Fetch the tracker URLs announced for `hash`.
    async fn tracker_urls(&self, hash: &str) -> qbittorrent::Result<Vec<String>>;
}

#[async_trait]
impl TrackerLookup for QBittorrentClient {
    async fn tracker_urls(&self, hash: &str) -> qbittorrent::Result<Vec<String>> {
        let trackers = self.trackers(hash).await?;
        Ok(trackers.into_iter().map(|t| t.url).collect())
    }
}

/// Keep only candidates announced to a tracker whose URL contains `pattern`.
///
/// `pattern` must already be lowercased (the config normalizes it); tracker
/// URLs are lowercased before matching. A failed lookup logs a warning and
/// drops the candidate instead of aborting the cycle.
pub async fn filter_by_tracker<'a, L: TrackerLookup + ?Sized>(
    lookup: &L,
    pattern: &str,
    candidates: Vec<&'a TorrentInfo>,
) -> Vec<&'a TorrentInfo> {
    let mut matched = Vec::with_capacity(candidates.len());

    for t in candidates {
        match lookup.tracker_urls(&t.hash).await {
            Ok(urls) => {
                if urls.iter().any(|u| u.to_lowercase().contains(pattern)) {
                    matched.push(t);
                }
            }
            Err(e) => {
                tracing::warn!(
                    "Tracker lookup failed for {}, skipping: {}",
                    short_hash(&t.hash),
                    e
                );
            }
        }
    }

    matched
}

fn short_hash(hash: &str) -> &str {
    &hash[..hash.len().min(8)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use qbittorrent::QBittorrentError;
    use std::collections::HashMap;

    struct StubLookup {
        trackers: HashMap<String, Vec<String>>,
        failing: Vec<String>,
    }

    #[async_trait]
    impl TrackerLookup for StubLookup {
        async fn tracker_urls(&self, hash: &str) -> qbittorrent::Result<Vec<String>> {
            if self.failing.iter().any(|h| h == hash) {
                return Err(QBittorrentError::Api {
                    status_code: 500,
                    message: "boom".to_string(),
                });
            }
            Ok(self.trackers.get(hash).cloned().unwrap_or_default())
        }
    }

    fn torrent(hash: &str) -> TorrentInfo {
        TorrentInfo {
            hash: hash.to_string(),
            name: hash.to_string(),
            category: "tv".to_string(),
            progress: 1.0,
            completion_on: 1,
            force_start: false,
        }
    }

    #[tokio::test]
    async fn matching_is_case_insensitive() {
        let lookup = StubLookup {
            trackers: HashMap::from([(
                "a".to_string(),
                vec!["https://Tracker.TorrentLeech.org/announce".to_string()],
            )]),
            failing: vec![],
        };

        let torrents = [torrent("a")];
        let candidates = torrents.iter().collect();
        let kept = filter_by_tracker(&lookup, "torrentleech", candidates).await;
        assert_eq!(kept.len(), 1);
    }

    #[tokio::test]
    async fn non_matching_trackers_are_dropped() {
        let lookup = StubLookup {
            trackers: HashMap::from([
                ("a".to_string(), vec!["https://other.example/announce".to_string()]),
                ("b".to_string(), vec!["** [DHT] **".to_string()]),
            ]),
            failing: vec![],
        };

        let torrents = [torrent("a"), torrent("b")];
        let candidates = torrents.iter().collect();
        let kept = filter_by_tracker(&lookup, "torrentleech", candidates).await;
        assert!(kept.is_empty());
    }

    #[tokio::test]
    async fn failed_lookup_fails_closed() {
        let lookup = StubLookup {
            trackers: HashMap::from([(
                "good".to_string(),
                vec!["https://tracker.example/announce".to_string()],
            )]),
            failing: vec!["bad".to_string()],
        };

        let torrents = [torrent("bad"), torrent("good")];
        let candidates = torrents.iter().collect();
        let kept = filter_by_tracker(&lookup, "example", candidates).await;
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].hash, "good");
    }
}
