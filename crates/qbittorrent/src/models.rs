use serde::{Deserialize, Serialize};

/// Torrent information from qBittorrent
///
/// Only the fields the worker consumes are modeled; the WebUI returns many
/// more, which serde ignores.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TorrentInfo {
    /// Torrent hash
    pub hash: String,
    /// Torrent name
    pub name: String,
    /// Category assigned in qBittorrent (empty when uncategorized)
    #[serde(default)]
    pub category: String,
    /// Torrent progress (0.0 to 1.0)
    pub progress: f64,
    /// Time when the torrent finished downloading (Unix timestamp, 0 = never)
    #[serde(default)]
    pub completion_on: i64,
    /// Whether force-start is currently enabled
    #[serde(default)]
    pub force_start: bool,
}

impl TorrentInfo {
    /// Check if the torrent download is completed
    ///
    /// A torrent counts as completed once qBittorrent has recorded a
    /// completion time and progress has reached 100%.
    pub fn is_completed(&self) -> bool {
        self.completion_on > 0 && self.progress >= 1.0
    }
}

/// A single tracker entry for a torrent
///
/// The tracker list includes pseudo-entries such as `** [DHT] **` alongside
/// real announce URLs; both appear here as plain strings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrackerInfo {
    /// Tracker URL
    pub url: String,
    /// Tracker status (0 = disabled, 1 = not contacted, 2 = working, ...)
    #[serde(default)]
    pub status: i64,
    /// Latest message from the tracker
    #[serde(default)]
    pub msg: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_torrent_with_extra_fields() {
        let json = r#"{
            "hash": "8c212779b4abde7c6bc608063a0d008b7e40ce32",
            "name": "Some.Show.S01E01.1080p",
            "category": "tv",
            "progress": 1.0,
            "completion_on": 1700000000,
            "force_start": true,
            "state": "forcedUP",
            "size": 1073741824,
            "ratio": 2.5
        }"#;

        let torrent: TorrentInfo = serde_json::from_str(json).unwrap();
        assert_eq!(torrent.hash, "8c212779b4abde7c6bc608063a0d008b7e40ce32");
        assert_eq!(torrent.category, "tv");
        assert!(torrent.force_start);
        assert!(torrent.is_completed());
    }

    #[test]
    fn deserialize_torrent_defaults() {
        let json = r#"{
            "hash": "abc123",
            "name": "incomplete",
            "progress": 0.42
        }"#;

        let torrent: TorrentInfo = serde_json::from_str(json).unwrap();
        assert_eq!(torrent.category, "");
        assert_eq!(torrent.completion_on, 0);
        assert!(!torrent.force_start);
        assert!(!torrent.is_completed());
    }

    #[test]
    fn completion_requires_both_timestamp_and_progress() {
        let json = r#"{
            "hash": "abc123",
            "name": "stalled at 99%",
            "progress": 0.99,
            "completion_on": 1700000000
        }"#;

        let torrent: TorrentInfo = serde_json::from_str(json).unwrap();
        assert!(!torrent.is_completed());
    }

    #[test]
    fn deserialize_tracker_list_with_pseudo_entries() {
        let json = r#"[
            {"url": "** [DHT] **", "status": 2, "msg": ""},
            {"url": "https://tracker.example.org/announce", "status": 2, "msg": "", "tier": 0}
        ]"#;

        let trackers: Vec<TrackerInfo> = serde_json::from_str(json).unwrap();
        assert_eq!(trackers.len(), 2);
        assert_eq!(trackers[1].url, "https://tracker.example.org/announce");
    }
}
