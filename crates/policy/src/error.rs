use qbittorrent::QBittorrentError;
use thiserror::Error;

/// Errors that abort a single poll cycle.
///
/// Tracker lookup failures are handled where they occur (the torrent is
/// skipped) and never surface here.
#[derive(Debug, Error)]
pub enum CycleError {
    /// Login rejected by the WebUI
    #[error("qBittorrent login failed: {0}")]
    Auth(#[source] QBittorrentError),

    /// Torrent listing or batch force-start request failed
    #[error("qBittorrent request failed: {0}")]
    Fetch(#[source] QBittorrentError),
}
