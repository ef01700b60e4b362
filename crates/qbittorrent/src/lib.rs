//! Minimal qBittorrent WebUI v2 API client.
//!
//! Covers the handful of endpoints the force-seed worker needs: login,
//! torrent listing, per-torrent tracker listing, and the batch force-start
//! toggle. Authentication is cookie-based; the client carries the session
//! cookie from `login` on every subsequent request.

mod auth;
mod client;
mod error;
pub mod models;
mod torrents;

pub use client::QBittorrentClient;
pub use error::QBittorrentError;
pub use models::{TorrentInfo, TrackerInfo};

pub type Result<T> = std::result::Result<T, QBittorrentError>;
