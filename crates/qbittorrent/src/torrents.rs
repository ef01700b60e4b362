use crate::client::QBittorrentClient;
use crate::error::QBittorrentError;
use crate::models::{TorrentInfo, TrackerInfo};

impl QBittorrentClient {
    /// Get the full torrent list
    /// GET /api/v2/torrents/info
    pub async fn torrents(&self) -> crate::Result<Vec<TorrentInfo>> {
        let url = self.url("/torrents/info");

        let response = self.client().get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(QBittorrentError::Api {
                status_code: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }

    /// Get trackers for a torrent
    /// GET /api/v2/torrents/trackers
    pub async fn trackers(&self, hash: &str) -> crate::Result<Vec<TrackerInfo>> {
        let url = self.url("/torrents/trackers");

        let response = self
            .client()
            .get(&url)
            .query(&[("hash", hash)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(QBittorrentError::Api {
                status_code: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }

    /// Toggle force-start on torrent(s)
    /// POST /api/v2/torrents/setForceStart
    ///
    /// # Arguments
    /// * `hashes` - Torrent hashes, or `&["all"]` for all torrents
    /// * `value` - Whether force-start should be enabled
    pub async fn set_force_start(&self, hashes: &[&str], value: bool) -> crate::Result<()> {
        let url = self.url("/torrents/setForceStart");

        // qBittorrent expects hashes separated by '|'
        let params = [("hashes", hashes.join("|")), ("value", value.to_string())];

        let response = self.client().post(&url).form(&params).send().await?;
        self.handle_response(response).await
    }
}
