use crate::client::QBittorrentClient;
use crate::error::QBittorrentError;

impl QBittorrentClient {
    /// Login to qBittorrent WebUI
    /// POST /api/v2/auth/login
    ///
    /// qBittorrent answers 200 with body `Ok.` on success and `Fails.` when
    /// the credentials are rejected. The session cookie set by a successful
    /// login stays in the client's cookie store for subsequent requests.
    pub async fn login(&self, username: &str, password: &str) -> crate::Result<()> {
        let url = self.url("/auth/login");
        let params = [("username", username), ("password", password)];

        let response = self.client().post(&url).form(&params).send().await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if status.is_success() && body == "Ok." {
            tracing::debug!("Successfully logged in to qBittorrent");
            Ok(())
        } else if body == "Fails." {
            Err(QBittorrentError::Auth("Invalid username or password".into()))
        } else {
            Err(QBittorrentError::Auth(format!(
                "Login failed: {} - {}",
                status.as_u16(),
                body
            )))
        }
    }
}
