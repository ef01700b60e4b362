use std::time::Duration;

use reqwest::Client;

use crate::error::QBittorrentError;

/// Timeout applied to every WebUI request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct QBittorrentClient {
    client: Client,
    base_url: String,
}

impl QBittorrentClient {
    /// Create a new client with cookie support (required for authentication)
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        let base_url = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/api/v2{}", self.base_url, path)
    }

    pub(crate) async fn handle_response(&self, response: reqwest::Response) -> crate::Result<()> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(QBittorrentError::Api {
                status_code: status.as_u16(),
                message,
            });
        }
        Ok(())
    }
}
