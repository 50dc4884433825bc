use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, warn};
use url::Url;

use crate::models::errors::FetchError;
use crate::utils::strip_html;

/// Anything that can produce one decoded simulation response.
pub trait SimulationSource {
    fn fetch(&self) -> impl Future<Output = Result<Value, FetchError>> + Send;
}

/// Single-shot client for a simulation endpoint. No retries: any failure is
/// returned to the caller as-is.
#[derive(Debug, Clone)]
pub struct SimulationFetcher {
    client: Client,
    url: Url,
}

impl SimulationFetcher {
    pub fn new(url: Url) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }
}

impl SimulationSource for SimulationFetcher {
    /// POSTs to the endpoint and decodes the JSON body.
    async fn fetch(&self) -> Result<Value, FetchError> {
        info!("Simulation URL: {}", self.url);

        let response = self.client.post(self.url.clone()).send().await?;
        let status = response.status();
        debug!("Simulation response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let body = strip_html(&body);
            warn!("Simulation request failed with {}: {}", status, body);
            return Err(FetchError::Status { status, body });
        }

        Ok(response.json::<Value>().await?)
    }
}
