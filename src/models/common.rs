use serde::{Deserialize, Serialize};
use url::Url;

use crate::models::errors::ConfigError;

pub const DEFAULT_API_URL: &str =
    "https://api.tenderly.co/api/v1/public/account/safe/project/safe-apps/simulate";
pub const DEFAULT_OUTPUT_PATH: &str = "payload_events.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub simulation_id: String,
    pub api_url: String,
    pub output_path: String,
}

impl Config {
    /// Endpoint the simulation is fetched from: `{api_url}/{simulation_id}`.
    pub fn simulation_url(&self) -> Result<Url, ConfigError> {
        let base = self.api_url.trim_end_matches('/');
        let url = Url::parse(&format!("{}/{}", base, self.simulation_id.trim()))?;
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_url: &str, simulation_id: &str) -> Config {
        Config {
            simulation_id: simulation_id.to_string(),
            api_url: api_url.to_string(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
        }
    }

    #[test]
    fn test_simulation_url_appends_id() {
        let url = config(DEFAULT_API_URL, "abc-123").simulation_url().unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.tenderly.co/api/v1/public/account/safe/project/safe-apps/simulate/abc-123"
        );
    }

    #[test]
    fn test_simulation_url_tolerates_trailing_slash() {
        let url = config("http://127.0.0.1:8080/simulate/", "xyz")
            .simulation_url()
            .unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/simulate/xyz");
    }

    #[test]
    fn test_simulation_url_rejects_garbage() {
        let result = config("not a url", "xyz").simulation_url();
        assert!(matches!(result, Err(ConfigError::InvalidUrl(_))));
    }
}
