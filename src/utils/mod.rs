use std::path::Path;

use config::{File, FileFormat};
use tracing::info;

use crate::models::common::{Config, DEFAULT_API_URL, DEFAULT_OUTPUT_PATH};
use crate::models::errors::ConfigError;

const MAX_ERROR_BODY: usize = 512;

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    info!("Config path: {}", path.to_string_lossy());

    let settings = config::Config::builder()
        .set_default("api_url", DEFAULT_API_URL)?
        .set_default("output_path", DEFAULT_OUTPUT_PATH)?
        .add_source(File::from(path).format(FileFormat::Yaml))
        .build()?;

    let config: Config = settings.try_deserialize()?;

    if config.simulation_id.trim().is_empty() {
        return Err(ConfigError::MissingValue {
            field: "simulation_id".to_string(),
        });
    }

    Ok(config)
}

/// Reduces an error page to its first line of text so it fits in a log line.
pub fn strip_html(body: &str) -> String {
    let lower = body.to_ascii_lowercase();
    let text = if lower.contains("<!doctype html") || lower.contains("<html") {
        remove_tags(body)
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or_default()
            .to_string()
    } else {
        body.trim().to_string()
    };

    text.chars().take(MAX_ERROR_BODY).collect()
}

fn remove_tags(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_config_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");
        fs::write(&path, "simulation_id: \"abc\"\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.simulation_id, "abc");
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.output_path, DEFAULT_OUTPUT_PATH);
    }

    #[test]
    fn test_load_config_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");
        fs::write(
            &path,
            "simulation_id: abc\napi_url: http://localhost:1234/sim\noutput_path: out/events.json\n",
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.api_url, "http://localhost:1234/sim");
        assert_eq!(config.output_path, "out/events.json");
    }

    #[test]
    fn test_load_config_requires_simulation_id() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");

        fs::write(&path, "output_path: x.json\n").unwrap();
        assert!(matches!(load_config(&path), Err(ConfigError::Load(_))));

        fs::write(&path, "simulation_id: \"  \"\n").unwrap();
        assert!(matches!(
            load_config(&path),
            Err(ConfigError::MissingValue { .. })
        ));
    }

    #[test]
    fn test_load_config_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(dir.path().join("nope.yml")).is_err());
    }

    #[test]
    fn test_strip_html() {
        let page = "<!DOCTYPE html>\n<html>\n<body>\n<h1>\n502 Bad Gateway\n</h1>\n</body>\n</html>";
        assert_eq!(strip_html(page), "502 Bad Gateway");

        let inline = "<html><body><h1>403 Forbidden</h1></body></html>";
        assert_eq!(strip_html(inline), "403 Forbidden");
    }

    #[test]
    fn test_strip_html_passes_plain_text() {
        let body = r#"{"error":{"message":"simulation not found"}}"#;
        assert_eq!(strip_html(body), body);
        assert_eq!(strip_html("  not found \n"), "not found");
    }
}
