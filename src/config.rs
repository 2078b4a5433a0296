use std::env;
use std::fmt::Display;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub dataset: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            environment: "development".to_string(),
            dataset: None,
        }
    }
}

/// Values given on the command line; they beat every other source.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub dataset: Option<PathBuf>,
}

impl Settings {
    pub fn load(overrides: &Overrides) -> Self {
        let mut settings = load_config_file();
        settings.apply_env(|key| env::var(key).ok());
        settings.apply_overrides(overrides);
        settings
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.host = host;
        }
        if let Some(port) = try_parse(&lookup, "PORT") {
            self.port = port;
        }
        if let Some(environment) = lookup("ENVIRONMENT") {
            self.environment = environment;
        }
        if let Some(dataset) = lookup("EMOJIMOVIE_DATASET") {
            self.dataset = Some(PathBuf::from(dataset));
        }
    }

    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(ref host) = overrides.host {
            self.host = host.clone();
        }
        if let Some(port) = overrides.port {
            self.port = port;
        }
        if let Some(ref dataset) = overrides.dataset {
            self.dataset = Some(dataset.clone());
        }
    }
}

fn try_parse<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    raw.trim()
        .parse()
        .map_err(|e| warn!("Invalid {key} value '{raw}': {e}, keeping previous value"))
        .ok()
}

pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("emojimovie").join("config.json"))
}

pub fn load_config_file() -> Settings {
    let Some(path) = get_config_path() else {
        return Settings::default();
    };
    if !path.exists() {
        debug!("No config file at {}, using defaults", path.display());
        return Settings::default();
    }

    match fs::read_to_string(&path) {
        Ok(contents) => {
            info!("Reading config from {}", path.display());
            serde_json::from_str(&contents).unwrap_or_else(|e| {
                warn!("Ignoring malformed config {}: {e}", path.display());
                Settings::default()
            })
        }
        Err(_) => Settings::default(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.bind_address(), "0.0.0.0:8000");
        assert_eq!(settings.environment, "development");
        assert!(settings.dataset.is_none());
    }

    #[test]
    fn test_partial_config_file_keeps_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"port": 9000}"#).unwrap();
        assert_eq!(settings.port, 9000);
        assert_eq!(settings.host, "0.0.0.0");
    }

    #[test]
    fn test_env_overrides_file() {
        let mut settings = Settings::default();
        settings.apply_env(env_of(&[
            ("PORT", "8080"),
            ("HOST", "127.0.0.1"),
            ("ENVIRONMENT", "production"),
            ("EMOJIMOVIE_DATASET", "/srv/movies.json"),
        ]));
        assert_eq!(settings.bind_address(), "127.0.0.1:8080");
        assert_eq!(settings.environment, "production");
        assert_eq!(settings.dataset, Some(PathBuf::from("/srv/movies.json")));
    }

    #[test]
    fn test_invalid_port_is_ignored() {
        let mut settings = Settings::default();
        settings.apply_env(env_of(&[("PORT", "eighty")]));
        assert_eq!(settings.port, 8000);
    }

    #[test]
    fn test_cli_overrides_win() {
        let mut settings = Settings::default();
        settings.apply_env(env_of(&[("PORT", "8080")]));
        settings.apply_overrides(&Overrides {
            host: None,
            port: Some(3000),
            dataset: Some(PathBuf::from("local.json")),
        });
        assert_eq!(settings.port, 3000);
        assert_eq!(settings.host, "0.0.0.0");
        assert_eq!(settings.dataset, Some(PathBuf::from("local.json")));
    }
}
