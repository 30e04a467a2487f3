use crate::error::SmartadsError;
use serde::Deserialize;
use std::{fs::File, io::BufReader, path::Path};

pub(crate) const CONFIG_FILE: &str = "config.json";

/// Ad networks the Gradle build knows how to download, in the order they're
/// requested when the configuration asks for all of them.
pub(crate) const NETWORKS: &[&str] = &[
    "adcolony",
    "admob",
    "amazon",
    "applovin",
    "chartboost",
    "flurry",
    "inmobi",
    "mopub",
    "supersonic",
    "unity",
    "vungle",
];

#[derive(Debug, Deserialize)]
pub(crate) struct Config {
    #[serde(default = "default_smartads")]
    pub smartads: bool,
    #[serde(default)]
    pub notifications: bool,
    #[serde(default)]
    pub networks: Vec<String>,
}

fn default_smartads() -> bool {
    true
}

impl Config {
    /// Loads and validates the configuration from `config.json` in the
    /// working directory.
    pub(crate) fn load() -> Result<Self, SmartadsError> {
        Self::load_path(Path::new(CONFIG_FILE))
    }

    pub(crate) fn load_path(path: &Path) -> Result<Self, SmartadsError> {
        let file =
            File::open(path).map_err(|_| SmartadsError::MissingConfiguration(path.display().to_string()))?;
        let config: Config = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| SmartadsError::InvalidConfiguration(path.display().to_string(), e))?;
        config.validated()
    }

    /// Checks the requested networks against the known set and applies the
    /// defaulting rule: smartads with no explicit networks means all of them.
    fn validated(mut self) -> Result<Self, SmartadsError> {
        if self.smartads {
            if self.networks.is_empty() {
                self.networks = NETWORKS.iter().map(|n| n.to_string()).collect();
            } else {
                let unknown: Vec<String> = self
                    .networks
                    .iter()
                    .filter(|n| !NETWORKS.contains(&n.as_str()))
                    .cloned()
                    .collect();
                if !unknown.is_empty() {
                    return Err(SmartadsError::UnknownNetworks(unknown));
                }
            }
        } else if !self.networks.is_empty() {
            return Err(SmartadsError::NetworksWithoutSmartads);
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn config(smartads: bool, networks: &[&str]) -> Config {
        Config {
            smartads,
            notifications: false,
            networks: networks.iter().map(|n| n.to_string()).collect(),
        }
    }

    #[test]
    fn smartads_with_no_networks_defaults_to_all() {
        let config = config(true, &[]).validated().unwrap();
        assert_eq!(config.networks, NETWORKS);
    }

    #[test]
    fn explicit_networks_are_kept_in_order() {
        let config = config(true, &["unity", "admob"]).validated().unwrap();
        assert_eq!(config.networks, &["unity", "admob"]);
    }

    #[test]
    fn unknown_network_is_rejected() {
        let err = config(true, &["admob", "bogus"]).validated().unwrap_err();
        assert!(matches!(err, SmartadsError::UnknownNetworks(unknown) if unknown == ["bogus"]));
    }

    #[test]
    fn networks_without_smartads_are_rejected() {
        let err = config(false, &["admob"]).validated().unwrap_err();
        assert!(matches!(err, SmartadsError::NetworksWithoutSmartads));
    }

    #[test]
    fn no_smartads_and_no_networks_is_accepted() {
        let config = config(false, &[]).validated().unwrap();
        assert!(config.networks.is_empty());
    }

    #[test]
    fn missing_file_is_a_missing_configuration() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_path(&dir.path().join(CONFIG_FILE)).unwrap_err();
        assert!(matches!(err, SmartadsError::MissingConfiguration(_)));
    }

    #[test]
    fn malformed_json_is_an_invalid_configuration() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "{ not json").unwrap();

        let err = Config::load_path(&path).unwrap_err();
        assert!(matches!(err, SmartadsError::InvalidConfiguration(..)));
    }

    #[test]
    fn omitted_keys_get_their_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, r#"{"networks": ["adcolony", "vungle"]}"#).unwrap();

        let config = Config::load_path(&path).unwrap();
        assert!(config.smartads);
        assert!(!config.notifications);
        assert_eq!(config.networks, &["adcolony", "vungle"]);
    }
}
