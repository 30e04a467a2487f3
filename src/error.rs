use crate::config::NETWORKS;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum SmartadsError {
    #[error("Missing configuration {0}")]
    MissingConfiguration(String),
    #[error("Invalid configuration in {0}: {1}")]
    InvalidConfiguration(String, #[source] serde_json::Error),
    #[error("Unknown networks {}: only {} are valid networks", .0.join(", "), NETWORKS.join(", "))]
    UnknownNetworks(Vec<String>),
    #[error("Cannot request networks without smartads")]
    NetworksWithoutSmartads,
    #[error("Failed to execute {0}: {1}")]
    GradleSpawn(&'static str, #[source] std::io::Error),
}
