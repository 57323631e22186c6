use std::path::Path;

use busnet_core::routing::RouterSettings;
use serde::Deserialize;

use crate::CliError;

/// Optional TOML configuration of the command line tool.
///
/// ```toml
/// pretty = true
///
/// [routing]
/// bus_wait_time = 6
/// bus_velocity = 40
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Used when the request document carries no `routing_settings`
    pub routing: Option<RouterSettings>,
    /// Pretty-print the response array
    pub pretty: bool,
}

impl CliConfig {
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, CliError> {
        Ok(toml::from_str(text)?)
    }
}
