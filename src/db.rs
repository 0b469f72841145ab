use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

// ---------------------------------------------------------------------------
// Bad bots  (bad_bots.yaml)
//
// Format: top-level mapping with the list under `nginx_bad_agents_default`.
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub(crate) struct BadBotsList {
    #[serde(rename = "nginx_bad_agents_default", default)]
    pub bots: Vec<String>,
}

pub(crate) fn parse_bad_bots(content: &str) -> Result<Vec<String>> {
    let list: BadBotsList = serde_yaml::from_str(content)?;
    Ok(list.bots)
}

/// Load the list of bad bot substrings from a YAML file, in file order.
pub fn load_bad_bots(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path.as_ref())?;
    parse_bad_bots(&content)
}
