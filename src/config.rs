use std::fs;
use std::path::Path;

use anyhow::Context;
use anyhow::Result;
use serde::Deserialize;

/// Status page settings read from the configuration file.
///
/// The file is shared with other tooling, so anything beyond the fields
/// listed here is ignored.
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// Identifier of the status page whose metrics are addressed.
    pub page: String,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Settings> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("could not read {}", path.display()))?;
        let settings = serde_json::from_str(&raw)
            .with_context(|| format!("could not parse {}", path.display()))?;
        Ok(settings)
    }
}
