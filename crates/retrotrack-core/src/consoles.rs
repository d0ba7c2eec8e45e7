use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Consoles searched by a full scrape, in scrape order.
pub const DEFAULT_CONSOLES: [&str; 8] = [
    "Nintendo 64",
    "PlayStation 1",
    "Sega Genesis",
    "Super Nintendo",
    "GameCube",
    "Nintendo Entertainment System",
    "Sega Dreamcast",
    "PlayStation 2",
];

#[must_use]
pub fn default_consoles() -> Vec<String> {
    DEFAULT_CONSOLES.iter().map(|c| (*c).to_string()).collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsolesFile {
    pub consoles: Vec<String>,
}

/// Load and validate a console list from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_consoles(path: &Path) -> Result<ConsolesFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ConsolesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_consoles(&content)
}

fn parse_consoles(content: &str) -> Result<ConsolesFile, ConfigError> {
    let file: ConsolesFile =
        serde_yaml::from_str(content).map_err(ConfigError::ConsolesFileParse)?;
    validate_consoles(&file)?;
    Ok(file)
}

fn validate_consoles(file: &ConsolesFile) -> Result<(), ConfigError> {
    if file.consoles.is_empty() {
        return Err(ConfigError::Validation(
            "console list must not be empty".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for name in &file.consoles {
        if name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "console name must be non-empty".to_string(),
            ));
        }
        if !seen.insert(name.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate console name: '{name}'"
            )));
        }
    }

    Ok(())
}
