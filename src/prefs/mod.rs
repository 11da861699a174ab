pub mod parse;
pub mod prompt;
pub mod types;

pub use prompt::{prompt_preferences, PreferencePrompt};
pub use types::{Preferences, RideType, UNBOUNDED_BUDGET};

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load a preference record from a YAML file
///
/// Missing fields take their defaults. The record is not validated here;
/// see `scoring::validate_preferences`.
pub fn load_preferences(path: &Path) -> Result<Preferences> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read preference file at {}", path.display()))?;

    let prefs: Preferences = serde_saphyr::from_str(&content).with_context(|| {
        format!("Failed to parse preferences: invalid YAML in {}", path.display())
    })?;

    Ok(prefs)
}
