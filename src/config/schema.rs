use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Number of results shown when neither the config nor the CLI says otherwise
pub const DEFAULT_TOP: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path to the bike catalog JSON file
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    /// How many ranked bikes to display
    #[serde(default)]
    pub top: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
catalog: /srv/bikes/bikes_data.json
top: 5
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.catalog, Some(PathBuf::from("/srv/bikes/bikes_data.json")));
        assert_eq!(config.top, Some(5));
    }

    #[test]
    fn test_empty_config_parse() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result: Result<Config, _> = serde_saphyr::from_str("queries: []\n");
        assert!(result.is_err());
    }
}
