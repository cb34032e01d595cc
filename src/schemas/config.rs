//! Config schema - workspace configuration for grantflow

use serde::{Deserialize, Serialize};

/// Main configuration for a grantflow workspace
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Role assumed for permission checks when none is given on the command line
    #[serde(default = "default_role")]
    pub default_role: String,

    /// Email assumed for permission checks when none is given on the command line
    #[serde(default)]
    pub default_email: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_role() -> String {
    "Researcher".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            schema_version: 1,
            default_role: "Researcher".to_string(),
            default_email: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.schema_version, 1);
        assert_eq!(config.default_role, "Researcher");
        assert_eq!(config.default_email, "");
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = Config::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.default_role, config.default_role);
        assert_eq!(parsed.schema_version, config.schema_version);
    }

    #[test]
    fn test_config_partial_json() {
        // Simulate a config file with only some fields set
        let json = r#"{"default_role": "Grants Manager"}"#;
        let parsed: Config = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.default_role, "Grants Manager");
        // Other fields should have defaults
        assert_eq!(parsed.schema_version, 1);
        assert_eq!(parsed.default_email, "");
    }
}
