use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{MirrorError, Result};

/// Centralized configuration for the mirrorctl tools
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MirrorConfig {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub mirror: MirrorSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Connection string; supports `${DATABASE_URL}` style references
    pub url: String,
    pub max_connections: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MirrorSettings {
    /// Label for the upstream forum being mirrored, used in log output
    pub source_name: Option<String>,
}

impl MirrorConfig {
    /// Load config from ~/.mirrorctl/config.toml
    ///
    /// Fails hard with an actionable error if the config doesn't exist.
    /// `DATABASE_URL` in the environment overrides the file's database url.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Err(MirrorError::config_not_found(config_path));
        }

        let content = fs::read_to_string(&config_path)?;
        let mut config = Self::from_toml_str(&content)?;

        config.expand_variables();

        // The environment wins over the file, same as the rest of the tooling.
        if let Ok(url) = env::var("DATABASE_URL") {
            if !url.is_empty() {
                config.database.url = url;
            }
        }

        Ok(config)
    }

    /// Parse config from a TOML string (no env expansion or overrides)
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| MirrorError::config(format!("invalid TOML: {e}")))?;

        if config.database.url.is_empty() {
            return Err(MirrorError::config("database.url is empty"));
        }

        Ok(config)
    }

    /// Get config file path: ~/.mirrorctl/config.toml
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".mirrorctl/config.toml")
    }

    /// Expand ${var} references in the database url
    fn expand_variables(&mut self) {
        let mut vars = HashMap::new();
        vars.insert("HOME".to_string(), env::var("HOME").unwrap_or_default());
        vars.insert(
            "DATABASE_URL".to_string(),
            env::var("DATABASE_URL").unwrap_or_default(),
        );

        self.database.url = Self::expand_string(&self.database.url, &vars);
    }

    /// Expand ${var} references in a string
    fn expand_string(s: &str, vars: &HashMap<String, String>) -> String {
        let mut result = s.to_string();

        for (key, value) in vars {
            let pattern = format!("${{{}}}", key);
            result = result.replace(&pattern, value);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_config() {
        let config = MirrorConfig::from_toml_str(
            r#"
            [database]
            url = "postgres://localhost/mirror"
            "#,
        )
        .expect("config should parse");

        assert_eq!(config.database.url, "postgres://localhost/mirror");
        assert_eq!(config.database.max_connections, None);
        assert!(config.mirror.source_name.is_none());
    }

    #[test]
    fn parses_full_config() {
        let config = MirrorConfig::from_toml_str(
            r#"
            [database]
            url = "postgres://db.internal/mirror"
            max_connections = 8

            [mirror]
            source_name = "example-forum"
            "#,
        )
        .expect("config should parse");

        assert_eq!(config.database.max_connections, Some(8));
        assert_eq!(config.mirror.source_name.as_deref(), Some("example-forum"));
    }

    #[test]
    fn rejects_invalid_toml() {
        let err = MirrorConfig::from_toml_str("[database").unwrap_err();
        assert!(matches!(err, MirrorError::Config { .. }));
    }

    #[test]
    fn expands_variables() {
        let mut vars = HashMap::new();
        vars.insert("HOME".to_string(), "/home/mirror".to_string());

        let expanded = MirrorConfig::expand_string("sqlite://${HOME}/db", &vars);
        assert_eq!(expanded, "sqlite:///home/mirror/db");
    }
}
