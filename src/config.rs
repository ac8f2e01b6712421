// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Generator configuration

use crate::name::COMPONENT_SUFFIX;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration file name, looked up in the working directory
pub const CONFIG_FILE: &str = "scadgen.toml";

/// Settings for rendering and writing generated modules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Directory the root module is written to
    pub output_dir: PathBuf,
    /// Indentation unit for module bodies
    pub indent: String,
    /// Appended to the call name to identify an unnamed root module
    pub component_suffix: String,
    /// Verbose output
    pub verbose: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            indent: "\t".to_string(),
            component_suffix: COMPONENT_SUFFIX.to_string(),
            verbose: false,
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid generator configuration")
    }

    /// Load `scadgen.toml` if present, then apply environment variable overrides
    pub fn load() -> Result<Self> {
        let config = if Path::new(CONFIG_FILE).exists() {
            Self::from_file(CONFIG_FILE)?
        } else {
            Self::default()
        };

        config.with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Apply `SCADGEN_*` overrides read through `lookup`
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(output_dir) = lookup("SCADGEN_OUTPUT_DIR") {
            self.output_dir = PathBuf::from(output_dir);
        }

        if let Some(indent) = lookup("SCADGEN_INDENT") {
            self.indent = indent;
        }

        if let Some(verbose) = lookup("SCADGEN_VERBOSE") {
            self.verbose = parse_flag(&verbose)
                .with_context(|| format!("Invalid SCADGEN_VERBOSE: {:?}", verbose))?;
        }

        Ok(self)
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => bail!("expected a boolean flag, got {:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = GeneratorConfig::from_toml("output_dir = \"out\"\n").unwrap();
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.indent, "\t");
        assert_eq!(config.component_suffix, "_component");
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("SCADGEN_OUTPUT_DIR", "generated"),
            ("SCADGEN_INDENT", "    "),
            ("SCADGEN_VERBOSE", "true"),
        ]
        .into_iter()
        .collect();

        let config = GeneratorConfig::default()
            .with_env_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.output_dir, PathBuf::from("generated"));
        assert_eq!(config.indent, "    ");
        assert!(config.verbose);
    }

    #[test]
    fn test_verbose_flag_spellings() {
        for (raw, expected) in [("1", true), ("yes", true), ("ON", true), ("0", false), ("no", false)] {
            let config = GeneratorConfig::default()
                .with_env_overrides(|key| (key == "SCADGEN_VERBOSE").then(|| raw.to_string()))
                .unwrap();
            assert_eq!(config.verbose, expected, "SCADGEN_VERBOSE={}", raw);
        }
    }

    #[test]
    fn test_invalid_verbose_flag() {
        let err = GeneratorConfig::default()
            .with_env_overrides(|key| (key == "SCADGEN_VERBOSE").then(|| "maybe".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains("SCADGEN_VERBOSE"));
    }

    #[test]
    fn test_save_and_reload() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(CONFIG_FILE);

        let config = GeneratorConfig {
            output_dir: PathBuf::from("models"),
            ..GeneratorConfig::default()
        };
        config.save(&path)?;

        assert_eq!(GeneratorConfig::from_file(&path)?, config);
        Ok(())
    }
}
