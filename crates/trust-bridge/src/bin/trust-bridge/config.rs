//! Project configuration loaded from `trust-bridge.toml`.

use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILES: &[&str] = &["trust-bridge.toml", ".trust-bridge.toml"];

const DEFAULT_PATTERNS: &[&str] = &["**/*.st", "**/*.ST"];

/// Settings for the bridge commands.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Round-trip check settings.
    pub check: CheckConfig,
    /// Logging settings.
    pub log: LogConfig,
    /// Problems met while loading, reported once logging is up.
    #[serde(skip)]
    pub warnings: Vec<String>,
}

/// `[check]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Glob patterns, relative to the directory being checked.
    pub patterns: Vec<String>,
    /// Glob patterns of paths to leave out.
    pub exclude: Vec<String>,
    /// Worker threads; defaults to the available parallelism.
    pub jobs: Option<usize>,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            patterns: DEFAULT_PATTERNS.iter().map(ToString::to_string).collect(),
            exclude: Vec::new(),
            jobs: None,
        }
    }
}

/// `[log]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default level (`error`, `warn`, `info`, `debug`, `trace`).
    pub level: Option<String>,
}

impl BridgeConfig {
    /// Loads the configuration found in `root`, or the defaults.
    pub fn load(root: &Path) -> Self {
        let Some(path) = find_config_file(root) else {
            return Self::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(contents) => Self::from_contents(Some(&path), &contents),
            Err(err) => Self::with_warning(format!(
                "Failed to read trust-bridge config at {}: {err}",
                path.display()
            )),
        }
    }

    pub fn from_contents(path: Option<&Path>, contents: &str) -> Self {
        let mut config: Self = match toml::from_str(contents) {
            Ok(parsed) => parsed,
            Err(err) => {
                let origin = path.map_or_else(String::new, |p| format!(" at {}", p.display()));
                return Self::with_warning(format!(
                    "Failed to parse trust-bridge config{origin}: {err}"
                ));
            }
        };
        if config.check.jobs == Some(0) {
            config
                .warnings
                .push("check.jobs must be at least 1; using the default".to_string());
            config.check.jobs = None;
        }
        if let Some(level) = config.log.level.as_deref() {
            if level.parse::<tracing::Level>().is_err() {
                config
                    .warnings
                    .push(format!("Unknown log level '{level}'; using 'warn'"));
                config.log.level = None;
            }
        }
        config
    }

    fn with_warning(message: String) -> Self {
        Self {
            warnings: vec![message],
            ..Self::default()
        }
    }
}

pub fn find_config_file(root: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| root.join(name))
        .find(|path| path.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_structured_text_files() {
        let config = BridgeConfig::from_contents(None, "");
        assert_eq!(config.check.patterns, vec!["**/*.st", "**/*.ST"]);
        assert!(config.check.exclude.is_empty());
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn tables_override_defaults() {
        let config = BridgeConfig::from_contents(
            None,
            r#"
[check]
patterns = ["src/**/*.st"]
exclude = ["src/generated/**"]
jobs = 2

[log]
level = "debug"
"#,
        );
        assert_eq!(config.check.patterns, vec!["src/**/*.st"]);
        assert_eq!(config.check.exclude, vec!["src/generated/**"]);
        assert_eq!(config.check.jobs, Some(2));
        assert_eq!(config.log.level.as_deref(), Some("debug"));
    }

    #[test]
    fn invalid_values_fall_back_with_warnings() {
        let config = BridgeConfig::from_contents(None, "[check]\njobs = 0\n[log]\nlevel = \"loud\"\n");
        assert_eq!(config.check.jobs, None);
        assert_eq!(config.log.level, None);
        assert_eq!(config.warnings.len(), 2);

        let broken = BridgeConfig::from_contents(None, "[check\n");
        assert_eq!(broken.check.patterns.len(), 2);
        assert_eq!(broken.warnings.len(), 1);
    }
}
