//! Configuration loading and management

use crate::config::types::{CustomTemplate, Go, SourceControl};
use crate::constants::{CONFIG_DIR, CONFIG_FILENAMES, TEMPLATES_DIR};
use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration, loaded once per process.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default, rename = "sourcecontrol")]
    pub source_control: SourceControl,
    #[serde(default)]
    pub go: Go,
    /// Searched in declaration order; the first matching name wins.
    #[serde(default)]
    pub custom_templates: Vec<CustomTemplate>,
    /// Root of the built-in templates, always `<config dir>/templates`.
    #[serde(skip)]
    pub templates_path: PathBuf,
}

impl Config {
    /// Creates an empty configuration whose built-in templates live in `templates_path`.
    pub fn new<P: Into<PathBuf>>(templates_path: P) -> Self {
        Self { templates_path: templates_path.into(), ..Default::default() }
    }

    /// Appends a custom template entry.
    pub fn with_custom_template<S: Into<String>, P: Into<PathBuf>>(
        mut self,
        name: S,
        path: P,
    ) -> Self {
        self.custom_templates.push(CustomTemplate { name: name.into(), path: path.into() });
        self
    }

    /// Returns `$HOME/.config/goproject`.
    pub fn default_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| {
            Error::Other(anyhow::anyhow!("Could not determine home directory"))
        })?;
        Ok(CONFIG_DIR.iter().fold(home, |dir, part| dir.join(part)))
    }

    /// Loads the first configuration file found in `config_dir`.
    ///
    /// The parser is picked by file name: TOML, YAML or JSON.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_dir = config_dir.as_ref();

        for config_file_name in CONFIG_FILENAMES.iter() {
            let config_file_path = config_dir.join(config_file_name);
            if !config_file_path.is_file() {
                continue;
            }

            debug!("Loading configuration from {}", config_file_path.display());
            let content = std::fs::read_to_string(&config_file_path)?;
            let parse_error = |reason: String| Error::ConfigParseError {
                path: config_file_path.clone(),
                reason,
            };
            let mut config: Config = match *config_file_name {
                "config.toml" => {
                    toml::from_str(&content).map_err(|e| parse_error(e.to_string()))?
                }
                "config.yaml" | "config.yml" => {
                    serde_yaml::from_str(&content).map_err(|e| parse_error(e.to_string()))?
                }
                "config.json" => {
                    serde_json::from_str(&content).map_err(|e| parse_error(e.to_string()))?
                }
                _ => unreachable!(),
            };
            config.templates_path = config_dir.join(TEMPLATES_DIR);

            return Ok(config);
        }

        Err(Error::ConfigNotFound {
            config_dir: config_dir.display().to_string(),
            config_files: CONFIG_FILENAMES.join(", "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn loads_toml_config() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("config.toml"),
            r#"
[sourcecontrol]
uri = "https://gitlab.com"

[go]
vendor = true

[[custom_templates]]
name = "service"
path = "/opt/templates/service"

[[custom_templates]]
name = "lib"
path = "/opt/templates/lib"
"#,
        )
        .unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.source_control.uri, "https://gitlab.com");
        assert!(config.go.vendor);
        assert_eq!(config.custom_templates.len(), 2);
        assert_eq!(config.custom_templates[0].name, "service");
        assert_eq!(config.custom_templates[1].path, PathBuf::from("/opt/templates/lib"));
        assert_eq!(config.templates_path, dir.path().join("templates"));
    }

    #[test]
    fn loads_yaml_config_with_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("config.yml"),
            "custom_templates:\n  - name: web\n    path: /tpl/web\n",
        )
        .unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.source_control.uri, "https://github.com");
        assert!(!config.go.vendor);
        assert_eq!(config.custom_templates[0].name, "web");
    }

    #[test]
    fn loads_json_config() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.json"), r#"{"go": {"vendor": true}}"#).unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert!(config.go.vendor);
        assert!(config.custom_templates.is_empty());
    }

    #[test]
    fn toml_takes_precedence_over_json() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.toml"), "[go]\nvendor = false\n").unwrap();
        fs::write(dir.path().join("config.json"), r#"{"go": {"vendor": true}}"#).unwrap();

        assert!(!Config::load(dir.path()).unwrap().go.vendor);
    }

    #[test]
    fn missing_config_lists_tried_files() {
        let dir = TempDir::new().unwrap();
        let err = Config::load(dir.path()).unwrap_err();
        match err {
            Error::ConfigNotFound { config_files, .. } => {
                assert_eq!(config_files, "config.toml, config.yaml, config.yml, config.json");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_config_reports_path() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.toml"), "[go\nvendor = ").unwrap();

        let err = Config::load(dir.path()).unwrap_err();
        match err {
            Error::ConfigParseError { path, .. } => {
                assert_eq!(path, dir.path().join("config.toml"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn builder_keeps_declaration_order() {
        let config = Config::new("/tpl")
            .with_custom_template("a", "/a")
            .with_custom_template("b", "/b");
        let names: Vec<_> = config.custom_templates.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
        assert_eq!(config.templates_path, PathBuf::from("/tpl"));
    }
}
