//! Sections of the configuration file

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default upstream used when initializing git projects.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SourceControl {
    #[serde(default = "get_default_uri")]
    pub uri: String,
}

/// Go module preferences.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Go {
    #[serde(default)]
    pub vendor: bool,
}

/// A user template location. Checked before the built-in templates.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CustomTemplate {
    pub name: String,
    pub path: PathBuf,
}

impl Default for SourceControl {
    fn default() -> Self {
        Self { uri: get_default_uri() }
    }
}

fn get_default_uri() -> String {
    "https://github.com".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_control_defaults_to_github() {
        assert_eq!(SourceControl::default().uri, "https://github.com");
        let parsed: SourceControl = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, SourceControl::default());
    }

    #[test]
    fn custom_template_requires_name_and_path() {
        let parsed: CustomTemplate =
            serde_json::from_str(r#"{"name": "svc", "path": "/tpl/svc"}"#).unwrap();
        assert_eq!(parsed.name, "svc");
        assert_eq!(parsed.path, PathBuf::from("/tpl/svc"));

        assert!(serde_json::from_str::<CustomTemplate>(r#"{"name": "svc"}"#).is_err());
    }
}
