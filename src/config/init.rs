//! First-run setup of the configuration directory.

use crate::constants::TEMPLATES_DIR;
use crate::error::{Error, Result};
use log::{info, warn};
use std::fs;
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"[sourcecontrol]
uri = "https://github.com"

[go]
vendor = false

# Custom templates are checked before the built-in ones.
#
# [[custom_templates]]
# name = "example1"
# path = "/path/to/custom/templates/example1"
"#;

/// Files of the starter `empty` template, relative to its root.
const STARTER_TEMPLATE: &[(&str, &str)] = &[
    ("go.mod-tpl", "module {{.ModuleName}}\n\ngo 1.21\n"),
    (
        "main-tpl.go",
        "package main\n\nimport \"fmt\"\n\nfunc main() {\n\tfmt.Println(\"Hello from {{.Name}}!\")\n}\n",
    ),
    ("gitignore", "/bin/\n*.test\n*.out\n"),
];

const STARTER_TEMPLATE_NAME: &str = "empty";

/// Creates the configuration directory, a default `config.toml` and the
/// built-in templates directory seeded with the `empty` starter template.
///
/// Refuses to touch an existing directory. When any step fails, everything
/// created so far is removed before the error is returned.
pub fn initialize<P: AsRef<Path>>(config_dir: P) -> Result<()> {
    let config_dir = config_dir.as_ref();
    if config_dir.exists() {
        return Err(Error::ConfigDirExists {
            config_dir: config_dir.display().to_string(),
        });
    }

    info!("Initializing goproject in {}", config_dir.display());

    let result = populate(config_dir);
    if result.is_err() {
        if let Err(e) = fs::remove_dir_all(config_dir) {
            warn!("Unable to clean up '{}': {e}", config_dir.display());
        }
    }
    result
}

fn populate(config_dir: &Path) -> Result<()> {
    fs::create_dir_all(config_dir)?;

    let config_file = config_dir.join("config.toml");
    info!("Creating default configuration file {}", config_file.display());
    fs::write(&config_file, DEFAULT_CONFIG)?;

    let starter = config_dir.join(TEMPLATES_DIR).join(STARTER_TEMPLATE_NAME);
    info!("Creating templates directory {}", starter.display());
    fs::create_dir_all(&starter)?;
    for (name, content) in STARTER_TEMPLATE {
        fs::write(starter.join(name), content)?;
    }

    Ok(())
}
