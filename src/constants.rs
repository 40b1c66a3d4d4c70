//! Constants used throughout the goproject application

/// Configuration file names in order of preference
pub const CONFIG_FILENAMES: &[&str] =
    &["config.toml", "config.yaml", "config.yml", "config.json"];

/// Configuration directory, relative to the user's home directory
pub const CONFIG_DIR: &[&str] = &[".config", "goproject"];

/// Name of the built-in templates directory inside the configuration directory
pub const TEMPLATES_DIR: &str = "templates";

/// Marker flagging a template file for field substitution
pub const PLACEHOLDER_MARKER: &str = "-tpl";

/// Directory holding per-command entry points in generated projects
pub const CMD_DIR: &str = "cmd";

/// Template VCS metadata, never copied into a project
pub const VCS_METADATA_DIR: &str = ".git";

/// Go module file written into every generated project
pub const GO_MOD_FILE: &str = "go.mod";

/// Go version declared by generated module files
pub const GO_VERSION: &str = "1.21";

/// Message of the commit created by the VCS bootstrap
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit";

/// Identity used when git has no user configured
pub mod signature {
    pub const NAME: &str = "goproject";
    pub const EMAIL: &str = "goproject@localhost";
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
