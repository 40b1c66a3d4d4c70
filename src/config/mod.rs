//! Configuration management for goproject
//!
//! This module contains the configuration system components:
//! - `types`: Sections of the configuration file
//! - `loader`: Configuration file discovery and parsing
//! - `init`: First-run creation of the configuration directory

pub mod init;
pub mod loader;
pub mod types;

// Re-export commonly used types for convenience
pub use init::initialize;
pub use loader::Config;
pub use types::{CustomTemplate, Go, SourceControl};
