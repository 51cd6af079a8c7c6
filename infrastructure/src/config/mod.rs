//! Configuration file loading for askdesk
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `ASKDESK_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./askdesk.toml` or `./.askdesk.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/askdesk/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileAcceptanceConfig, FileConfig, FileReplConfig, FileServerConfig,
    FileUiConfig,
};
pub use loader::ConfigLoader;
