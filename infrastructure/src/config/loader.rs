//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Project-level config file names, checked in order
const PROJECT_CONFIG_FILES: [&str; 2] = ["askdesk.toml", ".askdesk.toml"];

/// Prefix of environment overrides, e.g. `ASKDESK_SERVER__BASE_URL`
const ENV_PREFIX: &str = "ASKDESK_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `ASKDESK_*` environment variables
    /// 2. Explicit config path (if provided; must exist)
    /// 3. Project root: `./askdesk.toml` or `./.askdesk.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/askdesk/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            if !path.exists() {
                return Err(Box::new(figment::Error::from(format!(
                    "config file not found: {}",
                    path.display()
                ))));
            }
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/askdesk/config.toml if set,
    /// otherwise falls back to ~/.config/askdesk/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("askdesk").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");
        println!("  [     ] Environment: {}*", ENV_PREFIX);

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./askdesk.toml or ./.askdesk.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use askdesk_domain::Locale;
    use figment::Jail;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.server.ask_path, "/ask");
        assert!(config.ui.show_progress);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("askdesk"));
    }

    // Loader tests run inside a Jail: it scopes the working directory and
    // ASKDESK_* variables, and serializes every test that uses it.

    #[test]
    fn test_load_explicit_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "custom.toml",
                "[server]\nbase_url = \"http://10.0.0.5:8000\"\n\n[ui]\nlocale = \"ja\"\n",
            )?;

            let config = ConfigLoader::load(Some(Path::new("custom.toml"))).map_err(|e| *e)?;
            assert_eq!(config.server.base_url, "http://10.0.0.5:8000");
            assert_eq!(config.ui.locale, Locale::Ja);
            // Untouched sections keep their defaults
            assert_eq!(config.acceptance.timeout_seconds, 30);
            Ok(())
        });
    }

    #[test]
    fn test_project_file_is_discovered() {
        Jail::expect_with(|jail| {
            jail.create_file(".askdesk.toml", "[server]\nask_path = \"/v1/ask\"\n")?;

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.server.ask_path, "/v1/ask");
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_explicit_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "custom.toml",
                "[server]\nbase_url = \"http://10.0.0.5:8000\"\n\n[ui]\nlocale = \"en\"\n",
            )?;
            jail.set_env("ASKDESK_SERVER__BASE_URL", "http://10.9.9.9:1");
            jail.set_env("ASKDESK_UI__LOCALE", "ja");
            jail.set_env("ASKDESK_ACCEPTANCE__TIMEOUT_SECONDS", "45");

            let config = ConfigLoader::load(Some(Path::new("custom.toml"))).map_err(|e| *e)?;
            assert_eq!(config.server.base_url, "http://10.9.9.9:1");
            assert_eq!(config.ui.locale, Locale::Ja);
            assert_eq!(config.acceptance.timeout_seconds, 45);
            // Sections without an override keep the file or default value
            assert_eq!(config.server.ask_path, "/ask");
            Ok(())
        });
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        Jail::expect_with(|_jail| {
            let err = ConfigLoader::load(Some(Path::new("nope.toml"))).unwrap_err();
            assert!(err.to_string().contains("config file not found"));
            Ok(())
        });
    }

    #[test]
    fn test_load_invalid_value_fails() {
        Jail::expect_with(|jail| {
            jail.create_file("custom.toml", "[acceptance]\ntimeout_seconds = \"soon\"\n")?;
            assert!(ConfigLoader::load(Some(Path::new("custom.toml"))).is_err());
            Ok(())
        });
    }
}
