use std::{env, path::PathBuf};

use thiserror::Error;

use super::schema::Settings;

/// Settings that load fine but cannot be used to open a library.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("library.media_extensions must list at least one extension")]
    NoMediaExtensions,

    #[error("library.playlist_extensions repeats media extension {0:?}")]
    OverlappingExtension(String),

    #[error("library.max_depth must be >= 1")]
    ZeroMaxDepth,
}

/// Configuration loading helpers.
///
/// `Settings::load` reads an optional config file and then environment
/// variables (prefix `MEDIALIB__`), falling back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("MEDIALIB")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let lib = &self.library;
        if lib.media_extensions.is_empty() {
            return Err(SettingsError::NoMediaExtensions);
        }
        if let Some(ext) = lib
            .playlist_extensions
            .iter()
            .find(|e| lib.media_extensions.contains(*e))
        {
            return Err(SettingsError::OverlappingExtension(ext.clone()));
        }
        if lib.max_depth == 0 {
            return Err(SettingsError::ZeroMaxDepth);
        }
        Ok(())
    }
}

/// Resolve the config path from `MEDIALIB_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("MEDIALIB_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/medialib/config.toml`
/// or `~/.config/medialib/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("medialib").join("config.toml"))
}
