use serde::Deserialize;

use crate::encoders::algorithms::{DecodeError, pooled, radix};

/// Input size limit used when no configuration layer sets `max_size`.
const DEFAULT_MAX_SIZE: usize = 100 * 1024 * 1024;

/// Which implementation of the codec to run.
///
/// Both engines produce identical output; they differ only in how scratch
/// memory is obtained.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Engine {
    /// Scratch buffers borrowed from the shared pool.
    #[default]
    Pooled,
    /// Fresh big integers for every call.
    Plain,
}

impl Engine {
    pub fn encode(self, data: &[u8]) -> String {
        match self {
            Engine::Pooled => pooled::encode_pooled(data),
            Engine::Plain => radix::encode(data),
        }
    }

    pub fn decode(self, encoded: &str) -> Result<Vec<u8>, DecodeError> {
        match self {
            Engine::Pooled => pooled::decode_pooled(encoded),
            Engine::Plain => radix::decode(encoded),
        }
    }
}

/// Global settings for base58.
///
/// Unset fields fall back to the built-in defaults, so override files only
/// need the keys they change.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Maximum input size in bytes (0 = unlimited)
    #[serde(default)]
    pub max_size: Option<usize>,
    /// Codec engine
    #[serde(default)]
    pub engine: Option<Engine>,
}

impl Settings {
    pub fn max_size(&self) -> usize {
        self.max_size.unwrap_or(DEFAULT_MAX_SIZE)
    }

    pub fn engine(&self) -> Engine {
        self.engine.unwrap_or_default()
    }
}

/// Configuration loaded from TOML.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
}

impl Config {
    /// Parses configuration from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Built-in configuration. Every key is unset, so the [`Settings`]
    /// accessors report the defaults.
    pub fn load_default() -> Self {
        Self::default()
    }

    /// Loads configuration from a custom file path.
    pub fn load_from_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in defaults
    /// 2. `~/.config/base58/config.toml` (user overrides)
    /// 3. `./base58.toml` (project-local overrides)
    ///
    /// Later files override earlier ones key by key. A file that fails to
    /// parse is reported on stderr and skipped.
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default();

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("base58").join("config.toml");
            if user_config_path.exists() {
                match Self::load_from_file(&user_config_path) {
                    Ok(user_config) => config.merge(user_config),
                    Err(e) => {
                        eprintln!(
                            "Warning: Failed to load user config from {:?}: {}",
                            user_config_path, e
                        );
                    }
                }
            }
        }

        let local_config_path = std::path::Path::new("base58.toml");
        if local_config_path.exists() {
            match Self::load_from_file(local_config_path) {
                Ok(local_config) => config.merge(local_config),
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to load local config from {:?}: {}",
                        local_config_path, e
                    );
                }
            }
        }

        Ok(config)
    }

    /// Merges another configuration into this one.
    ///
    /// Keys set in `other` replace the ones in `self`.
    pub fn merge(&mut self, other: Config) {
        if other.settings.max_size.is_some() {
            self.settings.max_size = other.settings.max_size;
        }
        if other.settings.engine.is_some() {
            self.settings.engine = other.settings.engine;
        }
    }
}
