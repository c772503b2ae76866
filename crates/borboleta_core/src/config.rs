//! Layered configuration.
//!
//! Sources, later overriding earlier:
//! 1. Bundled defaults (`borboleta.toml` shipped with the crate)
//! 2. `~/.config/borboleta/borboleta.toml`
//! 3. `./borboleta.toml`
//! 4. `BORBOLETA_*` environment variables, `__` separating sections
//!    (`BORBOLETA_GEMINI__MODEL=gemini-2.5-pro`)

use borboleta_error::{BorboletaResult, ConfigError};
use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Model used when neither configuration nor command line names one.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const BUNDLED_CONFIG: &str = include_str!("../../../borboleta.toml");

/// Gemini connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(default)]
pub struct GeminiConfig {
    /// Model identifier
    model: String,
    /// Sampling temperature
    #[getter(copy)]
    temperature: f32,
    /// Output token cap; the API default applies when absent
    #[getter(copy)]
    max_output_tokens: Option<u32>,
    /// Base URL of the REST API, without a trailing slash
    api_base: String,
    /// Whole-request timeout
    #[getter(copy)]
    timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.9,
            max_output_tokens: None,
            api_base: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            timeout_secs: 60,
        }
    }
}

impl GeminiConfig {
    /// Same settings with a different model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Same settings pointed at another API base (used by tests and proxies).
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }
}

/// Story generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(default)]
pub struct StoryConfig {
    /// Choices every non-ending node must offer
    #[getter(copy)]
    choices_per_node: usize,
    /// Characters of each past scene quoted in the advance prompt
    #[getter(copy)]
    history_excerpt_chars: usize,
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self {
            choices_per_node: 3,
            history_excerpt_chars: 50,
        }
    }
}

/// Terminal interface settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(default)]
pub struct TuiConfig {
    /// Milliseconds between UI ticks
    #[getter(copy)]
    tick_rate_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self { tick_rate_ms: 250 }
    }
}

/// Where the visit counter and log file live.
#[derive(
    Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, derive_getters::Getters,
)]
#[serde(default)]
pub struct StorageConfig {
    /// Explicit data directory
    data_dir: Option<PathBuf>,
}

impl StorageConfig {
    /// Configured directory, else the platform data directory, else `./.borboleta`.
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .or_else(|| dirs::data_dir().map(|dir| dir.join("borboleta")))
            .unwrap_or_else(|| PathBuf::from(".borboleta"))
    }
}

/// Complete Borboleta configuration.
///
/// # Examples
///
/// ```
/// use borboleta_core::BorboletaConfig;
///
/// let config = BorboletaConfig::default();
/// assert_eq!(config.gemini().model(), "gemini-2.5-flash");
/// assert_eq!(config.story().choices_per_node(), 3);
/// ```
#[derive(
    Debug, Clone, PartialEq, Default, Serialize, Deserialize, derive_getters::Getters,
)]
#[serde(default)]
pub struct BorboletaConfig {
    /// Gemini connection
    gemini: GeminiConfig,
    /// Story generation
    story: StoryConfig,
    /// Terminal interface
    tui: TuiConfig,
    /// Data directory
    storage: StorageConfig,
}

impl BorboletaConfig {
    /// Load configuration from a single file.
    ///
    /// Keys the file omits keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> BorboletaResult<Self> {
        debug!("Loading configuration from file");

        let builder = Config::builder().add_source(File::from(path.as_ref()));
        Self::finish(builder)
    }

    /// Load the layered configuration (bundled, home, current dir, environment).
    ///
    /// # Errors
    ///
    /// Returns an error if any present source is invalid.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use borboleta_core::BorboletaConfig;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = BorboletaConfig::load()?;
    /// println!("model: {}", config.gemini().model());
    /// # Ok(())
    /// # }
    /// ```
    #[instrument]
    pub fn load() -> BorboletaResult<Self> {
        Self::layered(None)
    }

    fn layered(env: Option<config::Map<String, String>>) -> BorboletaResult<Self> {
        debug!("Loading configuration with precedence: env > current dir > home dir > bundled");

        let mut builder =
            Config::builder().add_source(File::from_str(BUNDLED_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/borboleta/borboleta.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("borboleta").required(false))
            .add_source(
                Environment::with_prefix("BORBOLETA")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            );

        Self::finish(builder)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> BorboletaResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no session could run with.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the offending key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.story.choices_per_node == 0 {
            return Err(ConfigError::new("story.choices_per_node must be at least 1"));
        }
        if !(0.0..=2.0).contains(&self.gemini.temperature) {
            return Err(ConfigError::new(format!(
                "gemini.temperature must be within 0.0..=2.0, got {}",
                self.gemini.temperature
            )));
        }
        if self.gemini.model.trim().is_empty() {
            return Err(ConfigError::new("gemini.model must not be empty"));
        }
        if self.tui.tick_rate_ms == 0 {
            return Err(ConfigError::new("tui.tick_rate_ms must be positive"));
        }
        Ok(())
    }

    /// Same configuration with a different Gemini model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.gemini = self.gemini.with_model(model);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_defaults_match_code_defaults() {
        let config = BorboletaConfig::layered(Some(config::Map::new())).unwrap();
        assert_eq!(config.gemini().model(), DEFAULT_MODEL);
        assert_eq!(config.story(), &StoryConfig::default());
        assert_eq!(config.tui().tick_rate_ms(), 250);
    }

    #[test]
    fn test_environment_overrides_nested_keys() {
        let mut env = config::Map::new();
        env.insert(
            "BORBOLETA_GEMINI__MODEL".to_string(),
            "gemini-2.5-pro".to_string(),
        );
        env.insert(
            "BORBOLETA_STORY__HISTORY_EXCERPT_CHARS".to_string(),
            "80".to_string(),
        );
        let config = BorboletaConfig::layered(Some(env)).unwrap();
        assert_eq!(config.gemini().model(), "gemini-2.5-pro");
        assert_eq!(config.story().history_excerpt_chars(), 80);
        assert_eq!(config.story().choices_per_node(), 3);
    }

    #[test]
    fn test_zero_choices_rejected() {
        let mut env = config::Map::new();
        env.insert(
            "BORBOLETA_STORY__CHOICES_PER_NODE".to_string(),
            "0".to_string(),
        );
        assert!(BorboletaConfig::layered(Some(env)).is_err());
    }
}
