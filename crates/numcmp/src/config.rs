//! Engine configuration.
//!
//! [`NumcmpConfig`] is fixed when the extension is registered. [`RuntimeSettings`]
//! carries the one setting that may change while the engine runs.
use numcmp_parser::Identifier;
use serde::{Deserialize, Serialize};
use snafu::Snafu;
use std::sync::atomic::{AtomicBool, Ordering};

/// Errors from loading configuration.
#[allow(clippy::module_name_repetitions)]
#[derive(Snafu, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The document is not valid JSON or does not match the configuration schema
    #[snafu(display("invalid numcmp configuration: {error}"))]
    InvalidDocument {
        /// The underlying error
        error: String,
    },
}

/// Result type for configuration loading
#[allow(clippy::module_name_repetitions)]
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Which btree operator families receive the cross-type `=` operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EqualityRegistration {
    /// Both the integer family and the inexact type's family
    #[default]
    AllFamilies,
    /// Only the integer family
    IntegerFamilyOnly,
}

/// Registration-time configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NumcmpConfig {
    /// Name the extension is installed under; owns every registered catalog entry
    pub extension_name: Identifier,
    /// Initial value of the runtime rewrite flag
    pub enable_support_functions: bool,
    /// Where cross-type equality is registered
    pub equality_registration: EqualityRegistration,
}

impl Default for NumcmpConfig {
    fn default() -> Self {
        Self {
            extension_name: default_extension_name(),
            enable_support_functions: true,
            equality_registration: EqualityRegistration::default(),
        }
    }
}

fn default_extension_name() -> Identifier {
    Identifier::try_new("numcmp").unwrap_or_else(|_| unreachable!("valid literal identifier"))
}

impl NumcmpConfig {
    /// Reads a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    /// Fails with [`ConfigError::InvalidDocument`] on malformed input, unknown fields,
    /// or an invalid extension name.
    pub fn from_json(document: &str) -> ConfigResult<Self> {
        serde_json::from_str(document).map_err(|error| ConfigError::InvalidDocument {
            error: error.to_string(),
        })
    }
}

/// Settings read while the engine runs.
#[derive(Debug)]
pub struct RuntimeSettings {
    enable_support_functions: AtomicBool,
}

impl RuntimeSettings {
    /// Settings with the rewrite flag set to `enabled`.
    #[must_use]
    pub fn new(enable_support_functions: bool) -> Self {
        Self {
            enable_support_functions: AtomicBool::new(enable_support_functions),
        }
    }

    /// Settings initialised from `config`.
    #[must_use]
    pub fn from_config(config: &NumcmpConfig) -> Self {
        Self::new(config.enable_support_functions)
    }

    /// Whether the planner hook may rewrite clauses.
    #[must_use]
    pub fn support_functions_enabled(&self) -> bool {
        self.enable_support_functions.load(Ordering::Acquire)
    }

    /// Turns rewriting on or off for plans built from now on.
    pub fn set_support_functions_enabled(&self, enabled: bool) {
        self.enable_support_functions
            .store(enabled, Ordering::Release);
        tracing::debug!(enabled, "numcmp support functions toggled");
    }
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self::from_config(&NumcmpConfig::default())
    }
}
