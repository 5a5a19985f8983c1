//! Build configuration module.
//!
//! Handles loading and validating `catalog.toml`. Configuration is
//! deliberately small: the game patch being published and the art URL
//! template. Both can also be supplied (or overridden) on the command line,
//! so a config file is optional.
//!
//! ## Configuration Options
//!
//! ```toml
//! # Game patch the art CDN serves. Required.
//! patch = "13.2"
//!
//! # Template for per-size art URLs. All five placeholders are required.
//! image_url = "https://images.gwentapi.com/{patch}/{cardId}/{variationId}/{artId}_{size}.png"
//! ```
//!
//! Unknown keys are rejected to catch typos early.
//!
//! ## Validation
//!
//! Art URLs are produced by plain placeholder substitution, so a template
//! missing a placeholder would silently publish the literal brace text in
//! every URL. [`CatalogConfig::validate`] rejects that up front, along with
//! an empty patch.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Placeholders every art URL template must contain.
pub const URL_PLACEHOLDERS: [&str; 5] =
    ["{patch}", "{cardId}", "{variationId}", "{size}", "{artId}"];

/// Default art URL template, pointing at the public image CDN.
pub const DEFAULT_IMAGE_URL: &str =
    "https://images.gwentapi.com/{patch}/{cardId}/{variationId}/{artId}_{size}.png";

/// Catalog configuration loaded from `catalog.toml`.
///
/// `image_url` has a sensible default; `patch` changes every game release and
/// therefore has none. Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Game patch the art CDN serves, e.g. `"13.2"`.
    pub patch: String,
    /// Art URL template; see [`URL_PLACEHOLDERS`].
    pub image_url: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            patch: String::new(),
            image_url: DEFAULT_IMAGE_URL.to_string(),
        }
    }
}

impl CatalogConfig {
    /// Validate that URL building can succeed with this config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.patch.trim().is_empty() {
            return Err(ConfigError::Validation("patch must not be empty".into()));
        }
        for placeholder in URL_PLACEHOLDERS {
            if !self.image_url.contains(placeholder) {
                return Err(ConfigError::Validation(format!(
                    "image_url is missing the {placeholder} placeholder"
                )));
            }
        }
        Ok(())
    }
}

/// Load a `catalog.toml` as parsed but unvalidated config.
///
/// Callers that accept CLI overrides validate after applying them.
pub fn load_raw_config(path: &Path) -> Result<CatalogConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: CatalogConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Resolve the effective config: file (when given), then CLI overrides,
/// then validation.
pub fn resolve_config(
    path: Option<&Path>,
    patch: Option<String>,
    image_url: Option<String>,
) -> Result<CatalogConfig, ConfigError> {
    let mut config = match path {
        Some(path) => load_raw_config(path)?,
        None => CatalogConfig::default(),
    };
    if let Some(patch) = patch {
        config.patch = patch;
    }
    if let Some(image_url) = image_url {
        config.image_url = image_url;
    }
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `catalog.toml`.
///
/// Used by the `gen-config` CLI command. The file parses as-is but needs a
/// patch filled in before a build will accept it.
pub fn stock_config_toml() -> &'static str {
    r#"# Gwent Catalog Configuration
# ===========================
# Values can also be supplied on the command line with --patch and
# --image-url, which override this file.

# Game patch the art CDN serves, e.g. "13.2". Required.
patch = ""

# Template for per-size art URLs. All five placeholders are required:
# {patch}, {cardId}, {variationId}, {size}, {artId}.
image_url = "https://images.gwentapi.com/{patch}/{cardId}/{variationId}/{artId}_{size}.png"
"#
}
