use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::sidebar::SidebarGeometry;

/// Behaviour switches for the navigation shell, parsed from the
/// `[features]` table of `config.toml`.
///
/// Every flag defaults to enabled so an empty config file yields the full
/// sidebar behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlags {
    #[serde(default = "enabled")]
    pub persist_pin: bool,
    #[serde(default = "enabled")]
    pub outside_click_collapse: bool,
    #[serde(default = "enabled")]
    pub hover_expand: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            persist_pin: true,
            outside_click_collapse: true,
            hover_expand: true,
        }
    }
}

fn enabled() -> bool {
    true
}

/// The `[sidebar]` table of `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarSettings {
    /// Prefix for durable storage keys, e.g. `usacoguide:sidebar:pinned`.
    #[serde(default = "default_namespace")]
    pub storage_namespace: String,
    #[serde(default = "default_collapsed_width")]
    pub collapsed_width_px: u32,
    #[serde(default = "default_expanded_width")]
    pub expanded_width_px: u32,
    #[serde(default = "default_toggle_size")]
    pub toggle_size_px: u32,
}

impl Default for SidebarSettings {
    fn default() -> Self {
        Self {
            storage_namespace: default_namespace(),
            collapsed_width_px: default_collapsed_width(),
            expanded_width_px: default_expanded_width(),
            toggle_size_px: default_toggle_size(),
        }
    }
}

impl SidebarSettings {
    pub fn geometry(&self) -> SidebarGeometry {
        SidebarGeometry {
            collapsed_width_px: self.collapsed_width_px,
            expanded_width_px: self.expanded_width_px,
            toggle_size_px: self.toggle_size_px,
        }
    }
}

fn default_namespace() -> String {
    crate::preference::DEFAULT_NAMESPACE.to_string()
}

fn default_collapsed_width() -> u32 {
    SidebarGeometry::DEFAULT.collapsed_width_px
}

fn default_expanded_width() -> u32 {
    SidebarGeometry::DEFAULT.expanded_width_px
}

fn default_toggle_size() -> u32 {
    SidebarGeometry::DEFAULT.toggle_size_px
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub sidebar: SidebarSettings,
}

impl AppConfig {
    /// Parse and validate a `config.toml` document.
    pub fn from_toml_str(contents: &str) -> Result<Self, AppError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a config document, falling back to defaults on any error.
    pub fn from_toml_str_or_default(contents: &str) -> Self {
        match Self::from_toml_str(contents) {
            Ok(config) => {
                tracing::debug!(features = ?config.features, "loaded site config");
                config
            }
            Err(err) => {
                tracing::warn!(%err, "invalid site config, using defaults");
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), AppError> {
        let s = &self.sidebar;
        if s.storage_namespace.trim().is_empty() {
            return Err(AppError::invalid_config(
                "sidebar.storage_namespace must not be empty",
            ));
        }
        if s.collapsed_width_px == 0 || s.collapsed_width_px >= s.expanded_width_px {
            return Err(AppError::invalid_config(
                "sidebar.collapsed_width_px must be positive and narrower than expanded_width_px",
            ));
        }
        if s.toggle_size_px == 0 || s.toggle_size_px / 2 > s.collapsed_width_px {
            return Err(AppError::invalid_config(
                "sidebar.toggle_size_px must straddle the collapsed sidebar edge",
            ));
        }
        Ok(())
    }
}
