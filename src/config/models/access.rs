//! Access control configuration

use super::*;
use crate::access::{Requirement, module_key};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Stock area table for the panel
static DEFAULT_AREAS: Lazy<Vec<AreaConfig>> = Lazy::new(|| {
    vec![
        AreaConfig::new("/dashboard").with_nav("Dashboard", "layout-dashboard", None),
        AreaConfig::new("/clientes").with_nav("Clientes", "users", None),
        AreaConfig::new("/obras").with_nav("Obras", "hard-hat", None),
        AreaConfig::new("/financeira").with_nav("Financeiro", "wallet", None),
        AreaConfig::new("/logs").with_nav("Logs", "scroll-text", None),
        AreaConfig {
            admin_only: true,
            ..AreaConfig::new("/admin")
        }
        .with_nav("Administração", "settings", None),
    ]
});

/// Access control configuration.
///
/// One declaration per protected area. The same list feeds the fallback
/// registry and the navigation catalog, so reachability and visibility can
/// never disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessConfig {
    /// Destination for callers with no permitted area
    #[serde(default = "default_denied_area")]
    pub denied_area: String,
    /// Protected areas in declaration order
    #[serde(default)]
    pub areas: Vec<AreaConfig>,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            denied_area: default_denied_area(),
            areas: DEFAULT_AREAS.clone(),
        }
    }
}

#[allow(dead_code)]
impl AccessConfig {
    /// Load access configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        let mut config = Self::default();
        if let Ok(denied_area) = std::env::var("PAINEL_DENIED_AREA") {
            config.denied_area = denied_area;
        }
        Ok(config)
    }

    /// Merge access configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.denied_area != default_denied_area() {
            self.denied_area = other.denied_area;
        }
        if other.areas != *DEFAULT_AREAS {
            self.areas = other.areas;
        }
        self
    }

    /// Validate access configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.denied_area.starts_with('/') {
            return Err(format!(
                "Denied area must start with '/': {}",
                self.denied_area
            ));
        }

        let mut seen = std::collections::HashSet::new();
        for area in &self.areas {
            if !area.path.starts_with('/') {
                return Err(format!("Area path must start with '/': {}", area.path));
            }
            if area.path == self.denied_area {
                return Err(format!(
                    "Denied area cannot be declared as a gated area: {}",
                    area.path
                ));
            }
            if !seen.insert(area.path.as_str()) {
                return Err(format!("Duplicate area declaration: {}", area.path));
            }
            if area.action.is_empty() {
                return Err(format!("Area {} has an empty action", area.path));
            }
            if let Some(nav) = &area.nav {
                if nav.label.is_empty() {
                    return Err(format!("Area {} has an empty navigation label", area.path));
                }
            }
        }

        Ok(())
    }
}

/// One protected area declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaConfig {
    /// Area path, always starting with '/'
    pub path: String,
    /// Module key the gate checks. Derived from the path when omitted.
    #[serde(default)]
    pub module: Option<String>,
    /// Action the gate requires
    #[serde(default = "default_action")]
    pub action: String,
    /// Restrict the area to the admin role instead of a capability
    #[serde(default)]
    pub admin_only: bool,
    /// Sidebar entry, if the area appears in navigation
    #[serde(default)]
    pub nav: Option<NavConfig>,
}

impl AreaConfig {
    /// Declaration for a path with all defaults
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            module: None,
            action: default_action(),
            admin_only: false,
            nav: None,
        }
    }

    /// Set an explicit module key
    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    /// Require a different action than view
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    /// Attach a sidebar entry
    pub fn with_nav(
        mut self,
        label: impl Into<String>,
        icon: impl Into<String>,
        position: Option<u32>,
    ) -> Self {
        self.nav = Some(NavConfig {
            label: label.into(),
            icon: icon.into(),
            position,
        });
        self
    }

    /// Module key this area checks.
    ///
    /// Falls back to the path with its leading slash stripped. Nested paths
    /// should declare the module explicitly.
    pub fn module_key(&self) -> &str {
        match &self.module {
            Some(module) => module,
            None => module_key(&self.path),
        }
    }

    /// The capability requirement this declaration resolves to
    pub fn requirement(&self) -> Requirement {
        Requirement::new(self.module_key(), &self.action)
    }
}

/// Sidebar metadata for an area
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavConfig {
    /// Display label
    pub label: String,
    /// Icon identifier
    #[serde(default = "default_nav_icon")]
    pub icon: String,
    /// Sidebar position, lower first. Unpositioned entries trail in
    /// declaration order.
    #[serde(default)]
    pub position: Option<u32>,
}

/// Warn about configurations that make the panel unusable
pub fn warn_degenerate_config(config: &AccessConfig) {
    if config.areas.is_empty() {
        warn!(
            "No areas declared! Every check falls back to the view convention and the sidebar will be empty."
        );
    } else if config.areas.iter().all(|area| area.nav.is_none()) {
        warn!("No area declares navigation metadata, the sidebar will be empty.");
    }
}
