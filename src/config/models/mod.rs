//! Configuration data models
//!
//! This module defines all configuration structures used by the panel.

#![allow(missing_docs)]

pub mod access;

// Re-export all configuration types
pub use access::*;

/// Default denial destination
pub fn default_denied_area() -> String {
    "/acesso-negado".to_string()
}

/// Default action a gate requires
pub fn default_action() -> String {
    "view".to_string()
}

/// Default sidebar icon
pub fn default_nav_icon() -> String {
    "circle".to_string()
}
