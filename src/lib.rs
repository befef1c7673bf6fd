//! # Painel Access
//!
//! Permission-based authorization and navigation gating for a construction
//! company management panel. Decides, per caller, which areas open, where a
//! denied caller is sent instead, and which sidebar entries are visible.
//!
//! ## Features
//!
//! - **Fail closed**: a missing module, action, or document always denies
//! - **Denial is not an error**: every denial resolves to a redirect target
//! - **Single source of truth**: one area declaration feeds gates, fallback
//!   registry, and navigation, so they can never drift apart
//! - **Admin bypass**: the admin role passes every gate before any predicate
//!   is evaluated
//! - **Deterministic**: pure decisions over a role, a document snapshot, and
//!   static configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use painel_access::{
//!     AccessEngine, Config, Decision, Identity, PermissionDocument, Role, ViewContext,
//! };
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let engine = AccessEngine::new(config.access())?;
//!
//!     let caller = ViewContext::new(
//!         Identity::new("ana@construtora.com"),
//!         Role::Employee,
//!         PermissionDocument::from_json(r#"{"obras": {"view": true}}"#)?,
//!     );
//!
//!     match engine.check_area("/obras", &caller) {
//!         Decision::Allow => println!("area is open"),
//!         decision => println!("redirect to {:?}", engine.resolve_target(&decision)),
//!     }
//!
//!     for entry in engine.visible_navigation(&caller) {
//!         println!("{} -> {}", entry.label, entry.area);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use painel_access::{AccessEngine, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/access.yaml").await?;
//!     let engine = AccessEngine::new(config.access())?;
//!     println!("{} areas behind permission gates", engine.registry().len());
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

// Public module exports
pub mod access;
pub mod config;
pub mod identity;
pub mod utils;

// Re-export main types
pub use config::{AccessConfig, AreaConfig, Config, NavConfig};
pub use utils::error::{PainelError, Result};

// Export the access decision surface
pub use access::{
    AccessEngine, AccessEvaluator, AreaGate, Decision, ModulePermissions, NavigationCatalog,
    NavigationEntry, PermissionDocument, PermissionGate, PolicyEntry, PolicyRegistry, Requirement,
    Role, RoleGate,
};

// Export the identity seam
pub use identity::{FixedIdentityProvider, Identity, IdentityProvider, ViewContext};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Crate build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: option_env!("BUILD_TIME").unwrap_or("unknown"),
            git_hash: option_env!("GIT_HASH").unwrap_or("unknown"),
            rust_version: option_env!("RUST_VERSION").unwrap_or("unknown"),
        }
    }
}

/// Build information captured at compile time
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
