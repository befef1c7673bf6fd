//! Access decision system
//!
//! Everything that decides whether a caller may enter a protected area and
//! which navigation entries they see. Decisions are pure and total: the same
//! role, document and configuration always produce the same outcome, and a
//! denial is a redirect, never an error.

pub mod document;
pub mod evaluator;
pub mod gates;
pub mod navigation;
pub mod registry;
pub mod role;


// Re-export commonly used types
pub use document::{
    ACTION_CREATE, ACTION_DELETE, ACTION_EDIT, ACTION_VIEW, ModulePermissions, PermissionDocument,
    Requirement,
};
pub use evaluator::{AccessEvaluator, Decision};
pub use gates::{AreaGate, PermissionGate, RoleGate};
pub use navigation::{NavigationCatalog, NavigationEntry};
pub use registry::{PolicyEntry, PolicyRegistry, module_key};
pub use role::Role;

use crate::config::AccessConfig;
use crate::identity::ViewContext;
use crate::utils::error::{PainelError, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// One declared area resolved into its gate chain
#[derive(Debug, Clone)]
struct AreaDeclaration {
    /// Area path as declared
    path: String,
    /// Gates in nesting order, outermost first
    gates: Vec<AreaGate>,
}

/// Main access decision system.
///
/// Built once from an [`AccessConfig`]; the single set of area declarations
/// feeds both the fallback registry and the navigation catalog, so the two
/// can never disagree about which areas exist.
#[derive(Debug, Clone)]
pub struct AccessEngine {
    /// Ordered fallback registry over permission-gated areas
    registry: Arc<PolicyRegistry>,
    /// Sidebar catalog derived from the same declarations
    catalog: Arc<NavigationCatalog>,
    /// Pure decision procedure over the registry
    evaluator: AccessEvaluator,
    /// Declared areas in declaration order
    declarations: Arc<Vec<AreaDeclaration>>,
    /// Area path to declaration index
    index: Arc<HashMap<String, usize>>,
}

impl AccessEngine {
    /// Create a new access engine from configuration
    pub fn new(config: &AccessConfig) -> Result<Self> {
        info!("Initializing access engine");

        let mut entries = Vec::new();
        let mut declarations: Vec<AreaDeclaration> = Vec::new();
        let mut index = HashMap::new();
        let mut nav_entries = Vec::new();

        for area in &config.areas {
            if !area.path.starts_with('/') {
                return Err(PainelError::config(format!(
                    "Area path must start with '/': {}",
                    area.path
                )));
            }
            if area.path == config.denied_area {
                return Err(PainelError::config(format!(
                    "Denied area cannot carry a gate: {}",
                    area.path
                )));
            }
            if index.insert(area.path.clone(), declarations.len()).is_some() {
                return Err(PainelError::config(format!(
                    "Duplicate area declaration: {}",
                    area.path
                )));
            }

            // Role-gated areas stay out of the fallback registry: the scan
            // looks for a capability match, and a hard role partition is not
            // a capability.
            let mut gates = Vec::new();
            if area.admin_only {
                gates.push(AreaGate::role(Role::Admin));
                if area.module.is_some() {
                    gates.push(AreaGate::permission(area.requirement()));
                }
            } else {
                let requirement = area.requirement();
                entries.push(PolicyEntry::new(&area.path, requirement.clone()));
                gates.push(AreaGate::permission(requirement));
            }

            if let Some(nav) = &area.nav {
                let position = nav.position.unwrap_or(u32::MAX);
                let entry = NavigationEntry::new(
                    nav.label.clone(),
                    nav.icon.clone(),
                    area.path.clone(),
                    area.module_key(),
                );
                nav_entries.push((position, entry));
            }

            declarations.push(AreaDeclaration {
                path: area.path.clone(),
                gates,
            });
        }

        if declarations.is_empty() {
            warn!("No areas declared, every check will fall back to the view convention");
        }

        let registry = Arc::new(PolicyRegistry::new(entries, config.denied_area.clone())?);
        let evaluator = AccessEvaluator::new(registry.clone());

        // Stable sort keeps declaration order among entries sharing a
        // position, and unpositioned entries trail in declaration order.
        nav_entries.sort_by_key(|(position, _)| *position);
        let catalog = Arc::new(NavigationCatalog::new(
            nav_entries.into_iter().map(|(_, entry)| entry).collect(),
        ));

        info!(
            "Access engine initialized with {} areas and {} navigation entries",
            declarations.len(),
            catalog.len()
        );

        Ok(Self {
            registry,
            catalog,
            evaluator,
            declarations: Arc::new(declarations),
            index: Arc::new(index),
        })
    }

    /// Decide access to an area for a caller.
    ///
    /// The denial destination always allows, by construction, so a redirect
    /// can never loop. A declared area runs its gate chain outermost first.
    /// An undeclared area fails closed behind a view requirement derived
    /// from its path.
    pub fn check_area(&self, path: &str, context: &ViewContext) -> Decision {
        let path = normalize(path);

        if path == self.registry.denied_area() {
            return Decision::Allow;
        }

        match self.index.get(path) {
            Some(&position) => {
                let declaration = &self.declarations[position];
                AreaGate::evaluate_chain(
                    &declaration.gates,
                    context.role,
                    &context.document,
                    &self.evaluator,
                )
            }
            None => {
                debug!("Undeclared area {}, applying view convention", path);
                let gate = PermissionGate::new(Requirement::view(module_key(path)));
                gate.evaluate(context.role, &context.document, &self.evaluator)
            }
        }
    }

    /// Navigation entries visible to the caller, in catalog order
    pub fn visible_navigation(&self, context: &ViewContext) -> Vec<&NavigationEntry> {
        self.catalog.visible_for(context.role, &context.document)
    }

    /// First area the caller may enter, in declaration order.
    ///
    /// Admin lands on the first declared area. An employee lands on the
    /// first registry entry their document satisfies; `None` means the
    /// caller belongs on the denial destination.
    pub fn landing_area(&self, context: &ViewContext) -> Option<&str> {
        if context.role.is_admin() {
            return self.declarations.first().map(|d| d.path.as_str());
        }
        self.registry
            .first_permitted(&context.document)
            .map(|entry| entry.area.as_str())
    }

    /// Concrete redirect destination for a decision, if it has one
    pub fn resolve_target<'a>(&'a self, decision: &'a Decision) -> Option<&'a str> {
        decision.target(&self.registry)
    }

    /// Get the fallback registry
    pub fn registry(&self) -> &PolicyRegistry {
        &self.registry
    }

    /// Get the full navigation catalog
    pub fn catalog(&self) -> &NavigationCatalog {
        &self.catalog
    }

    /// Get the decision procedure
    pub fn evaluator(&self) -> &AccessEvaluator {
        &self.evaluator
    }

    /// Get the denial destination path
    pub fn denied_area(&self) -> &str {
        self.registry.denied_area()
    }
}

/// Strip trailing slashes so `/obras/` and `/obras` name the same area
fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}
