//! Fallback policy registry
//!
//! The registry is the ordered list of every permission-gated area, in
//! fallback priority order: when a caller is denied somewhere, the evaluator
//! walks this list and redirects to the first area the caller is entitled to.
//! Declared order is significant and is not the navigation display order.
//!
//! The registry is static configuration built once at startup. It is never
//! derived from a permission document.

use crate::access::document::{PermissionDocument, Requirement};
use crate::utils::error::{PainelError, Result};
use tracing::warn;

/// Derive a module key from an area identifier: the path with any leading
/// separator stripped (`/clientes` → `clientes`).
pub fn module_key(area: &str) -> &str {
    area.trim_start_matches('/')
}

/// One gated area in fallback priority order
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyEntry {
    /// Area identifier in path form, e.g. `/clientes`
    pub area: String,
    /// Capability requirement guarding the area
    pub requirement: Requirement,
}

impl PolicyEntry {
    /// Entry guarded by an explicit requirement
    pub fn new(area: impl Into<String>, requirement: Requirement) -> Self {
        Self {
            area: area.into(),
            requirement,
        }
    }

    /// Entry guarded by the conventional `view` requirement on the area's
    /// derived module key
    pub fn view(area: impl Into<String>) -> Self {
        let area = area.into();
        let requirement = Requirement::view(module_key(&area));
        Self { area, requirement }
    }
}

/// The ordered fallback registry plus the evaluation-exempt denial destination
#[derive(Debug, Clone)]
pub struct PolicyRegistry {
    entries: Vec<PolicyEntry>,
    denied_area: String,
}

impl PolicyRegistry {
    /// Build a registry, enforcing its structural invariants.
    ///
    /// The denial destination must be a stable, non-gated area: a
    /// configuration that lists it among the gated entries is rejected here,
    /// which is what rules out unbounded redirect chains.
    pub fn new(entries: Vec<PolicyEntry>, denied_area: impl Into<String>) -> Result<Self> {
        let denied_area = denied_area.into();

        if denied_area.is_empty() || !denied_area.starts_with('/') {
            return Err(PainelError::config(format!(
                "Denial destination must be a path starting with '/': {:?}",
                denied_area
            )));
        }

        for (index, entry) in entries.iter().enumerate() {
            if entry.area.is_empty() || !entry.area.starts_with('/') {
                return Err(PainelError::config(format!(
                    "Registry entry {} has an invalid area path: {:?}",
                    index, entry.area
                )));
            }
            if entry.area == denied_area {
                return Err(PainelError::config(format!(
                    "Denial destination {:?} must not be gated by the registry",
                    denied_area
                )));
            }
            if entries[..index].iter().any(|earlier| earlier.area == entry.area) {
                return Err(PainelError::config(format!(
                    "Registry declares area {:?} more than once",
                    entry.area
                )));
            }
        }

        if entries.is_empty() {
            warn!("Policy registry is empty; every denied request will land on the denial area");
        }

        Ok(Self {
            entries,
            denied_area,
        })
    }

    /// Entries in declared (fallback priority) order
    pub fn entries(&self) -> &[PolicyEntry] {
        &self.entries
    }

    /// Number of gated areas
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no area is gated
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The evaluation-exempt area denied callers are sent to
    pub fn denied_area(&self) -> &str {
        &self.denied_area
    }

    /// The declared requirement for an area, if it is registered
    pub fn requirement_for(&self, area: &str) -> Option<&Requirement> {
        self.entries
            .iter()
            .find(|entry| entry.area == area)
            .map(|entry| &entry.requirement)
    }

    /// First entry (declared order) whose requirement the document satisfies.
    ///
    /// First declared wins when several entries would match; that tie-break
    /// decides where a partially-permissioned caller lands after a denial.
    pub fn first_permitted(&self, document: &PermissionDocument) -> Option<&PolicyEntry> {
        self.entries
            .iter()
            .find(|entry| entry.requirement.satisfied_by(document))
    }
}
