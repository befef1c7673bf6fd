//! Navigation catalog
//!
//! The sidebar catalog is derived from the same area declarations that feed
//! the policy registry, so an area can never be reachable but invisible, or
//! visible but unreachable, because two hand-maintained lists drifted apart.
//!
//! Visibility for an employee is a pure filter over the full list: an entry
//! survives exactly when the caller may view its module. Filtering preserves
//! the catalog order and never reorders or substitutes entries.

use crate::access::document::PermissionDocument;
use crate::access::role::Role;
use serde::{Deserialize, Serialize};

/// One sidebar item tied to a protected area
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEntry {
    /// Display label shown in the sidebar
    pub label: String,
    /// Icon identifier for the frontend
    pub icon: String,
    /// Area path this entry links to
    pub area: String,
    /// Module key checked for visibility
    pub module: String,
}

impl NavigationEntry {
    pub fn new(
        label: impl Into<String>,
        icon: impl Into<String>,
        area: impl Into<String>,
        module: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            icon: icon.into(),
            area: area.into(),
            module: module.into(),
        }
    }
}

/// The full ordered list of sidebar entries.
///
/// Built once at startup from the area declarations; the per-caller filter
/// in [`visible_for`](NavigationCatalog::visible_for) never mutates it.
#[derive(Debug, Clone, Default)]
pub struct NavigationCatalog {
    entries: Vec<NavigationEntry>,
}

impl NavigationCatalog {
    /// Catalog with the given entries in final display order
    pub fn new(entries: Vec<NavigationEntry>) -> Self {
        Self { entries }
    }

    /// All entries, unfiltered
    pub fn entries(&self) -> &[NavigationEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries visible to the given caller.
    ///
    /// Admin sees the full catalog without consulting the document. Everyone
    /// else sees the stable subset whose module the document allows viewing;
    /// a missing module or action filters the entry out rather than erroring.
    pub fn visible_for(&self, role: Role, document: &PermissionDocument) -> Vec<&NavigationEntry> {
        if role.is_admin() {
            return self.entries.iter().collect();
        }
        self.entries
            .iter()
            .filter(|entry| document.can_view(&entry.module))
            .collect()
    }
}
