//! Permission documents and capability requirements
//!
//! A permission document is the per-identity capability set delivered by the
//! hosted backend as JSON: module key → action key → bool. Both maps are open
//! string sets. Every lookup goes through a total accessor that resolves to an
//! explicit boolean. A missing module or action key reads as denied, never as
//! an error or `None`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Action key granting entry to a module
pub const ACTION_VIEW: &str = "view";
/// Action key for record creation
pub const ACTION_CREATE: &str = "create";
/// Action key for record editing
pub const ACTION_EDIT: &str = "edit";
/// Action key for record deletion
pub const ACTION_DELETE: &str = "delete";

/// Per-module action grants
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModulePermissions(HashMap<String, bool>);

impl ModulePermissions {
    /// Create an empty record (all actions denied)
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style grant of one action
    pub fn grant(mut self, action: impl Into<String>) -> Self {
        self.0.insert(action.into(), true);
        self
    }

    /// Builder-style explicit denial of one action
    pub fn deny(mut self, action: impl Into<String>) -> Self {
        self.0.insert(action.into(), false);
        self
    }

    /// Whether the given action is granted. Missing keys read as denied.
    pub fn allows(&self, action: &str) -> bool {
        self.0.get(action).copied().unwrap_or(false)
    }

    /// Whether the module may be entered at all
    pub fn can_view(&self) -> bool {
        self.allows(ACTION_VIEW)
    }
}

/// The per-identity capability set: module key → action grants
///
/// Produced and owned by the identity collaborator; treated as an immutable
/// value for the duration of one evaluation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionDocument(HashMap<String, ModulePermissions>);

impl PermissionDocument {
    /// The all-denied document. Substituted by the identity collaborator
    /// whenever the real document cannot be fetched.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a document from its backend JSON form
    pub fn from_json(json: &str) -> crate::utils::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Insert or replace one module record
    pub fn insert(&mut self, module: impl Into<String>, permissions: ModulePermissions) {
        self.0.insert(module.into(), permissions);
    }

    /// Builder-style variant of [`insert`](Self::insert)
    pub fn with_module(mut self, module: impl Into<String>, permissions: ModulePermissions) -> Self {
        self.insert(module, permissions);
        self
    }

    /// Total capability lookup. Missing module or action keys read as denied.
    pub fn allows(&self, module: &str, action: &str) -> bool {
        self.0
            .get(module)
            .map(|record| record.allows(action))
            .unwrap_or(false)
    }

    /// Whether the given module may be entered
    pub fn can_view(&self, module: &str) -> bool {
        self.allows(module, ACTION_VIEW)
    }

    /// True when no module holds any grant entry
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Module keys present in the document, for diagnostics
    pub fn modules(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// A capability requirement: the pure predicate deciding whether a permission
/// document grants one module/action pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Requirement {
    /// Module key the requirement applies to
    pub module: String,
    /// Action key that must be granted
    pub action: String,
}

impl Requirement {
    /// Requirement on an explicit module/action pair
    pub fn new(module: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            action: action.into(),
        }
    }

    /// The entry requirement for a module: `view` must be granted
    pub fn view(module: impl Into<String>) -> Self {
        Self::new(module, ACTION_VIEW)
    }

    /// Evaluate the requirement against a document. Pure; no I/O, no mutation.
    pub fn satisfied_by(&self, document: &PermissionDocument) -> bool {
        document.allows(&self.module, &self.action)
    }
}

impl std::fmt::Display for Requirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.module, self.action)
    }
}
