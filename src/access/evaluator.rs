//! Access evaluation
//!
//! Decides whether the current view may proceed and, if not, where to send
//! the caller instead. Evaluation is total, pure and deterministic: the same
//! requirement and document always produce the same decision, no state is
//! touched, and performing the redirect is the caller's job.

use crate::access::document::{PermissionDocument, Requirement};
use crate::access::registry::PolicyRegistry;
use std::sync::Arc;
use tracing::debug;

/// Outcome of evaluating one area entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// The view may proceed
    Allow,
    /// Denied here; the caller is entitled to this area instead
    RedirectTo(String),
    /// Denied everywhere; send the caller to the denial destination
    RedirectToDenied,
}

impl Decision {
    /// Whether the view may proceed
    pub fn is_allow(&self) -> bool {
        matches!(self, Decision::Allow)
    }

    /// The area the caller should be sent to, if any.
    ///
    /// `RedirectToDenied` resolves against the registry's configured denial
    /// destination; `Allow` has no target.
    pub fn target<'a>(&'a self, registry: &'a PolicyRegistry) -> Option<&'a str> {
        match self {
            Decision::Allow => None,
            Decision::RedirectTo(area) => Some(area),
            Decision::RedirectToDenied => Some(registry.denied_area()),
        }
    }
}

/// Evaluates area requirements against permission documents.
///
/// The evaluator is role-agnostic: the admin bypass belongs to the gates, so
/// predicates can be exercised here without any role plumbing.
#[derive(Debug, Clone)]
pub struct AccessEvaluator {
    registry: Arc<PolicyRegistry>,
}

impl AccessEvaluator {
    /// Create an evaluator over a shared registry
    pub fn new(registry: Arc<PolicyRegistry>) -> Self {
        Self { registry }
    }

    /// The registry this evaluator scans
    pub fn registry(&self) -> &PolicyRegistry {
        &self.registry
    }

    /// Evaluate a required capability against a document.
    ///
    /// 1. Requirement satisfied → [`Decision::Allow`].
    /// 2. Otherwise the first registry entry, in declared order, whose
    ///    requirement the document satisfies → [`Decision::RedirectTo`].
    /// 3. No entry matches → [`Decision::RedirectToDenied`].
    pub fn evaluate(&self, required: &Requirement, document: &PermissionDocument) -> Decision {
        if required.satisfied_by(document) {
            return Decision::Allow;
        }

        match self.registry.first_permitted(document) {
            Some(entry) => {
                debug!(
                    required = %required,
                    fallback = %entry.area,
                    "Capability denied; redirecting to first permitted area"
                );
                Decision::RedirectTo(entry.area.clone())
            }
            None => {
                debug!(required = %required, "Capability denied; no permitted area remains");
                Decision::RedirectToDenied
            }
        }
    }
}
