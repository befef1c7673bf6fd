//! Area gates
//!
//! A gate is the composition point attached to each protected area. Two
//! variants exist and both run to completion before any area content is
//! produced:
//!
//! - [`RoleGate`]: a hard role partition. Mismatch redirects straight to the
//!   denial destination without consulting the document or the fallback scan.
//! - [`PermissionGate`]: a capability requirement, delegated to the
//!   [`AccessEvaluator`] after the admin bypass.
//!
//! A denial is a redirect decision, not an error surfaced to the caller.

use crate::access::document::{PermissionDocument, Requirement};
use crate::access::evaluator::{AccessEvaluator, Decision};
use crate::access::role::Role;
use tracing::debug;

/// Coarse gate: the area is restricted to exactly one role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleGate {
    required: Role,
}

impl RoleGate {
    /// Gate requiring the given role
    pub fn new(required: Role) -> Self {
        Self { required }
    }

    /// The role this gate requires
    pub fn required(&self) -> Role {
        self.required
    }

    /// Evaluate the gate for a caller role.
    ///
    /// Admin is never redirected, whatever role the gate compares against.
    /// Any other mismatch redirects to the fixed denial destination. This is
    /// a hard partition, not a priority search, so no registry scan runs.
    pub fn evaluate(&self, role: Role) -> Decision {
        if role.is_admin() || role == self.required {
            Decision::Allow
        } else {
            debug!(required = %self.required, caller = %role, "Role gate closed");
            Decision::RedirectToDenied
        }
    }
}

/// Fine gate: the area requires one module/action capability
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionGate {
    requirement: Requirement,
}

impl PermissionGate {
    /// Gate guarded by the given requirement
    pub fn new(requirement: Requirement) -> Self {
        Self { requirement }
    }

    /// The capability this gate requires
    pub fn requirement(&self) -> &Requirement {
        &self.requirement
    }

    /// Evaluate the gate for a caller.
    ///
    /// The admin bypass is checked before any predicate evaluation; only
    /// non-admin callers reach the evaluator.
    pub fn evaluate(
        &self,
        role: Role,
        document: &PermissionDocument,
        evaluator: &AccessEvaluator,
    ) -> Decision {
        if role.is_admin() {
            return Decision::Allow;
        }
        evaluator.evaluate(&self.requirement, document)
    }
}

/// Either gate variant, so call sites compose both enforcement styles the
/// same way instead of inlining ad hoc role checks per area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AreaGate {
    /// Coarse role partition
    Role(RoleGate),
    /// Fine capability requirement
    Permission(PermissionGate),
}

impl AreaGate {
    /// Gate restricted to one role
    pub fn role(required: Role) -> Self {
        AreaGate::Role(RoleGate::new(required))
    }

    /// Gate guarded by a capability requirement
    pub fn permission(requirement: Requirement) -> Self {
        AreaGate::Permission(PermissionGate::new(requirement))
    }

    /// Evaluate whichever variant this gate is
    pub fn evaluate(
        &self,
        role: Role,
        document: &PermissionDocument,
        evaluator: &AccessEvaluator,
    ) -> Decision {
        match self {
            AreaGate::Role(gate) => gate.evaluate(role),
            AreaGate::Permission(gate) => gate.evaluate(role, document, evaluator),
        }
    }

    /// Evaluate nested gates in nesting order, outermost first.
    ///
    /// The first non-allow decision wins and no further gate runs: an outer
    /// denial is the cancellation of everything inside it.
    pub fn evaluate_chain(
        gates: &[AreaGate],
        role: Role,
        document: &PermissionDocument,
        evaluator: &AccessEvaluator,
    ) -> Decision {
        for gate in gates {
            let decision = gate.evaluate(role, document, evaluator);
            if !decision.is_allow() {
                return decision;
            }
        }
        Decision::Allow
    }
}
