//! Identity resolution
//!
//! Bridges whatever session backend the host application uses and the access
//! engine. A backend resolves the caller into a [`ViewContext`]: who they
//! are, which role they hold and the permission document snapshot taken at
//! fetch time. Decisions made later in the session evaluate against that
//! snapshot; a changed document applies on the next fetch.
//!
//! A backend failure while resolving identity is an error. A caller who
//! resolves fine but has no stored permission document is not: the document
//! is substituted with an empty one and every check fails closed.

use crate::access::{PermissionDocument, Role};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// An authenticated caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    /// Stable account identifier
    pub id: Uuid,
    /// Email address (unique)
    pub email: String,
    /// Display name
    pub display_name: Option<String>,
}

impl Identity {
    /// Create a new identity with a fresh identifier
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            display_name: None,
        }
    }

    /// Set the display name
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }
}

/// Everything the access engine needs to decide for one caller.
///
/// The document is the snapshot taken when the context was resolved; it is
/// not re-read per decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewContext {
    /// The authenticated caller
    pub identity: Identity,
    /// Role held by the caller
    pub role: Role,
    /// Permission document snapshot
    pub document: PermissionDocument,
    /// When the snapshot was taken
    pub fetched_at: DateTime<Utc>,
}

impl ViewContext {
    /// Create a context with a snapshot taken now
    pub fn new(identity: Identity, role: Role, document: PermissionDocument) -> Self {
        Self {
            identity,
            role,
            document,
            fetched_at: Utc::now(),
        }
    }

    /// Whether the caller holds the admin role
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Session backend seam.
///
/// Implementations are scoped to one caller's session and produce a fresh
/// [`ViewContext`] per call. Only backend failures surface as errors; an
/// absent permission document must come back as an empty one.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolve the current caller into a view context
    async fn resolve_view(&self) -> Result<ViewContext>;
}

/// Provider backed by fixed in-memory data.
///
/// The reference implementation used by tests and demos. It shows the
/// empty-document substitution a real backend must perform when the stored
/// permissions column is null.
#[derive(Debug, Clone)]
pub struct FixedIdentityProvider {
    identity: Identity,
    role: Role,
    document: Option<PermissionDocument>,
}

impl FixedIdentityProvider {
    /// Provider for a caller with no stored document
    pub fn new(identity: Identity, role: Role) -> Self {
        Self {
            identity,
            role,
            document: None,
        }
    }

    /// Attach a stored permission document
    pub fn with_document(mut self, document: PermissionDocument) -> Self {
        self.document = Some(document);
        self
    }
}

#[async_trait]
impl IdentityProvider for FixedIdentityProvider {
    async fn resolve_view(&self) -> Result<ViewContext> {
        let document = match &self.document {
            Some(document) => document.clone(),
            None => {
                debug!(
                    "No permission document stored for {}, substituting empty",
                    self.identity.email
                );
                PermissionDocument::empty()
            }
        };

        Ok(ViewContext::new(
            self.identity.clone(),
            self.role,
            document,
        ))
    }
}
