//! Identity resolution integration tests
//!
//! Tests the seam between a session backend and the access engine: a
//! resolved context drives decisions, a backend failure is an error, and an
//! absent permission document is not.

#[cfg(test)]
mod tests {
    use crate::common::{ConfigFactory, DocumentFactory};
    use async_trait::async_trait;
    use mockall::mock;
    use painel_access::{
        AccessEngine, Decision, FixedIdentityProvider, Identity, IdentityProvider, PainelError,
        PermissionDocument, Result, Role, ViewContext,
    };

    mock! {
        pub SessionBackend {}

        #[async_trait]
        impl IdentityProvider for SessionBackend {
            async fn resolve_view(&self) -> Result<ViewContext>;
        }
    }

    fn engine() -> AccessEngine {
        AccessEngine::new(&ConfigFactory::default_panel()).unwrap()
    }

    /// Test that a context resolved by a backend drives the engine
    #[tokio::test]
    async fn test_resolved_context_drives_engine() {
        let mut backend = MockSessionBackend::new();
        backend.expect_resolve_view().returning(|| {
            Ok(ViewContext::new(
                Identity::new("ana@construtora.test"),
                Role::Employee,
                DocumentFactory::view_only(&["obras"]),
            ))
        });

        let engine = engine();
        let context = backend.resolve_view().await.unwrap();

        assert_eq!(engine.check_area("/obras", &context), Decision::Allow);
        assert_eq!(
            engine.check_area("/clientes", &context),
            Decision::RedirectTo("/obras".to_string())
        );
    }

    /// Test that a backend failure surfaces as an error, unlike a denial
    #[tokio::test]
    async fn test_backend_failure_is_an_error() {
        let mut backend = MockSessionBackend::new();
        backend
            .expect_resolve_view()
            .returning(|| Err(PainelError::identity("session expired")));

        let result = backend.resolve_view().await;

        assert!(matches!(result, Err(PainelError::Identity(_))));
    }

    /// Test that a caller without a stored document is denied, not erred
    #[tokio::test]
    async fn test_absent_document_denies_without_error() {
        let provider = FixedIdentityProvider::new(
            Identity::new("novo@construtora.test"),
            Role::Employee,
        );

        let engine = engine();
        let context = provider.resolve_view().await.unwrap();

        assert!(context.document.is_empty());
        assert_eq!(
            engine.check_area("/obras", &context),
            Decision::RedirectToDenied
        );
    }

    /// Test that an admin resolved with an empty document opens everything
    #[tokio::test]
    async fn test_admin_context_from_provider() {
        let provider = FixedIdentityProvider::new(
            Identity::new("dono@construtora.test").with_display_name("Dono"),
            Role::Admin,
        );

        let engine = engine();
        let context = provider.resolve_view().await.unwrap();

        assert!(context.is_admin());
        assert_eq!(engine.check_area("/financeira", &context), Decision::Allow);
        assert_eq!(engine.check_area("/admin", &context), Decision::Allow);
    }

    /// Test that a stored document round-trips through the provider
    #[tokio::test]
    async fn test_stored_document_round_trip() {
        let stored = PermissionDocument::from_json(
            r#"{"clientes": {"view": true, "edit": false}}"#,
        )
        .unwrap();
        let provider = FixedIdentityProvider::new(
            Identity::new("ana@construtora.test"),
            Role::Employee,
        )
        .with_document(stored.clone());

        let context = provider.resolve_view().await.unwrap();

        assert_eq!(context.document, stored);
        assert!(context.document.allows("clientes", "view"));
        assert!(!context.document.allows("clientes", "edit"));
    }
}
