//! Access flow integration tests
//!
//! Full caller journeys through the engine: landing, navigation, area
//! checks, and redirect resolution working together over one configuration.

#[cfg(test)]
mod tests {
    use crate::common::{ConfigFactory, ContextFactory, DocumentFactory};
    use crate::{assert_err, assert_ok};
    use painel_access::{AccessEngine, Decision};
    use std::sync::Arc;

    fn engine() -> AccessEngine {
        assert_ok!(AccessEngine::new(&ConfigFactory::default_panel()))
    }

    // ==================== Employee Journeys ====================

    /// Test a full session for an employee limited to two modules
    #[test]
    fn test_employee_session_journey() {
        let engine = engine();
        let caller = ContextFactory::employee(DocumentFactory::view_only(&["clientes", "obras"]));

        // Landing goes to the first permitted area in declaration order
        assert_eq!(engine.landing_area(&caller), Some("/clientes"));

        // The sidebar shows exactly the permitted areas, in catalog order
        let areas: Vec<&str> = engine
            .visible_navigation(&caller)
            .iter()
            .map(|entry| entry.area.as_str())
            .collect();
        assert_eq!(areas, vec!["/clientes", "/obras"]);

        // Permitted areas open
        assert_eq!(engine.check_area("/clientes", &caller), Decision::Allow);
        assert_eq!(engine.check_area("/obras", &caller), Decision::Allow);

        // A forbidden area redirects to the first permitted one
        let decision = engine.check_area("/financeira", &caller);
        assert_eq!(decision, Decision::RedirectTo("/clientes".to_string()));

        // The redirect target itself opens, so following it terminates
        let target = engine.resolve_target(&decision).unwrap();
        assert_eq!(engine.check_area(target, &caller), Decision::Allow);
    }

    /// Test the journey of an employee with nothing granted
    #[test]
    fn test_employee_without_permissions_lands_on_denied() {
        let engine = engine();
        let caller = ContextFactory::employee_without_permissions();

        assert_eq!(engine.landing_area(&caller), None);
        assert!(engine.visible_navigation(&caller).is_empty());

        let decision = engine.check_area("/dashboard", &caller);
        assert_eq!(decision, Decision::RedirectToDenied);

        // The denial destination is terminal: it opens unconditionally
        let target = engine.resolve_target(&decision).unwrap();
        assert_eq!(target, "/acesso-negado");
        assert_eq!(engine.check_area(target, &caller), Decision::Allow);
    }

    /// Test that every redirect a caller can receive resolves to a concrete
    /// path that opens for them
    #[test]
    fn test_redirects_always_terminate() {
        let engine = engine();
        let caller = ContextFactory::employee(DocumentFactory::view_only(&["logs"]));

        for path in ["/dashboard", "/clientes", "/obras", "/financeira", "/admin"] {
            let decision = engine.check_area(path, &caller);
            if decision.is_allow() {
                continue;
            }
            let target = engine.resolve_target(&decision).unwrap();
            assert_eq!(
                engine.check_area(target, &caller),
                Decision::Allow,
                "redirect from {} to {} must open",
                path,
                target
            );
        }
    }

    // ==================== Admin Journeys ====================

    /// Test that an admin session opens everything with an empty document
    #[test]
    fn test_admin_session_journey() {
        let engine = engine();
        let caller = ContextFactory::admin();

        assert_eq!(engine.landing_area(&caller), Some("/dashboard"));
        assert_eq!(
            engine.visible_navigation(&caller).len(),
            engine.catalog().len()
        );

        for path in [
            "/dashboard",
            "/clientes",
            "/obras",
            "/financeira",
            "/logs",
            "/admin",
        ] {
            assert_eq!(engine.check_area(path, &caller), Decision::Allow);
        }
    }

    // ==================== Permission Changes ====================

    /// Test that revoking one module removes exactly that sidebar entry
    #[test]
    fn test_revoking_module_removes_exactly_one_entry() {
        let engine = engine();

        let before = ContextFactory::employee(DocumentFactory::view_only(&[
            "clientes", "obras", "financeira",
        ]));
        let after = ContextFactory::employee(DocumentFactory::view_only(&["clientes", "financeira"]));

        let visible_before: Vec<String> = engine
            .visible_navigation(&before)
            .iter()
            .map(|entry| entry.area.clone())
            .collect();
        let visible_after: Vec<String> = engine
            .visible_navigation(&after)
            .iter()
            .map(|entry| entry.area.clone())
            .collect();

        assert_eq!(visible_before, vec!["/clientes", "/obras", "/financeira"]);
        assert_eq!(visible_after, vec!["/clientes", "/financeira"]);
    }

    /// Test that an explicit revocation behaves like an absent grant
    #[test]
    fn test_explicit_revocation_equals_absence() {
        let engine = engine();

        let revoked = ContextFactory::employee(DocumentFactory::with_revoked_view("obras"));
        let absent = ContextFactory::employee_without_permissions();

        assert_eq!(
            engine.check_area("/obras", &revoked),
            engine.check_area("/obras", &absent)
        );
    }

    // ==================== Concurrency ====================

    /// Test that a shared engine decides identically across tasks
    #[tokio::test]
    async fn test_shared_engine_across_tasks() {
        let engine = Arc::new(engine());
        let caller = ContextFactory::employee(DocumentFactory::view_only(&["obras"]));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let engine = Arc::clone(&engine);
            let caller = caller.clone();
            handles.push(tokio::spawn(async move {
                engine.check_area("/financeira", &caller)
            }));
        }

        for handle in handles {
            let decision = handle.await.unwrap();
            assert_eq!(decision, Decision::RedirectTo("/obras".to_string()));
        }
    }

    // ==================== Degenerate Configurations ====================

    /// Test that an engine without declared areas still fails closed
    #[test]
    fn test_engine_with_no_areas_fails_closed() {
        let engine = assert_ok!(AccessEngine::new(&ConfigFactory::minimal(&[])));
        let caller = ContextFactory::employee(DocumentFactory::view_only(&["obras"]));

        // The view convention still applies to the requested path
        assert_eq!(engine.check_area("/obras", &caller), Decision::Allow);
        assert_eq!(
            engine.check_area("/financeira", &caller),
            Decision::RedirectToDenied
        );
        assert!(engine.visible_navigation(&caller).is_empty());
    }

    /// Test that a configuration gating the denial destination is rejected
    #[test]
    fn test_engine_rejects_gated_denied_area() {
        let mut config = ConfigFactory::minimal(&["/obras"]);
        config.denied_area = "/obras".to_string();

        let _ = assert_err!(AccessEngine::new(&config));
    }
}
