//! Configuration loading integration tests
//!
//! Tests that configurations read from files produce working engines and
//! that malformed files fail before an engine is ever built.

#[cfg(test)]
mod tests {
    use crate::common::{ContextFactory, DocumentFactory};
    use painel_access::{AccessEngine, Config, Decision};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    /// Test that a file-loaded configuration drives the engine end to end
    #[tokio::test]
    async fn test_engine_from_config_file() {
        let file = write_config(
            r#"
denied_area: "/acesso-negado"

areas:
  - path: "/obras"
    nav:
      label: "Obras"
      icon: "hard-hat"

  - path: "/financeira"
    module: "financeira"
    nav:
      label: "Financeiro"
      icon: "wallet"
      position: 1
"#,
        );

        let config = Config::from_file(file.path()).await.unwrap();
        let engine = AccessEngine::new(config.access()).unwrap();

        // Position 1 puts financeira ahead of the unpositioned obras entry
        let areas: Vec<&str> = engine
            .catalog()
            .entries()
            .iter()
            .map(|entry| entry.area.as_str())
            .collect();
        assert_eq!(areas, vec!["/financeira", "/obras"]);

        let caller = ContextFactory::employee(DocumentFactory::view_only(&["obras"]));
        assert_eq!(engine.check_area("/obras", &caller), Decision::Allow);
        assert_eq!(
            engine.check_area("/financeira", &caller),
            Decision::RedirectTo("/obras".to_string())
        );
    }

    /// Test that a document with the wrong shape fails to parse
    #[tokio::test]
    async fn test_malformed_yaml_is_rejected() {
        let file = write_config("areas: not-a-list");

        assert!(Config::from_file(file.path()).await.is_err());
    }

    /// Test that a missing file surfaces as a configuration error
    #[tokio::test]
    async fn test_missing_file_is_rejected() {
        let result = Config::from_file("/nonexistent/access.yaml").await;

        assert!(result.is_err());
    }

    /// Test that validation runs on load, not only at engine construction
    #[tokio::test]
    async fn test_invalid_config_fails_on_load() {
        let file = write_config(
            r#"
areas:
  - path: "/obras"
  - path: "/obras"
"#,
        );

        assert!(Config::from_file(file.path()).await.is_err());
    }

    /// Test that an empty file yields the defaults for optional fields
    #[tokio::test]
    async fn test_sparse_config_uses_defaults() {
        let file = write_config(r#"areas: []"#);

        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.access().denied_area, "/acesso-negado");
    }

    /// Test that environment loading falls back to the stock table
    #[test]
    fn test_from_env_without_overrides() {
        let config = Config::from_env().unwrap();

        assert_eq!(config.access().areas.len(), 6);
    }
}
