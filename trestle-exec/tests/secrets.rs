use trestle_exec::secrets::{
    CompositeProvider, EnvSecretsProvider, FileSecretsProvider, SecretError, SecretValue,
    SecretsProvider, StaticSecretsProvider,
};

#[tokio::test]
async fn env_provider_reads_normalized_name_with_prefix() {
    std::env::set_var("TRESTLE_TEST_SECRETS_PROD_KEY", "from-env");
    let provider = EnvSecretsProvider {
        env_prefix: Some("TRESTLE_TEST_SECRETS_".to_string()),
    };

    assert_eq!(provider.env_key("prod-key"), "TRESTLE_TEST_SECRETS_PROD_KEY");
    let v = provider.get("prod-key").await.unwrap();
    assert_eq!(v.expose(), "from-env");
}

#[tokio::test]
async fn env_provider_treats_empty_as_missing() {
    std::env::set_var("TRESTLE_TEST_SECRETS_EMPTY", "");
    let provider = EnvSecretsProvider::default();

    assert!(matches!(
        provider.get("trestle_test_secrets_empty").await,
        Err(SecretError::NotFound(_))
    ));
    assert!(matches!(
        provider.get("TRESTLE_TEST_SECRETS_NEVER_SET").await,
        Err(SecretError::NotFound(_))
    ));
}

#[tokio::test]
async fn file_provider_strips_trailing_newline() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("TRESTLE_API_KEY"), "file-key\n").unwrap();
    let provider = FileSecretsProvider::new(dir.path());

    let v = provider.get("TRESTLE_API_KEY").await.unwrap();
    assert_eq!(v.expose(), "file-key");
    assert!(matches!(
        provider.get("OTHER").await,
        Err(SecretError::NotFound(_))
    ));
}

#[tokio::test]
async fn file_provider_rejects_path_like_names() {
    let dir = tempfile::tempdir().unwrap();
    let provider = FileSecretsProvider::new(dir.path());

    for name in ["../etc/passwd", "a/b", ".hidden", ""] {
        assert!(
            matches!(provider.get(name).await, Err(SecretError::InvalidName(_))),
            "{name:?} should be rejected"
        );
    }
}

#[tokio::test]
async fn composite_falls_through_not_found_only() {
    let dir = tempfile::tempdir().unwrap();
    let composite = CompositeProvider::new(vec![
        Box::new(StaticSecretsProvider::new().with("A", SecretValue::new("static-a"))),
        Box::new(FileSecretsProvider::new(dir.path())),
        Box::new(StaticSecretsProvider::new().with("B", SecretValue::new("static-b"))),
    ]);

    assert_eq!(composite.get("A").await.unwrap().expose(), "static-a");
    assert_eq!(composite.get("B").await.unwrap().expose(), "static-b");
    assert!(matches!(
        composite.get("C").await,
        Err(SecretError::NotFound(_))
    ));
    // the file provider's rejection is not swallowed
    assert!(matches!(
        composite.get("../B").await,
        Err(SecretError::InvalidName(_))
    ));
}

#[test]
fn secret_debug_is_redacted() {
    let v = SecretValue::new("super-secret");
    assert!(!format!("{v:?}").contains("super-secret"));
}
