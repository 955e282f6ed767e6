use super::*;

fn instant_backend() -> MockAuthBackend {
    MockAuthBackend::new(Duration::ZERO)
}

// =============================================================================
// MockAuthBackend
// =============================================================================

#[tokio::test]
async fn mock_accepts_demo_pair() {
    let backend = instant_backend();
    let creds = Credentials::new(DEMO_EMAIL, DEMO_PASSWORD);
    assert!(backend.authenticate(&creds).await.is_ok());
}

#[tokio::test]
async fn mock_rejects_wrong_password() {
    let backend = instant_backend();
    let creds = Credentials::new("user@example.com", "wrong");
    let err = backend.authenticate(&creds).await.unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
    assert_eq!(err.to_string(), "Invalid email or password");
}

#[tokio::test]
async fn mock_rejects_other_pairs() {
    let backend = instant_backend();
    let pairs = [
        ("admin@example.com", "password"),
        ("USER@example.com", "password"),
        ("user@example.com", "Password"),
        ("user@example.com ", "password"),
        ("", ""),
        ("user", "password"),
    ];
    for (email, password) in pairs {
        let creds = Credentials::new(email, password);
        assert!(
            matches!(backend.authenticate(&creds).await, Err(AuthError::InvalidCredentials)),
            "expected rejection for {email:?}/{password:?}"
        );
    }
}

#[tokio::test]
async fn mock_waits_for_configured_delay() {
    let backend = MockAuthBackend::new(Duration::from_millis(20));
    let started = std::time::Instant::now();
    let _ = backend.authenticate(&Credentials::new("a@b.co", "x")).await;
    assert!(started.elapsed() >= Duration::from_millis(20));
}

#[test]
fn mock_default_delay_is_half_a_second() {
    assert_eq!(MockAuthBackend::default().delay(), Duration::from_millis(500));
}

// =============================================================================
// local_part
// =============================================================================

#[test]
fn local_part_strips_domain() {
    assert_eq!(local_part("user@example.com"), "user");
}

#[test]
fn local_part_without_at_is_whole_string() {
    assert_eq!(local_part("plain"), "plain");
}

#[test]
fn local_part_empty_before_at() {
    assert_eq!(local_part("@example.com"), "");
}

// =============================================================================
// HTTP backend
// =============================================================================

#[test]
fn classify_status_success_range() {
    assert!(classify_status(200).is_ok());
    assert!(classify_status(204).is_ok());
}

#[test]
fn classify_status_rejections() {
    assert!(matches!(classify_status(401), Err(AuthError::InvalidCredentials)));
    assert!(matches!(classify_status(403), Err(AuthError::InvalidCredentials)));
}

#[test]
fn classify_status_other_is_backend_fault() {
    let err = classify_status(502).unwrap_err();
    assert!(matches!(err, AuthError::Backend(_)));
    assert!(err.to_string().contains("502"));
}

#[test]
fn http_backend_keeps_url() {
    let backend = HttpAuthBackend::new("https://auth.example.test/verify", Duration::from_secs(5)).unwrap();
    assert_eq!(backend.url(), "https://auth.example.test/verify");
}

#[tokio::test]
async fn http_backend_unreachable_is_backend_fault() {
    let backend = HttpAuthBackend::new("http://127.0.0.1:9/verify", Duration::from_millis(500)).unwrap();
    let err = backend
        .authenticate(&Credentials::new(DEMO_EMAIL, DEMO_PASSWORD))
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::Backend(_)));
}

// =============================================================================
// backend_from_config
// =============================================================================

#[tokio::test]
async fn backend_from_config_builds_mock() {
    let backend = backend_from_config(&AuthBackendConfig::Mock { delay: Duration::ZERO }).unwrap();
    assert!(backend.authenticate(&Credentials::new(DEMO_EMAIL, DEMO_PASSWORD)).await.is_ok());
}

#[test]
fn backend_from_config_builds_http() {
    let config = AuthBackendConfig::Http { url: "https://auth.example.test".into(), timeout: Duration::from_secs(1) };
    assert!(backend_from_config(&config).is_ok());
}
