use super::*;

#[tokio::test]
async fn new_state_seeds_directory_and_defaults() {
    let state = test_helpers::test_app_state();
    assert_eq!(state.directory.read().await.len(), 8);
    assert_eq!(*state.settings.read().await, Settings::default());
    assert_eq!(state.sessions.len().await, 0);
    assert!(!state.cookie_secure);
}

#[tokio::test]
async fn clones_share_state() {
    let state = test_helpers::test_app_state();
    let clone = state.clone();
    let token = test_helpers::logged_in_token(&clone).await;
    assert!(state.sessions.is_authenticated(&token).await);

    clone.directory.write().await.delete("1").unwrap();
    assert_eq!(state.directory.read().await.len(), 7);
}

#[tokio::test]
async fn with_directory_uses_given_collection() {
    let state = AppState::with_directory(
        test_helpers::test_app_state().auth,
        UserDirectory::new(Vec::new()),
        true,
    );
    assert!(state.directory.read().await.is_empty());
    assert!(state.cookie_secure);
}
