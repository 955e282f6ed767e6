mod config;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::AppConfig::from_env().expect("invalid configuration");
    let auth = services::auth::backend_from_config(&config.auth).expect("auth backend init failed");
    let state = state::AppState::new(auth, config.cookie_secure);

    let app = routes::app(state);
    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "admin-console listening");
    axum::serve(listener, app).await.expect("server failed");
}
