#[tokio::main]
async fn main() {
    souk_observability::init();

    let config = souk_api::config::AppConfig::from_env();
    let app = souk_api::app::build_app(&config);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("failed to bind listen address");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
