/// Process configuration, loaded once in `main` and passed down explicitly —
/// no process-wide singletons for the connection or the signing secret.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub jwt_secret: String,
}

impl AppConfig {
    /// Read configuration from the environment (`SOUK_ADDR`, `JWT_SECRET`).
    pub fn from_env() -> Self {
        let bind_addr =
            std::env::var("SOUK_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set; using insecure dev default");
            "dev-secret".to_string()
        });

        Self {
            bind_addr,
            jwt_secret,
        }
    }
}
