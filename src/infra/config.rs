//! Centralized configuration (environment variables + defaults).

/// Database URL must be provided (no default) for safety.
pub fn database_url() -> String {
    std::env::var("DATABASE_URL").expect("DATABASE_URL must be set")
}

/// Listen address for the API server.
pub fn http_bind_addr() -> String {
    std::env::var("HTTP_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string())
}
