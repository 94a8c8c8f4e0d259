// src/bin/api_server.rs

use std::sync::Arc;
use todo_api::infra::config;
use todo_api::transport;
use todo_api::{PgTodoStore, TodoService};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // --- Store Initialization ---
    println!("> Connecting todo store (Postgres)...");
    let store = PgTodoStore::new().await?;
    println!("> Store connected, todos table ensured.");

    // --- Service Initialization ---
    let todo_service = Arc::new(TodoService::new(Arc::new(store)));
    let app_state = transport::http::AppState { todo_service };

    // --- API Server Initialization ---
    println!("> Starting API server...");
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    let app = transport::http::create_router(app_state)
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()),
        )
        .layer(cors)
        .layer(CompressionLayer::new());

    let bind_addr = config::http_bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    println!("> API server listening on http://{}", bind_addr);
    println!("> Swagger UI available at http://{}/swagger-ui", bind_addr);
    println!("> Press Ctrl+C to shut down");

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            println!("\n> Shutdown signal received (Ctrl+C), stopping.");
        }
    }

    Ok(())
}
