use axum::handler::HandlerWithoutStateExt;
use axum::{middleware, routing::get, Router};
use contracts::shared::api::{HEALTH_PATH, ITEMS_API_PATH};
use sea_orm::DatabaseConnection;
use tower_http::services::ServeDir;

use crate::{handlers, system};

/// Shared state of all handlers
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// All routes of the catalog server
pub fn configure_routes(state: AppState) -> Router {
    let static_files =
        ServeDir::new("dist").not_found_service(handlers::system::not_found.into_service());

    Router::new()
        .route(HEALTH_PATH, get(handlers::system::health))
        // ========================================
        // A001 ITEM
        // ========================================
        .route(
            &format!("{}/", ITEMS_API_PATH),
            get(handlers::a001_item::missing_id),
        )
        .route(
            &format!("{}/:id", ITEMS_API_PATH),
            get(handlers::a001_item::get_by_id),
        )
        .with_state(state)
        .fallback_service(static_files)
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ))
}
