use axum::{middleware::from_fn, routing::get, routing::post, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{make_span_with_request_id, request_id_middleware};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Recipes
        .route(
            "/recipes",
            get(handlers::list_recipes).post(handlers::create_recipe),
        )
        .route(
            "/recipes/:id",
            get(handlers::get_recipe)
                .put(handlers::update_recipe)
                .delete(handlers::delete_recipe),
        )
        // Search
        .route("/search", get(handlers::quick_search))
        .route("/search/advanced", get(handlers::advanced_search))
        // Favourites
        .route(
            "/favourites",
            post(handlers::add_favourite).delete(handlers::remove_favourite),
        )
        .route("/favourites/:user_id", get(handlers::list_favourites))
        .layer(
            ServiceBuilder::new()
                .layer(from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
