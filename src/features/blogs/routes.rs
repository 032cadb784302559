use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::features::blogs::handlers;
use crate::features::blogs::services::BlogService;

/// Public blog routes (read-only)
pub fn public_routes(service: Arc<BlogService>) -> Router {
    Router::new()
        .route("/blog/", get(handlers::list_blogs))
        .route("/blog/detail/{id}/", get(handlers::blog_detail))
        .with_state(service)
}

/// Protected blog routes (mutations)
pub fn protected_routes(service: Arc<BlogService>) -> Router {
    Router::new()
        .route("/blog/create/", post(handlers::create_blog))
        .route("/blog/update/{id}/", put(handlers::update_blog))
        .route("/blog/delete/{id}/", delete(handlers::delete_blog))
        .with_state(service)
}
