use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::features::sliders::handlers;
use crate::features::sliders::services::SliderService;

/// Public slider routes (read-only)
pub fn public_routes(service: Arc<SliderService>) -> Router {
    Router::new()
        .route("/slider/", get(handlers::list_sliders))
        .with_state(service)
}

/// Protected slider routes (mutations)
pub fn protected_routes(service: Arc<SliderService>) -> Router {
    Router::new()
        .route("/slider/create/", post(handlers::create_slider))
        .route("/slider/update/{id}/", put(handlers::update_slider))
        .route("/slider/delete/{id}/", delete(handlers::delete_slider))
        .with_state(service)
}
