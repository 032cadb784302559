use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::features::products::handlers;
use crate::features::products::services::{ProductImageService, ProductService};

/// Public product routes (read-only)
pub fn public_routes(
    products: Arc<ProductService>,
    gallery: Arc<ProductImageService>,
) -> Router {
    Router::new()
        .route("/product/", get(handlers::list_products))
        .route("/product/detail/{id}/", get(handlers::product_detail))
        .with_state(products)
        .merge(
            Router::new()
                .route("/productimage/", get(handlers::list_product_images))
                .with_state(gallery),
        )
}

/// Protected product routes (mutations)
pub fn protected_routes(
    products: Arc<ProductService>,
    gallery: Arc<ProductImageService>,
) -> Router {
    Router::new()
        .route("/product/create/", post(handlers::create_product))
        .route("/product/update/{id}/", put(handlers::update_product))
        .route("/product/delete/{id}/", delete(handlers::delete_product))
        .with_state(products)
        .merge(
            Router::new()
                .route("/productimage/create/", post(handlers::create_product_images))
                .route(
                    "/productimage/update/{id}/",
                    put(handlers::update_product_image),
                )
                .route(
                    "/productimage/delete/{id}/",
                    delete(handlers::delete_product_image),
                )
                .with_state(gallery),
        )
}
