use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::features::company::handlers;
use crate::features::company::services::{
    CompanyAddressService, CompanyEmailService, CompanyImageService, CompanyPhoneService,
    CompanyService,
};

/// Shared handle bundle for the company feature
#[derive(Clone)]
pub struct CompanyServices {
    pub company: Arc<CompanyService>,
    pub addresses: Arc<CompanyAddressService>,
    pub images: Arc<CompanyImageService>,
    pub phones: Arc<CompanyPhoneService>,
    pub emails: Arc<CompanyEmailService>,
}

/// Public company routes (read-only)
pub fn public_routes(services: CompanyServices) -> Router {
    Router::new()
        .route("/company/", get(handlers::get_company))
        .with_state(services.company)
        .merge(
            Router::new()
                .route("/companyaddress/", get(handlers::list_company_addresses))
                .with_state(services.addresses),
        )
        .merge(
            Router::new()
                .route("/companyimage/", get(handlers::list_company_images))
                .with_state(services.images),
        )
        .merge(
            Router::new()
                .route("/companyphone/", get(handlers::list_company_phones))
                .with_state(services.phones),
        )
        .merge(
            Router::new()
                .route("/companyemail/", get(handlers::list_company_emails))
                .with_state(services.emails),
        )
}

/// Protected company routes (mutations)
pub fn protected_routes(services: CompanyServices) -> Router {
    Router::new()
        .route("/company/create/", post(handlers::create_company))
        .route("/company/update/{id}/", put(handlers::update_company))
        .route("/company/delete/{id}/", delete(handlers::delete_company))
        .with_state(services.company)
        .merge(
            Router::new()
                .route(
                    "/companyaddress/create/",
                    post(handlers::create_company_address),
                )
                .route(
                    "/companyaddress/update/{id}/",
                    put(handlers::update_company_address),
                )
                .route(
                    "/companyaddress/delete/{id}/",
                    delete(handlers::delete_company_address),
                )
                .with_state(services.addresses),
        )
        .merge(
            Router::new()
                .route(
                    "/companyimage/create/",
                    post(handlers::create_company_image),
                )
                .route(
                    "/companyimage/update/{id}/",
                    put(handlers::update_company_image),
                )
                .route(
                    "/companyimage/delete/{id}/",
                    delete(handlers::delete_company_image),
                )
                .with_state(services.images),
        )
        .merge(
            Router::new()
                .route(
                    "/companyphone/create/",
                    post(handlers::create_company_phone),
                )
                .route(
                    "/companyphone/update/{id}/",
                    put(handlers::update_company_phone),
                )
                .route(
                    "/companyphone/delete/{id}/",
                    delete(handlers::delete_company_phone),
                )
                .with_state(services.phones),
        )
        .merge(
            Router::new()
                .route(
                    "/companyemail/create/",
                    post(handlers::create_company_email),
                )
                .route(
                    "/companyemail/update/{id}/",
                    put(handlers::update_company_email),
                )
                .route(
                    "/companyemail/delete/{id}/",
                    delete(handlers::delete_company_email),
                )
                .with_state(services.emails),
        )
}
