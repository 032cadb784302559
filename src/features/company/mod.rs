pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use routes::CompanyServices;
pub use services::{
    CompanyAddressService, CompanyEmailService, CompanyImageService, CompanyPhoneService,
    CompanyService,
};
