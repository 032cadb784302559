mod company_parts_service;
mod company_service;

pub use company_parts_service::{
    CompanyAddressService, CompanyEmailService, CompanyImageService, CompanyPhoneService,
};
pub use company_service::CompanyService;
