mod company_handler;
mod company_parts_handler;

pub use company_handler::*;
pub use company_parts_handler::*;
