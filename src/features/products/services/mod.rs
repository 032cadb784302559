mod product_image_service;
mod product_service;

pub use product_image_service::ProductImageService;
pub use product_service::ProductService;
