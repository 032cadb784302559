mod product_handler;
mod product_image_handler;

pub use product_handler::*;
pub use product_image_handler::*;
