mod product;
mod product_image;

pub use product::Product;
pub use product_image::ProductImage;
