mod product_dto;
mod product_image_dto;

pub use product_dto::{
    CreateProductDto, ListProductsQuery, ProductListDto, ProductResponseDto, UpdateProductDto,
};
pub(crate) use product_dto::parse_uuid_field;
pub use product_image_dto::{
    ListProductImagesQuery, ProductImageListDto, ProductImageResponseDto, UpdateProductImageDto,
};
