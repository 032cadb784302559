mod category_dto;

pub use category_dto::{
    CategoryListDto, CategoryResponseDto, CreateCategoryDto, UpdateCategoryDto,
};
pub(crate) use category_dto::parse_priority;
