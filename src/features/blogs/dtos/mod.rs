mod blog_dto;

pub use blog_dto::{BlogListDto, BlogResponseDto, CreateBlogDto, UpdateBlogDto};
