mod slider_dto;

pub use slider_dto::{CreateSliderDto, SliderListDto, SliderResponseDto, UpdateSliderDto};
