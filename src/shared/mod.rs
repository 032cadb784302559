pub mod constants;
pub mod i18n;
pub mod multipart;
pub mod paging;
pub mod test_helpers;
pub mod types;
pub mod validation;
