pub mod auth;
pub mod blogs;
pub mod categories;
pub mod company;
pub mod contacts;
pub mod products;
pub mod sliders;
