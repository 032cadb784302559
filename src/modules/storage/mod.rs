//! Storage module for uploaded images
//!
//! Provides a MinIO/S3-compatible client that stores image uploads and
//! hands back publicly servable URLs.

mod image_store;

pub use image_store::{ImageStore, StoredImagePair};
