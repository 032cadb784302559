//! Modules layer - Infrastructure components for external integrations
//!
//! Contains clients and adapters for external services like object storage
//! and the translation provider.

pub mod storage;
pub mod translation;
