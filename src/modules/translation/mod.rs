//! Translation adapter
//!
//! Wraps the external text-translation provider behind the [`Translator`]
//! trait so services stay independent of the concrete backend.

mod google_client;

pub use google_client::GoogleTranslateClient;

use async_trait::async_trait;

use crate::core::error::Result;

/// Target languages derived from the base (Uzbek) text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    Uz,
    Ru,
    En,
}

impl Lang {
    /// ISO 639-1 code used by the translation provider
    pub fn code(&self) -> &'static str {
        match self {
            Lang::Uz => "uz",
            Lang::Ru => "ru",
            Lang::En => "en",
        }
    }
}

/// Trait for translation backends
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate text into the target language, auto-detecting the source
    async fn translate(&self, text: &str, target: Lang) -> Result<String>;
}
