//! Multilingual field auto-population.
//!
//! Every multilingual entity stores its base-language (Uzbek) text plus
//! optional Russian and English siblings. Create services list their
//! sibling groups explicitly (no runtime field introspection) and call
//! [`autofill_translations`] once, before first persistence. Updates never
//! re-run the hook.

use crate::modules::translation::{Lang, Translator};

/// One base-language field together with its translated siblings.
pub struct LocalizedField<'a> {
    pub base: &'a str,
    pub ru: &'a mut Option<String>,
    pub en: &'a mut Option<String>,
}

impl<'a> LocalizedField<'a> {
    pub fn new(base: &'a str, ru: &'a mut Option<String>, en: &'a mut Option<String>) -> Self {
        Self { base, ru, en }
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |s| s.trim().is_empty())
}

/// Populate empty translated siblings from the base-language text.
///
/// Provider failures are logged and swallowed; the affected sibling stays
/// empty and the caller's save proceeds. Blank base text skips the group
/// entirely.
pub async fn autofill_translations(translator: &dyn Translator, fields: &mut [LocalizedField<'_>]) {
    for field in fields.iter_mut() {
        if field.base.trim().is_empty() {
            continue;
        }

        if is_blank(field.ru) {
            match translator.translate(field.base, Lang::Ru).await {
                Ok(text) => *field.ru = Some(text),
                Err(e) => {
                    tracing::warn!("Auto-translate to ru failed, leaving field empty: {}", e);
                }
            }
        }

        if is_blank(field.en) {
            match translator.translate(field.base, Lang::En).await {
                Ok(text) => *field.en = Some(text),
                Err(e) => {
                    tracing::warn!("Auto-translate to en failed, leaving field empty: {}", e);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Echoes the input prefixed with the target language code.
    struct StubTranslator {
        calls: AtomicUsize,
    }

    impl StubTranslator {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl Translator for StubTranslator {
        async fn translate(&self, text: &str, target: Lang) -> crate::core::error::Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(format!("{}:{}", target.code(), text))
        }
    }

    struct FailingTranslator;

    #[async_trait]
    impl Translator for FailingTranslator {
        async fn translate(
            &self,
            _text: &str,
            _target: Lang,
        ) -> crate::core::error::Result<String> {
            Err(AppError::ExternalServiceError("quota exceeded".to_string()))
        }
    }

    #[tokio::test]
    async fn test_fills_empty_siblings() {
        let translator = StubTranslator::new();
        let mut ru = None;
        let mut en = None;

        autofill_translations(
            &translator,
            &mut [LocalizedField::new("salom", &mut ru, &mut en)],
        )
        .await;

        assert_eq!(ru.as_deref(), Some("ru:salom"));
        assert_eq!(en.as_deref(), Some("en:salom"));
        assert_eq!(translator.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_never_overwrites_provided_translations() {
        let translator = StubTranslator::new();
        let mut ru = Some("привет".to_string());
        let mut en = None;

        autofill_translations(
            &translator,
            &mut [LocalizedField::new("salom", &mut ru, &mut en)],
        )
        .await;

        assert_eq!(ru.as_deref(), Some("привет"));
        assert_eq!(en.as_deref(), Some("en:salom"));
        assert_eq!(translator.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_blank_base_text_skips_group() {
        let translator = StubTranslator::new();
        let mut ru = None;
        let mut en = None;

        autofill_translations(
            &translator,
            &mut [LocalizedField::new("   ", &mut ru, &mut en)],
        )
        .await;

        assert!(ru.is_none());
        assert!(en.is_none());
        assert_eq!(translator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_provider_failure_leaves_fields_empty() {
        let mut ru = None;
        let mut en = None;

        autofill_translations(
            &FailingTranslator,
            &mut [LocalizedField::new("salom", &mut ru, &mut en)],
        )
        .await;

        assert!(ru.is_none());
        assert!(en.is_none());
    }

    #[tokio::test]
    async fn test_whitespace_sibling_is_treated_as_empty() {
        let translator = StubTranslator::new();
        let mut ru = Some("  ".to_string());
        let mut en = None;

        autofill_translations(
            &translator,
            &mut [LocalizedField::new("salom", &mut ru, &mut en)],
        )
        .await;

        assert_eq!(ru.as_deref(), Some("ru:salom"));
    }

    #[tokio::test]
    async fn test_multiple_groups_translate_independently() {
        let translator = StubTranslator::new();
        let mut title_ru = None;
        let mut title_en = None;
        let mut desc_ru = Some("описание".to_string());
        let mut desc_en = None;

        autofill_translations(
            &translator,
            &mut [
                LocalizedField::new("sarlavha", &mut title_ru, &mut title_en),
                LocalizedField::new("tavsif", &mut desc_ru, &mut desc_en),
            ],
        )
        .await;

        assert_eq!(title_ru.as_deref(), Some("ru:sarlavha"));
        assert_eq!(title_en.as_deref(), Some("en:sarlavha"));
        assert_eq!(desc_ru.as_deref(), Some("описание"));
        assert_eq!(desc_en.as_deref(), Some("en:tavsif"));
        assert_eq!(translator.calls.load(Ordering::SeqCst), 3);
    }
}
