//! Multipart form collector for image-bearing create endpoints.
//!
//! Create handlers for entities with image fields accept
//! `multipart/form-data`: text parts carry the entity fields, file parts
//! carry the uploads. This collector drains the stream once so handlers
//! can look fields up by name afterwards.

use axum::extract::Multipart;
use std::collections::HashMap;

use crate::core::error::{AppError, Result};

/// Maximum accepted upload size per image
pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

const IMAGE_MIME_TYPES: &[&str] = &["image/jpeg", "image/png", "image/gif", "image/webp"];

/// One uploaded file part
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl UploadedFile {
    /// Reject non-image uploads and oversized files
    pub fn ensure_image(&self) -> Result<()> {
        if !IMAGE_MIME_TYPES.contains(&self.content_type.as_str()) {
            return Err(AppError::Validation(format!(
                "Unsupported image type '{}'",
                self.content_type
            )));
        }
        if self.data.len() > MAX_IMAGE_SIZE {
            return Err(AppError::Validation(format!(
                "Image exceeds maximum size of {} bytes",
                MAX_IMAGE_SIZE
            )));
        }
        Ok(())
    }
}

/// All parts of a drained multipart form, addressable by field name
#[derive(Debug, Default)]
pub struct FormData {
    texts: HashMap<String, String>,
    files: HashMap<String, Vec<UploadedFile>>,
}

impl FormData {
    /// Drain the multipart stream into memory
    pub async fn read(mut multipart: Multipart) -> Result<Self> {
        let mut form = FormData::default();

        while let Some(field) = multipart.next_field().await.map_err(|e| {
            AppError::BadRequest(format!("Failed to read multipart data: {}", e))
        })? {
            let name = field.name().unwrap_or("").to_string();
            if name.is_empty() {
                continue;
            }

            if let Some(file_name) = field.file_name().map(|s| s.to_string()) {
                let content_type = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());

                let data = field.bytes().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read file data: {}", e))
                })?;

                form.files.entry(name).or_default().push(UploadedFile {
                    file_name,
                    content_type,
                    data: data.to_vec(),
                });
            } else {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read field '{}': {}", name, e))
                })?;
                form.texts.insert(name, text);
            }
        }

        Ok(form)
    }

    /// Non-empty text value, or a field-level validation error
    pub fn require_text(&self, name: &str) -> Result<String> {
        self.optional_text(name)
            .ok_or_else(|| AppError::Validation(format!("Field '{}' is required", name)))
    }

    /// Non-empty text value if present
    pub fn optional_text(&self, name: &str) -> Option<String> {
        self.texts
            .get(name)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
    }

    /// First uploaded file for the field, if any
    pub fn file(&self, name: &str) -> Option<&UploadedFile> {
        self.files.get(name).and_then(|v| v.first())
    }

    /// All uploaded files for the field
    pub fn file_list(&self, name: &str) -> &[UploadedFile] {
        self.files.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First uploaded file, or a field-level validation error
    pub fn require_file(&self, name: &str) -> Result<&UploadedFile> {
        self.file(name)
            .ok_or_else(|| AppError::Validation(format!("File '{}' is required", name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_form() -> FormData {
        let mut form = FormData::default();
        form.texts.insert("title_uz".to_string(), "Salom".to_string());
        form.texts.insert("blank".to_string(), "   ".to_string());
        form.files.insert(
            "image".to_string(),
            vec![UploadedFile {
                file_name: "a.png".to_string(),
                content_type: "image/png".to_string(),
                data: vec![1, 2, 3],
            }],
        );
        form
    }

    #[test]
    fn test_require_text_trims_and_validates() {
        let form = sample_form();
        assert_eq!(form.require_text("title_uz").unwrap(), "Salom");
        assert!(form.require_text("blank").is_err());
        assert!(form.require_text("missing").is_err());
    }

    #[test]
    fn test_file_lookup() {
        let form = sample_form();
        assert!(form.require_file("image").is_ok());
        assert!(form.require_file("other").is_err());
        assert_eq!(form.file_list("image").len(), 1);
        assert!(form.file_list("other").is_empty());
    }

    #[test]
    fn test_ensure_image_checks_mime_and_size() {
        let ok = UploadedFile {
            file_name: "a.png".to_string(),
            content_type: "image/png".to_string(),
            data: vec![0; 16],
        };
        assert!(ok.ensure_image().is_ok());

        let bad_type = UploadedFile {
            file_name: "a.pdf".to_string(),
            content_type: "application/pdf".to_string(),
            data: vec![0; 16],
        };
        assert!(bad_type.ensure_image().is_err());

        let oversized = UploadedFile {
            file_name: "a.png".to_string(),
            content_type: "image/png".to_string(),
            data: vec![0; MAX_IMAGE_SIZE + 1],
        };
        assert!(oversized.ensure_image().is_err());
    }
}
