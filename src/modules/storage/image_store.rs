//! MinIO/S3-compatible image storage client
//!
//! Uploaded images are stored under per-entity folders; entities that keep
//! two display sizes get the same upload recorded under both size-variant
//! prefixes. Actual resizing happens in the storage serving pipeline, not
//! here.
//!
//! Uses rust-s3 crate for lightweight S3 operations.

use s3::creds::Credentials;
use s3::{Bucket, BucketConfiguration, Region};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::core::config::MinIOConfig;
use crate::core::error::AppError;
use crate::shared::constants::{IMAGE_PREFIX_MAX, IMAGE_PREFIX_MIN};

/// URLs of the two stored size variants of one upload
#[derive(Debug, Clone)]
pub struct StoredImagePair {
    pub min_url: String,
    pub max_url: String,
}

/// MinIO/S3-compatible storage client for image uploads
pub struct ImageStore {
    bucket: Box<Bucket>,
    region: Region,
    credentials: Credentials,
    public_endpoint: String,
}

impl ImageStore {
    /// Create a new image store from configuration and ensure the bucket exists
    pub async fn new(config: MinIOConfig) -> Result<Self, AppError> {
        let endpoint = config.endpoint.clone();
        let store = Self::from_config(config)?;

        store.ensure_bucket_exists().await?;

        info!(
            "Image store initialized for endpoint: {}, bucket: {}",
            endpoint,
            store.bucket.name()
        );

        Ok(store)
    }

    /// Build the client without touching the network
    pub fn from_config(config: MinIOConfig) -> Result<Self, AppError> {
        let credentials = Credentials::new(
            Some(&config.access_key),
            Some(&config.secret_key),
            None,
            None,
            None,
        )
        .map_err(|e| AppError::Internal(format!("Failed to create MinIO credentials: {}", e)))?;

        let region = Region::Custom {
            region: config.region.clone(),
            endpoint: config.endpoint.clone(),
        };

        let mut bucket = Bucket::new(&config.bucket, region.clone(), credentials.clone())
            .map_err(|e| AppError::Internal(format!("Failed to create MinIO bucket: {}", e)))?;

        // Use path-style URLs for MinIO (http://endpoint/bucket instead of http://bucket.endpoint)
        bucket.set_path_style();

        Ok(Self {
            bucket,
            region,
            credentials,
            public_endpoint: config.public_endpoint.trim_end_matches('/').to_string(),
        })
    }

    /// Ensure the bucket exists, create if not
    pub async fn ensure_bucket_exists(&self) -> Result<(), AppError> {
        match Bucket::create_with_path_style(
            &self.bucket.name(),
            self.region.clone(),
            self.credentials.clone(),
            BucketConfiguration::default(),
        )
        .await
        {
            Ok(_) => {
                info!("Bucket '{}' created successfully", self.bucket.name());
                Ok(())
            }
            Err(e) => {
                let error_str = e.to_string();
                // Bucket already exists - this is fine
                if error_str.contains("BucketAlreadyOwnedByYou")
                    || error_str.contains("BucketAlreadyExists")
                    || error_str.contains("already own it")
                {
                    debug!("Bucket '{}' already exists", self.bucket.name());
                    Ok(())
                } else {
                    warn!(
                        "Could not create bucket '{}': {}. Assuming it exists.",
                        self.bucket.name(),
                        e
                    );
                    Ok(())
                }
            }
        }
    }

    pub fn bucket_name(&self) -> String {
        self.bucket.name()
    }

    /// Store a single image under the given folder, returning its public URL
    pub async fn store_image(
        &self,
        folder: &str,
        file_name: &str,
        content_type: &str,
        data: &[u8],
    ) -> Result<String, AppError> {
        let key = self.build_key(folder, None, file_name);
        self.put(&key, data, content_type).await?;
        Ok(self.public_url(&key))
    }

    /// Store one upload under both size-variant prefixes.
    ///
    /// The serving pipeline resizes on delivery; both keys reference the
    /// original bytes.
    pub async fn store_image_pair(
        &self,
        folder: &str,
        file_name: &str,
        content_type: &str,
        data: &[u8],
    ) -> Result<StoredImagePair, AppError> {
        let stem = Uuid::new_v4();
        let ext = extension_of(file_name);
        let min_key = format!("{}/{}/{}.{}", folder, IMAGE_PREFIX_MIN, stem, ext);
        let max_key = format!("{}/{}/{}.{}", folder, IMAGE_PREFIX_MAX, stem, ext);

        self.put(&min_key, data, content_type).await?;
        self.put(&max_key, data, content_type).await?;

        Ok(StoredImagePair {
            min_url: self.public_url(&min_key),
            max_url: self.public_url(&max_key),
        })
    }

    fn build_key(&self, folder: &str, variant: Option<&str>, file_name: &str) -> String {
        let ext = extension_of(file_name);
        match variant {
            Some(v) => format!("{}/{}/{}.{}", folder, v, Uuid::new_v4(), ext),
            None => format!("{}/{}.{}", folder, Uuid::new_v4(), ext),
        }
    }

    async fn put(&self, key: &str, data: &[u8], content_type: &str) -> Result<(), AppError> {
        self.bucket
            .put_object_with_content_type(key, data, content_type)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to upload image '{}': {}", key, e)))?;

        debug!("Uploaded image '{}' to bucket '{}'", key, self.bucket.name());
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}/{}", self.public_endpoint, self.bucket.name(), key)
    }
}

/// File extension from the original filename, defaulting to jpg
fn extension_of(file_name: &str) -> &str {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty() && ext.len() <= 5)
        .unwrap_or("jpg")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_of_common_names() {
        assert_eq!(extension_of("photo.png"), "png");
        assert_eq!(extension_of("archive.tar.gz"), "gz");
        assert_eq!(extension_of("noext"), "jpg");
        assert_eq!(extension_of("trailing."), "jpg");
        assert_eq!(extension_of("weird.verylongext"), "jpg");
    }
}
