use std::collections::HashMap;
use std::sync::Arc;

use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::CategoryResponseDto;
use crate::features::categories::models::Category;
use crate::features::products::dtos::{
    CreateProductDto, ListProductsQuery, ProductImageResponseDto, ProductListDto,
    ProductResponseDto, UpdateProductDto,
};
use crate::features::products::models::{Product, ProductImage};
use crate::modules::storage::ImageStore;
use crate::modules::translation::Translator;
use crate::shared::i18n::{autofill_translations, LocalizedField};
use crate::shared::multipart::UploadedFile;
use crate::shared::paging::PageSlice;

const PRODUCT_COLUMNS: &str = "id, title_uz, title_ru, title_en, \
     description_uz, description_ru, description_en, \
     price, image_min, image_max, category_id, priority, \
     created_at, updated_at, is_active";

/// Service for product operations
pub struct ProductService {
    pool: PgPool,
    translator: Arc<dyn Translator>,
    images: Arc<ImageStore>,
}

impl ProductService {
    pub fn new(pool: PgPool, translator: Arc<dyn Translator>, images: Arc<ImageStore>) -> Self {
        Self {
            pool,
            translator,
            images,
        }
    }

    /// Incremental list: the first `limit` active products by priority,
    /// with the total count and the next limit to request
    pub async fn list(&self, query: ListProductsQuery) -> Result<ProductListDto> {
        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM products
            WHERE is_active = TRUE
              AND ($1::uuid IS NULL OR category_id = $1)
            "#,
        )
        .bind(query.category)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let slice = PageSlice::compute(query.limit, total);

        let products = sqlx::query_as::<_, Product>(&format!(
            r#"
            SELECT {PRODUCT_COLUMNS}
            FROM products
            WHERE is_active = TRUE
              AND ($1::uuid IS NULL OR category_id = $1)
            ORDER BY priority, title_uz
            LIMIT $2
            "#,
        ))
        .bind(query.category)
        .bind(slice.limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list products: {:?}", e);
            AppError::Database(e)
        })?;

        let products = self.hydrate(products).await?;

        Ok(ProductListDto {
            products,
            total,
            next_limit: slice.next_limit,
            has_more: slice.has_more,
        })
    }

    /// Fetch one active product with its category and gallery
    pub async fn detail(&self, id: Uuid) -> Result<ProductResponseDto> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1 AND is_active = TRUE",
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?
        .ok_or_else(|| AppError::NotFound(format!("Product {} not found", id)))?;

        let mut hydrated = self.hydrate(vec![product]).await?;
        hydrated
            .pop()
            .ok_or_else(|| AppError::NotFound(format!("Product {} not found", id)))
    }

    /// Create a product; translations auto-filled once, before first save
    pub async fn create(
        &self,
        mut dto: CreateProductDto,
        image_min: &UploadedFile,
        image_max: &UploadedFile,
    ) -> Result<ProductResponseDto> {
        let category = self.fetch_category(dto.category).await?;

        autofill_translations(
            self.translator.as_ref(),
            &mut [
                LocalizedField::new(&dto.title_uz, &mut dto.title_ru, &mut dto.title_en),
                LocalizedField::new(
                    &dto.description_uz,
                    &mut dto.description_ru,
                    &mut dto.description_en,
                ),
            ],
        )
        .await;

        let min_url = self
            .images
            .store_image(
                "product_images/300",
                &image_min.file_name,
                &image_min.content_type,
                &image_min.data,
            )
            .await?;
        let max_url = self
            .images
            .store_image(
                "product_images/600",
                &image_max.file_name,
                &image_max.content_type,
                &image_max.data,
            )
            .await?;

        let product = sqlx::query_as::<_, Product>(&format!(
            r#"
            INSERT INTO products
                (title_uz, title_ru, title_en,
                 description_uz, description_ru, description_en,
                 price, image_min, image_max, category_id, priority)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {PRODUCT_COLUMNS}
            "#,
        ))
        .bind(&dto.title_uz)
        .bind(&dto.title_ru)
        .bind(&dto.title_en)
        .bind(&dto.description_uz)
        .bind(&dto.description_ru)
        .bind(&dto.description_en)
        .bind(dto.price)
        .bind(&min_url)
        .bind(&max_url)
        .bind(dto.category)
        .bind(dto.priority)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create product: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Product created: id={}", product.id);

        Ok(ProductResponseDto::assemble(product, category.into(), Vec::new()))
    }

    /// Partial update; the auto-translate hook never runs here
    pub async fn update(&self, id: Uuid, dto: UpdateProductDto) -> Result<ProductResponseDto> {
        if let Some(category_id) = dto.category {
            self.fetch_category(category_id).await?;
        }

        let product = sqlx::query_as::<_, Product>(&format!(
            r#"
            UPDATE products
            SET title_uz = COALESCE($1, title_uz),
                title_ru = COALESCE($2, title_ru),
                title_en = COALESCE($3, title_en),
                description_uz = COALESCE($4, description_uz),
                description_ru = COALESCE($5, description_ru),
                description_en = COALESCE($6, description_en),
                price = COALESCE($7, price),
                image_min = COALESCE($8, image_min),
                image_max = COALESCE($9, image_max),
                category_id = COALESCE($10, category_id),
                priority = COALESCE($11, priority),
                updated_at = NOW()
            WHERE id = $12
            RETURNING {PRODUCT_COLUMNS}
            "#,
        ))
        .bind(&dto.title_uz)
        .bind(&dto.title_ru)
        .bind(&dto.title_en)
        .bind(&dto.description_uz)
        .bind(&dto.description_ru)
        .bind(&dto.description_en)
        .bind(dto.price)
        .bind(&dto.image_min)
        .bind(&dto.image_max)
        .bind(dto.category)
        .bind(dto.priority)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?
        .ok_or_else(|| AppError::NotFound(format!("Product {} not found", id)))?;

        let mut hydrated = self.hydrate(vec![product]).await?;
        hydrated
            .pop()
            .ok_or_else(|| AppError::NotFound(format!("Product {} not found", id)))
    }

    /// Soft delete: flip the active flag, keep the row
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query(
            "UPDATE products SET is_active = FALSE, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Product {} not found", id)));
        }

        Ok(())
    }

    /// Attach categories and galleries to a batch of products in two queries
    async fn hydrate(&self, products: Vec<Product>) -> Result<Vec<ProductResponseDto>> {
        if products.is_empty() {
            return Ok(Vec::new());
        }

        let product_ids: Vec<Uuid> = products.iter().map(|p| p.id).collect();
        let mut category_ids: Vec<Uuid> = products.iter().map(|p| p.category_id).collect();
        category_ids.sort_unstable();
        category_ids.dedup();

        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, title_uz, title_ru, title_en,
                   description_uz, description_ru, description_en,
                   image, priority, created_at, updated_at, is_active
            FROM categories
            WHERE id = ANY($1)
            "#,
        )
        .bind(&category_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let images = sqlx::query_as::<_, ProductImage>(
            r#"
            SELECT id, product_id, image_min, image_max,
                   created_at, updated_at, is_active
            FROM product_images
            WHERE product_id = ANY($1) AND is_active = TRUE
            ORDER BY created_at
            "#,
        )
        .bind(&product_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let categories_by_id: HashMap<Uuid, CategoryResponseDto> = categories
            .into_iter()
            .map(|c| (c.id, c.into()))
            .collect();

        let mut images_by_product: HashMap<Uuid, Vec<ProductImageResponseDto>> = HashMap::new();
        for image in images {
            images_by_product
                .entry(image.product_id)
                .or_default()
                .push(image.into());
        }

        products
            .into_iter()
            .map(|product| {
                let category = categories_by_id.get(&product.category_id).cloned().ok_or_else(
                    || {
                        AppError::Internal(format!(
                            "Product {} references missing category {}",
                            product.id, product.category_id
                        ))
                    },
                )?;
                let gallery = images_by_product.remove(&product.id).unwrap_or_default();
                Ok(ProductResponseDto::assemble(product, category, gallery))
            })
            .collect()
    }

    async fn fetch_category(&self, id: Uuid) -> Result<Category> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT id, title_uz, title_ru, title_en,
                   description_uz, description_ru, description_en,
                   image, priority, created_at, updated_at, is_active
            FROM categories
            WHERE id = $1 AND is_active = TRUE
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?
        .ok_or_else(|| AppError::Validation(format!("Category {} not found", id)))
    }
}
