use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::auth::{dtos as auth_dtos, handlers as auth_handlers, models as auth_models};
use crate::features::blogs::{dtos as blogs_dtos, handlers as blogs_handlers};
use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::company::{dtos as company_dtos, handlers as company_handlers};
use crate::features::contacts::{dtos as contacts_dtos, handlers as contacts_handlers};
use crate::features::products::{dtos as products_dtos, handlers as products_handlers};
use crate::features::sliders::{dtos as sliders_dtos, handlers as sliders_handlers};
use crate::shared::types::ApiResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth_handlers::login,
        auth_handlers::logout,
        // Categories
        categories_handlers::list_categories,
        categories_handlers::create_category,
        categories_handlers::update_category,
        categories_handlers::delete_category,
        // Products
        products_handlers::list_products,
        products_handlers::product_detail,
        products_handlers::create_product,
        products_handlers::update_product,
        products_handlers::delete_product,
        // Product gallery
        products_handlers::list_product_images,
        products_handlers::create_product_images,
        products_handlers::update_product_image,
        products_handlers::delete_product_image,
        // Sliders
        sliders_handlers::list_sliders,
        sliders_handlers::create_slider,
        sliders_handlers::update_slider,
        sliders_handlers::delete_slider,
        // Blogs
        blogs_handlers::list_blogs,
        blogs_handlers::blog_detail,
        blogs_handlers::create_blog,
        blogs_handlers::update_blog,
        blogs_handlers::delete_blog,
        // Company
        company_handlers::get_company,
        company_handlers::create_company,
        company_handlers::update_company,
        company_handlers::delete_company,
        company_handlers::list_company_addresses,
        company_handlers::create_company_address,
        company_handlers::update_company_address,
        company_handlers::delete_company_address,
        company_handlers::list_company_images,
        company_handlers::create_company_image,
        company_handlers::update_company_image,
        company_handlers::delete_company_image,
        company_handlers::list_company_phones,
        company_handlers::create_company_phone,
        company_handlers::update_company_phone,
        company_handlers::delete_company_phone,
        company_handlers::list_company_emails,
        company_handlers::create_company_email,
        company_handlers::update_company_email,
        company_handlers::delete_company_email,
        // Contacts
        contacts_handlers::list_contacts,
        contacts_handlers::create_contact,
        contacts_handlers::update_contact,
        contacts_handlers::delete_contact,
    ),
    components(
        schemas(
            // Auth
            auth_models::AuthenticatedUser,
            auth_dtos::LoginRequestDto,
            auth_dtos::LoginResponseDto,
            ApiResponse<auth_dtos::LoginResponseDto>,
            // Categories
            categories_dtos::CategoryResponseDto,
            categories_dtos::CategoryListDto,
            categories_dtos::CreateCategoryDto,
            categories_dtos::UpdateCategoryDto,
            ApiResponse<categories_dtos::CategoryListDto>,
            ApiResponse<categories_dtos::CategoryResponseDto>,
            // Products
            products_dtos::ProductResponseDto,
            products_dtos::ProductListDto,
            products_dtos::CreateProductDto,
            products_dtos::UpdateProductDto,
            products_dtos::ProductImageResponseDto,
            products_dtos::ProductImageListDto,
            products_dtos::UpdateProductImageDto,
            ApiResponse<products_dtos::ProductListDto>,
            ApiResponse<products_dtos::ProductResponseDto>,
            ApiResponse<products_dtos::ProductImageListDto>,
            ApiResponse<products_dtos::ProductImageResponseDto>,
            // Sliders
            sliders_dtos::SliderResponseDto,
            sliders_dtos::SliderListDto,
            sliders_dtos::CreateSliderDto,
            sliders_dtos::UpdateSliderDto,
            ApiResponse<sliders_dtos::SliderListDto>,
            ApiResponse<sliders_dtos::SliderResponseDto>,
            // Blogs
            blogs_dtos::BlogResponseDto,
            blogs_dtos::BlogListDto,
            blogs_dtos::CreateBlogDto,
            blogs_dtos::UpdateBlogDto,
            ApiResponse<blogs_dtos::BlogListDto>,
            ApiResponse<blogs_dtos::BlogResponseDto>,
            // Company
            company_dtos::CompanyResponseDto,
            company_dtos::CreateCompanyDto,
            company_dtos::UpdateCompanyDto,
            company_dtos::CompanyAddressResponseDto,
            company_dtos::CompanyAddressListDto,
            company_dtos::CreateCompanyAddressDto,
            company_dtos::UpdateCompanyAddressDto,
            company_dtos::CompanyImageResponseDto,
            company_dtos::CompanyImageListDto,
            company_dtos::UpdateCompanyImageDto,
            company_dtos::CompanyPhoneResponseDto,
            company_dtos::CompanyPhoneListDto,
            company_dtos::CreateCompanyPhoneDto,
            company_dtos::UpdateCompanyPhoneDto,
            company_dtos::CompanyEmailResponseDto,
            company_dtos::CompanyEmailListDto,
            company_dtos::CreateCompanyEmailDto,
            company_dtos::UpdateCompanyEmailDto,
            ApiResponse<company_dtos::CompanyResponseDto>,
            ApiResponse<company_dtos::CompanyAddressListDto>,
            ApiResponse<company_dtos::CompanyAddressResponseDto>,
            ApiResponse<company_dtos::CompanyImageListDto>,
            ApiResponse<company_dtos::CompanyImageResponseDto>,
            ApiResponse<company_dtos::CompanyPhoneListDto>,
            ApiResponse<company_dtos::CompanyPhoneResponseDto>,
            ApiResponse<company_dtos::CompanyEmailListDto>,
            ApiResponse<company_dtos::CompanyEmailResponseDto>,
            // Contacts
            contacts_dtos::ContactResponseDto,
            contacts_dtos::ContactListDto,
            contacts_dtos::CreateContactDto,
            contacts_dtos::UpdateContactDto,
            ApiResponse<contacts_dtos::ContactListDto>,
            ApiResponse<contacts_dtos::ContactResponseDto>,
        )
    ),
    tags(
        (name = "auth", description = "Token authentication"),
        (name = "category", description = "Product categories"),
        (name = "product", description = "Products with incremental loading"),
        (name = "productimage", description = "Product gallery images"),
        (name = "slider", description = "Home page sliders"),
        (name = "blog", description = "Blog posts"),
        (name = "company", description = "Company profile"),
        (name = "companyaddress", description = "Branch addresses"),
        (name = "companyimage", description = "Company gallery"),
        (name = "companyphone", description = "Contact phone numbers"),
        (name = "companyemail", description = "Contact email addresses"),
        (name = "contact", description = "Visitor messages"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Savdo CMS API",
        version = "0.1.0",
        description = "Multilingual commerce content API",
    )
)]
pub struct ApiDoc;

/// Adds the bearer token security scheme to the OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("Token")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
