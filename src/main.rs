mod core;
mod features;
mod modules;
mod shared;

use crate::core::config::Config;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::core::{database, middleware};
use crate::features::auth::routes as auth_routes;
use crate::features::auth::services::{AuthService, TokenService};
use crate::features::blogs::{routes as blogs_routes, BlogService};
use crate::features::categories::{routes as categories_routes, CategoryService};
use crate::features::company::{
    routes as company_routes, CompanyAddressService, CompanyEmailService, CompanyImageService,
    CompanyPhoneService, CompanyService, CompanyServices,
};
use crate::features::contacts::{routes as contacts_routes, ContactService};
use crate::features::products::{
    routes as products_routes, ProductImageService, ProductService,
};
use crate::features::sliders::{routes as sliders_routes, SliderService};
use crate::modules::storage::ImageStore;
use crate::modules::translation::{GoogleTranslateClient, Translator};
use axum::{middleware::from_fn, Router};
use std::sync::Arc;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .max_blocking_threads(worker_threads * 4)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    let available_cpus = std::thread::available_parallelism()
        .map(|p| p.get())
        .unwrap_or(1);
    tracing::info!(
        "System info: available_cpus={}, tokio_worker_threads={}, pid={}",
        available_cpus,
        worker_threads,
        std::process::id()
    );

    tracing::info!("Configuration loaded successfully");

    // Create database connection pool
    let pool = database::create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    // Run migrations automatically
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;
    tracing::info!("Database migrations completed successfully");

    // Initialize image storage
    let image_store = Arc::new(
        ImageStore::new(config.minio.clone())
            .await
            .map_err(|e| anyhow::anyhow!("Failed to initialize image store: {}", e))?,
    );
    tracing::info!(
        "Image store initialized for bucket: {}",
        image_store.bucket_name()
    );

    // Initialize translation client
    let translator: Arc<dyn Translator> = Arc::new(
        GoogleTranslateClient::new(&config.translate)
            .map_err(|e| anyhow::anyhow!("Failed to initialize translate client: {}", e))?,
    );
    tracing::info!("Translate client initialized");

    // Initialize auth services
    let token_service = Arc::new(TokenService::new(pool.clone()));
    let auth_service = Arc::new(AuthService::new(
        pool.clone(),
        Arc::clone(&token_service),
    ));
    tracing::info!("Auth services initialized");

    // Initialize content services
    let category_service = Arc::new(CategoryService::new(
        pool.clone(),
        Arc::clone(&translator),
        Arc::clone(&image_store),
    ));
    let product_service = Arc::new(ProductService::new(
        pool.clone(),
        Arc::clone(&translator),
        Arc::clone(&image_store),
    ));
    let product_image_service = Arc::new(ProductImageService::new(
        pool.clone(),
        Arc::clone(&image_store),
    ));
    let slider_service = Arc::new(SliderService::new(
        pool.clone(),
        Arc::clone(&translator),
        Arc::clone(&image_store),
    ));
    let blog_service = Arc::new(BlogService::new(
        pool.clone(),
        Arc::clone(&translator),
        Arc::clone(&image_store),
    ));
    let company_services = CompanyServices {
        company: Arc::new(CompanyService::new(pool.clone(), Arc::clone(&translator))),
        addresses: Arc::new(CompanyAddressService::new(
            pool.clone(),
            Arc::clone(&translator),
        )),
        images: Arc::new(CompanyImageService::new(
            pool.clone(),
            Arc::clone(&image_store),
        )),
        phones: Arc::new(CompanyPhoneService::new(pool.clone())),
        emails: Arc::new(CompanyEmailService::new(pool.clone())),
    };
    let contact_service = Arc::new(ContactService::new(pool.clone()));
    tracing::info!("Content services initialized");

    // Build application router with dynamic swagger config
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    // Build swagger router
    let swagger = if let Some(credentials) = config.swagger.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        Router::new()
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
            .layer(from_fn(middleware::basic_auth_middleware(Arc::new(
                credentials,
            ))))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
    };

    // Protected routes (require a bearer token)
    let protected_routes = Router::new()
        .merge(auth_routes::protected_routes(Arc::clone(&auth_service)))
        .merge(categories_routes::protected_routes(Arc::clone(
            &category_service,
        )))
        .merge(products_routes::protected_routes(
            Arc::clone(&product_service),
            Arc::clone(&product_image_service),
        ))
        .merge(sliders_routes::protected_routes(Arc::clone(
            &slider_service,
        )))
        .merge(blogs_routes::protected_routes(Arc::clone(&blog_service)))
        .merge(company_routes::protected_routes(company_services.clone()))
        .merge(contacts_routes::protected_routes(Arc::clone(
            &contact_service,
        )))
        .route_layer(axum::middleware::from_fn_with_state(
            Arc::clone(&token_service),
            middleware::auth_middleware,
        ));

    // Simple health check endpoint (no auth required)
    async fn health_check() -> axum::http::StatusCode {
        axum::http::StatusCode::OK
    }
    let health_route = Router::new().route("/health", axum::routing::get(health_check));

    // Public routes (no auth required)
    let public_routes = Router::new()
        .merge(auth_routes::public_routes(auth_service))
        .merge(categories_routes::public_routes(category_service))
        .merge(products_routes::public_routes(
            product_service,
            product_image_service,
        ))
        .merge(sliders_routes::public_routes(slider_service))
        .merge(blogs_routes::public_routes(blog_service))
        .merge(company_routes::public_routes(company_services))
        .merge(contacts_routes::public_routes(contact_service));

    let app = Router::new()
        .merge(swagger)
        .merge(protected_routes)
        .merge(public_routes)
        .merge(health_route)
        // Image uploads need more than the axum default body limit
        .layer(axum::extract::DefaultBodyLimit::max(
            config.app.max_request_body_size,
        ))
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid));

    // Start server
    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    // Use socket2 for TCP listener configuration
    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    socket.set_nodelay(true)?;

    socket.set_recv_buffer_size(256 * 1024)?;
    socket.set_send_buffer_size(256 * 1024)?;

    #[cfg(target_os = "linux")]
    {
        let keepalive = socket2::TcpKeepalive::new()
            .with_time(std::time::Duration::from_secs(60))
            .with_interval(std::time::Duration::from_secs(10))
            .with_retries(3);
        socket.set_tcp_keepalive(&keepalive)?;
    }
    #[cfg(not(target_os = "linux"))]
    {
        let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
        socket.set_tcp_keepalive(&keepalive)?;
    }

    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(65535)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on {}", format!("http://{}", addr));
    tracing::info!(
        "Swagger UI available at {}",
        format!("http://{}/swagger-ui/", addr)
    );

    axum::serve(listener, app).await?;

    Ok(())
}
