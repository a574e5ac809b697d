mod api;
mod database;
mod models;
mod services;
mod utils;

use actix_cors::Cors;
use actix_files::Files;
use actix_multipart::form::MultipartFormConfig;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use utils::AppConfig;

const BODY_LIMIT: usize = 10 * 1024 * 1024; // 10 MB

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Get configuration from environment
    let config = AppConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    log::info!("🚀 Starting User Service...");
    log::info!("📊 Database: {}", config.database_url);
    log::info!("📁 Upload dir: {}", config.upload_dir);

    // Scratch directory for uploads (grows without eviction)
    std::fs::create_dir_all(&config.upload_dir)?;

    // Initialize MongoDB connection
    let db = database::MongoDB::new(&config.database_url)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::ConnectionRefused, e.to_string()))?;

    let db_data = web::Data::new(db.clone());
    let config_data = web::Data::new(config.clone());

    log::info!("✅ MongoDB connected successfully");
    log::info!("🌐 Server starting on {}", config.bind_address());
    log::info!(
        "📚 Swagger UI available at: http://{}/swagger-ui/",
        config.bind_address()
    );

    let bind_address = config.bind_address();

    // Start HTTP server
    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&config.allowed_origin)
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        // Generate OpenAPI specification
        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(db_data.clone())
            .app_data(config_data.clone())
            .app_data(web::JsonConfig::default().limit(BODY_LIMIT))
            .app_data(web::FormConfig::default().limit(BODY_LIMIT))
            .app_data(MultipartFormConfig::default().total_limit(BODY_LIMIT))
            .wrap(cors)
            .wrap(Logger::default())
            // Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            // Health check
            .route("/health", web::get().to(api::health::health_check))
            // Users CRUD
            .service(
                web::resource("/users")
                    .route(web::post().to(api::users::create_user))
                    .route(web::get().to(api::users::list_users)),
            )
            .service(
                web::resource("/users/{id}")
                    .route(web::put().to(api::users::update_user))
                    .route(web::delete().to(api::users::delete_user)),
            )
            // Uploaded images served back from the scratch directory
            .service(Files::new("/uploads", &config.upload_dir))
    })
    .bind(bind_address)?
    .run()
    .await
}
