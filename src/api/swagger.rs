use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Service API",
        version = "1.0.0",
        description = "CRUD API for User records backed by MongoDB. \n\nUsers are created and updated via multipart forms with an optional image upload; uploaded images are served back under `/uploads`."
    ),
    paths(
        // Users
        crate::api::users::create_user,
        crate::api::users::list_users,
        crate::api::users::update_user,
        crate::api::users::delete_user,

        // Health
        crate::api::health::health_check,
    ),
    components(
        schemas(
            crate::models::user::UserResponse,
            crate::api::users::DeleteUserResponse,
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Users", description = "User CRUD endpoints. Create and update accept multipart forms with optional image upload."),
        (name = "Health", description = "Health check endpoint for monitoring service status.")
    )
)]
pub struct ApiDoc;
