use actix_multipart::form::{text::Text, MultipartForm};
use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;

use crate::{
    database::MongoDB,
    models::{User, UserResponse},
    services::{upload_service, user_service, UserForm},
    utils::{AppConfig, AppError},
};

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct DeleteUserResponse {
    pub message: String,
    #[serde(rename = "deletedUser")]
    pub deleted_user: UserResponse,
}

/// POST /users - Cria usuário com upload opcional de imagem
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_user(
    db: web::Data<MongoDB>,
    config: web::Data<AppConfig>,
    MultipartForm(form): MultipartForm<UserForm>,
) -> impl Responder {
    log::info!("📝 POST /users - Adding user");

    let image = match upload_service::resolve_image(&config.upload_dir, form.image.as_ref()).await
    {
        Ok(image) => image,
        Err(e) => {
            log::error!("❌ Error adding user: {}", e);
            return HttpResponse::InternalServerError().body("Error adding user");
        }
    };

    match user_service::create_user(&db, build_record(form, image)).await {
        Ok(user) => {
            log::info!("✅ User created: {}", user.id.map(|id| id.to_hex()).unwrap_or_default());
            HttpResponse::Created().json(UserResponse::from(user))
        }
        Err(e) => {
            log::error!("❌ Error adding user: {}", e);
            HttpResponse::InternalServerError().body("Error adding user")
        }
    }
}

/// GET /users - Lista todos os usuários
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "List of all users", body = [UserResponse]),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_users(db: web::Data<MongoDB>) -> impl Responder {
    log::info!("📋 GET /users - Listing users");

    match user_service::list_users(&db).await {
        Ok(users) => {
            log::info!("✅ Listed {} users", users.len());
            let users: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
            HttpResponse::Ok().json(users)
        }
        Err(e) => {
            log::error!("❌ Error fetching users: {}", e);
            HttpResponse::InternalServerError().body("Error fetching users")
        }
    }
}

/// PUT /users/{id} - Substitui todos os campos do usuário
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_user(
    db: web::Data<MongoDB>,
    config: web::Data<AppConfig>,
    path: web::Path<String>,
    MultipartForm(form): MultipartForm<UserForm>,
) -> impl Responder {
    let user_id = path.into_inner();
    log::info!("🔧 PUT /users/{} - Updating user", user_id);

    let image = match upload_service::resolve_image(&config.upload_dir, form.image.as_ref()).await
    {
        Ok(image) => image,
        Err(e) => {
            log::error!("❌ Error updating user: {}", e);
            return HttpResponse::InternalServerError().body("Error updating user");
        }
    };

    match user_service::update_user(&db, &user_id, build_record(form, image)).await {
        Ok(user) => {
            log::info!("✅ User updated: {}", user_id);
            HttpResponse::Ok().json(UserResponse::from(user))
        }
        Err(AppError::NotFound(_)) => {
            log::warn!("⚠️ User not found: {}", user_id);
            HttpResponse::NotFound().body("User not found")
        }
        Err(e) => {
            log::error!("❌ Error updating user: {}", e);
            HttpResponse::InternalServerError().body("Error updating user")
        }
    }
}

/// DELETE /users/{id} - Remove usuário
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User deleted", body = DeleteUserResponse),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_user(db: web::Data<MongoDB>, path: web::Path<String>) -> impl Responder {
    let user_id = path.into_inner();
    log::info!("🗑️  DELETE /users/{} - Removing user", user_id);

    match user_service::delete_user(&db, &user_id).await {
        Ok(user) => {
            log::info!("✅ User deleted: {}", user_id);
            HttpResponse::Ok().json(DeleteUserResponse {
                message: "User deleted successfully".to_string(),
                deleted_user: UserResponse::from(user),
            })
        }
        Err(AppError::NotFound(_)) => {
            log::warn!("⚠️ User not found: {}", user_id);
            HttpResponse::NotFound().body("User not found")
        }
        Err(e) => {
            log::error!("❌ Error deleting user: {}", e);
            HttpResponse::InternalServerError().body("Error deleting user")
        }
    }
}

// Text fields pass through as-is; a non-numeric age simply stores null. The
// id is never taken from the body.
fn build_record(form: UserForm, image: String) -> User {
    User {
        id: None,
        name: form.name.map(Text::into_inner),
        age: form.age.and_then(|age| age.into_inner().parse().ok()),
        email: form.email.map(Text::into_inner),
        phone: form.phone.map(Text::into_inner),
        image,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NO_IMAGE;

    fn form(age: Option<&str>) -> UserForm {
        UserForm {
            name: Some(Text("Alice".to_string())),
            age: age.map(|age| Text(age.to_string())),
            email: Some(Text("a@x.com".to_string())),
            phone: None,
            image: None,
        }
    }

    #[test]
    fn test_build_record_parses_age() {
        let user = build_record(form(Some("30")), NO_IMAGE.to_string());
        assert_eq!(user.age, Some(30));
        assert_eq!(user.name.as_deref(), Some("Alice"));
        assert_eq!(user.phone, None);
        assert_eq!(user.image, NO_IMAGE);
        assert!(user.id.is_none());
    }

    #[test]
    fn test_build_record_non_numeric_age_is_null() {
        let user = build_record(form(Some("thirty")), NO_IMAGE.to_string());
        assert_eq!(user.age, None);
    }

    #[test]
    fn test_delete_response_wire_shape() {
        let response = DeleteUserResponse {
            message: "User deleted successfully".to_string(),
            deleted_user: UserResponse::from(build_record(form(None), NO_IMAGE.to_string())),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["message"], "User deleted successfully");
        assert_eq!(json["deletedUser"]["image"], "none");
    }
}
