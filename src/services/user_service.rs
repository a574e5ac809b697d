// ==================== USER SERVICE ====================
// Traduz cada request em uma única operação de documento no MongoDB.
// Nenhuma transação multi-documento; "existe" / "não existe" é o único estado.

use futures::stream::StreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::ReturnDocument;

use crate::database::MongoDB;
use crate::models::User;
use crate::utils::AppError;

const COLLECTION: &str = "users";

/// Inserts a new user and returns it with the id MongoDB assigned.
pub async fn create_user(db: &MongoDB, mut user: User) -> Result<User, AppError> {
    let collection = db.collection::<User>(COLLECTION);

    let result = collection.insert_one(&user).await?;
    user.id = result.inserted_id.as_object_id();

    Ok(user)
}

/// Returns every user in the collection, in store order.
pub async fn list_users(db: &MongoDB) -> Result<Vec<User>, AppError> {
    let collection = db.collection::<User>(COLLECTION);

    let mut cursor = collection.find(doc! {}).await?;
    let mut users = Vec::new();
    while let Some(user) = cursor.next().await {
        users.push(user?);
    }

    Ok(users)
}

/// Replaces every field of the matching user (full replacement, not a merge)
/// and returns the post-update document.
pub async fn update_user(db: &MongoDB, id: &str, replacement: User) -> Result<User, AppError> {
    let object_id = parse_id(id)?;
    let collection = db.collection::<User>(COLLECTION);

    collection
        .find_one_and_replace(doc! { "_id": object_id }, &replacement)
        .return_document(ReturnDocument::After)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {}", id)))
}

/// Removes the matching user and returns its prior contents.
pub async fn delete_user(db: &MongoDB, id: &str) -> Result<User, AppError> {
    let object_id = parse_id(id)?;
    let collection = db.collection::<User>(COLLECTION);

    collection
        .find_one_and_delete(doc! { "_id": object_id })
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {}", id)))
}

// An id that cannot be an ObjectId can match no document, so it is reported
// the same way as a miss.
fn parse_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(|_| AppError::NotFound(format!("user {}", id)))
}
