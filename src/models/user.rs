use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Sentinel stored in `image` when no file was uploaded.
pub const NO_IMAGE: &str = "none";

/// User document (armazenado no MongoDB)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub name: Option<String>,

    pub age: Option<i64>,

    pub email: Option<String>,

    pub phone: Option<String>,

    /// Upload path under the scratch directory, or `"none"`
    pub image: String,
}

/// Wire representation returned by the API (ObjectId as hex string)
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct UserResponse {
    pub id: String,
    pub name: Option<String>,
    pub age: Option<i64>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub image: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: user.name,
            age: user.age,
            email: user.email,
            phone: user.phone,
            image: user.image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    fn sample_user(id: Option<ObjectId>) -> User {
        User {
            id,
            name: Some("Alice".to_string()),
            age: Some(30),
            email: Some("a@x.com".to_string()),
            phone: Some("555".to_string()),
            image: NO_IMAGE.to_string(),
        }
    }

    #[test]
    fn test_id_serializes_as_underscore_id() {
        let oid = ObjectId::new();
        let doc = bson::to_document(&sample_user(Some(oid))).unwrap();
        assert_eq!(doc.get_object_id("_id").unwrap(), oid);
        assert!(!doc.contains_key("id"));
    }

    #[test]
    fn test_missing_id_is_skipped() {
        let doc = bson::to_document(&sample_user(None)).unwrap();
        assert!(!doc.contains_key("_id"));
    }

    #[test]
    fn test_omitted_fields_serialize_as_null() {
        // Full-replacement semantics depend on absent fields becoming null
        let user = User {
            id: None,
            name: None,
            age: None,
            email: None,
            phone: None,
            image: NO_IMAGE.to_string(),
        };
        let doc = bson::to_document(&user).unwrap();
        assert_eq!(doc.get("name"), Some(&bson::Bson::Null));
        assert_eq!(doc.get("age"), Some(&bson::Bson::Null));
        assert_eq!(doc.get("image"), Some(&bson::Bson::String("none".to_string())));
    }

    #[test]
    fn test_response_exposes_hex_id() {
        let oid = ObjectId::new();
        let response = UserResponse::from(sample_user(Some(oid)));
        assert_eq!(response.id, oid.to_hex());
        assert_eq!(response.image, "none");

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["id"], serde_json::json!(oid.to_hex()));
        assert_eq!(json["age"], serde_json::json!(30));
    }
}
