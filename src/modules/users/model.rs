//! User DTOs.
//!
//! User documents are schemaless; only the fields this API inspects get
//! typed. Everything else a client sends on registration is stored as-is.

use edumart_store::InsertResult;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use validator::Validate;

/// Role value that grants access to admin-gated routes.
pub const ADMIN_ROLE: &str = "admin";

/// Body for `POST /users`.
///
/// `email` is the only required field; arbitrary profile fields ride along
/// and are persisted untouched. Only presence is checked, and the stored
/// string is the key the account is looked up by.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUser {
    pub email: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body for `PATCH /users/{email}`.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RoleUpdate {
    pub role: String,
}

/// Response for `GET /users/admin/{email}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct AdminStatus {
    pub admin: bool,
}

/// Answer for a registration attempt that matched an existing email.
/// `insertedId` stays in the body, as `null`, so clients can read one shape.
#[derive(Debug, Serialize, ToSchema)]
pub struct DuplicateUser {
    pub message: String,
    #[serde(rename = "insertedId")]
    pub inserted_id: Option<String>,
}

impl DuplicateUser {
    pub fn new() -> Self {
        Self {
            message: "user already exists".to_string(),
            inserted_id: None,
        }
    }
}

impl Default for DuplicateUser {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of a registration attempt.
#[derive(Debug)]
pub enum UserInsert {
    Created(InsertResult),
    AlreadyExists,
}

#[cfg(test)]
mod tests {
    use validator::Validate;

    use super::*;

    #[test]
    fn create_user_keeps_extra_fields() {
        let json = r#"{"email":"ada@edumart.dev","name":"Ada","photoURL":"https://x/a.png"}"#;
        let user: CreateUser = serde_json::from_str(json).unwrap();

        assert_eq!(user.email, "ada@edumart.dev");
        assert_eq!(user.extra["name"], "Ada");
        assert_eq!(user.extra["photoURL"], "https://x/a.png");
    }

    #[test]
    fn create_user_takes_the_email_as_given() {
        // Presence only; the store key is whatever string was registered.
        let user: CreateUser = serde_json::from_str(r#"{"email":"not-an-email"}"#).unwrap();
        assert!(user.validate().is_ok());
        assert_eq!(user.email, "not-an-email");
    }

    #[test]
    fn role_update_takes_the_role_as_given() {
        let update: RoleUpdate = serde_json::from_str(r#"{"role":""}"#).unwrap();
        assert!(update.validate().is_ok());
        assert_eq!(update.role, "");
    }

    #[test]
    fn duplicate_user_serializes_with_null_inserted_id() {
        let value = serde_json::to_value(DuplicateUser::new()).unwrap();
        assert_eq!(value["message"], "user already exists");
        assert!(value["insertedId"].is_null());
    }
}
