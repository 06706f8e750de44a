use edumart_store::bson::{Document, doc};
use edumart_store::{
    DocumentStore, FindQuery, UpdateResult, documents_to_json, json_to_document,
    optional_document_to_json,
};
use serde_json::Value;

use crate::modules::users::model::{ADMIN_ROLE, CreateUser, UserInsert};
use crate::utils::errors::AppError;

const COLLECTION: &str = "users";

pub struct UserService;

impl UserService {
    pub async fn get_users(store: &dyn DocumentStore) -> Result<Value, AppError> {
        let users = store
            .find(COLLECTION, doc! {}, FindQuery::all())
            .await
            .map_err(AppError::store)?;

        Ok(documents_to_json(&users))
    }

    /// Raw lookup by email, shared with the admin gate.
    pub async fn find_by_email(
        store: &dyn DocumentStore,
        email: &str,
    ) -> Result<Option<Document>, AppError> {
        store
            .find_one(COLLECTION, doc! { "email": email })
            .await
            .map_err(AppError::store)
    }

    pub async fn get_user(store: &dyn DocumentStore, email: &str) -> Result<Value, AppError> {
        let user = Self::find_by_email(store, email).await?;
        Ok(optional_document_to_json(user.as_ref()))
    }

    /// Inserts the user unless the email is already registered.
    ///
    /// The duplicate check and the insert are two store calls with no
    /// uniqueness constraint behind them; a concurrent pair of identical
    /// registrations can still both land. Matches the source contract.
    pub async fn create_user(
        store: &dyn DocumentStore,
        user: CreateUser,
    ) -> Result<UserInsert, AppError> {
        if Self::find_by_email(store, &user.email).await?.is_some() {
            return Ok(UserInsert::AlreadyExists);
        }

        let document = json_to_document(&serde_json::to_value(&user)?).map_err(AppError::store)?;
        let result = store
            .insert_one(COLLECTION, document)
            .await
            .map_err(AppError::store)?;

        Ok(UserInsert::Created(result))
    }

    /// Sets the role on the user matching `email`, inserting a stub
    /// document when none exists.
    pub async fn set_role(
        store: &dyn DocumentStore,
        email: &str,
        role: &str,
    ) -> Result<UpdateResult, AppError> {
        store
            .update_one(
                COLLECTION,
                doc! { "email": email },
                doc! { "$set": { "role": role } },
                true,
            )
            .await
            .map_err(AppError::store)
    }

    pub async fn is_admin(store: &dyn DocumentStore, email: &str) -> Result<bool, AppError> {
        let user = Self::find_by_email(store, email).await?;

        Ok(user
            .as_ref()
            .and_then(|doc| doc.get_str("role").ok())
            .is_some_and(|role| role == ADMIN_ROLE))
    }
}
