use serde::Deserialize;
use utoipa::ToSchema;

/// Body for `PATCH /instructors/{name}`.
///
/// `status` is optional; a body without it acknowledges without touching
/// the store.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct StatusUpdate {
    pub status: Option<String>,
}
