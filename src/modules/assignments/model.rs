use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Response for `GET /assignments/{id}`.
///
/// `assignments` is scoped to the requested course; `totalSubmitted` sums
/// the `submitted` counter across every assignment in the store, which is
/// what the dashboard's headline figure shows.
#[derive(Debug, Serialize, ToSchema)]
pub struct AssignmentListResponse {
    pub assignments: Value,
    #[serde(rename = "totalSubmitted")]
    pub total_submitted: i64,
}

/// Body for `PATCH /assignments/{id}`.
///
/// `submitted` is a delta added to the stored counter, defaulting to 0.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct SubmissionUpdate {
    pub submitted: Option<i64>,
}
