use serde::Serialize;
use utoipa::ToSchema;

/// Response for `GET /stats`.
///
/// Headline figures for the landing page. Learner/teacher totals come
/// from classifying every user document by its `role` field; admins are
/// counted in `totalUsers` only.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_users: u64,
    pub total_courses: u64,
    pub total_learners: u64,
    pub total_teachers: u64,
}
