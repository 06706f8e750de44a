//! Course DTOs.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Response for `GET /courses`.
///
/// Two result sets in one body: `courses` holds every accepted course
/// regardless of pagination, `paginatedCourses` holds the requested window
/// over all courses whatever their status. Callers use the first for
/// totals and the second for the grid.
#[derive(Debug, Serialize, ToSchema)]
pub struct CourseListResponse {
    pub courses: Value,
    #[serde(rename = "paginatedCourses")]
    pub paginated_courses: Value,
}

/// Response for `GET /totalCourses`.
#[derive(Debug, Serialize, ToSchema)]
pub struct CourseCount {
    pub count: u64,
}

/// Body for `PATCH /courses/{id}`.
///
/// Every field is optional and applied only when present, so a legitimate
/// zero price or empty description can be written. `numOfTotalEnrollment`
/// is a delta added to the stored counter, not a replacement value.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CourseUpdate {
    pub title: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "numOfTotalEnrollment")]
    pub enrollment: Option<i64>,
}
