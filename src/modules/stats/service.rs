use edumart_store::bson::{Document, doc};
use edumart_store::{DocumentStore, FindQuery};

use crate::modules::stats::model::StatsResponse;
use crate::utils::errors::AppError;

const USERS: &str = "users";
const COURSES: &str = "courses";

const TEACHER_ROLE: &str = "Teacher";
const ADMIN_ROLE: &str = "admin";

pub struct StatsService;

impl StatsService {
    /// Scans the user collection and classifies each document by role.
    ///
    /// A user with no role, or any role other than `Teacher` and `admin`,
    /// counts as a learner. The course figure reuses the same estimated
    /// count `GET /totalCourses` reports.
    pub async fn get_stats(store: &dyn DocumentStore) -> Result<StatsResponse, AppError> {
        let users = store
            .find(USERS, doc! {}, FindQuery::all())
            .await
            .map_err(AppError::store)?;

        let total_teachers = users.iter().filter(|user| has_role(user, TEACHER_ROLE)).count() as u64;
        let total_admins = users.iter().filter(|user| has_role(user, ADMIN_ROLE)).count() as u64;
        let total_users = users.len() as u64;
        let total_learners = total_users - total_teachers - total_admins;

        let total_courses = store.count(COURSES).await.map_err(AppError::store)?;

        Ok(StatsResponse {
            total_users,
            total_courses,
            total_learners,
            total_teachers,
        })
    }
}

fn has_role(user: &Document, role: &str) -> bool {
    user.get_str("role").is_ok_and(|value| value == role)
}
