use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use edumart_store::{DeleteResult, InsertResult, UpdateResult};

use crate::modules::assignments::model::{AssignmentListResponse, SubmissionUpdate};
use crate::modules::auth::model::TokenResponse;
use crate::modules::courses::model::{CourseCount, CourseListResponse, CourseUpdate};
use crate::modules::instructors::model::StatusUpdate;
use crate::modules::payments::model::ClientSecretResponse;
use crate::modules::stats::model::StatsResponse;
use crate::modules::users::model::{AdminStatus, DuplicateUser, RoleUpdate};
use crate::utils::errors::ErrorResponse;
use crate::utils::pagination::PageParams;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::issue_jwt,
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::get_user,
        crate::modules::users::controller::get_admin_status,
        crate::modules::users::controller::create_user,
        crate::modules::users::controller::update_user_role,
        crate::modules::instructors::controller::get_instructors,
        crate::modules::instructors::controller::get_instructor,
        crate::modules::instructors::controller::create_instructor,
        crate::modules::instructors::controller::update_instructor_status,
        crate::modules::courses::controller::list_courses,
        crate::modules::courses::controller::count_courses,
        crate::modules::courses::controller::get_course,
        crate::modules::courses::controller::get_courses_by_owner,
        crate::modules::courses::controller::create_course,
        crate::modules::courses::controller::update_course,
        crate::modules::courses::controller::delete_course,
        crate::modules::assignments::controller::get_assignments,
        crate::modules::assignments::controller::create_assignment,
        crate::modules::assignments::controller::update_assignment_submissions,
        crate::modules::payments::controller::get_payments,
        crate::modules::payments::controller::create_payment,
        crate::modules::payments::controller::create_payment_intent,
        crate::modules::reviews::controller::get_reviews,
        crate::modules::reviews::controller::get_course_reviews,
        crate::modules::reviews::controller::create_review,
        crate::modules::sponsors::controller::get_sponsors,
        crate::modules::quotes::controller::get_quotes,
        crate::modules::stats::controller::get_stats,
    ),
    components(
        schemas(
            TokenResponse,
            AdminStatus,
            DuplicateUser,
            RoleUpdate,
            StatusUpdate,
            CourseListResponse,
            CourseCount,
            CourseUpdate,
            AssignmentListResponse,
            SubmissionUpdate,
            ClientSecretResponse,
            StatsResponse,
            InsertResult,
            UpdateResult,
            DeleteResult,
            PageParams,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Access token issuance"),
        (name = "Users", description = "User registration and role management"),
        (name = "Instructors", description = "Instructor directory endpoints"),
        (name = "Courses", description = "Course catalogue and enrollment endpoints"),
        (name = "Assignments", description = "Assignment and submission endpoints"),
        (name = "Payments", description = "Payment intents and payment records"),
        (name = "Reviews", description = "Course review endpoints"),
        (name = "Sponsors", description = "Sponsor listing"),
        (name = "Quotes", description = "Quote listing"),
        (name = "Stats", description = "Marketplace statistics")
    ),
    info(
        title = "edumart API",
        version = "0.1.0",
        description = "REST backend for the edumart course marketplace, built with Rust, Axum, and MongoDB.",
        contact(
            name = "API Support",
            email = "support@edumart.dev"
        ),
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
