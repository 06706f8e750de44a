pub mod assignments;
pub mod auth;
pub mod courses;
pub mod instructors;
pub mod payments;
pub mod quotes;
pub mod reviews;
pub mod sponsors;
pub mod stats;
pub mod users;

pub use self::auth::model::Claims;
