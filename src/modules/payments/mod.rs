pub mod controller;
pub mod gateway;
pub mod model;
pub mod router;
pub mod service;

pub use gateway::{PaymentGateway, StripeGateway};
pub use model::*;
pub use router::init_payments_router;
