pub mod controller;
pub mod router;
pub mod service;

pub use router::init_quotes_router;
