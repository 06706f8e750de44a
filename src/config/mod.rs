//! Configuration modules for the edumart API.
//!
//! Each submodule owns one aspect of configuration, loaded from
//! environment variables at startup. Required variables fail fast with a
//! panic; optional ones carry development defaults.
//!
//! # Modules
//!
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`jwt`]: Access token signing configuration
//! - [`payment`]: Payment processor credentials
//! - [`store`]: Document store connection initialization
//!
//! # Environment Variables
//!
//! See each submodule for specific variable names and their defaults.

pub mod cors;
pub mod jwt;
pub mod payment;
pub mod store;
