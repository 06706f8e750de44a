//! Utility modules for the edumart API.
//!
//! This module contains shared utilities used throughout the application:
//!
//! - [`errors`]: Application error types and handling
//! - [`jwt`]: Access token signing and verification
//! - [`pagination`]: Request pagination utilities

pub mod errors;
pub mod jwt;
pub mod pagination;
