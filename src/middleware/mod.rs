//! Middleware modules for request processing.
//!
//! This module contains the extractors that gate protected routes.
//!
//! # Modules
//!
//! - [`auth`]: Bearer token authentication
//! - [`role`]: Admin role enforcement on top of authentication
//!
//! # Authentication Flow
//!
//! 1. Client sends a request with an `Authorization: Bearer <token>` header
//! 2. [`auth::AuthUser`] verifies the token and exposes its claims
//! 3. [`role::RequireAdmin`] additionally looks up the caller's user
//!    document and checks its role
//! 4. The handler runs only after every extractor has succeeded
//!
//! Because extractors resolve before the handler body, a rejected token
//! can never race a handler that has already started.
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::AuthUser;
//! use crate::middleware::role::RequireAdmin;
//!
//! // Any valid token
//! async fn list_payments(auth_user: AuthUser) -> impl IntoResponse { /* ... */ }
//!
//! // Valid token whose user document has the admin role
//! async fn list_users(RequireAdmin(auth_user): RequireAdmin) -> impl IntoResponse { /* ... */ }
//! ```

pub mod auth;
pub mod role;
