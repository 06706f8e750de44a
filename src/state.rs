use std::sync::Arc;

use edumart_store::DocumentStore;

use crate::config::cors::CorsConfig;
use crate::config::jwt::JwtConfig;
use crate::config::payment::PaymentConfig;
use crate::config::store::init_store;
use crate::modules::payments::gateway::{PaymentGateway, StripeGateway};

/// Shared application state handed to every handler.
///
/// The store and the payment gateway are trait objects so tests can swap
/// in substitute backends without rebuilding the router.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub payments: Arc<dyn PaymentGateway>,
    pub jwt: JwtConfig,
    pub cors: CorsConfig,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("cors", &self.cors)
            .finish_non_exhaustive()
    }
}

pub async fn init_app_state() -> AppState {
    AppState {
        store: init_store().await,
        payments: Arc::new(StripeGateway::new(PaymentConfig::from_env())),
        jwt: JwtConfig::from_env(),
        cors: CorsConfig::from_env(),
    }
}
