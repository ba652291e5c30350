//! Biblioteka client
//!
//! Typed client for the Biblioteka library management backend: authors,
//! collections, books, readers, loans and reservations over a REST JSON API,
//! with the notification state the views display after each call.

use std::sync::Arc;

pub mod config;
pub mod error;
pub mod http;
pub mod jsog;
pub mod models;
pub mod notification;
pub mod services;
pub mod ui;

pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use http::HttpClient;
pub use notification::{Notification, NotificationSink, NotificationStore, Severity};
pub use services::Services;

/// Client state shared across views
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ClientConfig>,
    pub notifications: NotificationStore,
    pub services: Arc<Services>,
}

impl AppState {
    /// Wire the HTTP client, the notification store and every service
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        let notifications = NotificationStore::new();
        let http = HttpClient::new(&config.api, Arc::new(notifications.clone()))?;

        Ok(Self {
            config: Arc::new(config),
            notifications,
            services: Arc::new(Services::new(http)),
        })
    }
}
