//! Transient user notifications (toasts)
//!
//! Every HTTP call may publish a notification through a [`NotificationSink`].
//! The default sink, [`NotificationStore`], keeps only the latest one: a new
//! notification replaces whatever was shown before, with no queueing.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// Fixed message for successful write operations
pub const SUCCESS_MESSAGE: &str = "Operação realizada com sucesso!";

/// Prefix of every error notification
pub const ERROR_PREFIX: &str = "Erro: Ação não concluída!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Info,
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Info => "info",
            Severity::Warning => "warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(rename = "mensagem")]
    pub message: String,
    #[serde(rename = "tipoMensagem")]
    pub severity: Severity,
    #[serde(rename = "visibilidade")]
    pub visible: bool,
}

impl Notification {
    pub fn success() -> Self {
        Self {
            message: SUCCESS_MESSAGE.to_string(),
            severity: Severity::Success,
            visible: true,
        }
    }

    /// Error toast embedding whatever message the server supplied
    pub fn error(detail: Option<&str>) -> Self {
        let message = match detail {
            Some(detail) if !detail.is_empty() => format!("{} {}", ERROR_PREFIX, detail),
            _ => ERROR_PREFIX.to_string(),
        };
        Self {
            message,
            severity: Severity::Error,
            visible: true,
        }
    }
}

/// Destination of notifications raised by the HTTP layer
#[cfg_attr(test, mockall::automock)]
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Last-write-wins notification state shared by the views
#[derive(Clone)]
pub struct NotificationStore {
    sender: Arc<watch::Sender<Option<Notification>>>,
}

impl NotificationStore {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(None);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// The notification currently held, if any
    pub fn current(&self) -> Option<Notification> {
        self.sender.borrow().clone()
    }

    /// Watch for replacements of the current notification
    pub fn subscribe(&self) -> watch::Receiver<Option<Notification>> {
        self.sender.subscribe()
    }

    /// Hide the current notification, keeping its content
    pub fn dismiss(&self) {
        self.sender.send_if_modified(|current| match current {
            Some(n) if n.visible => {
                n.visible = false;
                true
            }
            _ => false,
        });
    }

    pub fn clear(&self) {
        self.sender.send_replace(None);
    }
}

impl Default for NotificationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationSink for NotificationStore {
    fn notify(&self, notification: Notification) {
        tracing::debug!(
            severity = notification.severity.as_str(),
            message = %notification.message,
            "Notification"
        );
        self.sender.send_replace(Some(notification));
    }
}
