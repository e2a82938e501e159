//! User-visible, non-fatal notifications (toasts).
//!
//! The backend reports the outcome of writes through alert headers; failures
//! of any request end up here too, so the list keeps showing its last data.

use std::collections::VecDeque;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AlertLevel {
    Success,
    Info,
    Warning,
    Error,
}

/// CSS class used to render a notification of the given level.
pub fn alert_level_to_str(level: &AlertLevel) -> &'static str {
    match level {
        AlertLevel::Error => "danger",
        AlertLevel::Warning => "warning",
        AlertLevel::Success => "success",
        AlertLevel::Info => "info",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level: AlertLevel,
    pub message: String,
}

impl Notification {
    pub fn new(level: AlertLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(AlertLevel::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(AlertLevel::Error, message)
    }

    /// Notification for a successful write announced by the
    /// `X-{app}-alert` / `X-{app}-params` headers. Translation keys such as
    /// `app.ticket.created` are expanded into a sentence; plain messages are
    /// used verbatim.
    pub fn from_alert(alert: &str, param: Option<&str>) -> Self {
        let mut segments = alert.rsplitn(3, '.');
        let action = segments.next().unwrap_or_default();
        let entity = segments.next();
        let is_key = segments.next().is_some() && !alert.contains(' ');

        let message = match (is_key, entity, action) {
            (true, Some(entity), "created") => {
                format!("A new {entity} is created with identifier {}", param.unwrap_or("?"))
            }
            (true, Some(entity), "updated") => {
                format!("A {entity} is updated with identifier {}", param.unwrap_or("?"))
            }
            (true, Some(entity), "deleted") => {
                format!("A {entity} is deleted with identifier {}", param.unwrap_or("?"))
            }
            _ => alert.to_string(),
        };

        Self::success(message)
    }
}

/// Queue of notifications waiting to be displayed.
#[derive(Debug, Default, Clone)]
pub struct Notifications {
    pending: VecDeque<Notification>,
}

impl Notifications {
    pub fn push(&mut self, notification: Notification) {
        self.pending.push_back(notification);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.pending.iter()
    }

    /// Removes and returns everything queued so far, oldest first.
    pub fn drain(&mut self) -> Vec<Notification> {
        self.pending.drain(..).collect()
    }
}
