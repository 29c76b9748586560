//! Notification and activity sink contracts.
//!
//! # Responsibility
//! - Define the fire-and-forget collaborator surfaces the core reports
//!   outcomes through (UI toasts, admin audit trail).
//!
//! # Invariants
//! - The core never blocks on, retries through, or reads results from a
//!   sink; a sink call site must stay a single statement.

use log::{error, info, warn};

/// Severity tag for user-facing notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// Fire-and-forget user notification surface (toasts in the running app).
pub trait NotificationSink {
    fn notify(&self, message: &str, severity: Severity);
}

/// Fire-and-forget audit trail for admin-grade actions.
pub trait ActivitySink {
    fn record(&self, action: &str, detail: &str);
}

/// Routes notifications into the structured log.
#[derive(Debug, Default)]
pub struct LogNotificationSink;

impl NotificationSink for LogNotificationSink {
    fn notify(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Error => error!(
                "event=notify module=sink severity={} message={}",
                severity.label(),
                message
            ),
            Severity::Warning => warn!(
                "event=notify module=sink severity={} message={}",
                severity.label(),
                message
            ),
            Severity::Info | Severity::Success => info!(
                "event=notify module=sink severity={} message={}",
                severity.label(),
                message
            ),
        }
    }
}

/// Routes activity records into the structured log.
#[derive(Debug, Default)]
pub struct LogActivitySink;

impl ActivitySink for LogActivitySink {
    fn record(&self, action: &str, detail: &str) {
        info!(
            "event=activity module=sink action={} detail={}",
            action, detail
        );
    }
}

/// Discards everything; for embedding without observers.
#[derive(Debug, Default)]
pub struct NullSink;

impl NotificationSink for NullSink {
    fn notify(&self, _message: &str, _severity: Severity) {}
}

impl ActivitySink for NullSink {
    fn record(&self, _action: &str, _detail: &str) {}
}
