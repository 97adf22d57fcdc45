//! Port for the structured provisioning audit log.
//!
//! Records every edit sent to the remote store in a machine-readable form.
//! This is separate from `tracing`-based diagnostics.

use serde_json::Value;

/// A structured provisioning event.
pub struct ProvisionEvent {
    /// Event type identifier (e.g., "group_edit", "members_added", "paper_failed").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ProvisionEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging provisioning events.
///
/// `log` is synchronous and infallible; a failing audit log never stops
/// provisioning.
pub trait ProvisionLogger: Send + Sync {
    fn log(&self, event: ProvisionEvent);
}

/// No-op implementation for tests and when the audit log is disabled.
pub struct NoProvisionLogger;

impl ProvisionLogger for NoProvisionLogger {
    fn log(&self, _event: ProvisionEvent) {}
}
