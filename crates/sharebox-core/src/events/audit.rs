//! Structured audit notifications and the fire-and-forget audit bus.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use uuid::Uuid;

/// Default buffer size for the audit broadcast channel.
const AUDIT_CHANNEL_CAPACITY: usize = 256;

/// A structured audit notification.
///
/// Emitted on successful sign-up/sign-in/refresh and on authorization
/// decisions. Persisted by the external audit-logging collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Unique event ID.
    pub id: Uuid,
    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
    /// The action performed (e.g. `"auth.sign_in"`).
    pub action: String,
    /// The resource the action targeted, if any.
    pub resource_id: Option<String>,
    /// Who performed the action.
    pub performed_by: String,
    /// Free-form extra context.
    pub metadata: Option<serde_json::Value>,
}

impl AuditEvent {
    /// Create a new audit event.
    pub fn new(action: impl Into<String>, performed_by: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            action: action.into(),
            resource_id: None,
            performed_by: performed_by.into(),
            metadata: None,
        }
    }

    /// Attach the targeted resource id.
    pub fn with_resource(mut self, resource_id: impl Into<String>) -> Self {
        self.resource_id = Some(resource_id.into());
        self
    }

    /// Attach free-form metadata.
    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Broadcast channel carrying audit events to whoever cares to listen.
///
/// `emit` never blocks and never errors: when no consumer is subscribed
/// the event is dropped, which is acceptable for fire-and-forget delivery.
#[derive(Debug, Clone)]
pub struct AuditBus {
    sender: broadcast::Sender<AuditEvent>,
}

impl AuditBus {
    /// Create a new audit bus with the default channel capacity.
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(AUDIT_CHANNEL_CAPACITY);
        Self { sender }
    }

    /// Emit an event. Lack of subscribers is not an error.
    pub fn emit(&self, event: AuditEvent) {
        let _ = self.sender.send(event);
    }

    /// Subscribe to the audit stream.
    pub fn subscribe(&self) -> broadcast::Receiver<AuditEvent> {
        self.sender.subscribe()
    }
}

impl Default for AuditBus {
    fn default() -> Self {
        Self::new()
    }
}
