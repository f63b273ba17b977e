//! Telemetry port.
//!
//! Dialog steps report coarse events (step entered, date resolved) to a
//! sink. The sink is constructor-supplied with a no-op default, so callers
//! that do not care about telemetry pay nothing.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DialogId, Timestamp};

/// A telemetry event emitted by a dialog step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogEvent {
    /// Event name, snake_case.
    pub name: String,
    /// The dialog instance that produced the event.
    pub dialog_id: DialogId,
    /// When the event occurred.
    pub occurred_at: Timestamp,
    /// Free-form string properties.
    pub properties: HashMap<String, String>,
}

impl DialogEvent {
    /// Creates an event stamped with the current time.
    pub fn new(name: impl Into<String>, dialog_id: DialogId) -> Self {
        Self {
            name: name.into(),
            dialog_id,
            occurred_at: Timestamp::now(),
            properties: HashMap::new(),
        }
    }

    /// Adds a property to the event.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

/// Port for telemetry sinks.
pub trait TelemetrySink: Send + Sync {
    /// Records one event. Implementations must not block the dialog.
    fn track_event(&self, event: DialogEvent);
}

/// Sink that drops every event. Used when no sink is supplied.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTelemetrySink;

impl TelemetrySink for NullTelemetrySink {
    fn track_event(&self, _event: DialogEvent) {}
}
