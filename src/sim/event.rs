use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};
use std::time::{SystemTime, UNIX_EPOCH};

// ---------------------------------------------------------------------------
// Event
// ---------------------------------------------------------------------------

/// An immutable record of one notable state change.
/// Two events are equal iff both timestamp and description match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Event {
    timestamp: SystemTime,
    description: String,
}

impl Event {
    /// Stamp `description` with the current clock reading.
    pub fn new(description: impl Into<String>) -> Self {
        Self::at(SystemTime::now(), description)
    }

    pub fn at(timestamp: SystemTime, description: impl Into<String>) -> Self {
        Self { timestamp, description: description.into() }
    }

    pub fn timestamp(&self) -> SystemTime {
        self.timestamp
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Milliseconds since the Unix epoch (0 for clocks set before it).
    pub fn unix_millis(&self) -> u128 {
        self.timestamp
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.unix_millis(), self.description)
    }
}

// ---------------------------------------------------------------------------
// Event log
// ---------------------------------------------------------------------------

pub const CLEARED: &str = "Event log cleared.";

/// Append-only audit trail shared by every component that mutates domain
/// state. Cheap to share: hand out clones of the `Arc`.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Mutex<Vec<Event>>,
}

static SHARED: OnceLock<Arc<EventLog>> = OnceLock::new();

impl EventLog {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// The process-wide log, created on first call.
    pub fn shared() -> Arc<Self> {
        SHARED.get_or_init(EventLog::new).clone()
    }

    pub fn log_event(&self, description: impl Into<String>) {
        let event = Event::new(description);
        tracing::info!(event = %event.description, "event logged");
        self.lock().push(event);
    }

    /// Snapshot of the log, oldest first. Re-iterating yields the same
    /// sequence until the next append or clear.
    pub fn iter(&self) -> std::vec::IntoIter<Event> {
        self.events().into_iter()
    }

    pub fn events(&self) -> Vec<Event> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drop every event, leaving a single clear marker.
    pub fn clear(&self) {
        let mut events = self.lock();
        events.clear();
        events.push(Event::new(CLEARED));
        tracing::info!("event log cleared");
    }

    // A panic while holding the lock cannot leave the Vec half-written,
    // so a poisoned mutex is safe to keep using.
    fn lock(&self) -> MutexGuard<'_, Vec<Event>> {
        self.events.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl IntoIterator for &EventLog {
    type Item = Event;
    type IntoIter = std::vec::IntoIter<Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
