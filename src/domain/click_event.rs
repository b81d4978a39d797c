//! Click event model for asynchronous click tracking.

/// An in-memory click notification passed from the redirect handler to the
/// background worker via a bounded channel.
///
/// Decouples the HTTP response from the counter update and the visit insert:
/// the redirecting caller never waits on either write. Under queue overflow
/// the event is dropped, which is an accepted loss.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub code: String,
    pub caller_ip: Option<String>,
}

impl ClickEvent {
    pub fn new(code: String, caller_ip: Option<String>) -> Self {
        Self { code, caller_ip }
    }
}
