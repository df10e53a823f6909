/// Network-level failure while posting an event.
///
/// There is exactly one error kind: DNS, connection and TLS failures are not
/// distinguished. HTTP error statuses are not errors at all — a received
/// response is a success regardless of status.
#[derive(Debug)]
pub struct TransportError {
    message: String,
}

impl TransportError {
    /// Public so that custom [`Transport`](crate::Transport) implementations
    /// can report failures.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for TransportError {}
