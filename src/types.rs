use serde::{Deserialize, Serialize};

use crate::error::TransportError;

/// Ingestion endpoint used when `Options::endpoint` is left at its default.
pub const DEFAULT_ENDPOINT: &str = "https://sdk.dq0.io/api/v1/events/";

/// SDK identification sent with every event. The backend keys on these, so
/// they must stay byte-identical across SDK releases.
pub const SDK_NAME: &str = "dq0.sdk.js";
pub const SDK_VERSION: &str = "0.0.1";

/// Callback invoked with the response body on transport-level success.
pub type SuccessCallback = Box<dyn FnOnce(String) + Send>;

/// Callback invoked on transport-level failure.
pub type FailureCallback = Box<dyn FnOnce(TransportError) + Send>;

/// Callback handed to a transport; receives the single tagged outcome.
pub type CompletionCallback = Box<dyn FnOnce(Outcome) + Send>;

/// Disposition of one dispatched event.
///
/// At most one outcome is delivered per dispatch, possibly none (a hung
/// request never completes). Any received response counts as success; the
/// ingestion endpoint is best-effort and HTTP statuses are not interpreted.
#[derive(Debug)]
pub enum Outcome {
    Success(String),
    Failure(TransportError),
}

/// The flat structure transmitted per tracked event.
///
/// `params` is a JSON-serialized string, not a nested object: the payload
/// body carries double-encoded JSON, matching what the backend expects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventPayload {
    pub event: String,
    #[serde(rename = "appID")]
    pub app_id: String,
    pub sdk: String,
    pub version: String,
    pub params: String,
}

/// Configuration for the telemetry client.
pub struct Options {
    /// URL of the ingestion endpoint. Default: DQ0 cloud.
    pub endpoint: String,
    /// Pre-seeded client identifier. `None` generates one lazily on the
    /// first send.
    pub app_id: Option<String>,
    /// Enable debug logging to stderr.
    pub debug: bool,
}

impl Options {
    /// Create options with all defaults: DQ0 cloud endpoint, lazily
    /// generated identifier, no debug output.
    pub fn new() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            app_id: None,
            debug: false,
        }
    }

    /// Create options with a pre-seeded client identifier.
    pub fn with_app_id(app_id: impl Into<String>) -> Self {
        Self {
            app_id: Some(app_id.into()),
            ..Self::new()
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}
