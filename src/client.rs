use crate::app_id;
use crate::endpoint::validate_endpoint;
use crate::transport::{HttpTransport, Transport};
use crate::types::{
    EventPayload, FailureCallback, Options, Outcome, SuccessCallback, SDK_NAME, SDK_VERSION,
};

use std::sync::Mutex;

/// Event name sent by [`Dq0Client::app_started`].
pub const APP_START_EVENT: &str = "app_start";

/// Telemetry client.
///
/// Owns the configured endpoint and the client identifier slot. Each send
/// builds a fresh payload and hands it to the transport; nothing is queued,
/// retried or persisted. Disposition is reported only through the optional
/// per-call callbacks, and an unobserved failure is silently dropped.
pub struct Dq0Client {
    endpoint: String,
    debug: bool,
    // Lazily filled on first send; overwritable at any time.
    app_id: Mutex<Option<String>>,
    transport: Box<dyn Transport>,
}

impl Dq0Client {
    /// Create a client with the given options.
    ///
    /// Validates the endpoint URL; this is the only operation that reports
    /// an error synchronously.
    pub fn new(opts: Options) -> Result<Self, String> {
        let debug = opts.debug;
        Self::with_transport(opts, Box::new(HttpTransport::new(debug)))
    }

    /// Create a client with a custom transport. Used by tests; the trait
    /// seam is also the place to plug in an instrumented transport.
    pub fn with_transport(opts: Options, transport: Box<dyn Transport>) -> Result<Self, String> {
        let endpoint = validate_endpoint(&opts.endpoint)?;
        Ok(Self {
            endpoint,
            debug: opts.debug,
            app_id: Mutex::new(opts.app_id),
            transport,
        })
    }

    /// Overwrite the client identifier unconditionally. No validation of
    /// the identifier's shape is performed.
    pub fn set_app_id(&self, app_id: impl Into<String>) {
        *self.app_id.lock().unwrap() = Some(app_id.into());
    }

    /// The current client identifier, if one has been set or generated.
    pub fn app_id(&self) -> Option<String> {
        self.app_id.lock().unwrap().clone()
    }

    /// Send a tracking event.
    ///
    /// Generates and stores a client identifier if none is set; subsequent
    /// sends reuse it. `params` defaults to an empty object and is embedded
    /// as a JSON-encoded string. Returns immediately once the request is
    /// dispatched; the outcome arrives later via whichever callback matches,
    /// or not at all if that callback was not supplied.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use dq0_sdk::{Dq0Client, Options};
    /// use serde_json::json;
    ///
    /// let client = Dq0Client::new(Options::new()).unwrap();
    /// client.send("some_event", Some(json!({ "some_param": "some-value" })), None, None);
    /// ```
    pub fn send(
        &self,
        event: &str,
        params: Option<serde_json::Value>,
        on_success: Option<SuccessCallback>,
        on_failure: Option<FailureCallback>,
    ) {
        let app_id = {
            let mut slot = self.app_id.lock().unwrap();
            slot.get_or_insert_with(app_id::generate).clone()
        };

        let params = params.unwrap_or_else(|| serde_json::Value::Object(Default::default()));
        let payload = EventPayload {
            event: event.to_string(),
            app_id,
            sdk: SDK_NAME.to_string(),
            version: SDK_VERSION.to_string(),
            params: params.to_string(),
        };

        let body = match serde_json::to_string(&payload) {
            Ok(b) => b,
            Err(e) => {
                // Serialization problems surface through the failure
                // callback, never synchronously.
                if self.debug {
                    eprintln!("[dq0] Failed to serialize payload: {e}");
                }
                if let Some(cb) = on_failure {
                    cb(crate::error::TransportError::new(format!(
                        "JSON marshal failed: {e}"
                    )));
                }
                return;
            }
        };

        if self.debug {
            eprintln!("[dq0] Dispatching event '{event}'");
        }

        let on_done: crate::types::CompletionCallback = Box::new(move |outcome| match outcome {
            Outcome::Success(response) => {
                if let Some(cb) = on_success {
                    cb(response);
                }
            }
            Outcome::Failure(err) => {
                if let Some(cb) = on_failure {
                    cb(err);
                }
            }
        });

        self.transport.dispatch(&self.endpoint, body, on_done);
    }

    /// Send the app-start event.
    ///
    /// If `new_app_id` is provided and non-empty, it replaces the stored
    /// identifier first; otherwise the existing (or lazily generated)
    /// identifier is kept.
    pub fn app_started(
        &self,
        new_app_id: Option<&str>,
        params: Option<serde_json::Value>,
        on_success: Option<SuccessCallback>,
        on_failure: Option<FailureCallback>,
    ) {
        if let Some(id) = new_app_id {
            if !id.is_empty() {
                self.set_app_id(id);
            }
        }
        self.send(APP_START_EVENT, params, on_success, on_failure);
    }
}
