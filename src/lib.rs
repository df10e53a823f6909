//! DQ0 telemetry SDK
//!
//! Assembles flat JSON event payloads and fires best-effort HTTP POSTs to
//! the DQ0 ingestion endpoint. Each send is independent and fire-and-forget:
//! no batching, no retry, no persistence. The outcome of a send is reported
//! through optional per-call callbacks and silently dropped otherwise.

mod app_id;
mod client;
mod endpoint;
mod error;
mod transport;
mod types;

pub use app_id::{generate as generate_app_id, APP_ID_LEN};
pub use client::{Dq0Client, APP_START_EVENT};
pub use endpoint::validate_endpoint;
pub use error::TransportError;
pub use transport::{HttpTransport, Transport};
pub use types::{
    CompletionCallback, EventPayload, FailureCallback, Options, Outcome, SuccessCallback,
    DEFAULT_ENDPOINT, SDK_NAME, SDK_VERSION,
};
