use crate::error::TransportError;
use crate::types::{CompletionCallback, Outcome};

/// Issues the raw network request for one event and reports the outcome.
///
/// Implementations must not block the caller: `dispatch` returns once the
/// request is handed off, and `on_done` fires later (or never, for a hung
/// request) with the single tagged outcome.
pub trait Transport: Send + Sync {
    fn dispatch(&self, url: &str, body: String, on_done: CompletionCallback);
}

/// HTTP transport backed by ureq.
///
/// Each dispatch runs on its own short-lived thread — sends are independent
/// and fire-and-forget, so completion order may differ from call order. No
/// timeout is set: a request that hangs never completes its callback.
pub struct HttpTransport {
    debug: bool,
}

impl HttpTransport {
    pub fn new(debug: bool) -> Self {
        Self { debug }
    }
}

impl Transport for HttpTransport {
    fn dispatch(&self, url: &str, body: String, on_done: CompletionCallback) {
        let url = url.to_string();
        let debug = self.debug;

        let spawned = std::thread::Builder::new()
            .name("dq0-send".to_string())
            .spawn(move || {
                let outcome = post_json(&url, &body);
                if debug {
                    match &outcome {
                        Outcome::Success(_) => eprintln!("[dq0] Event delivered to {url}"),
                        Outcome::Failure(e) => eprintln!("[dq0] Event delivery failed: {e}"),
                    }
                }
                on_done(outcome);
            });

        // The callback was moved into the closure; a failed spawn loses
        // the event.
        if let Err(e) = spawned {
            if self.debug {
                eprintln!("[dq0] Failed to spawn send thread: {e}");
            }
        }
    }
}

fn post_json(url: &str, body: &str) -> Outcome {
    let result = ureq::post(url)
        .set("Content-type", "application/json; charset=utf-8")
        .send_string(body);

    match result {
        Ok(resp) => read_response(resp),
        // A response was received. HTTP error statuses still count as
        // transport-level success.
        Err(ureq::Error::Status(_, resp)) => read_response(resp),
        Err(ureq::Error::Transport(e)) => {
            Outcome::Failure(TransportError::new(format!("Transport error: {e}")))
        }
    }
}

fn read_response(resp: ureq::Response) -> Outcome {
    match resp.into_string() {
        Ok(text) => Outcome::Success(text),
        Err(e) => Outcome::Failure(TransportError::new(format!(
            "Failed to read response body: {e}"
        ))),
    }
}
