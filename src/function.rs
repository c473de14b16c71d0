//! Cloud-function transport: unpack an event envelope, run the shared
//! processing function, wrap the result in `{statusCode, headers, body}`.

use std::io::Read;
use std::path::Path;

use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, error, info};

use crate::error::EventError;
use crate::pipeline;

/// Response envelope expected by the function host.
#[derive(Debug, Serialize)]
pub struct FunctionResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: Value,
    pub body: String,
}

/// Handle one function event. Errors are logged here and propagated so the
/// invocation fails.
pub fn handle_event(event: Value) -> Result<FunctionResponse, EventError> {
    try_handle(event).map_err(|err| {
        error!(error = %err, "exception handling event");
        err
    })
}

fn try_handle(mut event: Value) -> Result<FunctionResponse, EventError> {
    debug!(event = %event);
    patch_forwarded_host(&mut event);

    // Some hosts nest the payload as a JSON string under "body"; others put
    // the fields directly on the event.
    let payload = match event.get("body") {
        Some(Value::String(body)) => serde_json::from_str(body)?,
        Some(_) => return Err(EventError::WrongType("body")),
        None if event.get("sentence").is_some() => event,
        None => return Err(EventError::MissingField("body")),
    };
    apply_nlp(&payload)
}

/// A CDN in front of the function forwards the original host in
/// `X-Forwarded-Host`; move it back into `Host` before processing.
fn patch_forwarded_host(event: &mut Value) {
    let forwarded = event
        .get_mut("headers")
        .and_then(Value::as_object_mut)
        .and_then(|headers| headers.remove("X-Forwarded-Host"));
    let Some(host) = forwarded else { return };

    if let Some(headers) = event.get_mut("headers").and_then(Value::as_object_mut) {
        headers.insert("Host".to_string(), host.clone());
    }
    if let Some(multi) = event
        .get_mut("multiValueHeaders")
        .and_then(Value::as_object_mut)
    {
        multi.insert("Host".to_string(), json!([host]));
    }
    info!(host = %host, "host header patched from X-Forwarded-Host");
}

/// Run the pipeline named by the payload and build the response envelope.
/// Fields are read raw; a missing one fails the invocation.
fn apply_nlp(payload: &Value) -> Result<FunctionResponse, EventError> {
    let sentence = payload
        .get("sentence")
        .ok_or(EventError::MissingField("sentence"))?
        .as_str()
        .ok_or(EventError::WrongType("sentence"))?;
    let nlp_name = payload
        .get("nlp_pipeline")
        .ok_or(EventError::MissingField("nlp_pipeline"))?
        .as_str();
    let known_words: Vec<String> = serde_json::from_value(
        payload
            .get("known_words")
            .ok_or(EventError::MissingField("known_words"))?
            .clone(),
    )?;

    let result = pipeline::apply(sentence, &known_words, nlp_name);
    debug!(processed_words = ?result.processed_words, bag = ?result.bag);

    Ok(FunctionResponse {
        status_code: 200,
        headers: json!({ "Content-Type": "application/json" }),
        body: serde_json::to_string(&result)?,
    })
}

/// Read an event document from a file, or from stdin when the path is "-".
pub fn read_event(path: &str) -> Result<Value, EventError> {
    let raw = if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(Path::new(path))?
    };
    Ok(serde_json::from_str(&raw)?)
}
