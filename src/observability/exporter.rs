//! Span exporter writing one JSON document per batch.

use super::rotation::RotatingFile;
use futures_util::future::BoxFuture;
use opentelemetry::trace::{SpanId, Status, TraceError};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use serde_json::{json, Map, Value as JsonValue};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Writes span batches to a rotating JSON-lines file.
///
/// Each line has the shape
/// `{"resource": {...}, "spans": [{"name", "traceId", "spanId", ...}]}`.
/// Attribute values are written as plain JSON scalars rather than OTLP's
/// tagged wrappers, which keeps the file greppable with `jq`.
#[derive(Debug)]
pub struct JsonLinesExporter {
    file: RotatingFile,
    resource: Resource,
    shut_down: bool,
}

impl JsonLinesExporter {
    /// Creates an exporter appending to `path`, tagging each line with `resource`.
    pub fn new(path: PathBuf, resource: Resource) -> Self {
        Self {
            file: RotatingFile::new(path),
            resource,
            shut_down: false,
        }
    }

    fn batch_to_json(&self, batch: &[SpanData]) -> JsonValue {
        let resource: Map<String, JsonValue> = self
            .resource
            .iter()
            .map(|(key, value)| (key.to_string(), value_to_json(value)))
            .collect();

        json!({
            "resource": resource,
            "spans": batch.iter().map(span_to_json).collect::<Vec<_>>(),
        })
    }
}

impl SpanExporter for JsonLinesExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = if self.shut_down {
            Err(TraceError::from("exporter is shut down"))
        } else {
            let line = self.batch_to_json(&batch).to_string();
            self.file
                .append_line(&line)
                .map_err(|e| TraceError::from(e.to_string()))
        };
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.shut_down = true;
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.resource = resource.clone();
    }
}

fn span_to_json(span: &SpanData) -> JsonValue {
    let parent = (span.parent_span_id != SpanId::INVALID).then(|| format!("{:016x}", span.parent_span_id));
    let (status, message) = match &span.status {
        Status::Unset => ("unset", String::new()),
        Status::Ok => ("ok", String::new()),
        Status::Error { description } => ("error", description.to_string()),
    };
    let events: Vec<JsonValue> = span
        .events
        .iter()
        .map(|event| {
            json!({
                "name": event.name,
                "timeUnixNano": unix_nanos(event.timestamp),
                "attributes": attributes_to_json(&event.attributes),
            })
        })
        .collect();

    json!({
        "name": span.name,
        "traceId": format!("{:032x}", span.span_context.trace_id()),
        "spanId": format!("{:016x}", span.span_context.span_id()),
        "parentSpanId": parent,
        "startTimeUnixNano": unix_nanos(span.start_time),
        "endTimeUnixNano": unix_nanos(span.end_time),
        "attributes": attributes_to_json(&span.attributes),
        "events": events,
        "status": status,
        "statusMessage": message,
    })
}

fn attributes_to_json(attributes: &[KeyValue]) -> JsonValue {
    let map: Map<String, JsonValue> = attributes
        .iter()
        .map(|kv| (kv.key.to_string(), value_to_json(&kv.value)))
        .collect();
    JsonValue::Object(map)
}

fn value_to_json(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => json!(b),
        Value::I64(i) => json!(i),
        Value::F64(f) => json!(f),
        Value::String(s) => json!(s.as_str()),
        // Arrays are rare in our spans; their display form is enough.
        Value::Array(_) => json!(value.to_string()),
    }
}

// Decimal string, as OTLP JSON encodes 64-bit timestamps.
fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos())
        .to_string()
}
