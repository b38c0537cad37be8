//! Subscriber setup.

use super::exporter::JsonLinesExporter;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// File name of the trace log inside `Config::data_dir`.
pub const TRACE_FILE_NAME: &str = "filmbox-trace.json";

const SERVICE_NAME: &str = "FilmBox";

/// Installs the global tracing subscriber.
///
/// The filter directive comes from `config.trace_level` and defaults to
/// `"info"`; any `EnvFilter` directive such as `"filmbox=trace"` is accepted.
///
/// Tracing is optional. If the data directory cannot be created the function
/// returns without installing anything, and only the first call in a process
/// installs a subscriber.
///
/// # Parameters
///
/// * `config` - Supplies `trace_level` and the `data_dir` holding
///   [`TRACE_FILE_NAME`]
///
/// # Example
///
/// ```rust
/// use filmbox::observability::{init_tracing, TRACE_FILE_NAME};
/// use filmbox::Config;
///
/// let dir = tempfile::tempdir()?;
/// let config = Config {
///     data_dir: dir.path().join("traces"),
///     trace_level: Some("filmbox=debug".to_string()),
///     ..Config::default()
/// };
/// init_tracing(&config);
/// assert!(config.data_dir.is_dir());
/// assert_eq!(TRACE_FILE_NAME, "filmbox-trace.json");
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn init_tracing(config: &Config) {
    let directive = config.trace_level.as_deref().unwrap_or("info");

    if std::fs::create_dir_all(&config.data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let exporter = JsonLinesExporter::new(config.data_dir.join(TRACE_FILE_NAME), resource.clone());

    let provider = TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build();

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(directive))
        .with(OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME)));

    let _ = subscriber.try_init();
}
