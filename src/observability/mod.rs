//! OpenTelemetry tracing with a local, file-based span exporter.
//!
//! Every store operation, filter pass and event handler opens a `tracing`
//! span. When [`init_tracing`] has been called those spans flow through the
//! OpenTelemetry SDK into a JSON-lines file inside the configured data
//! directory:
//!
//! ```text
//! tracing macros → tracing-opentelemetry → TracerProvider → JsonLinesExporter → filmbox-trace.json
//! ```
//!
//! The trace file rotates at 10 MB and keeps the three most recent backups
//! (`filmbox-trace.json.1` is the newest).
//!
//! Without `init_tracing` the spans cost next to nothing and go nowhere.
//!
//! # Usage
//!
//! ```rust
//! use filmbox::observability::init_tracing;
//! use filmbox::Config;
//!
//! let dir = tempfile::tempdir()?;
//! let config = Config {
//!     data_dir: dir.path().to_path_buf(),
//!     trace_level: Some("debug".to_string()),
//!     ..Config::default()
//! };
//! init_tracing(&config);
//! tracing::debug!("tracing is active");
//! # Ok::<(), std::io::Error>(())
//! ```

mod exporter;
mod init;
mod rotation;

pub use init::{init_tracing, TRACE_FILE_NAME};
