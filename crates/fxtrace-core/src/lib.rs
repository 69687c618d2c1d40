//! fxtrace-core: structured logging for dependency-injection lifecycle events
//!
//! The container reports construction, invocation, start and stop as typed
//! [`Event`]s. A [`Logger`] maps each one to a fixed set of log records on a
//! shared [`FieldLogger`] sink.
//!
//! # Main Entry Points
//!
//! - [`adapter`] - The event logger and its constructor factory
//! - [`events`] - Lifecycle event model
//! - [`sink`] - Sink trait plus `tracing` and in-memory backends
//! - [`config`] - Logging configuration
//! - [`logging`] - Subscriber setup

pub mod adapter;
pub mod config;
pub mod errors;
pub mod events;
pub mod logging;
pub mod sink;

// Re-export commonly used types at crate root for convenience
pub use adapter::{EventLogger, Logger, new_logger};
pub use config::{LogFormat, LoggingConfig};
pub use errors::{ConfigError, FxtraceError, LoggingError};
pub use events::{Event, EventError, Signal, event_error};
pub use sink::{FieldLogger, Level, RecordingSink, TracingSink};

// Re-export logging initialization
pub use logging::{build_subscriber, init_logging};
