//! Lifecycle events emitted by the dependency-injection container.
//!
//! Each variant describes _what happened_ during construction, invocation,
//! start or stop. Events carry errors as data; they are never raised.

mod signal;

pub use signal::Signal;

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

/// An error carried inside an event.
///
/// Shared so events stay cheap to clone and can cross thread boundaries.
pub type EventError = Arc<dyn Error + Send + Sync + 'static>;

/// Build an [`EventError`] from a plain message.
pub fn event_error(message: impl Into<String>) -> EventError {
    let message: String = message.into();
    let boxed: Box<dyn Error + Send + Sync> = message.into();
    Arc::from(boxed)
}

/// All lifecycle notifications the container can report.
///
/// Variants carry owned data so events can be cloned and handed across
/// threads. Errors are attached as data, never returned. Attributes such as
/// `module_name` are kept for callers even where the adapter does not log them.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum Event {
    /// An OnStart hook is about to run.
    OnStartExecuting {
        function_name: String,
        caller_name: String,
    },
    /// An OnStart hook finished, successfully or not.
    OnStartExecuted {
        function_name: String,
        caller_name: String,
        method: String,
        runtime: Duration,
        err: Option<EventError>,
    },
    /// An OnStop hook is about to run.
    OnStopExecuting {
        function_name: String,
        caller_name: String,
    },
    /// An OnStop hook finished, successfully or not.
    OnStopExecuted {
        function_name: String,
        caller_name: String,
        method: String,
        runtime: Duration,
        err: Option<EventError>,
    },
    /// A value was supplied directly to the container.
    Supplied {
        type_name: String,
        module_name: String,
        err: Option<EventError>,
    },
    /// A constructor was registered; one entry per type it produces.
    Provided {
        constructor_name: String,
        output_type_names: Vec<String>,
        module_name: String,
        private: bool,
        err: Option<EventError>,
    },
    /// A registered value was replaced.
    Replaced {
        output_type_names: Vec<String>,
        module_name: String,
        err: Option<EventError>,
    },
    /// A decorator was applied to one or more types.
    Decorated {
        decorator_name: String,
        module_name: String,
        output_type_names: Vec<String>,
        err: Option<EventError>,
    },
    /// A constructor or decorator was run.
    Run {
        name: String,
        kind: String,
        module_name: String,
        err: Option<EventError>,
    },
    /// An invoke function is about to run.
    Invoking {
        function_name: String,
        module_name: String,
    },
    /// An invoke function finished.
    Invoked {
        function_name: String,
        module_name: String,
        trace: String,
        err: Option<EventError>,
    },
    /// The application received a shutdown signal.
    Stopping { signal: Signal },
    /// All stop hooks have run.
    Stopped { err: Option<EventError> },
    /// Startup failed and the container is undoing started hooks.
    RollingBack { start_err: EventError },
    /// Rollback finished.
    RolledBack { err: Option<EventError> },
    /// All start hooks have run.
    Started { err: Option<EventError> },
    /// The custom event logger was constructed.
    LoggerInitialized {
        constructor_name: String,
        err: Option<EventError>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_error_from_message() {
        let err = event_error("boom");
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test_event_clone_shares_error() {
        let event = Event::RollingBack {
            start_err: event_error("boom"),
        };
        let cloned = event.clone();
        match (&event, &cloned) {
            (Event::RollingBack { start_err: a }, Event::RollingBack { start_err: b }) => {
                assert!(Arc::ptr_eq(a, b));
            }
            _ => panic!("Expected RollingBack events"),
        }
    }

    #[test]
    fn test_events_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Event>();
    }
}
