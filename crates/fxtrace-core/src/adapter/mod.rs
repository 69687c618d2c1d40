//! Event adapter: turns container lifecycle events into structured records.

use std::sync::Arc;
use std::time::Duration;

use crate::events::{Event, EventError};
use crate::sink::{Entry, FieldLogger};

/// The logging capability a container expects from its event logger.
pub trait EventLogger: Send + Sync {
    fn handle(&self, event: &Event);
}

/// Event logger backed by a shared [`FieldLogger`].
#[derive(Clone)]
pub struct Logger {
    sink: Arc<dyn FieldLogger>,
}

impl Logger {
    pub fn new(sink: Arc<dyn FieldLogger>) -> Self {
        Self { sink }
    }

    fn entry(&self) -> Entry<'_> {
        Entry::new(self.sink.as_ref())
    }

    fn hook_executing(&self, hook: &'static str, caller: &str, function: &str) {
        self.entry()
            .with_fields(vec![
                ("hook", hook.into()),
                ("caller", caller.into()),
                ("function", function.into()),
            ])
            .debug("Executing hook");
    }

    fn hook_executed(
        &self,
        hook: &'static str,
        caller: &str,
        function: &str,
        runtime: Duration,
        err: Option<&EventError>,
    ) {
        let entry = self.entry().with_fields(vec![
            ("hook", hook.into()),
            ("caller", caller.into()),
            ("function", function.into()),
            ("runtime", runtime.into()),
        ]);
        match err {
            Some(err) => entry.with_error(&**err).error("Failed to execute hook"),
            None => entry.debug("Executed hook"),
        }
    }

    // Field-less events: the error alone on failure, `ok` decides the level otherwise.
    fn outcome(&self, err: Option<&EventError>, ok: impl FnOnce(Entry<'_>), failed: &str) {
        match err {
            Some(err) => self.entry().with_error(&**err).error(failed),
            None => ok(self.entry()),
        }
    }
}

/// Returns a constructor for [`Logger`]s that all share `sink`.
pub fn new_logger(sink: Arc<dyn FieldLogger>) -> impl Fn() -> Logger + Send + Sync {
    move || Logger::new(Arc::clone(&sink))
}

impl EventLogger for Logger {
    fn handle(&self, event: &Event) {
        match event {
            Event::OnStartExecuting {
                function_name,
                caller_name,
            } => self.hook_executing("OnStart", caller_name, function_name),
            Event::OnStartExecuted {
                function_name,
                caller_name,
                runtime,
                err,
                ..
            } => self.hook_executed(
                "OnStart",
                caller_name,
                function_name,
                *runtime,
                err.as_ref(),
            ),
            Event::OnStopExecuting {
                function_name,
                caller_name,
            } => self.hook_executing("OnStop", caller_name, function_name),
            Event::OnStopExecuted {
                function_name,
                caller_name,
                runtime,
                err,
                ..
            } => self.hook_executed(
                "OnStop",
                caller_name,
                function_name,
                *runtime,
                err.as_ref(),
            ),
            Event::Supplied { type_name, err, .. } => {
                let entry = self.entry().with_field("type", type_name);
                match err {
                    Some(err) => entry.with_error(&**err).error("Failed to supply dependency"),
                    None => entry.debug("supplied dependency"),
                }
            }
            Event::Provided {
                output_type_names,
                err,
                ..
            } => {
                for rtype in output_type_names {
                    self.entry()
                        .with_field("type", rtype)
                        .debug("Provided dependency");
                }
                if let Some(err) = err {
                    self.entry()
                        .with_error(&**err)
                        .error("Error after options were applied");
                }
            }
            Event::Invoking { function_name, .. } => {
                self.entry()
                    .with_field("function", function_name)
                    .debug("Invoking function");
            }
            Event::Invoked {
                function_name,
                trace,
                err,
                ..
            } => {
                let entry = self.entry().with_fields(vec![
                    ("function", function_name.into()),
                    ("trace", trace.into()),
                ]);
                match err {
                    Some(err) => entry.with_error(&**err).error("Failed to invoke function"),
                    None => entry.debug("Invoked function"),
                }
            }
            Event::Stopping { signal } => {
                self.entry()
                    .with_field("signal", signal.to_string())
                    .debug("Stopping");
            }
            Event::Stopped { err } => {
                self.outcome(err.as_ref(), |entry| entry.info("Stopped"), "Failed to stop")
            }
            Event::RollingBack { start_err } => {
                self.entry().with_error(&**start_err).error("Rolling back")
            }
            Event::RolledBack { err } => self.outcome(
                err.as_ref(),
                |entry| entry.debug("Rolled back"),
                "Failed to roll back",
            ),
            Event::Started { err } => {
                self.outcome(err.as_ref(), |entry| entry.info("Started"), "Failed to start")
            }
            Event::LoggerInitialized {
                constructor_name,
                err,
            } => {
                let entry = self.entry().with_field("constructor", constructor_name);
                match err {
                    Some(err) => entry
                        .with_error(&**err)
                        .error("Failed to initialize logger"),
                    None => entry.debug("Initialized logger"),
                }
            }
            Event::Replaced { .. } | Event::Decorated { .. } | Event::Run { .. } => {}
        }
    }
}
