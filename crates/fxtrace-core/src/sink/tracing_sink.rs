use super::{FieldLogger, Level, Record};

/// Target used for every event forwarded by [`TracingSink`].
pub const TARGET: &str = "fxtrace";

// tracing needs field names and the level at compile time, so every field the
// adapter can produce is listed here and absent ones are skipped.
macro_rules! forward {
    ($level:expr, $record:expr) => {{
        let record = $record;
        tracing::event!(
            target: TARGET,
            $level,
            hook = record.field("hook").map(tracing::field::display),
            caller = record.field("caller").map(tracing::field::display),
            function = record.field("function").map(tracing::field::display),
            runtime = record.field("runtime").map(tracing::field::display),
            "type" = record.field("type").map(tracing::field::display),
            trace = record.field("trace").map(tracing::field::display),
            signal = record.field("signal").map(tracing::field::display),
            constructor = record.field("constructor").map(tracing::field::display),
            error = record.error.map(tracing::field::display),
            "{}",
            record.message
        )
    }};
}

/// Sink that forwards records to the `tracing` dispatcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl FieldLogger for TracingSink {
    fn emit(&self, record: &Record<'_>) {
        match record.level {
            Level::Debug => forward!(tracing::Level::DEBUG, record),
            Level::Info => forward!(tracing::Level::INFO, record),
            Level::Error => forward!(tracing::Level::ERROR, record),
        }
    }
}
