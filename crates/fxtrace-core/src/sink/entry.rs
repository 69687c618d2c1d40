use std::error::Error;

use super::{FieldLogger, FieldValue, Fields, Level, Record};

/// Pending record: fields and an optional error, emitted by a level call.
pub struct Entry<'a> {
    sink: &'a dyn FieldLogger,
    fields: Fields,
    error: Option<&'a (dyn Error + Send + Sync + 'static)>,
}

impl<'a> Entry<'a> {
    pub fn new(sink: &'a dyn FieldLogger) -> Self {
        Self {
            sink,
            fields: Vec::new(),
            error: None,
        }
    }

    pub fn with_field(mut self, name: &'static str, value: impl Into<FieldValue>) -> Self {
        self.fields.push((name, value.into()));
        self
    }

    pub fn with_fields(mut self, fields: Fields) -> Self {
        self.fields.extend(fields);
        self
    }

    pub fn with_error(mut self, error: &'a (dyn Error + Send + Sync + 'static)) -> Self {
        self.error = Some(error);
        self
    }

    pub fn debug(self, message: &str) {
        self.log(Level::Debug, message);
    }

    pub fn info(self, message: &str) {
        self.log(Level::Info, message);
    }

    pub fn error(self, message: &str) {
        self.log(Level::Error, message);
    }

    fn log(self, level: Level, message: &str) {
        self.sink.emit(&Record {
            level,
            message,
            fields: &self.fields,
            error: self.error,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::event_error;
    use crate::sink::RecordingSink;

    #[test]
    fn test_entry_emits_single_record() {
        let sink = RecordingSink::new();
        Entry::new(&sink)
            .with_fields(vec![("hook", "OnStart".into())])
            .with_field("caller", "main.run")
            .debug("Executing hook");

        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].level, Level::Debug);
        assert_eq!(records[0].message, "Executing hook");
        assert_eq!(
            records[0].field_names(),
            vec!["hook".to_string(), "caller".to_string()]
        );
        assert!(records[0].error.is_none());
    }

    #[test]
    fn test_entry_with_error_only() {
        let sink = RecordingSink::new();
        let err = event_error("boom");
        Entry::new(&sink).with_error(&*err).error("Rolling back");

        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert!(records[0].fields.is_empty());
        assert_eq!(records[0].error.as_deref(), Some("boom"));
    }
}
