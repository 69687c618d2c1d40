use std::sync::{Mutex, MutexGuard};

use super::{FieldLogger, FieldValue, Level, Record};

/// Owned copy of a [`Record`], as kept by [`RecordingSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRecord {
    pub level: Level,
    pub message: String,
    pub fields: Vec<(String, FieldValue)>,
    /// The error's `Display` output, if one was attached.
    pub error: Option<String>,
}

impl CapturedRecord {
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn field_names(&self) -> Vec<String> {
        self.fields.iter().map(|(key, _)| key.clone()).collect()
    }
}

impl From<&Record<'_>> for CapturedRecord {
    fn from(record: &Record<'_>) -> Self {
        Self {
            level: record.level,
            message: record.message.to_string(),
            fields: record
                .fields
                .iter()
                .map(|(key, value)| (key.to_string(), value.clone()))
                .collect(),
            error: record.error.map(|e| e.to_string()),
        }
    }
}

/// In-memory sink that keeps every record it receives, in arrival order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    records: Mutex<Vec<CapturedRecord>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all records captured so far.
    pub fn records(&self) -> Vec<CapturedRecord> {
        self.lock().clone()
    }

    /// Drain captured records.
    pub fn take(&self) -> Vec<CapturedRecord> {
        std::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panic while holding the lock cannot leave the Vec half-written.
    fn lock(&self) -> MutexGuard<'_, Vec<CapturedRecord>> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl FieldLogger for RecordingSink {
    fn emit(&self, record: &Record<'_>) {
        self.lock().push(CapturedRecord::from(record));
    }
}
