// Call-number assembly from record metadata

use std::sync::Arc;

use once_cell::sync::Lazy;

use super::classification::{ClassificationTable, FALLBACK_CLASS};
use super::cutter::{cutter_for, first_author_cutter, second_cutter_from_title, synthesize_number};
use crate::domain::RecordView;

/// Source tag of call numbers derived by [`generate`].
pub const SOURCE_HEURISTIC: &str = "heuristic";

static DEFAULT_GENERATOR: Lazy<CallNumberGenerator> = Lazy::new(CallNumberGenerator::default);

/// Derives call numbers against a classification table.
#[derive(Debug, Clone)]
pub struct CallNumberGenerator {
    table: Arc<ClassificationTable>,
    /// Append the title Cutter as a second Cutter
    title_cutter: bool,
}

impl Default for CallNumberGenerator {
    fn default() -> Self {
        Self::new(Arc::new(ClassificationTable::builtin().clone()))
    }
}

impl CallNumberGenerator {
    pub fn new(table: Arc<ClassificationTable>) -> Self {
        Self {
            table,
            title_cutter: false,
        }
    }

    pub fn with_title_cutter(mut self, enabled: bool) -> Self {
        self.title_cutter = enabled;
        self
    }

    pub fn table(&self) -> &ClassificationTable {
        &self.table
    }

    /// Class from the subjects, else from the rest of the record's text.
    pub fn class_for(&self, record: &RecordView, subjects: &str) -> String {
        let class = self.table.classify(subjects);
        if class != FALLBACK_CLASS {
            return class;
        }
        self.table.classify(&record.descriptive_text())
    }

    /// Generated call number, e.g. `"PQ 412 G53 1967"`, and its source tag.
    ///
    /// Always produces a code: an empty record gets `"Z 100"`.
    pub fn generate(&self, record: &RecordView, subjects: &str) -> (String, &'static str) {
        let class = self.class_for(record, subjects);
        let number = synthesize_number(&record.title);

        let mut cutter = first_author_cutter(record);
        if cutter.is_empty() {
            cutter = cutter_for(&record.title);
        }

        let mut parts = vec![class, number];
        if !cutter.is_empty() {
            parts.push(cutter.clone());
        }
        if self.title_cutter {
            let cutter2 = second_cutter_from_title(record);
            if !cutter2.is_empty() && cutter2 != cutter {
                parts.push(cutter2);
            }
        }
        if let Some(year) = record.year() {
            parts.push(year);
        }

        let code = parts.join(" ");
        tracing::debug!("Generated call number '{}' for '{}'", code, record.title);
        (code, SOURCE_HEURISTIC)
    }
}

/// Generate with the built-in table and a single Cutter.
pub fn generate(record: &RecordView, subjects: &str) -> (String, &'static str) {
    DEFAULT_GENERATOR.generate(record, subjects)
}
