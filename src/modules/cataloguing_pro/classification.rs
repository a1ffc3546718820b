// Classification Helpers
//
// Keyword-driven LCC class inference. The table is an illustrative subset
// tuned for an education-focused collection, not the LC schedules.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::domain::DomainError;

/// Class assigned when nothing in the text matches the table.
pub const FALLBACK_CLASS: &str = "Z";

pub const BUILTIN_TABLE_VERSION: &str = "upn-2025.1";

// Order is the match priority: longer, more specific phrases must precede
// the shorter keywords they contain.
const BUILTIN_ENTRIES: &[(&str, &str)] = &[
    // Educación y pedagogía
    ("metodologia de la investigacion", "LB"),
    ("evaluacion educativa", "LB"),
    ("educacion especial", "LC"),
    ("neuroeducacion", "BF"),
    ("psicopedagogia", "LB"),
    ("pedagogia", "LB"),
    ("didactica", "LB"),
    ("curriculo", "LB"),
    ("docencia", "LB"),
    ("educacion", "L"),
    // Ciencias sociales
    ("psicologia", "BF"),
    ("sociologia", "HM"),
    ("antropologia", "GN"),
    ("economia", "HB"),
    // Computación y matemáticas
    ("programacion", "QA"),
    ("computacion", "QA"),
    ("informatica", "QA"),
    ("algoritmos", "QA"),
    ("matematicas", "QA"),
    ("estadistica", "QA"),
    // Lengua y literatura
    ("literatura hispanoamericana", "PQ"),
    ("literatura", "P"),
    ("linguistica", "P"),
    // Historia
    ("historia de mexico", "F"),
    ("historia de america", "F"),
    ("historia", "D"),
];

static BUILTIN: Lazy<ClassificationTable> = Lazy::new(|| ClassificationTable {
    version: BUILTIN_TABLE_VERSION.to_string(),
    entries: BUILTIN_ENTRIES
        .iter()
        .map(|(keyword, code)| ClassificationEntry {
            keyword: keyword.to_string(),
            code: code.to_string(),
        })
        .collect(),
});

/// One keyword phrase and the class it selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationEntry {
    /// Folded form (see [`fold_text`])
    pub keyword: String,
    pub code: String,
}

/// Ordered keyword → class mapping. The first keyword found wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationTable {
    pub version: String,
    pub entries: Vec<ClassificationEntry>,
}

// On-disk form: {"version": "...", "entries": [["keyword", "CODE"], ...]}
#[derive(Debug, Serialize, Deserialize)]
struct TableFile {
    version: String,
    entries: Vec<(String, String)>,
}

impl ClassificationTable {
    pub fn builtin() -> &'static ClassificationTable {
        &BUILTIN
    }

    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let file: TableFile = serde_json::from_str(json)?;
        let mut entries = Vec::with_capacity(file.entries.len());

        for (position, (keyword, code)) in file.entries.into_iter().enumerate() {
            let keyword = fold_text(&keyword);
            if keyword.is_empty() {
                return Err(DomainError::Validation(format!(
                    "entry {} has an empty keyword",
                    position
                )));
            }
            let code = code.trim().to_ascii_uppercase();
            if !is_class_code(&code) {
                return Err(DomainError::Validation(format!(
                    "entry {} ('{}') has invalid class code '{}'",
                    position, keyword, code
                )));
            }
            entries.push(ClassificationEntry { keyword, code });
        }

        Ok(Self {
            version: file.version,
            entries,
        })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let table = Self::from_json(&content)?;
        tracing::info!(
            "Loaded classification table '{}' ({} entries) from {:?}",
            table.version,
            table.entries.len(),
            path
        );
        Ok(table)
    }

    /// Class code for the first keyword contained in `text`, or [`FALLBACK_CLASS`].
    pub fn classify(&self, text: &str) -> String {
        self.lookup(text).unwrap_or(FALLBACK_CLASS).to_string()
    }

    fn lookup(&self, text: &str) -> Option<&str> {
        let folded = fold_text(text);
        if folded.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|entry| folded.contains(entry.keyword.as_str()))
            .map(|entry| entry.code.as_str())
    }
}

/// Classify against the built-in table.
pub fn classify(text: &str) -> String {
    ClassificationTable::builtin().classify(text)
}

/// Strip diacritics, lowercase and collapse whitespace runs.
pub fn fold_text(text: &str) -> String {
    let stripped: String = text.nfd().filter(|c| !is_combining_mark(*c)).collect();
    stripped
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// 1-3 uppercase ASCII letters.
pub fn is_class_code(code: &str) -> bool {
    (1..=3).contains(&code.len()) && code.bytes().all(|b| b.is_ascii_uppercase())
}
