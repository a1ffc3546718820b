//! Call Number Service - Pure business logic without HTTP layer
//!
//! The record-management layer calls these when it decides to (re)compute a
//! call number. Nothing here touches storage; persisting the entry and keeping
//! call numbers unique across records is the caller's concern.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{DomainError, RecordView};
use crate::modules::cataloguing_pro::{
    CallNumberComponents, CallNumberGenerator, build_call_number, normalize, sort_key_for, split,
};

/// Source tag of call numbers entered by a cataloguer.
pub const SOURCE_MANUAL: &str = "manual";

/// Everything derived from one call number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CatalogEntry {
    /// Normalized call number as stored
    pub call_number: String,
    /// "manual" or "heuristic"
    pub source: String,
    pub components: CallNumberComponents,
    /// Spine label form, e.g. "QA76.73 .P98 2020"
    pub display: String,
    pub sort_key: String,
    pub number_sort: String,
}

/// Derive the catalog entry for a call number from the given source.
pub fn entry_for_code(code: &str, source: &str) -> CatalogEntry {
    let call_number = normalize(code);
    let components = split(&call_number);
    let display = build_call_number(&components);
    let (sort_key, number_sort) = sort_key_for(&components);

    CatalogEntry {
        call_number,
        source: source.to_string(),
        components,
        display,
        sort_key,
        number_sort,
    }
}

/// Keep a parseable manual call number, otherwise generate one.
pub fn catalogue(
    generator: &CallNumberGenerator,
    record: &RecordView,
    subjects: &str,
    manual: Option<&str>,
) -> CatalogEntry {
    if let Some(code) = manual.map(str::trim).filter(|c| !c.is_empty()) {
        let entry = entry_for_code(code, SOURCE_MANUAL);
        if !entry.components.is_empty() {
            return entry;
        }
        tracing::warn!(
            "Manual call number '{}' for '{}' does not parse, generating one",
            code,
            record.title
        );
    }

    let (code, source) = generator.generate(record, subjects);
    entry_for_code(&code, source)
}

/// Entries for the given call numbers in shelf order. Codes that do not parse
/// are shelved last; ties keep their input order.
pub fn shelf_order(codes: &[String], max_batch: usize) -> Result<Vec<CatalogEntry>, DomainError> {
    if codes.len() > max_batch {
        return Err(DomainError::Validation(format!(
            "{} call numbers submitted, at most {} allowed",
            codes.len(),
            max_batch
        )));
    }

    let mut entries: Vec<CatalogEntry> = codes
        .iter()
        .map(|code| entry_for_code(code, SOURCE_MANUAL))
        .collect();
    entries.sort_by(|a, b| a.sort_key.cmp(&b.sort_key));
    Ok(entries)
}

/// Subject terms as the single text blob the classifier reads.
pub fn subjects_text(subjects: &[String]) -> String {
    subjects
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Split a `;`-separated subjects field ("Educación; Metodología").
pub fn split_subjects(field: &str) -> Vec<String> {
    field
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
