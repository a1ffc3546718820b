// Professional Cataloguing Module
// Handles LCC classification, call-number generation, parsing and shelf ordering

pub mod call_number;
pub mod classification;
pub mod cutter;
pub mod generator;
pub mod sort_key;

pub use call_number::{CallNumberComponents, build_call_number, normalize, split, validate_lcc};
pub use classification::{ClassificationEntry, ClassificationTable, FALLBACK_CLASS, classify};
pub use cutter::{
    cutter_for, first_author_cutter, second_cutter_from_title, stable_hash, synthesize_number,
};
pub use generator::{CallNumberGenerator, SOURCE_HEURISTIC, generate};
pub use sort_key::{build_sort_key, sort_key_for};

pub fn init() {
    tracing::info!(
        "Initializing Professional Cataloguing Module (classification table {})...",
        ClassificationTable::builtin().version
    );
}
