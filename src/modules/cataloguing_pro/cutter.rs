// Cutter and class-number synthesis
//
// Neither is a Cutter-Sanborn or LC table lookup: both derive stable
// placeholder values from the record text so every record can be shelved.

use unicode_normalization::UnicodeNormalization;

use crate::domain::RecordView;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Class number used for records without a title.
pub const DEFAULT_CLASS_NUMBER: &str = "100";

/// Number of title characters summed by [`synthesize_number`].
const NUMBER_PREFIX_CHARS: usize = 12;

/// 64-bit FNV-1a over the UTF-8 bytes of `text`.
///
/// Cutter codes end up on spine labels, so the hash must give the same value
/// in every process and on every platform.
pub fn stable_hash(text: &str) -> u64 {
    text.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Placeholder class number in `100..=999` derived from the title.
pub fn synthesize_number(title: &str) -> String {
    let title = title.trim();
    if title.is_empty() {
        return DEFAULT_CLASS_NUMBER.to_string();
    }
    let sum: u64 = title
        .nfc()
        .take(NUMBER_PREFIX_CHARS)
        .map(|c| u64::from(u32::from(c)))
        .sum();
    (100 + sum % 900).to_string()
}

/// Cutter code `<letter><10..=99>` for a name or title word.
///
/// "Family, Given" names take their letter from the family part. Returns an
/// empty string when the input has no letter to file under.
pub fn cutter_for(word: &str) -> String {
    // Composed and decomposed spellings of a name share one Cutter
    let word: String = word.trim().nfc().collect();
    let word = word.as_str();
    if word.is_empty() {
        return String::new();
    }

    let family = word.split(',').next().unwrap_or_default();
    let Some(letter) = filing_letter(family).or_else(|| filing_letter(word)) else {
        return String::new();
    };

    let number = stable_hash(word) % 90 + 10;
    format!("{}{}", letter, number)
}

// First letter of the text, folded to an uppercase ASCII letter. A first
// letter with no ASCII form gives None; later letters are never used.
fn filing_letter(text: &str) -> Option<char> {
    let first = text.chars().find(|c| c.is_alphabetic())?;
    let folded = match first {
        'Ø' | 'ø' | 'Œ' | 'œ' => 'O',
        'Ł' | 'ł' => 'L',
        'Æ' | 'æ' => 'A',
        'Đ' | 'đ' => 'D',
        'Þ' | 'þ' => 'T',
        'ß' => 'S',
        // NFD puts the base letter first: 'Á' -> 'A' + U+0301
        c => c.nfd().next()?.to_ascii_uppercase(),
    };
    Some(folded).filter(|c| c.is_ascii_uppercase())
}

/// Cutter from the first author, then the publisher, then the title.
pub fn first_author_cutter(record: &RecordView) -> String {
    let source = record
        .first_author()
        .or_else(|| record.publisher_name())
        .unwrap_or(record.title.as_str());
    cutter_for(source)
}

/// Cutter from the first title word with at least three letters.
pub fn second_cutter_from_title(record: &RecordView) -> String {
    record
        .title
        .split_whitespace()
        .map(|w| w.chars().filter(|c| c.is_alphabetic()).collect::<String>())
        .find(|w| w.chars().count() >= 3)
        .map(|w| cutter_for(&w))
        .unwrap_or_default()
}
