// Shelf-order sort keys
//
// Layout: CLASS(3)|NUM_INT(4)|NUM_DEC(6)|CUTTER1(5)|CUTTER2(5)|YEAR(4)
// e.g. "QA 76.73 P98 2020" -> "QA_|0076|730000|P0098|_0000|2020"

use once_cell::sync::Lazy;
use regex::Regex;

use super::call_number::CallNumberComponents;

static NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,4})(?:\.(\d+))?$").expect("valid class number pattern"));

static CUTTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\.?([A-Z])(\d{1,4})$").expect("valid cutter pattern"));

const CLASS_WIDTH: usize = 3;
const DECIMAL_WIDTH: usize = 6;
const MISSING_CUTTER: &str = "_0000";
const MISSING_YEAR: &str = "0000";

/// Returns `(sort_key, number_sort)`, where `number_sort` is the padded
/// class number on its own (`"0076.730000"`), kept for debugging orderings.
pub fn build_sort_key(
    lcc_class: &str,
    lcc_number: &str,
    cutter: &str,
    cutter2: &str,
    year: &str,
) -> (String, String) {
    let class: String = lcc_class.trim().to_uppercase().chars().take(CLASS_WIDTH).collect();
    // '_' sorts after 'A'..='Z': "Q" files after "QA", a missing Cutter after any Cutter
    let class = format!("{:_<width$}", class, width = CLASS_WIDTH);

    let (int_part, dec_part) = pack_number(lcc_number);
    let number_sort = format!("{}.{}", int_part, dec_part);

    let sort_key = [
        class,
        int_part,
        dec_part,
        pack_cutter(cutter),
        pack_cutter(cutter2),
        pack_year(year),
    ]
    .join("|");

    (sort_key, number_sort)
}

/// Sort key of already parsed components.
pub fn sort_key_for(parts: &CallNumberComponents) -> (String, String) {
    build_sort_key(
        &parts.lcc_class,
        &parts.lcc_number,
        &parts.cutter,
        &parts.cutter2,
        &parts.year,
    )
}

fn pack_number(number: &str) -> (String, String) {
    let Some(caps) = NUMBER_RE.captures(number.trim()) else {
        return ("0000".to_string(), "0".repeat(DECIMAL_WIDTH));
    };
    let int_part = format!("{:0>4}", &caps[1]);
    let decimals: String = caps
        .get(2)
        .map(|m| m.as_str())
        .unwrap_or_default()
        .chars()
        .take(DECIMAL_WIDTH)
        .collect();
    let dec_part = format!("{:0<width$}", decimals, width = DECIMAL_WIDTH);
    (int_part, dec_part)
}

fn pack_cutter(cutter: &str) -> String {
    let cutter = cutter.trim().to_uppercase();
    match CUTTER_RE.captures(&cutter) {
        Some(caps) => format!("{}{:0>4}", &caps[1], &caps[2]),
        None => MISSING_CUTTER.to_string(),
    }
}

fn pack_year(year: &str) -> String {
    let year = year.trim();
    if !year.is_empty() && year.len() <= 4 && year.bytes().all(|b| b.is_ascii_digit()) {
        format!("{:0>4}", year)
    } else {
        MISSING_YEAR.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::cataloguing_pro::call_number::split;

    fn key(code: &str) -> String {
        sort_key_for(&split(code)).0
    }

    #[test]
    fn test_layout() {
        let (sort_key, number_sort) = build_sort_key("QA", "76.73", "P98", "", "2020");
        assert_eq!(sort_key, "QA_|0076|730000|P0098|_0000|2020");
        assert_eq!(number_sort, "0076.730000");
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let (sort_key, number_sort) = build_sort_key("Z", "", "", "", "");
        assert_eq!(sort_key, "Z__|0000|000000|_0000|_0000|0000");
        assert_eq!(number_sort, "0000.000000");

        let (sort_key, _) = build_sort_key("QA", "abc", "98P", ".D4", "20x1");
        assert_eq!(sort_key, "QA_|0000|000000|_0000|D0004|0000");
    }

    #[test]
    fn test_long_decimals_are_truncated() {
        let (_, number_sort) = build_sort_key("QA", "76.7312345", "", "", "");
        assert_eq!(number_sort, "0076.731234");
    }

    #[test]
    fn test_number_orders_numerically() {
        assert!(key("QA 76.73 P98 2020") < key("QA 100 A10 2019"));
        assert!(key("QA 76 P98") < key("QA 76.5 A10"));
        assert!(key("QA 76.5") < key("QA 76.73"));
    }

    #[test]
    fn test_tie_breakers() {
        assert!(key("QA 76 A10 2020") < key("QA 76 B10 2019"));
        assert!(key("QA 76 A10 B20") < key("QA 76 A10 C05"));
        assert!(key("QA 76 A10 B20 2019") < key("QA 76 A10 B20 2020"));
    }

    #[test]
    fn test_class_orders_first() {
        assert!(key("BF 999 Z99") < key("LB 100 A10"));
        assert!(key("LB 100") < key("QA 1"));
    }

    #[test]
    fn test_padding_sorts_after_letters() {
        assert!(key("QA 76") < key("Q 1"));
        assert!(key("QA 76 P98") < key("QA 76"));
        assert!(key("Z 100") < key("not a call number"));
    }
}
