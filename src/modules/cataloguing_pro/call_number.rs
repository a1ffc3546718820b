// LCC call-number normalization, parsing and rendering
//
// Generated:  "PQ 412 G53 1967"
// Displayed:  "PQ412 .G53 1967"
// Both normalize and split back into the same components.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

static LEADING_CLASS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Z]{1,3})(\d)").expect("valid leading class pattern"));

// class, number, optional dotted cutters, optional year
static CALL_NUMBER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^([A-Z]{1,3}) ?(\d{1,4}(?:\.\d+)?) ?(?:\.?([A-Z]\d{1,4}))? ?(?:\.?([A-Z]\d{1,4}))? ?(\d{4})?$",
    )
    .expect("valid call number pattern")
});

/// Structured form of a call number. Either all fields are empty (the input
/// did not parse) or at least `lcc_class` and `lcc_number` are set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CallNumberComponents {
    /// e.g. "QA"
    pub lcc_class: String,
    /// e.g. "76.73"
    pub lcc_number: String,
    /// e.g. "P98", stored without the leading dot
    pub cutter: String,
    pub cutter2: String,
    /// Four digits or empty
    pub year: String,
}

impl CallNumberComponents {
    pub fn is_empty(&self) -> bool {
        self.lcc_class.is_empty()
            && self.lcc_number.is_empty()
            && self.cutter.is_empty()
            && self.cutter2.is_empty()
            && self.year.is_empty()
    }
}

/// Canonical spacing and casing. Empty input is returned unchanged.
///
/// `"  qa76.73   p98 "` becomes `"QA 76.73 P98"`.
pub fn normalize(code: &str) -> String {
    if code.is_empty() {
        return String::new();
    }
    let collapsed = code
        .trim()
        .to_uppercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    LEADING_CLASS_RE.replace(&collapsed, "$1 $2").into_owned()
}

/// Parse a call number into its components. Input that does not look like a
/// call number yields empty components.
pub fn split(code: &str) -> CallNumberComponents {
    let normalized = normalize(code);
    let Some(caps) = CALL_NUMBER_RE.captures(&normalized) else {
        return CallNumberComponents::default();
    };
    let group = |i: usize| {
        caps.get(i)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    };
    CallNumberComponents {
        lcc_class: group(1),
        lcc_number: group(2),
        cutter: group(3),
        cutter2: group(4),
        year: group(5),
    }
}

/// Display form: class and number joined, dotted cutters, then the year.
pub fn build_call_number(parts: &CallNumberComponents) -> String {
    let mut segs = Vec::with_capacity(4);

    let head = format!("{}{}", parts.lcc_class.trim(), parts.lcc_number.trim());
    if !head.is_empty() {
        segs.push(head);
    }
    for cutter in [&parts.cutter, &parts.cutter2] {
        let cutter = cutter.trim().trim_start_matches('.');
        if !cutter.is_empty() {
            segs.push(format!(".{}", cutter));
        }
    }
    let year = parts.year.trim();
    if !year.is_empty() {
        segs.push(year.to_string());
    }

    segs.join(" ")
}

/// Whether the call number parses.
pub fn validate_lcc(code: &str) -> bool {
    !split(code).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(class: &str, number: &str, c1: &str, c2: &str, year: &str) -> CallNumberComponents {
        CallNumberComponents {
            lcc_class: class.to_string(),
            lcc_number: number.to_string(),
            cutter: c1.to_string(),
            cutter2: c2.to_string(),
            year: year.to_string(),
        }
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("qa76.73p98"), "QA 76.73P98");
        assert_eq!(normalize("  lb  1025.3 \t f74   2005 "), "LB 1025.3 F74 2005");
        assert_eq!(normalize("QA 76"), "QA 76");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for code in [
            "qa76.73p98",
            "QA76.73.P98D452023",
            " z  100 ",
            "abcd12",
            "lb1025.3 .f74 2005",
            "straße 12",
        ] {
            let once = normalize(code);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", code);
        }
    }

    #[test]
    fn test_split_unspaced_run() {
        assert_eq!(
            split("QA76.73.P98D452023"),
            parts("QA", "76.73", "P98", "D45", "2023")
        );
    }

    #[test]
    fn test_split_generated_format() {
        assert_eq!(split("LB 276 F33 1970"), parts("LB", "276", "F33", "", "1970"));
        assert_eq!(split("Z 100"), parts("Z", "100", "", "", ""));
        assert_eq!(split("qa 76 2019"), parts("QA", "76", "", "", "2019"));
    }

    #[test]
    fn test_split_display_format() {
        assert_eq!(
            split("QA76.73 .P98 .D45 2023"),
            parts("QA", "76.73", "P98", "D45", "2023")
        );
    }

    #[test]
    fn test_split_rejects_malformed() {
        assert!(split("").is_empty());
        assert!(split("not a call number").is_empty());
        assert!(split("ABCD 12").is_empty());
        assert!(split("QA").is_empty());
        assert!(split("QA .76").is_empty());
        assert!(split("QA 76 P98 D45 E12").is_empty());
    }

    #[test]
    fn test_build_call_number() {
        assert_eq!(
            build_call_number(&parts("QA", "76.73", "P98", "", "2023")),
            "QA76.73 .P98 2023"
        );
        assert_eq!(
            build_call_number(&parts("LB", "102.25", "A12", "B34", "")),
            "LB102.25 .A12 .B34"
        );
        assert_eq!(build_call_number(&parts("Z", "100", "", "", "")), "Z100");
        assert_eq!(build_call_number(&CallNumberComponents::default()), "");
        // Dots already present are not doubled
        assert_eq!(
            build_call_number(&parts("QA", "76", ".P98", "", "")),
            "QA76 .P98"
        );
    }

    #[test]
    fn test_render_parse_round_trip() {
        for code in [
            "QA 76.73 P98 2020",
            "QA76.73.P98D452023",
            "LB 276 F33",
            "Z 100",
            "HM 24.5 A10 B20 1999",
        ] {
            let first = split(code);
            assert!(!first.is_empty(), "{} did not parse", code);
            assert_eq!(split(&build_call_number(&first)), first, "round trip of {}", code);
        }
    }

    #[test]
    fn test_validate_lcc() {
        assert!(validate_lcc("QA 76.73 P98"));
        assert!(!validate_lcc("P98 QA"));
    }
}
