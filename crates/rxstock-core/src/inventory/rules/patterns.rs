//! Regex patterns for stock statement rows.

use lazy_static::lazy_static;
use regex::Regex;

/// Substrings that mark a line as a table header.
pub const HEADER_KEYWORDS: &[&str] = &[
    "ITEM", "NAME", "MEDICINE", "DRUG", "S.NO", "SR.NO", "OPENING", "PURCHASE", "SALES",
    "CLOSING", "QTY", "QUANTITY",
];

lazy_static! {
    // Names are lazy in all row patterns: the shortest name that leaves a valid
    // numeric tail wins, so strengths like "500MG" stay with the name and no
    // column is swallowed into it.

    // Name followed by six or seven space separated numbers
    pub static ref ROW_SPACED: Regex = Regex::new(
        r"^([A-Z][A-Z0-9\s\-.()/]{2,49}?)\s+([0-9]+(?:\.[0-9]+)?)\s+([0-9]+(?:\.[0-9]+)?)\s+([0-9]+(?:\.[0-9]+)?)\s+([0-9]+(?:\.[0-9]+)?)\s+([0-9]+(?:\.[0-9]+)?)\s+([0-9]+(?:\.[0-9]+)?)(?:\s+([0-9]+(?:\.[0-9]+)?))?\s*$"
    ).unwrap();

    // Same columns followed by trailing text such as a unit
    pub static ref ROW_SPACED_OPEN: Regex = Regex::new(
        r"^([A-Z][A-Z0-9\s\-.()/]{2,49}?)\s+([0-9]+(?:\.[0-9]+)?)\s+([0-9]+(?:\.[0-9]+)?)\s+([0-9]+(?:\.[0-9]+)?)\s+([0-9]+(?:\.[0-9]+)?)\s+([0-9]+(?:\.[0-9]+)?)\s+([0-9]+(?:\.[0-9]+)?)(?:\s+([0-9]+(?:\.[0-9]+)?))?\b"
    ).unwrap();

    // Name, a gap of two or more spaces, then a run of numbers
    pub static ref ROW_PADDED: Regex = Regex::new(
        r"^([A-Z][A-Z0-9\s\-.()/]{2,49}?)\s{2,}([0-9\s.]+)$"
    ).unwrap();

    // Tab separated columns
    pub static ref ROW_TABBED: Regex = Regex::new(
        r"^([A-Z][A-Z0-9\s\-.()/]{2,49}?)\t+([0-9\t.]+)$"
    ).unwrap();

    pub static ref NUMBER: Regex = Regex::new(
        r"[0-9]+(?:\.[0-9]+)?"
    ).unwrap();

    pub static ref NUMERIC_ONLY: Regex = Regex::new(
        r"^[0-9]+\.?[0-9]*$"
    ).unwrap();
}
