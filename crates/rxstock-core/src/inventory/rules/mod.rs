//! Rule-based row recognition for stock statements.

pub mod names;
pub mod numbers;
pub mod patterns;

pub use names::is_valid_medicine_name;
pub use numbers::{parse_number, parse_numbers, to_quantity, to_value};
pub use patterns::*;

use rust_decimal::Decimal;

/// Row layouts, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowPattern {
    /// Name followed by six or seven space separated numbers.
    Spaced,
    /// Name, two or more spaces, then a run of numbers.
    Padded,
    /// Tab separated columns.
    Tabbed,
}

impl RowPattern {
    /// All patterns in priority order.
    pub const ALL: [RowPattern; 3] = [RowPattern::Spaced, RowPattern::Padded, RowPattern::Tabbed];

    /// Match a trimmed line against this pattern.
    ///
    /// Spaced rows ending in the last column win over rows with trailing text.
    pub fn captures(&self, line: &str) -> Option<RowMatch> {
        let caps = match self {
            RowPattern::Spaced => ROW_SPACED
                .captures(line)
                .or_else(|| ROW_SPACED_OPEN.captures(line)),
            RowPattern::Padded => ROW_PADDED.captures(line),
            RowPattern::Tabbed => ROW_TABBED.captures(line),
        }?;
        let name = caps.get(1)?.as_str().trim().to_string();

        let numbers = match self {
            RowPattern::Spaced => caps
                .iter()
                .skip(2)
                .flatten()
                .map(|m| parse_number(m.as_str()))
                .collect(),
            RowPattern::Padded | RowPattern::Tabbed => {
                caps.get(2).map(|m| parse_numbers(m.as_str())).unwrap_or_default()
            }
        };

        Some(RowMatch {
            pattern: *self,
            name,
            numbers,
        })
    }
}

/// A line matched by one of the row patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowMatch {
    /// Pattern that matched.
    pub pattern: RowPattern,
    /// Trimmed name capture.
    pub name: String,
    /// Numeric columns in order of appearance. A token that does not fit a
    /// [`Decimal`] keeps its slot as `None`.
    pub numbers: Vec<Option<Decimal>>,
}

/// Whether a line contains any header keyword (case-insensitive).
pub fn is_header_line(line: &str) -> bool {
    let upper = line.to_uppercase();
    HEADER_KEYWORDS.iter().any(|keyword| upper.contains(keyword))
}
