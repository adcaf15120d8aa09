//! Line-oriented parser for pharmaceutical stock statements.

use std::collections::HashSet;

use tracing::{debug, info, trace};

use crate::models::config::ParserConfig;
use crate::models::item::PharmaItem;

use super::rules::{is_header_line, is_valid_medicine_name, to_quantity, to_value, RowMatch, RowPattern};

/// Parser turning extracted text into deduplicated [`PharmaItem`]s.
#[derive(Debug, Clone)]
pub struct PharmaLineParser {
    /// Trimmed lines shorter than this are skipped.
    min_line_length: usize,
    /// Maximum number of unique items returned.
    max_items: usize,
    /// Keep explicit zeros instead of mapping them to `None`.
    keep_zero_values: bool,
}

impl PharmaLineParser {
    /// Create a new parser with default settings.
    pub fn new() -> Self {
        Self::from_config(&ParserConfig::default())
    }

    /// Create a parser from configuration.
    pub fn from_config(config: &ParserConfig) -> Self {
        Self {
            min_line_length: config.min_line_length,
            max_items: config.max_items,
            keep_zero_values: config.keep_zero_values,
        }
    }

    /// Set the maximum number of items returned.
    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items;
        self
    }

    /// Keep zero quantities and values present in the line.
    pub fn with_zero_values(mut self, keep: bool) -> Self {
        self.keep_zero_values = keep;
        self
    }

    /// Parse all lines of `text`.
    ///
    /// Items keep first-seen order; later items whose trimmed, uppercased
    /// name was already seen are dropped before the item cap applies.
    pub fn parse(&self, text: &str) -> Vec<PharmaItem> {
        let lines: Vec<&str> = text.split('\n').collect();
        info!("Analyzing {} lines for pharmaceutical patterns...", lines.len());

        let mut seen = HashSet::new();
        let mut items = Vec::new();

        for line in lines {
            let line = line.trim();
            if self.is_noise(line) {
                continue;
            }

            let Some(item) = self.parse_line(line) else {
                trace!("No pattern matched: {}", line);
                continue;
            };

            if seen.insert(item.dedup_key()) {
                items.push(item);
            } else {
                debug!("Dropping duplicate item {}", item.item_name);
            }
        }

        info!("Extracted {} unique pharmaceutical items", items.len());
        items.truncate(self.max_items);
        items
    }

    /// Parse a single trimmed line into an item.
    ///
    /// Patterns are tried in priority order; a match whose name fails
    /// validation falls through to the next pattern.
    pub fn parse_line(&self, line: &str) -> Option<PharmaItem> {
        RowPattern::ALL
            .iter()
            .filter_map(|pattern| pattern.captures(line))
            .find(|row| is_valid_medicine_name(&row.name))
            .map(|row| self.build_item(row))
    }

    fn is_noise(&self, line: &str) -> bool {
        line.is_empty() || line.chars().count() < self.min_line_length || is_header_line(line)
    }

    fn build_item(&self, row: RowMatch) -> PharmaItem {
        let keep = self.keep_zero_values;
        let column = |i: usize| row.numbers.get(i).copied().flatten();

        PharmaItem {
            opening_qty: to_quantity(column(0), keep),
            purchase_qty: to_quantity(column(1), keep),
            purchase_free: to_quantity(column(2), keep),
            sales_qty: to_quantity(column(3), keep),
            sales_value: to_value(column(4), keep),
            closing_qty: to_quantity(column(5), keep),
            closing_value: to_value(column(6), keep),
            item_name: row.name,
        }
    }
}

impl Default for PharmaLineParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_full_row() {
        let parser = PharmaLineParser::new();
        let items = parser.parse("PARACETAMOL 500MG   10 20 5 15 150.50 10 100.25");

        assert_eq!(
            items,
            vec![PharmaItem {
                item_name: "PARACETAMOL 500MG".to_string(),
                opening_qty: Some(10),
                purchase_qty: Some(20),
                purchase_free: Some(5),
                sales_qty: Some(15),
                sales_value: Some(dec("150.50")),
                closing_qty: Some(10),
                closing_value: Some(dec("100.25")),
            }]
        );
    }

    #[test]
    fn test_row_with_trailing_unit() {
        let parser = PharmaLineParser::new();
        let item = parser
            .parse_line("PARACETAMOL 500MG   10 20 5 15 150.50 10 100.25 TAB")
            .unwrap();

        assert_eq!(item.item_name, "PARACETAMOL 500MG");
        assert_eq!(item.opening_qty, Some(10));
        assert_eq!(item.closing_qty, Some(10));
        assert_eq!(item.closing_value, Some(dec("100.25")));
    }

    #[test]
    fn test_oversized_number_does_not_shift_columns() {
        let parser = PharmaLineParser::new();
        let item = parser
            .parse_line("ASPIRIN 75  1 99999999999999999999999999999999 3")
            .unwrap();

        assert_eq!(item.opening_qty, Some(1));
        assert_eq!(item.purchase_qty, None);
        assert_eq!(item.purchase_free, Some(3));
    }

    #[test]
    fn test_parse_statement() {
        let text = "\
MEDPLUS DISTRIBUTORS
Stock & Sales Statement for March
S.No  Item Name        Opening  Purchase  Free  Sales  Value  Closing  Value
AZITHRAL 500     4 10 0 8 512.00 6 384.00
PAN 40  12 3
DOLO 650\t20\t10\t2
Page 1
";
        let items = PharmaLineParser::new().parse(text);
        let names: Vec<&str> = items.iter().map(|i| i.item_name.as_str()).collect();

        assert_eq!(names, vec!["AZITHRAL 500", "PAN 40", "DOLO 650"]);

        assert_eq!(items[0].purchase_free, None);
        assert_eq!(items[0].sales_value, Some(dec("512.00")));

        assert_eq!(items[1].opening_qty, Some(12));
        assert_eq!(items[1].purchase_qty, Some(3));
        assert_eq!(items[1].sales_qty, None);
        assert_eq!(items[1].closing_value, None);

        assert_eq!(items[2].purchase_free, Some(2));
    }

    #[test]
    fn test_header_line_is_dropped() {
        let parser = PharmaLineParser::new();
        assert!(parser.parse("ITEM NAME OPENING QTY").is_empty());
        assert!(parser.parse("ITEM NAME OPENING QTY 10 20 30 40 50 60").is_empty());
    }

    #[test]
    fn test_short_and_blank_lines_skipped() {
        let parser = PharmaLineParser::new();
        assert!(parser.parse("\n   \nAB 1\n\r\n").is_empty());
    }

    #[test]
    fn test_repeated_rows_keep_first() {
        let text = "\
CROCIN 500   10 20
  crocin 500   99 99
CROCIN 500   30 40
";
        let items = PharmaLineParser::new().parse(text);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].opening_qty, Some(10));
    }

    #[test]
    fn test_duplicates_ignore_case_and_padding() {
        let parser = PharmaLineParser::new();
        let first = parser.parse_line("DOLO 650  1 2").unwrap();
        let second = parser.parse_line("DOLO 650       3 4").unwrap();

        assert_eq!(first.dedup_key(), second.dedup_key());
        assert_eq!(parser.parse("DOLO 650  1 2\n   DOLO 650       3 4   ").len(), 1);
    }

    #[test]
    fn test_cap_applies_after_dedup() {
        let mut text = String::new();
        for i in 0..60 {
            // Each unique row appears twice so pre-dedup matches exceed the cap early
            text.push_str(&format!("MED {}  1 2\n", i));
            text.push_str(&format!("MED {}  3 4\n", i));
        }

        let items = PharmaLineParser::new().parse(&text);

        assert_eq!(items.len(), 50);
        assert_eq!(items[0].item_name, "MED 0");
        assert_eq!(items[49].item_name, "MED 49");
        assert!(items.iter().all(|i| i.opening_qty == Some(1)));
    }

    #[test]
    fn test_custom_cap() {
        let text = "AAA 1  1\nBBB 2  2\nCCC 3  3\n";
        let items = PharmaLineParser::new().with_max_items(2).parse(text);
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_numeric_name_never_emitted() {
        let parser = PharmaLineParser::new();
        assert!(parser.parse("12345  10 20 30").is_empty());
        assert!(parser.parse("12345 10 20 30 40 50 60").is_empty());
    }

    #[test]
    fn test_zero_maps_to_none_by_default() {
        let parser = PharmaLineParser::new();
        let item = parser.parse_line("ASPIRIN 75   0 10 0 5 0.00 5 40.00").unwrap();

        assert_eq!(item.opening_qty, None);
        assert_eq!(item.purchase_free, None);
        assert_eq!(item.sales_value, None);
        assert_eq!(item.closing_qty, Some(5));
    }

    #[test]
    fn test_zero_values_kept_when_enabled() {
        let parser = PharmaLineParser::new().with_zero_values(true);

        let item = parser.parse_line("ASPIRIN 75   0 10 0").unwrap();
        assert_eq!(item.opening_qty, Some(0));
        assert_eq!(item.purchase_qty, Some(10));
        assert_eq!(item.purchase_free, Some(0));
        // Not present in the line
        assert_eq!(item.sales_qty, None);
        assert_eq!(item.closing_value, None);

        let item = parser.parse_line("ASPIRIN 75   0 10 0 5 0.00 5 40.00").unwrap();
        assert_eq!(item.sales_value, Some(dec("0")));
    }

    #[test]
    fn test_quantities_truncate_values_round() {
        let parser = PharmaLineParser::new();
        let item = parser.parse_line("ZINCOVIT  10.9 2.2 1.7 3.99 45.678 7.5 12.005").unwrap();

        assert_eq!(item.opening_qty, Some(10));
        assert_eq!(item.sales_qty, Some(3));
        assert_eq!(item.sales_value, Some(dec("45.68")));
        assert_eq!(item.closing_qty, Some(7));
        assert_eq!(item.closing_value, Some(dec("12.00")));
    }

    #[test]
    fn test_structured_json_does_not_panic() {
        let json = serde_json::to_string_pretty(&serde_json::json!({
            "medicine_name": ["PARACETAMOL", "DOLO 650"],
            "closing_qty": [10, 20],
            "rate": 12.5
        }))
        .unwrap();

        let items = PharmaLineParser::new().parse(&json);
        assert!(items.len() <= 50);
    }
}
