//! Medicine name validation.

use super::patterns::NUMERIC_ONLY;

const MIN_NAME_LEN: usize = 3;
const MAX_NAME_LEN: usize = 60;
const MAX_SPECIAL_RATIO: f64 = 0.3;

/// Check whether a captured name looks like a medicine name.
pub fn is_valid_medicine_name(name: &str) -> bool {
    let len = name.chars().count();
    if !(MIN_NAME_LEN..=MAX_NAME_LEN).contains(&len) {
        return false;
    }

    if !name.chars().any(|c| c.is_ascii_alphabetic()) {
        return false;
    }

    if NUMERIC_ONLY.is_match(name.trim()) {
        return false;
    }

    let special = name.chars().filter(|c| is_special(*c)).count();
    special as f64 <= len as f64 * MAX_SPECIAL_RATIO
}

fn is_special(c: char) -> bool {
    !(c.is_ascii_alphanumeric() || c.is_whitespace() || matches!(c, '-' | '.' | '(' | ')' | '/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(is_valid_medicine_name("PARACETAMOL 500MG"));
        assert!(is_valid_medicine_name("AMOXY-CLAV (625) 10/S"));
        assert!(is_valid_medicine_name("ORS"));
    }

    #[test]
    fn test_length_bounds() {
        assert!(!is_valid_medicine_name("AB"));
        assert!(is_valid_medicine_name(&"A".repeat(60)));
        assert!(!is_valid_medicine_name(&"A".repeat(61)));
    }

    #[test]
    fn test_numeric_names_rejected() {
        assert!(!is_valid_medicine_name("12345"));
        assert!(!is_valid_medicine_name("123.45"));
        assert!(!is_valid_medicine_name("100 200"));
    }

    #[test]
    fn test_special_character_ratio() {
        // 3 of 10 characters special: exactly 30%
        assert!(is_valid_medicine_name("ABCDEFG#@!"));
        // 4 of 10: over the limit
        assert!(!is_valid_medicine_name("ABCDEF#@!%"));
    }
}
