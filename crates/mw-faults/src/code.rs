//! Fault-code normalization.

/// Normalize a fault code for dictionary lookup.
///
/// Uppercases the token and strips every leading `'0'`. A token made only
/// of zeros (or an empty one) normalizes to `"0"`, never to the empty string.
pub fn normalize_code(raw: &str) -> String {
    let upper = raw.to_uppercase();
    let stripped = upper.trim_start_matches('0');
    if stripped.is_empty() {
        "0".to_string()
    } else {
        stripped.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercases_hex_digits() {
        assert_eq!(normalize_code("1a2b"), "1A2B");
        assert_eq!(normalize_code("Ff"), "FF");
    }

    #[test]
    fn strips_leading_zeros() {
        assert_eq!(normalize_code("0034"), "34");
        assert_eq!(normalize_code("000a"), "A");
    }

    #[test]
    fn interior_and_trailing_zeros_survive() {
        assert_eq!(normalize_code("1000"), "1000");
        assert_eq!(normalize_code("0101"), "101");
    }

    #[test]
    fn all_zero_is_zero() {
        assert_eq!(normalize_code("0"), "0");
        assert_eq!(normalize_code("0000"), "0");
        assert_eq!(normalize_code(""), "0");
    }

    #[test]
    fn normalized_form_is_stable() {
        for raw in ["0x", "00ab", "7", "0", "DEAD"] {
            let once = normalize_code(raw);
            assert_eq!(normalize_code(&once), once);
            assert!(once == "0" || !once.starts_with('0'));
            assert_eq!(once, once.to_uppercase());
        }
    }
}
