//! Conversions between raw digits, text and trit sequences.

use super::Trit;
use crate::error::{CurlResult, ErrorCode};

/// Validate raw digits into trits.
///
/// Fails fast with `E100_InvalidTritValue(index, value)` at the first element
/// outside {0, 1, 2}. Nothing is coerced.
pub fn trits_from_u8(values: &[u8]) -> CurlResult<Vec<Trit>> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| Trit::at(i, v))
        .collect()
}

/// Raw digit form of a trit sequence.
pub fn trits_to_u8(trits: &[Trit]) -> Vec<u8> {
    trits.iter().map(|t| t.value()).collect()
}

/// Render trits as one digit character per trit, e.g. `"0120"`.
pub fn trits_to_string(trits: &[Trit]) -> String {
    trits.iter().map(|t| t.to_char()).collect()
}

/// Parse a digit string produced by [`trits_to_string`].
///
/// Any character other than `0`, `1` or `2` yields
/// `E101_InvalidTritSymbol(index, symbol)`, where `index` counts characters.
pub fn parse_trits(s: &str) -> CurlResult<Vec<Trit>> {
    s.chars()
        .enumerate()
        .map(|(i, c)| {
            Trit::from_char(c)
                .ok_or_else(|| ErrorCode::E101_InvalidTritSymbol(i as u64, c.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trits_from_u8_reports_first_invalid() {
        assert_eq!(
            trits_from_u8(&[0, 1, 2, 5, 9]),
            Err(ErrorCode::E100_InvalidTritValue(3, 5))
        );
    }

    #[test]
    fn test_trits_from_u8_empty() {
        assert_eq!(trits_from_u8(&[]), Ok(vec![]));
    }

    #[test]
    fn test_string_form() {
        let trits = trits_from_u8(&[0, 1, 2, 2, 1]).unwrap();
        let s = trits_to_string(&trits);
        assert_eq!(s, "01221");
        assert_eq!(parse_trits(&s), Ok(trits));
    }

    #[test]
    fn test_parse_rejects_symbol() {
        assert_eq!(
            parse_trits("0123"),
            Err(ErrorCode::E101_InvalidTritSymbol(3, "3".to_string()))
        );
        assert_eq!(
            parse_trits("01 2"),
            Err(ErrorCode::E101_InvalidTritSymbol(2, " ".to_string()))
        );
    }
}
