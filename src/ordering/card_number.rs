//! Total order over catalog card numbers.
//!
//! Catalog codes mix plain integers ("57"), prefixed codes ("OD-12"), and
//! bare letter codes ("B"). Special insert codes (prefixes `TS-` and `SP-`)
//! sort after every normal code and compare among themselves as plain
//! strings.
//!
//! Normal codes split into an alphabetic prefix and an optional numeric
//! part, compared prefix-first, then numerically. Anything unrecognized
//! compares as a bare prefix, so the order is total - no input shape can
//! make the comparator fail.

use std::cmp::Ordering;

/// Prefixes that mark special insert codes.
const SPECIAL_PREFIXES: [&str; 2] = ["TS-", "SP-"];

/// Check if a code is a special insert code.
#[must_use]
pub fn is_special_code(code: &str) -> bool {
    SPECIAL_PREFIXES.iter().any(|p| code.starts_with(p))
}

/// A card number split into its alphabetic prefix and numeric part.
///
/// ## Example
///
/// ```
/// use card_rankings::ordering::ParsedCardNumber;
///
/// assert_eq!(ParsedCardNumber::parse("57").number, Some(57));
/// assert_eq!(ParsedCardNumber::parse("OD-12").prefix, "OD");
/// assert_eq!(ParsedCardNumber::parse("B").number, None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParsedCardNumber<'a> {
    /// Alphabetic prefix; empty for pure-digit codes, the whole code for
    /// unrecognized shapes.
    pub prefix: &'a str,

    /// Numeric part, when the code has one.
    pub number: Option<u64>,
}

impl<'a> ParsedCardNumber<'a> {
    /// Parse a card number.
    ///
    /// Recognizes `DIGITS`, `UPPER-DIGITS`, and `UPPER`; anything else
    /// (including numbers too large for `u64`) becomes a bare prefix with
    /// no numeric part.
    #[must_use]
    pub fn parse(code: &'a str) -> Self {
        if !code.is_empty() && code.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(number) = code.parse() {
                return Self {
                    prefix: "",
                    number: Some(number),
                };
            }
        }

        if let Some((prefix, digits)) = code.split_once('-') {
            let well_formed = !prefix.is_empty()
                && prefix.bytes().all(|b| b.is_ascii_uppercase())
                && !digits.is_empty()
                && digits.bytes().all(|b| b.is_ascii_digit());
            if well_formed {
                if let Ok(number) = digits.parse() {
                    return Self {
                        prefix,
                        number: Some(number),
                    };
                }
            }
        }

        // Pure letter codes and unrecognized shapes both compare as a
        // bare prefix.
        Self {
            prefix: code,
            number: None,
        }
    }
}

/// Compare two card numbers.
///
/// Deterministic and total: special codes after normal codes, then by
/// prefix, then by numeric part (a numbered code before a bare one when
/// prefixes tie), with whole-string comparison as the final fallback.
///
/// ## Example
///
/// ```
/// use card_rankings::ordering::compare_card_numbers;
///
/// let mut codes = vec!["TS-1", "A-10", "10", "B", "A-2"];
/// codes.sort_by(|a, b| compare_card_numbers(a, b));
/// assert_eq!(codes, vec!["10", "A-2", "A-10", "B", "TS-1"]);
/// ```
#[must_use]
pub fn compare_card_numbers(a: &str, b: &str) -> Ordering {
    match (is_special_code(a), is_special_code(b)) {
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        (true, true) => return a.cmp(b),
        (false, false) => {}
    }

    let parsed_a = ParsedCardNumber::parse(a);
    let parsed_b = ParsedCardNumber::parse(b);

    parsed_a
        .prefix
        .cmp(parsed_b.prefix)
        .then_with(|| match (parsed_a.number, parsed_b.number) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.cmp(b),
        })
}
