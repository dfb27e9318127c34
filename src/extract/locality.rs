//! Locality-name heuristic for LES addresses
//!
//! Addresses are expected to look like `<street>, <postcode>, <locality>`.
//! The anchor digit is found in the address with every `", "` removed, and
//! the locality is the original address from [`LOCALITY_OFFSET`] characters
//! past that position. With one `", "` before the postcode this skips the
//! separator that follows it.
//!
//! Addresses that do not follow that shape produce a wrong locality, and
//! addresses with no digit at all fail with
//! [`LesError::NoTrailingDigitFound`].

use crate::error::{LesError, LesResult};
use regex::Regex;

/// Characters between the anchor position and the first locality character
pub const LOCALITY_OFFSET: usize = 4;

const SEPARATOR: &str = ", ";

/// A digit followed by no other digit on the rest of its line.
/// The leftmost match is the last digit of the first line containing one.
const DIGIT_ANCHOR: &str = r"(?m)\d[^\d\n]*$";

/// Remove every `", "` from the address
pub fn strip_separators(address: &str) -> String {
    address.replace(SEPARATOR, "")
}

/// Character position of the anchor digit, if any
pub fn trailing_digit_position(text: &str) -> LesResult<Option<usize>> {
    let anchor = Regex::new(DIGIT_ANCHOR)?;
    Ok(anchor
        .find(text)
        .map(|m| text[..m.start()].chars().count()))
}

/// Derive the locality name from a full address. The anchor comes from the
/// separator-free address; the slice is taken from `address` itself.
pub fn locality_name(address: &str) -> LesResult<String> {
    let position = trailing_digit_position(&strip_separators(address))?
        .ok_or_else(|| LesError::NoTrailingDigitFound(address.to_string()))?;

    let locality: String = address.chars().skip(position + LOCALITY_OFFSET).collect();
    Ok(locality.trim().to_string())
}
