//! Netherlands postcodes (`9999 AA`).
//!
//! Only the four digits are significant: letters after them are dropped on
//! input and come back only through range expansion.

use crate::domain::country::Country;
use crate::domain::format::{FormatShape, PostalCodeFormat};
use crate::domain::postal_code::PostalCode;
use crate::domain::sequencer::Sequencer;
use crate::impl_country_postal_code;
use once_cell::sync::Lazy;

const SIGNIFICANT_DIGITS: usize = 4;

pub(crate) static FORMATS: Lazy<Vec<PostalCodeFormat>> = Lazy::new(|| {
    vec![
        PostalCodeFormat::new(
            "NL : 9999 AA",
            FormatShape::fixed("^[0-9]{4}[A-Z]{2}$", "xxxx xx", Sequencer::AlphaNumeric),
        )
        .with_short(FormatShape::fixed("^[0-9]{4}$", "xxxx", Sequencer::Numeric))
        .with_expansion("AA", "ZZ")
        .truncating_to_short()
        .padded_with('0'),
    ]
});

pub(crate) fn significant_part(candidate: &str) -> &str {
    candidate.get(..SIGNIFICANT_DIGITS).unwrap_or(candidate)
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NlPostalCode(PostalCode);

impl_country_postal_code!(NlPostalCode, Country::Netherlands);
