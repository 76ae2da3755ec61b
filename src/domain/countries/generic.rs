//! Shared tables for countries whose postal codes are plain numbers, and
//! the unconstrained default format used for every other country.

use crate::domain::country::Country;
use crate::domain::format::{FormatShape, PostalCodeFormat};
use crate::domain::postal_code::{PostalCode, PostalCodeError};
use crate::domain::sequencer::Sequencer;
use crate::impl_country_postal_code;
use once_cell::sync::Lazy;

pub(crate) static FOUR_DIGITS: Lazy<Vec<PostalCodeFormat>> =
    Lazy::new(|| vec![digits("4-Digits - 9999", "xxxx")]);

pub(crate) static FIVE_DIGITS: Lazy<Vec<PostalCodeFormat>> =
    Lazy::new(|| vec![digits("5-Digits - 99999", "xxxxx")]);

pub(crate) static POLAND: Lazy<Vec<PostalCodeFormat>> =
    Lazy::new(|| vec![digits("PL : 99-999", "xx-xxx")]);

pub(crate) static SWEDEN: Lazy<Vec<PostalCodeFormat>> =
    Lazy::new(|| vec![digits("SE : 999 99", "xxx xx")]);

pub(crate) static SIX_DIGITS: Lazy<Vec<PostalCodeFormat>> =
    Lazy::new(|| vec![digits("6-Digits - 999999", "xxxxxx")]);

pub(crate) static SEVEN_DIGITS: Lazy<Vec<PostalCodeFormat>> =
    Lazy::new(|| vec![digits("7-Digits - 9999999", "xxxxxxx")]);

pub(crate) static RUSSIA: Lazy<Vec<PostalCodeFormat>> = Lazy::new(|| {
    vec![
        digits("RU : 999999", "xxxxxx")
            .with_short(numeric_shape("xxx"))
            .with_expansion("000", "999"),
    ]
});

pub(crate) static UNITED_STATES: Lazy<Vec<PostalCodeFormat>> = Lazy::new(|| {
    vec![
        digits("US : 99999-9999", "xxxxx-xxxx")
            .with_short(numeric_shape("xxxxx"))
            .with_expansion("0000", "9999")
            .truncating_to_short(),
    ]
});

pub(crate) static DEFAULT: Lazy<Vec<PostalCodeFormat>> = Lazy::new(|| {
    vec![PostalCodeFormat::new(
        "Default Alpha Numeric Format",
        FormatShape::variable(
            "^[A-Z0-9]{1,15}$",
            "xxxxxxxxxxxxxxx",
            Sequencer::AlphaNumeric,
        ),
    )]
});

/// A zero-padded numeric format as wide as the placeholders of `template`.
fn digits(name: &'static str, template: &'static str) -> PostalCodeFormat {
    PostalCodeFormat::new(name, numeric_shape(template)).padded_with('0')
}

fn numeric_shape(template: &'static str) -> FormatShape {
    let width = template.chars().filter(|c| *c == 'x').count();
    FormatShape::fixed(&format!("^[0-9]{{{width}}}$"), template, Sequencer::Numeric)
}

/// Postal code of a country without a table of its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DefaultPostalCode(PostalCode);

impl DefaultPostalCode {
    /// Parse `raw` in the default format on behalf of `country`.
    pub fn parse_for(country: Country, raw: &str) -> Result<Self, PostalCodeError> {
        match country {
            Country::Other(_) => PostalCode::parse(country, raw).map(Self),
            _ => Err(PostalCodeError::InvalidFormat {
                country,
                input: raw.to_string(),
            }),
        }
    }
}

impl_country_postal_code!(DefaultPostalCode, Country::Other(*b"ZZ"));
