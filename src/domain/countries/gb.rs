//! United Kingdom postcodes.
//!
//! Six outward-code variants, each a full code (`AA9A 9AA`) and a short
//! code made of the outward code plus the sector digit (`AA9A 9`). Full
//! input is truncated to the short form, so neighbors walk sectors.

use crate::domain::country::Country;
use crate::domain::format::{FormatShape, PostalCodeFormat};
use crate::domain::postal_code::PostalCode;
use crate::domain::sequencer::Sequencer;
use crate::impl_country_postal_code;
use once_cell::sync::Lazy;

pub(crate) static FORMATS: Lazy<Vec<PostalCodeFormat>> = Lazy::new(|| {
    vec![
        variant("UK : AA9A 9[AA]", "[A-Z][A-Z][0-9][A-Z][0-9]", "xxxx x"),
        variant("UK : A9A 9[AA]", "[A-Z][0-9][A-Z][0-9]", "xxx x"),
        variant("UK : A9 9[AA]", "[A-Z][0-9][0-9]", "xx x"),
        variant("UK : A99 9[AA]", "[A-Z][0-9][0-9][0-9]", "xxx x"),
        variant("UK : AA9 9[AA]", "[A-Z][A-Z][0-9][0-9]", "xxx x"),
        variant("UK : AA99 9[AA]", "[A-Z][A-Z][0-9][0-9][0-9]", "xxxx x"),
    ]
});

/// A variant whose full code is the short code followed by two letters.
fn variant(name: &'static str, short: &str, short_template: &'static str) -> PostalCodeFormat {
    let full_template = match short_template {
        "xxxx x" => "xxxx xxx",
        "xxx x" => "xxx xxx",
        _ => "xx xxx",
    };

    PostalCodeFormat::new(
        name,
        FormatShape::fixed(
            &format!("^{short}[A-Z][A-Z]$"),
            full_template,
            Sequencer::AlphaNumeric,
        ),
    )
    .with_short(FormatShape::fixed(
        &format!("^{short}$"),
        short_template,
        Sequencer::AlphaNumeric,
    ))
    .with_expansion("AA", "ZZ")
    .truncating_to_short()
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GbPostalCode(PostalCode);

impl_country_postal_code!(GbPostalCode, Country::UnitedKingdom);

impl GbPostalCode {
    /// See [`formats_match`].
    pub fn formats_match(code: &str, other: &str) -> bool {
        formats_match(code, other)
    }

    pub fn has_same_format(&self, other: &GbPostalCode) -> bool {
        self.0.has_same_format(&other.0)
    }
}

/// Whether two raw UK postcodes belong to the same variant.
///
/// Both must parse; short and full forms of one variant match each other,
/// codes of different variants never do.
pub fn formats_match(code: &str, other: &str) -> bool {
    match (GbPostalCode::parse(code), GbPostalCode::parse(other)) {
        (Ok(code), Ok(other)) => code.has_same_format(&other),
        _ => false,
    }
}
