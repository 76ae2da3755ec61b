use crate::domain::country::Country;
use crate::domain::format::{FormatShape, PostalCodeFormat};
use crate::domain::postal_code::PostalCode;
use crate::domain::sequencer::Sequencer;
use crate::impl_country_postal_code;
use once_cell::sync::Lazy;

pub(crate) static FORMATS: Lazy<Vec<PostalCodeFormat>> = Lazy::new(|| {
    vec![PostalCodeFormat::new(
        "CA : A0A 0A0",
        FormatShape::fixed(
            "^[A-Z][0-9][A-Z][0-9][A-Z][0-9]$",
            "xxx xxx",
            Sequencer::AlphaNumeric,
        ),
    )]
});

/// Canadian postal code, letters and digits alternating (`K1A 0B1`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CaPostalCode(PostalCode);

impl_country_postal_code!(CaPostalCode, Country::Canada);
