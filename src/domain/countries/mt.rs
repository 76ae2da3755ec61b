use crate::domain::country::Country;
use crate::domain::format::{FormatShape, PostalCodeFormat};
use crate::domain::postal_code::PostalCode;
use crate::domain::sequencer::Sequencer;
use crate::impl_country_postal_code;
use once_cell::sync::Lazy;

pub(crate) static FORMATS: Lazy<Vec<PostalCodeFormat>> = Lazy::new(|| {
    vec![PostalCodeFormat::new(
        "MT : AAA 9999",
        FormatShape::fixed("^[A-Z]{3}[0-9]{4}$", "xxx xxxx", Sequencer::AlphaNumeric),
    )]
});

/// Maltese postal code: three letters then four digits, nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MtPostalCode(PostalCode);

impl_country_postal_code!(MtPostalCode, Country::Malta);
