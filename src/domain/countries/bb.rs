use crate::domain::country::Country;
use crate::domain::format::{FormatShape, PostalCodeFormat};
use crate::domain::postal_code::PostalCode;
use crate::domain::sequencer::Sequencer;
use crate::impl_country_postal_code;
use once_cell::sync::Lazy;

pub(crate) static FORMATS: Lazy<Vec<PostalCodeFormat>> = Lazy::new(|| {
    vec![PostalCodeFormat::new(
        "BB : 99999",
        FormatShape::fixed("^[0-9]{5}$", "xxxxx", Sequencer::Numeric),
    )]
});

/// Barbadian postal code, five digits with an optional `BB` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BbPostalCode(PostalCode);

impl_country_postal_code!(BbPostalCode, Country::Barbados);
