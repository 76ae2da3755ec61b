use crate::domain::country::Country;
use crate::domain::format::{FormatShape, PostalCodeFormat};
use crate::domain::normalize::{Normalizer, RangeBound};
use crate::domain::postal_code::{PostalCode, PostalCodeError};
use crate::domain::sequencer::Sequencer;
use crate::impl_country_postal_code;
use once_cell::sync::Lazy;

pub(crate) static FORMATS: Lazy<Vec<PostalCodeFormat>> = Lazy::new(|| {
    vec![
        PostalCodeFormat::new(
            "PT : 9999 999",
            FormatShape::fixed("^[0-9]{7}$", "xxxx xxx", Sequencer::Numeric),
        )
        .with_short(FormatShape::fixed("^[0-9]{4}$", "xxxx", Sequencer::Numeric))
        .with_expansion("000", "999")
        .padded_with('0'),
    ]
});

/// Portuguese postal code: a four digit area optionally followed by a
/// three digit street code (`2660-023`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PtPostalCode(PostalCode);

impl_country_postal_code!(PtPostalCode, Country::Portugal);

impl PtPostalCode {
    /// Parse an area code as the start or the end of its range.
    ///
    /// With `RangeBound::Start` (`End`) a four digit area is completed with
    /// `000` (`999`); `RangeBound::Exact` behaves like [`PtPostalCode::parse`].
    pub fn parse_in_range(raw: &str, bound: RangeBound) -> Result<Self, PostalCodeError> {
        PostalCode::parse_with(Self::COUNTRY, raw, &Normalizer::default(), bound).map(Self)
    }
}
