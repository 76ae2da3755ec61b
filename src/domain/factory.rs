use crate::configuration::NormalizationSettings;
use crate::domain::country::Country;
use crate::domain::normalize::{Normalizer, RangeBound};
use crate::domain::postal_code::{PostalCode, PostalCodeError};

/// Creates postal codes with one normalization policy.
#[derive(Debug, Clone, Default)]
pub struct PostalCodeFactory {
    normalizer: Normalizer,
    range_bound: RangeBound,
}

impl PostalCodeFactory {
    pub fn new(normalizer: Normalizer, range_bound: RangeBound) -> Self {
        Self {
            normalizer,
            range_bound,
        }
    }

    pub fn from_settings(settings: &NormalizationSettings) -> Self {
        Self::new(settings.normalizer(), settings.range_bound)
    }

    #[tracing::instrument(name = "Creating postal code", skip(self))]
    pub fn create(&self, country: Country, raw: &str) -> Result<PostalCode, PostalCodeError> {
        PostalCode::parse_with(country, raw, &self.normalizer, self.range_bound)
    }

    /// Like [`PostalCodeFactory::create`], looking the country up by ISO code.
    pub fn create_for_iso(&self, iso: &str, raw: &str) -> Result<PostalCode, PostalCodeError> {
        let country = Country::parse(iso)?;
        self.create(country, raw)
    }
}
