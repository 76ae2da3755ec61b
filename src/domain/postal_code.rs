use crate::domain::countries;
use crate::domain::country::Country;
use crate::domain::format::{FormatClass, FormatShape, PostalCodeFormat};
use crate::domain::normalize::{Normalizer, RangeBound};
use crate::domain::sequencer::Direction;
use std::cmp::Ordering;
use std::fmt::Display;
use std::hash::{Hash, Hasher};

/// A validated, canonical postal code bound to one format of its country.
///
/// The value never contains separators and always matches the shape it is
/// bound to. Values are immutable: neighbors and range expansions are new
/// postal codes of the same country.
#[derive(Debug, Clone)]
pub struct PostalCode {
    country: Country,
    value: String,
    format: &'static PostalCodeFormat,
    class: FormatClass,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PostalCodeError {
    #[error("Invalid postal code for {country}: {input:?} does not match any of its formats.")]
    InvalidFormat { country: Country, input: String },

    #[error("Postal code {value} ({country}) cannot be expanded to a range bound.")]
    UnsupportedExpansion { country: Country, value: String },

    #[error("Unknown country code: {0:?}. Must be a two-letter ISO 3166 code (e.g., 'GB', 'PT').")]
    UnknownCountry(String),
}

impl PostalCode {
    pub fn parse(country: Country, raw: &str) -> Result<Self, PostalCodeError> {
        Self::parse_with(country, raw, &Normalizer::default(), RangeBound::Exact)
    }

    /// Parse with explicit separator handling and range bound.
    ///
    /// The country's formats are tried in declaration order and the first
    /// one accepting the input wins.
    pub fn parse_with(
        country: Country,
        raw: &str,
        normalizer: &Normalizer,
        bound: RangeBound,
    ) -> Result<Self, PostalCodeError> {
        let normalized = normalizer.normalize(raw);
        let candidate = countries::significant_part(country, &normalized);

        country
            .formats()
            .iter()
            .find_map(|format| {
                format
                    .canonicalize(candidate, bound)
                    .map(|(value, class)| Self {
                        country,
                        value,
                        format,
                        class,
                    })
            })
            .ok_or_else(|| {
                tracing::debug!(%country, input = raw, "Rejected postal code");
                PostalCodeError::InvalidFormat {
                    country,
                    input: raw.to_string(),
                }
            })
    }

    /// Rebuild a previously emitted value, keeping expanded full codes full.
    pub(crate) fn restore(country: Country, code: &str) -> Result<Self, PostalCodeError> {
        match Self::bind_exact(country, code) {
            Some(postal_code) => Ok(postal_code),
            None => Self::parse(country, code),
        }
    }

    /// Bind an already canonical value without truncating or expanding it.
    fn bind_exact(country: Country, value: &str) -> Option<Self> {
        country.formats().iter().find_map(|format| {
            let class = if format.full().matches(value) {
                FormatClass::Full
            } else if format.short().is_some_and(|short| short.matches(value)) {
                FormatClass::Short
            } else {
                return None;
            };
            Some(Self {
                country,
                value: value.to_string(),
                format,
                class,
            })
        })
    }

    pub fn country(&self) -> Country {
        self.country
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn format(&self) -> &'static PostalCodeFormat {
        self.format
    }

    pub fn class(&self) -> FormatClass {
        self.class
    }

    pub fn is_short(&self) -> bool {
        self.class == FormatClass::Short
    }

    fn shape(&self) -> &'static FormatShape {
        self.format
            .shape(self.class)
            .unwrap_or_else(|| self.format.full())
    }

    pub fn predecessor(&self) -> Option<Self> {
        self.step(Direction::Predecessor)
    }

    pub fn successor(&self) -> Option<Self> {
        self.step(Direction::Successor)
    }

    fn step(&self, direction: Direction) -> Option<Self> {
        let value = self.shape().sequencer().step(&self.value, direction)?;
        Some(Self {
            country: self.country,
            value,
            format: self.format,
            class: self.class,
        })
    }

    /// The first full code of the range this short code denotes.
    pub fn expand_as_lowest_in_range(&self) -> Result<Self, PostalCodeError> {
        self.expand(RangeBound::Start)
    }

    /// The last full code of the range this short code denotes.
    pub fn expand_as_highest_in_range(&self) -> Result<Self, PostalCodeError> {
        self.expand(RangeBound::End)
    }

    fn expand(&self, bound: RangeBound) -> Result<Self, PostalCodeError> {
        let expanded = match self.class {
            FormatClass::Short => self.format.expand(&self.value, bound),
            FormatClass::Full => None,
        };

        match expanded {
            Some(value) => Ok(Self {
                country: self.country,
                value,
                format: self.format,
                class: FormatClass::Full,
            }),
            None => Err(PostalCodeError::UnsupportedExpansion {
                country: self.country,
                value: self.value.clone(),
            }),
        }
    }

    /// Expansion for range bounds: values that cannot expand stand for themselves.
    pub(crate) fn expand_or_self(&self, bound: RangeBound) -> Self {
        self.expand(bound).unwrap_or_else(|_| self.clone())
    }

    /// The value laid out with the separators of its format, e.g. `EC1A 1BB`.
    pub fn to_human_readable(&self) -> String {
        self.shape().render(&self.value)
    }

    pub fn is_adjacent_to(&self, other: &PostalCode) -> bool {
        self.successor().as_ref() == Some(other) || self.predecessor().as_ref() == Some(other)
    }

    /// Same country and bound to the very same format variant.
    pub fn has_same_format(&self, other: &PostalCode) -> bool {
        self.country == other.country && std::ptr::eq(self.format, other.format)
    }

    /// Plain code-point order of the canonical values, whatever their
    /// country or format. Ties are broken by country.
    pub fn cmp_ordinal(&self, other: &PostalCode) -> Ordering {
        self.value
            .cmp(&other.value)
            .then_with(|| self.country.cmp(&other.country))
    }

    fn is_numeric(&self) -> bool {
        self.shape().sequencer().is_numeric()
    }
}

impl PartialEq for PostalCode {
    fn eq(&self, other: &Self) -> bool {
        self.country == other.country && self.value == other.value
    }
}

impl Eq for PostalCode {}

impl Hash for PostalCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.country.hash(state);
        self.value.hash(state);
    }
}

/// Codes are grouped by country. Within a country, two numeric codes compare
/// as integers and any other pair compares as strings; numeric shapes of a
/// country that also has alphanumeric shapes share a single width, so both
/// rules agree there.
impl Ord for PostalCode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.country.cmp(&other.country).then_with(|| {
            if self.is_numeric() && other.is_numeric() {
                if let (Ok(lhs), Ok(rhs)) =
                    (self.value.parse::<u64>(), other.value.parse::<u64>())
                {
                    return lhs.cmp(&rhs).then_with(|| self.value.cmp(&other.value));
                }
            }
            self.value.cmp(&other.value)
        })
    }
}

impl PartialOrd for PostalCode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl AsRef<str> for PostalCode {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl Display for PostalCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.value.fmt(f)
    }
}

impl serde::Serialize for PostalCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("PostalCode", 2)?;
        state.serialize_field("country", &self.country)?;
        state.serialize_field("code", &self.value)?;
        state.end()
    }
}

impl<'de> serde::Deserialize<'de> for PostalCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Fields {
            country: Country,
            code: String,
        }

        let Fields { country, code } = Fields::deserialize(deserializer)?;
        PostalCode::restore(country, &code).map_err(serde::de::Error::custom)
    }
}
