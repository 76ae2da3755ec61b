//! Macros for implementing common domain type patterns.
//!
//! Provides the boilerplate shared by every country-specific postal code
//! wrapper, so the wrappers only declare their struct and country.

/// Macro to implement the typed API of a country postal code wrapper
///
/// The wrapper must be a tuple struct around a `PostalCode`. The macro
/// implements parsing for the given country, neighbors and range expansion
/// that stay within the wrapper type, and the usual string conversions.
/// Serialization is the canonical string.
///
/// # Example
/// ```ignore
/// use crate::impl_country_postal_code;
///
/// #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// pub struct GbPostalCode(PostalCode);
///
/// impl_country_postal_code!(GbPostalCode, Country::UnitedKingdom);
/// ```
#[macro_export]
macro_rules! impl_country_postal_code {
    ($type_name:ident, $country:expr) => {
        impl $type_name {
            pub const COUNTRY: $crate::domain::Country = $country;

            pub fn parse(raw: &str) -> Result<Self, $crate::domain::PostalCodeError> {
                $crate::domain::PostalCode::parse(Self::COUNTRY, raw).map(Self)
            }

            pub fn predecessor(&self) -> Option<Self> {
                self.0.predecessor().map(Self)
            }

            pub fn successor(&self) -> Option<Self> {
                self.0.successor().map(Self)
            }

            pub fn expand_as_lowest_in_range(
                &self,
            ) -> Result<Self, $crate::domain::PostalCodeError> {
                self.0.expand_as_lowest_in_range().map(Self)
            }

            pub fn expand_as_highest_in_range(
                &self,
            ) -> Result<Self, $crate::domain::PostalCodeError> {
                self.0.expand_as_highest_in_range().map(Self)
            }

            pub fn to_human_readable(&self) -> String {
                self.0.to_human_readable()
            }

            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }

            pub fn as_postal_code(&self) -> &$crate::domain::PostalCode {
                &self.0
            }
        }

        impl AsRef<str> for $type_name {
            fn as_ref(&self) -> &str {
                self.0.as_str()
            }
        }

        impl std::fmt::Display for $type_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl std::str::FromStr for $type_name {
            type Err = $crate::domain::PostalCodeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl TryFrom<String> for $type_name {
            type Error = $crate::domain::PostalCodeError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(&value)
            }
        }

        impl TryFrom<$crate::domain::PostalCode> for $type_name {
            type Error = $crate::domain::PostalCodeError;

            fn try_from(value: $crate::domain::PostalCode) -> Result<Self, Self::Error> {
                if value.country() == Self::COUNTRY {
                    Ok(Self(value))
                } else {
                    Err($crate::domain::PostalCodeError::InvalidFormat {
                        country: Self::COUNTRY,
                        input: value.to_string(),
                    })
                }
            }
        }

        impl From<$type_name> for $crate::domain::PostalCode {
            fn from(value: $type_name) -> Self {
                value.0
            }
        }

        impl serde::Serialize for $type_name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.0.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $type_name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                $crate::domain::PostalCode::restore(Self::COUNTRY, &s)
                    .map(Self)
                    .map_err(serde::de::Error::custom)
            }
        }
    };
}
