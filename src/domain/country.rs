use crate::domain::countries;
use crate::domain::format::PostalCodeFormat;
use crate::domain::postal_code::PostalCodeError;
use std::fmt::Display;

/// Countries with a known postal code format.
///
/// Any other valid two-letter ISO 3166 code maps to `Other`, which accepts
/// the default alphanumeric format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Country {
    Austria,
    Barbados,
    Belgium,
    Canada,
    Denmark,
    Finland,
    France,
    Germany,
    India,
    Italy,
    Japan,
    Malta,
    Netherlands,
    Norway,
    Poland,
    Portugal,
    Russia,
    Spain,
    Sweden,
    Switzerland,
    UnitedKingdom,
    UnitedStates,
    Other([u8; 2]),
}

impl Country {
    pub const KNOWN: [Country; 22] = [
        Country::Austria,
        Country::Barbados,
        Country::Belgium,
        Country::Canada,
        Country::Denmark,
        Country::Finland,
        Country::France,
        Country::Germany,
        Country::India,
        Country::Italy,
        Country::Japan,
        Country::Malta,
        Country::Netherlands,
        Country::Norway,
        Country::Poland,
        Country::Portugal,
        Country::Russia,
        Country::Spain,
        Country::Sweden,
        Country::Switzerland,
        Country::UnitedKingdom,
        Country::UnitedStates,
    ];

    /// Look a country up by its ISO 3166 alpha-2 code, case-insensitively.
    /// `UK` is accepted as an alias of `GB`.
    pub fn parse(iso: &str) -> Result<Self, PostalCodeError> {
        let trimmed = iso.trim();
        let code: [u8; 2] = trimmed
            .as_bytes()
            .try_into()
            .ok()
            .filter(|code: &[u8; 2]| code.iter().all(u8::is_ascii_alphabetic))
            .map(|code: [u8; 2]| code.map(|b| b.to_ascii_uppercase()))
            .ok_or_else(|| PostalCodeError::UnknownCountry(iso.to_string()))?;

        if &code == b"UK" {
            return Ok(Country::UnitedKingdom);
        }

        Ok(Self::KNOWN
            .into_iter()
            .find(|country| country.iso_code().as_bytes() == code.as_slice())
            .unwrap_or(Country::Other(code)))
    }

    pub fn iso_code(&self) -> &str {
        match self {
            Country::Austria => "AT",
            Country::Barbados => "BB",
            Country::Belgium => "BE",
            Country::Canada => "CA",
            Country::Denmark => "DK",
            Country::Finland => "FI",
            Country::France => "FR",
            Country::Germany => "DE",
            Country::India => "IN",
            Country::Italy => "IT",
            Country::Japan => "JP",
            Country::Malta => "MT",
            Country::Netherlands => "NL",
            Country::Norway => "NO",
            Country::Poland => "PL",
            Country::Portugal => "PT",
            Country::Russia => "RU",
            Country::Spain => "ES",
            Country::Sweden => "SE",
            Country::Switzerland => "CH",
            Country::UnitedKingdom => "GB",
            Country::UnitedStates => "US",
            Country::Other(code) => std::str::from_utf8(code).unwrap_or("??"),
        }
    }

    /// The formats this country accepts, in the order they are tried.
    pub fn formats(self) -> &'static [PostalCodeFormat] {
        countries::formats(self)
    }

    /// Whether the country has its own format table.
    pub fn is_known(self) -> bool {
        !matches!(self, Country::Other(_))
    }
}

impl Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.iso_code().fmt(f)
    }
}

impl std::str::FromStr for Country {
    type Err = PostalCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Country::parse(s)
    }
}

impl serde::Serialize for Country {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.iso_code())
    }
}

impl<'de> serde::Deserialize<'de> for Country {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Country::parse(&s).map_err(serde::de::Error::custom)
    }
}
