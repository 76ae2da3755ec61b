//! Format tables and input adapters for every supported country.
//!
//! Countries with behavior of their own (prefixes, truncation, strict
//! validation or multiple variants) live in their own module together with
//! a typed wrapper; the simple numeric countries share the tables in
//! `generic`.

mod bb;
mod ca;
mod generic;
pub mod gb;
mod mt;
mod nl;
mod pt;

pub use bb::BbPostalCode;
pub use ca::CaPostalCode;
pub use gb::GbPostalCode;
pub use generic::DefaultPostalCode;
pub use mt::MtPostalCode;
pub use nl::NlPostalCode;
pub use pt::PtPostalCode;

use crate::domain::country::Country;
use crate::domain::format::PostalCodeFormat;

pub(crate) fn formats(country: Country) -> &'static [PostalCodeFormat] {
    match country {
        Country::UnitedKingdom => gb::FORMATS.as_slice(),
        Country::Canada => ca::FORMATS.as_slice(),
        Country::Netherlands => nl::FORMATS.as_slice(),
        Country::Portugal => pt::FORMATS.as_slice(),
        Country::Malta => mt::FORMATS.as_slice(),
        Country::Barbados => bb::FORMATS.as_slice(),
        Country::Austria
        | Country::Belgium
        | Country::Denmark
        | Country::Norway
        | Country::Switzerland => generic::FOUR_DIGITS.as_slice(),
        Country::Finland
        | Country::France
        | Country::Germany
        | Country::Italy
        | Country::Spain => generic::FIVE_DIGITS.as_slice(),
        Country::Poland => generic::POLAND.as_slice(),
        Country::Sweden => generic::SWEDEN.as_slice(),
        Country::India => generic::SIX_DIGITS.as_slice(),
        Country::Japan => generic::SEVEN_DIGITS.as_slice(),
        Country::Russia => generic::RUSSIA.as_slice(),
        Country::UnitedStates => generic::UNITED_STATES.as_slice(),
        Country::Other(_) => generic::DEFAULT.as_slice(),
    }
}

/// Country-code prefixes some countries accept in front of their digits.
fn prefixes(country: Country) -> &'static [&'static str] {
    match country {
        Country::Barbados => &["BB"],
        Country::Belgium => &["B"],
        Country::Denmark => &["DK"],
        Country::Finland => &["FI"],
        Country::France => &["FR", "F", "MC"],
        Country::Italy => &["IT", "I"],
        _ => &[],
    }
}

/// Reduce normalized input to the part the formats are matched against.
pub(crate) fn significant_part(country: Country, normalized: &str) -> &str {
    let candidate = strip_prefix(normalized, prefixes(country));
    match country {
        Country::Netherlands => nl::significant_part(candidate),
        _ => candidate,
    }
}

/// Strip the first prefix followed by digits only.
fn strip_prefix<'a>(candidate: &'a str, prefixes: &[&str]) -> &'a str {
    prefixes
        .iter()
        .find_map(|prefix| {
            candidate
                .strip_prefix(prefix)
                .filter(|rest| !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()))
        })
        .unwrap_or(candidate)
}
