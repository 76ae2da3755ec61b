pub mod configuration;
pub mod domain;
pub mod telemetry;

pub use domain::{Country, PostalCode, PostalCodeError, PostalCodeRange};
