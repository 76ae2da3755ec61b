pub mod countries;
mod country;
mod factory;
mod format;
mod macros;
mod normalize;
mod postal_code;
mod range;
pub mod sequencer;
#[cfg(test)]
mod test_data;

pub use countries::{
    BbPostalCode, CaPostalCode, DefaultPostalCode, GbPostalCode, MtPostalCode, NlPostalCode,
    PtPostalCode,
};
pub use country::Country;
pub use factory::PostalCodeFactory;
pub use format::{FormatClass, FormatShape, PostalCodeFormat, RangeExpansion};
pub use normalize::{Normalizer, RangeBound};
pub use postal_code::{PostalCode, PostalCodeError};
pub use range::{PostalCodeRange, RangeError};
