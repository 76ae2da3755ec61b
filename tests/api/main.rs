mod helpers;
mod postal_codes;
mod ranges;
