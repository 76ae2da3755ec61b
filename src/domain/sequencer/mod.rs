//! Neighbor computation for canonical postal code strings.
//!
//! A format shape selects one of two strategies: the mixed-radix odometer for
//! codes whose positions are independent letters or digits, or a bounded
//! integer counter for codes that are a zero-padded number.

pub mod alphanumeric;
pub mod numeric;

/// Which way to walk from a postal code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Predecessor,
    Successor,
}

/// The neighbor strategy bound into a format shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sequencer {
    AlphaNumeric,
    Numeric,
}

impl Sequencer {
    /// Compute the neighbor of an already canonical value.
    ///
    /// Returns `None` when `value` is the first (or last) code of its shape.
    pub fn step(self, value: &str, direction: Direction) -> Option<String> {
        match (self, direction) {
            (Self::AlphaNumeric, Direction::Predecessor) => alphanumeric::predecessor(value),
            (Self::AlphaNumeric, Direction::Successor) => alphanumeric::successor(value),
            (Self::Numeric, direction) => {
                let width = value.len();
                let number = value.parse::<u64>().ok()?;
                match direction {
                    Direction::Predecessor => numeric::predecessor(number, width),
                    Direction::Successor => numeric::successor(number, width),
                }
            }
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Numeric)
    }
}
