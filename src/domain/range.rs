use crate::domain::normalize::RangeBound;
use crate::domain::postal_code::PostalCode;
use std::fmt::Display;

/// An inclusive range of postal codes of one country.
///
/// A missing bound is open: `start: None` reaches down to the first code,
/// `end: None` up to the last. Short bounds are stored expanded, so the range
/// `2660..2670` of Portugal is kept as `2660000..2670999`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PostalCodeRange {
    start: Option<PostalCode>,
    end: Option<PostalCode>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("The start ({start}) and the end ({end}) of the range are from different countries.")]
    IncompatibleCountries { start: PostalCode, end: PostalCode },

    #[error("Range end ({end}) can't be before start ({start}).")]
    EndBeforeStart { start: PostalCode, end: PostalCode },

    #[error("Can't combine non-adjacent ranges {left} and {right}.")]
    NotAdjacent {
        left: PostalCodeRange,
        right: PostalCodeRange,
    },
}

impl PostalCodeRange {
    pub fn new(start: Option<PostalCode>, end: Option<PostalCode>) -> Result<Self, RangeError> {
        let start = start.map(|code| code.expand_or_self(RangeBound::Start));
        let end = end.map(|code| code.expand_or_self(RangeBound::End));

        if let (Some(start), Some(end)) = (&start, &end) {
            if start.country() != end.country() {
                return Err(RangeError::IncompatibleCountries {
                    start: start.clone(),
                    end: end.clone(),
                });
            }
            if start > end {
                return Err(RangeError::EndBeforeStart {
                    start: start.clone(),
                    end: end.clone(),
                });
            }
        }

        Ok(Self { start, end })
    }

    pub fn bounded(start: PostalCode, end: PostalCode) -> Result<Self, RangeError> {
        Self::new(Some(start), Some(end))
    }

    /// The range of every postal code.
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn start(&self) -> Option<&PostalCode> {
        self.start.as_ref()
    }

    pub fn end(&self) -> Option<&PostalCode> {
        self.end.as_ref()
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// At least one side is open.
    pub fn is_indefinite(&self) -> bool {
        self.start.is_none() || self.end.is_none()
    }

    /// Whether every code denoted by `code` lies within the range.
    ///
    /// Codes bound to another format than the range bounds are never
    /// contained.
    pub fn contains(&self, code: &PostalCode) -> bool {
        let lowest = code.expand_or_self(RangeBound::Start);
        let highest = code.expand_or_self(RangeBound::End);

        at_or_before(self.start.as_ref(), Some(&lowest))
            && at_or_before(Some(&highest), self.end.as_ref())
    }

    pub fn contains_range(&self, inner: &PostalCodeRange) -> bool {
        let start_within = match (&self.start, &inner.start) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(outer), Some(inner)) => outer.has_same_format(inner) && outer <= inner,
        };
        let end_within = match (&self.end, &inner.end) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(outer), Some(inner)) => outer.has_same_format(inner) && outer >= inner,
        };

        start_within && end_within
    }

    /// Whether the two ranges share at least one code.
    pub fn intersects(&self, other: &PostalCodeRange) -> bool {
        at_or_before(self.start.as_ref(), other.end.as_ref())
            && at_or_before(other.start.as_ref(), self.end.as_ref())
    }

    /// Unbounded ranges coincide with every range, others when they intersect.
    pub fn is_coincident_with(&self, other: &PostalCodeRange) -> bool {
        self.is_unbounded() || other.is_unbounded() || self.intersects(other)
    }

    /// One range ends right before the other starts.
    pub fn is_adjacent_to(&self, other: &PostalCodeRange) -> bool {
        follows(self.end.as_ref(), other.start.as_ref())
            || follows(other.end.as_ref(), self.start.as_ref())
    }

    /// The smallest range covering both ranges.
    pub fn combine(&self, other: &PostalCodeRange) -> Result<Self, RangeError> {
        let start = match (&self.start, &other.start) {
            (Some(lhs), Some(rhs)) => Some(lhs.min(rhs).clone()),
            _ => None,
        };
        let end = match (&self.end, &other.end) {
            (Some(lhs), Some(rhs)) => Some(lhs.max(rhs).clone()),
            _ => None,
        };

        Self::new(start, end)
    }

    /// Like [`PostalCodeRange::combine`], refusing ranges with a gap between them.
    pub fn combine_checked(&self, other: &PostalCodeRange) -> Result<Self, RangeError> {
        if !self.is_adjacent_to(other) && !self.is_coincident_with(other) {
            return Err(RangeError::NotAdjacent {
                left: self.clone(),
                right: other.clone(),
            });
        }
        self.combine(other)
    }

    /// The parts of this range not covered by `what`, in ascending order.
    pub fn subtract(&self, what: &PostalCodeRange) -> Vec<PostalCodeRange> {
        if what.contains_range(self) {
            return Vec::new();
        }
        if !self.intersects(what) {
            return vec![self.clone()];
        }

        let mut pieces = Vec::with_capacity(2);

        if let Some(cut) = &what.start {
            match cut.predecessor() {
                Some(end) if at_or_before(self.start.as_ref(), Some(&end)) => {
                    pieces.push(Self {
                        start: self.start.clone(),
                        end: Some(end),
                    });
                }
                Some(_) => {}
                None => tracing::warn!(range = %self, %cut, "No postal code precedes the cut"),
            }
        }

        if let Some(cut) = &what.end {
            match cut.successor() {
                Some(start) if at_or_before(Some(&start), self.end.as_ref()) => {
                    pieces.push(Self {
                        start: Some(start),
                        end: self.end.clone(),
                    });
                }
                Some(_) => {}
                None => tracing::warn!(range = %self, %cut, "No postal code follows the cut"),
            }
        }

        pieces
    }

    /// The code right before the range, `None` if it is open or starts at the first code.
    pub fn predecessor_postal_code(&self) -> Option<PostalCode> {
        self.start.as_ref()?.predecessor()
    }

    /// The code right after the range, `None` if it is open or ends at the last code.
    pub fn successor_postal_code(&self) -> Option<PostalCode> {
        self.end.as_ref()?.successor()
    }
}

/// `lower <= upper` where a missing side is open; bounds of different
/// formats are never ordered.
fn at_or_before(lower: Option<&PostalCode>, upper: Option<&PostalCode>) -> bool {
    match (lower, upper) {
        (Some(lower), Some(upper)) => lower.has_same_format(upper) && lower <= upper,
        _ => true,
    }
}

fn follows(end: Option<&PostalCode>, start: Option<&PostalCode>) -> bool {
    match (end, start) {
        (Some(end), Some(start)) => end.successor().as_ref() == Some(start),
        _ => false,
    }
}

impl Display for PostalCodeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.start, &self.end) {
            (None, None) => write!(f, "<*>"),
            (Some(start), None) => write!(f, "<{start}-*>"),
            (None, Some(end)) => write!(f, "<*-{end}>"),
            (Some(start), Some(end)) => write!(f, "<{start}-{end}>"),
        }
    }
}
