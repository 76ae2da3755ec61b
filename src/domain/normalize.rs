use serde::Deserialize;

/// How a short (partial) code is treated while it is being parsed.
///
/// Formats with a short shape and range expansion suffixes can complete a
/// short input to the first or the last full code of the range it denotes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeBound {
    /// Complete short codes with the lowest suffix of the range.
    Start,
    /// Complete short codes with the highest suffix of the range.
    End,
    /// Leave the length of the input alone.
    #[default]
    Exact,
}

/// Strips redundant characters from raw input and uppercases it.
///
/// Whitespace is always removed; `separators` lists the extra characters
/// that carry no meaning in any postal code (dashes by default).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalizer {
    separators: Vec<char>,
}

impl Normalizer {
    pub const DEFAULT_SEPARATORS: &'static str = "-";

    pub fn new(separators: &str) -> Self {
        Self {
            separators: separators.chars().filter(|c| !c.is_whitespace()).collect(),
        }
    }

    pub fn normalize(&self, raw: &str) -> String {
        raw.chars()
            .filter(|c| !c.is_whitespace() && !self.separators.contains(c))
            .map(|c| c.to_ascii_uppercase())
            .collect()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEPARATORS)
    }
}
