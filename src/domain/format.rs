//! Declarative description of a postal code format.
//!
//! A `PostalCodeFormat` is one variant of a country's postal code: the shape
//! of a complete code, optionally the shape of its short (partial) form, and
//! the literal suffixes that complete a short code to the lowest or highest
//! code of the range it denotes. Formats are built once into static tables
//! and shared by reference between every value bound to them.

use crate::domain::normalize::RangeBound;
use crate::domain::sequencer::Sequencer;
use regex::Regex;

/// Whether a value is bound to the full or to the short shape of its format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatClass {
    Full,
    Short,
}

/// A single shape: the pattern a canonical value must match exactly, the
/// template used to render it for humans and the neighbor strategy.
#[derive(Debug)]
pub struct FormatShape {
    pattern: Regex,
    template: &'static str,
    width: Option<usize>,
    sequencer: Sequencer,
}

impl FormatShape {
    const PLACEHOLDER: char = 'x';

    /// A shape whose width is the number of placeholders in `template`.
    pub fn fixed(pattern: &str, template: &'static str, sequencer: Sequencer) -> Self {
        let width = template.chars().filter(|c| *c == Self::PLACEHOLDER).count();
        Self::build(pattern, template, Some(width), sequencer)
    }

    /// A shape that accepts values of varying width.
    pub fn variable(pattern: &str, template: &'static str, sequencer: Sequencer) -> Self {
        Self::build(pattern, template, None, sequencer)
    }

    fn build(
        pattern: &str,
        template: &'static str,
        width: Option<usize>,
        sequencer: Sequencer,
    ) -> Self {
        // Format tables are compiled from literals, a broken pattern is a bug.
        let pattern = Regex::new(pattern).expect("Format table contains an invalid pattern");
        Self {
            pattern,
            template,
            width,
            sequencer,
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        self.pattern.is_match(value)
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn template(&self) -> &'static str {
        self.template
    }

    pub fn width(&self) -> Option<usize> {
        self.width
    }

    pub fn sequencer(&self) -> Sequencer {
        self.sequencer
    }

    /// Lay `value` out on the template, e.g. `AA9A9AA` on `xxxx xxx`.
    pub fn render(&self, value: &str) -> String {
        let mut symbols = value.chars();
        let mut rendered = String::with_capacity(self.template.len());

        for slot in self.template.chars() {
            if slot != Self::PLACEHOLDER {
                rendered.push(slot);
                continue;
            }
            match symbols.next() {
                Some(symbol) => rendered.push(symbol),
                None => break,
            }
        }
        rendered.extend(symbols);

        rendered
            .trim_end_matches(|c: char| !c.is_ascii_alphanumeric())
            .to_string()
    }
}

impl PartialEq for FormatShape {
    fn eq(&self, other: &Self) -> bool {
        self.pattern.as_str() == other.pattern.as_str()
            && self.template == other.template
            && self.width == other.width
            && self.sequencer == other.sequencer
    }
}

impl Eq for FormatShape {}

/// Literal suffixes completing a short code to a full one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeExpansion {
    pub lowest: &'static str,
    pub highest: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct PostalCodeFormat {
    name: &'static str,
    full: FormatShape,
    short: Option<FormatShape>,
    expansion: Option<RangeExpansion>,
    truncate_to_short: bool,
    padding: Option<char>,
}

impl PostalCodeFormat {
    pub fn new(name: &'static str, full: FormatShape) -> Self {
        Self {
            name,
            full,
            short: None,
            expansion: None,
            truncate_to_short: false,
            padding: None,
        }
    }

    pub fn with_short(mut self, short: FormatShape) -> Self {
        self.short = Some(short);
        self
    }

    pub fn with_expansion(mut self, lowest: &'static str, highest: &'static str) -> Self {
        self.expansion = Some(RangeExpansion { lowest, highest });
        self
    }

    /// Full codes are reduced to their short form while parsing.
    pub fn truncating_to_short(mut self) -> Self {
        self.truncate_to_short = true;
        self
    }

    /// Numeric input shorter than the format is left-padded with `padding`.
    pub fn padded_with(mut self, padding: char) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn full(&self) -> &FormatShape {
        &self.full
    }

    pub fn short(&self) -> Option<&FormatShape> {
        self.short.as_ref()
    }

    pub fn shape(&self, class: FormatClass) -> Option<&FormatShape> {
        match class {
            FormatClass::Full => Some(&self.full),
            FormatClass::Short => self.short.as_ref(),
        }
    }

    pub fn expansion(&self) -> Option<RangeExpansion> {
        self.expansion
    }

    /// Bind an already separator-free candidate to this format.
    ///
    /// Returns the canonical value and the class of the shape it matched, or
    /// `None` if the candidate is not a code of this format.
    pub fn canonicalize(&self, candidate: &str, bound: RangeBound) -> Option<(String, FormatClass)> {
        let candidate = self.pad(candidate);

        if self.full.matches(&candidate) {
            // A truncated full code keeps its short form whatever the bound.
            return match self.truncate(&candidate) {
                Some(truncated) => Some((truncated, FormatClass::Short)),
                None => Some((candidate, FormatClass::Full)),
            };
        }

        if !self.short.as_ref().is_some_and(|short| short.matches(&candidate)) {
            return None;
        }

        match self.expand(&candidate, bound) {
            Some(expanded) => Some((expanded, FormatClass::Full)),
            None => Some((candidate, FormatClass::Short)),
        }
    }

    /// Complete a short value with the suffix selected by `bound`.
    ///
    /// `None` when the format has no expansion, `bound` is `Exact`, or the
    /// completed value does not fit the full shape.
    pub fn expand(&self, short_value: &str, bound: RangeBound) -> Option<String> {
        let expansion = self.expansion?;
        let suffix = match bound {
            RangeBound::Start => expansion.lowest,
            RangeBound::End => expansion.highest,
            RangeBound::Exact => return None,
        };

        let expanded = format!("{short_value}{suffix}");
        self.full.matches(&expanded).then_some(expanded)
    }

    fn truncate(&self, value: &str) -> Option<String> {
        if !self.truncate_to_short {
            return None;
        }
        let short = self.short.as_ref()?;
        let truncated = value.get(..short.width()?)?;
        short.matches(truncated).then(|| truncated.to_string())
    }

    fn pad(&self, candidate: &str) -> String {
        let Some(padding) = self.padding else {
            return candidate.to_string();
        };
        if candidate.is_empty() || !candidate.chars().all(|c| c.is_ascii_digit()) {
            return candidate.to_string();
        }

        let length = candidate.len();
        let target = [self.short.as_ref().and_then(FormatShape::width), self.full.width]
            .into_iter()
            .flatten()
            .find(|width| length <= *width);

        match target {
            Some(width) => {
                let mut padded: String = std::iter::repeat_n(padding, width - length).collect();
                padded.push_str(candidate);
                padded
            }
            None => candidate.to_string(),
        }
    }
}
