//! Font size and weight style fragments
//!
//! Each function returns a fixed CSS declaration list. Composite styles are
//! built by concatenating the primitives, so `style::heading()` is exactly
//! `size::large()` followed by `weights::bold()`.

use std::fmt;
use std::ops::Add;

/// A list of CSS declarations, usable as an inline `style` attribute
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct StyleFragment(String);

impl StyleFragment {
    fn declaration(property: &str, value: &str) -> Self {
        Self(format!("{property}: {value};"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Add for StyleFragment {
    type Output = StyleFragment;

    fn add(mut self, rhs: StyleFragment) -> StyleFragment {
        self.0.push_str(&rhs.0);
        self
    }
}

impl fmt::Display for StyleFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<StyleFragment> for String {
    fn from(fragment: StyleFragment) -> Self {
        fragment.0
    }
}

/// Font sizes, in rem
pub mod size {
    use super::StyleFragment;

    fn font_size(rem: &str) -> StyleFragment {
        StyleFragment::declaration("font-size", rem)
    }

    pub fn xxxsmall() -> StyleFragment {
        font_size("0.625rem")
    }

    pub fn xxsmall() -> StyleFragment {
        font_size("0.75rem")
    }

    pub fn xsmall() -> StyleFragment {
        font_size("0.875rem")
    }

    pub fn small() -> StyleFragment {
        font_size("1rem")
    }

    pub fn regular() -> StyleFragment {
        font_size("1.125rem")
    }

    /// Sits between `regular` and `big` despite the name
    pub fn x_regular() -> StyleFragment {
        font_size("1.5rem")
    }

    pub fn big() -> StyleFragment {
        font_size("1.7rem")
    }

    pub fn large() -> StyleFragment {
        font_size("2.25rem")
    }

    pub fn extra_large() -> StyleFragment {
        font_size("3rem")
    }
}

/// Font weights
pub mod weights {
    use super::StyleFragment;

    fn font_weight(value: &str) -> StyleFragment {
        StyleFragment::declaration("font-weight", value)
    }

    pub fn light() -> StyleFragment {
        font_weight("300")
    }

    pub fn bold() -> StyleFragment {
        font_weight("500")
    }

    pub fn bolder() -> StyleFragment {
        font_weight("600")
    }

    pub fn normal() -> StyleFragment {
        font_weight("normal")
    }
}

/// Size + weight combinations
pub mod style {
    use super::{size, weights, StyleFragment};

    pub fn heading() -> StyleFragment {
        size::large() + weights::bold()
    }

    pub fn subheading() -> StyleFragment {
        size::big() + weights::bold()
    }

    pub fn standard() -> StyleFragment {
        size::regular() + weights::normal()
    }

    pub fn sub_text() -> StyleFragment {
        size::small() + weights::normal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rem(fragment: StyleFragment) -> f64 {
        fragment
            .as_str()
            .trim_start_matches("font-size: ")
            .trim_end_matches("rem;")
            .parse()
            .unwrap()
    }

    #[test]
    fn test_size_values() {
        assert_eq!(rem(size::xxxsmall()), 0.625);
        assert_eq!(rem(size::xxsmall()), 0.75);
        assert_eq!(rem(size::xsmall()), 0.875);
        assert_eq!(rem(size::small()), 1.0);
        assert_eq!(rem(size::regular()), 1.125);
        assert_eq!(rem(size::x_regular()), 1.5);
        assert_eq!(rem(size::big()), 1.7);
        assert_eq!(rem(size::large()), 2.25);
        assert_eq!(rem(size::extra_large()), 3.0);
    }

    #[test]
    fn test_weight_values() {
        assert_eq!(weights::light().as_str(), "font-weight: 300;");
        assert_eq!(weights::bold().as_str(), "font-weight: 500;");
        assert_eq!(weights::bolder().as_str(), "font-weight: 600;");
        assert_eq!(weights::normal().as_str(), "font-weight: normal;");
    }

    #[test]
    fn test_composites_concatenate_primitives() {
        assert_eq!(
            style::heading().to_string(),
            format!("{}{}", size::large(), weights::bold())
        );
        assert_eq!(
            style::subheading().to_string(),
            format!("{}{}", size::big(), weights::bold())
        );
        assert_eq!(
            style::standard().to_string(),
            format!("{}{}", size::regular(), weights::normal())
        );
        assert_eq!(
            style::sub_text().to_string(),
            format!("{}{}", size::small(), weights::normal())
        );
    }

    #[test]
    fn test_fragments_are_deterministic() {
        assert_eq!(style::heading(), style::heading());
        assert_eq!(size::x_regular(), size::x_regular());
    }
}
