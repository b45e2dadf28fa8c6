//! Building blocks shared by compound and complex selectors.
//!
//! - [`Category`]: the six selector part kinds in their required order
//! - [`SimpleSelector`]: one appended token (`div`, `#main`, `.active`, ...)
//! - [`Combinator`]: relationship between two compound selectors
//! - [`Specificity`]: CSS specificity triple

use std::fmt;
use std::str::FromStr;

use crate::error::SelectorError;

/// Selector part kinds, ordered the way they must appear in a compound selector.
///
/// ```text
/// element#id.class[attr]:pseudoClass::pseudoElement
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Element = 1,
    Id = 2,
    Class = 3,
    Attribute = 4,
    PseudoClass = 5,
    PseudoElement = 6,
}

impl Category {
    /// Position of the category in the required order, from 1 to 6.
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Element, id and pseudo-element may occur at most once per compound selector.
    pub fn is_unique(self) -> bool {
        matches!(
            self,
            Category::Element | Category::Id | Category::PseudoElement
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Element => "element",
            Category::Id => "id",
            Category::Class => "class",
            Category::Attribute => "attribute",
            Category::PseudoClass => "pseudo-class",
            Category::PseudoElement => "pseudo-element",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single token of a compound selector.
///
/// Values are stored without their prefix; [`Display`](fmt::Display) adds it back.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SimpleSelector {
    Type(String),
    Id(String),
    Class(String),
    /// Bracket contents, verbatim (e.g. `href$=".png"`).
    Attribute(String),
    PseudoClass(String),
    PseudoElement(String),
}

impl SimpleSelector {
    pub fn category(&self) -> Category {
        match self {
            SimpleSelector::Type(_) => Category::Element,
            SimpleSelector::Id(_) => Category::Id,
            SimpleSelector::Class(_) => Category::Class,
            SimpleSelector::Attribute(_) => Category::Attribute,
            SimpleSelector::PseudoClass(_) => Category::PseudoClass,
            SimpleSelector::PseudoElement(_) => Category::PseudoElement,
        }
    }

    /// The token value without its prefix.
    pub fn value(&self) -> &str {
        match self {
            SimpleSelector::Type(v)
            | SimpleSelector::Id(v)
            | SimpleSelector::Class(v)
            | SimpleSelector::Attribute(v)
            | SimpleSelector::PseudoClass(v)
            | SimpleSelector::PseudoElement(v) => v,
        }
    }
}

impl fmt::Display for SimpleSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimpleSelector::Type(v) => f.write_str(v),
            SimpleSelector::Id(v) => write!(f, "#{v}"),
            SimpleSelector::Class(v) => write!(f, ".{v}"),
            SimpleSelector::Attribute(v) => write!(f, "[{v}]"),
            SimpleSelector::PseudoClass(v) => write!(f, ":{v}"),
            SimpleSelector::PseudoElement(v) => write!(f, "::{v}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Combinator {
    Descendant,      // ' '
    Child,           // >
    AdjacentSibling, // +
    GeneralSibling,  // ~
}

impl Combinator {
    /// Parses a combinator token. Only the exact tokens `" "`, `">"`, `"+"` and `"~"` are accepted.
    pub fn from_token(token: &str) -> Result<Self, SelectorError> {
        match token {
            " " => Ok(Combinator::Descendant),
            ">" => Ok(Combinator::Child),
            "+" => Ok(Combinator::AdjacentSibling),
            "~" => Ok(Combinator::GeneralSibling),
            other => Err(SelectorError::InvalidCombinator(other.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Combinator::Descendant => " ",
            Combinator::Child => ">",
            Combinator::AdjacentSibling => "+",
            Combinator::GeneralSibling => "~",
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Combinator {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Combinator::from_token(s)
    }
}

impl TryFrom<char> for Combinator {
    type Error = SelectorError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Combinator::from_token(c.encode_utf8(&mut [0; 4]))
    }
}

impl TryFrom<&str> for Combinator {
    type Error = SelectorError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Combinator::from_token(s)
    }
}

/// CSS specificity for determining rule precedence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Specificity {
    pub ids: u32,
    pub classes: u32,
    pub types: u32,
}

impl Specificity {
    pub(crate) fn of(part: &SimpleSelector) -> Self {
        let mut spec = Specificity::default();
        match part {
            SimpleSelector::Id(_) => spec.ids += 1,
            // Attributes have the same specificity as classes and pseudo-classes
            SimpleSelector::Class(_)
            | SimpleSelector::Attribute(_)
            | SimpleSelector::PseudoClass(_) => spec.classes += 1,
            SimpleSelector::Type(name) if name == "*" => {}
            SimpleSelector::Type(_) | SimpleSelector::PseudoElement(_) => spec.types += 1,
        }
        spec
    }
}

impl std::ops::Add for Specificity {
    type Output = Specificity;

    fn add(self, rhs: Self) -> Self::Output {
        Specificity {
            ids: self.ids + rhs.ids,
            classes: self.classes + rhs.classes,
            types: self.types + rhs.types,
        }
    }
}

impl std::iter::Sum for Specificity {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Specificity::default(), |acc, x| acc + x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_are_ordered() {
        assert!(Category::Element < Category::Id);
        assert!(Category::Id < Category::Class);
        assert!(Category::Class < Category::Attribute);
        assert!(Category::Attribute < Category::PseudoClass);
        assert!(Category::PseudoClass < Category::PseudoElement);
        assert_eq!(Category::PseudoElement.ordinal(), 6);
    }

    #[test]
    fn only_element_id_and_pseudo_element_are_unique() {
        let unique: Vec<_> = [
            Category::Element,
            Category::Id,
            Category::Class,
            Category::Attribute,
            Category::PseudoClass,
            Category::PseudoElement,
        ]
        .into_iter()
        .filter(|c| c.is_unique())
        .collect();
        assert_eq!(
            unique,
            vec![Category::Element, Category::Id, Category::PseudoElement]
        );
    }

    #[test]
    fn simple_selectors_render_with_prefix() {
        assert_eq!(SimpleSelector::Type("a".into()).to_string(), "a");
        assert_eq!(SimpleSelector::Id("main".into()).to_string(), "#main");
        assert_eq!(SimpleSelector::Class("x".into()).to_string(), ".x");
        assert_eq!(
            SimpleSelector::Attribute("href$=\".png\"".into()).to_string(),
            "[href$=\".png\"]"
        );
        assert_eq!(SimpleSelector::PseudoClass("focus".into()).to_string(), ":focus");
        assert_eq!(SimpleSelector::PseudoElement("after".into()).to_string(), "::after");
    }

    #[test]
    fn combinator_tokens() {
        assert_eq!(Combinator::try_from('+').unwrap(), Combinator::AdjacentSibling);
        assert_eq!(" ".parse::<Combinator>().unwrap(), Combinator::Descendant);
        assert_eq!(Combinator::try_from(">").unwrap(), Combinator::Child);
        assert_eq!(Combinator::GeneralSibling.to_string(), "~");
        assert_eq!(
            Combinator::from_token(">>"),
            Err(SelectorError::InvalidCombinator(">>".to_string()))
        );
        assert!(Combinator::try_from('*').is_err());
    }

    #[test]
    fn universal_type_has_no_specificity() {
        assert_eq!(
            Specificity::of(&SimpleSelector::Type("*".into())),
            Specificity::default()
        );
    }
}
