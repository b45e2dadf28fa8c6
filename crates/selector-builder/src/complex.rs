//! Complex selectors: compound selectors joined by combinators.
//!
//! A [`ComplexSelector`] is terminal. It only offers rendering and inspection,
//! so it cannot be extended with further element/id/class parts.

use std::fmt;

use crate::compound::Selector;
use crate::types::{Combinator, Specificity};

/// One compound selector together with the combinator that follows it.
///
/// The last part of a [`ComplexSelector`] has no combinator.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SelectorPart {
    pub compound: Selector,
    pub combinator: Option<Combinator>,
}

impl SelectorPart {
    pub fn new(compound: Selector, combinator: Option<Combinator>) -> Self {
        Self {
            compound,
            combinator,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ComplexSelector {
    parts: Vec<SelectorPart>,
}

impl ComplexSelector {
    /// Joins `left` and `right` with `combinator`.
    ///
    /// Both sides may themselves be complex; the result is flattened left to right.
    pub fn combine(
        left: impl Into<ComplexSelector>,
        combinator: Combinator,
        right: impl Into<ComplexSelector>,
    ) -> Self {
        let mut parts = left.into().parts;
        let right = right.into().parts;

        if let Some(last) = parts.last_mut() {
            last.combinator = Some(combinator);
        }
        parts.extend(right);

        let combined = Self { parts };
        log::trace!("combined selector {:?}", combined.stringify());
        combined
    }

    /// Callers guarantee at least one part and that only the last part lacks a combinator.
    pub(crate) fn from_parts(parts: Vec<SelectorPart>) -> Self {
        debug_assert!(!parts.is_empty());
        Self { parts }
    }

    pub fn stringify(&self) -> String {
        self.to_string()
    }

    pub fn parts(&self) -> &[SelectorPart] {
        &self.parts
    }

    /// The compound selectors in order, without combinators.
    pub fn compounds(&self) -> impl Iterator<Item = &Selector> {
        self.parts.iter().map(|p| &p.compound)
    }

    pub fn specificity(&self) -> Specificity {
        self.compounds().map(Selector::specificity).sum()
    }
}

impl From<Selector> for ComplexSelector {
    fn from(compound: Selector) -> Self {
        Self {
            parts: vec![SelectorPart::new(compound, None)],
        }
    }
}

impl From<&Selector> for ComplexSelector {
    fn from(compound: &Selector) -> Self {
        compound.clone().into()
    }
}

impl From<&ComplexSelector> for ComplexSelector {
    fn from(complex: &ComplexSelector) -> Self {
        complex.clone()
    }
}

impl fmt::Display for ComplexSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in &self.parts {
            write!(f, "{}", part.compound)?;
            if let Some(combinator) = part.combinator {
                write!(f, " {combinator} ")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_compound_has_no_combinator() {
        let complex = ComplexSelector::from(Selector::new().element("div").unwrap());
        assert_eq!(complex.parts().len(), 1);
        assert_eq!(complex.parts()[0].combinator, None);
        assert_eq!(complex.stringify(), "div");
    }

    #[test]
    fn combinator_attaches_to_left_part() {
        let a = Selector::new().element("a").unwrap();
        let b = Selector::new().element("b").unwrap();
        let complex = ComplexSelector::combine(&a, Combinator::Child, &b);
        assert_eq!(complex.parts()[0].combinator, Some(Combinator::Child));
        assert_eq!(complex.parts()[1].combinator, None);
        assert_eq!(complex.stringify(), "a > b");
    }
}
