//! The chainable compound selector.
//!
//! Every operation borrows the current [`Selector`] and returns a new one, so a
//! chain like `element("a")?.class("x")?` never mutates an earlier step and an
//! intermediate value can be reused to start several chains.
//!
//! ## Transition rules
//!
//! For a new part of category `c` and a selector whose highest category so far is `stage`:
//!
//! 1. If `c` is unique (element, id, pseudo-element) and already present, the append fails
//!    with [`SelectorError::DuplicateCategory`].
//! 2. If `c < stage`, the append fails with [`SelectorError::Order`].
//! 3. Otherwise the token is appended and `stage` becomes `c`.

use std::fmt;

use bitflags::bitflags;

use crate::error::{Result, SelectorError};
use crate::types::{Category, SimpleSelector, Specificity};

bitflags! {
    /// Unique categories already present in a selector.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    struct Seen: u8 {
        const ELEMENT        = 0b0000_0001;
        const ID             = 0b0000_0010;
        const PSEUDO_ELEMENT = 0b0000_0100;
    }
}

impl Seen {
    fn for_category(category: Category) -> Option<Seen> {
        match category {
            Category::Element => Some(Seen::ELEMENT),
            Category::Id => Some(Seen::ID),
            Category::PseudoElement => Some(Seen::PSEUDO_ELEMENT),
            Category::Class | Category::Attribute | Category::PseudoClass => None,
        }
    }
}

/// An immutable compound selector such as `div#main.container:hover`.
///
/// # Example
///
/// ```
/// use selector_builder::Selector;
///
/// let selector = Selector::new()
///     .id("main")?
///     .class("container")?
///     .class("editable")?;
/// assert_eq!(selector.stringify(), "#main.container.editable");
/// # Ok::<(), selector_builder::SelectorError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Selector {
    text: String,
    stage: Option<Category>,
    seen: Seen,
    parts: Vec<SimpleSelector>,
}

impl Selector {
    /// Creates an empty selector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `name` literally as the element (type) selector.
    pub fn element(&self, name: impl Into<String>) -> Result<Selector> {
        self.append(SimpleSelector::Type(name.into()))
    }

    /// Appends `#name`.
    pub fn id(&self, name: impl Into<String>) -> Result<Selector> {
        self.append(SimpleSelector::Id(name.into()))
    }

    /// Appends `.name`.
    pub fn class(&self, name: impl Into<String>) -> Result<Selector> {
        self.append(SimpleSelector::Class(name.into()))
    }

    /// Appends `[expr]`; `expr` is the full bracket contents, e.g. `href$=".png"`.
    pub fn attr(&self, expr: impl Into<String>) -> Result<Selector> {
        self.append(SimpleSelector::Attribute(expr.into()))
    }

    /// Appends `:name`.
    pub fn pseudo_class(&self, name: impl Into<String>) -> Result<Selector> {
        self.append(SimpleSelector::PseudoClass(name.into()))
    }

    /// Appends `::name`.
    pub fn pseudo_element(&self, name: impl Into<String>) -> Result<Selector> {
        self.append(SimpleSelector::PseudoElement(name.into()))
    }

    /// Validates `part` against the current state and returns the extended selector.
    pub fn append(&self, part: SimpleSelector) -> Result<Selector> {
        let category = part.category();
        let flag = Seen::for_category(category);

        if let Some(flag) = flag {
            if self.seen.contains(flag) {
                log::debug!("rejected {part} on {:?}: duplicate {category}", self.text);
                return Err(SelectorError::DuplicateCategory(category));
            }
        }

        if let Some(current) = self.stage {
            if category < current {
                log::debug!("rejected {part} on {:?}: {category} after {current}", self.text);
                return Err(SelectorError::Order {
                    attempted: category,
                    current,
                });
            }
        }

        let mut next = self.clone();
        next.text.push_str(&part.to_string());
        next.stage = Some(category);
        if let Some(flag) = flag {
            next.seen |= flag;
        }
        next.parts.push(part);

        log::trace!("selector is now {:?}", next.text);
        Ok(next)
    }

    /// Returns the accumulated text exactly as built.
    pub fn stringify(&self) -> String {
        self.text.clone()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Highest category appended so far, `None` for an empty selector.
    pub fn stage(&self) -> Option<Category> {
        self.stage
    }

    /// Ordinal of [`stage`](Self::stage), with `0` meaning empty.
    pub fn ordinal(&self) -> u8 {
        self.stage.map_or(0, Category::ordinal)
    }

    pub fn parts(&self) -> &[SimpleSelector] {
        &self.parts
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn specificity(&self) -> Specificity {
        self.parts.iter().map(Specificity::of).sum()
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Selector {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
