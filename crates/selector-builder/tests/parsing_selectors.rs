//! Integration tests for parsing selector text.
//!
//! Parsed selectors follow the same rules as built ones:
//! - Parts: `div`, `*`, `#id`, `.class`, `[attr]`, `:pseudo`, `::pseudo`
//! - Combinators: descendant (whitespace), `>`, `+`, `~`
//! - Out-of-order or repeated unique parts are rejected

use selector_builder::{
    Category, Combinator, ComplexSelector, Selector, SelectorError, SimpleSelector, parse_compound,
    parse_selector,
};

// ============================================================================
// COMPOUND SELECTORS
// ============================================================================

#[test]
fn test_compound_parts() {
    let selector = parse_compound("a#home.nav.main[href]:hover::after").unwrap();
    assert_eq!(
        selector.parts(),
        &[
            SimpleSelector::Type("a".to_string()),
            SimpleSelector::Id("home".to_string()),
            SimpleSelector::Class("nav".to_string()),
            SimpleSelector::Class("main".to_string()),
            SimpleSelector::Attribute("href".to_string()),
            SimpleSelector::PseudoClass("hover".to_string()),
            SimpleSelector::PseudoElement("after".to_string()),
        ]
    );
}

#[test]
fn test_compound_from_str() {
    let selector: Selector = "input[type=checkbox]:checked".parse().unwrap();
    assert_eq!(selector.stage(), Some(Category::PseudoClass));
    assert_eq!(selector.stringify(), "input[type=checkbox]:checked");
}

#[test]
fn test_compound_rejects_combinator() {
    assert!(matches!(
        parse_compound("ul > li"),
        Err(SelectorError::InvalidSyntax(_))
    ));
}

#[test]
fn test_parsed_order_violation() {
    assert_eq!(
        parse_compound(".active#main"),
        Err(SelectorError::Order {
            attempted: Category::Id,
            current: Category::Class,
        })
    );
}

#[test]
fn test_parsed_duplicate() {
    assert_eq!(
        parse_compound("#a#b"),
        Err(SelectorError::DuplicateCategory(Category::Id))
    );
    assert_eq!(
        parse_compound("p::before::after"),
        Err(SelectorError::DuplicateCategory(Category::PseudoElement))
    );
}

// ============================================================================
// COMPLEX SELECTORS
// ============================================================================

#[test]
fn test_round_trip_rendered_text() {
    let text = "div#main.container.draggable + table#data ~ tr:nth-of-type(even)   td:nth-of-type(even)";
    let parsed = parse_selector(text).unwrap();
    assert_eq!(parsed.stringify(), text);
    assert_eq!(parsed.parts().len(), 4);
}

#[test]
fn test_descendant_is_normalized() {
    let parsed: ComplexSelector = "nav a".parse().unwrap();
    assert_eq!(parsed.parts()[0].combinator, Some(Combinator::Descendant));
    insta::assert_snapshot!(parsed, @"nav   a");
}

#[test]
fn test_combinators_without_spaces() {
    let parsed = parse_selector("ul>li+li~li").unwrap();
    assert_eq!(parsed.stringify(), "ul > li + li ~ li");
}

#[test]
fn test_surrounding_whitespace_is_ignored() {
    let parsed = parse_selector("  .menu > .item  ").unwrap();
    assert_eq!(parsed.stringify(), ".menu > .item");
}

#[test]
fn test_universal_selector() {
    let parsed = parse_selector("* > *.x").unwrap();
    assert_eq!(parsed.stringify(), "* > *.x");
    assert_eq!(parsed.specificity().classes, 1);
    assert_eq!(parsed.specificity().types, 0);
}

#[test]
fn test_violation_in_later_compound() {
    assert_eq!(
        parse_selector("div > span.a#b").unwrap_err(),
        SelectorError::Order {
            attempted: Category::Id,
            current: Category::Class,
        }
    );
}

#[test]
fn test_syntax_errors() {
    for input in ["", "   ", "div >", "div {", "> a", "a[href"] {
        assert!(
            matches!(parse_selector(input), Err(SelectorError::InvalidSyntax(_))),
            "expected syntax error for {input:?}"
        );
    }
}
