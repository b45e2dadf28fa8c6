//! Parsing selector text back into [`Selector`] and [`ComplexSelector`] values.
//!
//! Parsing happens in two steps. nom splits the text into simple selectors and
//! combinators, then each compound is replayed through [`Selector::append`] so
//! text input obeys exactly the same ordering and uniqueness rules as the builder.
//!
//! Whitespace alone between two compounds is a descendant combinator; `>`, `+` and
//! `~` may be surrounded by any amount of whitespace.

use std::str::FromStr;

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_until, take_while1},
    character::complete::{char, multispace0},
    combinator::{map, opt, recognize},
    multi::many1,
    sequence::{delimited, pair, preceded},
};

use crate::complex::{ComplexSelector, SelectorPart};
use crate::compound::Selector;
use crate::error::{Result, SelectorError};
use crate::types::{Combinator, SimpleSelector};

type RawCompound = Vec<SimpleSelector>;

/// Parses a complex selector such as `div#main + table#data ~ tr:nth-of-type(even)`.
///
/// ```
/// use selector_builder::parse_selector;
///
/// let selector = parse_selector("div#main > a[href$=\".png\"]:focus").unwrap();
/// assert_eq!(selector.stringify(), "div#main > a[href$=\".png\"]:focus");
/// assert!(parse_selector(".active div").is_ok());
/// assert!(parse_selector(".active:hover#id").is_err());
/// ```
pub fn parse_selector(input: &str) -> Result<ComplexSelector> {
    let (remaining, raw) = parse_complex(input.trim()).map_err(syntax_error)?;
    if !remaining.is_empty() {
        log::debug!("trailing input in selector {input:?}: {remaining:?}");
        return Err(SelectorError::InvalidSyntax(format!(
            "unexpected tokens at end of selector: {remaining}"
        )));
    }

    let parts = raw
        .into_iter()
        .map(|(simple, combinator)| Ok(SelectorPart::new(replay(simple)?, combinator)))
        .collect::<Result<Vec<_>>>()?;
    Ok(ComplexSelector::from_parts(parts))
}

/// Parses a single compound selector such as `a.external:hover`.
pub fn parse_compound(input: &str) -> Result<Selector> {
    let (remaining, raw) = parse_raw_compound(input.trim()).map_err(syntax_error)?;
    if !remaining.is_empty() {
        log::debug!("trailing input in compound selector {input:?}: {remaining:?}");
        return Err(SelectorError::InvalidSyntax(format!(
            "unexpected tokens at end of compound selector: {remaining}"
        )));
    }
    replay(raw)
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self> {
        parse_compound(s)
    }
}

impl FromStr for ComplexSelector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self> {
        parse_selector(s)
    }
}

fn syntax_error(e: nom::Err<nom::error::Error<&str>>) -> SelectorError {
    log::debug!("selector parse failed: {e}");
    SelectorError::InvalidSyntax(e.to_string())
}

fn replay(simple: RawCompound) -> Result<Selector> {
    simple
        .into_iter()
        .try_fold(Selector::new(), |selector, part| selector.append(part))
}

fn parse_ident(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_')(input)
}

/// Pseudo names may carry an argument, e.g. `nth-of-type(even)`.
fn parse_pseudo_name(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        parse_ident,
        opt(delimited(char('('), take_until(")"), char(')'))),
    ))(input)
}

/// Parses one simple selector: `type`, `*`, `#id`, `.class`, `[attr]`, `:pseudo` or `::pseudo`.
fn parse_simple_selector(input: &str) -> IResult<&str, SimpleSelector> {
    alt((
        map(preceded(char('#'), parse_ident), |s| {
            SimpleSelector::Id(s.to_string())
        }),
        map(preceded(char('.'), parse_ident), |s| {
            SimpleSelector::Class(s.to_string())
        }),
        // `::` must be tried before `:`
        map(preceded(tag("::"), parse_pseudo_name), |s| {
            SimpleSelector::PseudoElement(s.to_string())
        }),
        map(preceded(char(':'), parse_pseudo_name), |s| {
            SimpleSelector::PseudoClass(s.to_string())
        }),
        map(delimited(char('['), take_until("]"), char(']')), |s: &str| {
            SimpleSelector::Attribute(s.to_string())
        }),
        map(char('*'), |_| SimpleSelector::Type("*".to_string())),
        map(parse_ident, |s| SimpleSelector::Type(s.to_string())),
    ))(input)
}

fn parse_raw_compound(input: &str) -> IResult<&str, RawCompound> {
    many1(parse_simple_selector)(input)
}

fn parse_combinator(input: &str) -> IResult<&str, Combinator> {
    alt((
        map(char('>'), |_| Combinator::Child),
        map(char('+'), |_| Combinator::AdjacentSibling),
        map(char('~'), |_| Combinator::GeneralSibling),
    ))(input)
}

fn parse_complex(input: &str) -> IResult<&str, Vec<(RawCompound, Option<Combinator>)>> {
    let (mut input, mut current) = parse_raw_compound(input)?;
    let mut parts = Vec::new();

    loop {
        let (rem, ws) = multispace0(input)?;

        if let Ok((after_op, combinator)) = parse_combinator(rem) {
            // A trailing combinator is a syntax error
            let (after_ws, _) = multispace0(after_op)?;
            let (next_input, next) = parse_raw_compound(after_ws)?;
            parts.push((current, Some(combinator)));
            current = next;
            input = next_input;
            continue;
        }

        if !ws.is_empty() {
            if let Ok((next_input, next)) = parse_raw_compound(rem) {
                parts.push((current, Some(Combinator::Descendant)));
                current = next;
                input = next_input;
                continue;
            }
        }

        break;
    }

    parts.push((current, None));
    Ok((input, parts))
}
