//! Picks the utility a rule's CSS is filed under.
//!
//! The decision looks only at the shape of the rule's first selector and runs
//! an ordered chain of cases; the first case that recognizes the shape wins.
//! Rules nothing recognizes get an empty base, which no utility can match.

use crate::error::Result;
use crate::selector::tokens::{first_selector, tokenize, SelectorToken};
use crate::style::owned_css::OwnedRule;

/// Selector shape handed to each classification case.
struct Shape<'a> {
    /// First selector of the rule, already prefixed.
    selector: &'a str,
    /// Tokens of `selector`.
    tokens: &'a [SelectorToken],
    /// Token count of the rule's whole selector list.
    list_len: usize,
    prefix: &'a str,
}

/// `Ok(None)` means the case does not apply and the next one is tried.
type Case = fn(&Shape<'_>) -> Result<Option<String>>;

const CASES: &[(&str, Case)] = &[
    ("class", leading_class),
    ("where", where_argument),
    ("direction-or-root", direction_or_root),
    ("type", last_class),
];

/// Base key of an owned rule.
pub fn classify_rule(rule: &OwnedRule, prefix: &str) -> Result<String> {
    let Some(first) = rule.selectors.first() else {
        return Ok(String::new());
    };
    let list_len = if rule.selectors.len() == 1 {
        None
    } else {
        Some(tokenize(&rule.selector_text())?.len())
    };
    classify_selector(first, list_len, prefix)
}

/// Base key of a single selector.
pub fn classify(selector: &str, prefix: &str) -> Result<String> {
    classify_selector(selector, None, prefix)
}

fn classify_selector(selector: &str, list_len: Option<usize>, prefix: &str) -> Result<String> {
    let all_tokens = tokenize(selector)?;
    let tokens = first_selector(&all_tokens);
    let shape = Shape {
        selector: selector.trim(),
        tokens,
        list_len: list_len.unwrap_or(all_tokens.len()),
        prefix,
    };

    for (label, case) in CASES {
        if let Some(base) = case(&shape)? {
            log::trace!("`{}` classified as `{}` ({})", selector, base, label);
            return Ok(base);
        }
    }
    Ok(String::new())
}

/// `.btn-primary` files under `btn-primary`, except state classes that belong
/// to a parent component (`.link-hover` -> `link`, `.modal-open` -> `modal`).
fn leading_class(shape: &Shape<'_>) -> Result<Option<String>> {
    let Some(SelectorToken::Class { name, .. }) = shape.tokens.first() else {
        return Ok(None);
    };
    let prefix = shape.prefix;
    if shape.selector.starts_with(&format!(".{}link-", prefix)) {
        Ok(Some(format!("{}link", prefix)))
    } else if shape.selector.starts_with(&format!(".{}modal-open", prefix)) {
        Ok(Some(format!("{}modal", prefix)))
    } else {
        Ok(Some(name.clone()))
    }
}

/// `:where(.foo ...)` only zeroes specificity, the base is the first class inside.
fn where_argument(shape: &Shape<'_>) -> Result<Option<String>> {
    match shape.tokens.first() {
        Some(SelectorToken::PseudoClass { name, argument, .. }) if name == "where" => {
            let argument = argument.as_deref().unwrap_or_default();
            first_name_of(argument).map(Some)
        }
        _ => Ok(None),
    }
}

/// `[dir="rtl"] .x` and `:root ...` overrides: the real target sits behind the wrapper.
fn direction_or_root(shape: &Shape<'_>) -> Result<Option<String>> {
    let wrapped = match shape.tokens.first() {
        Some(SelectorToken::Attribute {
            name,
            value: Some(value),
            ..
        }) => name == "dir" && value == "rtl",
        Some(SelectorToken::PseudoClass {
            name,
            argument: None,
            ..
        }) => name == "root",
        _ => false,
    };
    if !wrapped {
        return Ok(None);
    }

    let modal_open = format!(".{}modal-open", shape.prefix);
    if shape
        .tokens
        .get(1)
        .is_some_and(|token| token.content().contains(&modal_open))
    {
        return Ok(Some(format!("{}modal", shape.prefix)));
    }

    Ok(Some(name_or_empty(shape.tokens.get(2))))
}

/// `input.tab:checked + .tab-content` files under its last class, `tab-content`.
/// A bare `html:has(.drawer-open)` falls back to the class inside `:has()`.
fn last_class(shape: &Shape<'_>) -> Result<Option<String>> {
    let Some(SelectorToken::Type { name: tag, .. }) = shape.tokens.first() else {
        return Ok(None);
    };

    if let Some(name) = shape.tokens.iter().rev().find_map(SelectorToken::class_name) {
        return Ok(Some(name.to_owned()));
    }

    if tag == "html" && shape.list_len == 2 {
        if let Some(SelectorToken::PseudoClass {
            name,
            argument: Some(argument),
            ..
        }) = shape.tokens.get(1)
        {
            if name == "has" {
                return first_name_of(argument).map(Some);
            }
        }
    }

    Ok(Some(String::new()))
}

/// Name of the first token inside a pseudo-class argument.
fn first_name_of(argument: &str) -> Result<String> {
    let tokens = tokenize(argument)?;
    Ok(name_or_empty(tokens.first()))
}

/// Usually a class; other named tokens lend their name, anything else
/// leaves the rule unclassified.
fn name_or_empty(token: Option<&SelectorToken>) -> String {
    token
        .and_then(SelectorToken::name)
        .map(str::to_owned)
        .unwrap_or_default()
}
