use crate::error::Result;
use crate::selector::tokens::{class_content, stringify, tokenize, SelectorToken};

/// Prepend `prefix` to every class of `selector`, including classes nested in
/// selector arguments such as `:where(.btn)`, `:has(.modal-open)` or the
/// `of S` clause of `:nth-child(2n of .item)`.
///
/// An empty prefix returns the selector untouched without tokenizing it.
pub fn apply_prefix(selector: &str, prefix: &str) -> Result<String> {
    if prefix.is_empty() {
        return Ok(selector.to_owned());
    }

    let mut tokens = tokenize(selector)?;
    for token in &mut tokens {
        let rewrites_argument = token.takes_selector_argument();
        let rewrites_of_clause = token.takes_of_selector();
        match token {
            SelectorToken::Class { name, content } => {
                name.insert_str(0, prefix);
                *content = class_content(name);
            }
            SelectorToken::PseudoClass {
                name,
                argument: Some(argument),
                content,
            } if rewrites_argument => {
                *argument = apply_prefix(argument, prefix)?;
                *content = format!(":{}({})", name, argument);
            }
            SelectorToken::PseudoClass {
                name,
                argument: Some(argument),
                content,
            } if rewrites_of_clause => {
                let rewritten = match argument.split_once(" of ") {
                    Some((an_plus_b, selector)) => Some(format!(
                        "{} of {}",
                        an_plus_b,
                        apply_prefix(selector, prefix)?
                    )),
                    None => None,
                };
                if let Some(rewritten) = rewritten {
                    *argument = rewritten;
                    *content = format!(":{}({})", name, argument);
                }
            }
            _ => {}
        }
    }

    Ok(stringify(&tokens))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_prefix_is_byte_for_byte() {
        for selector in [".btn", "  .btn ,  .x  ", "not even ( a selector"] {
            assert_eq!(apply_prefix(selector, "").unwrap(), selector);
        }
    }

    #[test]
    fn prefixes_plain_classes() {
        assert_eq!(apply_prefix(".btn-primary", "x-").unwrap(), ".x-btn-primary");
        assert_eq!(
            apply_prefix("input.tab:checked + .tab-content", "x-").unwrap(),
            "input.x-tab:checked + .x-tab-content"
        );
    }

    #[test]
    fn recurses_into_selector_arguments() {
        assert_eq!(apply_prefix(":where(.btn)", "x-").unwrap(), ":where(.x-btn)");
        assert_eq!(
            apply_prefix(":root:has(:is(.modal-open, .modal:target))", "x-").unwrap(),
            ":root:has(:is(.x-modal-open, .x-modal:target))"
        );
    }

    #[test]
    fn prefixes_nth_child_of_clauses() {
        assert_eq!(
            apply_prefix(".a:nth-child(2n of .b)", "x-").unwrap(),
            ".x-a:nth-child(2n of .x-b)"
        );
        assert_eq!(
            apply_prefix("li:nth-last-child(1 of .menu-item, .active)", "x-").unwrap(),
            "li:nth-last-child(1 of .x-menu-item, .x-active)"
        );
        assert_eq!(
            apply_prefix(".a:nth-child(odd)", "x-").unwrap(),
            ".x-a:nth-child(odd)"
        );
    }

    #[test]
    fn leaves_other_tokens_alone() {
        assert_eq!(
            apply_prefix("[dir=\"rtl\"] li:nth-child(2n+1)::before", "x-").unwrap(),
            "[dir=\"rtl\"] li:nth-child(2n+1)::before"
        );
    }

    #[test]
    fn propagates_tokenize_failures() {
        assert!(apply_prefix(".btn:", "x-").is_err());
    }
}
