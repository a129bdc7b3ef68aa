//! Flat selector tokens on top of the `cssparser` lexer.
//!
//! A selector such as `input.tab:checked + .tab-content` becomes
//! `[Type(input), Class(tab), PseudoClass(checked), Combinator( + ), Class(tab-content)]`.
//! Pseudo-class arguments are kept as raw text, so a nested selector like the
//! one in `:where(.btn)` is tokenized again only when somebody asks for it.
//!
//! Every token remembers the exact source slice it came from, which makes
//! `stringify(tokenize(s)?)` reproduce `s` byte for byte (modulo surrounding
//! whitespace).

use crate::error::{PresetError, Result};
use cssparser::{
    serialize_identifier, BasicParseErrorKind, ParseError, Parser, ParserInput, Token,
};

/// Pseudo-classes whose argument is itself a selector list.
const SELECTOR_PSEUDO_CLASSES: &[&str] = &[
    "where",
    "is",
    "has",
    "not",
    "matches",
    "any",
    "-webkit-any",
    "-moz-any",
    "host",
    "host-context",
];

/// Pseudo-classes accepting an `An+B of S` argument.
const NTH_OF_PSEUDO_CLASSES: &[&str] = &["nth-child", "nth-last-child"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorToken {
    /// `.name`
    Class { name: String, content: String },
    /// `:name` or `:name(argument)`
    PseudoClass {
        name: String,
        argument: Option<String>,
        content: String,
    },
    /// `::name` or `::name(argument)`
    PseudoElement {
        name: String,
        argument: Option<String>,
        content: String,
    },
    /// `#name`
    Id { name: String, content: String },
    /// `input`, `html`, ...
    Type { name: String, content: String },
    /// `*`
    Universal { content: String },
    /// `[name]`, `[name="value"]`, ...
    Attribute {
        name: String,
        value: Option<String>,
        content: String,
    },
    /// Descendant, child and sibling combinators with their surrounding whitespace.
    Combinator { content: String },
    /// Separator between two selectors of a list.
    Comma { content: String },
}

impl SelectorToken {
    /// Serialized form of the token.
    pub fn content(&self) -> &str {
        match self {
            SelectorToken::Class { content, .. }
            | SelectorToken::PseudoClass { content, .. }
            | SelectorToken::PseudoElement { content, .. }
            | SelectorToken::Id { content, .. }
            | SelectorToken::Type { content, .. }
            | SelectorToken::Universal { content }
            | SelectorToken::Attribute { content, .. }
            | SelectorToken::Combinator { content }
            | SelectorToken::Comma { content } => content,
        }
    }

    /// Class name when this is a class token.
    pub fn class_name(&self) -> Option<&str> {
        match self {
            SelectorToken::Class { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Name of a class, id, type, attribute or pseudo token.
    pub fn name(&self) -> Option<&str> {
        match self {
            SelectorToken::Class { name, .. }
            | SelectorToken::PseudoClass { name, .. }
            | SelectorToken::PseudoElement { name, .. }
            | SelectorToken::Id { name, .. }
            | SelectorToken::Type { name, .. }
            | SelectorToken::Attribute { name, .. } => Some(name),
            SelectorToken::Universal { .. }
            | SelectorToken::Combinator { .. }
            | SelectorToken::Comma { .. } => None,
        }
    }

    /// True for `:nth-child()` and `:nth-last-child()`, whose argument may end in `of S`.
    pub fn takes_of_selector(&self) -> bool {
        match self {
            SelectorToken::PseudoClass {
                name,
                argument: Some(_),
                ..
            } => NTH_OF_PSEUDO_CLASSES
                .iter()
                .any(|candidate| name.eq_ignore_ascii_case(candidate)),
            _ => false,
        }
    }

    /// True for pseudo-classes such as `:where()` or `:has()` whose argument is a selector.
    pub fn takes_selector_argument(&self) -> bool {
        match self {
            SelectorToken::PseudoClass {
                name,
                argument: Some(_),
                ..
            } => SELECTOR_PSEUDO_CLASSES
                .iter()
                .any(|candidate| name.eq_ignore_ascii_case(candidate)),
            _ => false,
        }
    }
}

/// Canonical `.name` form of a class, escaping whatever needs it.
pub fn class_content(name: &str) -> String {
    let mut content = String::with_capacity(name.len() + 1);
    content.push('.');
    // writing into a String never fails
    let _ = serialize_identifier(name, &mut content);
    content
}

/// Split a selector string into tokens.
pub fn tokenize(selector: &str) -> Result<Vec<SelectorToken>> {
    let mut input = ParserInput::new(selector.trim());
    let mut parser = Parser::new(&mut input);
    read_tokens(&mut parser).map_err(|err| PresetError::Selector {
        selector: selector.to_owned(),
        message: format!("{:?} at column {}", err.kind, err.location.column),
    })
}

/// Join tokens back into a selector string.
pub fn stringify(tokens: &[SelectorToken]) -> String {
    tokens.iter().map(SelectorToken::content).collect()
}

/// Tokens of the first selector of a selector list.
pub fn first_selector(tokens: &[SelectorToken]) -> &[SelectorToken] {
    let end = tokens
        .iter()
        .position(|token| matches!(token, SelectorToken::Comma { .. }))
        .unwrap_or(tokens.len());
    &tokens[..end]
}

fn read_tokens<'i>(parser: &mut Parser<'i, '_>) -> std::result::Result<Vec<SelectorToken>, ParseError<'i, ()>> {
    let mut tokens = Vec::new();

    loop {
        let start = parser.state();
        let token = match parser.next_including_whitespace().map(Token::clone) {
            Ok(token) => token,
            Err(err) if matches!(err.kind, BasicParseErrorKind::EndOfInput) => break,
            Err(err) => return Err(err.into()),
        };

        match token {
            Token::Delim('.') => {
                let name = match parser.next_including_whitespace().map(Token::clone)? {
                    Token::Ident(name) => name.to_string(),
                    other => return Err(parser.new_unexpected_token_error(other)),
                };
                tokens.push(SelectorToken::Class {
                    name,
                    content: parser.slice_from(start.position()).to_owned(),
                });
            }
            Token::Colon => {
                let mut is_element = false;
                let mut name_token = parser.next_including_whitespace().map(Token::clone)?;
                if name_token == Token::Colon {
                    is_element = true;
                    name_token = parser.next_including_whitespace().map(Token::clone)?;
                }
                let (name, argument) = match name_token {
                    Token::Ident(name) => (name.to_string(), None),
                    Token::Function(name) => (name.to_string(), Some(read_raw_block(parser)?)),
                    other => return Err(parser.new_unexpected_token_error(other)),
                };
                let content = parser.slice_from(start.position()).to_owned();
                tokens.push(if is_element {
                    SelectorToken::PseudoElement {
                        name,
                        argument,
                        content,
                    }
                } else {
                    SelectorToken::PseudoClass {
                        name,
                        argument,
                        content,
                    }
                });
            }
            Token::IDHash(name) => tokens.push(SelectorToken::Id {
                name: name.to_string(),
                content: parser.slice_from(start.position()).to_owned(),
            }),
            Token::Ident(name) => tokens.push(SelectorToken::Type {
                name: name.to_string(),
                content: parser.slice_from(start.position()).to_owned(),
            }),
            Token::Delim('*') => tokens.push(SelectorToken::Universal {
                content: parser.slice_from(start.position()).to_owned(),
            }),
            Token::SquareBracketBlock => {
                let (name, value) = parser.parse_nested_block(read_attribute)?;
                tokens.push(SelectorToken::Attribute {
                    name,
                    value,
                    content: parser.slice_from(start.position()).to_owned(),
                });
            }
            Token::WhiteSpace(_) | Token::Delim('>' | '+' | '~') | Token::Comma => {
                let mut is_comma = token == Token::Comma;
                loop {
                    let before = parser.state();
                    match parser.next_including_whitespace().map(Token::clone) {
                        Ok(Token::WhiteSpace(_)) | Ok(Token::Delim('>' | '+' | '~')) => {}
                        Ok(Token::Comma) if !is_comma => is_comma = true,
                        _ => {
                            parser.reset(&before);
                            break;
                        }
                    }
                }
                let content = parser.slice_from(start.position()).to_owned();
                if is_comma {
                    tokens.push(SelectorToken::Comma { content });
                } else if !(content.trim().is_empty() && parser.is_exhausted()) {
                    tokens.push(SelectorToken::Combinator { content });
                }
            }
            other => return Err(parser.new_unexpected_token_error(other)),
        }
    }

    Ok(tokens)
}

fn read_raw_block<'i>(parser: &mut Parser<'i, '_>) -> std::result::Result<String, ParseError<'i, ()>> {
    parser.parse_nested_block(|nested| {
        let start = nested.position();
        while nested.next_including_whitespace_and_comments().is_ok() {}
        Ok(nested.slice_from(start).trim().to_owned())
    })
}

fn read_attribute<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<(String, Option<String>), ParseError<'i, ()>> {
    let name = parser.expect_ident()?.to_string();
    if parser.is_exhausted() {
        return Ok((name, None));
    }

    match parser.next().map(Token::clone)? {
        Token::Delim('=')
        | Token::IncludeMatch
        | Token::DashMatch
        | Token::PrefixMatch
        | Token::SuffixMatch
        | Token::SubstringMatch => {}
        other => return Err(parser.new_unexpected_token_error(other)),
    }

    let value = match parser.next().map(Token::clone)? {
        Token::Ident(value) | Token::QuotedString(value) => value.to_string(),
        other => return Err(parser.new_unexpected_token_error(other)),
    };

    // case-sensitivity flags (`i`, `s`)
    while parser.next().is_ok() {}

    Ok((name, Some(value)))
}
