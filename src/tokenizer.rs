//! Lexical analysis for the column configuration mini-languages.
//!
//! This module exposes `tokenize_names` and `tokenize_types`, which convert
//! the raw `column_names` and `column_types` option strings into sequences of
//! `(token, Span)` pairs. It uses the `logos` crate to recognise tokens.
//!
//! Both grammars skip whitespace between fields but keep it inside a field
//! once one has started. The token classes encode that directly: a field or
//! label token starts at the first character that could open a field and
//! runs through every character the field accumulates, so leading whitespace
//! always lexes as trivia while interior and trailing whitespace stay inside
//! the field token.

use logos::Logos;

/// Byte range for a token within the source.
pub type Span = std::ops::Range<usize>;

/// Tokens of the column-name list grammar.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameToken {
    #[regex(r"[ \t\r\n]+")]
    Whitespace,
    #[token(",")]
    Comma,
    /// A name field: begins with a non-whitespace, non-comma character and
    /// extends through every following non-comma character, trailing
    /// whitespace included.
    #[regex(r"[^, \t\r\n][^,]*")]
    Field,
}

/// Tokens of the column-type specification grammar.
///
/// Only `,`, `]`, and `*` terminate a label, so `[` and whitespace are legal
/// label interior characters (they make the eventual type-name lookup fail,
/// but lexically they belong to the label). `LBracket` consequently only
/// lexes where a label could start.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeToken {
    #[regex(r"[ \t\r\n]+")]
    Whitespace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,
    #[token("*")]
    Star,
    #[regex(r"[^,\[\]* \t\r\n][^,\]*]*")]
    Label,
}

/// Tokenise a column-name list.
///
/// Every input character belongs to some token class, so this is total.
///
/// # Examples
///
/// ```rust
/// use colspec::{NameToken, tokenize_names};
///
/// let tokens = tokenize_names("a, b");
/// let kinds: Vec<NameToken> = tokens.iter().map(|(k, _)| *k).collect();
/// assert_eq!(
///     kinds,
///     vec![NameToken::Field, NameToken::Comma, NameToken::Whitespace, NameToken::Field]
/// );
/// ```
#[must_use]
pub fn tokenize_names(src: &str) -> Vec<(NameToken, Span)> {
    collect_tokens(NameToken::lexer(src))
}

/// Tokenise a column-type specification.
///
/// # Examples
///
/// ```rust
/// use colspec::{TypeToken, tokenize_types};
///
/// let tokens = tokenize_types("[integer]*");
/// let kinds: Vec<TypeToken> = tokens.iter().map(|(k, _)| *k).collect();
/// assert_eq!(
///     kinds,
///     vec![
///         TypeToken::LBracket,
///         TypeToken::Label,
///         TypeToken::RBracket,
///         TypeToken::Star
///     ]
/// );
/// ```
#[must_use]
pub fn tokenize_types(src: &str) -> Vec<(TypeToken, Span)> {
    collect_tokens(TypeToken::lexer(src))
}

fn collect_tokens<'a, T: Logos<'a, Source = str>>(
    mut lexer: logos::Lexer<'a, T>,
) -> Vec<(T, Span)> {
    let mut out = Vec::new();
    while let Some(result) = lexer.next() {
        // The token classes cover every character, so the lexer cannot fail.
        let Ok(token) = result else { continue };
        out.push((token, lexer.span()));
    }
    out
}
