//! Parser for the column-type specification grammar.
//!
//! The grammar is a comma-separated sequence of type tokens, where a token
//! is either a recognised primitive type name or a bracketed group of nested
//! tokens, and either form may be followed by `*` to request that the
//! preceding unit be cycled over the remaining columns. Examples:
//!
//! ```text
//! integer,string,float
//! string,[integer,float]*
//! [[integer]*]
//! ```
//!
//! Parsing is all-or-nothing: any grammar violation fails the whole call and
//! produces no partial result.

use log::trace;
use phf::phf_map;
use thiserror::Error;

use crate::columns::{ColumnType, TypeInfo};
use crate::tokenizer::{TypeToken, tokenize_types};

/// Maps label strings to their primitive [`ColumnType`].
///
/// Returns `Some(column_type)` if `label` names a recognised type, or `None`
/// otherwise. The set is fixed, so a static map avoids rebuilding a lookup
/// table per parse call.
static TYPE_NAMES: phf::Map<&'static str, ColumnType> = phf_map! {
    "string" => ColumnType::String,
    "integer" => ColumnType::Integer,
    "float" => ColumnType::Float,
    "boolean" => ColumnType::Boolean,
};

fn type_for_label(label: &str) -> Option<ColumnType> {
    TYPE_NAMES.get(label).copied()
}

/// Grammar violations reported by [`parse_column_types`].
///
/// Offsets are byte positions into the input string: the start of the
/// offending token, or the input length for an unclosed bracket detected at
/// end of input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeSpecError {
    /// A label did not name a recognised column type. The empty name arises
    /// from a `,` with no label in front of it.
    #[error("unknown column type `{name}` at offset {offset}")]
    UnknownTypeName { name: String, offset: usize },
    /// A `]` with no matching `[`, or a `[` left open at end of input.
    #[error("unbalanced brackets at offset {offset}")]
    UnbalancedBrackets { offset: usize },
    /// A `*` with nothing in front of it to repeat.
    #[error("repeat marker `*` at offset {offset} has no preceding entry")]
    RepeatWithNoPrecedingEntry { offset: usize },
}

/// Parse a column-type specification into its flat entry sequence.
///
/// Each recognised type name yields a [`TypeInfo`] recorded at the bracket
/// depth where it appeared; each `*` yields a [`ColumnType::Repeat`] entry
/// whose count covers the unit being cycled.
///
/// # Errors
///
/// Returns a [`TypeSpecError`] on the first grammar violation: an
/// unrecognised (or empty) type name, a bracket mismatch, or a repeat marker
/// with no preceding entry.
///
/// # Examples
///
/// ```rust
/// use colspec::{ColumnType, TypeInfo, parse_column_types};
///
/// let entries = parse_column_types("[integer,string]*")?;
/// assert_eq!(
///     entries,
///     vec![
///         TypeInfo::new(ColumnType::Integer, 1),
///         TypeInfo::new(ColumnType::String, 1),
///         TypeInfo::new(ColumnType::Repeat { count: 2 }, 0),
///     ]
/// );
/// # Ok::<(), colspec::TypeSpecError>(())
/// ```
pub fn parse_column_types(input: &str) -> Result<Vec<TypeInfo>, TypeSpecError> {
    let mut entries: Vec<TypeInfo> = Vec::new();
    let mut depth = 0usize;
    // Whether the previous significant token was a label; a comma is only
    // valid as a label terminator.
    let mut after_label = false;

    for (token, span) in tokenize_types(input) {
        match token {
            TypeToken::Whitespace => {}
            TypeToken::Label => {
                #[expect(clippy::expect_used, reason = "invalid span indicates lexer bug")]
                let text = input.get(span.clone()).expect("lexer produced invalid span");
                let column_type =
                    type_for_label(text).ok_or_else(|| TypeSpecError::UnknownTypeName {
                        name: text.to_owned(),
                        offset: span.start,
                    })?;
                entries.push(TypeInfo::new(column_type, depth));
                after_label = true;
            }
            TypeToken::Comma => {
                if !after_label {
                    // A comma here opens a label and immediately flushes it
                    // empty, so it can never name a type.
                    return Err(TypeSpecError::UnknownTypeName {
                        name: String::new(),
                        offset: span.start,
                    });
                }
                after_label = false;
            }
            TypeToken::LBracket => {
                depth += 1;
                after_label = false;
            }
            TypeToken::RBracket => {
                depth = depth
                    .checked_sub(1)
                    .ok_or(TypeSpecError::UnbalancedBrackets { offset: span.start })?;
                after_label = false;
            }
            TypeToken::Star => {
                let repeat = resolve_repeat(&entries, depth, span.start)?;
                entries.push(repeat);
                after_label = false;
            }
        }
    }

    if depth > 0 {
        return Err(TypeSpecError::UnbalancedBrackets {
            offset: input.len(),
        });
    }

    trace!("parsed {} column type entries", entries.len());
    Ok(entries)
}

/// Resolve a `*` into a repeat entry.
///
/// The count is the length of the contiguous trailing run of entries whose
/// level equals the last entry's level: closing a bracketed group leaves all
/// of its siblings trailing at the same depth, so this run is exactly the
/// group being cycled. Top-level entries are not grouped unless bracketed,
/// so a top-level `*` always covers the single preceding entry.
fn resolve_repeat(
    entries: &[TypeInfo],
    depth: usize,
    offset: usize,
) -> Result<TypeInfo, TypeSpecError> {
    let last = entries
        .last()
        .ok_or(TypeSpecError::RepeatWithNoPrecedingEntry { offset })?;
    let count = if last.level > 0 {
        entries
            .iter()
            .rev()
            .take_while(|entry| entry.level == last.level)
            .count()
    } else {
        1
    };
    Ok(TypeInfo::new(ColumnType::Repeat { count }, depth))
}
