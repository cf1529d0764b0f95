//! Parsers for the two column configuration mini-languages.
//!
//! The name-list parser and the type-spec parser are independent, stateless
//! functions; they share nothing but the lexer layer in
//! [`crate::tokenizer`]. Their outputs are consumed positionally by the
//! record-mapping side of a CSV codec: names label output keys, type entries
//! select per-column primitive decoders.

mod column_names;
mod column_types;

pub use column_names::parse_column_names;
pub use column_types::{TypeSpecError, parse_column_types};
