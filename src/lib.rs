//! Parsers for the column configuration strings of a CSV codec.
//!
//! A CSV options surface accepts two compact textual mini-languages: a
//! comma-separated list of column names, and a bracketed column-type
//! specification with repeat groups (for example `string,[integer,float]*`).
//! This crate turns those strings into structured data and nothing more;
//! tokenizing CSV itself and mapping records to values belong to the codec
//! that consumes the parsed output.

#![forbid(unsafe_code)]

pub mod columns;
pub mod parser;
pub mod tokenizer;

pub use columns::{ColumnType, TypeInfo};
pub use parser::{TypeSpecError, parse_column_names, parse_column_types};
pub use tokenizer::{NameToken, Span, TypeToken, tokenize_names, tokenize_types};
