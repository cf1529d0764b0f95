//! Value types shared by the column specification parsers.
//!
//! A parsed type specification is a flat, ordered sequence of [`TypeInfo`]
//! entries. Position in the sequence corresponds to position in the column
//! stream being described, except that a [`ColumnType::Repeat`] entry is a
//! directive rather than a column: it tells the consumer to cycle the
//! preceding `count` entries for all remaining columns.

/// Primitive decoder selection for one CSV column, or a repeat directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    String,
    Integer,
    Float,
    Boolean,
    /// Cycle the `count` entries immediately preceding this one for the
    /// remainder of the column stream.
    Repeat { count: usize },
}

/// One entry of a parsed column-type specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeInfo {
    pub column_type: ColumnType,
    /// Bracket nesting depth at which the entry was recorded; top level is 0.
    pub level: usize,
}

impl TypeInfo {
    #[must_use]
    pub fn new(column_type: ColumnType, level: usize) -> Self {
        Self { column_type, level }
    }
}
