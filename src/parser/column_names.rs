//! Parser for the comma-separated column-name list.
//!
//! Names label output columns positionally, so order matters and duplicates
//! and empty names are all preserved. The same grammar also carries the
//! per-column default-value strings, which is why a name may contain
//! arbitrary text.

use log::trace;

use crate::tokenizer::{NameToken, tokenize_names};

/// Split a column-name list into its fields.
///
/// Fields are delimited by `,`. Whitespace before a field's first
/// non-whitespace character is skipped; interior and trailing whitespace
/// belong to the field. A trailing comma does not produce a trailing empty
/// name, but a comma between two delimiters does produce an empty one.
///
/// This is a total function: every input yields a (possibly empty) list.
///
/// # Examples
///
/// ```rust
/// use colspec::parse_column_names;
///
/// assert_eq!(parse_column_names("a,b,c"), vec!["a", "b", "c"]);
/// assert_eq!(parse_column_names("  a , b ,c"), vec!["a ", "b ", "c"]);
/// assert_eq!(parse_column_names("a,,c"), vec!["a", "", "c"]);
/// ```
#[must_use]
pub fn parse_column_names(input: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut pending: Option<String> = None;
    for (token, span) in tokenize_names(input) {
        match token {
            NameToken::Whitespace => {}
            NameToken::Comma => names.push(pending.take().unwrap_or_default()),
            NameToken::Field => {
                #[expect(clippy::expect_used, reason = "invalid span indicates lexer bug")]
                let text = input.get(span).expect("lexer produced invalid span");
                pending = Some(text.to_owned());
            }
        }
    }
    if let Some(label) = pending {
        names.push(label);
    }
    trace!("parsed {} column names", names.len());
    names
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::parse_column_names;

    #[rstest]
    #[case("", &[])]
    #[case("   \t\n", &[])]
    #[case("a", &["a"])]
    #[case(",,", &["", ""])]
    #[case("a,b,", &["a", "b"])]
    #[case("a, \t ,c", &["a", "", "c"])]
    fn splits_fields(#[case] input: &str, #[case] expected: &[&str]) {
        assert_eq!(parse_column_names(input), expected);
    }

    #[rstest]
    fn keeps_interior_whitespace() {
        assert_eq!(
            parse_column_names("first name,last name "),
            vec!["first name", "last name "]
        );
    }
}
