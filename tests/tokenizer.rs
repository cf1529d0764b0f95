use colspec::{NameToken, TypeToken, tokenize_names, tokenize_types};
use rstest::rstest;

#[rstest]
#[case("", vec![])]
#[case("a,b", vec![NameToken::Field, NameToken::Comma, NameToken::Field])]
#[case(" a", vec![NameToken::Whitespace, NameToken::Field])]
#[case(" \t , ", vec![NameToken::Whitespace, NameToken::Comma, NameToken::Whitespace])]
fn name_token_kinds(#[case] source: &str, #[case] expected: Vec<NameToken>) {
    let kinds: Vec<NameToken> = tokenize_names(source).iter().map(|(k, _)| *k).collect();
    assert_eq!(kinds, expected);
}

#[rstest]
fn name_field_keeps_trailing_whitespace() {
    let tokens = tokenize_names("  a ,b");
    let texts: Vec<&str> = tokens
        .iter()
        .filter(|(k, _)| *k == NameToken::Field)
        .map(|(_, span)| "  a ,b".get(span.clone()).unwrap_or(""))
        .collect();
    assert_eq!(texts, vec!["a ", "b"]);
}

#[rstest]
#[case("[", vec![TypeToken::LBracket])]
#[case("]", vec![TypeToken::RBracket])]
#[case("*", vec![TypeToken::Star])]
#[case(",", vec![TypeToken::Comma])]
#[case("integer", vec![TypeToken::Label])]
#[case(
    "[integer,string]*",
    vec![
        TypeToken::LBracket,
        TypeToken::Label,
        TypeToken::Comma,
        TypeToken::Label,
        TypeToken::RBracket,
        TypeToken::Star,
    ]
)]
fn type_token_kinds(#[case] source: &str, #[case] expected: Vec<TypeToken>) {
    let kinds: Vec<TypeToken> = tokenize_types(source).iter().map(|(k, _)| *k).collect();
    assert_eq!(kinds, expected);
}

// Only `,`, `]`, and `*` terminate a label, so a `[` after a label's first
// character belongs to the label rather than opening a group.
#[rstest]
fn bracket_inside_label_stays_in_label() {
    let kinds: Vec<TypeToken> = tokenize_types("integer[string")
        .iter()
        .map(|(k, _)| *k)
        .collect();
    assert_eq!(kinds, vec![TypeToken::Label]);
}

#[rstest]
fn whitespace_after_label_start_stays_in_label() {
    let source = " integer ,";
    let tokens = tokenize_types(source);
    let kinds: Vec<TypeToken> = tokens.iter().map(|(k, _)| *k).collect();
    assert_eq!(
        kinds,
        vec![TypeToken::Whitespace, TypeToken::Label, TypeToken::Comma]
    );
    let label = tokens
        .iter()
        .find(|(k, _)| *k == TypeToken::Label)
        .map(|(_, span)| source.get(span.clone()).unwrap_or(""));
    assert_eq!(label, Some("integer "));
}
