use crate::sanitize::{IdentifierSanitizer, NameSanitizer};

#[test]
fn valid_names_unchanged() {
    assert_eq!(IdentifierSanitizer.sanitize("u_core"), "u_core");
    assert_eq!(IdentifierSanitizer.sanitize("_hidden"), "_hidden");
}

#[test]
fn invalid_characters_replaced() {
    assert_eq!(IdentifierSanitizer.sanitize("my-sig"), "my_sig");
    assert_eq!(IdentifierSanitizer.sanitize("cores[0]"), "cores_0_");
    assert_eq!(IdentifierSanitizer.sanitize("a b"), "a_b");
}

#[test]
fn leading_digit_prefixed() {
    assert_eq!(IdentifierSanitizer.sanitize("0x"), "_0x");
}

#[test]
fn keywords_suffixed() {
    assert_eq!(IdentifierSanitizer.sanitize("class"), "class_");
    assert_eq!(IdentifierSanitizer.sanitize("if"), "if_");
}

#[test]
fn empty_input() {
    assert_eq!(IdentifierSanitizer.sanitize(""), "_");
}

#[test]
fn closures_are_sanitizers() {
    let upper = |raw: &str| raw.to_uppercase();
    assert_eq!(upper.sanitize("core"), "CORE");
}

#[test]
fn non_identifier_numerics_replaced() {
    assert_eq!(IdentifierSanitizer.sanitize("s²"), "s_");
    assert_eq!(IdentifierSanitizer.sanitize("²s"), "_s");
    assert_eq!(IdentifierSanitizer.sanitize("größe"), "größe");
}
