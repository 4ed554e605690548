//! Mapping raw path segments to class identifiers.

use unicode_ident::is_xid_continue;

use crate::utils::{is_identifier_start, is_keyword};

/// Turns an arbitrary hierarchy segment into a valid Python identifier.
///
/// Implementations own any collision policy; generation only relies on
/// the result being a syntactically valid identifier.
pub trait NameSanitizer {
    fn sanitize(&self, raw: &str) -> String;
}

impl<F> NameSanitizer for F
where
    F: Fn(&str) -> String,
{
    fn sanitize(&self, raw: &str) -> String {
        self(raw)
    }
}

/// Default sanitizer: replaces invalid characters with `_`.
///
/// # Examples
/// ```
/// use copra_core::{IdentifierSanitizer, NameSanitizer};
/// assert_eq!(IdentifierSanitizer.sanitize("u_core-0"), "u_core_0");
/// assert_eq!(IdentifierSanitizer.sanitize("2nd"), "_2nd");
/// assert_eq!(IdentifierSanitizer.sanitize("class"), "class_");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentifierSanitizer;

impl NameSanitizer for IdentifierSanitizer {
    fn sanitize(&self, raw: &str) -> String {
        let mut name: String = raw
            .chars()
            .map(|c| if is_xid_continue(c) { c } else { '_' })
            .collect();

        match name.chars().next() {
            None => return "_".to_string(),
            Some(c) if !is_identifier_start(c) => name.insert(0, '_'),
            Some(_) => {}
        }

        if is_keyword(&name) {
            name.push('_');
        }
        name
    }
}
