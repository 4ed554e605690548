use unicode_general_category::{GeneralCategory, get_general_category};
use unicode_ident::{is_xid_continue, is_xid_start};

/// Python keywords that pass `str.isidentifier()` but cannot name an attribute.
pub const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
];

/// Split a dotted hierarchy path into segments.
///
/// Dots inside `[...]` belong to the segment, so generate-block labels
/// such as `gen[a.b]` stay intact.
///
/// # Examples
/// ```
/// use copra_core::utils::split_path;
/// assert_eq!(split_path("dut.cores[0].reg"), ["dut", "cores[0]", "reg"]);
/// assert_eq!(split_path("top.gen[a.b]"), ["top", "gen[a.b]"]);
/// ```
pub fn split_path(path: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in path.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            '.' if depth == 0 => {
                segments.push(&path[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    segments.push(&path[start..]);
    segments
}

/// Last segment of a dotted hierarchy path.
pub fn last_segment(path: &str) -> &str {
    split_path(path).pop().unwrap_or(path)
}

/// Whether a child name denotes a dynamically indexed element (`sig[3]`).
pub fn is_indexed_name(name: &str) -> bool {
    name.contains('[') && name.ends_with(']')
}

/// Python `str.isidentifier()`: `XID_Start` or `_`, then `XID_Continue`.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    is_identifier_start(first) && chars.all(is_xid_continue)
}

pub fn is_identifier_start(c: char) -> bool {
    c == '_' || is_xid_start(c)
}

/// Python `str.isprintable()` for one character. Space is the only
/// printable separator.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    !matches!(
        get_general_category(c),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::Surrogate
            | GeneralCategory::PrivateUse
            | GeneralCategory::Unassigned
            | GeneralCategory::SpaceSeparator
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
    )
}

pub fn is_keyword(s: &str) -> bool {
    PYTHON_KEYWORDS.contains(&s)
}

/// Render a string literal the way Python's `repr()` does.
///
/// # Examples
/// ```
/// use copra_core::utils::py_repr;
/// assert_eq!(py_repr("clk"), "'clk'");
/// assert_eq!(py_repr("it's"), "\"it's\"");
/// ```
pub fn py_repr(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if is_printable(c) => out.push(c),
            c => {
                let code = c as u32;
                let escaped = match code {
                    0..=0xff => format!("\\x{code:02x}"),
                    0x100..=0xffff => format!("\\u{code:04x}"),
                    _ => format!("\\U{code:08x}"),
                };
                out.push_str(&escaped);
            }
        }
    }
    out.push(quote);
    out
}
