//! Shared string utilities.

/// Convert a string to StudlyCase (e.g., "first_name" -> "FirstName").
///
/// Words are separated by `_`, `-` or whitespace. The first character of
/// each word is upper-cased if it is ASCII and the rest is kept as written,
/// so `"userId"` becomes `"UserId"` and `"ßeta"` stays `"ßeta"`.
pub fn to_studly_case(s: &str) -> String {
    s.split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => std::iter::once(c.to_ascii_uppercase()).chain(chars).collect(),
            }
        })
        .collect()
}

/// Check whether `s` is a valid PHP label (`[a-zA-Z_\x80-\xff][a-zA-Z0-9_\x80-\xff]*`).
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() || !c.is_ascii() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric() || !c.is_ascii())
}
