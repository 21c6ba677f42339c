use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Bytes that survive form escaping untouched.
///
/// Space is excluded from the set so it passes through the percent encoder
/// and can be rewritten to `+` afterwards; a literal `+` is still encoded.
const FORM_COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b' ');

/// Escapes a query key or value using form encoding.
///
/// ASCII alphanumerics and `_ . - ~` are kept, space becomes `+`, every other
/// byte of the UTF-8 encoding becomes `%XX`.
#[must_use]
pub fn form_escape(input: &str) -> String {
    utf8_percent_encode(input, FORM_COMPONENT_SET)
        .to_string()
        .replace(' ', "+")
}
