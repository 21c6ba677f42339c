use chrono::{DateTime, Utc};

/// Graphite's absolute time format, as accepted by `from`/`until`.
const GRAPHITE_TIME_FORMAT: &str = "%H:%M_%Y%m%d";

#[must_use]
pub fn datetime_to_graphite_time(time: DateTime<Utc>) -> String {
    time.format(GRAPHITE_TIME_FORMAT).to_string()
}

/// Returns `true` for names of the form `[A-Za-z_][A-Za-z0-9_]*`.
#[must_use]
pub fn is_bare_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
