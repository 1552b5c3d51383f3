/// Placeholder shown for every absent field.
pub const NOT_AVAILABLE: &str = "N/A";

/// A scalar field, or `fallback` when it is absent or empty.
pub fn render_field(value: Option<&str>, fallback: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}

/// The items of a list field in order, or a single `fallback` entry when the
/// list is absent or empty.
pub fn render_list(items: Option<&[String]>, fallback: &str) -> Vec<String> {
    match items {
        Some(items) if !items.is_empty() => items.to_vec(),
        _ => vec![fallback.to_string()],
    }
}
