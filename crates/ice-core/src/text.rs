//! Icelandic text rendering helpers.
//!
//! Two small pieces of shared glue: joining a list the way Icelandic prose
//! does (`"a, b og c"`), and grouping digits with the Icelandic thousands
//! separator (`60000` → `"60.000"`).

/// Join items into a human-readable Icelandic list.
///
/// All but the last two items are separated by `", "`; the last two by
/// `" og "`.
///
/// ```
/// use ice_core::text::human_readable_list;
/// assert_eq!(human_readable_list(&["Hugi"]), "Hugi");
/// assert_eq!(human_readable_list(&["Kjartan", "Strumparnir"]), "Kjartan og Strumparnir");
/// assert_eq!(
///     human_readable_list(&["Hugi", "Kjartan", "Strumparnir"]),
///     "Hugi, Kjartan og Strumparnir"
/// );
/// ```
pub fn human_readable_list<T: AsRef<str>>(items: &[T]) -> String {
    let mut out = String::new();
    let n = items.len();
    for (i, item) in items.iter().enumerate() {
        out.push_str(item.as_ref());
        if n >= 2 && i + 2 == n {
            out.push_str(" og ");
        } else if n >= 2 && i + 2 < n {
            out.push_str(", ");
        }
    }
    out
}

/// Format a non-negative integer with `.` as the thousands separator, the
/// Icelandic convention (`1234567` → `"1.234.567"`).
pub fn format_grouped(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}
