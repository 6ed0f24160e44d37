use std::fmt::Display;

use url::Url;

/// Counts characters the way the external schema does: Unicode scalar values, not bytes.
///
/// ```
/// use blockkit_core::validate::char_len;
///
/// assert_eq!(char_len("héllo"), 5);
/// ```
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Checks that `value` is non-empty and at most `max` characters long.
///
/// ```
/// use blockkit_core::validate::is_present;
///
/// assert!(is_present("Submit", 24));
/// assert!(!is_present("", 24));
/// assert!(!is_present("This label is far too long to fit", 24));
/// ```
pub fn is_present(value: &str, max: usize) -> bool {
    !value.is_empty() && char_len(value) <= max
}

/// Like [`is_present`] but accepts a missing value.
pub(crate) fn is_present_if_set(value: Option<&str>, max: usize) -> bool {
    value.is_none_or(|value| is_present(value, max))
}

/// Checks that `value` parses as an absolute URL of at most `max` characters.
///
/// ```
/// use blockkit_core::validate::is_absolute_url;
///
/// assert!(is_absolute_url("https://example.com/docs", 3000));
/// assert!(!is_absolute_url("/relative/path", 3000));
/// ```
pub fn is_absolute_url(value: &str, max: usize) -> bool {
    is_present(value, max) && Url::parse(value).is_ok()
}

pub(crate) fn ensure<E>(condition: bool, err: E) -> Result<(), E> {
    if condition { Ok(()) } else { Err(err) }
}

pub(crate) fn log_rejection(kind: &str, err: &impl Display) {
    tracing::debug!(target: "blockkit::validate", kind, error = %err, "construction rejected");
}
