//! Search-pattern normalization and search-string construction
//!
//! A user-supplied pattern goes through two stages on its way to a native
//! directory-listing call: [`normalize_search_pattern`] trims and rewrites
//! it, then [`full_search_string`] joins it onto the directory being
//! enumerated.

use crate::conventions::PathConventions;
use crate::error::{PatternError, Result};
use crate::validate::check_search_pattern;

/// Normalize a search pattern the way the host OS would.
///
/// Win32 trims only trailing U+0020 from a pattern argument, so this trims
/// exactly that: no leading trim, no other whitespace. A bare `"."`
/// becomes `"*"`, making "current directory" mean "everything" as it does
/// in a shell listing. The result is then checked with
/// [`check_search_pattern`] and its failure propagated unchanged.
///
/// # Examples
/// ```
/// use search_path_utils::{normalize_search_pattern, Windows};
///
/// assert_eq!(normalize_search_pattern("*.txt   ", &Windows).unwrap(), "*.txt");
/// assert_eq!(normalize_search_pattern(".", &Windows).unwrap(), "*");
/// assert!(normalize_search_pattern("ab..", &Windows).is_err());
/// ```
pub fn normalize_search_pattern(
    pattern: &str,
    conventions: &impl PathConventions,
) -> Result<String> {
    let trimmed = pattern.trim_end_matches(' ');

    let normalized = if trimmed == "." { "*" } else { trimmed };

    check_search_pattern(normalized, conventions)?;
    Ok(normalized.to_string())
}

/// Build the OS-ready search string for a directory and a pattern.
///
/// The pattern must be a relative fragment: an empty or rooted pattern is
/// rejected. The pattern is joined onto `full_path` with at most one
/// inserted separator, and when the joined string ends in a directory or
/// volume separator a `*` is appended so the listing call enumerates the
/// directory instead of looking up an empty name.
///
/// The result is never empty and never ends in a bare separator.
///
/// # Examples
/// ```
/// use search_path_utils::{full_search_string, Windows};
///
/// assert_eq!(full_search_string("C:\\dir", "*.txt", &Windows).unwrap(), "C:\\dir\\*.txt");
/// assert_eq!(full_search_string("C:\\", "*.txt", &Windows).unwrap(), "C:\\*.txt");
/// assert!(full_search_string("C:\\dir\\", "", &Windows).is_err());
/// ```
pub fn full_search_string(
    full_path: &str,
    pattern: &str,
    conventions: &impl PathConventions,
) -> Result<String> {
    if pattern.is_empty() {
        return Err(PatternError::Empty);
    }
    if conventions.is_rooted(pattern) {
        return Err(PatternError::Rooted {
            pattern: pattern.to_string(),
        });
    }

    let mut search = combine(full_path, pattern, conventions);

    // A search string ending in a separator makes the listing call look up
    // an empty name and fail; complete it to a wildcard.
    if ends_open(&search, conventions) {
        search.push('*');
    }

    Ok(search)
}

/// Join a directory and a relative fragment, inserting a separator only
/// when the directory does not already end in one.
fn combine(base: &str, relative: &str, conventions: &impl PathConventions) -> String {
    if base.is_empty() {
        return relative.to_string();
    }
    if ends_open(base, conventions) {
        format!("{base}{relative}")
    } else {
        format!("{base}{}{relative}", conventions.primary_separator())
    }
}

/// Whether the string ends in a directory or volume separator.
fn ends_open(s: &str, conventions: &impl PathConventions) -> bool {
    s.chars().next_back().is_some_and(|last| {
        conventions.is_directory_separator(last) || Some(last) == conventions.volume_separator()
    })
}
