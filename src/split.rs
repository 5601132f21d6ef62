//! Directory/file splitting for validated full paths
//!
//! These functions assume their inputs are already validated, fully
//! qualified paths and never re-check well-formedness. The root length of a
//! path (drive or share prefix) is computed by the caller and passed in as
//! a byte offset.

use crate::conventions::PathConventions;

/// Check whether a path is a bare drive specifier such as `"C:"`.
///
/// A two-character path ending in the volume separator is ambiguous between
/// "root of the drive" and "current directory on the drive"; the platform
/// resolves it to the latter, so callers seeing `true` here must substitute
/// the process's current directory on that drive before going further.
///
/// # Examples
/// ```
/// use search_path_utils::{is_bare_drive, Windows};
///
/// assert!(is_bare_drive("C:", &Windows));
/// assert!(!is_bare_drive("C:\\", &Windows));
/// assert!(!is_bare_drive("C", &Windows));
/// ```
pub fn is_bare_drive(path: &str, conventions: &impl PathConventions) -> bool {
    let Some(volume) = conventions.volume_separator() else {
        return false;
    };
    let mut chars = path.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(_), Some(second), None) if second == volume
    )
}

/// Split a validated full path into its directory and file parts.
///
/// `root_length` is the byte length of the path's root prefix (for example
/// 3 for `C:\`), as computed by the caller's root classifier. A trailing
/// directory separator beyond the root is not part of the file name and is
/// dropped before splitting. When no separator exists past the root the
/// path has no removable leaf: the whole trimmed path is returned as the
/// directory and the file is `None`.
///
/// An absent path splits into `(None, None)`.
///
/// # Examples
/// ```
/// use search_path_utils::{split_directory_file, Windows};
///
/// let (directory, file) = split_directory_file(Some("C:\\dir\\file.txt"), 3, &Windows);
/// assert_eq!(directory, Some("C:\\dir"));
/// assert_eq!(file, Some("file.txt"));
///
/// let (directory, file) = split_directory_file(Some("C:\\"), 3, &Windows);
/// assert_eq!(directory, Some("C:\\"));
/// assert_eq!(file, None);
/// ```
pub fn split_directory_file<'a>(
    path: Option<&'a str>,
    root_length: usize,
    conventions: &impl PathConventions,
) -> (Option<&'a str>, Option<&'a str>) {
    let Some(path) = path else {
        return (None, None);
    };
    debug_assert!(root_length <= path.len());

    // A trailing separator past the root is not part of the leaf.
    let mut end = path.len();
    if end > root_length && ends_in_directory_separator(path, conventions) {
        end -= path.chars().next_back().map_or(0, char::len_utf8);
    }

    // Scan back toward the root for the separator dividing directory
    // from leaf.
    for (pivot, c) in path[..end].char_indices().rev() {
        if pivot < root_length {
            break;
        }
        if conventions.is_directory_separator(c) {
            return (
                Some(&path[..pivot]),
                Some(&path[pivot + c.len_utf8()..end]),
            );
        }
    }

    // No separator past the root: the whole trimmed path is the directory.
    (Some(&path[..end]), None)
}

/// Get the directory part of a validated full path, without renormalizing.
///
/// Returns `None` when the split finds no removable leaf, meaning the path
/// is the root and has no parent. Callers must preserve that distinction
/// rather than reporting an empty string.
///
/// # Examples
/// ```
/// use search_path_utils::{directory_name, Windows};
///
/// assert_eq!(directory_name("C:\\dir\\sub", 3, &Windows), Some("C:\\dir"));
/// assert_eq!(directory_name("C:\\", 3, &Windows), None);
/// ```
pub fn directory_name<'a>(
    path: &'a str,
    root_length: usize,
    conventions: &impl PathConventions,
) -> Option<&'a str> {
    match split_directory_file(Some(path), root_length, conventions) {
        (directory, Some(_)) => directory,
        _ => None,
    }
}

/// Whether the path's final character is a directory separator.
pub fn ends_in_directory_separator(path: &str, conventions: &impl PathConventions) -> bool {
    path.chars()
        .next_back()
        .is_some_and(|c| conventions.is_directory_separator(c))
}

/// Remove a single trailing directory separator, if present.
///
/// Never removes more than one character. Trimming a bare root is the
/// caller's responsibility to avoid where that would change meaning.
///
/// # Examples
/// ```
/// use search_path_utils::{trim_trailing_separator, Windows};
///
/// assert_eq!(trim_trailing_separator("C:\\dir\\", &Windows), "C:\\dir");
/// assert_eq!(trim_trailing_separator("C:\\dir", &Windows), "C:\\dir");
/// ```
pub fn trim_trailing_separator<'a>(path: &'a str, conventions: &impl PathConventions) -> &'a str {
    if ends_in_directory_separator(path, conventions) {
        &path[..path.len() - path.chars().next_back().map_or(0, char::len_utf8)]
    } else {
        path
    }
}
