//! Search-pattern validation
//!
//! ".." may only appear as part of a file or directory name. A pattern
//! that uses it to move up out of the searched directory is rejected
//! before it ever reaches a directory-listing call.

use crate::conventions::PathConventions;
use crate::error::{PatternError, Result};

/// Check a search pattern for illegal ".." directory ascent.
///
/// An occurrence of ".." is illegal when it is the final two characters of
/// the pattern or is immediately followed by a directory separator. Inside
/// a longer name it is just a name with two dots: `a..b` and `abc..d`
/// pass, while `..`, `ab..` and `..\x` fail. A pattern with no ".." at all
/// always passes.
///
/// # Examples
/// ```
/// use search_path_utils::{check_search_pattern, Windows};
///
/// assert!(check_search_pattern("a..b", &Windows).is_ok());
/// assert!(check_search_pattern("*.txt", &Windows).is_ok());
/// assert!(check_search_pattern("..", &Windows).is_err());
/// assert!(check_search_pattern("..\\x", &Windows).is_err());
/// ```
pub fn check_search_pattern(pattern: &str, conventions: &impl PathConventions) -> Result<()> {
    let mut index = 0;
    while let Some(found) = pattern[index..].find("..") {
        let at = index + found;
        match pattern[at + 2..].chars().next() {
            // A terminal ".." or one leading into a separator names the
            // parent directory.
            None => {
                return Err(PatternError::Traversal {
                    pattern: pattern.to_string(),
                })
            }
            Some(next) if conventions.is_directory_separator(next) => {
                return Err(PatternError::Traversal {
                    pattern: pattern.to_string(),
                })
            }
            Some(_) => {}
        }
        index = at + 2;
    }
    Ok(())
}
