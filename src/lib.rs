//! # search-path-utils
//!
//! Pure path-splitting and search-pattern utilities for directory
//! enumeration.
//!
//! This crate holds the string manipulation that sits between a public
//! file-enumeration API and the operating system's path rules: splitting a
//! validated full path into its directory and file parts, vetting and
//! normalizing user-supplied search patterns such as `*.txt` or `a?c`, and
//! assembling the final search string handed to a native directory-listing
//! call. Nothing here touches the disk.
//!
//! Platform knowledge (which characters divide segments, whether drives
//! exist) is injected through [`PathConventions`], and root lengths are
//! computed by the caller and passed in, so every function is a pure
//! function of its arguments and freely usable from any thread.
//!
//! ## Features
//!
//! - **Directory/file splitting**: root-aware, allocation-free splitting of
//!   validated full paths
//! - **Pattern validation**: rejects patterns that use `..` to escape the
//!   searched directory
//! - **Pattern normalization**: Win32-style trailing-space trimming and
//!   `"."` to `"*"` substitution
//! - **Search-string construction**: joins directory and pattern, completing
//!   a trailing separator with `*`
//! - **No I/O**: every answer is computed from the strings alone
//!
//! ## Examples
//!
//! ### Splitting a validated path
//!
//! ```rust
//! use search_path_utils::{split_directory_file, Windows};
//!
//! let (directory, file) = split_directory_file(Some("C:\\logs\\today\\app.log"), 3, &Windows);
//! assert_eq!(directory, Some("C:\\logs\\today"));
//! assert_eq!(file, Some("app.log"));
//!
//! // A root-only path has no removable leaf.
//! let (directory, file) = split_directory_file(Some("C:\\"), 3, &Windows);
//! assert_eq!(directory, Some("C:\\"));
//! assert_eq!(file, None);
//! ```
//!
//! ### Preparing a search string
//!
//! ```rust
//! use search_path_utils::{full_search_string, normalize_search_pattern, Windows};
//!
//! let pattern = normalize_search_pattern("*.log  ", &Windows).unwrap();
//! let search = full_search_string("C:\\logs", &pattern, &Windows).unwrap();
//! assert_eq!(search, "C:\\logs\\*.log");
//! ```
//!
//! ### Rejecting directory escape
//!
//! ```rust
//! use search_path_utils::{check_search_pattern, Windows};
//!
//! // ".." inside a name is just a name.
//! assert!(check_search_pattern("a..b", &Windows).is_ok());
//!
//! // ".." as a path segment ascends, and is refused.
//! assert!(check_search_pattern("..\\secrets", &Windows).is_err());
//! ```

mod conventions;
mod error;
mod normalize;
mod split;
mod validate;

// Generators module for property testing (available in tests)
#[cfg(test)]
pub mod generators;

// Re-export main public API
pub use conventions::{PathConventions, Unix, Windows};
pub use error::{PatternError, Result};
pub use normalize::{full_search_string, normalize_search_pattern};
pub use split::{
    directory_name, ends_in_directory_separator, is_bare_drive, split_directory_file,
    trim_trailing_separator,
};
pub use validate::check_search_pattern;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
