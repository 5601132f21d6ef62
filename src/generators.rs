//! Property test generators for search patterns and paths
//!
//! Strategies used by the unit-test modules to cover the pattern and path
//! shapes callers actually produce, including the hostile ones.

use proptest::prelude::*;

/// Generators for pattern and path testing scenarios
pub struct PatternGenerators;

impl PatternGenerators {
    /// Generate name tokens: no dots, no separators, no wildcards
    pub fn name_token() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9_][a-zA-Z0-9_-]{0,12}"
    }

    /// Generate a single pattern token: a plain name, a wildcard form, or
    /// a name with interior dots (".." inside a name is legal)
    pub fn pattern_token() -> impl Strategy<Value = String> {
        prop_oneof![
            Self::name_token(),
            Self::name_token().prop_map(|n| format!("*.{n}")),
            Self::name_token().prop_map(|n| format!("{n}*")),
            Self::name_token().prop_map(|n| format!("{n}?")),
            Just("*".to_string()),
            (Self::name_token(), Self::name_token()).prop_map(|(a, b)| format!("{a}.{b}")),
            (Self::name_token(), Self::name_token()).prop_map(|(a, b)| format!("{a}..{b}")),
        ]
    }

    /// Generate patterns that never ascend directories
    pub fn safe_pattern() -> impl Strategy<Value = String> {
        prop::collection::vec(Self::pattern_token(), 1..=3).prop_map(|tokens| tokens.join("\\"))
    }

    /// Generate patterns that illegally use ".." to move up directories
    pub fn traversal_pattern() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("..".to_string()),
            Self::name_token().prop_map(|n| format!("{n}..")),
            Self::safe_pattern().prop_map(|p| format!("..\\{p}")),
            Self::safe_pattern().prop_map(|p| format!("../{p}")),
            Self::safe_pattern().prop_map(|p| format!("{p}\\..")),
            (Self::name_token(), Self::name_token()).prop_map(|(a, b)| format!("{a}\\..\\{b}")),
        ]
    }

    /// Generate drive-rooted Windows directory paths (root length 3)
    pub fn windows_directory() -> impl Strategy<Value = String> {
        prop::collection::vec(Self::name_token(), 0..=4)
            .prop_map(|parts| format!("C:\\{}", parts.join("\\")))
    }

    /// Generate safe patterns padded with trailing spaces
    pub fn padded_pattern() -> impl Strategy<Value = String> {
        (Self::safe_pattern(), 0usize..4).prop_map(|(p, n)| format!("{p}{}", " ".repeat(n)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn safe_patterns_never_ascend(pattern in PatternGenerators::safe_pattern()) {
            prop_assert!(!pattern.is_empty());
            prop_assert!(!pattern.ends_with(".."));
            prop_assert!(!pattern.contains("..\\"));
            prop_assert!(!pattern.contains("../"));
        }

        #[test]
        fn traversal_patterns_contain_an_ascent(pattern in PatternGenerators::traversal_pattern()) {
            let ascends = pattern.ends_with("..")
                || pattern.contains("..\\")
                || pattern.contains("../");
            prop_assert!(ascends, "pattern should ascend: {}", pattern);
        }

        #[test]
        fn windows_directories_are_drive_rooted(path in PatternGenerators::windows_directory()) {
            prop_assert!(path.starts_with("C:\\"));
        }
    }
}
