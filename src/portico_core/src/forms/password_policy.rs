//! Password strength rules applied to new passwords.
//!
//! The checks run in a fixed order and every failing rule contributes a
//! message: similarity to the username, minimum length, the common
//! password list, and all-digit passwords.

use std::{
    collections::{HashMap, HashSet},
    sync::LazyLock,
};

use regex::Regex;

pub const MIN_LENGTH: usize = 8;
const MAX_SIMILARITY: f64 = 0.7;

pub const TOO_SIMILAR: &str = "The password is too similar to the username.";
pub const TOO_SHORT: &str = "This password is too short. It must contain at least 8 characters.";
pub const TOO_COMMON: &str = "This password is too common.";
pub const ENTIRELY_NUMERIC: &str = "This password is entirely numeric.";

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\W+").expect("separator pattern is valid"));

/// One lowercase password per line, embedded in the binary.
static COMMON_PASSWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    include_str!("../../common-passwords.txt")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
});

/// Check `password` against every rule, returning the failures in order.
pub fn validate_password(password: &str, username: Option<&str>) -> Vec<&'static str> {
    let mut failures = Vec::new();

    if let Some(username) = username
        && is_too_similar(password, username)
    {
        failures.push(TOO_SIMILAR);
    }
    if password.chars().count() < MIN_LENGTH {
        failures.push(TOO_SHORT);
    }
    if is_common(password) {
        failures.push(TOO_COMMON);
    }
    if !password.is_empty() && password.chars().all(char::is_numeric) {
        failures.push(ENTIRELY_NUMERIC);
    }

    failures
}

fn is_common(password: &str) -> bool {
    let lowered = password.trim().to_lowercase();
    COMMON_PASSWORDS.contains(lowered.as_str())
}

/// Compares the password with the whole username and with each of its
/// word-separated parts.
fn is_too_similar(password: &str, username: &str) -> bool {
    let password = password.to_lowercase();
    let username = username.to_lowercase();

    NON_WORD
        .split(&username)
        .chain(std::iter::once(username.as_str()))
        .filter(|part| !exceeds_length_ratio(&password, part))
        .any(|part| quick_ratio(&password, part) >= MAX_SIMILARITY)
}

// A much longer password cannot be "too similar" to a short name part.
fn exceeds_length_ratio(password: &str, part: &str) -> bool {
    let password_len = password.chars().count() as f64;
    let part_len = part.chars().count() as f64;
    password_len >= 10.0 * part_len && part_len < MAX_SIMILARITY / 2.0 * password_len
}

/// Upper bound on sequence similarity: shared characters (as a multiset)
/// over total length.
fn quick_ratio(a: &str, b: &str) -> f64 {
    let total = a.chars().count() + b.chars().count();
    if total == 0 {
        return 1.0;
    }

    let mut available: HashMap<char, usize> = HashMap::new();
    for c in b.chars() {
        *available.entry(c).or_default() += 1;
    }

    let mut matches = 0usize;
    for c in a.chars() {
        if let Some(count) = available.get_mut(&c)
            && *count > 0
        {
            *count -= 1;
            matches += 1;
        }
    }

    2.0 * matches as f64 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strong_password_passes() {
        assert!(validate_password("correct-horse-battery", Some("alice")).is_empty());
    }

    #[test]
    fn short_password_fails() {
        assert_eq!(validate_password("k9#vQ", None), vec![TOO_SHORT]);
    }

    #[test]
    fn common_password_fails_case_insensitively() {
        assert_eq!(validate_password("PassWord123", None), vec![TOO_COMMON]);
    }

    #[test]
    fn keyboard_walks_and_suffixed_words_are_common() {
        for password in ["1qaz2wsx", "qazwsxedc", "football1", "michael1", "iloveyou2"] {
            assert_eq!(
                validate_password(password, None),
                vec![TOO_COMMON],
                "{password} should be rejected"
            );
        }
    }

    #[test]
    fn common_list_is_loaded_and_lowercase() {
        assert!(COMMON_PASSWORDS.len() > 1000);
        assert!(COMMON_PASSWORDS.iter().all(|p| p.to_lowercase() == *p));
    }

    #[test]
    fn numeric_password_reports_every_failure() {
        assert_eq!(
            validate_password("12345678", None),
            vec![TOO_COMMON, ENTIRELY_NUMERIC]
        );
        assert_eq!(validate_password("80417235", None), vec![ENTIRELY_NUMERIC]);
    }

    #[test]
    fn password_close_to_username_fails() {
        assert!(validate_password("alice123!", Some("alice")).contains(&TOO_SIMILAR));
        assert!(validate_password("smithjohn", Some("john.smith")).contains(&TOO_SIMILAR));
    }

    #[test]
    fn long_password_is_not_compared_with_a_tiny_name_part() {
        assert!(!is_too_similar("a-very-long-unrelated-passphrase", "al"));
    }

    #[test]
    fn quick_ratio_counts_shared_characters() {
        assert_eq!(quick_ratio("abcd", "abcd"), 1.0);
        assert_eq!(quick_ratio("abcd", "wxyz"), 0.0);
        assert_eq!(quick_ratio("aab", "abb"), 2.0 * 2.0 / 6.0);
    }
}
