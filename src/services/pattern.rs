use thiserror::Error;

/// Character written at every position where the batch diverges
pub const PLACEHOLDER: char = 'X';

/// Errors raised by [`masked_pattern`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("{argument} must contain at least one element")]
    InvalidArgument { argument: &'static str },
}

/// Longest common prefix of `a` and `b`, borrowed from `a`.
///
/// Scans characters left to right and stops at the first mismatch or at the end of the
/// shorter string.
pub fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let end = a
        .char_indices()
        .zip(b.chars())
        .find(|((_, left), right)| left != right)
        .map(|((idx, _), _)| idx)
        .unwrap_or_else(|| a.len().min(b.len()));

    &a[..end]
}

/// Build the masked pattern of a batch of equal-length strings.
///
/// The result keeps the prefix shared by every string and replaces each remaining position
/// of the first string with [`PLACEHOLDER`]. Lengths are counted in characters.
///
/// Equal lengths are a caller contract and are not checked here. With mixed lengths the
/// prefix search simply stops at the shorter string and the output is as long as the first.
///
/// # Errors
///
/// [`PatternError::InvalidArgument`] if `strings` is empty.
///
/// # Examples
///
/// ```
/// use text_utils::services::masked_pattern;
///
/// assert_eq!(masked_pattern(&["abc", "abd"]).unwrap(), "abX");
/// assert_eq!(masked_pattern(&["abc", "xyz"]).unwrap(), "XXX");
/// assert!(masked_pattern::<&str>(&[]).is_err());
/// ```
pub fn masked_pattern<S: AsRef<str>>(strings: &[S]) -> Result<String, PatternError> {
    let (first, rest) = strings
        .split_first()
        .ok_or(PatternError::InvalidArgument { argument: "strings" })?;
    let first = first.as_ref();

    let mut prefix = first;
    for s in rest {
        prefix = common_prefix(prefix, s.as_ref());
        if prefix.is_empty() {
            break;
        }
    }

    let variation_length = first.chars().count() - prefix.chars().count();

    let mut pattern = String::with_capacity(prefix.len() + variation_length);
    pattern.push_str(prefix);
    pattern.extend(std::iter::repeat_n(PLACEHOLDER, variation_length));

    tracing::trace!(
        batch = strings.len(),
        prefix_len = prefix.len(),
        variation_length,
        "Built masked pattern"
    );

    Ok(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_element_unchanged() {
        assert_eq!(masked_pattern(&["abc"]).unwrap(), "abc");
    }

    #[test]
    fn test_partial_prefix() {
        assert_eq!(masked_pattern(&["abc", "abd"]).unwrap(), "abX");
    }

    #[test]
    fn test_disjoint_first_characters() {
        assert_eq!(masked_pattern(&["abc", "xyz"]).unwrap(), "XXX");
    }

    #[test]
    fn test_identical_strings() {
        assert_eq!(masked_pattern(&["same", "same", "same"]).unwrap(), "same");
    }

    #[test]
    fn test_empty_batch_is_invalid_argument() {
        let err = masked_pattern::<String>(&[]).unwrap_err();
        assert_eq!(err, PatternError::InvalidArgument { argument: "strings" });
        assert_eq!(err.to_string(), "strings must contain at least one element");
    }

    #[test]
    fn test_prefix_narrows_across_batch() {
        let batch = ["12345", "12399", "12000"];
        assert_eq!(masked_pattern(&batch).unwrap(), "12XXX");
    }

    #[test]
    fn test_owned_strings_accepted() {
        let batch = vec!["0700123".to_string(), "0700456".to_string()];
        assert_eq!(masked_pattern(&batch).unwrap(), "0700XXX");
    }

    #[test]
    fn test_multibyte_characters_count_once() {
        assert_eq!(masked_pattern(&["héllo", "hélp!"]).unwrap(), "hélXX");
        assert_eq!(masked_pattern(&["日本語", "日本人"]).unwrap(), "日本X");
    }

    #[test]
    fn test_mixed_lengths_follow_first_string() {
        assert_eq!(masked_pattern(&["abcd", "ab"]).unwrap(), "abXX");
        assert_eq!(masked_pattern(&["ab", "abcd"]).unwrap(), "ab");
    }

    #[test]
    fn test_empty_strings() {
        assert_eq!(masked_pattern(&["", ""]).unwrap(), "");
    }

    #[test]
    fn test_common_prefix() {
        assert_eq!(common_prefix("abc", "abd"), "ab");
        assert_eq!(common_prefix("abc", "ab"), "ab");
        assert_eq!(common_prefix("ab", "abc"), "ab");
        assert_eq!(common_prefix("abc", "xbc"), "");
        assert_eq!(common_prefix("é1", "é2"), "é");
    }
}
