//! Exact-code and fuzzy-name matching predicates.

use crate::error::MatchError;
use crate::similarity::similarity;

/// Default threshold for fuzzy name comparison. Containment of a short name
/// in a longer one clears this gate whenever the shorter name makes up at
/// least 60% of the longer one.
pub const DEFAULT_NAME_THRESHOLD: f64 = 0.6;

/// Strict equality of two classification codes.
///
/// True only when both codes are non-empty and byte-for-byte equal; the
/// comparison is case-sensitive, so a lowercase code never matches an
/// uppercase one.
pub fn exact_code_match(a: &str, b: &str) -> bool {
    !a.is_empty() && !b.is_empty() && a == b
}

/// Threshold-gated fuzzy comparison of two names.
///
/// # Errors
///
/// Fails with [`MatchError::InvalidThreshold`] unless `0 < threshold < 1`,
/// for any input pair. Empty names yield `Ok(false)`.
pub fn similarity_match(a: &str, b: &str, threshold: f64) -> Result<bool, MatchError> {
    if !(threshold > 0.0 && threshold < 1.0) {
        return Err(MatchError::InvalidThreshold { value: threshold });
    }
    if a.is_empty() || b.is_empty() {
        return Ok(false);
    }
    Ok(similarity(a, b) >= threshold)
}

/// Fuzzy comparison at [`DEFAULT_NAME_THRESHOLD`].
pub fn similarity_match_default(a: &str, b: &str) -> bool {
    // The constant is inside (0, 1), so the threshold check cannot fail.
    similarity_match(a, b, DEFAULT_NAME_THRESHOLD).unwrap_or(false)
}

/// Similarity of two names; delegates to the similarity primitive.
pub fn calculate_similarity(a: &str, b: &str) -> f64 {
    similarity(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_requires_byte_equality() {
        assert!(exact_code_match("I48.000", "I48.000"));
        assert!(!exact_code_match("i10", "I10"));
        assert!(!exact_code_match("", ""));
        assert!(!exact_code_match("I10", ""));
    }

    #[test]
    fn threshold_bounds_are_rejected() {
        for threshold in [0.0, 1.0, -0.5, 1.5, f64::NAN] {
            let err = similarity_match("心房颤动", "心房颤动", threshold).unwrap_err();
            assert!(matches!(err, MatchError::InvalidThreshold { .. }));
        }
    }

    #[test]
    fn empty_names_never_match() {
        assert_eq!(similarity_match("", "心房颤动", 0.5), Ok(false));
        assert_eq!(similarity_match("心房颤动", "", 0.5), Ok(false));
        assert!(!similarity_match_default("", ""));
    }

    #[test]
    fn close_names_match_at_default_threshold() {
        // 4 of 6 characters shared: similarity 0.667.
        assert!(similarity_match_default("心房颤动", "阵发心房颤动"));
        assert!(!similarity_match_default("心房颤动", "肺炎"));
    }

    #[test]
    fn calculate_similarity_delegates() {
        assert_eq!(calculate_similarity("心房颤动", "心房颤动"), 1.0);
        assert_eq!(calculate_similarity("", "心房颤动"), 0.0);
    }
}
