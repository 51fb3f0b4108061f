//! Fibonacci sequence generation and numeric-input parsing.

use thiserror::Error;

/// Minimum accepted term count, enforced by the input field.
pub const MIN_TERMS: usize = 1;

/// Maximum term count: F(186) is the largest Fibonacci number that fits
/// in a `u128`.
pub const MAX_TERMS: usize = 187;

/// Default term count when the input field is left empty.
pub const DEFAULT_TERMS: usize = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TermCountError {
    #[error("not a number: {0}")]
    NotANumber(String),
    #[error("need at least {} term", MIN_TERMS)]
    TooSmall,
    #[error("at most {} terms fit in 128-bit integers", MAX_TERMS)]
    TooLarge,
}

/// First `n` terms of the Fibonacci sequence: 0, 1, 1, 2, 3, ...
///
/// Callers stay within `MAX_TERMS` (the parse layer enforces it). The
/// saturating add only ever affects the lookahead value past the last
/// returned term, so every returned term is exact.
pub fn fibonacci(n: usize) -> Vec<u128> {
    let mut sequence = Vec::with_capacity(n);
    let (mut a, mut b) = (0u128, 1u128);
    for _ in 0..n {
        sequence.push(a);
        (a, b) = (b, a.saturating_add(b));
    }
    sequence
}

/// Parse the numeric input field. Empty input means the default.
pub fn parse_term_count(input: &str) -> Result<usize, TermCountError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(DEFAULT_TERMS);
    }

    match trimmed.parse::<i64>() {
        Ok(n) if n < MIN_TERMS as i64 => Err(TermCountError::TooSmall),
        Ok(n) if n > MAX_TERMS as i64 => Err(TermCountError::TooLarge),
        Ok(n) => Ok(n as usize),
        Err(_) => Err(TermCountError::NotANumber(trimmed.to_string())),
    }
}

/// Render the sequence as a bracketed list, the way the original list
/// widget displayed it.
pub fn format_sequence(terms: &[u128]) -> String {
    let joined = terms
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_term_is_zero() {
        assert_eq!(fibonacci(1), vec![0]);
    }

    #[test]
    fn first_five_terms() {
        assert_eq!(fibonacci(5), vec![0, 1, 1, 2, 3]);
    }

    #[test]
    fn returns_exactly_n_terms() {
        for n in [0, 1, 2, 10, 50] {
            assert_eq!(fibonacci(n).len(), n);
        }
    }

    #[test]
    fn each_term_is_sum_of_previous_two() {
        let terms = fibonacci(MAX_TERMS);
        for i in 2..terms.len() {
            assert_eq!(terms[i], terms[i - 1] + terms[i - 2], "term {i}");
        }
    }

    #[test]
    fn zero_terms_is_empty() {
        assert!(fibonacci(0).is_empty());
    }

    #[test]
    fn parse_plain_number() {
        assert_eq!(parse_term_count("12"), Ok(12));
    }

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(parse_term_count("  7  "), Ok(7));
    }

    #[test]
    fn parse_empty_uses_default() {
        assert_eq!(parse_term_count(""), Ok(DEFAULT_TERMS));
        assert_eq!(parse_term_count("   "), Ok(DEFAULT_TERMS));
    }

    #[test]
    fn parse_rejects_zero_and_negative() {
        assert_eq!(parse_term_count("0"), Err(TermCountError::TooSmall));
        assert_eq!(parse_term_count("-5"), Err(TermCountError::TooSmall));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(
            parse_term_count("ten"),
            Err(TermCountError::NotANumber("ten".to_string()))
        );
    }

    #[test]
    fn parse_bounds() {
        assert_eq!(parse_term_count(&MIN_TERMS.to_string()), Ok(MIN_TERMS));
        assert_eq!(parse_term_count(&MAX_TERMS.to_string()), Ok(MAX_TERMS));
        assert_eq!(
            parse_term_count(&(MAX_TERMS + 1).to_string()),
            Err(TermCountError::TooLarge)
        );
    }

    #[test]
    fn format_sequence_brackets() {
        assert_eq!(format_sequence(&[0, 1, 1, 2]), "[0, 1, 1, 2]");
        assert_eq!(format_sequence(&[]), "[]");
    }
}
