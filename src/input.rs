//! Parsing user-entered numbers.
//!
//! Input is one or more non-negative integers separated by commas and/or
//! whitespace: `19`, `19, 7 10`. Anything else is rejected before the
//! detector ever sees it.

/// Errors from parsing a list of numbers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("enter one or more non-negative integers")]
    Empty,

    #[error("'{0}' is not a non-negative integer")]
    NotANumber(String),

    #[error("'{0}' is too large (max {max})", max = u64::MAX)]
    TooLarge(String),
}

/// Parses a comma- or whitespace-separated list of non-negative integers.
pub fn parse_numbers(input: &str) -> Result<Vec<u64>, InputError> {
    let tokens: Vec<&str> = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();

    if tokens.is_empty() {
        return Err(InputError::Empty);
    }

    tokens.into_iter().map(parse_number).collect()
}

/// Parses a single non-negative integer. Only ASCII digits are accepted.
pub fn parse_number(token: &str) -> Result<u64, InputError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(InputError::Empty);
    }
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotANumber(token.to_string()));
    }
    // Digits only, so the sole failure left is overflow.
    token
        .parse()
        .map_err(|_| InputError::TooLarge(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_number() {
        assert_eq!(parse_numbers("19"), Ok(vec![19]));
        assert_eq!(parse_numbers("  0 "), Ok(vec![0]));
    }

    #[test]
    fn mixed_separators() {
        assert_eq!(parse_numbers("19, 7 10"), Ok(vec![19, 7, 10]));
        assert_eq!(parse_numbers("1,,2\t3\n4"), Ok(vec![1, 2, 3, 4]));
    }

    #[test]
    fn empty_input() {
        assert_eq!(parse_numbers(""), Err(InputError::Empty));
        assert_eq!(parse_numbers(" , "), Err(InputError::Empty));
    }

    #[test]
    fn rejects_signs_decimals_and_letters() {
        assert_eq!(
            parse_numbers("-3"),
            Err(InputError::NotANumber("-3".into()))
        );
        assert_eq!(
            parse_numbers("+3"),
            Err(InputError::NotANumber("+3".into()))
        );
        assert_eq!(
            parse_numbers("1.5"),
            Err(InputError::NotANumber("1.5".into()))
        );
        assert_eq!(
            parse_numbers("12, abc"),
            Err(InputError::NotANumber("abc".into()))
        );
    }

    #[test]
    fn rejects_overflow() {
        assert_eq!(
            parse_numbers("18446744073709551616"),
            Err(InputError::TooLarge("18446744073709551616".into()))
        );
        assert_eq!(parse_numbers("18446744073709551615"), Ok(vec![u64::MAX]));
    }
}
