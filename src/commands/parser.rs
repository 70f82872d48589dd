//! Splitting of raw argument lines.

use crate::error::{BookError, BookResult};

/// An argument line split into a contact name and the values after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arguments {
    pub name: String,
    pub values: Vec<String>,
}

/// Split `input` into a name and trailing values.
///
/// The name runs up to the first whitespace followed by `+` or a digit, so
/// multi-word names stay together. The name is trimmed and capitalized; the
/// rest is split on whitespace.
///
/// # Errors
///
/// `BookError::MalformedInput` if the name part is empty.
pub fn split_arguments(input: &str) -> BookResult<Arguments> {
    let input = input.trim();
    let split_at = input
        .char_indices()
        .zip(input.chars().skip(1))
        .find(|((_, c), next)| c.is_whitespace() && (*next == '+' || next.is_ascii_digit()))
        .map(|((idx, _), _)| idx)
        .unwrap_or(input.len());

    let (name, rest) = input.split_at(split_at);
    let name = name.trim();
    if name.is_empty() {
        return Err(BookError::MalformedInput(
            "Give me the name, please.".to_string(),
        ));
    }

    Ok(Arguments {
        name: capitalize(name),
        values: rest.split_whitespace().map(str::to_string).collect(),
    })
}

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Parse the "how many contacts" argument, falling back to `default` when blank.
///
/// # Errors
///
/// `BookError::MalformedInput` unless the input is blank or a whole number
/// greater than 0.
pub fn parse_count(input: &str, default: usize) -> BookResult<usize> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(default);
    }
    match input.parse::<usize>() {
        Ok(count) if count > 0 => Ok(count),
        _ => Err(BookError::MalformedInput(format!(
            "Expected a number of contacts greater than 0, got: {}",
            input
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_name_and_phone() {
        let args = split_arguments("john 0501234567").unwrap();
        assert_eq!(args.name, "John");
        assert_eq!(args.values, vec!["0501234567"]);
    }

    #[test]
    fn test_split_keeps_multi_word_name() {
        let args = split_arguments("  anna MARIA +380501234567  0671234567 ").unwrap();
        assert_eq!(args.name, "Anna maria");
        assert_eq!(args.values, vec!["+380501234567", "0671234567"]);
    }

    #[test]
    fn test_split_name_only() {
        let args = split_arguments("alice").unwrap();
        assert_eq!(args.name, "Alice");
        assert!(args.values.is_empty());
    }

    #[test]
    fn test_split_digit_inside_name_is_not_a_split_point() {
        let args = split_arguments("R2d2 0501234567").unwrap();
        assert_eq!(args.name, "R2d2");
        assert_eq!(args.values, vec!["0501234567"]);
    }

    #[test]
    fn test_split_missing_name() {
        assert!(matches!(
            split_arguments("   "),
            Err(BookError::MalformedInput(_))
        ));
        // Without a leading name the number itself lands in the name slot
        // and is rejected later by the name rule.
        assert_eq!(split_arguments("0501234567").unwrap().name, "0501234567");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("bOB"), "Bob");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("a"), "A");
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("", 10).unwrap(), 10);
        assert_eq!(parse_count(" 3 ", 10).unwrap(), 3);
        assert!(parse_count("three", 10).is_err());
        assert!(parse_count("-1", 10).is_err());
        assert!(matches!(
            parse_count("0", 10),
            Err(BookError::MalformedInput(_))
        ));
    }
}
