use crate::utils::error::{ClinicError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Parses a pet age typed by the user. Only whole, non-negative numbers pass.
pub fn parse_age(input: &str) -> Result<u32> {
    let trimmed = input.trim();
    let age: i64 = trimmed.parse().map_err(|_| {
        ClinicError::validation("age", format!("'{}' is not a whole number", trimmed))
    })?;

    if age < 0 {
        return Err(ClinicError::validation("age", "age cannot be negative"));
    }
    u32::try_from(age).map_err(|_| ClinicError::validation("age", format!("age {} is too large", age)))
}

/// Parses a 1-based menu selection into a 0-based index below `count`.
pub fn parse_selection(input: &str, count: usize) -> Result<usize> {
    let trimmed = input.trim();
    let choice: usize = trimmed.parse().map_err(|_| ClinicError::InputFormatError {
        input: trimmed.to_string(),
        reason: "not a number".to_string(),
    })?;

    if choice == 0 || choice > count {
        return Err(ClinicError::InputFormatError {
            input: trimmed.to_string(),
            reason: format!("choose between 1 and {}", count),
        });
    }
    Ok(choice - 1)
}

/// Upper-cases the first letter of every word and lower-cases the rest.
/// A word starts after any non-alphabetic character, so "o'neil" becomes "O'Neil".
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut previous_alpha = false;

    for ch in value.chars() {
        if ch.is_alphabetic() {
            if previous_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            previous_alpha = true;
        } else {
            out.push(ch);
            previous_alpha = false;
        }
    }
    out
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ClinicError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ClinicError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u32, min_value: u32) -> Result<()> {
    if value < min_value {
        return Err(ClinicError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ClinicError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_age() {
        assert_eq!(parse_age("3").unwrap(), 3);
        assert_eq!(parse_age(" 0 ").unwrap(), 0);
        assert!(parse_age("-1").is_err());
        assert!(parse_age("three").is_err());
        assert!(parse_age("2.5").is_err());
        assert!(parse_age("99999999999").is_err());
        assert!(parse_age("").is_err());
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("1", 2).unwrap(), 0);
        assert_eq!(parse_selection(" 2 ", 2).unwrap(), 1);
        assert!(matches!(
            parse_selection("3", 2),
            Err(ClinicError::InputFormatError { .. })
        ));
        assert!(parse_selection("0", 2).is_err());
        assert!(parse_selection("two", 2).is_err());
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("rex"), "Rex");
        assert_eq!(title_case("golden RETRIEVER"), "Golden Retriever");
        assert_eq!(title_case("o'neil"), "O'Neil");
        assert_eq!(title_case("calle 5 sur"), "Calle 5 Sur");
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("max_selection_attempts", 5, 1).is_ok());
        assert!(validate_positive_number("max_selection_attempts", 0, 1).is_err());
    }
}
