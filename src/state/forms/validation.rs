//! Field validation rules for the order form

use std::num::IntErrorKind;
use thiserror::Error;

/// Maximum total length of an email address
const EMAIL_MAX_LEN: usize = 254;
/// Maximum length of the part before the `@`
const EMAIL_LOCAL_MAX_LEN: usize = 64;
/// Maximum length of a single domain label
const EMAIL_LABEL_MAX_LEN: usize = 63;

/// Why a field value is rejected. Only ever rendered inline next to the field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("This field is required")]
    Required,
    #[error("Must be at least {min} characters")]
    MinLength { min: usize },
    #[error("Enter a valid email address")]
    InvalidEmail,
    #[error("Enter a number")]
    NotANumber,
    #[error("Must be at least {min}")]
    BelowMinimum { min: f64 },
    #[error("Must be at most {max}")]
    AboveMaximum { max: f64 },
}

/// A single constraint on a field's raw text
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    Required,
    MinLength(usize),
    Email,
    /// Whole number, at least the given value
    MinInteger(i32),
    /// Whole number, at most the given value
    MaxInteger(i32),
    /// Decimal number, at least the given value
    MinNumber(f64),
}

impl Rule {
    /// Check a raw value against this rule.
    ///
    /// Every rule except `Required` accepts the empty string, so an empty
    /// field reports `Required` rather than a format error.
    pub fn check(&self, value: &str) -> Result<(), ValidationError> {
        match self {
            Rule::Required => {
                if value.is_empty() {
                    return Err(ValidationError::Required);
                }
            }
            Rule::MinLength(min) => {
                if !value.is_empty() && value.chars().count() < *min {
                    return Err(ValidationError::MinLength { min: *min });
                }
            }
            Rule::Email => {
                if !value.is_empty() && !is_valid_email(value) {
                    return Err(ValidationError::InvalidEmail);
                }
            }
            Rule::MinInteger(min) => {
                if !value.is_empty() {
                    let n = wide_integer(value).ok_or(ValidationError::NotANumber)?;
                    if n < i64::from(*min) {
                        return Err(ValidationError::BelowMinimum { min: f64::from(*min) });
                    }
                }
            }
            Rule::MaxInteger(max) => {
                if !value.is_empty() {
                    let n = wide_integer(value).ok_or(ValidationError::NotANumber)?;
                    if n > i64::from(*max) {
                        return Err(ValidationError::AboveMaximum { max: f64::from(*max) });
                    }
                }
            }
            Rule::MinNumber(min) => {
                if !value.is_empty() {
                    let n = parse_number(value).ok_or(ValidationError::NotANumber)?;
                    if n < *min {
                        return Err(ValidationError::BelowMinimum { min: *min });
                    }
                }
            }
        }
        Ok(())
    }
}

/// Run rules in order and return the first failure
pub fn validate(rules: &[Rule], value: &str) -> Option<ValidationError> {
    rules.iter().find_map(|rule| rule.check(value).err())
}

/// Parse a whole number field
pub fn parse_integer(value: &str) -> Option<i32> {
    value.trim().parse().ok()
}

/// Parse a whole number for range checks. Digit strings too long for `i64`
/// saturate, so they fail on range rather than as "not a number".
fn wide_integer(value: &str) -> Option<i64> {
    match value.trim().parse::<i64>() {
        Ok(n) => Some(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

/// Parse a decimal number field. Rejects NaN and infinities.
pub fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Check an address against the usual HTML form email shape:
/// dot-separated atext atoms, `@`, dot-separated alphanumeric labels that may
/// contain inner hyphens.
pub fn is_valid_email(value: &str) -> bool {
    if value.len() > EMAIL_MAX_LEN {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || local.len() > EMAIL_LOCAL_MAX_LEN {
        return false;
    }

    let local_ok = local
        .split('.')
        .all(|atom| !atom.is_empty() && atom.chars().all(is_atext));
    if !local_ok {
        return false;
    }

    // A second '@' ends up in the domain and fails the label check
    domain.split('.').all(is_valid_label)
}

fn is_atext(c: char) -> bool {
    c.is_ascii_alphanumeric() || "!#$%&'*+/=?^_`{|}~-".contains(c)
}

fn is_valid_label(label: &str) -> bool {
    if label.is_empty() || label.len() > EMAIL_LABEL_MAX_LEN {
        return false;
    }
    let bytes = label.as_bytes();
    bytes[0].is_ascii_alphanumeric()
        && bytes[bytes.len() - 1].is_ascii_alphanumeric()
        && bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-')
}

#[cfg(test)]
mod tests {
    use super::*;

    mod email {
        use super::*;

        #[test]
        fn test_accepts_common_addresses() {
            assert!(is_valid_email("a@b.com"));
            assert!(is_valid_email("first.last@example.co.uk"));
            assert!(is_valid_email("user+tag@sub-domain.example.org"));
            // Single-label domains are accepted by browser validators too
            assert!(is_valid_email("root@localhost"));
        }

        #[test]
        fn test_rejects_malformed_addresses() {
            assert!(!is_valid_email("not-an-email"));
            assert!(!is_valid_email("@example.com"));
            assert!(!is_valid_email("user@"));
            assert!(!is_valid_email("user@@example.com"));
            assert!(!is_valid_email("user@exa mple.com"));
            assert!(!is_valid_email("user.@example.com"));
            assert!(!is_valid_email(".user@example.com"));
            assert!(!is_valid_email("user@-example.com"));
            assert!(!is_valid_email("user@example-.com"));
            assert!(!is_valid_email("user@example..com"));
        }

        #[test]
        fn test_rejects_overlong_parts() {
            let local = "a".repeat(65);
            assert!(!is_valid_email(&format!("{local}@example.com")));

            let label = "a".repeat(64);
            assert!(!is_valid_email(&format!("user@{label}.com")));
        }
    }

    mod rules {
        use super::*;

        #[test]
        fn test_required() {
            assert_eq!(Rule::Required.check(""), Err(ValidationError::Required));
            assert_eq!(Rule::Required.check(" "), Ok(()));
        }

        #[test]
        fn test_min_length_counts_chars() {
            assert_eq!(
                Rule::MinLength(2).check("A"),
                Err(ValidationError::MinLength { min: 2 })
            );
            assert_eq!(Rule::MinLength(2).check("Al"), Ok(()));
            assert_eq!(Rule::MinLength(2).check("É"), Err(ValidationError::MinLength { min: 2 }));
        }

        #[test]
        fn test_non_required_rules_accept_empty() {
            assert_eq!(Rule::MinLength(5).check(""), Ok(()));
            assert_eq!(Rule::Email.check(""), Ok(()));
            assert_eq!(Rule::MinInteger(1).check(""), Ok(()));
            assert_eq!(Rule::MaxInteger(i32::MAX).check(""), Ok(()));
            assert_eq!(Rule::MinNumber(0.0).check(""), Ok(()));
        }

        #[test]
        fn test_min_integer() {
            assert_eq!(
                Rule::MinInteger(1).check("0"),
                Err(ValidationError::BelowMinimum { min: 1.0 })
            );
            assert_eq!(Rule::MinInteger(1).check("1"), Ok(()));
            assert_eq!(Rule::MinInteger(1).check("1.5"), Err(ValidationError::NotANumber));
        }

        #[test]
        fn test_max_integer_reports_range_for_long_digit_strings() {
            let max = Rule::MaxInteger(i32::MAX);
            let above = Err(ValidationError::AboveMaximum { max: 2_147_483_647.0 });

            assert_eq!(max.check("2147483647"), Ok(()));
            assert_eq!(max.check("2147483648"), above);
            assert_eq!(max.check("3000000000"), above);
            assert_eq!(max.check("5000000000"), above);
            assert_eq!(max.check("99999999999999999999999"), above);
            assert_eq!(max.check("12a"), Err(ValidationError::NotANumber));
        }

        #[test]
        fn test_parse_integer_stays_in_i32() {
            assert_eq!(parse_integer("2147483647"), Some(i32::MAX));
            assert_eq!(parse_integer("3000000000"), None);
        }

        #[test]
        fn test_min_number() {
            assert_eq!(Rule::MinNumber(0.0).check("0"), Ok(()));
            assert_eq!(Rule::MinNumber(0.0).check("9.99"), Ok(()));
            assert_eq!(
                Rule::MinNumber(0.0).check("-1"),
                Err(ValidationError::BelowMinimum { min: 0.0 })
            );
            assert_eq!(Rule::MinNumber(0.0).check("."), Err(ValidationError::NotANumber));
            assert_eq!(Rule::MinNumber(0.0).check("inf"), Err(ValidationError::NotANumber));
        }

        #[test]
        fn test_validate_reports_first_failure() {
            let rules = [Rule::Required, Rule::MinLength(5)];
            assert_eq!(validate(&rules, ""), Some(ValidationError::Required));
            assert_eq!(
                validate(&rules, "abc"),
                Some(ValidationError::MinLength { min: 5 })
            );
            assert_eq!(validate(&rules, "abcde"), None);
        }

        #[test]
        fn test_error_messages() {
            assert_eq!(
                ValidationError::MinLength { min: 5 }.to_string(),
                "Must be at least 5 characters"
            );
            assert_eq!(
                ValidationError::BelowMinimum { min: 1.0 }.to_string(),
                "Must be at least 1"
            );
            assert_eq!(
                ValidationError::AboveMaximum { max: f64::from(i32::MAX) }.to_string(),
                "Must be at most 2147483647"
            );
        }
    }
}
