//! Field declarations and validation rules for edit forms.
//!
//! Each editable resource declares a static table of [`FieldSpec`]s. A spec
//! names the JSON field, says how raw operator input is coerced
//! ([`FieldKind`]) and lists the [`FieldRule`]s checked on submit.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

/// How a field's draft is entered and coerced to JSON.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// Free text, sent as a string.
    Text,
    /// Whole number typed as text, sent as a JSON integer.
    Integer,
    /// Decimal number typed as text, sent as a JSON float.
    Decimal,
    /// One of a fixed set of values, sent as a string.
    Choice(&'static [&'static str]),
    /// A calendar date, sent as `YYYY-MM-DD`.
    Date,
}

/// Named patterns used by field rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPattern {
    /// Letters only: `^[A-Za-z]+$`.
    Name,
    /// A basic `local@domain.tld` shape: `\S+@\S+\.\S+`.
    Email,
    /// Digits only (or empty): `^[0-9]*$`.
    Digits,
}

static NAME_REGEX: OnceLock<Regex> = OnceLock::new();
static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
static DIGITS_REGEX: OnceLock<Regex> = OnceLock::new();

impl FieldPattern {
    /// Returns the compiled regex for this pattern.
    ///
    /// # Panics
    ///
    /// Panics if a built-in pattern fails to compile, which cannot happen
    /// for the literals below.
    #[must_use]
    pub fn regex(self) -> &'static Regex {
        let (cell, source) = match self {
            Self::Name => (&NAME_REGEX, r"^[A-Za-z]+$"),
            Self::Email => (&EMAIL_REGEX, r"\S+@\S+\.\S+"),
            Self::Digits => (&DIGITS_REGEX, r"^[0-9]*$"),
        };
        cell.get_or_init(|| Regex::new(source).expect("built-in field pattern must compile"))
    }

    /// Returns `true` if `input` matches this pattern.
    #[must_use]
    pub fn is_match(self, input: &str) -> bool {
        self.regex().is_match(input)
    }
}

/// A predicate attached to one field, evaluated on submit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldRule {
    /// The field must not be blank.
    Required {
        /// Message shown next to the field.
        message: &'static str,
    },
    /// Non-empty input must match a pattern.
    Pattern {
        /// The pattern to match.
        pattern: FieldPattern,
        /// Message shown next to the field.
        message: &'static str,
    },
    /// Non-empty input must parse as a number within bounds (inclusive).
    Range {
        /// Lower bound, if any.
        min: Option<f64>,
        /// Upper bound, if any.
        max: Option<f64>,
        /// Message shown next to the field.
        message: &'static str,
    },
}

impl FieldRule {
    /// Checks raw text input against this rule.
    ///
    /// Returns the rule's message on failure. Pattern and range rules
    /// accept empty input; pair them with [`FieldRule::Required`] to
    /// forbid it.
    ///
    /// # Errors
    ///
    /// Returns the rule's message when `input` violates the rule.
    pub fn check(&self, input: &str) -> Result<(), &'static str> {
        match *self {
            Self::Required { message } => {
                if input.trim().is_empty() {
                    return Err(message);
                }
            }
            Self::Pattern { pattern, message } => {
                if !input.is_empty() && !pattern.is_match(input) {
                    return Err(message);
                }
            }
            Self::Range { min, max, message } => {
                let trimmed = input.trim();
                if trimmed.is_empty() {
                    return Ok(());
                }
                let value: f64 = trimmed.parse().map_err(|_| message)?;
                if !value.is_finite() {
                    return Err(message);
                }
                if min.is_some_and(|min| value < min) || max.is_some_and(|max| value > max) {
                    return Err(message);
                }
            }
        }
        Ok(())
    }
}

/// Declaration of one editable field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    /// The JSON field name (camelCase, as the backend expects).
    pub key: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// How input is coerced.
    pub kind: FieldKind,
    /// Rules checked on submit, in order. The first failure wins.
    pub rules: &'static [FieldRule],
}

impl FieldSpec {
    /// Declares a field with no rules.
    #[must_use]
    pub const fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            kind,
            rules: &[],
        }
    }

    /// Attaches validation rules.
    #[must_use]
    pub const fn with_rules(mut self, rules: &'static [FieldRule]) -> Self {
        self.rules = rules;
        self
    }

    /// Runs every rule against `input`, returning the first failure.
    ///
    /// Choice fields additionally reject values outside their options.
    /// Date fields have no text input and always pass.
    #[must_use]
    pub fn validate(&self, input: &str) -> Option<&'static str> {
        if let Some(message) = self.rules.iter().find_map(|rule| rule.check(input).err()) {
            return Some(message);
        }
        match self.kind {
            FieldKind::Choice(options) if !input.is_empty() && !options.contains(&input) => {
                Some("Please choose one of the listed options.")
            }
            _ => None,
        }
    }
}

/// Parses a stored date: `YYYY-MM-DD`, or an RFC 3339 timestamp.
#[must_use]
pub fn parse_stored_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok().or_else(|| {
        chrono::DateTime::parse_from_rfc3339(value)
            .ok()
            .map(|dt| dt.date_naive())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_pattern() {
        assert!(FieldPattern::Name.is_match("Jane"));
        assert!(!FieldPattern::Name.is_match("Jane2"));
        assert!(!FieldPattern::Name.is_match("Mary Ann"));
    }

    #[test]
    fn test_email_pattern() {
        assert!(FieldPattern::Email.is_match("jane@x.com"));
        assert!(!FieldPattern::Email.is_match("jane@x"));
        assert!(!FieldPattern::Email.is_match("jane.x.com"));
    }

    #[test]
    fn test_digits_pattern_accepts_empty() {
        assert!(FieldPattern::Digits.is_match(""));
        assert!(FieldPattern::Digits.is_match("0047"));
        assert!(!FieldPattern::Digits.is_match("12kg"));
    }

    #[test]
    fn test_required_rule_rejects_blank() {
        let rule = FieldRule::Required {
            message: "Please enter a receiver.",
        };
        assert_eq!(rule.check("   "), Err("Please enter a receiver."));
        assert_eq!(rule.check("Ola"), Ok(()));
    }

    #[test]
    fn test_pattern_rule_skips_empty_input() {
        let rule = FieldRule::Pattern {
            pattern: FieldPattern::Name,
            message: "Invalid format.",
        };
        assert_eq!(rule.check(""), Ok(()));
        assert_eq!(rule.check("R2D2"), Err("Invalid format."));
    }

    #[test]
    fn test_range_rule() {
        let rule = FieldRule::Range {
            min: Some(0.0),
            max: None,
            message: "Must be zero or more.",
        };
        assert_eq!(rule.check("1.25"), Ok(()));
        assert_eq!(rule.check("0"), Ok(()));
        assert_eq!(rule.check("-0.5"), Err("Must be zero or more."));
        assert_eq!(rule.check("lots"), Err("Must be zero or more."));
        assert_eq!(rule.check(""), Ok(()));
    }

    #[test]
    fn test_range_rule_rejects_non_finite_numbers() {
        let rule = FieldRule::Range {
            min: Some(0.0),
            max: None,
            message: "Must be zero or more.",
        };
        assert_eq!(rule.check("NaN"), Err("Must be zero or more."));
        assert_eq!(rule.check("inf"), Err("Must be zero or more."));
        assert_eq!(rule.check("-inf"), Err("Must be zero or more."));

        let bounded = FieldRule::Range {
            min: None,
            max: Some(10.0),
            message: "At most ten.",
        };
        assert_eq!(bounded.check("nan"), Err("At most ten."));
        assert_eq!(bounded.check("9.5"), Ok(()));
    }

    #[test]
    fn test_first_failing_rule_wins() {
        const RULES: &[FieldRule] = &[
            FieldRule::Required {
                message: "required",
            },
            FieldRule::Pattern {
                pattern: FieldPattern::Digits,
                message: "digits",
            },
        ];
        let spec = FieldSpec::new("weight", "Weight", FieldKind::Integer).with_rules(RULES);

        assert_eq!(spec.validate(""), Some("required"));
        assert_eq!(spec.validate("4kg"), Some("digits"));
        assert_eq!(spec.validate("4"), None);
    }

    #[test]
    fn test_choice_rejects_unknown_option() {
        let spec = FieldSpec::new("role", "Role", FieldKind::Choice(&["USER", "ADMIN"]));
        assert_eq!(spec.validate("ADMIN"), None);
        assert!(spec.validate("ROOT").is_some());
    }

    #[test]
    fn test_parse_stored_date_formats() {
        let expected = NaiveDate::from_ymd_opt(1990, 4, 1).unwrap();
        assert_eq!(parse_stored_date("1990-04-01"), Some(expected));
        assert_eq!(parse_stored_date("1990-04-01T00:00:00Z"), Some(expected));
        assert_eq!(parse_stored_date("01/04/1990"), None);
    }
}
