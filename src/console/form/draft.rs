//! Draft values and their coercion to JSON.
//!
//! The same coercion is applied to the original record (via its seeded
//! draft) and to the edited draft, so a change set compares like with like:
//! `"0047"` typed into an integer field equals a stored `47`.

use chrono::NaiveDate;
use serde_json::{Number, Value};

use super::schema::{parse_stored_date, FieldKind};

/// The operator's working value for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftValue {
    /// Raw text input (text, integer, decimal and choice fields).
    Text(String),
    /// A picked date.
    Date(NaiveDate),
}

impl DraftValue {
    /// Seeds a draft from a stored value.
    ///
    /// Date fields without a parseable stored value default to `today`.
    #[must_use]
    pub fn seed(kind: FieldKind, stored: Option<&Value>, today: NaiveDate) -> Self {
        if kind == FieldKind::Date {
            let date = stored
                .and_then(Value::as_str)
                .and_then(parse_stored_date)
                .unwrap_or(today);
            return Self::Date(date);
        }

        let text = match stored {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        };
        Self::Text(text)
    }

    /// Returns the raw text, if this is a text draft.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Date(_) => None,
        }
    }

    /// Returns the date, if this is a date draft.
    #[must_use]
    pub const fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(date) => Some(*date),
            Self::Text(_) => None,
        }
    }

    /// Coerces the draft to the JSON value sent to the backend.
    ///
    /// Empty input becomes `null`. Numeric input that does not parse is
    /// kept as a string.
    #[must_use]
    pub fn to_json(&self, kind: FieldKind) -> Value {
        let text = match self {
            Self::Date(date) => return Value::String(date.format("%Y-%m-%d").to_string()),
            Self::Text(text) => text,
        };

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Value::Null;
        }

        match kind {
            FieldKind::Integer => trimmed
                .parse::<i64>()
                .map_or_else(|_| Value::String(text.clone()), Value::from),
            FieldKind::Decimal => trimmed
                .parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .map_or_else(|| Value::String(text.clone()), Value::Number),
            FieldKind::Text | FieldKind::Choice(_) | FieldKind::Date => {
                Value::String(text.clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_seed_text_from_stored_values() {
        assert_eq!(
            DraftValue::seed(FieldKind::Text, Some(&json!("Kari")), today()),
            DraftValue::Text("Kari".to_string())
        );
        assert_eq!(
            DraftValue::seed(FieldKind::Integer, Some(&json!(4711)), today()),
            DraftValue::Text("4711".to_string())
        );
        assert_eq!(
            DraftValue::seed(FieldKind::Text, None, today()),
            DraftValue::Text(String::new())
        );
    }

    #[test]
    fn test_seed_date_defaults_to_today() {
        assert_eq!(
            DraftValue::seed(FieldKind::Date, None, today()),
            DraftValue::Date(today())
        );
        assert_eq!(
            DraftValue::seed(FieldKind::Date, Some(&json!("1988-12-24")), today()),
            DraftValue::Date(NaiveDate::from_ymd_opt(1988, 12, 24).unwrap())
        );
    }

    #[test]
    fn test_integer_coercion() {
        let draft = DraftValue::Text("0047".to_string());
        assert_eq!(draft.to_json(FieldKind::Integer), json!(47));

        let draft = DraftValue::Text("12kg".to_string());
        assert_eq!(draft.to_json(FieldKind::Integer), json!("12kg"));

        let draft = DraftValue::Text("  ".to_string());
        assert_eq!(draft.to_json(FieldKind::Integer), Value::Null);
    }

    #[test]
    fn test_decimal_coercion_matches_stored_integer() {
        let stored = DraftValue::seed(FieldKind::Decimal, Some(&json!(2)), today());
        let typed = DraftValue::Text("2.0".to_string());

        assert_eq!(
            stored.to_json(FieldKind::Decimal),
            typed.to_json(FieldKind::Decimal)
        );
    }

    #[test]
    fn test_date_coercion_is_iso() {
        let draft = DraftValue::Date(NaiveDate::from_ymd_opt(1990, 4, 1).unwrap());
        assert_eq!(draft.to_json(FieldKind::Date), json!("1990-04-01"));
    }
}
