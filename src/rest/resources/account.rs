//! Account resource implementation.
//!
//! Accounts are the users of the shipment service. Administrators can edit
//! contact details and change an account's role.

use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::console::{
    Confirmable, Editable, FieldKind, FieldPattern, FieldRule, FieldSpec, Listing,
};
use crate::rest::{ResourceOperation, ResourcePath, RestResource};

/// The role of an account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// A regular customer.
    #[default]
    User,
    /// An administrator.
    Admin,
}

impl Role {
    /// Every role, as the backend spells it.
    pub const ALL: &'static [&'static str] = &["USER", "ADMIN"];

    /// Returns the role as the backend spells it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Admin => "ADMIN",
        }
    }
}

/// A user account.
///
/// # Fields
///
/// ## Read-Only Fields
/// - `id` - The unique identifier
///
/// ## Writable Fields
/// - `first_name`, `last_name` - Letters only
/// - `email` - Also the phrase typed to confirm deletion
/// - `date_of_birth` - ISO date (`YYYY-MM-DD`) or timestamp
/// - `zip_code`, `contact_number` - Digits only
/// - `country` - Country name
/// - `role` - [`Role`]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// The unique identifier of the account.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// First name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Date of birth as stored by the backend.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,

    /// Postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<i64>,

    /// Country of residence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<i64>,

    /// The account's role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl Account {
    /// Returns "first last", skipping missing parts.
    #[must_use]
    pub fn full_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl RestResource for Account {
    type Id = u64;

    const NAME: &'static str = "Account";
    const PLURAL: &'static str = "accounts";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "account/all"),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "account/{id}",
        ),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "account"),
        ResourcePath::new(
            HttpMethod::Patch,
            ResourceOperation::Update,
            &["id"],
            "account/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "account/{id}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }
}

const NAME_RULES: &[FieldRule] = &[FieldRule::Pattern {
    pattern: FieldPattern::Name,
    message: "Invalid format, letters only.",
}];

const DIGIT_RULES: &[FieldRule] = &[FieldRule::Pattern {
    pattern: FieldPattern::Digits,
    message: "Invalid format, digits only.",
}];

impl Editable for Account {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("firstName", "Firstname", FieldKind::Text).with_rules(NAME_RULES),
        FieldSpec::new("lastName", "Lastname", FieldKind::Text).with_rules(NAME_RULES),
        FieldSpec::new("email", "Email", FieldKind::Text).with_rules(&[FieldRule::Pattern {
            pattern: FieldPattern::Email,
            message: "Invalid email format.",
        }]),
        FieldSpec::new("dateOfBirth", "Date of birth", FieldKind::Date),
        FieldSpec::new("zipCode", "Zip code", FieldKind::Integer).with_rules(DIGIT_RULES),
        FieldSpec::new("country", "Country", FieldKind::Text),
        FieldSpec::new("contactNumber", "Contact number", FieldKind::Integer)
            .with_rules(DIGIT_RULES),
        FieldSpec::new("role", "Role", FieldKind::Choice(Role::ALL)),
    ];
}

/// One row of the account table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRow {
    /// The account id.
    pub id: u64,
    /// First and last name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// The account's role.
    pub role: Role,
}

impl Listing for Account {
    type Row = AccountRow;

    fn to_row(&self) -> AccountRow {
        AccountRow {
            id: self.id.unwrap_or_default(),
            name: self.full_name(),
            email: self.email.clone().unwrap_or_default(),
            role: self.role.unwrap_or_default(),
        }
    }

    fn row_id(row: &AccountRow) -> u64 {
        row.id
    }

    fn search_terms(row: &AccountRow) -> Vec<String> {
        vec![row.name.clone(), row.id.to_string(), row.email.clone()]
    }
}

impl Confirmable for Account {
    fn confirmation_phrase(&self) -> String {
        self.email.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::get_path;
    use serde_json::json;

    #[test]
    fn test_account_deserialization() {
        let account: Account = serde_json::from_value(json!({
            "id": 1,
            "firstName": "Jane",
            "lastName": "Doe",
            "email": "j@x.com",
            "dateOfBirth": "1990-04-01",
            "zipCode": 4711,
            "country": "Norway",
            "contactNumber": 5550100,
            "role": "ADMIN"
        }))
        .unwrap();

        assert_eq!(account.id, Some(1));
        assert_eq!(account.role, Some(Role::Admin));
        assert_eq!(account.zip_code, Some(4711));
        assert_eq!(account.full_name(), "Jane Doe");
    }

    #[test]
    fn test_account_serialization_uses_camel_case() {
        let account = Account {
            id: Some(1),
            first_name: Some("Jane".to_string()),
            role: Some(Role::User),
            ..Default::default()
        };

        let value = serde_json::to_value(&account).unwrap();
        assert_eq!(value, json!({"firstName": "Jane", "role": "USER"}));
    }

    #[test]
    fn test_account_paths() {
        let create = get_path(Account::PATHS, ResourceOperation::Create, &[]).unwrap();
        assert_eq!(create.template, "account");
        assert_eq!(create.http_method, HttpMethod::Post);

        let find = get_path(Account::PATHS, ResourceOperation::Find, &["id"]).unwrap();
        assert_eq!(find.template, "account/{id}");
    }

    #[test]
    fn test_role_field_value_is_backend_spelling() {
        let account = Account {
            role: Some(Role::Admin),
            ..Default::default()
        };
        assert_eq!(account.field_value("role"), Some(json!("ADMIN")));
        assert_eq!(account.field_value("email"), None);
        assert_eq!(Role::Admin.as_str(), "ADMIN");
    }

    #[test]
    fn test_account_confirms_on_email() {
        let account = Account {
            id: Some(3),
            email: Some("user@example.com".to_string()),
            ..Default::default()
        };
        assert_eq!(account.confirmation_phrase(), "user@example.com");

        let row = account.to_row();
        assert_eq!(row.name, "");
        assert!(Account::search_terms(&row).contains(&"3".to_string()));
    }
}
