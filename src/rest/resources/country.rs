//! Country resource implementation.
//!
//! Countries are shipping destinations. Each carries a fee multiplier the
//! backend applies when pricing a shipment to it.
//!
//! # Example
//!
//! ```rust,ignore
//! use boxinator_admin::rest::RestResource;
//! use boxinator_admin::rest::resources::Country;
//!
//! let countries = Country::list_all(&client, &session).await?;
//! for country in countries.iter() {
//!     println!("{} ({})", country.name.as_deref().unwrap_or(""),
//!         country.country_code.as_deref().unwrap_or(""));
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::console::{Confirmable, Editable, FieldKind, FieldRule, FieldSpec, Listing};
use crate::rest::{ResourceOperation, ResourcePath, RestResource};

/// A shipping destination.
///
/// # Fields
///
/// ## Read-Only Fields
/// - `id` - The unique identifier
///
/// ## Writable Fields
/// - `name` - The country name
/// - `country_code` - The short code (e.g., "NO"), unique per backend
/// - `fee_multiplier` - Non-negative factor applied to shipment fees
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    /// The unique identifier of the country.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The country name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The short country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,

    /// The fee multiplier for shipments to this country.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_multiplier: Option<f64>,
}

impl RestResource for Country {
    type Id = u64;

    const NAME: &'static str = "Country";
    const PLURAL: &'static str = "countries";

    /// Paths for the Country resource.
    ///
    /// The backend has no single-country lookup.
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "country/all"),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &[],
            "country/create",
        ),
        ResourcePath::new(
            HttpMethod::Patch,
            ResourceOperation::Update,
            &["id"],
            "country/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "country/{id}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }
}

impl Editable for Country {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("name", "Country name", FieldKind::Text).with_rules(&[
            FieldRule::Required {
                message: "Please enter a country name.",
            },
        ]),
        FieldSpec::new("countryCode", "Country code", FieldKind::Text).with_rules(&[
            FieldRule::Required {
                message: "Please enter a country code.",
            },
        ]),
        FieldSpec::new("feeMultiplier", "Fee multiplier", FieldKind::Decimal).with_rules(&[
            FieldRule::Required {
                message: "Please enter a fee multiplier.",
            },
            FieldRule::Range {
                min: Some(0.0),
                max: None,
                message: "Fee multiplier must be a number of zero or more.",
            },
        ]),
    ];
}

/// One row of the country table.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryRow {
    /// The country id.
    pub id: u64,
    /// The country name.
    pub name: String,
    /// The short country code.
    pub country_code: String,
    /// The fee multiplier.
    pub fee_multiplier: f64,
}

impl Listing for Country {
    type Row = CountryRow;

    fn to_row(&self) -> CountryRow {
        CountryRow {
            id: self.id.unwrap_or_default(),
            name: self.name.clone().unwrap_or_default(),
            country_code: self.country_code.clone().unwrap_or_default(),
            fee_multiplier: self.fee_multiplier.unwrap_or_default(),
        }
    }

    fn row_id(row: &CountryRow) -> u64 {
        row.id
    }

    fn search_terms(row: &CountryRow) -> Vec<String> {
        vec![row.name.clone(), row.id.to_string(), row.country_code.clone()]
    }
}

impl Confirmable for Country {
    fn confirmation_phrase(&self) -> String {
        self.country_code.clone().unwrap_or_default()
    }
}
