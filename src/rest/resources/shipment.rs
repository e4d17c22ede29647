//! Shipment resource implementation.
//!
//! A shipment is one box sent by an account to a destination country.
//! Besides the usual CRUD operations the backend can list the shipments of
//! one account and the shipments in one status.
//!
//! # Example
//!
//! ```rust,ignore
//! use boxinator_admin::rest::resources::{Shipment, ShipmentStatus};
//!
//! let in_transit = Shipment::list_by_status(&client, &session, ShipmentStatus::InTransit).await?;
//! let mine = Shipment::list_for_account(&client, &session, 12).await?;
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::auth::Session;
use crate::clients::{HttpMethod, RestClient};
use crate::console::{
    Confirmable, Editable, FieldKind, FieldPattern, FieldRule, FieldSpec, Listing,
};
use crate::rest::{ResourceError, ResourceOperation, ResourcePath, ResourceResponse, RestResource};

use super::Country;

/// Where a shipment is in its lifecycle.
///
/// The backend spells the received state `RECIEVED`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ShipmentStatus {
    /// Registered, not yet handed over.
    #[serde(rename = "CREATED")]
    Created,
    /// Handed over to the carrier.
    #[serde(rename = "RECIEVED")]
    Received,
    /// On its way.
    #[serde(rename = "INTRANSIT")]
    InTransit,
    /// Delivered.
    #[serde(rename = "COMPLETED")]
    Completed,
    /// Cancelled by the sender or an administrator.
    #[serde(rename = "CANCELLED")]
    Cancelled,
}

impl ShipmentStatus {
    /// Every status, as the backend spells it, in backend order.
    pub const ALL: &'static [&'static str] =
        &["CREATED", "RECIEVED", "INTRANSIT", "COMPLETED", "CANCELLED"];

    /// Returns the 1-based position the backend uses in status queries.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Created => 1,
            Self::Received => 2,
            Self::InTransit => 3,
            Self::Completed => 4,
            Self::Cancelled => 5,
        }
    }

    /// Returns the status as the backend spells it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "CREATED",
            Self::Received => "RECIEVED",
            Self::InTransit => "INTRANSIT",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The account a shipment belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AccountRef {
    /// The account id.
    pub id: Option<u64>,
}

/// A shipment.
///
/// # Fields
///
/// ## Read-Only Fields
/// - `id` - The unique identifier
/// - `account` - The owning account
///
/// ## Writable Fields
/// - `receiver` - Letters only, required
/// - `weight` - Whole kilograms, required
/// - `box_colour` - Required
/// - `shipment_status` - [`ShipmentStatus`]
/// - `destination_country` - Shown by name, not editable in forms
/// - `source_country` - Country name
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    /// The unique identifier of the shipment.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// Name of the receiver.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver: Option<String>,

    /// Weight in kilograms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,

    /// Box colour, usually a hex string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_colour: Option<String>,

    /// Current status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_status: Option<ShipmentStatus>,

    /// Destination country.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_country: Option<Country>,

    /// Source country name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_country: Option<String>,

    /// The owning account.
    #[serde(skip_serializing)]
    pub account: Option<AccountRef>,
}

impl Shipment {
    /// Lists the shipments of one account.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails or is rejected.
    pub async fn list_for_account(
        client: &RestClient,
        session: &Session,
        account_id: u64,
    ) -> Result<ResourceResponse<Vec<Self>>, ResourceError> {
        Self::list_with_parent(client, session, "account_id", account_id).await
    }

    /// Lists the shipments in one status.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rejected`] if the backend does not know
    /// the status.
    pub async fn list_by_status(
        client: &RestClient,
        session: &Session,
        status: ShipmentStatus,
    ) -> Result<ResourceResponse<Vec<Self>>, ResourceError> {
        Self::list_with_parent(client, session, "status", status.ordinal()).await
    }

    /// Returns the destination country's name, if known.
    #[must_use]
    pub fn destination_name(&self) -> Option<&str> {
        self.destination_country.as_ref()?.name.as_deref()
    }
}

impl RestResource for Shipment {
    type Id = u64;

    const NAME: &'static str = "Shipment";
    const PLURAL: &'static str = "shipments";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "shipment/all"),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &["account_id"],
            "shipment/all/{account_id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &["status"],
            "shipment/status/{status}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "shipment/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &[],
            "shipment/create",
        ),
        ResourcePath::new(
            HttpMethod::Patch,
            ResourceOperation::Update,
            &["id"],
            "shipment/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "shipment/{id}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }
}

impl Editable for Shipment {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("receiver", "Receiver", FieldKind::Text).with_rules(&[
            FieldRule::Required {
                message: "Please enter a receiver.",
            },
            FieldRule::Pattern {
                pattern: FieldPattern::Name,
                message: "Invalid format, letters only.",
            },
        ]),
        FieldSpec::new("weight", "Weight", FieldKind::Integer).with_rules(&[
            FieldRule::Required {
                message: "Please enter a weight.",
            },
            FieldRule::Pattern {
                pattern: FieldPattern::Digits,
                message: "Invalid format, digits only.",
            },
        ]),
        FieldSpec::new("boxColour", "Box colour", FieldKind::Text).with_rules(&[
            FieldRule::Required {
                message: "Please pick a box colour.",
            },
        ]),
        FieldSpec::new(
            "shipmentStatus",
            "Shipment status",
            FieldKind::Choice(ShipmentStatus::ALL),
        ),
        FieldSpec::new("sourceCountry", "Source country", FieldKind::Text),
    ];
}

/// One row of the shipment table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipmentRow {
    /// The shipment id.
    pub id: u64,
    /// The owning account's id, if known.
    pub account_id: Option<u64>,
    /// Name of the receiver.
    pub receiver: String,
    /// Current status.
    pub status: Option<ShipmentStatus>,
    /// Destination country name.
    pub destination: String,
}

impl Listing for Shipment {
    type Row = ShipmentRow;

    fn to_row(&self) -> ShipmentRow {
        ShipmentRow {
            id: self.id.unwrap_or_default(),
            account_id: self.account.as_ref().and_then(|account| account.id),
            receiver: self.receiver.clone().unwrap_or_default(),
            status: self.shipment_status,
            destination: self.destination_name().unwrap_or_default().to_string(),
        }
    }

    fn row_id(row: &ShipmentRow) -> u64 {
        row.id
    }

    fn search_terms(row: &ShipmentRow) -> Vec<String> {
        vec![row.receiver.clone(), row.id.to_string(), row.destination.clone()]
    }
}

impl Confirmable for Shipment {
    fn confirmation_phrase(&self) -> String {
        self.id.map(|id| id.to_string()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::get_path;
    use serde_json::json;

    fn sample() -> Shipment {
        serde_json::from_value(json!({
            "id": 7,
            "receiver": "Kari",
            "weight": 4,
            "boxColour": "#ff0000",
            "shipmentStatus": "RECIEVED",
            "destinationCountry": {"id": 2, "name": "Norway", "countryCode": "NO", "feeMultiplier": 1.5},
            "sourceCountry": "Sweden",
            "account": {"id": 12}
        }))
        .unwrap()
    }

    #[test]
    fn test_shipment_deserialization() {
        let shipment = sample();

        assert_eq!(shipment.id, Some(7));
        assert_eq!(shipment.shipment_status, Some(ShipmentStatus::Received));
        assert_eq!(shipment.destination_name(), Some("Norway"));
        assert_eq!(shipment.account, Some(AccountRef { id: Some(12) }));
    }

    #[test]
    fn test_shipment_serialization_omits_read_only_fields() {
        let value = serde_json::to_value(sample()).unwrap();

        assert!(value.get("id").is_none());
        assert!(value.get("account").is_none());
        assert_eq!(value["shipmentStatus"], "RECIEVED");
        assert_eq!(value["boxColour"], "#ff0000");
    }

    #[test]
    fn test_status_ordinals_are_one_based() {
        assert_eq!(ShipmentStatus::Created.ordinal(), 1);
        assert_eq!(ShipmentStatus::Cancelled.ordinal(), 5);
        assert_eq!(ShipmentStatus::InTransit.to_string(), "INTRANSIT");
        assert_eq!(ShipmentStatus::Received.as_str(), "RECIEVED");
    }

    #[test]
    fn test_shipment_paths() {
        let by_status = get_path(Shipment::PATHS, ResourceOperation::All, &["status"]).unwrap();
        assert_eq!(by_status.template, "shipment/status/{status}");

        let by_account =
            get_path(Shipment::PATHS, ResourceOperation::All, &["account_id"]).unwrap();
        assert_eq!(by_account.template, "shipment/all/{account_id}");

        let all = get_path(Shipment::PATHS, ResourceOperation::All, &[]).unwrap();
        assert_eq!(all.template, "shipment/all");

        let update = get_path(Shipment::PATHS, ResourceOperation::Update, &["id"]).unwrap();
        assert_eq!(update.http_method, HttpMethod::Patch);
        assert_eq!(update.template, "shipment/{id}");
    }

    #[test]
    fn test_destination_is_not_a_form_field() {
        let shipment = sample();
        assert!(Shipment::FIELDS
            .iter()
            .all(|spec| spec.key != "destinationCountry"));
        assert_eq!(shipment.field_value("weight"), Some(json!(4)));
        assert_eq!(shipment.field_value("sourceCountry"), Some(json!("Sweden")));
    }

    #[test]
    fn test_receiver_rules() {
        let spec = Shipment::FIELDS[0];
        assert_eq!(spec.validate(""), Some("Please enter a receiver."));
        assert_eq!(spec.validate("R2D2"), Some("Invalid format, letters only."));
        assert_eq!(spec.validate("Kari"), None);
    }

    #[test]
    fn test_shipment_row() {
        let shipment = sample();
        let row = shipment.to_row();

        assert_eq!(row.account_id, Some(12));
        assert_eq!(row.destination, "Norway");
        assert_eq!(Shipment::search_terms(&row), vec!["Kari", "7", "Norway"]);
        assert_eq!(shipment.confirmation_phrase(), "7");
    }
}
