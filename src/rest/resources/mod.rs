//! Boxinator resource implementations.
//!
//! Each resource implements [`RestResource`](crate::rest::RestResource) for
//! the backend calls, plus the console traits that let it be edited, listed
//! and deleted from the admin console.
//!
//! | Resource | Confirms deletion with |
//! |----------|------------------------|
//! | [`Account`] | email |
//! | [`Shipment`] | id |
//! | [`Country`] | country code |

mod account;
mod country;
mod shipment;

pub use account::{Account, AccountRow, Role};
pub use country::{Country, CountryRow};
pub use shipment::{AccountRef, Shipment, ShipmentRow, ShipmentStatus};
