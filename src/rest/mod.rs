//! REST resource infrastructure for the Boxinator backend.
//!
//! This module provides:
//!
//! - **[`RestResource`] trait**: CRUD operations shared by every resource
//! - **[`ResourceResponse<T>`]**: A Deref-based wrapper over the backend envelope
//! - **[`ChangeSet`]**: The minimal diff sent by partial updates
//! - **Path building**: Per-operation path tables with parent paths
//! - **[`ResourceError`]**: Semantic error types for resource operations
//!
//! # Example
//!
//! ```rust,ignore
//! use boxinator_admin::rest::{ChangeSet, RestResource};
//! use boxinator_admin::rest::resources::Shipment;
//! use serde_json::json;
//!
//! let shipment = Shipment::find(&client, &session, 7).await?;
//! println!("Receiver: {:?}", shipment.receiver); // Deref to Shipment
//!
//! let mut changes = ChangeSet::new();
//! changes.insert("weight", json!(5));
//! let updated = Shipment::update(&client, &session, 7, &changes).await?;
//! ```

mod change_set;
mod errors;
mod path;
mod resource;
mod response;

pub mod resources;

pub use change_set::ChangeSet;
pub use errors::ResourceError;
pub use path::{build_path, get_path, ResourceOperation, ResourcePath};
pub use resource::RestResource;
pub use response::ResourceResponse;
