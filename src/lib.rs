//! # Boxinator Admin
//!
//! A typed REST client and headless console state for administering the
//! Boxinator shipment service: accounts, shipments and destination
//! countries.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`AdminConfig`] and [`AdminConfigBuilder`]
//! - An explicit operator [`Session`] carrying the bearer token
//! - An async HTTP client that sends one request per call, no retries
//! - Resource CRUD through the [`rest::RestResource`] trait
//! - Console components: validated edit forms, typed-confirmation delete
//!   modals and searchable list pages
//!
//! ## Quick Start
//!
//! ```rust
//! use boxinator_admin::{AdminConfig, ApiBaseUrl};
//!
//! let config = AdminConfig::builder()
//!     .base_url(ApiBaseUrl::new("https://boxinator.example.com").unwrap())
//!     .build()
//!     .unwrap();
//! assert_eq!(config.api_path(), "/api/v1");
//! ```
//!
//! ## Editing a Record
//!
//! ```rust,ignore
//! use boxinator_admin::{BearerToken, RestClient, Session};
//! use boxinator_admin::console::{EditForm, ListPage};
//! use boxinator_admin::rest::resources::Account;
//! use chrono::{Duration, Utc};
//!
//! let client = RestClient::new(&config)?;
//! let session = Session::issue(BearerToken::new(token)?, Some(Utc::now() + Duration::hours(1)));
//!
//! let mut page: ListPage<Account> = ListPage::new();
//! page.fetch_all(&client, &session).await;
//!
//! let account = Account::find(&client, &session, 1).await?.into_inner();
//! let mut form = EditForm::edit(&account);
//! form.set_text("email", "jane@x.com")?;
//! page.submit_edit(&mut form, &client, &session).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration and session are passed explicitly
//! - **Fail-fast validation**: newtypes validate on construction
//! - **Partial updates**: only changed fields are sent
//! - **Thread-safe**: all public types are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio async runtime

pub mod auth;
pub mod clients;
pub mod config;
pub mod console;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use auth::{AuthError, Session};
pub use config::{AdminConfig, AdminConfigBuilder, ApiBaseUrl, BearerToken};
pub use error::ConfigError;

// Re-export HTTP client types at crate root for convenience
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, HttpResponseError,
    InvalidHttpRequestError, RestClient, RestError,
};

// Re-export REST resource types at crate root for convenience
pub use rest::{ChangeSet, ResourceError, ResourceResponse, RestResource};
