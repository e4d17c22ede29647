//! Operator authentication state.
//!
//! Token acquisition happens outside this crate. Once a token is obtained it
//! is wrapped in a [`Session`], which every resource operation takes as an
//! explicit argument.

mod errors;
pub mod session;

pub use errors::AuthError;
pub use session::Session;
