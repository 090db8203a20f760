//! Error handling for the CloudVault client.
//!
//! The taxonomy mirrors how failures surface to the user:
//!
//! - [`AuthError`] - missing or rejected credentials; these send the UI back
//!   to the login screen when raised during a protected call
//! - [`NetworkError`] - the request never completed or returned garbage
//! - [`VaultError`] - unified type returned by the API gateway, carrying a
//!   non-success HTTP status when the server rejected the operation
//!
//! Every variant renders a `user_message()` suitable for the notice line and
//! a short `error_code()` for logging. Failures are surfaced once; nothing in
//! this client retries automatically.

mod auth;
mod network;
mod vault;

pub use auth::AuthError;
pub use network::{classify_reqwest_error, NetworkError};
pub use vault::VaultError;
