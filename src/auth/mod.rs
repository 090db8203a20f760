//! Session storage for the CloudVault client.
//!
//! [`CredentialsManager`] owns the durable credential file;
//! [`Session`] is the in-memory session handed to the app.

pub mod credentials;
pub mod session;

pub use credentials::{Credentials, CredentialsManager};
pub use session::Session;
