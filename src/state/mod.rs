//! Client-side UI state.
//!
//! Navigation (current folder, breadcrumb, active view) and the listing
//! collections it scopes. All of this is transient: the server owns the
//! entities, the client only renders its latest answers.

mod listing;
mod navigation;

pub use listing::ListingState;
pub use navigation::{ListingScope, NavState, ViewMode};
