//! Change update detection.
//!
//! Compares a previously loaded change snapshot against a freshly fetched
//! one to decide whether the caller's view of the patch set history is
//! stale. Fetching is delegated to a [`ChangeDetailSource`]; retries,
//! timeouts and cancellation belong to the source.

mod source;
mod updates;

pub use source::{ChangeDetailSource, FetchError, JsonDirSource};
pub use updates::{ChangeUpdates, UpdateError, fetch_change_updates};
