//! Contracts between the call hierarchy core and its hosting environment.
//!
//! The core never owns documents or talks to language servers directly. It
//! reads text through [`TextDocument`] and asks for definitions, references
//! and outlines through [`NavigationHost`]. [`DocumentSnapshot`] is the
//! in-memory document used by tests and by hosts that keep plain strings.

mod document;
mod errors;
mod line_index;
mod navigation;
mod snapshot;

pub use document::{SharedDocument, TextDocument};
pub use errors::{HostError, HostOperation};
pub use line_index::LineIndex;
pub use navigation::NavigationHost;
pub use snapshot::DocumentSnapshot;

#[cfg(test)]
mod tests;
