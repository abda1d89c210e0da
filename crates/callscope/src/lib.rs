//! Call hierarchy services for editor integrations.
//!
//! [`CallScope`] serves the built-in `abc` language from its own syntax
//! index: open and edited documents are parsed into declarations, and calls
//! are found by searching function bodies for declared names.
//! [`ReferenceCallScope`] serves any other language through a
//! [`callscope_host::NavigationHost`], deriving callers from reference and
//! outline queries.
//!
//! Both speak `lsp_types` call hierarchy payloads. Telemetry is installed
//! separately with [`telemetry::initialise`].

mod convert;
mod error;
mod reference;
mod service;
pub mod telemetry;

pub use callscope_config::Config;
pub use error::ServiceError;
pub use reference::ReferenceCallScope;
pub use service::CallScope;

#[cfg(test)]
mod tests;
