//! Asynchronous navigation queries answered by the hosting environment.

use std::future::Future;

use lsp_types::{DocumentSymbol, Location, Position, Uri};

use crate::errors::HostError;

/// Definition, reference and outline queries provided by the host.
///
/// Every query suspends the caller until the host responds. Callers await
/// them one at a time; implementations do not need to support overlapping
/// requests. An empty result means "nothing known", not a failure.
pub trait NavigationHost {
    /// Locations defining the symbol at `position` in `uri`.
    fn definitions(
        &self,
        uri: &Uri,
        position: Position,
    ) -> impl Future<Output = Result<Vec<Location>, HostError>>;

    /// Locations referencing the symbol at `position` in `uri`.
    fn references(
        &self,
        uri: &Uri,
        position: Position,
    ) -> impl Future<Output = Result<Vec<Location>, HostError>>;

    /// Hierarchical outline of `uri`.
    fn document_symbols(
        &self,
        uri: &Uri,
    ) -> impl Future<Output = Result<Vec<DocumentSymbol>, HostError>>;
}

impl<H: NavigationHost> NavigationHost for &H {
    fn definitions(
        &self,
        uri: &Uri,
        position: Position,
    ) -> impl Future<Output = Result<Vec<Location>, HostError>> {
        (**self).definitions(uri, position)
    }

    fn references(
        &self,
        uri: &Uri,
        position: Position,
    ) -> impl Future<Output = Result<Vec<Location>, HostError>> {
        (**self).references(uri, position)
    }

    fn document_symbols(
        &self,
        uri: &Uri,
    ) -> impl Future<Output = Result<Vec<DocumentSymbol>, HostError>> {
        (**self).document_symbols(uri)
    }
}
