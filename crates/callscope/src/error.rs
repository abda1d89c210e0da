//! Errors surfaced by the service facade.

use thiserror::Error;

use callscope_config::ConfigError;
use callscope_graph::GraphError;
use callscope_syntax::SyntaxError;

/// Failures while constructing or querying a call hierarchy service.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The parser could not be built from the configuration.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// A call hierarchy query failed.
    #[error(transparent)]
    Graph(#[from] GraphError),
}
