//! Unit and behaviour tests for the syntax index.

mod behaviour;
mod support;
