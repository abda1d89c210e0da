//! Default values applied when a configuration field is omitted.

use crate::logging::LogFormat;

/// Language identifier handled by the built-in parser.
pub const DEFAULT_LANGUAGE_ID: &str = "abc";

/// Keyword introducing a function declaration in the built-in language.
pub const DEFAULT_FUNCTION_KEYWORD: &str = "func";

/// Default log filter expression.
pub const DEFAULT_LOG_FILTER: &str = "info";

pub(crate) fn default_language_id() -> String {
    DEFAULT_LANGUAGE_ID.to_owned()
}

pub(crate) fn default_function_keyword() -> String {
    DEFAULT_FUNCTION_KEYWORD.to_owned()
}

pub(crate) fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_owned()
}

pub(crate) const fn default_log_format() -> LogFormat {
    LogFormat::Json
}
