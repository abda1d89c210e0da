//! Read-only view of a versioned text document.

use std::fmt;
use std::sync::Arc;

use lsp_types::{Position, Range, Uri};

/// Line-addressable text with a version that increases on every edit.
///
/// Positions use zero-based lines and UTF-16 columns, matching LSP. Offsets
/// are UTF-8 byte offsets into the full text. Conversions clamp out-of-range
/// input to the nearest valid location instead of failing.
pub trait TextDocument: fmt::Debug + Send + Sync {
    /// Identity of the document.
    fn uri(&self) -> &Uri;

    /// Language identifier reported by the host, such as `abc`.
    fn language_id(&self) -> &str;

    /// Monotonically increasing edit counter.
    fn version(&self) -> i32;

    /// Number of lines, including a trailing empty line after a final newline.
    fn line_count(&self) -> u32;

    /// Text of `line` without its terminator, or `None` past the last line.
    fn line_text(&self, line: u32) -> Option<&str>;

    /// Converts a position to a byte offset.
    fn offset_at(&self, position: Position) -> usize;

    /// Converts a byte offset to a position.
    fn position_at(&self, offset: usize) -> Position;

    /// Range of the identifier touching `position`, if any.
    fn word_range_at(&self, position: Position) -> Option<Range>;

    /// Text covered by `range`.
    fn text_in(&self, range: Range) -> &str;
}

/// Shared handle to a document snapshot.
pub type SharedDocument = Arc<dyn TextDocument>;
