//! In-memory document snapshots.

use std::sync::Arc;

use lsp_types::{Position, Range, Uri};

use crate::document::{SharedDocument, TextDocument};
use crate::line_index::{LineIndex, column_to_byte, utf16_len};

/// Immutable text of one document version.
///
/// Edits produce a new snapshot through [`DocumentSnapshot::edit`], which
/// keeps the URI and language and increments the version.
#[derive(Debug, Clone)]
pub struct DocumentSnapshot {
    uri: Uri,
    language_id: String,
    version: i32,
    text: String,
    index: LineIndex,
}

impl DocumentSnapshot {
    /// Creates a snapshot of `text` at `version`.
    #[must_use]
    pub fn new(
        uri: Uri,
        language_id: impl Into<String>,
        version: i32,
        text: impl Into<String>,
    ) -> Self {
        let source: String = text.into();
        let index = LineIndex::new(&source);
        Self {
            uri,
            language_id: language_id.into(),
            version,
            text: source,
            index,
        }
    }

    /// Returns the snapshot that follows this one after replacing its text.
    #[must_use]
    pub fn edit(&self, text: impl Into<String>) -> Self {
        Self::new(
            self.uri.clone(),
            self.language_id.clone(),
            self.version.saturating_add(1),
            text,
        )
    }

    /// Full text of the snapshot.
    #[must_use]
    pub const fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Wraps the snapshot in a [`SharedDocument`] handle.
    #[must_use]
    pub fn into_shared(self) -> SharedDocument {
        Arc::new(self)
    }
}

impl TextDocument for DocumentSnapshot {
    fn uri(&self) -> &Uri {
        &self.uri
    }

    fn language_id(&self) -> &str {
        self.language_id.as_str()
    }

    fn version(&self) -> i32 {
        self.version
    }

    fn line_count(&self) -> u32 {
        self.index.line_count()
    }

    fn line_text(&self, line: u32) -> Option<&str> {
        self.index.line_text(&self.text, line)
    }

    fn offset_at(&self, position: Position) -> usize {
        self.index.offset(&self.text, position)
    }

    fn position_at(&self, offset: usize) -> Position {
        self.index.position(&self.text, offset)
    }

    fn word_range_at(&self, position: Position) -> Option<Range> {
        let line = self.line_text(position.line)?;
        let cursor = column_to_byte(line, position.character);
        let before = line.get(..cursor)?;
        let after = line.get(cursor..)?;

        let start = before
            .char_indices()
            .rev()
            .take_while(|(_, ch)| is_word_char(*ch))
            .last()
            .map_or(cursor, |(offset, _)| offset);
        let end = cursor
            + after
                .chars()
                .take_while(|ch| is_word_char(*ch))
                .map(char::len_utf8)
                .sum::<usize>();
        if start == end {
            return None;
        }

        let start_column = utf16_len(line.get(..start)?);
        let end_column = utf16_len(line.get(..end)?);
        Some(Range::new(
            Position::new(position.line, start_column),
            Position::new(position.line, end_column),
        ))
    }

    fn text_in(&self, range: Range) -> &str {
        let start = self.offset_at(range.start);
        let end = self.offset_at(range.end).max(start);
        self.text.get(start..end).unwrap_or_default()
    }
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}
