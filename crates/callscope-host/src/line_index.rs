//! Line index for converting between LSP positions and byte offsets.
//!
//! LSP uses 0-based (line, character) positions with UTF-16 columns while
//! snapshots store UTF-8 text, so every conversion walks the characters of a
//! single line.

use lsp_types::Position;

/// Byte offsets of line starts for one source text.
///
/// The index does not own the text; callers pass the same source it was
/// built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    /// Builds an index for `source`.
    #[must_use]
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            source
                .char_indices()
                .filter(|(_, ch)| *ch == '\n')
                .map(|(offset, _)| offset + 1),
        );
        Self { line_starts }
    }

    /// Number of lines in the indexed text.
    #[must_use]
    pub fn line_count(&self) -> u32 {
        u32::try_from(self.line_starts.len()).unwrap_or(u32::MAX)
    }

    /// Text of `line`, excluding the `\n` or `\r\n` terminator.
    #[must_use]
    pub fn line_text<'a>(&self, source: &'a str, line: u32) -> Option<&'a str> {
        let (start, end) = self.line_bounds(source, line)?;
        source.get(start..end)
    }

    /// Converts a position to a byte offset, clamping to the line and text end.
    #[must_use]
    pub fn offset(&self, source: &str, position: Position) -> usize {
        let Some((start, end)) = self.line_bounds(source, position.line) else {
            return source.len();
        };
        let line = source.get(start..end).unwrap_or_default();
        start + column_to_byte(line, position.character)
    }

    /// Converts a byte offset to a position, clamping to the text end.
    #[must_use]
    pub fn position(&self, source: &str, offset: usize) -> Position {
        let mut clamped = offset.min(source.len());
        while !source.is_char_boundary(clamped) {
            clamped -= 1;
        }
        let line = self
            .line_starts
            .partition_point(|&start| start <= clamped)
            .saturating_sub(1);
        let line_start = self.line_starts.get(line).copied().unwrap_or_default();
        let before = source.get(line_start..clamped).unwrap_or_default();
        Position::new(
            u32::try_from(line).unwrap_or(u32::MAX),
            utf16_len(before),
        )
    }

    fn line_bounds(&self, source: &str, line: u32) -> Option<(usize, usize)> {
        let index = usize::try_from(line).ok()?;
        let start = *self.line_starts.get(index)?;
        let next = self
            .line_starts
            .get(index + 1)
            .copied()
            .unwrap_or(source.len());
        let raw = source.get(start..next)?;
        let trimmed = raw.strip_suffix('\n').unwrap_or(raw);
        let text = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Some((start, start + text.len()))
    }
}

/// Number of UTF-16 code units in `text`.
pub(crate) fn utf16_len(text: &str) -> u32 {
    u32::try_from(text.encode_utf16().count()).unwrap_or(u32::MAX)
}

/// Byte offset within `line` of a UTF-16 column, clamped to the line end.
pub(crate) fn column_to_byte(line: &str, character: u32) -> usize {
    let mut units = 0u32;
    for (offset, ch) in line.char_indices() {
        if units >= character {
            return offset;
        }
        units = units.saturating_add(u32::try_from(ch.len_utf16()).unwrap_or(2));
    }
    line.len()
}
