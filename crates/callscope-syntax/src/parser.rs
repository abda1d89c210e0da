//! Line-oriented declaration parser.

use std::sync::{Arc, Weak};

use callscope_host::{SharedDocument, TextDocument};
use lsp_types::{Position, Range, Uri};
use regex::Regex;

use crate::error::SyntaxError;
use crate::tree::{Declaration, DeclarationRanges, SyntaxTree};

const CLOSING_LINE: &str = "}";

/// Parses documents into [`SyntaxTree`]s.
#[derive(Debug, Clone)]
pub struct Parser {
    keyword: String,
    header: Regex,
}

impl Parser {
    /// Builds a parser whose header lines start with `keyword`.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError::InvalidKeyword`] when the keyword is empty or
    /// contains whitespace.
    pub fn new(keyword: &str) -> Result<Self, SyntaxError> {
        if keyword.is_empty() || keyword.chars().any(char::is_whitespace) {
            return Err(SyntaxError::InvalidKeyword(keyword.to_owned()));
        }
        let header = Regex::new(&format!(
            r"^{} ([A-Za-z0-9_]+)\s*\{{",
            regex::escape(keyword)
        ))?;
        Ok(Self {
            keyword: keyword.to_owned(),
            header,
        })
    }

    /// Keyword that opens a declaration.
    #[must_use]
    pub fn keyword(&self) -> &str {
        self.keyword.as_str()
    }

    /// Parses the whole document.
    ///
    /// A declaration still open at the end of the document is dropped.
    #[must_use]
    pub fn parse(&self, document: SharedDocument) -> Arc<SyntaxTree> {
        Arc::new_cyclic(|tree| {
            let declarations = self.scan(document.as_ref(), tree);
            SyntaxTree::new(document, declarations)
        })
    }

    fn scan(&self, document: &dyn TextDocument, tree: &Weak<SyntaxTree>) -> Vec<Declaration> {
        let mut declarations = Vec::new();
        let mut open: Option<OpenDeclaration> = None;

        for line in 0..document.line_count() {
            let Some(text) = document.line_text(line) else {
                break;
            };
            open = match open.take() {
                None => self.open_declaration(line, text),
                Some(current) if text == CLOSING_LINE => {
                    declarations.push(current.close(line, document.uri(), tree));
                    None
                }
                Some(current) => Some(current),
            };
        }

        if let Some(unterminated) = open {
            tracing::trace!(
                uri = document.uri().as_str(),
                name = unterminated.name.as_str(),
                "dropping unterminated declaration"
            );
        }
        declarations
    }

    fn open_declaration(&self, line: u32, text: &str) -> Option<OpenDeclaration> {
        let name = self.header.captures(text)?.get(1)?.as_str();
        let name_column = utf16_len(&self.keyword).saturating_add(1);
        Some(OpenDeclaration {
            name: name.to_owned(),
            full_start: Position::new(line, 0),
            name_range: Range::new(
                Position::new(line, name_column),
                Position::new(line, name_column.saturating_add(utf16_len(name))),
            ),
            body_start: Position::new(line.saturating_add(1), 0),
        })
    }
}

/// Header seen, closing line not yet reached.
struct OpenDeclaration {
    name: String,
    full_start: Position,
    name_range: Range,
    body_start: Position,
}

impl OpenDeclaration {
    fn close(self, line: u32, uri: &Uri, tree: &Weak<SyntaxTree>) -> Declaration {
        let ranges = DeclarationRanges {
            full: Range::new(
                self.full_start,
                Position::new(line, utf16_len(CLOSING_LINE)),
            ),
            name: self.name_range,
            body: Range::new(self.body_start, Position::new(line, 0)),
        };
        Declaration::new(self.name, uri.clone(), ranges, Weak::clone(tree))
    }
}

fn utf16_len(text: &str) -> u32 {
    u32::try_from(text.encode_utf16().count()).unwrap_or(u32::MAX)
}
