//! Document outline built from a syntax tree.

use lsp_types::{DocumentSymbol, SymbolKind};

use crate::tree::SyntaxTree;

/// One flat function symbol per declaration, in source order.
#[must_use]
#[expect(
    deprecated,
    reason = "DocumentSymbol::deprecated has to be initialised even though it is deprecated"
)]
pub fn document_symbols(tree: &SyntaxTree) -> Vec<DocumentSymbol> {
    tree.declarations()
        .iter()
        .map(|declaration| DocumentSymbol {
            name: declaration.name().to_owned(),
            detail: None,
            kind: SymbolKind::FUNCTION,
            tags: None,
            deprecated: None,
            range: declaration.full_range(),
            selection_range: declaration.name_range(),
            children: None,
        })
        .collect()
}
