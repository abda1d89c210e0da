//! Shared builders for syntax index tests.

use std::str::FromStr;

use callscope_host::{DocumentSnapshot, SharedDocument};
use lsp_types::Uri;

use crate::{Parser, SyntaxIndex};

pub(super) const CALLER_AND_CALLEE: &str = "func a {\n  b\n}\nfunc b {\n}\n";

pub(super) const SINGLE: &str = "func a {\n  a\n}\n";

pub(super) const UNTERMINATED: &str = "func kept {\n}\nfunc dangling {\n  kept\n";

pub(super) fn uri(name: &str) -> Uri {
    Uri::from_str(&format!("file:///work/{name}")).expect("valid URI")
}

pub(super) fn snapshot(name: &str, text: &str) -> DocumentSnapshot {
    DocumentSnapshot::new(uri(name), "abc", 1, text)
}

pub(super) fn document(name: &str, text: &str) -> SharedDocument {
    snapshot(name, text).into_shared()
}

pub(super) fn index() -> SyntaxIndex {
    SyntaxIndex::new(Parser::new("func").expect("valid keyword"))
}

pub(super) fn program(name: &str) -> &'static str {
    match name {
        "caller_and_callee" => CALLER_AND_CALLEE,
        "single" => SINGLE,
        "unterminated" => UNTERMINATED,
        other => panic!("unknown program: {other}"),
    }
}
