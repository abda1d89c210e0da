//! URI to path conversion.

use camino::Utf8PathBuf;
use lsp_types::Uri;
use url::Url;

/// Converts a `file://` URI to a `Utf8PathBuf`.
///
/// Percent-encoding is decoded. URIs that are not local files keep their
/// textual form (minus a `file://` prefix), so node identifiers stay stable
/// for in-memory documents too.
#[must_use]
pub fn uri_to_path(uri: &Uri) -> Utf8PathBuf {
    let uri_str = uri.as_str();

    if let Some(path) = try_parse_uri_to_path(uri_str) {
        return path;
    }

    uri_str
        .strip_prefix("file://")
        .map_or_else(|| Utf8PathBuf::from(uri_str), Utf8PathBuf::from)
}

fn try_parse_uri_to_path(uri_str: &str) -> Option<Utf8PathBuf> {
    let url = Url::parse(uri_str).ok()?;
    let path = url.to_file_path().ok()?;
    Utf8PathBuf::try_from(path).ok()
}
