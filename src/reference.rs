use crate::error::{Error, Result};

/// Scheme prefix of every externally visible document reference.
pub const SCHEME: &str = "docs://";

/// The only file extension the corpus recognizes.
pub const EXTENSION: &str = ".md";

/// MIME type reported for every document.
pub const MIME_TYPE: &str = "text/markdown";

/// Check that `identifier` names a top-level document of the corpus.
///
/// Identifiers arrive from untrusted callers, so this runs before any
/// filesystem access: no traversal segments, no separators, and the
/// recognized extension.
pub fn validate_identifier(identifier: &str) -> Result<()> {
    if identifier.is_empty() {
        return Err(Error::invalid(identifier, "empty identifier"));
    }
    if identifier.contains("..") {
        return Err(Error::invalid(identifier, "path traversal segment"));
    }
    if identifier.contains(['/', '\\']) {
        return Err(Error::invalid(identifier, "path separator"));
    }
    if identifier.contains('\0') {
        return Err(Error::invalid(identifier, "NUL byte"));
    }
    if !identifier.ends_with(EXTENSION) {
        return Err(Error::invalid(identifier, "unsupported extension"));
    }
    Ok(())
}

/// Build the reference for a document identifier.
pub fn to_uri(identifier: &str) -> String {
    format!("{SCHEME}{identifier}")
}

/// Resolve a reference back to its identifier, re-validating it.
pub fn from_uri(reference: &str) -> Result<String> {
    let identifier = reference
        .strip_prefix(SCHEME)
        .ok_or_else(|| Error::invalid(reference, "expected docs:// scheme"))?;
    validate_identifier(identifier)?;
    Ok(identifier.to_string())
}

/// Accept either a `docs://` reference or a bare identifier.
pub fn resolve(reference: &str) -> Result<String> {
    if reference.contains("://") {
        return from_uri(reference);
    }
    validate_identifier(reference)?;
    Ok(reference.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(result: Result<impl std::fmt::Debug>) -> &'static str {
        match result {
            Err(Error::InvalidIdentifier { reason, .. }) => reason,
            other => panic!("expected InvalidIdentifier, got {other:?}"),
        }
    }

    #[test]
    fn accepts_plain_markdown_name() {
        assert!(validate_identifier("intro.md").is_ok());
        assert!(validate_identifier("build-server.md").is_ok());
    }

    #[test]
    fn rejects_traversal() {
        assert_eq!(
            reason(validate_identifier("..secret.md")),
            "path traversal segment"
        );
        assert_eq!(
            reason(from_uri("docs://../../etc/passwd")),
            "path traversal segment"
        );
    }

    #[test]
    fn rejects_separators() {
        assert_eq!(reason(validate_identifier("a/b.md")), "path separator");
        assert_eq!(reason(validate_identifier("a\\b.md")), "path separator");
    }

    #[test]
    fn rejects_other_extensions() {
        assert_eq!(
            reason(validate_identifier("notes.txt")),
            "unsupported extension"
        );
        assert_eq!(reason(validate_identifier("")), "empty identifier");
    }

    #[test]
    fn rejects_foreign_scheme() {
        assert_eq!(
            reason(from_uri("file://intro.md")),
            "expected docs:// scheme"
        );
        assert_eq!(reason(from_uri("intro.md")), "expected docs:// scheme");
    }

    #[test]
    fn uri_round_trip() {
        let uri = to_uri("architecture.md");
        assert_eq!(uri, "docs://architecture.md");
        assert_eq!(from_uri(&uri).unwrap(), "architecture.md");
    }

    #[test]
    fn resolve_accepts_both_forms() {
        assert_eq!(resolve("intro.md").unwrap(), "intro.md");
        assert_eq!(resolve("docs://intro.md").unwrap(), "intro.md");
        assert!(resolve("mcp-docs://intro.md").is_err());
    }
}
