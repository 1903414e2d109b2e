//! Fallback parsing of file-type secret references

use crate::ResolveError;

/// Scheme prefix of a secret reference
const REFERENCE_PREFIX: &str = "op://";

/// A file reference decomposed into its three lookup names.
///
/// Only the exact `op://<vault>/<item>/<file>` shape is a valid file
/// reference; section or field paths cannot name a file attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FileReference<'a> {
    pub vault: &'a str,
    pub item: &'a str,
    pub file: &'a str,
}

impl<'a> FileReference<'a> {
    /// Split a reference into vault, item, and file names.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::MalformedReference`] when the prefix is
    /// missing or the remainder does not split into exactly three segments.
    pub(crate) fn parse(reference: &'a str) -> Result<Self, ResolveError> {
        let malformed = || ResolveError::MalformedReference {
            reference: reference.to_string(),
        };

        let path = reference
            .strip_prefix(REFERENCE_PREFIX)
            .ok_or_else(malformed)?;

        let mut segments = path.split('/');
        match (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) {
            (Some(vault), Some(item), Some(file), None) => Ok(Self { vault, item, file }),
            _ => Err(malformed()),
        }
    }
}
