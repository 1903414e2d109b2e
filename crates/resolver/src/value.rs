//! Resolved value representation

/// The result of resolving a secret reference.
///
/// Exactly one of the two shapes applies: plain secret text resolved
/// directly, or base64-encoded bytes of a file attachment resolved through
/// the fallback walk. The explicit discriminator keeps the two from ever
/// conflating in a single string field.
#[derive(Clone, PartialEq, Eq)]
pub enum ResolvedValue {
    /// Plain UTF-8 secret text, trimmed by the upstream service
    Secret(String),
    /// File attachment content, base64-encoded and trimmed
    FileContent(String),
}

impl ResolvedValue {
    /// Whether this value came from the file-attachment fallback
    #[must_use]
    pub const fn is_file_content(&self) -> bool {
        matches!(self, Self::FileContent(_))
    }

    /// Borrow the text either shape carries
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Secret(value) | Self::FileContent(value) => value,
        }
    }

    /// Consume the value, returning the text either shape carries
    #[must_use]
    pub fn into_string(self) -> String {
        match self {
            Self::Secret(value) | Self::FileContent(value) => value,
        }
    }
}

impl std::fmt::Debug for ResolvedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Secret(_) => f.write_str("Secret([REDACTED])"),
            Self::FileContent(_) => f.write_str("FileContent([REDACTED])"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_variant_accessors() {
        let value = ResolvedValue::Secret("s3cr3t-pw".to_string());
        assert!(!value.is_file_content());
        assert_eq!(value.as_str(), "s3cr3t-pw");
        assert_eq!(value.into_string(), "s3cr3t-pw");
    }

    #[test]
    fn test_file_content_variant_accessors() {
        let value = ResolvedValue::FileContent("LS0tLS1CRUdJTg==".to_string());
        assert!(value.is_file_content());
        assert_eq!(value.into_string(), "LS0tLS1CRUdJTg==");
    }

    #[test]
    fn test_debug_redacts_value() {
        let secret = ResolvedValue::Secret("s3cr3t-pw".to_string());
        let debug = format!("{secret:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("s3cr3t-pw"));

        let file = ResolvedValue::FileContent("LS0tLS1CRUdJTg==".to_string());
        let debug = format!("{file:?}");
        assert!(debug.contains("FileContent"));
        assert!(!debug.contains("LS0tLS1CRUdJTg"));
    }

    #[test]
    fn test_variants_with_equal_text_are_distinct() {
        let secret = ResolvedValue::Secret("same".to_string());
        let file = ResolvedValue::FileContent("same".to_string());
        assert_ne!(secret, file);
    }
}
