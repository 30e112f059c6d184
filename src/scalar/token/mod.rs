//! Opaque token type.
//!
//! A token is a uniquely-identified, non-numeric, non-textual atom. Two
//! tokens compare equal only when they are the same atom; the optional
//! description is purely diagnostic and never participates in identity.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique opaque atom with an optional description
#[derive(Debug, Clone)]
pub struct Token {
    id: u64,
    description: Option<Arc<str>>,
}

impl Token {
    /// Create a fresh token with no description
    pub fn new() -> Self {
        Self {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            description: None,
        }
    }

    /// Create a fresh token carrying a diagnostic description
    pub fn with_description(description: impl Into<String>) -> Self {
        Self {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            description: Some(Arc::from(description.into().into_boxed_str())),
        }
    }

    /// The process-unique identity of this token
    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The diagnostic description, if any
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl Default for Token {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(d) => write!(f, "Token({d})"),
            None => write!(f, "Token(#{})", self.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_unique() {
        let a = Token::new();
        let b = Token::new();
        assert_ne!(a, b);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_clone_preserves_identity() {
        let a = Token::with_description("session");
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn test_description_not_identity() {
        let a = Token::with_description("same");
        let b = Token::with_description("same");
        assert_ne!(a, b);
    }

    #[test]
    fn test_display() {
        let t = Token::with_description("marker");
        assert_eq!(t.to_string(), "Token(marker)");

        let anon = Token::new();
        assert!(anon.to_string().starts_with("Token(#"));
    }
}
