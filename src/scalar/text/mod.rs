//! Text (UTF-8 string) type.
//!
//! This module provides a Text type that:
//! - Guarantees UTF-8 validity
//! - Efficient cloning via Arc<str>
//! - Zero-copy conversions where possible

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;

/// UTF-8 text string with efficient cloning
///
/// Uses Arc<str> internally for cheap cloning of large strings.
#[derive(Debug, Clone)]
pub struct Text {
    inner: Arc<str>,
}

impl Text {
    /// Create a new Text from a String (takes ownership)
    pub fn new(s: String) -> Self {
        Self {
            inner: Arc::from(s.into_boxed_str()),
        }
    }

    /// Create a new Text from &str (allocates)
    pub fn from_str(s: &str) -> Self {
        Self {
            inner: Arc::from(s),
        }
    }

    /// Get the string as &str
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Get the byte length
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Get the character count (O(n) operation)
    pub fn char_count(&self) -> usize {
        self.inner.chars().count()
    }

    /// Trim whitespace from both ends
    pub fn trim(&self) -> Text {
        Text::from_str(self.inner.trim())
    }

    /// Convert to lowercase
    pub fn to_lowercase(&self) -> Text {
        Text::new(self.inner.to_lowercase())
    }
}

impl Deref for Text {
    type Target = str;

    fn deref(&self) -> &str {
        &self.inner
    }
}

impl PartialEq for Text {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for Text {}

impl PartialEq<str> for Text {
    fn eq(&self, other: &str) -> bool {
        &*self.inner == other
    }
}

impl PartialEq<&str> for Text {
    fn eq(&self, other: &&str) -> bool {
        &*self.inner == *other
    }
}

impl Hash for Text {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Self::from_str(s)
    }
}

impl From<char> for Text {
    fn from(c: char) -> Self {
        Self::new(c.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_basics() {
        let t = Text::from_str("hello");
        assert_eq!(t.as_str(), "hello");
        assert_eq!(t.len(), 5);
        assert!(!t.is_empty());
        assert_eq!(t, "hello");
    }

    #[test]
    fn test_text_cheap_clone() {
        let t1 = Text::from_str("shared");
        let t2 = t1.clone();
        assert_eq!(t1, t2);
    }

    #[test]
    fn test_trim_and_lowercase() {
        let t = Text::from_str("  TRUE  ");
        assert_eq!(t.trim().to_lowercase(), "true");
    }

    #[test]
    fn test_char_count() {
        assert_eq!(Text::from_str("héllo").char_count(), 5);
    }
}
