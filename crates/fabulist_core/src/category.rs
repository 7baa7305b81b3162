//! Story topic input.

use serde::{Deserialize, Serialize};

/// A story topic, guaranteed non-empty after trimming.
///
/// # Examples
///
/// ```
/// use fabulist_core::Category;
///
/// let category = Category::parse("  space  ").unwrap();
/// assert_eq!(category.as_str(), "space");
///
/// assert!(Category::parse("   ").is_none());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(try_from = "String", into = "String")]
pub struct Category(String);

impl Category {
    /// Trim raw input and accept it if anything is left.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The trimmed topic text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Category {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| "category must not be blank".to_string())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.0
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
