//! Product identifiers.
//!
//! Catalog JSON carries ids as either strings (`"apple-iphone-11-64gb-black"`)
//! or numbers (`42`). [`RawId`] preserves whichever form was sent, and
//! [`ProductIdentity`] is the canonical string every comparison goes through.

use core::fmt;

use serde::{Deserialize, Serialize};

/// An `id` or `itemId` value exactly as it appears in catalog JSON.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    /// Numeric id (summary listings use these).
    Number(i64),
    /// Slug-style id.
    Text(String),
}

impl RawId {
    /// Returns `true` if the id carries no usable value.
    ///
    /// An empty string counts as absent so that `itemId: ""` falls back to `id`.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Number(_) => false,
            Self::Text(s) => s.is_empty(),
        }
    }
}

impl fmt::Display for RawId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for RawId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<i64> for RawId {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

/// Canonical string key for a product.
///
/// Two products are the same catalog item exactly when their identities are
/// equal, regardless of whether the underlying id was numeric or textual.
///
/// ```
/// use phone_catalog_core::{ProductIdentity, RawId};
///
/// let numeric = ProductIdentity::from(&RawId::Number(7));
/// let textual = ProductIdentity::from(&RawId::from("7"));
/// assert_eq!(numeric, textual);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductIdentity(String);

impl ProductIdentity {
    /// Create an identity from any string-like value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identity as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the identity and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&RawId> for ProductIdentity {
    fn from(id: &RawId) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for ProductIdentity {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for ProductIdentity {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for ProductIdentity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
