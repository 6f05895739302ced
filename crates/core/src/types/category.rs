//! Product categories.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a string names no known category.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid category: {0} (expected phones, tablets, or accessories)")]
pub struct CategoryError(pub String);

/// Top-level catalog section. Doubles as the first path segment of product URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Phones,
    Tablets,
    Accessories,
}

impl ProductCategory {
    /// Path segment form (`phones`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Phones => "phones",
            Self::Tablets => "tablets",
            Self::Accessories => "accessories",
        }
    }

    /// Human-readable form used in breadcrumbs (`Phones`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Phones => "Phones",
            Self::Tablets => "Tablets",
            Self::Accessories => "Accessories",
        }
    }

    /// Static JSON collection holding the full product records.
    #[must_use]
    pub const fn collection_path(self) -> &'static str {
        match self {
            Self::Phones => "/api/phones.json",
            Self::Tablets => "/api/tablets.json",
            Self::Accessories => "/api/accessories.json",
        }
    }

    /// Site path of a product page in this category.
    #[must_use]
    pub fn product_path(self, slug: &str) -> String {
        format!("/{}/{slug}", self.as_str())
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProductCategory {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "phones" => Ok(Self::Phones),
            "tablets" => Ok(Self::Tablets),
            "accessories" => Ok(Self::Accessories),
            _ => Err(CategoryError(s.to_owned())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category() {
        assert_eq!(
            "phones".parse::<ProductCategory>().unwrap(),
            ProductCategory::Phones
        );
        assert_eq!(
            "Tablets".parse::<ProductCategory>().unwrap(),
            ProductCategory::Tablets
        );
        assert!("watches".parse::<ProductCategory>().is_err());
    }

    #[test]
    fn test_product_path() {
        assert_eq!(
            ProductCategory::Phones.product_path("apple-iphone-11-64gb-black"),
            "/phones/apple-iphone-11-64gb-black"
        );
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&ProductCategory::Accessories).unwrap();
        assert_eq!(json, "\"accessories\"");
    }
}
