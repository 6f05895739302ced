//! Catalog product records.
//!
//! One struct covers phones, tablets, and accessories as well as the flatter
//! summary records in `products.json`. Any field may be missing or `null` in a
//! given collection, so absent data is modelled as `Option` or an empty value
//! rather than rejected at decode time. An unrecognised `category` decodes as
//! `None`.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use super::category::ProductCategory;
use super::id::{ProductIdentity, RawId};
use super::price::Price;

/// A product as served by the static catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Numeric id in summaries, slug id in category collections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RawId>,
    /// Slug id carried by summary records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<RawId>,
    /// Model family shared by all color/capacity variants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace_id: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_category",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<ProductCategory>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Gallery images, primary first.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub images: Vec<String>,
    /// Legacy single image used by summary records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors_available: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub capacity_available: Vec<String>,
    #[serde(default, alias = "price", skip_serializing_if = "Option::is_none")]
    pub price_discount: Option<Decimal>,
    #[serde(default, alias = "fullPrice", skip_serializing_if = "Option::is_none")]
    pub price_regular: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub description: Vec<DescriptionSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screen: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub cell: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
}

/// One titled block of the "About" section.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DescriptionSection {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    /// Paragraphs. Collections send either a single string or a list.
    #[serde(deserialize_with = "one_or_many")]
    pub text: Vec<String>,
}

impl Product {
    /// Canonical identity: `itemId` when present, otherwise `id`.
    ///
    /// Returns `None` only when the record carries neither.
    #[must_use]
    pub fn identity(&self) -> Option<ProductIdentity> {
        self.item_id
            .as_ref()
            .filter(|id| !id.is_blank())
            .or_else(|| self.id.as_ref().filter(|id| !id.is_blank()))
            .map(ProductIdentity::from)
    }

    /// Returns `true` if `identity` names this product.
    #[must_use]
    pub fn has_identity(&self, identity: &ProductIdentity) -> bool {
        self.identity().is_some_and(|own| &own == identity)
    }

    /// First gallery image, if any.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Price a buyer pays: the discounted price, or the regular one.
    #[must_use]
    pub fn unit_price(&self) -> Option<Decimal> {
        self.price_discount.or(self.price_regular)
    }

    /// Selling price for display.
    #[must_use]
    pub fn price(&self) -> Option<Price> {
        self.unit_price().map(Price::usd)
    }

    /// Regular (pre-discount) price for display.
    #[must_use]
    pub fn full_price(&self) -> Option<Price> {
        self.price_regular.map(Price::usd)
    }
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        Some(OneOrMany::One(text)) => vec![text],
        Some(OneOrMany::Many(texts)) => texts,
        None => Vec::new(),
    })
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_category<'de, D>(deserializer: D) -> Result<Option<ProductCategory>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| value.parse().ok()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    const PHONE_JSON: &str = r#"{
        "id": "apple-iphone-11-pro-64gb-spacegray",
        "category": "phones",
        "namespaceId": "apple-iphone-11-pro",
        "name": "Apple iPhone 11 Pro 64GB Space Gray",
        "capacityAvailable": ["64GB", "256GB", "512GB"],
        "capacity": "64GB",
        "priceRegular": 1312,
        "priceDiscount": 1270,
        "colorsAvailable": ["spacegray", "midnightgreen", "gold", "silver"],
        "color": "spacegray",
        "images": ["img/phones/apple-iphone-11-pro/spacegray/00.webp"],
        "description": [
            {"title": "And then there was Pro", "text": ["First paragraph.", "Second paragraph."]},
            {"title": "Camera", "text": "Single paragraph."}
        ],
        "screen": "5.8' OLED",
        "resolution": "2436x1125",
        "processor": "Apple A13 Bionic",
        "ram": "4GB",
        "camera": "12 Mp + 12 Mp + 12 Mp",
        "zoom": "Digital, 10x",
        "cell": ["GPRS", "EDGE", "WCDMA", "UMTS", "HSPA", "LTE"]
    }"#;

    const SUMMARY_JSON: &str = r#"{
        "id": 31,
        "category": "phones",
        "itemId": "apple-iphone-11-pro-64gb-spacegray",
        "name": "Apple iPhone 11 Pro 64GB Space Gray",
        "fullPrice": 1312,
        "price": 1270,
        "screen": "5.8' OLED",
        "capacity": "64GB",
        "color": "spacegray",
        "ram": "4GB",
        "year": 2019,
        "image": "img/phones/apple-iphone-11-pro/spacegray/00.webp"
    }"#;

    #[test]
    fn test_decode_full_record() {
        let product: Product = serde_json::from_str(PHONE_JSON).unwrap();
        assert_eq!(product.category, Some(ProductCategory::Phones));
        assert_eq!(product.capacity_available.len(), 3);
        assert_eq!(product.description[0].text.len(), 2);
        assert_eq!(product.description[1].text, vec!["Single paragraph."]);
        assert_eq!(product.price_discount, Some(Decimal::from(1270)));
        assert_eq!(
            product.primary_image(),
            Some("img/phones/apple-iphone-11-pro/spacegray/00.webp")
        );
    }

    #[test]
    fn test_decode_summary_aliases() {
        let product: Product = serde_json::from_str(SUMMARY_JSON).unwrap();
        assert_eq!(product.price_discount, Some(Decimal::from(1270)));
        assert_eq!(product.price_regular, Some(Decimal::from(1312)));
        assert_eq!(product.year, Some(2019));
        assert!(product.images.is_empty());
        assert!(product.colors_available.is_none());
    }

    #[test]
    fn test_identity_prefers_item_id() {
        let product: Product = serde_json::from_str(SUMMARY_JSON).unwrap();
        assert_eq!(
            product.identity().unwrap().as_str(),
            "apple-iphone-11-pro-64gb-spacegray"
        );
    }

    #[test]
    fn test_identity_falls_back_to_id() {
        let product = Product {
            id: Some(RawId::Number(4)),
            item_id: Some(RawId::from("")),
            ..Product::default()
        };
        assert_eq!(product.identity().unwrap().as_str(), "4");
    }

    #[test]
    fn test_identity_absent() {
        assert!(Product::default().identity().is_none());
    }

    #[test]
    fn test_summary_and_full_record_share_identity() {
        let full: Product = serde_json::from_str(PHONE_JSON).unwrap();
        let summary: Product = serde_json::from_str(SUMMARY_JSON).unwrap();
        assert!(summary.has_identity(&full.identity().unwrap()));
    }

    #[test]
    fn test_prices() {
        let product: Product = serde_json::from_str(PHONE_JSON).unwrap();
        assert_eq!(product.price().unwrap().to_string(), "$1270");
        assert_eq!(product.full_price().unwrap().to_string(), "$1312");

        let regular_only = Product {
            price_regular: Some(Decimal::from(99)),
            ..Product::default()
        };
        assert_eq!(regular_only.unit_price(), Some(Decimal::from(99)));
    }

    #[test]
    fn test_null_fields_decode_as_empty() {
        let product: Product = serde_json::from_str(
            r#"{
                "id": "a",
                "name": null,
                "images": null,
                "capacityAvailable": null,
                "description": null,
                "cell": null,
                "category": null
            }"#,
        )
        .unwrap();
        assert_eq!(product.identity().unwrap().as_str(), "a");
        assert!(product.name.is_empty());
        assert!(product.images.is_empty());
        assert!(product.capacity_available.is_empty());
        assert!(product.description.is_empty());
        assert!(product.cell.is_empty());
        assert!(product.category.is_none());
    }

    #[test]
    fn test_partial_description_sections() {
        let product: Product = serde_json::from_str(
            r#"{
                "id": "a",
                "description": [
                    {"title": "Only a title"},
                    {"text": "Only text"},
                    {"title": null, "text": null}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(product.description[0].title, "Only a title");
        assert!(product.description[0].text.is_empty());
        assert!(product.description[1].title.is_empty());
        assert_eq!(product.description[1].text, vec!["Only text"]);
        assert_eq!(product.description[2], DescriptionSection::default());
    }

    #[test]
    fn test_unknown_category_decodes_as_none() {
        let product: Product =
            serde_json::from_str(r#"{"id": "a", "category": "watches"}"#).unwrap();
        assert!(product.category.is_none());

        let product: Product =
            serde_json::from_str(r#"{"id": "a", "category": "tablets"}"#).unwrap();
        assert_eq!(product.category, Some(ProductCategory::Tablets));
    }

    #[test]
    fn test_sparse_record_keeps_collection_decodable() {
        let products: Vec<Product> = serde_json::from_str(
            r#"[{"id": "a", "name": "A"}, {"id": "b", "name": "B", "cell": null}]"#,
        )
        .unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name, "A");
        assert_eq!(products[1].name, "B");
    }

    #[test]
    fn test_serde_roundtrip() {
        let product: Product = serde_json::from_str(PHONE_JSON).unwrap();
        let json = serde_json::to_string(&product).unwrap();
        let parsed: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, product);
    }
}
