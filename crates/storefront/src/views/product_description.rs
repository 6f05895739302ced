//! Product description view with the variant selector.
//!
//! [`ProductDescription`] keeps the viewer's selection (image, color,
//! capacity) for one product. The selection starts at the product's own
//! values and is reset whenever a product with a different identity is
//! supplied; re-supplying the same product keeps it.
//!
//! Color and capacity choices navigate to sibling variants. Their links are
//! `/<category>/<slug>` where the slug is derived from the current one by
//! [`phone_catalog_core::variant`]. When no slug can be derived the option
//! is rendered without a link.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut view = ProductDescription::new(product, ProductCategory::Phones, Some(slug));
//! view.select_color("silver");
//! let html = view
//!     .template(&assets, view.is_in_cart(&cart), view.is_in_favourites(&favourites))
//!     .render()?;
//! ```

use std::sync::LazyLock;

use askama::Template;
use phone_catalog_core::variant::{capacity_sibling, color_sibling};
use phone_catalog_core::{DescriptionSection, Product, ProductCategory, ProductIdentity};
use regex::Regex;

use crate::images::{AssetUrls, FAVOURITE_ICON, FAVOURITE_ICON_SELECTED};
use crate::store::{CartStore, FavouritesStore};

/// Matches the number and unit of a capacity such as `64GB`.
static CAPACITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)(GB)").expect("Invalid regex"));

/// Swatch colors for the catalog's color names, keyed by compact lowercase name.
const SWATCHES: &[(&str, &str)] = &[
    ("black", "#201d24"),
    ("coral", "#ee7762"),
    ("gold", "#fcdbc1"),
    ("green", "#aee1cd"),
    ("midnightgreen", "#5f7170"),
    ("purple", "#d1cdda"),
    ("red", "#c90c0d"),
    ("rosegold", "#fad9d3"),
    ("silver", "#f0f0f0"),
    ("spacegray", "#4c4c4c"),
    ("white", "#ffffff"),
    ("yellow", "#ffe681"),
];

/// Display label for a capacity: `64GB` becomes `64 GB`.
#[must_use]
pub fn capacity_label(capacity: &str) -> String {
    CAPACITY_RE.replace(capacity, "$1 $2").into_owned()
}

/// CSS color for a swatch. Unknown names are passed through as CSS color names.
#[must_use]
pub fn swatch_color(color: &str) -> String {
    let key: String = color
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect::<String>()
        .to_lowercase();
    SWATCHES
        .iter()
        .find(|(name, _)| *name == key)
        .map_or_else(|| color.to_string(), |(_, hex)| (*hex).to_string())
}

/// One row of a technical details table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecRow {
    pub name: &'static str,
    pub value: String,
}

impl SpecRow {
    fn new(name: &'static str, value: Option<&str>) -> Self {
        Self {
            name,
            value: value.unwrap_or_default().to_string(),
        }
    }
}

/// Display state of a product page.
#[derive(Debug, Clone)]
pub struct ProductDescription {
    product: Product,
    category: ProductCategory,
    slug: Option<String>,
    selected_image: Option<String>,
    selected_color: Option<String>,
    selected_capacity: Option<String>,
}

impl ProductDescription {
    /// View of `product`, reached through `slug` under `category`.
    #[must_use]
    pub fn new(product: Product, category: ProductCategory, slug: Option<&str>) -> Self {
        let mut view = Self {
            product: Product::default(),
            category,
            slug: None,
            selected_image: None,
            selected_color: None,
            selected_capacity: None,
        };
        view.reset_to(product);
        view.slug = slug.map(ToString::to_string);
        view
    }

    /// Show `product` under `slug`.
    ///
    /// The selection is reset to the new product's values when its identity
    /// differs from the current one.
    pub fn set_product(&mut self, product: Product, slug: Option<&str>) {
        self.slug = slug.map(ToString::to_string);
        if product.identity() == self.product.identity() {
            self.product = product;
        } else {
            self.reset_to(product);
        }
    }

    fn reset_to(&mut self, product: Product) {
        self.selected_image = product.primary_image().map(ToString::to_string);
        self.selected_color.clone_from(&product.color);
        self.selected_capacity.clone_from(&product.capacity);
        self.product = product;
    }

    #[must_use]
    pub const fn product(&self) -> &Product {
        &self.product
    }

    #[must_use]
    pub const fn category(&self) -> ProductCategory {
        self.category
    }

    #[must_use]
    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    #[must_use]
    pub fn selected_image(&self) -> Option<&str> {
        self.selected_image.as_deref()
    }

    #[must_use]
    pub fn selected_color(&self) -> Option<&str> {
        self.selected_color.as_deref()
    }

    #[must_use]
    pub fn selected_capacity(&self) -> Option<&str> {
        self.selected_capacity.as_deref()
    }

    /// Select a gallery image. Images not in the gallery are ignored.
    pub fn select_image(&mut self, image: &str) -> bool {
        let known = self.product.images.iter().any(|i| i == image);
        if known {
            self.selected_image = Some(image.to_string());
        }
        known
    }

    pub fn select_color(&mut self, color: &str) {
        self.selected_color = Some(color.to_string());
    }

    pub fn select_capacity(&mut self, capacity: &str) {
        self.selected_capacity = Some(capacity.to_string());
    }

    /// Slug of the sibling variant in `new_color`, or `""`.
    #[must_use]
    pub fn color_slug(&self, new_color: &str) -> String {
        color_sibling(
            self.slug.as_deref(),
            self.product.colors_available.as_deref(),
            new_color,
        )
    }

    /// Slug of the sibling variant with `new_capacity` in the selected color, or `""`.
    #[must_use]
    pub fn capacity_slug(&self, new_capacity: &str) -> String {
        capacity_sibling(
            self.slug.as_deref(),
            new_capacity,
            self.selected_color.as_deref(),
        )
    }

    /// Route of the sibling variant in `color`.
    #[must_use]
    pub fn color_link(&self, color: &str) -> Option<String> {
        self.route_for(&self.color_slug(color))
    }

    /// Route of the sibling variant with `capacity`.
    #[must_use]
    pub fn capacity_link(&self, capacity: &str) -> Option<String> {
        self.route_for(&self.capacity_slug(&capacity.to_lowercase()))
    }

    fn route_for(&self, slug: &str) -> Option<String> {
        (!slug.is_empty()).then(|| self.category.product_path(slug))
    }

    #[must_use]
    pub fn is_in_cart(&self, cart: &CartStore) -> bool {
        cart.contains(&self.product)
    }

    #[must_use]
    pub fn is_in_favourites(&self, favourites: &FavouritesStore) -> bool {
        favourites.contains(&self.product)
    }

    /// URL of the main image.
    #[must_use]
    pub fn image_src(&self, assets: &AssetUrls) -> String {
        assets.image_src(&self.product, self.selected_image.as_deref())
    }

    /// Rows shown next to the order controls.
    #[must_use]
    pub fn short_specs(&self) -> Vec<SpecRow> {
        let p = &self.product;
        vec![
            SpecRow::new("Screen", p.screen.as_deref()),
            SpecRow::new("Resolution", p.resolution.as_deref()),
            SpecRow::new("Processor", p.processor.as_deref()),
            SpecRow::new("RAM", p.ram.as_deref()),
        ]
    }

    /// Rows of the tech specs section. Camera and Zoom appear only when known.
    #[must_use]
    pub fn full_specs(&self) -> Vec<SpecRow> {
        let p = &self.product;
        let mut rows = self.short_specs();
        rows.push(SpecRow::new("Built in memory", p.capacity.as_deref()));
        if let Some(camera) = p.camera.as_deref().filter(|c| !c.is_empty()) {
            rows.push(SpecRow::new("Camera", Some(camera)));
        }
        if let Some(zoom) = p.zoom.as_deref().filter(|z| !z.is_empty()) {
            rows.push(SpecRow::new("Zoom", Some(zoom)));
        }
        rows.push(SpecRow {
            name: "Cell",
            value: p.cell.join(", "),
        });
        rows
    }

    /// Template for the current state.
    #[must_use]
    pub fn template(
        &self,
        assets: &AssetUrls,
        in_cart: bool,
        in_favourites: bool,
    ) -> ProductDescriptionTemplate {
        let p = &self.product;

        let thumbnails = p
            .images
            .iter()
            .map(|image| ThumbnailView {
                src: assets.url(image),
                is_active: self.selected_image.as_deref() == Some(image.as_str()),
            })
            .collect();

        let colors = p
            .colors_available
            .iter()
            .flatten()
            .map(|color| {
                let href = self.color_link(color);
                ColorOption {
                    name: color.clone(),
                    swatch: swatch_color(color),
                    is_active: self.selected_color.as_deref() == Some(color.as_str()),
                    has_link: href.is_some(),
                    href: href.unwrap_or_default(),
                }
            })
            .collect();

        let capacities = p
            .capacity_available
            .iter()
            .map(|capacity| {
                let href = self.capacity_link(capacity);
                CapacityOption {
                    label: capacity_label(capacity),
                    is_active: self.selected_capacity.as_deref() == Some(capacity.as_str()),
                    has_link: href.is_some(),
                    href: href.unwrap_or_default(),
                }
            })
            .collect();

        let full_price = p.full_price().map(|price| price.to_string());

        ProductDescriptionTemplate {
            name: p.name.clone(),
            identity: p.identity().map(ProductIdentity::into_inner).unwrap_or_default(),
            image_src: self.image_src(assets),
            thumbnails,
            colors,
            capacities,
            price: p.price().map(|price| price.to_string()).unwrap_or_default(),
            has_full_price: full_price.is_some(),
            full_price: full_price.unwrap_or_default(),
            in_cart,
            in_favourites,
            favourite_icon: assets.url(if in_favourites {
                FAVOURITE_ICON_SELECTED
            } else {
                FAVOURITE_ICON
            }),
            short_specs: self.short_specs(),
            full_specs: self.full_specs(),
            about: p.description.clone(),
        }
    }
}

/// Gallery thumbnail.
#[derive(Debug, Clone)]
pub struct ThumbnailView {
    pub src: String,
    pub is_active: bool,
}

/// Color choice linking to a sibling variant.
#[derive(Debug, Clone)]
pub struct ColorOption {
    pub name: String,
    pub swatch: String,
    pub href: String,
    pub has_link: bool,
    pub is_active: bool,
}

/// Capacity choice linking to a sibling variant.
#[derive(Debug, Clone)]
pub struct CapacityOption {
    pub label: String,
    pub href: String,
    pub has_link: bool,
    pub is_active: bool,
}

/// Product description template.
#[derive(Template)]
#[template(path = "partials/product_description.html")]
pub struct ProductDescriptionTemplate {
    pub name: String,
    pub identity: String,
    pub image_src: String,
    pub thumbnails: Vec<ThumbnailView>,
    pub colors: Vec<ColorOption>,
    pub capacities: Vec<CapacityOption>,
    pub price: String,
    pub full_price: String,
    pub has_full_price: bool,
    pub in_cart: bool,
    pub in_favourites: bool,
    pub favourite_icon: String,
    pub short_specs: Vec<SpecRow>,
    pub full_specs: Vec<SpecRow>,
    pub about: Vec<DescriptionSection>,
}
