//! Breadcrumb trail.
//!
//! The first item always renders as the home icon linking to its `href`
//! (or `/`). Every later item is preceded by an arrow and renders as a link
//! when it has an `href`, otherwise as the current route.

use askama::Template;
use phone_catalog_core::ProductCategory;

use crate::images::{AssetUrls, HOME_ICON, NEXT_ICON};

/// One step of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub label: String,
    pub href: Option<String>,
}

impl Breadcrumb {
    /// A step that links to `href`.
    #[must_use]
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
        }
    }

    /// The current page; rendered without a link.
    #[must_use]
    pub fn current(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
        }
    }
}

/// `Home / <Category> / <name>` for a product page.
#[must_use]
pub fn product_trail(category: ProductCategory, name: &str) -> Vec<Breadcrumb> {
    vec![
        Breadcrumb::link("Home", "/"),
        Breadcrumb::link(category.label(), format!("/{category}")),
        Breadcrumb::current(name),
    ]
}

/// Breadcrumb item as the template sees it.
#[derive(Debug, Clone)]
pub struct BreadcrumbView {
    pub label: String,
    pub href: String,
    pub is_link: bool,
}

/// Breadcrumb trail template.
#[derive(Template)]
#[template(path = "partials/breadcrumbs.html")]
pub struct BreadcrumbsTemplate {
    pub items: Vec<BreadcrumbView>,
    /// Extra CSS class for the container.
    pub class_name: String,
    pub home_icon: String,
    pub next_icon: String,
}

impl BreadcrumbsTemplate {
    /// Template for `items` with icons resolved through `assets`.
    #[must_use]
    pub fn new(items: &[Breadcrumb], assets: &AssetUrls) -> Self {
        let items = items
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                let href = item.href.as_deref().filter(|href| !href.is_empty());
                let href = match (href, idx) {
                    (Some(href), _) => href.to_string(),
                    (None, 0) => "/".to_string(),
                    (None, _) => String::new(),
                };
                BreadcrumbView {
                    label: item.label.clone(),
                    is_link: !href.is_empty(),
                    href,
                }
            })
            .collect();

        Self {
            items,
            class_name: String::new(),
            home_icon: assets.url(HOME_ICON),
            next_icon: assets.url(NEXT_ICON),
        }
    }

    /// Add a CSS class to the container.
    #[must_use]
    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }
}
