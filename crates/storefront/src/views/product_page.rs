//! Full product page: breadcrumb trail above the description.

use askama::Template;

use crate::images::AssetUrls;
use crate::views::breadcrumbs::{BreadcrumbsTemplate, product_trail};
use crate::views::product_description::ProductDescription;

/// Product page template. Sections are rendered separately and embedded.
#[derive(Template)]
#[template(path = "pages/product.html")]
pub struct ProductPageTemplate {
    pub title: String,
    pub breadcrumbs_html: String,
    pub description_html: String,
}

impl ProductPageTemplate {
    /// Page for `view` with the given store membership.
    ///
    /// # Errors
    ///
    /// Returns an error if a section fails to render.
    pub fn new(
        view: &ProductDescription,
        assets: &AssetUrls,
        in_cart: bool,
        in_favourites: bool,
    ) -> askama::Result<Self> {
        let name = &view.product().name;
        let breadcrumbs_html = BreadcrumbsTemplate::new(&product_trail(view.category(), name), assets)
            .with_class("product-page__breadcrumbs")
            .render()?;
        let description_html = view.template(assets, in_cart, in_favourites).render()?;

        Ok(Self {
            title: name.clone(),
            breadcrumbs_html,
            description_html,
        })
    }
}
