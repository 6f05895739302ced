//! Page shown for unknown routes and missing products.

use askama::Template;

use crate::images::{AssetUrls, PLACEHOLDER_IMAGE};

/// Not-found page template.
#[derive(Template)]
#[template(path = "pages/not_found.html")]
pub struct NotFoundTemplate {
    pub image_src: String,
}

impl NotFoundTemplate {
    #[must_use]
    pub fn new(assets: &AssetUrls) -> Self {
        Self {
            image_src: assets.url(PLACEHOLDER_IMAGE),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_render_not_found() {
        let html = NotFoundTemplate::new(&AssetUrls::new("https://example.com"))
            .render()
            .unwrap();
        assert!(html.contains(r#"src="https://example.com/img/page-not-found.png""#));
        assert!(html.contains(r#"alt="Page not found""#));
    }
}
