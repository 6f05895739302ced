//! HTML views rendered with askama.
//!
//! View models hold the display state and compute every string the
//! templates print, so the templates themselves stay free of logic beyond
//! loops and flags.

pub mod breadcrumbs;
pub mod not_found;
pub mod product_description;
pub mod product_page;

pub use breadcrumbs::{Breadcrumb, BreadcrumbsTemplate};
pub use not_found::NotFoundTemplate;
pub use product_description::{ProductDescription, ProductDescriptionTemplate, SpecRow};
pub use product_page::ProductPageTemplate;
