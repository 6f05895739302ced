//! Core types for the phone catalog.
//!
//! This module provides type-safe wrappers for catalog domain concepts.

pub mod category;
pub mod entry;
pub mod id;
pub mod price;
pub mod product;

pub use category::{CategoryError, ProductCategory};
pub use entry::Entry;
pub use id::{ProductIdentity, RawId};
pub use price::Price;
pub use product::{DescriptionSection, Product};
