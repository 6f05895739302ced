//! Phone Catalog Core - Shared types and pure catalog logic.
//!
//! This crate provides the types used across all phone catalog components:
//! - `storefront` - Data client, persisted stores, and views
//! - `cli` - Command-line front end over the storefront
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no storage,
//! no HTTP clients. Store transitions and slug rewriting live here so they can
//! be tested without any rendering or persistence layer.
//!
//! # Modules
//!
//! - [`types`] - Products, identities, prices, and store entries
//! - [`store`] - The cart/favourites reducer
//! - [`variant`] - Sibling-variant slug derivation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod store;
pub mod types;
pub mod variant;

pub use store::{StoreAction, reduce};
pub use types::*;
