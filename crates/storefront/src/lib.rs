//! Phone catalog storefront library.
//!
//! Everything between the static catalog and a front end: configuration,
//! the data client, persisted cart and favourites, and the HTML views.
//! Front ends build one [`state::AppState`] and work through it.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod images;
pub mod state;
pub mod storage;
pub mod store;
pub mod views;
