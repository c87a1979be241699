// SPDX-License-Identifier: MPL-2.0
//! `asset_picker` wraps platform media-library assets into view-models for
//! photo-picker UIs.
//!
//! The crate derives display properties (media type, duration label,
//! preview size, footprint) from a narrow asset snapshot and drives the
//! asynchronous thumbnail and playable-video fetches through collaborator
//! ports that a platform adapter implements.

#![doc(html_root_url = "https://docs.rs/asset-picker/0.1.0")]

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod model;

#[cfg(test)]
pub(crate) mod test_utils;

pub use model::{AssetViewModel, EditRecord, FetchState};
