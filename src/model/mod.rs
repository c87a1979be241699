// SPDX-License-Identifier: MPL-2.0
//! Picker view-model layer.
//!
//! [`AssetViewModel`] wraps one media-library asset and carries the derived
//! display properties a picker cell needs. Asynchronous results land in
//! [`FetchState`] slots; edits live in an optional [`EditRecord`].

pub mod asset;
pub mod edit;
pub mod fetch;

pub use asset::AssetViewModel;
pub use edit::EditRecord;
pub use fetch::FetchState;
