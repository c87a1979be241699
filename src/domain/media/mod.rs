// SPDX-License-Identifier: MPL-2.0
//! Media domain types.
//!
//! This module contains core media types that are independent of any
//! presentation or infrastructure concerns, plus the pure functions that
//! derive display properties from them.

pub mod classify;
pub mod duration;
pub mod preview;
pub mod types;

// Re-export commonly used types
pub use classify::classify;
pub use duration::format_duration;
pub use preview::{preview_size, DisplayMetrics, PreviewSize};
pub use types::{AssetDescriptor, AssetKind, KbSize, MediaType, RawImage, SubtypeFlags};
