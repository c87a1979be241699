// SPDX-License-Identifier: MPL-2.0
//! Asset-size and display-metric probe port definitions.
//!
//! Both probes are synchronous: neither suspends, they answer from state
//! the platform already holds.

use crate::domain::media::{AssetDescriptor, DisplayMetrics, KbSize};

/// Port for probing an asset's on-disk footprint.
pub trait AssetSizeProber: Send + Sync {
    /// Returns the asset's size in kilobyte units.
    ///
    /// Returns `None` when the library cannot report a size. The picker
    /// memoizes whatever answer it gets, including `None` - there is no
    /// retry.
    fn asset_size(&self, asset: &AssetDescriptor) -> Option<KbSize>;
}

/// Port for reading the host display's bounds and pixel density.
pub trait DisplayProbe: Send + Sync {
    fn metrics(&self) -> DisplayMetrics;
}
