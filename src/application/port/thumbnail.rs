// SPDX-License-Identifier: MPL-2.0
//! Thumbnail fetch port definition.
//!
//! This module defines the [`ThumbnailSource`] trait for asynchronous
//! thumbnail delivery. Platform adapters implement it on top of their
//! media framework's image manager.
//!
//! # Design Notes
//!
//! - Delivery happens exactly once per request
//! - A failed fetch is reported as `None`, never as a panic or error type:
//!   the picker absorbs unavailability instead of surfacing it

use crate::domain::media::{AssetDescriptor, PreviewSize, RawImage};
use async_trait::async_trait;

// =============================================================================
// ThumbnailRequest
// =============================================================================

/// Target size for a thumbnail fetch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TargetSize {
    /// The largest representation the library can deliver.
    Maximum,
    /// An explicit physical-pixel bound.
    Pixels { width: f32, height: f32 },
}

/// How the delivered image relates to the target size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitMode {
    /// Fit entirely within the target, preserving aspect ratio.
    AspectFit,
    /// Fill the target, cropping as needed.
    AspectFill,
}

/// Decode-quality preference for the fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryQuality {
    /// Deliver quickly, possibly degraded.
    Fast,
    /// Deliver the high-quality decode, even if slower.
    High,
}

/// Parameters of one thumbnail fetch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbnailRequest {
    pub target: TargetSize,
    pub fit: FitMode,
    pub quality: DeliveryQuality,
}

impl ThumbnailRequest {
    /// The request the picker issues at construction: maximum available
    /// size, aspect-fit, high quality.
    #[must_use]
    pub fn maximum_quality() -> Self {
        Self {
            target: TargetSize::Maximum,
            fit: FitMode::AspectFit,
            quality: DeliveryQuality::High,
        }
    }

    /// A request bounded by a computed preview size.
    #[must_use]
    pub fn sized(size: PreviewSize) -> Self {
        Self {
            target: TargetSize::Pixels {
                width: size.width,
                height: size.height,
            },
            fit: FitMode::AspectFit,
            quality: DeliveryQuality::High,
        }
    }
}

// =============================================================================
// ThumbnailSource Trait
// =============================================================================

/// Port for asynchronous thumbnail delivery.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`: the picker calls this port from
/// spawned fetch tasks.
#[async_trait]
pub trait ThumbnailSource: Send + Sync {
    /// Requests a decoded thumbnail for `asset`.
    ///
    /// Returns `None` when the library cannot deliver an image (missing
    /// asset, decode failure, access revoked). The caller cannot
    /// distinguish these causes and is not meant to.
    async fn thumbnail(&self, asset: &AssetDescriptor, request: ThumbnailRequest)
        -> Option<RawImage>;
}
