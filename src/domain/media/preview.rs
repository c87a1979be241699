// SPDX-License-Identifier: MPL-2.0
//! Preview sizing.
//!
//! Computes the physical-pixel size to request for a decoded preview so
//! the UI never over-fetches a full-resolution decode. Display metrics are
//! passed in explicitly, keeping the computation a pure function that tests
//! can drive without a live display.

/// Logical bounds and pixel density of the host display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayMetrics {
    /// Logical display width (points).
    pub logical_width: f32,
    /// Logical display height (points).
    pub logical_height: f32,
    /// Physical pixels per logical point.
    pub scale: f32,
}

impl DisplayMetrics {
    #[must_use]
    pub fn new(logical_width: f32, logical_height: f32, scale: f32) -> Self {
        Self {
            logical_width,
            logical_height,
            scale,
        }
    }
}

/// A physical-pixel size pair for a preview request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewSize {
    pub width: f32,
    pub height: f32,
}

/// Computes the preview request size for an asset.
///
/// Landscape assets (ratio above 1) clamp the logical height against
/// `max_dimension` and derive the width from the aspect ratio; portrait and
/// square assets clamp the logical width instead. Both axes are scaled by
/// the display's pixel density. Assets with a zero dimension are treated as
/// square.
#[must_use]
pub fn preview_size(
    pixel_width: u32,
    pixel_height: u32,
    metrics: DisplayMetrics,
    max_dimension: f32,
) -> PreviewSize {
    let ratio = if pixel_width == 0 || pixel_height == 0 {
        1.0
    } else {
        pixel_width as f32 / pixel_height as f32
    };

    if ratio > 1.0 {
        let height = metrics.logical_height.min(max_dimension) * metrics.scale;
        PreviewSize {
            width: height * ratio,
            height,
        }
    } else {
        let width = metrics.logical_width.min(max_dimension) * metrics.scale;
        PreviewSize {
            width,
            height: width / ratio,
        }
    }
}
