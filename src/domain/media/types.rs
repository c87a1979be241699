// SPDX-License-Identifier: MPL-2.0
//! Core media types for the domain layer.
//!
//! These types represent pure data without any presentation dependencies.
//! [`AssetDescriptor`] is the narrow, read-only view of a platform
//! media-library asset: it exposes exactly the fields the picker reads and
//! nothing else, decoupling the view-model from the concrete platform type.

use std::fmt;
use std::sync::Arc;

/// Display-facing classification of a media-library asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    /// Unmapped, audio-only, or otherwise unsupported assets.
    Unknown,
    /// Plain still image.
    Image,
    /// Animated image (GIF and friends).
    Gif,
    /// Still image paired with a short motion clip, treated as one item.
    LivePhoto,
    /// Video asset.
    Video,
}

impl MediaType {
    /// Returns `true` for the video variant.
    #[must_use]
    pub fn is_video(self) -> bool {
        matches!(self, MediaType::Video)
    }

    /// Returns `true` for any of the image-kind variants.
    #[must_use]
    pub fn is_image_like(self) -> bool {
        matches!(self, MediaType::Image | MediaType::Gif | MediaType::LivePhoto)
    }
}

/// Raw media kind as reported by the platform library, before
/// subtype-aware classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Unknown,
    Image,
    Video,
    Audio,
}

/// Media-subtype flags carried alongside the raw kind.
///
/// Both flags can in principle be set at once; classification gives the
/// animated flag priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubtypeFlags {
    /// The image data is animated (GIF).
    pub animated: bool,
    /// The image carries a live-photo companion clip.
    pub live_photo: bool,
}

impl SubtypeFlags {
    /// No subtype flags set.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }
}

/// Immutable value object describing one platform media-library asset.
///
/// Identity is the platform's stable identifier; all other fields are the
/// snapshot the picker needs for derived display properties.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetDescriptor {
    identifier: String,
    pixel_width: u32,
    pixel_height: u32,
    duration_secs: f64,
    kind: AssetKind,
    subtypes: SubtypeFlags,
}

impl AssetDescriptor {
    /// Creates a descriptor from the fields read off the platform asset.
    #[must_use]
    pub fn new(
        identifier: impl Into<String>,
        pixel_width: u32,
        pixel_height: u32,
        duration_secs: f64,
        kind: AssetKind,
        subtypes: SubtypeFlags,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            pixel_width,
            pixel_height,
            duration_secs,
            kind,
            subtypes,
        }
    }

    /// The platform's stable identifier for this asset.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Asset width in pixels.
    #[must_use]
    pub fn pixel_width(&self) -> u32 {
        self.pixel_width
    }

    /// Asset height in pixels.
    #[must_use]
    pub fn pixel_height(&self) -> u32 {
        self.pixel_height
    }

    /// Reported duration in seconds (0.0 for stills).
    #[must_use]
    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    /// Raw media kind as reported by the platform.
    #[must_use]
    pub fn kind(&self) -> AssetKind {
        self.kind
    }

    /// Media-subtype flags.
    #[must_use]
    pub fn subtypes(&self) -> SubtypeFlags {
        self.subtypes
    }

    /// Returns the width/height ratio.
    ///
    /// Returns 1.0 when the height is 0.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        if self.pixel_height == 0 {
            1.0
        } else {
            self.pixel_width as f32 / self.pixel_height as f32
        }
    }
}

/// Raw image data without presentation dependencies.
///
/// This is the domain representation of a decoded image, containing only
/// the pure pixel data. Presentation layer converts this to
/// framework-specific handles.
#[derive(Debug, Clone)]
pub struct RawImage {
    width: u32,
    height: u32,
    /// RGBA pixel data (4 bytes per pixel).
    rgba_bytes: Arc<Vec<u8>>,
}

impl RawImage {
    /// Creates a new `RawImage` from dimensions and RGBA pixel data.
    ///
    /// # Panics
    ///
    /// Panics if the pixel data length doesn't match `width * height * 4`.
    #[must_use]
    pub fn new(width: u32, height: u32, rgba_bytes: Arc<Vec<u8>>) -> Self {
        let expected_len = (width as usize) * (height as usize) * 4;
        assert_eq!(
            rgba_bytes.len(),
            expected_len,
            "RGBA data length mismatch: expected {expected_len}, got {}",
            rgba_bytes.len()
        );

        Self {
            width,
            height,
            rgba_bytes,
        }
    }

    /// Creates a new `RawImage` from dimensions and owned RGBA pixel data.
    ///
    /// # Panics
    ///
    /// Panics if the pixel data length doesn't match `width * height * 4`.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, rgba_bytes: Vec<u8>) -> Self {
        Self::new(width, height, Arc::new(rgba_bytes))
    }

    /// Returns the image width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns a reference to the RGBA pixel data.
    #[must_use]
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }
}

impl PartialEq for RawImage {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.rgba_bytes == other.rgba_bytes
    }
}

impl Eq for RawImage {}

/// On-disk footprint of an asset, in kilobyte units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KbSize(f64);

impl KbSize {
    #[must_use]
    pub fn new(kilobytes: f64) -> Self {
        Self(kilobytes)
    }

    /// The size in kilobytes.
    #[must_use]
    pub fn kilobytes(self) -> f64 {
        self.0
    }
}

impl fmt::Display for KbSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 >= 1024.0 {
            write!(f, "{:.1} MB", self.0 / 1024.0)
        } else {
            write!(f, "{:.1} KB", self.0)
        }
    }
}
