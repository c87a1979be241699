// SPDX-License-Identifier: MPL-2.0
//! Media-type classification.
//!
//! Maps the raw kind and subtype flags reported by the platform library to
//! the display-facing [`MediaType`]. The mapping is total: anything that is
//! neither an image nor a video lands on [`MediaType::Unknown`].

use super::types::{AssetKind, MediaType, SubtypeFlags};

/// Classifies a raw asset kind plus subtype flags into a [`MediaType`].
///
/// Video wins regardless of subtype flags. For images the animated flag
/// takes priority over the live-photo flag when both are set.
#[must_use]
pub fn classify(kind: AssetKind, subtypes: SubtypeFlags) -> MediaType {
    match kind {
        AssetKind::Video => MediaType::Video,
        AssetKind::Image => {
            if subtypes.animated {
                MediaType::Gif
            } else if subtypes.live_photo {
                MediaType::LivePhoto
            } else {
                MediaType::Image
            }
        }
        AssetKind::Unknown | AssetKind::Audio => MediaType::Unknown,
    }
}
