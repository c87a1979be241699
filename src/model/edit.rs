// SPDX-License-Identifier: MPL-2.0
//! Last-edit record.
//!
//! The record owns the edited image: there is no separate image field
//! whose visibility depends on the record's presence, so a stored but
//! invisible edit cannot exist.

use crate::domain::media::RawImage;
use chrono::{DateTime, Utc};

/// Content of the last edit applied to an asset.
#[derive(Debug, Clone, PartialEq)]
pub struct EditRecord {
    image: RawImage,
    applied_at: DateTime<Utc>,
}

impl EditRecord {
    /// Creates a record for an edit applied now.
    #[must_use]
    pub fn new(image: RawImage) -> Self {
        Self {
            image,
            applied_at: Utc::now(),
        }
    }

    /// Creates a record with an explicit timestamp.
    #[must_use]
    pub fn with_timestamp(image: RawImage, applied_at: DateTime<Utc>) -> Self {
        Self { image, applied_at }
    }

    /// The edited rendition of the asset.
    #[must_use]
    pub fn image(&self) -> &RawImage {
        &self.image
    }

    /// When the edit was applied.
    #[must_use]
    pub fn applied_at(&self) -> DateTime<Utc> {
        self.applied_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_owns_the_edited_image() {
        let image = RawImage::from_rgba(2, 2, vec![0u8; 16]);
        let record = EditRecord::new(image.clone());

        assert_eq!(record.image(), &image);
    }

    #[test]
    fn explicit_timestamp_is_preserved() {
        let applied_at = DateTime::parse_from_rfc3339("2024-05-01T10:00:00Z")
            .expect("valid timestamp")
            .with_timezone(&Utc);
        let record =
            EditRecord::with_timestamp(RawImage::from_rgba(1, 1, vec![0u8; 4]), applied_at);

        assert_eq!(record.applied_at(), applied_at);
    }
}
