// SPDX-License-Identifier: MPL-2.0
//! Playable-media resolution and export port definition.
//!
//! This module defines the [`VideoSource`] trait covering two capabilities
//! of the platform media framework: resolving an asset into its playable
//! media object, and exporting a non-file-backed composition into a local
//! container file.
//!
//! # Design Notes
//!
//! - Resolution answers `None` for assets without video data; the picker
//!   records that as unavailable rather than treating it as an error
//! - Export failures carry a cause in [`ExportError`], but the picker
//!   collapses them to unavailability after logging - nothing propagates

use crate::domain::media::AssetDescriptor;
use async_trait::async_trait;
use std::fmt;
use std::path::{Path, PathBuf};

// =============================================================================
// Resolution types
// =============================================================================

/// Version of the video data requested during resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoQuality {
    /// The originally captured data, ignoring later edits.
    Original,
    /// The current rendition, with edits applied.
    Current,
}

/// Opaque handle to composed video data that is not file-backed.
///
/// The token is meaningful only to the adapter that issued it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositionHandle(String);

impl CompositionHandle {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The adapter-scoped token backing this handle.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.0
    }
}

/// The platform's resolved representation of an asset's video data.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedMedia {
    /// Already backed by a local file; playable as-is, no copy needed.
    FileBacked(PathBuf),
    /// A composition that must be exported before playback.
    Composition(CompositionHandle),
}

impl ResolvedMedia {
    /// Returns the direct file reference, if this media is file-backed.
    #[must_use]
    pub fn file_url(&self) -> Option<&Path> {
        match self {
            ResolvedMedia::FileBacked(path) => Some(path),
            ResolvedMedia::Composition(_) => None,
        }
    }
}

// =============================================================================
// Export types
// =============================================================================

/// Quality preset for an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportPreset {
    HighestQuality,
    MediumQuality,
    LowQuality,
}

/// Output container format for an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoContainer {
    Mov,
    Mp4,
}

impl VideoContainer {
    /// File extension for the container, without the leading dot.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            VideoContainer::Mov => "mov",
            VideoContainer::Mp4 => "mp4",
        }
    }
}

/// Errors reported by the export side of the port.
#[derive(Debug, Clone)]
pub enum ExportError {
    /// The export session was cancelled before finishing.
    Cancelled,
    /// The export session ran and reported failure.
    Failed(String),
    /// The destination could not be written.
    Io(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Cancelled => write!(f, "Export cancelled"),
            ExportError::Failed(msg) => write!(f, "Export failed: {msg}"),
            ExportError::Io(msg) => write!(f, "Export I/O error: {msg}"),
        }
    }
}

impl std::error::Error for ExportError {}

// =============================================================================
// VideoSource Trait
// =============================================================================

/// Port for resolving and exporting an asset's playable video data.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`: the picker calls this port from
/// spawned fetch tasks.
///
/// # Lifecycle
///
/// 1. `resolve()` the asset into a [`ResolvedMedia`]
/// 2. If file-backed, play the file directly
/// 3. Otherwise `export()` the composition into a local container file
#[async_trait]
pub trait VideoSource: Send + Sync {
    /// Resolves the playable media object for `asset`.
    ///
    /// Returns `None` when the asset has no resolvable video data (stills,
    /// missing originals, access revoked).
    async fn resolve(&self, asset: &AssetDescriptor, quality: VideoQuality)
        -> Option<ResolvedMedia>;

    /// Exports `composition` into `destination`.
    ///
    /// The destination path carries the container's extension and must be
    /// unique; the adapter writes the file only on success.
    ///
    /// # Errors
    ///
    /// Returns an [`ExportError`] when the export session is cancelled,
    /// reports failure, or cannot write the destination.
    async fn export(
        &self,
        composition: &CompositionHandle,
        preset: ExportPreset,
        container: VideoContainer,
        destination: &Path,
    ) -> Result<(), ExportError>;
}
