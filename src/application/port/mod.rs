// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that platform media-library
//! adapters implement. These traits use only domain types, ensuring the
//! picker remains independent of any concrete media framework.
//!
//! # Available Ports
//!
//! - [`thumbnail`]: Asynchronous thumbnail delivery
//! - [`video`]: Playable-media resolution and export
//! - [`probe`]: Asset size and display-metric probes
//!
//! # Design Notes
//!
//! - All traits use domain types only (no platform handles)
//! - Traits are `Send + Sync` for use from spawned fetch tasks
//! - Fetch-style ports are `async` and deliver exactly once per request
//! - Probe-style ports stay synchronous - nothing in them suspends

pub mod probe;
pub mod thumbnail;
pub mod video;

// Re-export main types for convenience
pub use probe::{AssetSizeProber, DisplayProbe};
pub use thumbnail::{DeliveryQuality, FitMode, TargetSize, ThumbnailRequest, ThumbnailSource};
pub use video::{
    CompositionHandle, ExportError, ExportPreset, ResolvedMedia, VideoContainer, VideoQuality,
    VideoSource,
};
