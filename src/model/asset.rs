// SPDX-License-Identifier: MPL-2.0
//! The per-asset view-model.
//!
//! [`AssetViewModel`] adapts one media-library asset into the data a
//! picker cell displays: media type, duration label, preview sizing,
//! selection flag, memoized footprint, optional edit record, and the two
//! asynchronously fetched results (thumbnail, playable video file).
//!
//! Construction is pure. Fetches start explicitly via
//! [`AssetViewModel::begin_fetches`] (or the
//! [`AssetViewModel::with_fetches`] convenience constructor) and run as
//! tokio tasks; each writes its slot at most once, and outstanding tasks
//! are aborted when the view-model is dropped.
//!
//! Every fetch failure is absorbed: the slot resolves to
//! [`FetchState::Unavailable`] and the cause is only logged.

use crate::application::port::{
    AssetSizeProber, ExportPreset, ResolvedMedia, ThumbnailRequest, ThumbnailSource,
    VideoContainer, VideoQuality, VideoSource,
};
use crate::config::PickerConfig;
use crate::domain::media::{
    self, AssetDescriptor, DisplayMetrics, KbSize, MediaType, PreviewSize, RawImage,
};
use crate::model::edit::EditRecord;
use crate::model::fetch::FetchState;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use uuid::Uuid;

type Slot<T> = Arc<Mutex<FetchState<T>>>;

/// View-model for one media-library asset.
///
/// Identity is the underlying asset's stable identifier: equality and
/// hashing consider nothing else.
#[derive(Debug)]
pub struct AssetViewModel {
    descriptor: Arc<AssetDescriptor>,
    media_type: MediaType,
    duration_label: String,
    /// Toggled by the owning UI layer; carries no internal invariant.
    pub is_selected: bool,
    edit: Option<EditRecord>,
    thumbnail: Slot<RawImage>,
    video_file: Slot<PathBuf>,
    data_size: OnceLock<Option<KbSize>>,
    fetch_tasks: Vec<JoinHandle<()>>,
    fetches_started: bool,
}

impl AssetViewModel {
    /// Creates a view-model from an asset descriptor.
    ///
    /// Classifies the media type and renders the duration label once;
    /// neither is ever recomputed. No fetch is issued - see
    /// [`AssetViewModel::begin_fetches`].
    #[must_use]
    pub fn new(descriptor: AssetDescriptor) -> Self {
        let media_type = media::classify(descriptor.kind(), descriptor.subtypes());
        let duration_label = if media_type.is_video() {
            media::format_duration(descriptor.duration_secs())
        } else {
            String::new()
        };

        Self {
            descriptor: Arc::new(descriptor),
            media_type,
            duration_label,
            is_selected: false,
            edit: None,
            thumbnail: Arc::new(Mutex::new(FetchState::Pending)),
            video_file: Arc::new(Mutex::new(FetchState::Pending)),
            data_size: OnceLock::new(),
            fetch_tasks: Vec::new(),
            fetches_started: false,
        }
    }

    /// Creates a view-model and immediately starts both fetches.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime context (the fetches are
    /// spawned as tokio tasks).
    #[must_use]
    pub fn with_fetches(
        descriptor: AssetDescriptor,
        thumbnails: Arc<dyn ThumbnailSource>,
        videos: Arc<dyn VideoSource>,
        config: &PickerConfig,
    ) -> Self {
        let mut model = Self::new(descriptor);
        model.begin_fetches(thumbnails, videos, config);
        model
    }

    /// Starts the thumbnail fetch and the playable-video resolution.
    ///
    /// The first call wins; repeated calls are no-ops, preserving the
    /// write-once behavior of both slots. There is no ordering between the
    /// two tasks.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime context.
    pub fn begin_fetches(
        &mut self,
        thumbnails: Arc<dyn ThumbnailSource>,
        videos: Arc<dyn VideoSource>,
        config: &PickerConfig,
    ) {
        if self.fetches_started {
            return;
        }
        self.fetches_started = true;

        let slot = Arc::clone(&self.thumbnail);
        let descriptor = Arc::clone(&self.descriptor);
        self.fetch_tasks.push(tokio::spawn(async move {
            let image = thumbnails
                .thumbnail(&descriptor, ThumbnailRequest::maximum_quality())
                .await;
            debug!(
                asset = %descriptor.identifier(),
                available = image.is_some(),
                "thumbnail fetch resolved"
            );
            store(&slot, image);
        }));

        let slot = Arc::clone(&self.video_file);
        let descriptor = Arc::clone(&self.descriptor);
        let export_dir = config.video_export_dir();
        self.fetch_tasks.push(tokio::spawn(async move {
            let location = resolve_playable_file(&descriptor, videos.as_ref(), &export_dir).await;
            debug!(
                asset = %descriptor.identifier(),
                available = location.is_some(),
                "video resolution resolved"
            );
            store(&slot, location);
        }));
    }

    /// Waits for the in-flight fetch tasks to finish.
    ///
    /// Useful in tests and teardown paths; the slots are guaranteed to be
    /// resolved afterwards (unless a task was aborted).
    pub async fn join_fetches(&mut self) {
        for task in self.fetch_tasks.drain(..) {
            let _ = task.await;
        }
    }

    /// The underlying asset's stable identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        self.descriptor.identifier()
    }

    /// The wrapped asset descriptor.
    #[must_use]
    pub fn descriptor(&self) -> &AssetDescriptor {
        &self.descriptor
    }

    /// Media type, classified once at construction.
    #[must_use]
    pub fn media_type(&self) -> MediaType {
        self.media_type
    }

    /// Formatted playback duration; empty unless the asset is a video.
    #[must_use]
    pub fn duration_label(&self) -> &str {
        &self.duration_label
    }

    /// Whole-second duration, rounded; 0 for non-video assets.
    #[must_use]
    pub fn seconds(&self) -> u64 {
        if !self.media_type.is_video() {
            return 0;
        }
        let rounded = self.descriptor.duration_secs().round();
        if rounded.is_finite() && rounded > 0.0 {
            rounded as u64
        } else {
            0
        }
    }

    /// Width/height ratio of the underlying asset.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        self.descriptor.aspect_ratio()
    }

    /// Physical-pixel size to request for this asset's preview decode.
    #[must_use]
    pub fn preview_size(&self, metrics: DisplayMetrics, config: &PickerConfig) -> PreviewSize {
        media::preview_size(
            self.descriptor.pixel_width(),
            self.descriptor.pixel_height(),
            metrics,
            config.max_preview_dimension(),
        )
    }

    /// Current state of the thumbnail fetch.
    #[must_use]
    pub fn thumbnail(&self) -> FetchState<RawImage> {
        snapshot(&self.thumbnail)
    }

    /// Current state of the playable-video resolution.
    #[must_use]
    pub fn video_file(&self) -> FetchState<PathBuf> {
        snapshot(&self.video_file)
    }

    /// The asset's on-disk footprint, probed on first call and memoized
    /// for the lifetime of the view-model (including a `None` answer).
    pub fn data_size(&self, prober: &dyn AssetSizeProber) -> Option<KbSize> {
        *self.data_size.get_or_init(|| {
            let size = prober.asset_size(&self.descriptor);
            if size.is_none() {
                warn!(asset = %self.descriptor.identifier(), "asset size probe returned nothing");
            }
            size
        })
    }

    /// The last edit applied to this asset, if any.
    #[must_use]
    pub fn edit(&self) -> Option<&EditRecord> {
        self.edit.as_ref()
    }

    /// Replaces the current edit record.
    pub fn set_edit(&mut self, record: EditRecord) {
        self.edit = Some(record);
    }

    /// Removes the current edit record, returning it.
    pub fn clear_edit(&mut self) -> Option<EditRecord> {
        self.edit.take()
    }

    /// The edited rendition, readable only while an edit record exists.
    #[must_use]
    pub fn edited_image(&self) -> Option<&RawImage> {
        self.edit.as_ref().map(EditRecord::image)
    }
}

impl PartialEq for AssetViewModel {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for AssetViewModel {}

impl Hash for AssetViewModel {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl Drop for AssetViewModel {
    fn drop(&mut self) {
        for task in &self.fetch_tasks {
            task.abort();
        }
    }
}

/// Resolves the playable file for an asset: a direct file reference when
/// the platform hands one back, otherwise a one-shot export into a
/// uniquely named container file under `export_dir`.
async fn resolve_playable_file(
    descriptor: &AssetDescriptor,
    videos: &dyn VideoSource,
    export_dir: &Path,
) -> Option<PathBuf> {
    let resolved = videos.resolve(descriptor, VideoQuality::Original).await?;

    match resolved {
        ResolvedMedia::FileBacked(path) => Some(path),
        ResolvedMedia::Composition(composition) => {
            let container = VideoContainer::Mov;
            let destination =
                export_dir.join(format!("{}.{}", Uuid::new_v4(), container.extension()));
            match videos
                .export(
                    &composition,
                    ExportPreset::HighestQuality,
                    container,
                    &destination,
                )
                .await
            {
                Ok(()) => Some(destination),
                Err(err) => {
                    warn!(
                        asset = %descriptor.identifier(),
                        error = %err,
                        "video export failed"
                    );
                    None
                }
            }
        }
    }
}

/// Writes a completion into a slot, but only while it is still pending.
fn store<T>(slot: &Mutex<FetchState<T>>, value: Option<T>) {
    if let Ok(mut state) = slot.lock() {
        if state.is_pending() {
            *state = match value {
                Some(value) => FetchState::Ready(value),
                None => FetchState::Unavailable,
            };
        }
    }
}

/// Clones the current slot state; a poisoned slot reads as unavailable.
fn snapshot<T: Clone>(slot: &Mutex<FetchState<T>>) -> FetchState<T> {
    slot.lock()
        .map(|state| (*state).clone())
        .unwrap_or(FetchState::Unavailable)
}
