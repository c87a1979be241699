// SPDX-License-Identifier: MPL-2.0
//! End-to-end picker flow over a stub media library.

use asset_picker::application::port::{
    AssetSizeProber, CompositionHandle, DisplayProbe, ExportError, ExportPreset, ResolvedMedia,
    ThumbnailRequest, ThumbnailSource, VideoContainer, VideoQuality, VideoSource,
};
use asset_picker::config::{self, PickerConfig};
use asset_picker::domain::media::{
    AssetDescriptor, AssetKind, DisplayMetrics, KbSize, MediaType, RawImage, SubtypeFlags,
};
use asset_picker::AssetViewModel;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// In-memory stand-in for the platform media library.
#[derive(Default)]
struct MediaLibraryStub {
    thumbnails: HashMap<String, RawImage>,
    resolved: HashMap<String, ResolvedMedia>,
    sizes: HashMap<String, KbSize>,
    thumbnail_delay: Option<Duration>,
    thumbnails_delivered: AtomicUsize,
}

#[async_trait]
impl ThumbnailSource for MediaLibraryStub {
    async fn thumbnail(
        &self,
        asset: &AssetDescriptor,
        _request: ThumbnailRequest,
    ) -> Option<RawImage> {
        if let Some(delay) = self.thumbnail_delay {
            tokio::time::sleep(delay).await;
        }
        self.thumbnails_delivered.fetch_add(1, Ordering::SeqCst);
        self.thumbnails.get(asset.identifier()).cloned()
    }
}

#[async_trait]
impl VideoSource for MediaLibraryStub {
    async fn resolve(
        &self,
        asset: &AssetDescriptor,
        _quality: VideoQuality,
    ) -> Option<ResolvedMedia> {
        self.resolved.get(asset.identifier()).cloned()
    }

    async fn export(
        &self,
        _composition: &CompositionHandle,
        _preset: ExportPreset,
        container: VideoContainer,
        destination: &Path,
    ) -> Result<(), ExportError> {
        // The stub "export" just materializes an empty container file.
        std::fs::write(destination, []).map_err(|e| ExportError::Io(e.to_string()))?;
        assert_eq!(
            destination.extension().and_then(|e| e.to_str()),
            Some(container.extension())
        );
        Ok(())
    }
}

impl AssetSizeProber for MediaLibraryStub {
    fn asset_size(&self, asset: &AssetDescriptor) -> Option<KbSize> {
        self.sizes.get(asset.identifier()).copied()
    }
}

impl DisplayProbe for MediaLibraryStub {
    fn metrics(&self) -> DisplayMetrics {
        DisplayMetrics::new(400.0, 800.0, 2.0)
    }
}

fn still(id: &str, width: u32, height: u32) -> AssetDescriptor {
    AssetDescriptor::new(id, width, height, 0.0, AssetKind::Image, SubtypeFlags::none())
}

fn video(id: &str, duration_secs: f64) -> AssetDescriptor {
    AssetDescriptor::new(
        id,
        1920,
        1080,
        duration_secs,
        AssetKind::Video,
        SubtypeFlags::none(),
    )
}

fn tiny_image() -> RawImage {
    RawImage::from_rgba(2, 2, vec![255u8; 16])
}

#[tokio::test(flavor = "multi_thread")]
async fn picker_flow_resolves_a_mixed_library() {
    let export_dir = tempfile::tempdir().expect("export dir");
    let library = Arc::new(MediaLibraryStub {
        thumbnails: HashMap::from([
            ("photo-1".to_string(), tiny_image()),
            ("clip-1".to_string(), tiny_image()),
            ("slomo-1".to_string(), tiny_image()),
        ]),
        resolved: HashMap::from([
            (
                "clip-1".to_string(),
                ResolvedMedia::FileBacked(PathBuf::from("/library/originals/clip-1.mov")),
            ),
            (
                "slomo-1".to_string(),
                ResolvedMedia::Composition(CompositionHandle::new("slomo-1")),
            ),
        ]),
        sizes: HashMap::from([("photo-1".to_string(), KbSize::new(840.0))]),
        ..MediaLibraryStub::default()
    });
    let config = PickerConfig {
        max_preview_dimension: Some(600.0),
        video_export_dir: Some(export_dir.path().to_path_buf()),
    };

    let descriptors = vec![
        still("photo-1", 2000, 1000),
        video("clip-1", 125.0),
        video("slomo-1", 4.6),
    ];
    let mut models: Vec<AssetViewModel> = descriptors
        .into_iter()
        .map(|descriptor| {
            AssetViewModel::with_fetches(
                descriptor,
                Arc::clone(&library) as Arc<dyn ThumbnailSource>,
                Arc::clone(&library) as Arc<dyn VideoSource>,
                &config,
            )
        })
        .collect();
    for model in &mut models {
        model.join_fetches().await;
    }

    // Every asset got its thumbnail.
    assert!(models.iter().all(|m| m.thumbnail().is_ready()));

    // The still has no playable video and no duration label.
    assert_eq!(models[0].media_type(), MediaType::Image);
    assert_eq!(models[0].duration_label(), "");
    assert!(models[0].video_file().is_unavailable());

    // The file-backed clip is referenced directly, no export.
    assert_eq!(models[1].duration_label(), "02:05");
    assert_eq!(
        models[1].video_file().into_option(),
        Some(PathBuf::from("/library/originals/clip-1.mov"))
    );

    // The composition was exported into the configured directory.
    assert_eq!(models[2].duration_label(), "00:05");
    let exported = models[2].video_file().into_option().expect("exported file");
    assert!(exported.starts_with(export_dir.path()));
    assert!(exported.exists());

    // Preview sizing uses the probed display metrics.
    let metrics = library.metrics();
    let size = models[0].preview_size(metrics, &config);
    assert!((size.height - 1200.0).abs() < f32::EPSILON);
    assert!((size.width - 2400.0).abs() < f32::EPSILON);

    // Footprint probing answers for the still only.
    assert_eq!(
        models[0].data_size(library.as_ref()).map(KbSize::kilobytes),
        Some(840.0)
    );
    assert!(models[1].data_size(library.as_ref()).is_none());

    // Selection is plain UI-owned state.
    models[0].is_selected = true;
    assert!(models[0].is_selected);
}

#[tokio::test(flavor = "multi_thread")]
async fn identifier_equality_dedupes_models() {
    let first = AssetViewModel::new(still("dup", 100, 100));
    let second = AssetViewModel::new(video("dup", 9.0));
    let third = AssetViewModel::new(still("other", 100, 100));

    let mut set = HashSet::new();
    set.insert(first);
    set.insert(second);
    set.insert(third);

    assert_eq!(set.len(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn dropping_the_model_aborts_in_flight_fetches() {
    let library = Arc::new(MediaLibraryStub {
        thumbnails: HashMap::from([("slow".to_string(), tiny_image())]),
        thumbnail_delay: Some(Duration::from_millis(200)),
        ..MediaLibraryStub::default()
    });

    let model = AssetViewModel::with_fetches(
        still("slow", 100, 100),
        Arc::clone(&library) as Arc<dyn ThumbnailSource>,
        Arc::clone(&library) as Arc<dyn VideoSource>,
        &PickerConfig::default(),
    );
    drop(model);

    tokio::time::sleep(Duration::from_millis(400)).await;
    assert_eq!(library.thumbnails_delivered.load(Ordering::SeqCst), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn config_round_trip_feeds_the_picker() {
    let dir = tempfile::tempdir().expect("config dir");
    let path = dir.path().join("settings.toml");
    let saved = PickerConfig {
        max_preview_dimension: Some(480.0),
        video_export_dir: Some(dir.path().join("exports")),
    };
    config::save_to_path(&saved, &path).expect("save config");

    let loaded = config::load_from_path(&path).expect("load config");
    assert!((loaded.max_preview_dimension() - 480.0).abs() < f32::EPSILON);

    let model = AssetViewModel::new(still("photo", 1000, 2000));
    let size = model.preview_size(DisplayMetrics::new(400.0, 800.0, 2.0), &loaded);
    // Portrait: min(400, 480) * 2 = 800 wide, 1600 high at ratio 0.5.
    assert!((size.width - 800.0).abs() < f32::EPSILON);
    assert!((size.height - 1600.0).abs() < f32::EPSILON);
}
