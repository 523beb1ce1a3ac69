use crate::backend::BackendClient;
use crate::gallery::{AssetLoader, GalleryRecord, Scene, SceneSettings, compose_scene};

/// The public 3D gallery page.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryView {
    pub records: Vec<GalleryRecord>,
    pub scene: Scene,
}

impl GalleryView {
    /// Fetches the public feed and composes the room. A failed fetch still
    /// yields the empty room.
    pub async fn load(client: &BackendClient, loader: &dyn AssetLoader, settings: &SceneSettings) -> Self {
        let records: Vec<GalleryRecord> = match client.feed().await {
            Ok(designs) => designs.iter().map(GalleryRecord::from).collect(),
            Err(err) => {
                log::error!("Error fetching feed: {}", err);
                Vec::new()
            }
        };
        let scene = compose_scene(&records, loader, settings);
        Self { records, scene }
    }
}
