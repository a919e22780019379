use crate::core::ConfigProvider;
use crate::domain::model::{GalleryTile, Planet};

pub const DEFAULT_ASSET_BASE: &str = "static/images";
pub const DEFAULT_ASSET_EXTENSION: &str = "png";

/// Maps a planet name to the image the host page serves for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetResolver {
    base_path: String,
    extension: String,
}

impl AssetResolver {
    pub fn new(base_path: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            extension: extension.into(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.asset_base(), config.asset_extension())
    }

    pub fn image_path(&self, planet_name: &str) -> String {
        let file = format!("{}.{}", planet_name.to_lowercase(), self.extension);
        let base = self.base_path.trim_end_matches('/');
        if base.is_empty() {
            file
        } else {
            format!("{}/{}", base, file)
        }
    }

    pub fn tile_for(&self, planet: &Planet) -> GalleryTile {
        GalleryTile {
            planet_name: planet.name.clone(),
            image_src: self.image_path(&planet.name),
            alt: planet.name.clone(),
        }
    }
}

impl Default for AssetResolver {
    fn default() -> Self {
        Self::new(DEFAULT_ASSET_BASE, DEFAULT_ASSET_EXTENSION)
    }
}
