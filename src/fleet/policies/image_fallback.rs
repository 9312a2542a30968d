use std::path::{Path, PathBuf};

/// Placeholder service used when a vehicle image asset is missing
const PLACEHOLDER_BASE_URL: &str = "https://via.placeholder.com/300x150";

/// ImageFallback policy resolving a summary image to something displayable
///
/// The image file name is looked up in the assets directory; when it is not
/// there, a placeholder URL carrying the vehicle name is used instead.
#[derive(Debug, Clone, Default)]
pub struct ImageFallback {
    assets_dir: Option<PathBuf>,
}

impl ImageFallback {
    pub fn new(assets_dir: Option<PathBuf>) -> Self {
        Self { assets_dir }
    }

    /// Resolves the image for `vehicle_name`; returns a local path or a placeholder URL
    pub fn resolve(&self, image: &str, vehicle_name: &str) -> String {
        match self.local_asset(image) {
            Some(path) => path.display().to_string(),
            None => Self::placeholder_url(vehicle_name),
        }
    }

    pub fn placeholder_url(vehicle_name: &str) -> String {
        format!(
            "{}?text={}",
            PLACEHOLDER_BASE_URL,
            urlencoding::encode(vehicle_name)
        )
    }

    fn local_asset(&self, image: &str) -> Option<PathBuf> {
        let dir = self.assets_dir.as_deref()?;
        if image.is_empty() || !is_plain_file_name(image) {
            return None;
        }
        let path = dir.join(image);
        path.is_file().then_some(path)
    }
}

/// Rejects anything that could escape the assets directory
fn is_plain_file_name(name: &str) -> bool {
    Path::new(name).file_name().and_then(|n| n.to_str()) == Some(name) && name != ".."
}
