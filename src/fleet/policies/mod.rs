mod detail_projection;
mod image_fallback;
mod status_normalization;

pub use detail_projection::DetailProjection;
pub use image_fallback::ImageFallback;
pub use status_normalization::StatusNormalization;
