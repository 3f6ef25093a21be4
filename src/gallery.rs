use std::path::Path;

use crate::{
    foundation::error::{MasonryError, MasonryResult},
    surface::memory::{IntrinsicHeight, MemorySurface},
};

const VIDEO_EXTENSIONS: [&str; 2] = [".mp4", ".webm"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Declared media type of a gallery entry.
pub enum MediaKind {
    /// Still image.
    Image,
    /// Looping video.
    Video,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One entry of a gallery manifest.
///
/// Unknown fields (`preview`, `srcset`, ..) are accepted and ignored.
pub struct GalleryItem {
    /// Media source path or URL.
    pub src: String,
    /// Optional caption rendered below the media.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Declared media type; inferred from `src` when absent.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<MediaKind>,
    /// Intrinsic media width in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Intrinsic media height in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl GalleryItem {
    /// Declared video, or a source with a video extension.
    pub fn is_video(&self) -> bool {
        if self.kind == Some(MediaKind::Video) {
            return true;
        }
        let src = self.src.to_ascii_lowercase();
        VIDEO_EXTENSIONS.iter().any(|ext| src.ends_with(ext))
    }

    /// Non-blank caption, trimmed.
    pub fn caption_text(&self) -> Option<&str> {
        self.caption
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }

    /// `width / height`, when both dimensions are known.
    pub fn aspect_ratio(&self) -> Option<f64> {
        match (self.width, self.height) {
            (Some(w), Some(h)) if w > 0 && h > 0 => Some(f64::from(w) / f64::from(h)),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Presentation metrics used to turn manifest entries into rendered heights.
pub struct GalleryMetrics {
    /// Height of a caption line below the media.
    pub caption_height_px: f64,
    /// Aspect ratio assumed for entries without dimensions.
    pub fallback_aspect: f64,
}

impl Default for GalleryMetrics {
    fn default() -> Self {
        Self {
            caption_height_px: 24.0,
            fallback_aspect: 1.0,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
/// A gallery manifest: a JSON array of [`GalleryItem`].
pub struct Gallery {
    /// Entries in display order.
    pub items: Vec<GalleryItem>,
}

impl Gallery {
    /// Parse and validate a manifest.
    pub fn from_json_str(s: &str) -> MasonryResult<Self> {
        let gallery: Self =
            serde_json::from_str(s).map_err(|e| MasonryError::serde(e.to_string()))?;
        gallery.validate()?;
        Ok(gallery)
    }

    /// Read, parse and validate a manifest file.
    pub fn from_path(path: &Path) -> MasonryResult<Self> {
        let s = std::fs::read_to_string(path).map_err(|e| {
            MasonryError::Other(
                anyhow::Error::new(e).context(format!("read gallery '{}'", path.display())),
            )
        })?;
        Self::from_json_str(&s)
    }

    /// Every entry needs a source; declared dimensions must be non-zero.
    pub fn validate(&self) -> MasonryResult<()> {
        for (idx, item) in self.items.iter().enumerate() {
            if item.src.trim().is_empty() {
                return Err(MasonryError::validation(format!(
                    "gallery item {idx} has an empty src"
                )));
            }
            if item.width == Some(0) || item.height == Some(0) {
                return Err(MasonryError::validation(format!(
                    "gallery item '{}' has a zero dimension",
                    item.src
                )));
            }
        }
        Ok(())
    }

    /// Build a surface with one container of `container_width` holding one block per entry.
    pub fn build_surface(
        &self,
        container_key: &str,
        container_width: f64,
        metrics: &GalleryMetrics,
    ) -> MasonryResult<MemorySurface> {
        if !metrics.fallback_aspect.is_finite() || metrics.fallback_aspect <= 0.0 {
            return Err(MasonryError::validation(
                "fallback_aspect must be finite and > 0",
            ));
        }
        let mut surface = MemorySurface::new();
        let container = surface.add_container(container_key.trim_start_matches('#'), container_width);
        for item in &self.items {
            let extra_px = if item.caption_text().is_some() {
                metrics.caption_height_px
            } else {
                0.0
            };
            let intrinsic = IntrinsicHeight::Aspect {
                ratio: item.aspect_ratio().unwrap_or(metrics.fallback_aspect),
                extra_px,
            };
            surface.add_item(container, item.src.clone(), intrinsic)?;
        }
        Ok(surface)
    }
}

#[cfg(test)]
#[path = "../tests/unit/gallery.rs"]
mod tests;
