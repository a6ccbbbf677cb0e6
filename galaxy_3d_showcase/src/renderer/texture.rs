/// Texture trait, texture descriptor and sampling options

use std::fmt;
use std::sync::Arc;

/// Pixel format of textures and render targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum TextureFormat {
    R8G8B8A8_SRGB,
    R8G8B8A8_UNORM,
    B8G8R8A8_SRGB,
    R16G16B16A16_SFLOAT,
    D24_UNORM_S8_UINT,
    D32_FLOAT,
}

impl TextureFormat {
    /// Size of one pixel in bytes
    pub fn bytes_per_pixel(&self) -> u64 {
        match self {
            TextureFormat::R16G16B16A16_SFLOAT => 8,
            _ => 4,
        }
    }

    /// Whether this is a depth (or depth/stencil) format
    pub fn is_depth(&self) -> bool {
        matches!(self, TextureFormat::D24_UNORM_S8_UINT | TextureFormat::D32_FLOAT)
    }
}

/// Texture coordinate wrapping mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapMode {
    #[default]
    ClampToEdge,
    Repeat,
    MirroredRepeat,
}

/// Where the texel data of a texture comes from
#[derive(Debug, Clone)]
pub enum TextureSource {
    /// Opaque asset path, resolved and streamed by the backend
    Path(String),
    /// Already-fetched encoded image bytes
    Encoded(Arc<[u8]>),
    /// Six already-fetched cube faces (+X, -X, +Y, -Y, +Z, -Z)
    CubeFaces(Vec<Arc<[u8]>>),
}

/// Descriptor for creating a texture
#[derive(Debug, Clone)]
pub struct TextureDesc {
    /// Debug label
    pub label: String,
    /// Texel data source
    pub source: TextureSource,
    /// Pixel format
    pub format: TextureFormat,
    /// Horizontal wrapping
    pub wrap_s: WrapMode,
    /// Vertical wrapping
    pub wrap_t: WrapMode,
}

impl TextureDesc {
    /// Texture streamed from an asset path
    pub fn from_path(path: &str) -> Self {
        Self {
            label: path.to_string(),
            source: TextureSource::Path(path.to_string()),
            format: TextureFormat::R8G8B8A8_SRGB,
            wrap_s: WrapMode::ClampToEdge,
            wrap_t: WrapMode::ClampToEdge,
        }
    }

    /// Cube texture built from six fetched faces
    pub fn cube(label: &str, faces: Vec<Arc<[u8]>>) -> Self {
        Self {
            label: label.to_string(),
            source: TextureSource::CubeFaces(faces),
            format: TextureFormat::R16G16B16A16_SFLOAT,
            wrap_s: WrapMode::ClampToEdge,
            wrap_t: WrapMode::ClampToEdge,
        }
    }

    /// Set both wrap modes
    pub fn with_wrap(mut self, wrap_s: WrapMode, wrap_t: WrapMode) -> Self {
        self.wrap_s = wrap_s;
        self.wrap_t = wrap_t;
        self
    }

    /// Whether this describes a cube texture
    pub fn is_cube(&self) -> bool {
        matches!(self.source, TextureSource::CubeFaces(_))
    }
}

/// Texture trait
///
/// A sampled GPU texture. Released when the last `Arc` is dropped.
pub trait Texture: Send + Sync + fmt::Debug {
    /// Backend-unique identifier
    fn id(&self) -> u64;

    /// Debug label
    fn label(&self) -> &str;

    /// Whether this is a cube texture
    fn is_cube(&self) -> bool;

    /// Wrap modes (s, t)
    fn wrap(&self) -> (WrapMode, WrapMode);
}

#[cfg(test)]
#[path = "texture_tests.rs"]
mod tests;
