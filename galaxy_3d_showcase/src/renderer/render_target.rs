/// RenderTarget trait - an offscreen surface a pass can draw into

use std::fmt;
use bitflags::bitflags;
use crate::renderer::TextureFormat;

bitflags! {
    /// How a render target is going to be used
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TargetUsage: u32 {
        /// Written as a color attachment
        const COLOR = 1 << 0;
        /// Written as a depth attachment
        const DEPTH = 1 << 1;
        /// Read by a later pass through a sampler
        const SAMPLED = 1 << 2;
    }
}

/// Descriptor for creating a render target
#[derive(Debug, Clone)]
pub struct RenderTargetDesc {
    /// Debug label
    pub label: String,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Pixel format
    pub format: TextureFormat,
    /// Usage flags
    pub usage: TargetUsage,
}

impl RenderTargetDesc {
    /// Sampled HDR color target
    pub fn color(label: &str, width: u32, height: u32) -> Self {
        Self {
            label: label.to_string(),
            width,
            height,
            format: TextureFormat::R16G16B16A16_SFLOAT,
            usage: TargetUsage::COLOR | TargetUsage::SAMPLED,
        }
    }

    /// Sampled depth target
    pub fn depth(label: &str, width: u32, height: u32) -> Self {
        Self {
            label: label.to_string(),
            width,
            height,
            format: TextureFormat::D32_FLOAT,
            usage: TargetUsage::DEPTH | TargetUsage::SAMPLED,
        }
    }

    /// GPU memory footprint in bytes
    pub fn byte_size(&self) -> u64 {
        self.width as u64 * self.height as u64 * self.format.bytes_per_pixel()
    }
}

/// Render target trait
///
/// Represents an offscreen surface. Released when the last `Arc` is dropped.
pub trait RenderTarget: Send + Sync + fmt::Debug {
    /// Backend-unique identifier
    fn id(&self) -> u64;

    /// Debug label
    fn label(&self) -> &str;

    /// Width of the render target in pixels
    fn width(&self) -> u32;

    /// Height of the render target in pixels
    fn height(&self) -> u32;

    /// Pixel format of the render target
    fn format(&self) -> TextureFormat;

    /// Usage flags the target was created with
    fn usage(&self) -> TargetUsage;
}

/// Where a draw writes its output
#[derive(Clone, Copy)]
pub enum PassTarget<'a> {
    /// The display framebuffer
    Screen,
    /// An offscreen render target
    Offscreen(&'a dyn RenderTarget),
}

impl fmt::Debug for PassTarget<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PassTarget::Screen => write!(f, "screen"),
            PassTarget::Offscreen(target) => write!(f, "#{} '{}'", target.id(), target.label()),
        }
    }
}
