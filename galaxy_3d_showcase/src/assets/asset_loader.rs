/// Asset requests, completions and the loader trait.

use std::sync::Arc;
use crate::error::Result;
use crate::scene::AnimationClip;

/// What is being loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// Model file (glTF, OBJ, ...) decoded by the renderer backend
    Model,
    /// Single image
    Texture,
    /// Six images in +X, -X, +Y, -Y, +Z, -Z order
    CubeTexture,
}

/// A load request: one path, or six for a cube texture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRequest {
    pub kind: AssetKind,
    pub paths: Vec<String>,
}

impl AssetRequest {
    pub fn model(path: &str) -> Self {
        Self { kind: AssetKind::Model, paths: vec![path.to_string()] }
    }

    pub fn texture(path: &str) -> Self {
        Self { kind: AssetKind::Texture, paths: vec![path.to_string()] }
    }

    /// Cube texture from six files in one directory
    pub fn cube(directory: &str, faces: [&str; 6]) -> Self {
        let directory = directory.trim_end_matches('/');
        Self {
            kind: AssetKind::CubeTexture,
            paths: faces.iter().map(|face| format!("{}/{}", directory, face)).collect(),
        }
    }

    /// Short description for logs
    pub fn label(&self) -> &str {
        self.paths.first().map(String::as_str).unwrap_or("<empty>")
    }
}

/// Identifies one request of one example driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket {
    /// Unique per request
    pub id: u64,
    /// Driver that issued the request
    pub owner: u64,
}

/// What an example keeps to recognise its completion later
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadHandle {
    pub ticket: LoadTicket,
    pub kind: AssetKind,
    pub label: String,
}

/// Bytes fetched for a request
#[derive(Debug, Clone)]
pub struct LoadedAsset {
    pub kind: AssetKind,
    pub paths: Vec<String>,
    /// One entry per requested path
    pub data: Vec<Arc<[u8]>>,
    /// Animation clips found in a model, if the source can read them
    pub animations: Vec<AnimationClip>,
}

impl LoadedAsset {
    /// Total fetched size in bytes
    pub fn byte_size(&self) -> usize {
        self.data.iter().map(|bytes| bytes.len()).sum()
    }
}

/// A finished request, successful or not
#[derive(Debug, Clone)]
pub struct AssetCompletion {
    pub ticket: LoadTicket,
    pub request: AssetRequest,
    pub result: Result<LoadedAsset>,
}

/// Asynchronous loader
pub trait AssetLoader: Send {
    /// Start a load; its completion is returned by a later `poll`
    fn request(&mut self, ticket: LoadTicket, request: AssetRequest);

    /// Completions that arrived since the last poll
    fn poll(&mut self) -> Vec<AssetCompletion>;

    /// Requests whose completion has not been polled yet
    fn in_flight(&self) -> usize;
}
