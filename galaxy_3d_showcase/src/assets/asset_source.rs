/// Asset sources - where a loader fetches bytes from.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use rustc_hash::FxHashMap;
use crate::engine_err;
use crate::error::Result;
use crate::assets::{AssetRequest, LoadedAsset};
use crate::scene::AnimationClip;

/// Blocking fetch of every path of a request
pub trait AssetSource: Send + Sync {
    fn fetch(&self, request: &AssetRequest) -> Result<LoadedAsset>;
}

/// Reads files relative to an asset root directory
#[derive(Debug, Clone)]
pub struct FsAssetSource {
    root: PathBuf,
}

impl FsAssetSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetSource for FsAssetSource {
    fn fetch(&self, request: &AssetRequest) -> Result<LoadedAsset> {
        let mut data = Vec::with_capacity(request.paths.len());
        for path in &request.paths {
            let full_path = self.root.join(path);
            let bytes = std::fs::read(&full_path).map_err(|e| {
                engine_err!("galaxy3d::FsAssetSource", AssetLoad,
                    "Failed to read '{}': {}", full_path.display(), e)
            })?;
            data.push(Arc::from(bytes));
        }
        Ok(LoadedAsset {
            kind: request.kind,
            paths: request.paths.clone(),
            data,
            animations: Vec::new(),
        })
    }
}

/// In-memory files, for embedded assets and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryAssetSource {
    files: FxHashMap<String, Arc<[u8]>>,
    animations: FxHashMap<String, Vec<AnimationClip>>,
}

impl MemoryAssetSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: &str, bytes: &[u8]) {
        self.files.insert(path.to_string(), Arc::from(bytes));
    }

    /// Attach animation clips to a model path
    pub fn insert_animations(&mut self, path: &str, clips: Vec<AnimationClip>) {
        self.animations.insert(path.to_string(), clips);
    }
}

impl AssetSource for MemoryAssetSource {
    fn fetch(&self, request: &AssetRequest) -> Result<LoadedAsset> {
        let mut data = Vec::with_capacity(request.paths.len());
        for path in &request.paths {
            match self.files.get(path) {
                Some(bytes) => data.push(bytes.clone()),
                None => {
                    return Err(engine_err!("galaxy3d::MemoryAssetSource", AssetLoad,
                        "No such asset '{}'", path));
                }
            }
        }
        let animations = request
            .paths
            .first()
            .and_then(|path| self.animations.get(path))
            .cloned()
            .unwrap_or_default();
        Ok(LoadedAsset {
            kind: request.kind,
            paths: request.paths.clone(),
            data,
            animations,
        })
    }
}
