//! Asset loading module
//!
//! Loads are requested synchronously and complete later: the loader hands
//! back `AssetCompletion`s carrying the ticket of the request, and the
//! host routes each one to the example that asked for it. There is no
//! cancellation; stale completions are filtered by the example driver.

mod asset_loader;
mod asset_source;
mod threaded_loader;

pub use asset_loader::{
    AssetCompletion, AssetKind, AssetLoader, AssetRequest, LoadHandle, LoadTicket, LoadedAsset,
};
pub use asset_source::{AssetSource, FsAssetSource, MemoryAssetSource};
pub use threaded_loader::ThreadedAssetLoader;
