//! Media file storage for uploaded assets.
//!
//! A flat directory of files under generated names, with raster images
//! normalized (flattened, downscaled, re-encoded as JPEG) on the way in.

pub mod image;
pub mod store;

pub use store::AssetStore;
