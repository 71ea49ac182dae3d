pub mod args;
pub mod error;
pub mod info;
pub mod mpd;

pub use error::ManifestError;
pub use mpd::builder::{generate_manifest, ManifestBuilder};
pub use mpd::{ByteRange, ManifestOptions, StreamDescriptor, VideoDescriptor};
