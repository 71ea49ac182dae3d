//! DASH manifest data structures (input stream descriptors and emitted representations).
//! Streams are addressed with a single media resource per representation, using byte ranges
//! (SegmentBase) for the initialization and index data.

pub mod builder;
pub mod classify;
pub mod redact;
pub mod representation;

use std::fmt;

use serde::Deserialize;

/// Default value of `MPD@minBufferTime`, in seconds.
pub const DEFAULT_MIN_BUFFER_TIME: f64 = 1.5;

/// Inclusive byte offsets into the media resource of a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ByteRange {
    #[serde(deserialize_with = "crate::info::lenient_u64")]
    pub start: u64,
    #[serde(deserialize_with = "crate::info::lenient_u64")]
    pub end: u64,
}

impl ByteRange {
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for ByteRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// One encoded stream offered by the upstream metadata source.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamDescriptor {
    /// Stable stream identifier, used verbatim as `Representation@id`.
    pub itag: u32,
    /// Full media type, e.g. `video/mp4; codecs="avc1.42001E"`.
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub has_audio: bool,
    #[serde(default)]
    pub has_video: bool,
    /// Average bitrate in bits per second.
    #[serde(default)]
    pub bitrate: Option<u64>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub fps: Option<f64>,
    #[serde(default)]
    pub init_range: Option<ByteRange>,
    #[serde(default)]
    pub index_range: Option<ByteRange>,
    #[serde(default)]
    pub url: String,
}

/// Everything the manifest is built from: the presentation length and the candidate streams.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoDescriptor {
    /// Presentation duration in whole seconds.
    pub duration_seconds: u64,
    pub streams: Vec<StreamDescriptor>,
}

impl VideoDescriptor {
    pub fn new(duration_seconds: u64, streams: Vec<StreamDescriptor>) -> Self {
        Self {
            duration_seconds,
            streams,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManifestOptions {
    /// Value of `MPD@minBufferTime`, in seconds.
    pub min_buffer_time: f64,
    /// Scrub `ip=<address>` markers out of the serialized manifest.
    pub replace_ips: bool,
}

impl Default for ManifestOptions {
    fn default() -> Self {
        Self {
            min_buffer_time: DEFAULT_MIN_BUFFER_TIME,
            replace_ips: false,
        }
    }
}
