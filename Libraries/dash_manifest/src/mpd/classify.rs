use std::ops::Deref;

use indexmap::IndexMap;

use crate::mpd::{ByteRange, StreamDescriptor};

/// A stream that passed classification, with the fields the emitters rely on already resolved.
#[derive(Debug, Clone, Copy)]
pub struct ClassifiedStream<'a> {
    pub stream: &'a StreamDescriptor,
    /// Media type without parameters, e.g. `audio/webm`.
    pub mime_base: &'a str,
    pub init_range: ByteRange,
    pub index_range: ByteRange,
}

impl<'a> ClassifiedStream<'a> {
    /// Returns `None` for muxed audio+video streams and for streams without byte ranges or a
    /// media type. Such streams can't be described by a SegmentBase representation.
    pub fn new(stream: &'a StreamDescriptor) -> Option<Self> {
        if stream.has_audio && stream.has_video {
            return None;
        }
        let init_range = stream.init_range?;
        let index_range = stream.index_range?;
        let mime_type = stream.mime_type.as_deref()?;

        Some(Self {
            stream,
            mime_base: mime_base(mime_type),
            init_range,
            index_range,
        })
    }

    pub fn is_video(&self) -> bool {
        self.mime_base.starts_with("video/")
    }
}

impl Deref for ClassifiedStream<'_> {
    type Target = StreamDescriptor;

    fn deref(&self) -> &Self::Target {
        self.stream
    }
}

/// Everything before the first `;` of a media type.
pub fn mime_base(mime_type: &str) -> &str {
    mime_type.split(';').next().unwrap_or(mime_type)
}

/// Groups usable streams by base media type.
///
/// Groups appear in the order their media type is first seen and keep the input order of their
/// streams. Unusable streams are dropped, never reported.
pub fn classify(streams: &[StreamDescriptor]) -> IndexMap<&str, Vec<ClassifiedStream<'_>>> {
    let mut groups: IndexMap<&str, Vec<ClassifiedStream<'_>>> = IndexMap::new();
    for classified in streams.iter().filter_map(ClassifiedStream::new) {
        groups.entry(classified.mime_base).or_default().push(classified);
    }
    groups
}
