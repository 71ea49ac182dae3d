use once_cell::sync::Lazy;
use regex::Regex;

use crate::mpd::classify::ClassifiedStream;

pub const AUDIO_CHANNEL_CONFIGURATION_SCHEME: &str =
    "urn:mpeg:dash:23003:3:audio_channel_configuration:2011";
pub const AUDIO_CHANNEL_COUNT: &str = "2";

static QUOTED_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""[^"]*"#).expect("quoted run pattern is valid"));

/// Shape-specific part of a representation.
#[derive(Debug, Clone, PartialEq)]
pub enum RepresentationKind {
    Video {
        width: Option<String>,
        height: Option<String>,
        frame_rate: Option<String>,
    },
    /// Always announces a stereo AudioChannelConfiguration.
    Audio,
}

/// One `<Representation>` element, with every attribute already rendered as text.
#[derive(Debug, Clone, PartialEq)]
pub struct Representation {
    pub id: String,
    pub codecs: String,
    pub bandwidth: String,
    pub kind: RepresentationKind,
    pub base_url: String,
    /// `SegmentBase@indexRange`
    pub index_range: String,
    /// `Initialization@range`
    pub init_range: String,
}

impl Representation {
    /// Attributes of the `<Representation>` element in output order. Absent video fields are
    /// left out rather than written empty.
    pub fn attributes(&self) -> Vec<(&'static str, &str)> {
        let mut attributes = vec![
            ("id", self.id.as_str()),
            ("codecs", self.codecs.as_str()),
            ("bandwidth", self.bandwidth.as_str()),
        ];

        if let RepresentationKind::Video {
            width,
            height,
            frame_rate,
        } = &self.kind
        {
            if let Some(width) = width {
                attributes.push(("width", width.as_str()));
            }
            if let Some(height) = height {
                attributes.push(("height", height.as_str()));
            }
            if let Some(frame_rate) = frame_rate {
                attributes.push(("frameRate", frame_rate.as_str()));
            }
            attributes.push(("maxPlayoutRate", "1"));
        }

        attributes
    }

    pub fn is_video(&self) -> bool {
        matches!(self.kind, RepresentationKind::Video { .. })
    }
}

/// Pulls the codec string out of a media type such as `video/mp4; codecs="avc1.42001E"`.
///
/// Takes the second space-separated token and returns the text after its first double quote, up
/// to the next one. Returns an empty string when there is no such token or no quote in it.
pub fn extract_codec(mime_type: &str) -> String {
    mime_type
        .split(' ')
        .nth(1)
        .and_then(|parameter| QUOTED_RUN.find(parameter))
        .map(|quoted| quoted.as_str()[1..].to_string())
        .unwrap_or_default()
}

pub fn emit_representation(stream: &ClassifiedStream<'_>) -> Representation {
    if stream.is_video() {
        emit_video_representation(stream)
    } else {
        emit_audio_representation(stream)
    }
}

pub fn emit_video_representation(stream: &ClassifiedStream<'_>) -> Representation {
    Representation {
        kind: RepresentationKind::Video {
            width: stream.width.map(|w| w.to_string()),
            height: stream.height.map(|h| h.to_string()),
            frame_rate: stream.fps.map(|fps| fps.to_string()),
        },
        ..common_fields(stream)
    }
}

pub fn emit_audio_representation(stream: &ClassifiedStream<'_>) -> Representation {
    Representation {
        kind: RepresentationKind::Audio,
        ..common_fields(stream)
    }
}

fn common_fields(stream: &ClassifiedStream<'_>) -> Representation {
    Representation {
        id: stream.itag.to_string(),
        codecs: stream
            .mime_type
            .as_deref()
            .map(extract_codec)
            .unwrap_or_default(),
        bandwidth: stream
            .bitrate
            .map(|b| b.to_string())
            .unwrap_or_else(|| "0".to_string()),
        kind: RepresentationKind::Audio,
        base_url: stream.url.clone(),
        index_range: stream.index_range.to_string(),
        init_range: stream.init_range.to_string(),
    }
}
