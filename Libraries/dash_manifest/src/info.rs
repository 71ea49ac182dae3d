//! Upstream "video info" documents: the JSON shape metadata resolvers hand out, with a
//! `videoDetails` block and a flat `formats` list. Numbers in these documents are frequently
//! encoded as strings, so both forms are accepted.

use std::io::Read;

use serde::{Deserialize, Deserializer};

use crate::error::ManifestError;
use crate::mpd::{StreamDescriptor, VideoDescriptor};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoInfo {
    pub video_details: VideoDetails,
    /// Entries that don't fit [`StreamDescriptor`] are skipped, like any other unusable stream.
    #[serde(deserialize_with = "usable_formats")]
    pub formats: Vec<StreamDescriptor>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDetails {
    pub length_seconds: LengthSeconds,
}

/// Raw `lengthSeconds` value, validated on conversion into a [`VideoDescriptor`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LengthSeconds {
    Whole(u64),
    Fractional(f64),
    Text(String),
}

impl LengthSeconds {
    pub fn whole_seconds(&self) -> Result<u64, ManifestError> {
        match self {
            LengthSeconds::Whole(seconds) => Ok(*seconds),
            LengthSeconds::Fractional(seconds) => {
                Err(ManifestError::InvalidDuration(seconds.to_string()))
            }
            LengthSeconds::Text(text) => text
                .parse::<u64>()
                .map_err(|_| ManifestError::InvalidDuration(text.clone())),
        }
    }
}

impl TryFrom<VideoInfo> for VideoDescriptor {
    type Error = ManifestError;

    fn try_from(info: VideoInfo) -> Result<Self, Self::Error> {
        let duration_seconds = info.video_details.length_seconds.whole_seconds()?;
        Ok(VideoDescriptor::new(duration_seconds, info.formats))
    }
}

impl VideoDescriptor {
    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        let info: VideoInfo = serde_json::from_str(json)?;
        info.try_into()
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ManifestError> {
        let info: VideoInfo = serde_json::from_reader(reader)?;
        info.try_into()
    }
}

fn usable_formats<'de, D>(deserializer: D) -> Result<Vec<StreamDescriptor>, D::Error>
where
    D: Deserializer<'de>,
{
    let formats = Vec::<serde_json::Value>::deserialize(deserializer)?;
    Ok(formats
        .into_iter()
        .filter_map(|format| serde_json::from_value(format).ok())
        .collect())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(u64),
    Text(String),
}

/// Deserializes an unsigned integer given either as a JSON number or as a decimal string.
pub(crate) fn lenient_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(value) => Ok(value),
        NumberOrText::Text(text) => text.parse::<u64>().map_err(serde::de::Error::custom),
    }
}
