use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Cursor;
use tracing::{debug, instrument};

use crate::error::ManifestError;
use crate::mpd::classify::classify;
use crate::mpd::redact::redact;
use crate::mpd::representation::{
    emit_representation, Representation, AUDIO_CHANNEL_CONFIGURATION_SCHEME, AUDIO_CHANNEL_COUNT,
};
use crate::mpd::{ManifestOptions, VideoDescriptor, DEFAULT_MIN_BUFFER_TIME};

pub const MPD_NAMESPACE: &str = "urn:mpeg:dash:schema:mpd:2011";
pub const MPD_PROFILE: &str = "urn:mpeg:dash:profile:full:2011";

/// One adaptation set: every representation sharing a base media type.
#[derive(Debug, Clone, PartialEq)]
pub struct AdaptationSetDef {
    pub id: usize,
    pub mime_type: String,
    pub representations: Vec<Representation>,
}

/// Builds a static, on-demand MPD for a [`VideoDescriptor`]
#[derive(Debug, Clone)]
pub struct ManifestBuilder<'a> {
    pub video: &'a VideoDescriptor,
    pub min_buffer_time: f64,
    pub replace_ips: bool,
}

impl<'a> ManifestBuilder<'a> {
    pub fn new(video: &'a VideoDescriptor) -> Self {
        Self {
            video,
            min_buffer_time: DEFAULT_MIN_BUFFER_TIME,
            replace_ips: false,
        }
    }

    pub fn with_options(video: &'a VideoDescriptor, opts: &ManifestOptions) -> Self {
        Self::new(video)
            .min_buffer_time(opts.min_buffer_time)
            .replace_ips(opts.replace_ips)
    }

    /**
     * Set the minimum buffer time for the MPD.
     * This is how much media, in seconds, a client should buffer before starting playback.
     */
    pub fn min_buffer_time(mut self, seconds: f64) -> Self {
        self.min_buffer_time = seconds;
        self
    }

    /**
     * Enable or disable client address scrubbing.
     * When enabled, `ip=<address>` markers in the serialized MPD are rewritten to `ip=0.0.0.0`.
     */
    pub fn replace_ips(mut self, replace: bool) -> Self {
        self.replace_ips = replace;
        self
    }

    /**
     * Group the usable streams into adaptation sets.
     * Set ids are assigned sequentially from 0 in the order the media types first appear.
     */
    pub fn adaptation_sets(&self) -> Vec<AdaptationSetDef> {
        classify(&self.video.streams)
            .into_iter()
            .enumerate()
            .map(|(id, (mime_type, streams))| AdaptationSetDef {
                id,
                mime_type: mime_type.to_string(),
                representations: streams.iter().map(emit_representation).collect(),
            })
            .collect()
    }

    /**
     * Build the MPD XML string.
     * The document starts with an XML declaration and holds a single Period.
     */
    #[instrument(skip_all, fields(duration = self.video.duration_seconds))]
    pub fn build_xml_string(&self) -> Result<String, ManifestError> {
        if !self.min_buffer_time.is_finite() || self.min_buffer_time < 0.0 {
            return Err(ManifestError::InvalidMinBufferTime(self.min_buffer_time));
        }

        let adaptation_sets = self.adaptation_sets();
        let mut writer = Writer::new(Cursor::new(Vec::new()));

        write_event(
            &mut writer,
            Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
        )?;

        let mut mpd = BytesStart::new("MPD");
        mpd.push_attribute(("xmlns", MPD_NAMESPACE));
        mpd.push_attribute(("profiles", MPD_PROFILE));
        mpd.push_attribute(("type", "static"));
        mpd.push_attribute((
            "minBufferTime",
            format!("PT{}S", self.min_buffer_time).as_str(),
        ));
        mpd.push_attribute((
            "mediaPresentationDuration",
            format!("PT{}S", self.video.duration_seconds).as_str(),
        ));
        write_event(&mut writer, Event::Start(mpd))?;

        write_event(&mut writer, Event::Start(BytesStart::new("Period")))?;

        for set in &adaptation_sets {
            write_adaptation_set(&mut writer, set)?;
        }

        write_event(&mut writer, Event::End(BytesEnd::new("Period")))?;
        write_event(&mut writer, Event::End(BytesEnd::new("MPD")))?;

        let xml = String::from_utf8(writer.into_inner().into_inner())?;

        debug!(
            adaptation_sets = adaptation_sets.len(),
            representations = adaptation_sets
                .iter()
                .map(|set| set.representations.len())
                .sum::<usize>(),
            replace_ips = self.replace_ips,
            "Built MPD"
        );

        if self.replace_ips {
            return Ok(redact(&xml).into_owned());
        }
        Ok(xml)
    }
}

/// Produces the MPD document for `video`.
pub fn generate_manifest(
    video: &VideoDescriptor,
    opts: &ManifestOptions,
) -> Result<String, ManifestError> {
    ManifestBuilder::with_options(video, opts).build_xml_string()
}

type XmlWriter = Writer<Cursor<Vec<u8>>>;

fn write_event(writer: &mut XmlWriter, event: Event<'_>) -> Result<(), ManifestError> {
    writer
        .write_event(event)
        .map_err(|e| ManifestError::Xml(e.to_string()))
}

fn write_adaptation_set(writer: &mut XmlWriter, set: &AdaptationSetDef) -> Result<(), ManifestError> {
    let mut adaptation = BytesStart::new("AdaptationSet");
    adaptation.push_attribute(("id", set.id.to_string().as_str()));
    adaptation.push_attribute(("mimeType", set.mime_type.as_str()));
    adaptation.push_attribute(("startWithSAP", "1"));
    adaptation.push_attribute(("subsegmentAlignment", "true"));
    write_event(writer, Event::Start(adaptation))?;

    for rep in &set.representations {
        write_representation(writer, rep)?;
    }

    write_event(writer, Event::End(BytesEnd::new("AdaptationSet")))
}

fn write_representation(writer: &mut XmlWriter, rep: &Representation) -> Result<(), ManifestError> {
    let mut rep_el = BytesStart::new("Representation");
    for attribute in rep.attributes() {
        rep_el.push_attribute(attribute);
    }
    write_event(writer, Event::Start(rep_el))?;

    if !rep.is_video() {
        let mut channels = BytesStart::new("AudioChannelConfiguration");
        channels.push_attribute(("schemeIdUri", AUDIO_CHANNEL_CONFIGURATION_SCHEME));
        channels.push_attribute(("value", AUDIO_CHANNEL_COUNT));
        write_event(writer, Event::Empty(channels))?;
    }

    write_event(writer, Event::Start(BytesStart::new("BaseURL")))?;
    write_event(writer, Event::Text(BytesText::new(&rep.base_url)))?;
    write_event(writer, Event::End(BytesEnd::new("BaseURL")))?;

    let mut segment_base = BytesStart::new("SegmentBase");
    segment_base.push_attribute(("indexRange", rep.index_range.as_str()));
    write_event(writer, Event::Start(segment_base))?;

    let mut initialization = BytesStart::new("Initialization");
    initialization.push_attribute(("range", rep.init_range.as_str()));
    write_event(writer, Event::Empty(initialization))?;

    write_event(writer, Event::End(BytesEnd::new("SegmentBase")))?;
    write_event(writer, Event::End(BytesEnd::new("Representation")))
}
