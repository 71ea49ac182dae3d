#![allow(dead_code)]

use dash_manifest::{ByteRange, StreamDescriptor};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Minimal element tree, enough to assert on the structure of a generated MPD.
#[derive(Debug, Clone, Default)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Element>,
    pub text: String,
}

impl Element {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn attribute_names(&self) -> Vec<&str> {
        self.attributes.iter().map(|(key, _)| key.as_str()).collect()
    }

    pub fn child_names(&self) -> Vec<&str> {
        self.children.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    pub fn child<'a>(&'a self, name: &'a str) -> &'a Element {
        self.children_named(name)
            .next()
            .unwrap_or_else(|| panic!("<{}> has no <{}> child", self.name, name))
    }
}

pub struct Document {
    /// `(version, encoding)` of the XML declaration.
    pub declaration: Option<(String, Option<String>)>,
    pub root: Element,
}

impl Document {
    pub fn adaptation_sets(&self) -> Vec<&Element> {
        self.root.child("Period").children_named("AdaptationSet").collect()
    }

    pub fn representations(&self) -> Vec<&Element> {
        self.adaptation_sets()
            .into_iter()
            .flat_map(|set| set.children_named("Representation"))
            .collect()
    }

    pub fn representation(&self, id: &str) -> Option<&Element> {
        self.representations()
            .into_iter()
            .find(|rep| rep.attr("id") == Some(id))
    }
}

fn open(start: &BytesStart<'_>) -> Element {
    Element {
        name: String::from_utf8(start.name().as_ref().to_vec()).unwrap(),
        attributes: start
            .attributes()
            .map(|attr| {
                let attr = attr.unwrap();
                (
                    String::from_utf8(attr.key.as_ref().to_vec()).unwrap(),
                    attr.unescape_value().unwrap().into_owned(),
                )
            })
            .collect(),
        ..Default::default()
    }
}

pub fn parse(xml: &str) -> Document {
    let mut reader = Reader::from_str(xml);
    let mut declaration = None;
    let mut stack: Vec<Element> = Vec::new();
    let mut root = None;

    loop {
        match reader.read_event().unwrap() {
            Event::Decl(decl) => {
                let version = String::from_utf8(decl.version().unwrap().to_vec()).unwrap();
                let encoding = decl
                    .encoding()
                    .map(|encoding| String::from_utf8(encoding.unwrap().to_vec()).unwrap());
                declaration = Some((version, encoding));
            }
            Event::Start(start) => stack.push(open(&start)),
            Event::Empty(start) => {
                let element = open(&start);
                match stack.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None => root = Some(element),
                }
            }
            Event::Text(text) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&text.unescape().unwrap());
                }
            }
            Event::End(_) => {
                let element = stack.pop().expect("unbalanced end tag");
                match stack.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None => root = Some(element),
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    assert!(stack.is_empty(), "unclosed elements: {:?}", stack);
    Document {
        declaration,
        root: root.expect("document has no root element"),
    }
}

pub fn video_stream(itag: u32, mime_type: &str) -> StreamDescriptor {
    StreamDescriptor {
        itag,
        mime_type: Some(mime_type.to_string()),
        has_video: true,
        bitrate: Some(1_000_000),
        width: Some(1280),
        height: Some(720),
        fps: Some(30.0),
        init_range: Some(ByteRange::new(0, 700)),
        index_range: Some(ByteRange::new(701, 2000)),
        url: format!("https://media.example/videoplayback?itag={itag}&ip=203.0.113.7"),
        ..Default::default()
    }
}

pub fn audio_stream(itag: u32, mime_type: &str) -> StreamDescriptor {
    StreamDescriptor {
        itag,
        mime_type: Some(mime_type.to_string()),
        has_audio: true,
        bitrate: Some(130_000),
        init_range: Some(ByteRange::new(0, 600)),
        index_range: Some(ByteRange::new(601, 1200)),
        url: format!("https://media.example/videoplayback?itag={itag}&ip=203.0.113.7"),
        ..Default::default()
    }
}
