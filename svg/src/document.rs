use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use log::{debug, info};
use quick_xml::events::{BytesDecl, BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::reader::NsReader;
use quick_xml::writer::Writer;

use crate::errors::{SVGError, SVGResult};
use crate::transform::{decide_fill, Decision};

pub const SVG_NAMESPACE: &[u8] = b"http://www.w3.org/2000/svg";

const RECT: &[u8] = b"rect";
const FILL: &[u8] = b"fill";
const FILL_OPACITY: &[u8] = b"fill-opacity";
const ID: &[u8] = b"id";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rect {
    pub id: Option<String>,
    pub fill: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    pub rects: usize,
    pub changed: usize,
    pub unparseable: usize,
}

impl Report {
    fn record(&mut self, decision: &Decision) {
        self.rects += 1;
        match decision {
            Decision::Unparseable => self.unparseable += 1,
            Decision::Unchanged(_) => {}
            Decision::Transparent(_, _) => self.changed += 1,
        }
    }
}

/// An SVG document held in memory.
#[derive(Debug)]
pub struct Document {
    content: Vec<u8>,
}

impl Document {
    pub fn open<R: Read>(mut input: R) -> SVGResult<Self> {
        let mut content = Vec::new();
        input.read_to_end(&mut content)?;
        Ok(Document { content })
    }

    pub fn new_from_file<P: AsRef<Path>>(path: P) -> SVGResult<Self> {
        let file = File::open(path)?;
        Document::open(file)
    }

    /// All SVG `rect` elements in document order.
    pub fn rects(&self) -> SVGResult<Vec<Rect>> {
        let mut reader = NsReader::from_reader(self.content.as_slice());
        let mut buf = Vec::new();
        let mut rects = Vec::new();
        loop {
            match reader.read_resolved_event_into(&mut buf)? {
                (_, Event::Eof) => break,
                (ns, Event::Start(e)) | (ns, Event::Empty(e)) if is_svg_rect(&ns, &e) => {
                    rects.push(Rect {
                        id: attribute(&e, ID)?,
                        fill: attribute(&e, FILL)?,
                    });
                }
                _ => {}
            }
            buf.clear();
        }
        Ok(rects)
    }

    /// Write the document to `output`, adding `fill-opacity` to every
    /// near-white rect. Nothing reaches `output` unless the whole document
    /// was transformed.
    pub fn make_transparent<W: Write>(&self, threshold: i32, mut output: W) -> SVGResult<Report> {
        let mut reader = NsReader::from_reader(self.content.as_slice());
        let mut writer = Writer::new(Vec::with_capacity(self.content.len()));
        let mut buf = Vec::new();
        let mut report = Report::default();
        let mut has_root = false;
        let mut first = true;

        loop {
            let (ns, event) = reader.read_resolved_event_into(&mut buf)?;
            if first {
                first = false;
                if !matches!(event, Event::Decl(_)) {
                    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
                }
            }
            match event {
                Event::Eof => break,
                Event::Start(e) => {
                    has_root = true;
                    if is_svg_rect(&ns, &e) {
                        let e = rewrite_rect(e, threshold, &mut report)?;
                        writer.write_event(Event::Start(e))?;
                    } else {
                        writer.write_event(Event::Start(e))?;
                    }
                }
                Event::Empty(e) => {
                    has_root = true;
                    if is_svg_rect(&ns, &e) {
                        let e = rewrite_rect(e, threshold, &mut report)?;
                        writer.write_event(Event::Empty(e))?;
                    } else {
                        writer.write_event(Event::Empty(e))?;
                    }
                }
                e => writer.write_event(e)?,
            }
            buf.clear();
        }

        if !has_root {
            return Err(SVGError::InvalidDocument("no root element".to_string()));
        }
        output.write_all(&writer.into_inner())?;
        info!(
            "rects:{} changed:{} unparseable:{} threshold:{}",
            report.rects, report.changed, report.unparseable, threshold
        );
        Ok(report)
    }
}

fn is_svg_rect(ns: &ResolveResult, e: &BytesStart) -> bool {
    match ns {
        ResolveResult::Bound(Namespace(uri)) => *uri == SVG_NAMESPACE && e.local_name().as_ref() == RECT,
        _ => false,
    }
}

fn attribute(e: &BytesStart, key: &[u8]) -> SVGResult<Option<String>> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == key {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

fn rewrite_rect<'a>(
    e: BytesStart<'a>,
    threshold: i32,
    report: &mut Report,
) -> SVGResult<BytesStart<'a>> {
    let fill = attribute(&e, FILL)?;
    let decision = decide_fill(fill.as_deref(), threshold)?;
    debug!("rect fill:{:?} {}", fill, decision);
    report.record(&decision);
    match decision.opacity() {
        Some(opacity) => with_fill_opacity(&e, &opacity.to_string()),
        None => Ok(e),
    }
}

// An existing fill-opacity keeps its position; otherwise it goes last.
fn with_fill_opacity(e: &BytesStart, value: &str) -> SVGResult<BytesStart<'static>> {
    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    let mut rect = BytesStart::new(name);
    let mut replaced = false;
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == FILL_OPACITY {
            if !replaced {
                rect.push_attribute(("fill-opacity", value));
                replaced = true;
            }
        } else {
            rect.push_attribute(attr);
        }
    }
    if !replaced {
        rect.push_attribute(("fill-opacity", value));
    }
    Ok(rect)
}
