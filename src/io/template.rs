use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

use quick_xml::events::{BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use tracing::debug;

use crate::error::{Error, Result};

const TEXT_TAG: &[u8] = b"text";
const SPAN_TAG: &[u8] = b"tspan";
const ID_ATTR: &[u8] = b"id";

/// Where the frame number goes in the serialized event stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameNumberSlot {
    /// Replace the text (or CDATA) event at this index.
    Replace(usize),
    /// Insert a text event right after the start tag at this index.
    InsertAfter(usize),
    /// Expand the self-closing element at this index into start, text and end.
    Expand(usize),
}

/// An SVG document parsed once into owned XML events, with the frame-number
/// text node located up front.
///
/// The events are never mutated; each frame is produced by serializing them
/// with the slot substituted, so the template stays pristine between frames.
#[derive(Debug, Clone)]
pub struct SvgTemplate {
    source: PathBuf,
    events: Vec<Event<'static>>,
    slot: FrameNumberSlot,
}

impl SvgTemplate {
    /// Parse the template at `path` and locate the `<text id="{frameno_id}">` element.
    pub fn load(path: &Path, frameno_id: &str) -> Result<Self> {
        debug!("Reading template {:?}", path);
        let reader = Reader::from_file(path)?;
        Self::from_reader(reader, frameno_id, path)
    }

    /// Same as [`SvgTemplate::load`] for an in-memory document.
    pub fn parse(xml: &str, frameno_id: &str) -> Result<Self> {
        Self::from_reader(Reader::from_str(xml), frameno_id, Path::new("<memory>"))
    }

    fn from_reader<R: BufRead>(
        mut reader: Reader<R>,
        frameno_id: &str,
        source: &Path,
    ) -> Result<Self> {
        let mut buf = Vec::new();
        let mut events = Vec::new();
        let mut open = 0usize;
        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Eof => break,
                event => {
                    match &event {
                        Event::Start(_) => open += 1,
                        Event::End(_) => open = open.saturating_sub(1),
                        _ => {}
                    }
                    events.push(event.into_owned());
                }
            }
            buf.clear();
        }
        if open != 0 {
            return Err(Error::UnclosedElements {
                path: source.to_path_buf(),
                open,
            });
        }

        let slot = locate_frame_number(&events, frameno_id)?.ok_or_else(|| {
            Error::FrameNumberNotFound {
                id: frameno_id.to_string(),
                path: source.to_path_buf(),
            }
        })?;
        debug!("Frame number slot in {:?}: {:?}", source, slot);

        Ok(Self {
            source: source.to_path_buf(),
            events,
            slot,
        })
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn slot(&self) -> FrameNumberSlot {
        self.slot
    }

    /// Current text of the frame-number node; empty when the node has no text yet.
    pub fn frame_number_text(&self) -> Result<String> {
        match self.slot {
            FrameNumberSlot::Replace(at) => match &self.events[at] {
                Event::Text(text) => Ok(text.unescape()?.into_owned()),
                Event::CData(data) => Ok(String::from_utf8_lossy(data).into_owned()),
                _ => Ok(String::new()),
            },
            FrameNumberSlot::InsertAfter(_) | FrameNumberSlot::Expand(_) => Ok(String::new()),
        }
    }

    /// Serialize the whole document with the frame-number node showing `frame`.
    pub fn write_frame<W: Write>(&self, frame: u64, out: W) -> Result<()> {
        let number = frame.to_string();
        let mut writer = Writer::new(out);
        for (i, event) in self.events.iter().enumerate() {
            match (self.slot, event) {
                (FrameNumberSlot::Replace(at), _) if at == i => {
                    writer.write_event(Event::Text(BytesText::new(&number)))?;
                }
                (FrameNumberSlot::InsertAfter(at), _) if at == i => {
                    writer.write_event(event)?;
                    writer.write_event(Event::Text(BytesText::new(&number)))?;
                }
                (FrameNumberSlot::Expand(at), Event::Empty(start)) if at == i => {
                    writer.write_event(Event::Start(start.clone()))?;
                    writer.write_event(Event::Text(BytesText::new(&number)))?;
                    writer.write_event(Event::End(start.to_end()))?;
                }
                _ => writer.write_event(event)?,
            }
        }
        Ok(())
    }

    pub fn render_frame(&self, frame: u64) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        self.write_frame(frame, &mut out)?;
        Ok(out)
    }

    /// Write frame `frame` to `path`, replacing any existing file.
    pub fn write_frame_file(&self, frame: u64, path: &Path) -> Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        self.write_frame(frame, &mut out)?;
        out.flush()?;
        Ok(())
    }
}

fn is_frame_number_element(start: &BytesStart<'_>, frameno_id: &str) -> Result<bool> {
    if start.local_name().as_ref() != TEXT_TAG {
        return Ok(false);
    }
    for attr in start.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == ID_ATTR {
            if attr.value.as_ref() == frameno_id.as_bytes() {
                return Ok(true);
            }
            // ids with unknown entities cannot match and must not fail the load
            return Ok(attr
                .unescape_value()
                .is_ok_and(|value| value == frameno_id));
        }
    }
    Ok(false)
}

/// First `<text>` element in document order whose `id` matches.
fn locate_frame_number(
    events: &[Event<'static>],
    frameno_id: &str,
) -> Result<Option<FrameNumberSlot>> {
    for (i, event) in events.iter().enumerate() {
        match event {
            Event::Start(start) if is_frame_number_element(start, frameno_id)? => {
                return Ok(Some(slot_inside(events, i)));
            }
            Event::Empty(start) if is_frame_number_element(start, frameno_id)? => {
                return Ok(Some(FrameNumberSlot::Expand(i)));
            }
            _ => {}
        }
    }
    Ok(None)
}

/// A nested `<tspan>` holds the value when present; otherwise the element's
/// own first text child does.
fn slot_inside(events: &[Event<'static>], start: usize) -> FrameNumberSlot {
    let end = closing_index(events, start);
    let span = (start + 1..end).find(|&i| match &events[i] {
        Event::Start(e) | Event::Empty(e) => e.local_name().as_ref() == SPAN_TAG,
        _ => false,
    });

    let holder = match span {
        Some(i) if matches!(events[i], Event::Empty(_)) => return FrameNumberSlot::Expand(i),
        Some(i) => i,
        None => start,
    };
    first_text_child(events, holder)
        .map_or(FrameNumberSlot::InsertAfter(holder), FrameNumberSlot::Replace)
}

/// Index of the `End` event closing the element opened at `start`, or the
/// stream length for an unclosed element.
fn closing_index(events: &[Event<'static>], start: usize) -> usize {
    let mut depth = 0usize;
    for (i, event) in events.iter().enumerate().skip(start + 1) {
        match event {
            Event::Start(_) => depth += 1,
            Event::End(_) if depth == 0 => return i,
            Event::End(_) => depth -= 1,
            _ => {}
        }
    }
    events.len()
}

fn first_text_child(events: &[Event<'static>], start: usize) -> Option<usize> {
    let end = closing_index(events, start);
    let mut depth = 0usize;
    for i in start + 1..end {
        match &events[i] {
            Event::Start(_) => depth += 1,
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::Text(_) | Event::CData(_) if depth == 0 => return Some(i),
            _ => {}
        }
    }
    None
}
