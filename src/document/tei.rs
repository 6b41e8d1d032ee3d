//! Plain-text extraction from TEI XML.
//!
//! By default only the `<text>` element is read; the `<teiHeader>` holds
//! catalogue metadata (titles, editors, licence statements) that would
//! otherwise be counted as if it were part of the work. Element names are
//! matched on their local part, so `tei:text` and `text` are the same.
//!
//! Element boundaries are turned into whitespace, and block-level elements
//! (`<l>`, `<p>`, `<div>`, ...) end a line, so verse keeps its line breaks.
//! `<lb break="no"/>` joins the word it splits.
//!
//! # Examples
//!
//! ```
//! use teiweight::document::tei::{TeiOptions, extract_text};
//!
//! let xml = r#"<TEI xmlns="http://www.tei-c.org/ns/1.0">
//!   <teiHeader><fileDesc><titleStmt><title>Aeneid</title></titleStmt></fileDesc></teiHeader>
//!   <text><body><l>Arma virumque cano</l><l>Troiae qui primus ab oris</l></body></text>
//! </TEI>"#;
//!
//! let text = extract_text(xml, &TeiOptions::default()).unwrap();
//! assert_eq!(text, "Arma virumque cano\nTroiae qui primus ab oris");
//! ```

use std::borrow::Cow;

use log::debug;
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TeiWeightError};

const TEXT_ELEMENT: &[u8] = b"text";
const HEADER_ELEMENT: &[u8] = b"teiHeader";

/// Elements whose end starts a new line in the extracted text.
const BLOCK_ELEMENTS: &[&[u8]] = &[
    b"ab", b"body", b"div", b"div1", b"div2", b"div3", b"head", b"item", b"l", b"lg", b"list",
    b"note", b"p", b"quote", b"sp", b"speaker", b"trailer",
];

/// Options controlling which parts of a TEI document are extracted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeiOptions {
    /// Also extract the `<teiHeader>` content.
    pub include_header: bool,

    /// Local names of elements skipped together with their descendants.
    pub exclude_elements: Vec<String>,
}

impl TeiOptions {
    /// Skip the given element names.
    pub fn excluding<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_elements.extend(names.into_iter().map(Into::into));
        self
    }

    fn is_excluded(&self, local_name: &[u8]) -> bool {
        self.exclude_elements
            .iter()
            .any(|name| name.as_bytes() == local_name)
    }
}

/// Where an open element sits relative to the parts being extracted.
#[derive(Clone, Copy, Debug)]
struct Frame {
    in_text: bool,
    in_header: bool,
    excluded: bool,
}

impl Frame {
    const ROOT: Frame = Frame {
        in_text: false,
        in_header: false,
        excluded: false,
    };
}

/// Accumulates character data with whitespace separators.
#[derive(Default)]
struct TextSink {
    buffer: String,
}

impl TextSink {
    fn push_str(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn trim_end(&mut self) {
        let len = self.buffer.trim_end().len();
        self.buffer.truncate(len);
    }

    fn separate(&mut self, separator: char) {
        match self.buffer.chars().last() {
            None => {}
            Some('\n') => {}
            Some(c) if c.is_whitespace() && separator == ' ' => {}
            Some(_) => self.buffer.push(separator),
        }
    }

    /// Collapse whitespace within lines and drop blank lines.
    fn finish(self) -> String {
        self.buffer
            .lines()
            .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Extract the plain text of a TEI document.
///
/// Returns the content of the `<text>` element, or of the whole document
/// (minus the header) when there is no `<text>` element. With
/// `include_header` set, everything is returned.
pub fn extract_text(xml: &str, options: &TeiOptions) -> Result<String> {
    let mut reader = Reader::from_str(xml);

    let mut stack: Vec<Frame> = Vec::new();
    let mut body = TextSink::default();
    let mut rest = TextSink::default();
    let mut saw_text_element = false;
    // Set by `<lb break="no"/>` until the next word character arrives.
    let mut joining = false;

    loop {
        let event = reader.read_event().map_err(|e| {
            TeiWeightError::xml(format!("{e} (at byte {})", reader.buffer_position()))
        })?;

        let parent = stack.last().copied().unwrap_or(Frame::ROOT);

        match event {
            Event::Start(start) => {
                let frame = open_frame(&start, parent, options);
                saw_text_element |= frame.in_text;
                if !joining {
                    boundary(&mut body, &mut rest, parent, frame, options, ' ');
                }
                stack.push(frame);
            }
            Event::End(end) => {
                let frame = stack.pop().ok_or_else(|| {
                    TeiWeightError::xml(format!(
                        "unexpected closing tag at byte {}",
                        reader.buffer_position()
                    ))
                })?;
                let outer = stack.last().copied().unwrap_or(Frame::ROOT);
                // Skipped content never breaks the surrounding line.
                let separator = if frame.excluded {
                    ' '
                } else if BLOCK_ELEMENTS.contains(&end.local_name().as_ref()) {
                    '\n'
                } else {
                    ' '
                };
                boundary(&mut body, &mut rest, outer, frame, options, separator);
                joining = false;
            }
            Event::Empty(empty) => {
                let frame = open_frame(&empty, parent, options);
                if joins_word(&empty) {
                    if wants_body(parent) {
                        body.trim_end();
                    }
                    if wants_rest(parent, options) {
                        rest.trim_end();
                    }
                    joining = true;
                } else {
                    boundary(&mut body, &mut rest, parent, frame, options, ' ');
                }
            }
            Event::Text(text) => {
                let content = text.unescape().unwrap_or_else(|e| {
                    debug!("keeping raw text after unescape failure: {e}");
                    Cow::Owned(String::from_utf8_lossy(&text).into_owned())
                });
                let content = if joining {
                    content.trim_start()
                } else {
                    &*content
                };
                if !content.is_empty() {
                    joining = false;
                    append(&mut body, &mut rest, parent, options, content);
                }
            }
            Event::CData(cdata) => {
                let content = String::from_utf8_lossy(&cdata).into_owned();
                joining = false;
                append(&mut body, &mut rest, parent, options, &content);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(TeiWeightError::xml(format!(
            "document ended with {} unclosed element(s)",
            stack.len()
        )));
    }

    if options.include_header || !saw_text_element {
        Ok(rest.finish())
    } else {
        Ok(body.finish())
    }
}

fn open_frame(start: &BytesStart<'_>, parent: Frame, options: &TeiOptions) -> Frame {
    let local_name = start.local_name();
    let name = local_name.as_ref();
    Frame {
        in_text: parent.in_text || name == TEXT_ELEMENT,
        in_header: parent.in_header || name == HEADER_ELEMENT,
        excluded: parent.excluded || options.is_excluded(name),
    }
}

/// `<lb break="no"/>` and `<pb break="no"/>` sit inside a word.
fn joins_word(empty: &BytesStart<'_>) -> bool {
    matches!(
        empty.try_get_attribute("break"),
        Ok(Some(attr)) if attr.value.as_ref() == b"no"
    )
}

fn wants_rest(frame: Frame, options: &TeiOptions) -> bool {
    !frame.excluded && (options.include_header || !frame.in_header)
}

fn wants_body(frame: Frame) -> bool {
    frame.in_text && !frame.in_header && !frame.excluded
}

fn append(body: &mut TextSink, rest: &mut TextSink, frame: Frame, options: &TeiOptions, text: &str) {
    if wants_body(frame) {
        body.push_str(text);
    }
    if wants_rest(frame, options) {
        rest.push_str(text);
    }
}

/// Separate at an element boundary, both inside the element and in the
/// text around it. An excluded element still splits its neighbours.
fn boundary(
    body: &mut TextSink,
    rest: &mut TextSink,
    outer: Frame,
    inner: Frame,
    options: &TeiOptions,
    separator: char,
) {
    separate(body, rest, inner, options, separator);
    separate(body, rest, outer, options, separator);
}

fn separate(
    body: &mut TextSink,
    rest: &mut TextSink,
    frame: Frame,
    options: &TeiOptions,
    separator: char,
) {
    if wants_body(frame) {
        body.separate(separator);
    }
    if wants_rest(frame, options) {
        rest.separate(separator);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AENEID: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<TEI xmlns="http://www.tei-c.org/ns/1.0">
  <teiHeader>
    <fileDesc><titleStmt><title>Aeneid</title><author>Vergil</author></titleStmt></fileDesc>
  </teiHeader>
  <text>
    <body>
      <div type="book" n="1">
        <l n="1">Arma virumque cano, Troiae qui primus ab oris</l>
        <l n="2">Italiam, fato profugus, Laviniaque venit</l>
        <note>profugus: "exiled"</note>
      </div>
    </body>
  </text>
</TEI>"#;

    #[test]
    fn test_extracts_body_only() {
        let text = extract_text(AENEID, &TeiOptions::default()).unwrap();

        assert!(text.starts_with("Arma virumque cano"));
        assert!(!text.contains("Vergil"));
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn test_include_header() {
        let options = TeiOptions {
            include_header: true,
            ..TeiOptions::default()
        };
        let text = extract_text(AENEID, &options).unwrap();

        assert!(text.contains("Vergil"));
        assert!(text.contains("Laviniaque"));
    }

    #[test]
    fn test_excluded_elements() {
        let options = TeiOptions::default().excluding(["note"]);
        let text = extract_text(AENEID, &options).unwrap();

        assert!(!text.contains("exiled"));
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_element_boundaries_separate_words() {
        let xml = "<TEI><text><body><l>arma</l><l>virum</l><p>cano<hi>Troiae</hi></p></body></text></TEI>";
        let text = extract_text(xml, &TeiOptions::default()).unwrap();

        assert_eq!(text, "arma\nvirum\ncano Troiae");
    }

    #[test]
    fn test_line_break_inside_word() {
        let xml = r#"<TEI><text><body><p>pro<lb break="no"/>fugus<lb/>venit</p></body></text></TEI>"#;
        let text = extract_text(xml, &TeiOptions::default()).unwrap();

        assert_eq!(text, "profugus venit");
    }

    #[test]
    fn test_line_break_inside_word_across_source_lines() {
        let xml = "<TEI><text><p>pro\n      <lb break=\"no\"/>fugus venit</p></text></TEI>";
        let text = extract_text(xml, &TeiOptions::default()).unwrap();

        assert_eq!(text, "profugus venit");
    }

    #[test]
    fn test_excluded_element_still_separates_words() {
        let options = TeiOptions::default().excluding(["note", "pb"]);

        let xml = "<TEI><text><p>cano<note>n</note>Troiae</p></text></TEI>";
        assert_eq!(extract_text(xml, &options).unwrap(), "cano Troiae");

        let xml = r#"<TEI><text><p>arma<pb n="2"/>virumque</p></text></TEI>"#;
        assert_eq!(extract_text(xml, &options).unwrap(), "arma virumque");
    }

    #[test]
    fn test_entities_are_unescaped() {
        let xml = "<TEI><text><p>Troiae &amp; Italiae</p></text></TEI>";
        let text = extract_text(xml, &TeiOptions::default()).unwrap();

        assert_eq!(text, "Troiae & Italiae");
    }

    #[test]
    fn test_prefixed_names() {
        let xml = r#"<tei:TEI xmlns:tei="http://www.tei-c.org/ns/1.0"><tei:teiHeader>meta</tei:teiHeader><tei:text>corpus</tei:text></tei:TEI>"#;
        let text = extract_text(xml, &TeiOptions::default()).unwrap();

        assert_eq!(text, "corpus");
    }

    #[test]
    fn test_without_text_element() {
        let xml = "<doc><teiHeader>meta</teiHeader><p>plain</p></doc>";
        let text = extract_text(xml, &TeiOptions::default()).unwrap();

        assert_eq!(text, "plain");
    }

    #[test]
    fn test_malformed_xml() {
        let result = extract_text("<TEI><text><p>open</text></TEI>", &TeiOptions::default());
        assert!(matches!(result, Err(TeiWeightError::Xml(_))));

        let result = extract_text("<TEI><text>", &TeiOptions::default());
        assert!(matches!(result, Err(TeiWeightError::Xml(_))));
    }
}
