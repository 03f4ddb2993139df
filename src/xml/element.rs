//! Structured XML element builder
//!
//! Renderers assemble an [`XmlElement`] tree and serialize it once with
//! [`XmlElement::to_xml`] through a `quick_xml` writer. Attribute values are
//! escaped by the writer; pre-rendered fragments are inserted verbatim as
//! [`XmlNode::Raw`].

use std::io;

use quick_xml::Writer;
use quick_xml::events::{BytesCData, BytesEnd, BytesStart, BytesText, Event};
use serde::{Deserialize, Serialize};

/// Serialization layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Break lines after block start tags and after every closing tag
    pub line_breaks: bool,

    /// Spaces of indentation per nesting level (only with line breaks)
    pub indent: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            line_breaks: true,
            indent: 0,
        }
    }
}

impl RenderOptions {
    /// Single-line output with no whitespace between tags
    #[must_use]
    pub const fn compact() -> Self {
        Self {
            line_breaks: false,
            indent: 0,
        }
    }
}

/// A child of an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    /// Nested element
    Element(XmlElement),
    /// Text wrapped in a CDATA section
    CData(String),
    /// Pre-rendered XML, inserted as-is
    Raw(String),
}

/// An element with ordered attributes and children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlNode>,
}

impl XmlElement {
    /// Create an empty element
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.attributes.push((name.into(), value.to_string()));
        self
    }

    /// Add a child element
    #[must_use]
    pub fn child(mut self, child: Self) -> Self {
        self.push(child);
        self
    }

    /// Add a child element if there is one
    #[must_use]
    pub fn optional_child(mut self, child: Option<Self>) -> Self {
        if let Some(child) = child {
            self.push(child);
        }
        self
    }

    /// Add several child elements
    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children.extend(children.into_iter().map(XmlNode::Element));
        self
    }

    /// Add a CDATA text child
    #[must_use]
    pub fn cdata(mut self, text: impl Into<String>) -> Self {
        self.children.push(XmlNode::CData(text.into()));
        self
    }

    /// Add a pre-rendered fragment
    #[must_use]
    pub fn raw(mut self, fragment: impl Into<String>) -> Self {
        self.children.push(XmlNode::Raw(fragment.into()));
        self
    }

    /// Append a child element in place
    pub fn push(&mut self, child: Self) {
        self.children.push(XmlNode::Element(child));
    }

    /// Serialize this element and its subtree
    pub fn to_xml(&self, options: &RenderOptions) -> io::Result<String> {
        let mut writer = Writer::new(Vec::new());
        self.write(&mut writer, options, 0)?;
        String::from_utf8(writer.into_inner()).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    fn write(&self, writer: &mut Writer<Vec<u8>>, options: &RenderOptions, depth: usize) -> io::Result<()> {
        indent(writer, options, depth);
        let mut start = BytesStart::new(self.name.as_str());
        for (name, value) in &self.attributes {
            start.push_attribute((name.as_str(), value.as_str()));
        }

        if self.children.is_empty() {
            writer.write_event(Event::Empty(start))?;
            line_break(writer, options);
            return Ok(());
        }
        writer.write_event(Event::Start(start))?;

        let block = self.children.iter().any(|n| !matches!(n, XmlNode::CData(_)));
        if block {
            line_break(writer, options);
        }
        for node in &self.children {
            match node {
                XmlNode::Element(e) => e.write(writer, options, depth + 1)?,
                XmlNode::CData(text) => write_cdata(writer, text)?,
                XmlNode::Raw(fragment) => {
                    writer.write_event(Event::Text(BytesText::from_escaped(fragment.as_str())))?;
                },
            }
        }
        if block {
            if !writer.get_ref().ends_with(b"\n") {
                line_break(writer, options);
            }
            indent(writer, options, depth);
        }

        writer.write_event(Event::End(BytesEnd::new(self.name.as_str())))?;
        line_break(writer, options);
        Ok(())
    }
}

/// Write `text` as CDATA, splitting any literal `]]>` across two sections
fn write_cdata(writer: &mut Writer<Vec<u8>>, text: &str) -> io::Result<()> {
    let mut sections = text.split("]]>").peekable();
    let mut prefix = "";
    while let Some(section) = sections.next() {
        let suffix = if sections.peek().is_some() { "]]" } else { "" };
        writer.write_event(Event::CData(BytesCData::new(format!("{prefix}{section}{suffix}"))))?;
        prefix = ">";
    }
    Ok(())
}

fn line_break(writer: &mut Writer<Vec<u8>>, options: &RenderOptions) {
    if options.line_breaks {
        writer.get_mut().push(b'\n');
    }
}

fn indent(writer: &mut Writer<Vec<u8>>, options: &RenderOptions, depth: usize) {
    if options.line_breaks && options.indent > 0 {
        writer.get_mut().extend(std::iter::repeat_n(b' ', options.indent * depth));
    }
}
