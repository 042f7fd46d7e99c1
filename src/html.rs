//! HTML fragment writing helpers.
//!
//! Macros emit markup through `quick_xml::Writer` so that text and attribute
//! values are always escaped and output is byte-for-byte reproducible.

use std::io::{Cursor, Result};

use quick_xml::{
    Writer,
    events::{BytesEnd, BytesStart, BytesText, Event},
};

pub type HtmlWriter = Writer<Cursor<Vec<u8>>>;

/// Create a writer over an empty buffer.
#[inline]
pub fn writer() -> HtmlWriter {
    Writer::new(Cursor::new(Vec::new()))
}

/// Consume the writer and return the markup.
pub fn finish(writer: HtmlWriter) -> std::result::Result<String, std::string::FromUtf8Error> {
    String::from_utf8(writer.into_inner().into_inner())
}

/// Write an opening tag with attributes: `<tag attr1="val1" ...>`.
#[inline]
pub fn start(writer: &mut HtmlWriter, tag: &str, attrs: &[(&str, &str)]) -> Result<()> {
    let mut elem = BytesStart::new(tag);
    for (k, v) in attrs {
        elem.push_attribute((*k, *v));
    }
    writer.write_event(Event::Start(elem))
}

/// Write a closing tag: `</tag>`.
#[inline]
pub fn end(writer: &mut HtmlWriter, tag: &str) -> Result<()> {
    writer.write_event(Event::End(BytesEnd::new(tag)))
}

/// Write escaped text.
#[inline]
pub fn text(writer: &mut HtmlWriter, text: &str) -> Result<()> {
    writer.write_event(Event::Text(BytesText::new(text)))
}

/// Write a text element: `<tag>text</tag>`.
#[inline]
pub fn write_text_element(writer: &mut HtmlWriter, tag: &str, content: &str) -> Result<()> {
    start(writer, tag, &[])?;
    text(writer, content)?;
    end(writer, tag)
}

/// Write a link: `<a href="href" ...>label</a>`.
pub fn write_link(
    writer: &mut HtmlWriter,
    href: &str,
    label: &str,
    extra_attrs: &[(&str, &str)],
) -> Result<()> {
    let mut attrs = Vec::with_capacity(extra_attrs.len() + 1);
    attrs.push(("href", href));
    attrs.extend_from_slice(extra_attrs);
    start(writer, "a", &attrs)?;
    text(writer, label)?;
    end(writer, "a")
}
