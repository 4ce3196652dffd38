use std::io::Cursor;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::namespaces::{NamespaceScopes, OpenTag, XmlAttr};
use super::RenderError;
use crate::config::RenderConfig;
use crate::extension::Namespace;

/// Event writer over an in-memory buffer that resolves namespace
/// declarations as elements are opened.
pub(crate) struct XmlWriter {
    writer: Writer<Cursor<Vec<u8>>>,
    scopes: NamespaceScopes,
    open: Vec<String>,
}

impl XmlWriter {
    pub(crate) fn new(config: &RenderConfig) -> Self {
        let buffer = Cursor::new(Vec::new());
        let writer = if config.formatted_output {
            Writer::new_with_indent(buffer, b' ', config.indent_size)
        } else {
            Writer::new(buffer)
        };
        Self {
            writer,
            scopes: NamespaceScopes::new(),
            open: Vec::new(),
        }
    }

    pub(crate) fn declaration(&mut self) -> Result<(), RenderError> {
        self.write(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
    }

    pub(crate) fn start(
        &mut self,
        namespace: Option<&Namespace>,
        tag: &str,
        attributes: &[XmlAttr<'_>],
    ) -> Result<(), RenderError> {
        let tag = self.scopes.open(namespace, tag, attributes);
        self.write(Event::Start(start_tag(&tag)))?;
        self.open.push(tag.name);
        Ok(())
    }

    pub(crate) fn end(&mut self) -> Result<(), RenderError> {
        let name = self
            .open
            .pop()
            .ok_or_else(|| RenderError::Xml("end tag without matching start".to_string()))?;
        self.scopes.close();
        self.write(Event::End(BytesEnd::new(name)))
    }

    /// Self-closing element.
    pub(crate) fn empty(
        &mut self,
        namespace: Option<&Namespace>,
        tag: &str,
        attributes: &[XmlAttr<'_>],
    ) -> Result<(), RenderError> {
        let tag = self.scopes.open(namespace, tag, attributes);
        self.scopes.close();
        self.write(Event::Empty(start_tag(&tag)))
    }

    pub(crate) fn text(&mut self, text: &str) -> Result<(), RenderError> {
        self.write(Event::Text(BytesText::new(text)))
    }

    /// Start tag, escaped text, end tag. Empty text still yields both tags.
    pub(crate) fn text_element(
        &mut self,
        namespace: Option<&Namespace>,
        tag: &str,
        attributes: &[XmlAttr<'_>],
        text: &str,
    ) -> Result<(), RenderError> {
        self.start(namespace, tag, attributes)?;
        self.text(text)?;
        self.end()
    }

    pub(crate) fn finish(self) -> Result<String, RenderError> {
        if let Some(name) = self.open.last() {
            return Err(RenderError::Xml(format!("element <{name}> was never closed")));
        }
        let bytes = self.writer.into_inner().into_inner();
        Ok(String::from_utf8(bytes)?)
    }

    fn write(&mut self, event: Event<'_>) -> Result<(), RenderError> {
        self.writer
            .write_event(event)
            .map_err(|e| RenderError::Xml(e.to_string()))
    }
}

fn start_tag(tag: &OpenTag) -> BytesStart<'_> {
    let mut start = BytesStart::new(tag.name.as_str());
    for (key, value) in &tag.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }
    start
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compact() -> XmlWriter {
        XmlWriter::new(&RenderConfig::compact())
    }

    #[test]
    fn test_text_element_escapes() {
        let mut writer = compact();
        writer
            .text_element(None, "title", &[], "Fish & Chips <deluxe>")
            .unwrap();
        assert_eq!(
            writer.finish().unwrap(),
            "<title>Fish &amp; Chips &lt;deluxe&gt;</title>"
        );
    }

    #[test]
    fn test_empty_text_keeps_both_tags() {
        let mut writer = compact();
        writer.text_element(None, "id", &[], "").unwrap();
        assert_eq!(writer.finish().unwrap(), "<id></id>");
    }

    #[test]
    fn test_empty_element_with_attributes() {
        let mut writer = compact();
        writer
            .empty(
                None,
                "link",
                &[XmlAttr::plain("href", "/a"), XmlAttr::plain("rel", "self")],
            )
            .unwrap();
        assert_eq!(writer.finish().unwrap(), r#"<link href="/a" rel="self"/>"#);
    }

    #[test]
    fn test_indented_nesting() {
        let mut writer = XmlWriter::new(&RenderConfig {
            formatted_output: true,
            indent_size: 2,
            xml_declaration: false,
        });
        writer.start(Some(&Namespace::atom()), "feed", &[]).unwrap();
        writer
            .text_element(Some(&Namespace::atom()), "title", &[], "t")
            .unwrap();
        writer.end().unwrap();
        assert_eq!(
            writer.finish().unwrap(),
            "<feed xmlns=\"http://www.w3.org/2005/Atom\">\n  <title>t</title>\n</feed>"
        );
    }

    #[test]
    fn test_unbalanced_end_is_error() {
        let mut writer = compact();
        assert!(matches!(writer.end(), Err(RenderError::Xml(_))));
    }

    #[test]
    fn test_unclosed_element_is_error() {
        let mut writer = compact();
        writer.start(None, "feed", &[]).unwrap();
        let err = writer.finish().unwrap_err();
        assert!(err.to_string().contains("<feed>"));
    }
}
