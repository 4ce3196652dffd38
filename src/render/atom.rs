use super::dispatch::ElementRenderer;
use super::namespaces::XmlAttr;
use super::writer::XmlWriter;
use super::RenderError;
use crate::extension::Namespace;
use crate::feed::{format_date, Author, Category, Content, Entry, Feed, Link, Summary};

/// Writes the `<feed>` element and everything below it.
pub(crate) fn write_feed(writer: &mut XmlWriter, feed: &Feed) -> Result<(), RenderError> {
    let atom = Namespace::atom();
    let atom = Some(&atom);

    writer.start(atom, "feed", &[])?;

    if let Some(title) = feed.title() {
        writer.text_element(atom, "title", &[], title)?;
    }
    if let Some(subtitle) = feed.subtitle() {
        writer.text_element(atom, "subtitle", &[], subtitle)?;
    }
    for link in feed.links() {
        write_link(writer, atom, link)?;
    }
    if let Some(id) = feed.id() {
        writer.text_element(atom, "id", &[], id)?;
    }
    if let Some(author) = feed.author() {
        write_author(writer, atom, author)?;
    }
    if let Some(updated) = feed.updated() {
        writer.text_element(atom, "updated", &[], &format_date(updated))?;
    }

    ElementRenderer::new(writer).render_all(feed.extension_elements())?;

    for entry in feed.entries() {
        write_entry(writer, atom, entry)?;
    }

    writer.end()
}

fn write_entry(
    writer: &mut XmlWriter,
    atom: Option<&Namespace>,
    entry: &Entry,
) -> Result<(), RenderError> {
    let attributes: Vec<XmlAttr<'_>> = entry.attributes().iter().map(XmlAttr::from).collect();
    writer.start(atom, "entry", &attributes)?;

    if let Some(title) = entry.title() {
        writer.text_element(atom, "title", &[], title)?;
    }
    for link in entry.links() {
        write_link(writer, atom, link)?;
    }
    for category in entry.categories() {
        write_category(writer, atom, category)?;
    }
    if let Some(author) = entry.author() {
        write_author(writer, atom, author)?;
    }
    if let Some(id) = entry.id() {
        writer.text_element(atom, "id", &[], id)?;
    }
    if let Some(published) = entry.published() {
        writer.text_element(atom, "published", &[], &format_date(published))?;
    }
    if let Some(updated) = entry.updated() {
        writer.text_element(atom, "updated", &[], &format_date(updated))?;
    }
    if let Some(summary) = entry.summary() {
        write_summary(writer, atom, summary)?;
    }
    if let Some(content) = entry.content() {
        write_content(writer, atom, content)?;
    }

    ElementRenderer::new(writer).render_all(entry.extension_elements())?;

    writer.end()
}

fn write_link(
    writer: &mut XmlWriter,
    atom: Option<&Namespace>,
    link: &Link,
) -> Result<(), RenderError> {
    let length = link.length().map(|length| length.to_string());

    let mut attributes = vec![XmlAttr::plain("href", link.href())];
    if let Some(rel) = link.rel() {
        attributes.push(XmlAttr::plain("rel", rel.as_str()));
    }
    if let Some(media_type) = link.media_type() {
        attributes.push(XmlAttr::plain("type", media_type));
    }
    if let Some(hreflang) = link.hreflang() {
        attributes.push(XmlAttr::plain("hreflang", hreflang));
    }
    if let Some(title) = link.title() {
        attributes.push(XmlAttr::plain("title", title));
    }
    if let Some(length) = length.as_deref() {
        attributes.push(XmlAttr::plain("length", length));
    }

    writer.empty(atom, "link", &attributes)
}

fn write_category(
    writer: &mut XmlWriter,
    atom: Option<&Namespace>,
    category: &Category,
) -> Result<(), RenderError> {
    let mut attributes = vec![XmlAttr::plain("term", category.term())];
    if let Some(scheme) = category.scheme() {
        attributes.push(XmlAttr::plain("scheme", scheme));
    }
    if let Some(label) = category.label() {
        attributes.push(XmlAttr::plain("label", label));
    }
    writer.empty(atom, "category", &attributes)
}

fn write_author(
    writer: &mut XmlWriter,
    atom: Option<&Namespace>,
    author: &Author,
) -> Result<(), RenderError> {
    writer.start(atom, "author", &[])?;
    writer.text_element(atom, "name", &[], author.name())?;
    if let Some(uri) = author.uri() {
        writer.text_element(atom, "uri", &[], uri)?;
    }
    if let Some(email) = author.email() {
        writer.text_element(atom, "email", &[], email)?;
    }
    writer.end()
}

fn write_summary(
    writer: &mut XmlWriter,
    atom: Option<&Namespace>,
    summary: &Summary,
) -> Result<(), RenderError> {
    let attributes: Vec<XmlAttr<'_>> = summary
        .media_type()
        .map(|media_type| XmlAttr::plain("type", media_type))
        .into_iter()
        .collect();
    match summary.value() {
        Some(value) => writer.text_element(atom, "summary", &attributes, value),
        None => writer.empty(atom, "summary", &attributes),
    }
}

fn write_content(
    writer: &mut XmlWriter,
    atom: Option<&Namespace>,
    content: &Content,
) -> Result<(), RenderError> {
    let mut attributes = Vec::new();
    if let Some(media_type) = content.media_type() {
        attributes.push(XmlAttr::plain("type", media_type));
    }
    if let Some(src) = content.src() {
        attributes.push(XmlAttr::plain("src", src));
    }
    match content.value() {
        Some(value) => writer.text_element(atom, "content", &attributes, value),
        None => writer.empty(atom, "content", &attributes),
    }
}
