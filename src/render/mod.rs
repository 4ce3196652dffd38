//! Atom XML output.
//!
//! [`render_feed`] writes a [`Feed`] and its extension elements to a string.
//! Namespace prefixes are declared on the first element that uses them;
//! extension elements are dispatched on their
//! [`ElementVariant`](crate::extension::ElementVariant), and an element
//! outside the known variants fails the whole pass with
//! [`RenderError::Marshal`]. No partial document is ever returned.

mod atom;
mod dispatch;
mod namespaces;
mod writer;

use std::io::Write as _;
use std::path::Path;

use thiserror::Error;

use crate::config::RenderConfig;
use crate::extension::AdditionalElement;
use crate::feed::Feed;

pub use dispatch::DispatchError;

use dispatch::ElementRenderer;
use writer::XmlWriter;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to marshal feed: {0}")]
    Marshal(#[from] DispatchError),

    #[error("XML write error: {0}")]
    Xml(String),

    #[error("Rendered XML is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Failed to write feed file: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;

/// Renders a feed with [`RenderConfig::default`].
pub fn render_feed(feed: &Feed) -> Result<String> {
    render_feed_with(feed, &RenderConfig::default())
}

pub fn render_feed_with(feed: &Feed, config: &RenderConfig) -> Result<String> {
    let mut writer = XmlWriter::new(config);
    if config.xml_declaration {
        writer.declaration()?;
    }
    atom::write_feed(&mut writer, feed)?;
    let xml = writer.finish()?;

    tracing::debug!(
        entries = feed.entries().len(),
        extensions = feed.extension_elements().len(),
        bytes = xml.len(),
        "Rendered feed"
    );
    Ok(xml)
}

/// Renders a single extension element as a standalone fragment.
///
/// The XML declaration is never written here, whatever the config says.
pub fn render_element(element: &dyn AdditionalElement, config: &RenderConfig) -> Result<String> {
    let mut writer = XmlWriter::new(config);
    ElementRenderer::new(&mut writer).render(element)?;
    writer.finish()
}

/// Renders a feed and writes it to `path` atomically.
///
/// The document goes to a temporary file next to `path`, is synced, then
/// renamed over the destination, so readers never see a partial file. Nothing
/// is written if rendering fails.
pub fn write_feed_file(feed: &Feed, config: &RenderConfig, path: &Path) -> Result<()> {
    use std::time::{SystemTime, UNIX_EPOCH};

    let content = render_feed_with(feed, config)?;

    let random_suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let temp_path = path.with_extension(format!("tmp.{:016x}", random_suffix));

    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&temp_path)?;

    let written = file
        .write_all(content.as_bytes())
        .and_then(|()| file.sync_all());
    drop(file);

    if let Err(e) = written.and_then(|()| std::fs::rename(&temp_path, path)) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(e.into());
    }

    tracing::info!(path = %path.display(), bytes = content.len(), "Wrote feed file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extension::{Namespace, SimpleElement};

    #[test]
    fn test_default_render_has_declaration() {
        let xml = render_feed(&Feed::builder().with_title("t").build()).unwrap();
        assert_eq!(
            xml,
            concat!(
                "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
                "<feed xmlns=\"http://www.w3.org/2005/Atom\">\n",
                "    <title>t</title>\n",
                "</feed>"
            )
        );
    }

    #[test]
    fn test_compact_render() {
        let xml = render_feed_with(
            &Feed::builder().with_title("t").build(),
            &RenderConfig::compact(),
        )
        .unwrap();
        assert_eq!(
            xml,
            r#"<feed xmlns="http://www.w3.org/2005/Atom"><title>t</title></feed>"#
        );
    }

    #[test]
    fn test_render_element_fragment() {
        let opensearch = Namespace::builder("http://a9.com/-/spec/opensearch/1.1/")
            .unwrap()
            .with_prefix("opensearch")
            .unwrap()
            .build();
        let element = SimpleElement::builder("totalResults", "2")
            .unwrap()
            .with_namespace(opensearch)
            .build();
        let xml = render_element(&element, &RenderConfig::default()).unwrap();
        assert_eq!(
            xml,
            r#"<opensearch:totalResults xmlns:opensearch="http://a9.com/-/spec/opensearch/1.1/">2</opensearch:totalResults>"#
        );
    }

    #[test]
    fn test_write_feed_file() {
        let dir = std::env::temp_dir().join("atomext_render_test_write");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("feed.xml");

        let feed = Feed::builder().with_id("urn:1").build();
        write_feed_file(&feed, &RenderConfig::compact(), &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            r#"<feed xmlns="http://www.w3.org/2005/Atom"><id>urn:1</id></feed>"#
        );
        let leftovers = std::fs::read_dir(&dir)
            .unwrap()
            .filter(|e| {
                e.as_ref()
                    .map(|e| e.file_name().to_string_lossy().contains("tmp."))
                    .unwrap_or(false)
            })
            .count();
        assert_eq!(leftovers, 0);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_write_feed_file_missing_dir_is_io_error() {
        let path = std::env::temp_dir()
            .join("atomext_render_no_such_dir")
            .join("feed.xml");
        let err = write_feed_file(&Feed::builder().build(), &RenderConfig::compact(), &path)
            .unwrap_err();
        assert!(matches!(err, RenderError::Io(_)));
    }
}
