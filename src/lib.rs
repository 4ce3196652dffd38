//! Build Atom 1.0 feeds carrying vendor extension elements and write them as XML.
//!
//! - [`feed`] - the standard document model: feeds, entries, links, authors
//! - [`extension`] - namespaced extension elements (simple, structured, any)
//! - [`render`] - serialization to Atom XML
//! - [`config`] - output options, optionally loaded from TOML
//!
//! # Example
//!
//! ```
//! use atomext::extension::{Namespace, SimpleElement};
//! use atomext::feed::Feed;
//! use atomext::{render_feed_with, RenderConfig};
//!
//! let opensearch = Namespace::builder("http://a9.com/-/spec/opensearch/1.1/")?
//!     .with_prefix("opensearch")?
//!     .build();
//!
//! let feed = Feed::builder()
//!     .with_title("Search Products")
//!     .add_extension_element(
//!         SimpleElement::builder("totalResults", "2")?
//!             .with_namespace(opensearch)
//!             .build(),
//!     )
//!     .build();
//!
//! let xml = render_feed_with(&feed, &RenderConfig::compact())?;
//! assert!(xml.contains(r#"<opensearch:totalResults xmlns:opensearch="http://a9.com/-/spec/opensearch/1.1/">2</opensearch:totalResults>"#));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod extension;
pub mod feed;
pub mod render;

pub use config::{ConfigError, RenderConfig};
pub use extension::{AdditionalElement, BuildError, SharedElement};
pub use render::{render_feed, render_feed_with, write_feed_file, DispatchError, RenderError};
