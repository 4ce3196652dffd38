//! Atom document model: feeds, entries and their standard constructs.
//!
//! - **Document**: [`Feed`] and its builder, the root of a rendering pass
//! - **Entries**: [`Entry`], with vendor attributes and extension elements
//! - **Constructs**: [`Link`], [`Author`], [`Category`], [`Summary`], [`Content`]
//! - **Dates**: [`format_date`] for RFC 3339 timestamps in UTC
//!
//! Vendor-specific data hangs off feeds and entries as
//! [`crate::extension`] elements.
//!
//! # Example
//!
//! ```
//! use atomext::feed::{Author, Entry, Feed, Link, LinkRel};
//! use chrono::DateTime;
//!
//! let feed = Feed::builder()
//!     .with_id("urn:uuid:60a76c80-d399-11d9-b91C-0003939e0af6")
//!     .with_title("My standard Atom 1.0 feed")
//!     .with_author(Author::builder("VIDAL")?.build())
//!     .add_link(Link::builder("http://example.org/")?.with_rel(LinkRel::SelfLink).build())
//!     .with_update_date(DateTime::from_timestamp(510_278_400, 0).unwrap())
//!     .add_entry(Entry::builder().with_title("Atom is not what you think").build())
//!     .build();
//! assert_eq!(feed.entries().len(), 1);
//! # Ok::<(), atomext::extension::BuildError>(())
//! ```

mod date;
mod document;
mod entry;
mod link;
mod metadata;

pub use date::{format_date, DATE_FORMAT};
pub use document::{Feed, FeedBuilder};
pub use entry::{Entry, EntryBuilder};
pub use link::{Link, LinkBuilder, LinkRel};
pub use metadata::{
    Author, AuthorBuilder, Category, CategoryBuilder, Content, ContentBuilder, Summary,
    SummaryBuilder,
};
