use chrono::{DateTime, Utc};

use super::{Author, Entry, Link};
use crate::extension::{AdditionalElement, SharedElement};

/// An Atom `<feed>` document.
///
/// Fields are optional: the crate assembles and writes feeds, it does not
/// check them against the Atom schema.
#[derive(Debug, Clone)]
pub struct Feed {
    id: Option<String>,
    title: Option<String>,
    subtitle: Option<String>,
    links: Vec<Link>,
    author: Option<Author>,
    updated: Option<DateTime<Utc>>,
    extension_elements: Vec<SharedElement>,
    entries: Vec<Entry>,
}

impl Feed {
    pub fn builder() -> FeedBuilder {
        FeedBuilder::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn author(&self) -> Option<&Author> {
        self.author.as_ref()
    }

    pub fn updated(&self) -> Option<&DateTime<Utc>> {
        self.updated.as_ref()
    }

    pub fn extension_elements(&self) -> &[SharedElement] {
        &self.extension_elements
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

#[derive(Debug, Clone, Default)]
pub struct FeedBuilder {
    id: Option<String>,
    title: Option<String>,
    subtitle: Option<String>,
    links: Vec<Link>,
    author: Option<Author>,
    updated: Option<DateTime<Utc>>,
    extension_elements: Vec<SharedElement>,
    entries: Vec<Entry>,
}

impl FeedBuilder {
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn add_link(mut self, link: Link) -> Self {
        self.links.push(link);
        self
    }

    pub fn with_author(mut self, author: Author) -> Self {
        self.author = Some(author);
        self
    }

    pub fn with_update_date(mut self, updated: DateTime<Utc>) -> Self {
        self.updated = Some(updated);
        self
    }

    /// Appends a vendor element, written after `<updated>` and before the
    /// entries.
    pub fn add_extension_element<E>(self, element: E) -> Self
    where
        E: AdditionalElement + 'static,
    {
        self.add_shared_extension_element(element.into_shared())
    }

    pub fn add_shared_extension_element(mut self, element: SharedElement) -> Self {
        self.extension_elements.push(element);
        self
    }

    pub fn add_entry(mut self, entry: Entry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn build(self) -> Feed {
        Feed {
            id: self.id,
            title: self.title,
            subtitle: self.subtitle,
            links: self.links,
            author: self.author,
            updated: self.updated,
            extension_elements: self.extension_elements,
            entries: self.entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extension::SimpleElement;

    #[test]
    fn test_feed_builder() {
        let updated = DateTime::from_timestamp(1_329_350_400, 0).unwrap();
        let feed = Feed::builder()
            .with_id("Heidi")
            .with_title("Search Products - Query :sintrom")
            .with_update_date(updated)
            .add_extension_element(SimpleElement::builder("itemsPerPage", "25").unwrap().build())
            .add_extension_element(SimpleElement::builder("totalResults", "2").unwrap().build())
            .add_entry(Entry::builder().with_id("vidal://product/15070").build())
            .build();

        assert_eq!(feed.id(), Some("Heidi"));
        assert_eq!(feed.updated(), Some(&updated));
        let tags: Vec<_> = feed
            .extension_elements()
            .iter()
            .map(|e| e.tag_name())
            .collect();
        assert_eq!(tags, ["itemsPerPage", "totalResults"]);
        assert_eq!(feed.entries().len(), 1);
        assert!(feed.subtitle().is_none());
    }
}
