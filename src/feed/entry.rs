use chrono::{DateTime, Utc};

use super::{Author, Category, Content, Link, Summary};
use crate::extension::{AdditionalElement, Attribute, AttributeSet, SharedElement};

/// An Atom `<entry>`.
///
/// Besides the standard fields an entry carries vendor attributes, written
/// on the `<entry>` tag itself, and extension elements written after the
/// standard children.
///
/// `<summary>` and `<content>` are written only when set. An entry built
/// without them has no `<content/>` placeholder.
#[derive(Debug, Clone)]
pub struct Entry {
    title: Option<String>,
    links: Vec<Link>,
    categories: Vec<Category>,
    author: Option<Author>,
    id: Option<String>,
    published: Option<DateTime<Utc>>,
    updated: Option<DateTime<Utc>>,
    summary: Option<Summary>,
    content: Option<Content>,
    attributes: AttributeSet,
    extension_elements: Vec<SharedElement>,
}

impl Entry {
    pub fn builder() -> EntryBuilder {
        EntryBuilder::default()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn author(&self) -> Option<&Author> {
        self.author.as_ref()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn published(&self) -> Option<&DateTime<Utc>> {
        self.published.as_ref()
    }

    pub fn updated(&self) -> Option<&DateTime<Utc>> {
        self.updated.as_ref()
    }

    pub fn summary(&self) -> Option<&Summary> {
        self.summary.as_ref()
    }

    pub fn content(&self) -> Option<&Content> {
        self.content.as_ref()
    }

    pub fn attributes(&self) -> &[Attribute] {
        self.attributes.as_slice()
    }

    pub fn extension_elements(&self) -> &[SharedElement] {
        &self.extension_elements
    }
}

#[derive(Debug, Clone, Default)]
pub struct EntryBuilder {
    title: Option<String>,
    links: Vec<Link>,
    categories: Vec<Category>,
    author: Option<Author>,
    id: Option<String>,
    published: Option<DateTime<Utc>>,
    updated: Option<DateTime<Utc>>,
    summary: Option<Summary>,
    content: Option<Content>,
    attributes: AttributeSet,
    extension_elements: Vec<SharedElement>,
}

impl EntryBuilder {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn add_link(mut self, link: Link) -> Self {
        self.links.push(link);
        self
    }

    pub fn add_category(mut self, category: Category) -> Self {
        self.categories.push(category);
        self
    }

    pub fn with_author(mut self, author: Author) -> Self {
        self.author = Some(author);
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_published_date(mut self, published: DateTime<Utc>) -> Self {
        self.published = Some(published);
        self
    }

    pub fn with_update_date(mut self, updated: DateTime<Utc>) -> Self {
        self.updated = Some(updated);
        self
    }

    pub fn with_summary(mut self, summary: Summary) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn with_content(mut self, content: Content) -> Self {
        self.content = Some(content);
        self
    }

    /// Adds an attribute written on the `<entry>` tag.
    pub fn add_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.insert(attribute);
        self
    }

    /// Appends an extension element after the standard entry children.
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

    pub fn build(self) -> Entry {
        Entry {
            title: self.title,
            links: self.links,
            categories: self.categories,
            author: self.author,
            id: self.id,
            published: self.published,
            updated: self.updated,
            summary: self.summary,
            content: self.content,
            attributes: self.attributes,
            extension_elements: self.extension_elements,
        }
    }
}
