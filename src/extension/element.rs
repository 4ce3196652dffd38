use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use indexmap::IndexSet;

use super::{AnyElement, Attribute, Namespace, SimpleElement, StructuredElement};

/// Reference-counted extension element, as stored in parent containers.
pub type SharedElement = Arc<dyn AdditionalElement>;

/// The closed set of extension variants the renderer knows how to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementVariant<'a> {
    Simple(&'a SimpleElement),
    Structured(&'a StructuredElement),
    Any(&'a AnyElement),
}

/// Contract shared by every vendor extension element.
///
/// Feeds, entries and container elements hold extensions through this trait.
/// Rendering does not look at the accessors below: it matches on
/// [`variant`](Self::variant), and anything reporting `None` is rejected with
/// its [`Display`](fmt::Display) output as the diagnostic.
pub trait AdditionalElement: fmt::Debug + fmt::Display + Send + Sync {
    fn namespace(&self) -> Option<&Namespace>;

    fn tag_name(&self) -> &str;

    /// Attributes in insertion order, unique by name and namespace.
    fn attributes(&self) -> &[Attribute];

    /// Text content; empty when the element has none.
    fn value(&self) -> &str;

    /// Identity of this value in the set of renderable variants.
    ///
    /// Types outside this crate should keep the default. An override that
    /// returns a variant is rendered as the element that variant borrows, so
    /// this value's own accessors are not consulted.
    fn variant(&self) -> Option<ElementVariant<'_>> {
        None
    }

    /// Moves the element behind an [`Arc`] so it can be shared as a child.
    fn into_shared(self) -> SharedElement
    where
        Self: Sized + 'static,
    {
        Arc::new(self)
    }
}

// Known variants compare by value. Anything else is only equal to itself.
impl PartialEq for dyn AdditionalElement {
    fn eq(&self, other: &Self) -> bool {
        match (self.variant(), other.variant()) {
            (Some(left), Some(right)) => left == right,
            _ => std::ptr::addr_eq(self as *const Self, other as *const Self),
        }
    }
}

impl Eq for dyn AdditionalElement {}

impl Hash for dyn AdditionalElement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.variant() {
            Some(variant) => variant.hash(state),
            None => (self as *const Self).cast::<()>().hash(state),
        }
    }
}

/// `prefix:tag` when the namespace carries a prefix, `tag` otherwise.
pub(crate) fn qualified_name<'a>(namespace: Option<&Namespace>, tag: &'a str) -> Cow<'a, str> {
    match namespace.and_then(Namespace::prefix) {
        Some(prefix) => Cow::Owned(format!("{prefix}:{tag}")),
        None => Cow::Borrowed(tag),
    }
}

/// Insertion-ordered attributes, at most one per name and namespace.
///
/// Adding an attribute whose name and namespace are already present replaces
/// the stored value in place; the original position is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AttributeSet {
    entries: Vec<Attribute>,
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the attribute took a new slot.
    pub fn insert(&mut self, attribute: Attribute) -> bool {
        match self.entries.iter_mut().find(|e| e.same_key(&attribute)) {
            Some(existing) => {
                tracing::trace!(attribute = %attribute, "Attribute already present, keeping position");
                *existing = attribute;
                false
            }
            None => {
                self.entries.push(attribute);
                true
            }
        }
    }

    pub fn as_slice(&self) -> &[Attribute] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Attribute> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Extend<Attribute> for AttributeSet {
    fn extend<I: IntoIterator<Item = Attribute>>(&mut self, iter: I) {
        for attribute in iter {
            self.insert(attribute);
        }
    }
}

impl FromIterator<Attribute> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

/// Insertion-ordered child elements without value-equal duplicates.
#[derive(Debug, Clone, Default)]
pub struct ElementSet {
    elements: IndexSet<SharedElement>,
}

impl ElementSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the element was not already present.
    pub fn insert(&mut self, element: SharedElement) -> bool {
        let added = self.elements.insert(element);
        if !added {
            tracing::trace!("Duplicate child element collapsed");
        }
        added
    }

    pub fn iter(&self) -> indexmap::set::Iter<'_, SharedElement> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

// IndexSet equality ignores order; children are positional.
impl PartialEq for ElementSet {
    fn eq(&self, other: &Self) -> bool {
        self.elements.len() == other.elements.len() && self.elements.iter().eq(other.elements.iter())
    }
}

impl Eq for ElementSet {}

impl Hash for ElementSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.elements.len().hash(state);
        for element in &self.elements {
            element.hash(state);
        }
    }
}

impl Extend<SharedElement> for ElementSet {
    fn extend<I: IntoIterator<Item = SharedElement>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<'a> IntoIterator for &'a ElementSet {
    type Item = &'a SharedElement;
    type IntoIter = indexmap::set::Iter<'a, SharedElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
