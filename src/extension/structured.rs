use std::fmt;

use super::element::{
    qualified_name, AdditionalElement, AttributeSet, ElementSet, ElementVariant, SharedElement,
};
use super::validation::{check_name, BuildError};
use super::{Attribute, Namespace};

/// An extension element carrying attributes and/or nested child elements.
///
/// A structured element always starts from a seed: at least one attribute or
/// one child. Pick the entry point matching the seed:
///
/// - [`builder`](Self::builder) for a single attribute,
/// - [`builder_with_child`](Self::builder_with_child) for a single child,
/// - [`builder_with_attributes`](Self::builder_with_attributes) and
///   [`builder_with_children`](Self::builder_with_children) for collections,
///   which must not be empty.
///
/// When the element has both text and children, the text is written first,
/// right after the start tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StructuredElement {
    namespace: Option<Namespace>,
    tag_name: String,
    value: String,
    attributes: AttributeSet,
    children: ElementSet,
}

impl StructuredElement {
    /// Starts a structured element seeded with one attribute.
    pub fn builder(
        tag_name: impl Into<String>,
        attribute: Attribute,
    ) -> Result<StructuredElementBuilder, BuildError> {
        Self::builder_with_attributes(tag_name, [attribute])
    }

    /// Starts a structured element seeded with one child element.
    pub fn builder_with_child<E>(
        tag_name: impl Into<String>,
        child: E,
    ) -> Result<StructuredElementBuilder, BuildError>
    where
        E: AdditionalElement + 'static,
    {
        Self::builder_with_children(tag_name, [child.into_shared()])
    }

    /// Starts a structured element seeded with attributes.
    ///
    /// Fails with [`BuildError::MissingAttribute`] when `attributes` is empty.
    pub fn builder_with_attributes(
        tag_name: impl Into<String>,
        attributes: impl IntoIterator<Item = Attribute>,
    ) -> Result<StructuredElementBuilder, BuildError> {
        let mut builder = StructuredElementBuilder::new(tag_name.into())?;
        builder.attributes.extend(attributes);
        if builder.attributes.is_empty() {
            return Err(BuildError::MissingAttribute);
        }
        Ok(builder)
    }

    /// Starts a structured element seeded with child elements.
    ///
    /// Fails with [`BuildError::MissingChildElement`] when `children` is empty.
    pub fn builder_with_children(
        tag_name: impl Into<String>,
        children: impl IntoIterator<Item = SharedElement>,
    ) -> Result<StructuredElementBuilder, BuildError> {
        let mut builder = StructuredElementBuilder::new(tag_name.into())?;
        builder.children.extend(children);
        if builder.children.is_empty() {
            return Err(BuildError::MissingChildElement);
        }
        Ok(builder)
    }

    /// Child elements in insertion order.
    pub fn children(&self) -> &ElementSet {
        &self.children
    }
}

impl AdditionalElement for StructuredElement {
    fn namespace(&self) -> Option<&Namespace> {
        self.namespace.as_ref()
    }

    fn tag_name(&self) -> &str {
        &self.tag_name
    }

    fn attributes(&self) -> &[Attribute] {
        self.attributes.as_slice()
    }

    fn value(&self) -> &str {
        &self.value
    }

    fn variant(&self) -> Option<ElementVariant<'_>> {
        Some(ElementVariant::Structured(self))
    }
}

impl fmt::Display for StructuredElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "StructuredElement <{}> ({} attributes, {} children)",
            qualified_name(self.namespace.as_ref(), &self.tag_name),
            self.attributes.len(),
            self.children.len()
        )
    }
}

#[derive(Debug, Clone)]
pub struct StructuredElementBuilder {
    namespace: Option<Namespace>,
    tag_name: String,
    value: String,
    attributes: AttributeSet,
    children: ElementSet,
}

impl StructuredElementBuilder {
    fn new(tag_name: String) -> Result<Self, BuildError> {
        check_name(&tag_name, BuildError::MissingTagName)?;
        Ok(Self {
            namespace: None,
            tag_name,
            value: String::new(),
            attributes: AttributeSet::new(),
            children: ElementSet::new(),
        })
    }

    pub fn with_namespace(mut self, namespace: Namespace) -> Self {
        self.namespace = Some(namespace);
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn add_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.insert(attribute);
        self
    }

    pub fn add_attributes(mut self, attributes: impl IntoIterator<Item = Attribute>) -> Self {
        self.attributes.extend(attributes);
        self
    }

    pub fn add_child<E>(self, child: E) -> Self
    where
        E: AdditionalElement + 'static,
    {
        self.add_shared_child(child.into_shared())
    }

    /// Adds a child that is already shared, e.g. the same element reused
    /// under several parents.
    pub fn add_shared_child(mut self, child: SharedElement) -> Self {
        self.children.insert(child);
        self
    }

    pub fn add_children(mut self, children: impl IntoIterator<Item = SharedElement>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn build(self) -> StructuredElement {
        StructuredElement {
            namespace: self.namespace,
            tag_name: self.tag_name,
            value: self.value,
            attributes: self.attributes,
            children: self.children,
        }
    }
}
