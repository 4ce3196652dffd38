use std::fmt;

use super::element::{qualified_name, AdditionalElement, AttributeSet, ElementVariant};
use super::validation::{check_name, BuildError};
use super::{Attribute, Namespace};

/// A leaf extension element: tag, optional namespace, text and attributes.
///
/// ```
/// use atomext::extension::{AdditionalElement, Namespace, SimpleElement};
///
/// let opensearch = Namespace::builder("http://a9.com/-/spec/opensearch/1.1/")?
///     .with_prefix("opensearch")?
///     .build();
/// let total = SimpleElement::builder("totalResults", "2")?
///     .with_namespace(opensearch)
///     .build();
/// assert_eq!(total.value(), "2");
/// # Ok::<(), atomext::extension::BuildError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimpleElement {
    namespace: Option<Namespace>,
    tag_name: String,
    value: String,
    attributes: AttributeSet,
}

impl SimpleElement {
    /// Starts a simple element. The value may be empty, the tag name may not.
    pub fn builder(
        tag_name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<SimpleElementBuilder, BuildError> {
        let tag_name = tag_name.into();
        check_name(&tag_name, BuildError::MissingTagName)?;
        Ok(SimpleElementBuilder {
            namespace: None,
            tag_name,
            value: value.into(),
            attributes: AttributeSet::new(),
        })
    }
}

impl AdditionalElement for SimpleElement {
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
        Some(ElementVariant::Simple(self))
    }
}

impl fmt::Display for SimpleElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SimpleElement <{}>",
            qualified_name(self.namespace.as_ref(), &self.tag_name)
        )
    }
}

#[derive(Debug, Clone)]
pub struct SimpleElementBuilder {
    namespace: Option<Namespace>,
    tag_name: String,
    value: String,
    attributes: AttributeSet,
}

impl SimpleElementBuilder {
    pub fn with_namespace(mut self, namespace: Namespace) -> Self {
        self.namespace = Some(namespace);
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

    pub fn build(self) -> SimpleElement {
        SimpleElement {
            namespace: self.namespace,
            tag_name: self.tag_name,
            value: self.value,
            attributes: self.attributes,
        }
    }
}
