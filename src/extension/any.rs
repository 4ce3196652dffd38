use std::fmt;

use super::element::{
    qualified_name, AdditionalElement, ElementSet, ElementVariant, SharedElement,
};
use super::validation::{check_name, BuildError};
use super::{Attribute, Namespace};

/// A schema-free container for building nested extension trees.
///
/// Holds child elements only: no attributes, no text. Nest `AnyElement`s to
/// reach any depth, e.g. `dosage > interval > {min, max, unitId}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnyElement {
    namespace: Option<Namespace>,
    tag_name: String,
    children: ElementSet,
}

impl AnyElement {
    pub fn builder(tag_name: impl Into<String>) -> Result<AnyElementBuilder, BuildError> {
        let tag_name = tag_name.into();
        check_name(&tag_name, BuildError::MissingTagName)?;
        Ok(AnyElementBuilder {
            namespace: None,
            tag_name,
            children: ElementSet::new(),
        })
    }

    pub fn children(&self) -> &ElementSet {
        &self.children
    }
}

impl AdditionalElement for AnyElement {
    fn namespace(&self) -> Option<&Namespace> {
        self.namespace.as_ref()
    }

    fn tag_name(&self) -> &str {
        &self.tag_name
    }

    fn attributes(&self) -> &[Attribute] {
        &[]
    }

    fn value(&self) -> &str {
        ""
    }

    fn variant(&self) -> Option<ElementVariant<'_>> {
        Some(ElementVariant::Any(self))
    }
}

impl fmt::Display for AnyElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AnyElement <{}> ({} children)",
            qualified_name(self.namespace.as_ref(), &self.tag_name),
            self.children.len()
        )
    }
}

#[derive(Debug, Clone)]
pub struct AnyElementBuilder {
    namespace: Option<Namespace>,
    tag_name: String,
    children: ElementSet,
}

impl AnyElementBuilder {
    pub fn with_namespace(mut self, namespace: Namespace) -> Self {
        self.namespace = Some(namespace);
        self
    }

    pub fn add_any_element<E>(self, element: E) -> Self
    where
        E: AdditionalElement + 'static,
    {
        self.add_shared_element(element.into_shared())
    }

    pub fn add_shared_element(mut self, element: SharedElement) -> Self {
        self.children.insert(element);
        self
    }

    pub fn add_any_elements(mut self, elements: impl IntoIterator<Item = SharedElement>) -> Self {
        self.children.extend(elements);
        self
    }

    pub fn build(self) -> AnyElement {
        AnyElement {
            namespace: self.namespace,
            tag_name: self.tag_name,
            children: self.children,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extension::SimpleElement;

    fn leaf(tag: &str, value: &str) -> SimpleElement {
        SimpleElement::builder(tag, value).unwrap().build()
    }

    #[test]
    fn test_tag_name_is_mandatory() {
        assert_eq!(AnyElement::builder("").unwrap_err(), BuildError::MissingTagName);
    }

    #[test]
    fn test_no_attributes_no_text() {
        let element = AnyElement::builder("dosage")
            .unwrap()
            .add_any_element(leaf("dose", "1000"))
            .build();
        assert!(element.attributes().is_empty());
        assert_eq!(element.value(), "");
        assert_eq!(element.children().len(), 1);
    }

    #[test]
    fn test_nested_tree() {
        let interval = AnyElement::builder("interval")
            .unwrap()
            .add_any_element(leaf("min", "2"))
            .add_any_element(leaf("max", "6"))
            .add_any_element(leaf("unitId", "41"))
            .build();
        let dosage = AnyElement::builder("dosage")
            .unwrap()
            .add_any_element(leaf("dose", "10.0"))
            .add_any_element(leaf("unitId", "129"))
            .add_any_element(interval)
            .build();

        let tags: Vec<_> = dosage.children().iter().map(|c| c.tag_name()).collect();
        assert_eq!(tags, ["dose", "unitId", "interval"]);

        let nested = dosage.children().iter().nth(2).and_then(|c| match c.variant() {
            Some(ElementVariant::Any(any)) => Some(any.children().len()),
            _ => None,
        });
        assert_eq!(nested, Some(3));
    }

    #[test]
    fn test_duplicate_children_collapse() {
        let element = AnyElement::builder("dosage")
            .unwrap()
            .add_any_element(leaf("dose", "1000"))
            .add_any_element(leaf("dose", "1000"))
            .add_any_elements([leaf("dose", "1000").into_shared()])
            .build();
        assert_eq!(element.children().len(), 1);
    }
}
