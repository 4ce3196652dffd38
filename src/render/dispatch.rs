//! Writes extension elements by matching on their [`ElementVariant`].

use thiserror::Error;

use super::namespaces::XmlAttr;
use super::writer::XmlWriter;
use super::RenderError;
use crate::extension::{
    AdditionalElement, AnyElement, ElementVariant, SharedElement, SimpleElement,
    StructuredElement,
};

#[derive(Debug, Error)]
pub enum DispatchError {
    /// The element does not map to any known variant.
    #[error("Cannot handle Additional element: {0}")]
    UnknownElement(String),
}

/// Renders extension elements in the order they are given, recursing into
/// children.
pub(crate) struct ElementRenderer<'w> {
    writer: &'w mut XmlWriter,
}

impl<'w> ElementRenderer<'w> {
    pub(crate) fn new(writer: &'w mut XmlWriter) -> Self {
        Self { writer }
    }

    pub(crate) fn render_all<'e>(
        &mut self,
        elements: impl IntoIterator<Item = &'e SharedElement>,
    ) -> Result<(), RenderError> {
        for element in elements {
            self.render(element.as_ref())?;
        }
        Ok(())
    }

    pub(crate) fn render(&mut self, element: &dyn AdditionalElement) -> Result<(), RenderError> {
        match element.variant() {
            Some(ElementVariant::Simple(simple)) => self.simple(simple),
            Some(ElementVariant::Structured(structured)) => self.structured(structured),
            Some(ElementVariant::Any(any)) => self.any(any),
            None => {
                tracing::warn!(element = %element, "Unhandled additional element");
                Err(DispatchError::UnknownElement(element.to_string()).into())
            }
        }
    }

    fn simple(&mut self, element: &SimpleElement) -> Result<(), RenderError> {
        let attributes = xml_attributes(element);
        self.writer.text_element(
            element.namespace(),
            element.tag_name(),
            &attributes,
            element.value(),
        )
    }

    fn structured(&mut self, element: &StructuredElement) -> Result<(), RenderError> {
        let attributes = xml_attributes(element);
        if element.value().is_empty() && element.children().is_empty() {
            return self
                .writer
                .empty(element.namespace(), element.tag_name(), &attributes);
        }

        self.writer
            .start(element.namespace(), element.tag_name(), &attributes)?;
        if !element.value().is_empty() {
            self.writer.text(element.value())?;
        }
        self.render_all(element.children())?;
        self.writer.end()
    }

    fn any(&mut self, element: &AnyElement) -> Result<(), RenderError> {
        if element.children().is_empty() {
            return self.writer.empty(element.namespace(), element.tag_name(), &[]);
        }

        self.writer.start(element.namespace(), element.tag_name(), &[])?;
        self.render_all(element.children())?;
        self.writer.end()
    }
}

fn xml_attributes(element: &dyn AdditionalElement) -> Vec<XmlAttr<'_>> {
    element.attributes().iter().map(XmlAttr::from).collect()
}
