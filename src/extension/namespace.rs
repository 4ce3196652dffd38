use std::fmt;

use super::validation::{check_name, BuildError};

/// Namespace of the standard Atom elements.
pub const ATOM_NAMESPACE_URI: &str = "http://www.w3.org/2005/Atom";

/// An XML namespace: a URI with an optional prefix.
///
/// Two namespaces with the same URI but different prefixes are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Namespace {
    uri: String,
    prefix: Option<String>,
}

impl Namespace {
    /// Starts a namespace. Fails when `uri` is empty.
    pub fn builder(uri: impl Into<String>) -> Result<NamespaceBuilder, BuildError> {
        let uri = uri.into();
        if uri.trim().is_empty() {
            return Err(BuildError::MissingNamespaceUri);
        }
        Ok(NamespaceBuilder { uri, prefix: None })
    }

    /// The unprefixed Atom namespace used for the standard feed elements.
    pub fn atom() -> Self {
        Self {
            uri: ATOM_NAMESPACE_URI.to_owned(),
            prefix: None,
        }
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.prefix {
            Some(prefix) => write!(f, "{prefix}={}", self.uri),
            None => f.write_str(&self.uri),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NamespaceBuilder {
    uri: String,
    prefix: Option<String>,
}

impl NamespaceBuilder {
    /// Sets the prefix. Fails when it is not a valid XML name.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Result<Self, BuildError> {
        let prefix = prefix.into();
        check_name(&prefix, BuildError::InvalidName(String::new()))?;
        // reserved for namespace declarations
        if prefix == "xmlns" {
            return Err(BuildError::InvalidName(prefix));
        }
        self.prefix = Some(prefix);
        Ok(self)
    }

    pub fn build(self) -> Namespace {
        Namespace {
            uri: self.uri,
            prefix: self.prefix,
        }
    }
}

/// A name/value pair written as an XML attribute, optionally namespaced.
///
/// The attribute's namespace is independent of the element carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Attribute {
    namespace: Option<Namespace>,
    name: String,
    value: String,
}

impl Attribute {
    /// Starts an attribute. Fails when `name` is empty, not a valid XML name,
    /// or `xmlns`.
    pub fn builder(
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<AttributeBuilder, BuildError> {
        let name = name.into();
        check_name(&name, BuildError::MissingAttributeName)?;
        if name == "xmlns" {
            return Err(BuildError::InvalidName(name));
        }
        Ok(AttributeBuilder {
            namespace: None,
            name,
            value: value.into(),
        })
    }

    pub fn namespace(&self) -> Option<&Namespace> {
        self.namespace.as_ref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether `other` occupies the same slot on an element (same local name
    /// and namespace URI), whatever its value or prefix.
    pub(crate) fn same_key(&self, other: &Self) -> bool {
        self.name == other.name
            && self.namespace.as_ref().map(Namespace::uri)
                == other.namespace.as_ref().map(Namespace::uri)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.namespace.as_ref().and_then(Namespace::prefix) {
            Some(prefix) => write!(f, "{prefix}:{}=\"{}\"", self.name, self.value),
            None => write!(f, "{}=\"{}\"", self.name, self.value),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AttributeBuilder {
    namespace: Option<Namespace>,
    name: String,
    value: String,
}

impl AttributeBuilder {
    pub fn with_namespace(mut self, namespace: Namespace) -> Self {
        self.namespace = Some(namespace);
        self
    }

    pub fn build(self) -> Attribute {
        Attribute {
            namespace: self.namespace,
            name: self.name,
            value: self.value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIDAL_URI: &str = "http://api.vidal.net/-/spec/vidal-api/1.0/";

    fn vidal() -> Namespace {
        Namespace::builder(VIDAL_URI)
            .unwrap()
            .with_prefix("vidal")
            .unwrap()
            .build()
    }

    #[test]
    fn test_namespace_requires_uri() {
        assert_eq!(
            Namespace::builder("").unwrap_err(),
            BuildError::MissingNamespaceUri
        );
        assert_eq!(
            Namespace::builder("  ").unwrap_err(),
            BuildError::MissingNamespaceUri
        );
    }

    #[test]
    fn test_namespace_accessors() {
        let ns = vidal();
        assert_eq!(ns.uri(), VIDAL_URI);
        assert_eq!(ns.prefix(), Some("vidal"));
        assert_eq!(ns.to_string(), format!("vidal={VIDAL_URI}"));
    }

    #[test]
    fn test_namespace_equality_includes_prefix() {
        let other_prefix = Namespace::builder(VIDAL_URI)
            .unwrap()
            .with_prefix("v")
            .unwrap()
            .build();
        let no_prefix = Namespace::builder(VIDAL_URI).unwrap().build();

        assert_eq!(vidal(), vidal());
        assert_ne!(vidal(), other_prefix);
        assert_ne!(vidal(), no_prefix);
    }

    #[test]
    fn test_invalid_prefix_rejected() {
        let result = Namespace::builder(VIDAL_URI).unwrap().with_prefix("a:b");
        assert!(matches!(result, Err(BuildError::InvalidName(_))));
        let result = Namespace::builder(VIDAL_URI).unwrap().with_prefix("xmlns");
        assert!(matches!(result, Err(BuildError::InvalidName(_))));
    }

    #[test]
    fn test_atom_namespace() {
        let atom = Namespace::atom();
        assert_eq!(atom.uri(), "http://www.w3.org/2005/Atom");
        assert_eq!(atom.prefix(), None);
    }

    #[test]
    fn test_attribute_requires_name() {
        assert_eq!(
            Attribute::builder("", "PRODUCT").unwrap_err(),
            BuildError::MissingAttributeName
        );
        assert!(matches!(
            Attribute::builder("xmlns", "urn:x"),
            Err(BuildError::InvalidName(_))
        ));
    }

    #[test]
    fn test_attribute_value_may_be_empty() {
        let attr = Attribute::builder("type", "").unwrap().build();
        assert_eq!(attr.value(), "");
        assert_eq!(attr.namespace(), None);
    }

    #[test]
    fn test_attribute_key_ignores_value() {
        let a = Attribute::builder("type", "PRODUCT")
            .unwrap()
            .with_namespace(vidal())
            .build();
        let b = Attribute::builder("type", "PACK")
            .unwrap()
            .with_namespace(vidal())
            .build();
        let unqualified = Attribute::builder("type", "PRODUCT").unwrap().build();

        assert!(a.same_key(&b));
        assert_ne!(a, b);
        assert!(!a.same_key(&unqualified));
    }

    #[test]
    fn test_attribute_key_ignores_prefix() {
        let short = Namespace::builder(VIDAL_URI)
            .unwrap()
            .with_prefix("v")
            .unwrap()
            .build();
        let a = Attribute::builder("type", "PRODUCT")
            .unwrap()
            .with_namespace(vidal())
            .build();
        let b = Attribute::builder("type", "PACK")
            .unwrap()
            .with_namespace(short)
            .build();
        let unprefixed = Attribute::builder("type", "PACK")
            .unwrap()
            .with_namespace(Namespace::builder(VIDAL_URI).unwrap().build())
            .build();

        assert!(a.same_key(&b));
        assert!(a.same_key(&unprefixed));
    }

    #[test]
    fn test_attribute_display() {
        let attr = Attribute::builder("type", "PRODUCT,PACK")
            .unwrap()
            .with_namespace(vidal())
            .build();
        assert_eq!(attr.to_string(), "vidal:type=\"PRODUCT,PACK\"");
    }
}
