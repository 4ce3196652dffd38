use thiserror::Error;

/// Errors raised while assembling feed and extension values.
///
/// Every builder validates its mandatory arguments in its `builder(...)`
/// constructor, so these surface at the call site that broke the invariant
/// and never at render time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// Element built with an empty tag name.
    #[error("TagName is mandatory.")]
    MissingTagName,

    /// Structured element seeded with an empty attribute collection.
    #[error("A structured element should contain at least an attribute.")]
    MissingAttribute,

    /// Structured element seeded with an empty child collection.
    #[error("A structured element should contain at least a child element.")]
    MissingChildElement,

    #[error("Namespace URI is mandatory.")]
    MissingNamespaceUri,

    #[error("Attribute name is mandatory.")]
    MissingAttributeName,

    /// A required Atom field (author name, link href, category term) is empty.
    #[error("{0} is mandatory.")]
    MissingField(&'static str),

    /// Name that cannot be written as an XML local name or prefix.
    #[error("Invalid XML name: '{0}'")]
    InvalidName(String),
}

/// Checks a tag name, attribute name or prefix.
///
/// Prefixes come from [`Namespace`](super::Namespace), so local names may not
/// carry their own `:`.
pub(crate) fn check_name(name: &str, missing: BuildError) -> Result<(), BuildError> {
    if name.is_empty() {
        return Err(missing);
    }

    let mut chars = name.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_');
    let valid_rest = chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'));

    if valid_start && valid_rest {
        Ok(())
    } else {
        Err(BuildError::InvalidName(name.to_owned()))
    }
}

/// Checks a required free-text field such as a link href.
pub(crate) fn check_present(value: &str, field: &'static str) -> Result<(), BuildError> {
    if value.trim().is_empty() {
        Err(BuildError::MissingField(field))
    } else {
        Ok(())
    }
}
