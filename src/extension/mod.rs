//! Vendor extension elements attached to Atom feeds and entries.
//!
//! Three element variants cover the extensions seen in practice:
//!
//! - [`SimpleElement`] - a leaf with text content, e.g. `<opensearch:totalResults>2</...>`
//! - [`StructuredElement`] - attributes and/or nested children, seeded with one of them
//! - [`AnyElement`] - a bare container used to build deep trees
//!
//! All of them implement [`AdditionalElement`], the contract feeds and
//! containers store. Rendering dispatches on [`ElementVariant`]: a custom
//! `AdditionalElement` that does not map to one of the variants above is
//! rejected at render time.
//!
//! Values are assembled through builders. Mandatory fields are checked when
//! the builder is created and reported as [`BuildError`]; once `build()`
//! returns, the value is immutable.
//!
//! # Example
//!
//! ```
//! use atomext::extension::{AnyElement, Namespace, SimpleElement, StructuredElement};
//!
//! let vidal = Namespace::builder("http://api.vidal.net/-/spec/vidal-api/1.0/")?
//!     .with_prefix("vidal")?
//!     .build();
//!
//! let dosage = AnyElement::builder("dosage")?
//!     .with_namespace(vidal.clone())
//!     .add_any_element(SimpleElement::builder("dose", "1000")?.with_namespace(vidal.clone()).build())
//!     .build();
//!
//! let dosages = StructuredElement::builder_with_child("dosages", dosage)?
//!     .with_namespace(vidal)
//!     .build();
//! assert_eq!(dosages.children().len(), 1);
//! # Ok::<(), atomext::extension::BuildError>(())
//! ```

mod any;
mod element;
mod namespace;
mod simple;
mod structured;
mod validation;

pub use any::{AnyElement, AnyElementBuilder};
pub use element::{AdditionalElement, AttributeSet, ElementSet, ElementVariant, SharedElement};
pub use namespace::{
    Attribute, AttributeBuilder, Namespace, NamespaceBuilder, ATOM_NAMESPACE_URI,
};
pub use simple::{SimpleElement, SimpleElementBuilder};
pub use structured::{StructuredElement, StructuredElementBuilder};
pub use validation::BuildError;

pub(crate) use validation::check_present;
