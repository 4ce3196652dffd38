use crate::extension::{Attribute, Namespace};

/// Attribute as handed to the writer: standard Atom attributes are plain,
/// extension attributes may carry a namespace.
#[derive(Debug, Clone, Copy)]
pub(crate) struct XmlAttr<'a> {
    namespace: Option<&'a Namespace>,
    name: &'a str,
    value: &'a str,
}

impl<'a> XmlAttr<'a> {
    pub(crate) fn plain(name: &'a str, value: &'a str) -> Self {
        Self {
            namespace: None,
            name,
            value,
        }
    }
}

impl<'a> From<&'a Attribute> for XmlAttr<'a> {
    fn from(attribute: &'a Attribute) -> Self {
        Self {
            namespace: attribute.namespace(),
            name: attribute.name(),
            value: attribute.value(),
        }
    }
}

/// A prefix bound to a URI. `prefix: None` is the default namespace, and an
/// empty URI means "no namespace".
#[derive(Debug, Clone)]
struct Binding {
    prefix: Option<String>,
    uri: String,
}

/// Start tag resolved against the namespaces in scope.
#[derive(Debug)]
pub(crate) struct OpenTag {
    pub(crate) name: String,
    /// Attributes first, then the `xmlns` declarations this element introduces.
    pub(crate) attributes: Vec<(String, String)>,
}

/// Namespace bindings of the currently open elements, innermost last.
///
/// A binding is declared on the first element that needs it and stays in
/// scope for its descendants; siblings declare it again.
#[derive(Debug, Default)]
pub(crate) struct NamespaceScopes {
    frames: Vec<Vec<Binding>>,
    generated: usize,
}

impl NamespaceScopes {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Resolves names for an element about to be opened and enters its scope.
    /// Every call must be paired with [`close`](Self::close).
    pub(crate) fn open(
        &mut self,
        namespace: Option<&Namespace>,
        tag: &str,
        attributes: &[XmlAttr<'_>],
    ) -> OpenTag {
        let mut pending = Vec::new();
        // Prefixes this tag already relies on, with the URI each must keep.
        let mut used: Vec<(String, String)> = Vec::new();

        let name = match namespace {
            Some(ns) => match ns.prefix() {
                Some(prefix) => {
                    self.bind(&mut pending, Some(prefix), ns.uri());
                    used.push((prefix.to_owned(), ns.uri().to_owned()));
                    format!("{prefix}:{tag}")
                }
                None => {
                    self.bind(&mut pending, None, ns.uri());
                    tag.to_owned()
                }
            },
            // Unqualified: drop any default namespace inherited from above.
            None => {
                self.bind(&mut pending, None, "");
                tag.to_owned()
            }
        };

        let mut written = Vec::with_capacity(attributes.len() + pending.len());
        for attr in attributes {
            let key = match attr.namespace {
                Some(ns) => {
                    let prefix = self.attribute_prefix(&mut pending, &mut used, ns);
                    format!("{prefix}:{}", attr.name)
                }
                None => attr.name.to_owned(),
            };
            written.push((key, attr.value.to_owned()));
        }

        for binding in &pending {
            let key = match &binding.prefix {
                Some(prefix) => format!("xmlns:{prefix}"),
                None => "xmlns".to_owned(),
            };
            written.push((key, binding.uri.clone()));
        }

        self.frames.push(pending);
        OpenTag {
            name,
            attributes: written,
        }
    }

    pub(crate) fn close(&mut self) {
        self.frames.pop();
    }

    fn lookup<'s>(&'s self, pending: &'s [Binding], prefix: Option<&str>) -> Option<&'s str> {
        pending
            .iter()
            .rev()
            .chain(self.frames.iter().rev().flat_map(|frame| frame.iter().rev()))
            .find(|binding| binding.prefix.as_deref() == prefix)
            .map(|binding| binding.uri.as_str())
    }

    fn bind(&self, pending: &mut Vec<Binding>, prefix: Option<&str>, uri: &str) {
        let current = self.lookup(pending, prefix).unwrap_or("");
        if current != uri {
            pending.push(Binding {
                prefix: prefix.map(str::to_owned),
                uri: uri.to_owned(),
            });
        }
    }

    /// Attributes never use the default namespace, so a namespaced attribute
    /// always gets a prefix: its own if free, one already bound to the URI,
    /// or a generated `nsN`.
    ///
    /// A prefix already used on this tag (by the element name or an earlier
    /// attribute) is never rebound to another URI, whether its binding is
    /// declared here or inherited.
    fn attribute_prefix(
        &mut self,
        pending: &mut Vec<Binding>,
        used: &mut Vec<(String, String)>,
        ns: &Namespace,
    ) -> String {
        let uri = ns.uri();

        if let Some(prefix) = ns.prefix() {
            let taken = used.iter().any(|(p, u)| p == prefix && u != uri)
                || pending
                    .iter()
                    .any(|b| b.prefix.as_deref() == Some(prefix) && b.uri != uri);
            if !taken {
                self.bind(pending, Some(prefix), uri);
                return Self::mark_used(used, prefix, uri);
            }
        }

        if let Some(prefix) = self.prefix_for(pending, uri) {
            return Self::mark_used(used, &prefix, uri);
        }

        loop {
            self.generated += 1;
            let candidate = format!("ns{}", self.generated);
            if self.lookup(pending, Some(candidate.as_str())).is_none() {
                pending.push(Binding {
                    prefix: Some(candidate.clone()),
                    uri: uri.to_owned(),
                });
                return Self::mark_used(used, &candidate, uri);
            }
        }
    }

    fn mark_used(used: &mut Vec<(String, String)>, prefix: &str, uri: &str) -> String {
        if !used.iter().any(|(p, _)| p == prefix) {
            used.push((prefix.to_owned(), uri.to_owned()));
        }
        prefix.to_owned()
    }

    /// A prefix currently bound to `uri` and not shadowed by an inner binding.
    fn prefix_for(&self, pending: &[Binding], uri: &str) -> Option<String> {
        pending
            .iter()
            .rev()
            .chain(self.frames.iter().rev().flat_map(|frame| frame.iter().rev()))
            .filter_map(|binding| binding.prefix.as_deref().filter(|_| binding.uri == uri))
            .find(|prefix| self.lookup(pending, Some(*prefix)) == Some(uri))
            .map(str::to_owned)
    }
}
