use std::fmt;

use crate::extension::{check_present, BuildError};

/// Link relation types registered for Atom (`rel` attribute).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkRel {
    Alternate,
    Related,
    /// `rel="self"`
    SelfLink,
    Enclosure,
    Via,
    First,
    Last,
    Next,
    Previous,
}

impl LinkRel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Alternate => "alternate",
            Self::Related => "related",
            Self::SelfLink => "self",
            Self::Enclosure => "enclosure",
            Self::Via => "via",
            Self::First => "first",
            Self::Last => "last",
            Self::Next => "next",
            Self::Previous => "previous",
        }
    }
}

impl fmt::Display for LinkRel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An Atom `<link>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    href: String,
    rel: Option<LinkRel>,
    media_type: Option<String>,
    hreflang: Option<String>,
    title: Option<String>,
    length: Option<u64>,
}

impl Link {
    /// Starts a link. `href` is written as given, relative references included.
    pub fn builder(href: impl Into<String>) -> Result<LinkBuilder, BuildError> {
        let href = href.into();
        check_present(&href, "Link href")?;
        Ok(LinkBuilder {
            link: Link {
                href,
                rel: None,
                media_type: None,
                hreflang: None,
                title: None,
                length: None,
            },
        })
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn rel(&self) -> Option<LinkRel> {
        self.rel
    }

    /// Media type advertised by the `type` attribute.
    pub fn media_type(&self) -> Option<&str> {
        self.media_type.as_deref()
    }

    pub fn hreflang(&self) -> Option<&str> {
        self.hreflang.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn length(&self) -> Option<u64> {
        self.length
    }
}

#[derive(Debug, Clone)]
pub struct LinkBuilder {
    link: Link,
}

impl LinkBuilder {
    pub fn with_rel(mut self, rel: LinkRel) -> Self {
        self.link.rel = Some(rel);
        self
    }

    pub fn with_type(mut self, media_type: impl Into<String>) -> Self {
        self.link.media_type = Some(media_type.into());
        self
    }

    pub fn with_hreflang(mut self, hreflang: impl Into<String>) -> Self {
        self.link.hreflang = Some(hreflang.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.link.title = Some(title.into());
        self
    }

    pub fn with_length(mut self, length: u64) -> Self {
        self.link.length = Some(length);
        self
    }

    pub fn build(self) -> Link {
        self.link
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_href_is_mandatory() {
        assert_eq!(
            Link::builder("").unwrap_err(),
            BuildError::MissingField("Link href")
        );
    }

    #[test]
    fn test_builder_sets_fields() {
        let link = Link::builder("/rest/api/product/15070/packages")
            .unwrap()
            .with_rel(LinkRel::Related)
            .with_type("application/atom+xml")
            .with_title("PACKAGES")
            .build();

        assert_eq!(link.href(), "/rest/api/product/15070/packages");
        assert_eq!(link.rel(), Some(LinkRel::Related));
        assert_eq!(link.media_type(), Some("application/atom+xml"));
        assert_eq!(link.title(), Some("PACKAGES"));
        assert_eq!(link.hreflang(), None);
        assert_eq!(link.length(), None);
    }

    #[test]
    fn test_rel_names() {
        assert_eq!(LinkRel::SelfLink.to_string(), "self");
        assert_eq!(LinkRel::Alternate.as_str(), "alternate");
        assert_eq!(LinkRel::Previous.as_str(), "previous");
    }
}
