use crate::extension::{check_present, BuildError};

/// Person construct used for `<author>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    name: String,
    uri: Option<String>,
    email: Option<String>,
}

impl Author {
    pub fn builder(name: impl Into<String>) -> Result<AuthorBuilder, BuildError> {
        let name = name.into();
        check_present(&name, "Author name")?;
        Ok(AuthorBuilder {
            author: Author {
                name,
                uri: None,
                email: None,
            },
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

#[derive(Debug, Clone)]
pub struct AuthorBuilder {
    author: Author,
}

impl AuthorBuilder {
    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.author.uri = Some(uri.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.author.email = Some(email.into());
        self
    }

    pub fn build(self) -> Author {
        self.author
    }
}

/// An Atom `<category>`, written as an empty element with attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    term: String,
    scheme: Option<String>,
    label: Option<String>,
}

impl Category {
    pub fn builder(term: impl Into<String>) -> Result<CategoryBuilder, BuildError> {
        let term = term.into();
        check_present(&term, "Category term")?;
        Ok(CategoryBuilder {
            category: Category {
                term,
                scheme: None,
                label: None,
            },
        })
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

#[derive(Debug, Clone)]
pub struct CategoryBuilder {
    category: Category,
}

impl CategoryBuilder {
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.category.scheme = Some(scheme.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.category.label = Some(label.into());
        self
    }

    pub fn build(self) -> Category {
        self.category
    }
}

/// Entry `<summary>`: optional text and optional `type` attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    value: Option<String>,
    media_type: Option<String>,
}

impl Summary {
    pub fn builder() -> SummaryBuilder {
        SummaryBuilder::default()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn media_type(&self) -> Option<&str> {
        self.media_type.as_deref()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SummaryBuilder {
    summary: Summary,
}

impl SummaryBuilder {
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.summary.value = Some(value.into());
        self
    }

    pub fn with_type(mut self, media_type: impl Into<String>) -> Self {
        self.summary.media_type = Some(media_type.into());
        self
    }

    pub fn build(self) -> Summary {
        self.summary
    }
}

/// Entry `<content>`: inline text, or a reference through `src`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Content {
    value: Option<String>,
    media_type: Option<String>,
    src: Option<String>,
}

impl Content {
    pub fn builder() -> ContentBuilder {
        ContentBuilder::default()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn media_type(&self) -> Option<&str> {
        self.media_type.as_deref()
    }

    pub fn src(&self) -> Option<&str> {
        self.src.as_deref()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContentBuilder {
    content: Content,
}

impl ContentBuilder {
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.content.value = Some(value.into());
        self
    }

    pub fn with_type(mut self, media_type: impl Into<String>) -> Self {
        self.content.media_type = Some(media_type.into());
        self
    }

    pub fn with_src(mut self, src: impl Into<String>) -> Self {
        self.content.src = Some(src.into());
        self
    }

    pub fn build(self) -> Content {
        self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_name_is_mandatory() {
        assert_eq!(
            Author::builder(" ").unwrap_err(),
            BuildError::MissingField("Author name")
        );
        let author = Author::builder("VIDAL")
            .unwrap()
            .with_email("contact@example.org")
            .build();
        assert_eq!(author.name(), "VIDAL");
        assert_eq!(author.email(), Some("contact@example.org"));
        assert_eq!(author.uri(), None);
    }

    #[test]
    fn test_category_term_is_mandatory() {
        assert_eq!(
            Category::builder("").unwrap_err(),
            BuildError::MissingField("Category term")
        );
        let category = Category::builder("PRODUCT").unwrap().build();
        assert_eq!(category.term(), "PRODUCT");
        assert_eq!(category.scheme(), None);
    }

    #[test]
    fn test_summary_defaults_empty() {
        let summary = Summary::builder().build();
        assert_eq!(summary.value(), None);
        assert_eq!(summary.media_type(), None);

        let summary = Summary::builder()
            .with_value("SNAKE OIL 1 mg")
            .with_type("text")
            .build();
        assert_eq!(summary.value(), Some("SNAKE OIL 1 mg"));
        assert_eq!(summary.media_type(), Some("text"));
    }

    #[test]
    fn test_content_src() {
        let content = Content::builder()
            .with_src("/rest/api/product/42/documents")
            .with_type("application/atom+xml")
            .build();
        assert_eq!(content.src(), Some("/rest/api/product/42/documents"));
        assert_eq!(content.value(), None);
    }
}
