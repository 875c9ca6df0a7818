//! Ambient location/document context, passed in explicitly.
//!
//! Outside a browser there is no `location` or `document`, so the resolver takes
//! whatever the host knows about them as plain data. The default is an empty
//! context, which resolves to the fallback origin and the `/` path.

/// What the host environment knows about where the client is running.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnvironmentContext {
    /// Origin of the hosting page, e.g. `https://admin.example.com`
    pub origin: Option<String>,
    /// Document information used to auto-detect a base path
    pub document: Option<DocumentContext>,
}

/// Base-path hints taken from a hosting document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentContext {
    /// `href` of a `<base>` element, if one is declared
    pub base_href: Option<String>,
    /// The document's base URI
    pub base_uri: Option<String>,
}

impl EnvironmentContext {
    /// An environment with no ambient location or document
    pub fn none() -> Self {
        Self::default()
    }

    /// Set the ambient origin
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Set the document context
    pub fn with_document(mut self, document: DocumentContext) -> Self {
        self.document = Some(document);
        self
    }
}

impl DocumentContext {
    /// A document with neither a `<base>` element nor a base URI
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a `<base href>`
    pub fn with_base_href(mut self, href: impl Into<String>) -> Self {
        self.base_href = Some(href.into());
        self
    }

    /// Declare the document base URI
    pub fn with_base_uri(mut self, uri: impl Into<String>) -> Self {
        self.base_uri = Some(uri.into());
        self
    }
}
