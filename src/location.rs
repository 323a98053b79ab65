//! Page-location model: origin + path + query of the current page address.

use thiserror::Error;
use url::Url;

/// Error splitting a raw address into origin/path/query.
#[derive(Debug, Error)]
pub enum LocationError {
    /// Not an absolute URL at all.
    #[error("invalid page URL: {0}")]
    Parse(#[from] url::ParseError),
    /// Parsed, but not something a browser page can live at.
    #[error("unsupported scheme `{0}`; expected http or https")]
    UnsupportedScheme(String),
}

/// A page address decomposed for query rewriting.
///
/// The query component is kept raw; [`crate::query`] decodes it. Reassembly
/// via [`PageLocation::with_query`] always emits `origin + path + '?' +
/// query`, matching how the browser address was rebuilt in the original site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    origin: String,
    path: String,
    query: Option<String>,
}

impl PageLocation {
    /// Splits an absolute http(s) URL into origin, path, and query.
    pub fn parse(raw: &str) -> Result<Self, LocationError> {
        let url = Url::parse(raw)?;
        match url.scheme() {
            "http" | "https" => {}
            other => return Err(LocationError::UnsupportedScheme(other.to_string())),
        }
        Ok(Self {
            origin: url.origin().ascii_serialization(),
            path: url.path().to_string(),
            query: url.query().map(str::to_string),
        })
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Raw query component, empty if the URL had none.
    pub fn query(&self) -> &str {
        self.query.as_deref().unwrap_or("")
    }

    /// Rebuilds the full address around a replacement query component.
    pub fn with_query(&self, query: &str) -> String {
        format!("{}{}?{}", self.origin, self.path, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_origin_path_query() {
        let loc = PageLocation::parse("https://docs.example.com/search/?q=x&page=2").unwrap();
        assert_eq!(loc.origin(), "https://docs.example.com");
        assert_eq!(loc.path(), "/search/");
        assert_eq!(loc.query(), "q=x&page=2");
    }

    #[test]
    fn missing_query_is_empty() {
        let loc = PageLocation::parse("http://example.com/docs").unwrap();
        assert_eq!(loc.query(), "");
        assert_eq!(loc.with_query("sort=date"), "http://example.com/docs?sort=date");
    }

    #[test]
    fn with_query_always_appends_question_mark() {
        let loc = PageLocation::parse("https://example.com/search/").unwrap();
        assert_eq!(loc.with_query(""), "https://example.com/search/?");
    }

    #[test]
    fn non_default_port_kept_in_origin() {
        let loc = PageLocation::parse("http://localhost:8000/search/?q=x").unwrap();
        assert_eq!(loc.origin(), "http://localhost:8000");
    }

    #[test]
    fn relative_and_non_http_rejected() {
        assert!(matches!(
            PageLocation::parse("/search/?q=x"),
            Err(LocationError::Parse(_))
        ));
        assert!(matches!(
            PageLocation::parse("file:///tmp/index.html"),
            Err(LocationError::UnsupportedScheme(_))
        ));
    }
}
