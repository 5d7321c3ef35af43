//! The Open Graph record and its media entries.
//!
//! [`OpenGraph`] is the accumulator the tag interpreters write into during a
//! walk and the final output handed back to the caller. Scalar fields hold the
//! most recently contributed value; media lists and locale alternates only grow.
//!
//! A record is owned by a single `new -> parse -> [to_absolute_urls] -> [fulfill]`
//! sequence. It is not synchronized: callers sharing one record across threads
//! must wrap it themselves, and two `parse` calls must never run on it at once.

use serde::Serialize;
use url::Url;

use crate::config::DEFAULT_FAVICON;
use crate::error_handling::OpenGraphError;

/// The page address given at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageUrl {
    /// Canonical string form of the parsed URL (empty if parsing failed).
    pub source: String,
    /// Decomposed URL, used as the base for absolutization.
    pub parsed: Option<Url>,
}

/// One `og:image` entry plus its structured properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OgImage {
    /// `og:image` / `og:image:url`
    pub url: String,
    /// `:secure_url`, the HTTPS variant of `url`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secure_url: Option<String>,
    /// `:type`, a MIME type
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// `:width` in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// `:height` in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// `:alt` text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// One `og:video` entry plus its structured properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OgVideo {
    /// `og:video` / `og:video:url`
    pub url: String,
    /// `:secure_url`, the HTTPS variant of `url`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secure_url: Option<String>,
    /// `:type`, a MIME type
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// `:width` in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// `:height` in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// One `og:audio` entry plus its structured properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OgAudio {
    /// `og:audio` / `og:audio:url`
    pub url: String,
    /// `:secure_url`, the HTTPS variant of `url`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secure_url: Option<String>,
    /// `:type`, a MIME type
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

impl OgImage {
    /// An image entry with only its URL set.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

impl OgVideo {
    /// A video entry with only its URL set.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

impl OgAudio {
    /// An audio entry with only its URL set.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

/// Web page information according to the Open Graph protocol (<https://ogp.me>),
/// plus a favicon and a few fallbacks taken from plain HTML.
#[derive(Debug, Clone, Serialize)]
pub struct OpenGraph {
    // Basics
    /// `og:title`, or the first non-empty `<title>` when no `og:title` is present.
    pub title: String,
    /// `og:type`, e.g. `website` or `article`.
    #[serde(rename = "type")]
    pub og_type: String,
    /// The page URL given to [`OpenGraph::new`].
    pub url: PageUrl,
    /// `og:site_name`; [`OpenGraph::fulfill`] defaults it to the page host.
    pub site_name: String,
    /// `og:url`, or `<link rel="canonical">` when no `og:url` is present.
    pub canonical_url: String,

    // Structures
    /// Every `og:image`, in document order.
    pub images: Vec<OgImage>,
    /// Every `og:video`, in document order.
    pub videos: Vec<OgVideo>,
    /// Every `og:audio`, in document order.
    pub audios: Vec<OgAudio>,

    // Optionals
    /// `og:description`, or `<meta name="description">` when absent.
    pub description: String,
    /// `og:determiner` (`a`, `an`, `the`, `auto` or empty).
    pub determiner: String,
    /// `og:locale`
    pub locale: String,
    /// Every `og:locale:alternate`, in document order.
    pub locale_alternates: Vec<String>,

    // Additionals
    /// `<link rel="icon">` href; starts as `/favicon.ico`.
    pub favicon: String,

    #[serde(skip)]
    error: Option<url::ParseError>,
}

impl OpenGraph {
    /// Creates an empty record for the page at `raw_url`.
    ///
    /// Never fails. If `raw_url` is not an absolute URL the parse failure is kept
    /// on the record (see [`OpenGraph::error`]) and every later `parse` call
    /// returns it without reading its input.
    ///
    /// # Examples
    ///
    /// ```
    /// use opengraph::OpenGraph;
    ///
    /// let og = OpenGraph::new("http://example.com/dir/page.html");
    /// assert!(og.error().is_none());
    /// assert_eq!(og.favicon, "/favicon.ico");
    ///
    /// let broken = OpenGraph::new("not a url");
    /// assert!(broken.error().is_some());
    /// ```
    pub fn new(raw_url: &str) -> Self {
        let mut og = Self {
            title: String::new(),
            og_type: String::new(),
            url: PageUrl::default(),
            site_name: String::new(),
            canonical_url: String::new(),
            images: Vec::new(),
            videos: Vec::new(),
            audios: Vec::new(),
            description: String::new(),
            determiner: String::new(),
            locale: String::new(),
            locale_alternates: Vec::new(),
            favicon: DEFAULT_FAVICON.to_string(),
            error: None,
        };

        match Url::parse(raw_url) {
            Ok(parsed) => {
                og.url = PageUrl {
                    source: parsed.to_string(),
                    parsed: Some(parsed),
                };
            }
            Err(e) => {
                log::debug!("Page URL {:?} did not parse: {}", raw_url, e);
                og.error = Some(e);
            }
        }

        og
    }

    /// The construction error, if the page URL failed to parse.
    pub fn error(&self) -> Option<url::ParseError> {
        self.error
    }

    /// Fills fields the page left empty with values derived from its URL.
    ///
    /// Currently a single rule: an empty `site_name` becomes the page host
    /// (with `:port` when the URL carries a non-default port). Calling it again
    /// changes nothing.
    ///
    /// # Errors
    ///
    /// None today; the `Result` leaves room for rules that can fail.
    pub fn fulfill(&mut self) -> Result<&mut Self, OpenGraphError> {
        if self.site_name.is_empty() {
            if let Some(host) = self.url.parsed.as_ref().and_then(host_with_port) {
                log::debug!("Defaulting site_name to {}", host);
                self.site_name = host;
            }
        }
        Ok(self)
    }
}

/// Host plus `:port` when the URL carries a non-default port.
fn host_with_port(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_valid_url() {
        let og = OpenGraph::new("http://example.com/dir/page.html");
        assert!(og.error().is_none());
        assert_eq!(og.url.source, "http://example.com/dir/page.html");
        let parsed = og.url.parsed.as_ref().expect("parsed URL");
        assert_eq!(parsed.scheme(), "http");
        assert_eq!(parsed.host_str(), Some("example.com"));
        assert_eq!(parsed.path(), "/dir/page.html");
    }

    #[test]
    fn test_new_canonicalizes_source() {
        // The source is the parsed URL's string form, not the raw input
        let og = OpenGraph::new("HTTP://Example.COM");
        assert_eq!(og.url.source, "http://example.com/");
    }

    #[test]
    fn test_new_defaults() {
        let og = OpenGraph::new("https://example.com/");
        assert_eq!(og.favicon, "/favicon.ico");
        assert!(og.title.is_empty());
        assert!(og.og_type.is_empty());
        assert!(og.site_name.is_empty());
        assert!(og.images.is_empty());
        assert!(og.videos.is_empty());
        assert!(og.audios.is_empty());
        assert!(og.locale_alternates.is_empty());
    }

    #[test]
    fn test_new_with_invalid_url_keeps_defaults() {
        let og = OpenGraph::new("::not a url::");
        assert!(og.error().is_some());
        assert!(og.url.parsed.is_none());
        assert!(og.url.source.is_empty());
        assert_eq!(og.favicon, "/favicon.ico");
        assert!(og.images.is_empty());
    }

    #[test]
    fn test_new_rejects_relative_url() {
        let og = OpenGraph::new("/just/a/path");
        assert_eq!(og.error(), Some(url::ParseError::RelativeUrlWithoutBase));
    }

    #[test]
    fn test_fulfill_sets_site_name_from_host() {
        let mut og = OpenGraph::new("https://blog.example.com/post/1");
        og.fulfill().expect("fulfill");
        assert_eq!(og.site_name, "blog.example.com");
    }

    #[test]
    fn test_fulfill_keeps_port() {
        let mut og = OpenGraph::new("http://localhost:8080/");
        og.fulfill().expect("fulfill");
        assert_eq!(og.site_name, "localhost:8080");
    }

    #[test]
    fn test_fulfill_does_not_override_site_name() {
        let mut og = OpenGraph::new("https://example.com/");
        og.site_name = "Example Site".to_string();
        og.fulfill().expect("fulfill");
        assert_eq!(og.site_name, "Example Site");
    }

    #[test]
    fn test_fulfill_is_idempotent() {
        let mut og = OpenGraph::new("https://example.com/a");
        og.fulfill().expect("fulfill");
        let first = og.site_name.clone();
        og.fulfill().expect("fulfill");
        assert_eq!(og.site_name, first);
        assert_eq!(og.site_name, "example.com");
    }

    #[test]
    fn test_fulfill_returns_record_for_chaining() {
        let mut og = OpenGraph::new("http://example.com/dir/page.html");
        og.images.push(OgImage::new("a.png"));
        og.fulfill()
            .expect("fulfill never fails today")
            .to_absolute_urls();
        assert_eq!(og.site_name, "example.com");
        assert_eq!(og.images[0].url, "http://example.com/dir/a.png");
    }

    #[test]
    fn test_fulfill_without_parsed_url_is_noop() {
        let mut og = OpenGraph::new("not a url");
        og.fulfill().expect("fulfill");
        assert!(og.site_name.is_empty());
    }

    #[test]
    fn test_serialize_uses_og_field_names() {
        let mut og = OpenGraph::new("https://example.com/");
        og.og_type = "website".to_string();
        let mut image = OgImage::new("/a.png");
        image.mime_type = Some("image/png".to_string());
        og.images.push(image);

        let json = serde_json::to_value(&og).expect("serializable");
        assert_eq!(json["type"], "website");
        assert_eq!(json["images"][0]["url"], "/a.png");
        assert_eq!(json["images"][0]["type"], "image/png");
        assert!(json["images"][0].get("width").is_none());
        assert_eq!(json["url"]["source"], "https://example.com/");
        assert!(json.get("error").is_none());
    }
}
