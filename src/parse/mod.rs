//! Tree walk and tag interpretation.
//!
//! [`OpenGraph::parse`] turns an HTML stream into a node tree with `scraper`,
//! then walks it depth-first in document order. Each `<title>`, `<meta>` and
//! `<link>` element is handed to its interpreter, which writes into the record.
//! Descent stops at `<body>`: metadata is expected in `<head>`.
//!
//! Because interpreters overwrite scalar fields, the later of two conflicting
//! tags wins. The exceptions are the plain-HTML fallbacks (`<title>`,
//! `<meta name="description">`, `<link rel="canonical">`), which only fill a
//! field that is still empty.

mod link;
mod meta;
mod title;

use std::io::Read;

use log::trace;
use scraper::{ElementRef, Html};

use crate::error_handling::OpenGraphError;
use crate::models::OpenGraph;

use link::LinkTag;
use meta::MetaTag;
use title::TitleTag;

/// A recognized element that knows how to write itself into the record.
///
/// Missing or empty attributes mean there is nothing to contribute; an
/// implementation never fails.
trait Contribute {
    fn contribute(&self, og: &mut OpenGraph);
}

impl OpenGraph {
    /// Reads `body` to the end, parses it as HTML and fills the record.
    ///
    /// The caller owns `body` and is responsible for closing it.
    ///
    /// # Errors
    ///
    /// - [`OpenGraphError::InvalidPageUrl`] if the page URL failed to parse at
    ///   construction. `body` is not read.
    /// - [`OpenGraphError::ReadError`] if `body` cannot be read.
    ///
    /// # Examples
    ///
    /// ```
    /// use opengraph::OpenGraph;
    ///
    /// let html = r#"<html><head>
    ///     <meta property="og:title" content="Open Graph Title">
    ///     <meta property="og:image" content="/images/01.png">
    /// </head></html>"#;
    ///
    /// let mut og = OpenGraph::new("http://example.com/html/01.html");
    /// og.parse(html.as_bytes())?;
    /// assert_eq!(og.title, "Open Graph Title");
    /// assert_eq!(og.images[0].url, "/images/01.png");
    /// # Ok::<(), opengraph::OpenGraphError>(())
    /// ```
    pub fn parse<R: Read>(&mut self, mut body: R) -> Result<(), OpenGraphError> {
        if let Some(e) = self.error() {
            return Err(OpenGraphError::InvalidPageUrl(e));
        }

        let mut raw = Vec::new();
        body.read_to_end(&mut raw)?;
        // html5ever recovers from any markup; only the bytes need to be text
        let html = String::from_utf8_lossy(&raw);
        let document = Html::parse_document(&html);

        self.walk(document.root_element());
        log::debug!(
            "Parsed {}: title={:?}, {} images, {} videos, {} audios",
            self.url.source,
            self.title,
            self.images.len(),
            self.videos.len(),
            self.audios.len()
        );
        Ok(())
    }

    /// Whether the walk can stop early. Nothing short-circuits yet.
    fn satisfied(&self) -> bool {
        false
    }

    /// Pre-order walk over an explicit stack, so nesting depth is bounded by
    /// heap rather than thread stack.
    fn walk(&mut self, root: ElementRef<'_>) {
        let mut stack = vec![root];

        while !self.satisfied() {
            let Some(element) = stack.pop() else {
                break;
            };

            match element.value().name() {
                "body" => trace!("Reached <body>; not descending"),
                "title" => TitleTag::new(element).contribute(self),
                "meta" => MetaTag::new(element).contribute(self),
                "link" => LinkTag::new(element).contribute(self),
                _ => {
                    // Reversed so the first child is popped first
                    stack.extend(element.children().rev().filter_map(ElementRef::wrap));
                }
            }
        }
    }
}
