//! opengraph library: Open Graph metadata extraction
//!
//! Walks the `<head>` of an HTML document and collects the page's title, type,
//! canonical URL, images, videos, audio, locale and favicon according to the
//! Open Graph protocol (<https://ogp.me>), with plain-HTML fallbacks for the
//! title, description, canonical URL and favicon.
//!
//! # Example
//!
//! ```
//! use opengraph::OpenGraph;
//!
//! let html = r#"<html><head>
//!     <title>Plain Title</title>
//!     <meta property="og:title" content="Open Graph Title">
//!     <meta property="og:type" content="website">
//!     <meta property="og:image" content="/images/01.png">
//!     <link rel="icon" href="/images/01.favicon.png">
//! </head><body></body></html>"#;
//!
//! let mut og = OpenGraph::new("http://example.com/html/01.html");
//! og.parse(html.as_bytes())?;
//! og.to_absolute_urls().fulfill()?;
//!
//! assert_eq!(og.title, "Open Graph Title");
//! assert_eq!(og.og_type, "website");
//! assert_eq!(og.images[0].url, "http://example.com/images/01.png");
//! assert_eq!(og.favicon, "http://example.com/images/01.favicon.png");
//! assert_eq!(og.site_name, "example.com");
//! # Ok::<(), opengraph::OpenGraphError>(())
//! ```
//!
//! Fetching the page is left to the caller: [`OpenGraph::parse`] accepts any
//! [`std::io::Read`].

#![warn(missing_docs)]

pub mod config;
mod error_handling;
pub mod initialization;
mod models;
mod parse;
mod resolve;

// Re-export public API
pub use error_handling::{InitializationError, OpenGraphError};
pub use models::{OgAudio, OgImage, OgVideo, OpenGraph, PageUrl};
pub use resolve::absolutize;
