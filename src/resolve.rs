//! Relative-to-absolute URL resolution.
//!
//! Pages commonly declare images and icons with relative paths (`/img/a.png`,
//! `thumb.jpg`). [`OpenGraph::to_absolute_urls`] rewrites them against the
//! page's own address so the record can be used away from the page.

use url::Url;

use crate::models::OpenGraph;

/// Makes `candidate` absolute against `base`.
///
/// - Already-absolute URLs (anything with a scheme) are returned unchanged.
/// - Paths starting with `/` resolve against the base host root.
/// - Other relative paths resolve against the directory of the base path.
///
/// A candidate that cannot be parsed or joined is returned unchanged.
pub fn absolutize(candidate: &str, base: &Url) -> String {
    match Url::parse(candidate) {
        Ok(_) => candidate.to_string(),
        Err(url::ParseError::RelativeUrlWithoutBase) => match base.join(candidate) {
            Ok(joined) => joined.to_string(),
            Err(e) => {
                log::debug!("Could not resolve {:?} against {}: {}", candidate, base, e);
                candidate.to_string()
            }
        },
        Err(e) => {
            log::debug!("Leaving unparsable URL {:?} as is: {}", candidate, e);
            candidate.to_string()
        }
    }
}

impl OpenGraph {
    /// Rewrites image URLs and the favicon to absolute form using the page URL.
    ///
    /// Video and audio URLs are left as found. Does nothing when the page URL
    /// failed to parse at construction.
    ///
    /// # Examples
    ///
    /// ```
    /// use opengraph::{OgImage, OpenGraph};
    ///
    /// let mut og = OpenGraph::new("http://example.com/dir/page.html");
    /// og.images.push(OgImage::new("y.png"));
    /// og.to_absolute_urls();
    /// assert_eq!(og.images[0].url, "http://example.com/dir/y.png");
    /// assert_eq!(og.favicon, "http://example.com/favicon.ico");
    /// ```
    pub fn to_absolute_urls(&mut self) -> &mut Self {
        let Some(base) = self.url.parsed.clone() else {
            log::debug!("No parsed page URL; leaving URLs relative");
            return self;
        };

        for image in &mut self.images {
            image.url = absolutize(&image.url, &base);
        }
        self.favicon = absolutize(&self.favicon, &base);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OgImage, OgVideo};

    fn base() -> Url {
        Url::parse("http://example.com/dir/page.html").expect("valid base")
    }

    #[test]
    fn test_absolutize_root_relative() {
        assert_eq!(absolutize("/x.png", &base()), "http://example.com/x.png");
    }

    #[test]
    fn test_absolutize_directory_relative() {
        assert_eq!(absolutize("y.png", &base()), "http://example.com/dir/y.png");
    }

    #[test]
    fn test_absolutize_parent_segment() {
        assert_eq!(
            absolutize("../img/z.png", &base()),
            "http://example.com/img/z.png"
        );
    }

    #[test]
    fn test_absolutize_keeps_absolute() {
        assert_eq!(
            absolutize("https://cdn.example.org/a.png", &base()),
            "https://cdn.example.org/a.png"
        );
    }

    #[test]
    fn test_absolutize_keeps_data_uri() {
        let data = "data:image/png;base64,iVBORw0KGgo=";
        assert_eq!(absolutize(data, &base()), data);
    }

    #[test]
    fn test_absolutize_keeps_query() {
        assert_eq!(
            absolutize("thumb.jpg?w=200", &base()),
            "http://example.com/dir/thumb.jpg?w=200"
        );
    }

    #[test]
    fn test_absolutize_keeps_base_port() {
        let base = Url::parse("http://localhost:8080/a/b").expect("valid base");
        assert_eq!(absolutize("/c.png", &base), "http://localhost:8080/c.png");
    }

    #[test]
    fn test_absolutize_unparsable_is_unchanged() {
        // Invalid port: fails with something other than "relative without base"
        let bad = "http://example.com:99999/a.png";
        assert_eq!(absolutize(bad, &base()), bad);
    }

    #[test]
    fn test_to_absolute_urls_rewrites_images_and_favicon() {
        let mut og = OpenGraph::new("http://example.com/dir/page.html");
        og.images.push(OgImage::new("/x.png"));
        og.images.push(OgImage::new("y.png"));
        og.images.push(OgImage::new("http://other.example/z.png"));
        og.favicon = "icons/fav.png".to_string();

        og.to_absolute_urls();

        assert_eq!(og.images[0].url, "http://example.com/x.png");
        assert_eq!(og.images[1].url, "http://example.com/dir/y.png");
        assert_eq!(og.images[2].url, "http://other.example/z.png");
        assert_eq!(og.favicon, "http://example.com/dir/icons/fav.png");
    }

    #[test]
    fn test_to_absolute_urls_leaves_videos_relative() {
        let mut og = OpenGraph::new("http://example.com/dir/page.html");
        og.videos.push(OgVideo::new("/clip.mp4"));
        og.to_absolute_urls();
        assert_eq!(og.videos[0].url, "/clip.mp4");
    }

    #[test]
    fn test_to_absolute_urls_without_base_is_noop() {
        let mut og = OpenGraph::new("not a url");
        og.images.push(OgImage::new("/x.png"));
        og.to_absolute_urls();
        assert_eq!(og.images[0].url, "/x.png");
        assert_eq!(og.favicon, "/favicon.ico");
    }

    #[test]
    fn test_to_absolute_urls_twice_is_stable() {
        let mut og = OpenGraph::new("http://example.com/dir/page.html");
        og.images.push(OgImage::new("y.png"));
        og.to_absolute_urls().to_absolute_urls();
        assert_eq!(og.images[0].url, "http://example.com/dir/y.png");
    }
}
