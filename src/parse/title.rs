//! `<title>` interpreter.

use scraper::ElementRef;

use super::Contribute;
use crate::models::OpenGraph;

/// A plain HTML `<title>` element.
pub(super) struct TitleTag {
    text: String,
}

impl TitleTag {
    pub(super) fn new(element: ElementRef<'_>) -> Self {
        // text() decodes entities and concatenates nested text nodes
        let text = element.text().collect::<String>().trim().to_string();
        Self { text }
    }
}

impl Contribute for TitleTag {
    /// Fills `title` only while it is empty, so `og:title` always wins.
    fn contribute(&self, og: &mut OpenGraph) {
        if self.text.is_empty() {
            return;
        }
        if !og.title.is_empty() {
            log::trace!("Keeping title {:?} over <title> {:?}", og.title, self.text);
            return;
        }
        log::debug!("title <- <title> {:?}", self.text);
        og.title = self.text.clone();
    }
}
