//! `<link>` interpreter: favicon and canonical URL.

use scraper::ElementRef;

use super::Contribute;
use crate::config::{CANONICAL_REL, ICON_RELS};
use crate::models::OpenGraph;

pub(super) struct LinkTag<'a> {
    rel: Option<&'a str>,
    href: Option<&'a str>,
}

impl<'a> LinkTag<'a> {
    pub(super) fn new(element: ElementRef<'a>) -> Self {
        let attrs = element.value();
        Self {
            rel: attrs.attr("rel").map(str::trim),
            href: attrs.attr("href").map(str::trim).filter(|h| !h.is_empty()),
        }
    }

    fn is_icon(&self) -> bool {
        self.rel
            .is_some_and(|rel| ICON_RELS.iter().any(|icon| rel.eq_ignore_ascii_case(icon)))
    }

    fn is_canonical(&self) -> bool {
        self.rel
            .is_some_and(|rel| rel.eq_ignore_ascii_case(CANONICAL_REL))
    }
}

impl Contribute for LinkTag<'_> {
    fn contribute(&self, og: &mut OpenGraph) {
        let Some(href) = self.href else {
            return;
        };

        if self.is_icon() {
            log::debug!("favicon <- {:?}", href);
            og.favicon = href.to_string();
        } else if self.is_canonical() && og.canonical_url.is_empty() {
            log::debug!("canonical_url <- <link rel=canonical> {:?}", href);
            og.canonical_url = href.to_string();
        }
    }
}
