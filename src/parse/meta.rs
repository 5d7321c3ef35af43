//! `<meta>` interpreter: Open Graph properties and the plain description.
//!
//! Root media properties (`og:image`, `og:video`, `og:audio` and their `:url`
//! aliases) always start a new entry. Structured properties such as
//! `og:image:width` attach to the most recently started entry of the same kind
//! and are dropped if no entry exists yet.

use scraper::ElementRef;
use strum_macros::EnumString;

use super::Contribute;
use crate::config::{META_DESCRIPTION_NAME, OG_NAMESPACE};
use crate::models::{OgAudio, OgImage, OgVideo, OpenGraph};

/// The Open Graph vocabulary this crate understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(ascii_case_insensitive)]
enum OgProperty {
    #[strum(serialize = "og:title")]
    Title,
    #[strum(serialize = "og:type")]
    Type,
    #[strum(serialize = "og:url")]
    Url,
    #[strum(serialize = "og:site_name")]
    SiteName,
    #[strum(serialize = "og:description")]
    Description,
    #[strum(serialize = "og:determiner")]
    Determiner,
    #[strum(serialize = "og:locale")]
    Locale,
    #[strum(serialize = "og:locale:alternate")]
    LocaleAlternate,

    #[strum(serialize = "og:image", serialize = "og:image:url")]
    Image,
    #[strum(serialize = "og:image:secure_url")]
    ImageSecureUrl,
    #[strum(serialize = "og:image:type")]
    ImageType,
    #[strum(serialize = "og:image:width")]
    ImageWidth,
    #[strum(serialize = "og:image:height")]
    ImageHeight,
    #[strum(serialize = "og:image:alt")]
    ImageAlt,

    #[strum(serialize = "og:video", serialize = "og:video:url")]
    Video,
    #[strum(serialize = "og:video:secure_url")]
    VideoSecureUrl,
    #[strum(serialize = "og:video:type")]
    VideoType,
    #[strum(serialize = "og:video:width")]
    VideoWidth,
    #[strum(serialize = "og:video:height")]
    VideoHeight,

    #[strum(serialize = "og:audio", serialize = "og:audio:url")]
    Audio,
    #[strum(serialize = "og:audio:secure_url")]
    AudioSecureUrl,
    #[strum(serialize = "og:audio:type")]
    AudioType,
}

/// A `<meta>` element reduced to its key and content.
///
/// The key comes from `property`, falling back to `name`, since many pages
/// write `<meta name="og:title">`.
pub(super) struct MetaTag<'a> {
    key: Option<&'a str>,
    content: Option<&'a str>,
}

impl<'a> MetaTag<'a> {
    pub(super) fn new(element: ElementRef<'a>) -> Self {
        let attrs = element.value();
        Self {
            key: attrs
                .attr("property")
                .or_else(|| attrs.attr("name"))
                .map(str::trim),
            content: attrs
                .attr("content")
                .map(str::trim)
                .filter(|c| !c.is_empty()),
        }
    }
}

impl Contribute for MetaTag<'_> {
    fn contribute(&self, og: &mut OpenGraph) {
        let (Some(key), Some(content)) = (self.key, self.content) else {
            return;
        };

        if key.eq_ignore_ascii_case(META_DESCRIPTION_NAME) {
            if og.description.is_empty() {
                log::debug!("description <- <meta name=description> {:?}", content);
                og.description = content.to_string();
            }
            return;
        }

        let is_og = key
            .get(..OG_NAMESPACE.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(OG_NAMESPACE));
        if !is_og {
            return;
        }

        match key.parse::<OgProperty>() {
            Ok(property) => {
                log::debug!("{} <- {:?}", key, content);
                apply(property, content, og);
            }
            Err(_) => log::trace!("Ignoring unknown property {:?}", key),
        }
    }
}

fn apply(property: OgProperty, content: &str, og: &mut OpenGraph) {
    use OgProperty::*;

    let value = content.to_string();
    match property {
        Title => og.title = value,
        Type => og.og_type = value,
        Url => og.canonical_url = value,
        SiteName => og.site_name = value,
        Description => og.description = value,
        Determiner => og.determiner = value,
        Locale => og.locale = value,
        LocaleAlternate => og.locale_alternates.push(value),

        Image => og.images.push(OgImage::new(value)),
        ImageSecureUrl => with_current(og.images.last_mut(), property, |i| {
            i.secure_url = Some(value)
        }),
        ImageType => with_current(og.images.last_mut(), property, |i| {
            i.mime_type = Some(value)
        }),
        ImageWidth => with_current(og.images.last_mut(), property, |i| {
            set_dimension(&mut i.width, content, property)
        }),
        ImageHeight => with_current(og.images.last_mut(), property, |i| {
            set_dimension(&mut i.height, content, property)
        }),
        ImageAlt => with_current(og.images.last_mut(), property, |i| i.alt = Some(value)),

        Video => og.videos.push(OgVideo::new(value)),
        VideoSecureUrl => with_current(og.videos.last_mut(), property, |v| {
            v.secure_url = Some(value)
        }),
        VideoType => with_current(og.videos.last_mut(), property, |v| {
            v.mime_type = Some(value)
        }),
        VideoWidth => with_current(og.videos.last_mut(), property, |v| {
            set_dimension(&mut v.width, content, property)
        }),
        VideoHeight => with_current(og.videos.last_mut(), property, |v| {
            set_dimension(&mut v.height, content, property)
        }),

        Audio => og.audios.push(OgAudio::new(value)),
        AudioSecureUrl => with_current(og.audios.last_mut(), property, |a| {
            a.secure_url = Some(value)
        }),
        AudioType => with_current(og.audios.last_mut(), property, |a| {
            a.mime_type = Some(value)
        }),
    }
}

/// Applies `update` to the current (last appended) entry, if there is one.
fn with_current<T>(current: Option<&mut T>, property: OgProperty, update: impl FnOnce(&mut T)) {
    match current {
        Some(entry) => update(entry),
        None => log::debug!("Dropping {:?}: no entry to attach it to", property),
    }
}

fn set_dimension(slot: &mut Option<u32>, content: &str, property: OgProperty) {
    match content.parse::<u32>() {
        Ok(n) => *slot = Some(n),
        Err(e) => log::debug!("Skipping {:?} {:?}: {}", property, content, e),
    }
}
