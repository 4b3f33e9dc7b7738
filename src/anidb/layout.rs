//! Page-structure layer for the AniDB catalog.
//!
//! Everything tied to the site's current HTML layout lives behind
//! [`AnidbLayout`], so a markup change only touches this module.

use std::sync::LazyLock;

use scraper::Selector;

use crate::convert::NativeId;
use crate::page::Page;

// Selectors are compile-time constants; Selector::parse cannot fail on them.
static AUTH_MENU: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("li.sub-menu.my").expect("invalid auth menu selector"));
static POPULAR_ANCHORS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td.name.anime a").expect("invalid popular selector"));
static RELATION_AREAS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("area").expect("invalid relation selector"));
static TAG_ANCHORS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td.name.main.anime a").expect("invalid tag selector"));
static NEXT_PAGE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("li.next a").expect("invalid next page selector"));

/// Extraction strategy for AniDB pages.
pub trait AnidbLayout {
    /// Whether the page carries the authenticated-menu marker.
    fn logged_in(&self, page: &Page) -> bool;

    /// Anchor hrefs of the popularity listing, in document order.
    fn popular_hrefs(&self, page: &Page) -> Vec<String>;

    /// Image-map area hrefs of the relation graph.
    fn relation_hrefs(&self, page: &Page) -> Vec<String>;

    /// The confirmation text for `id` on its detail page: an element
    /// whose own text equals the provider tag `a{id}`.
    fn id_confirmation(&self, page: &Page, id: NativeId) -> Option<String>;

    /// Anchor hrefs of one tag-listing page, in document order.
    fn tag_hrefs(&self, page: &Page) -> Vec<String>;

    /// Relative href of the next tag-listing page, if any.
    fn next_page_href(&self, page: &Page) -> Option<String>;
}

/// Layout of the current AniDB page markup.
#[derive(Debug, Default)]
pub struct DefaultAnidbLayout;

impl AnidbLayout for DefaultAnidbLayout {
    fn logged_in(&self, page: &Page) -> bool {
        !page.attrs(&AUTH_MENU, "title").is_empty()
    }

    fn popular_hrefs(&self, page: &Page) -> Vec<String> {
        page.attrs(&POPULAR_ANCHORS, "href")
    }

    fn relation_hrefs(&self, page: &Page) -> Vec<String> {
        page.attrs(&RELATION_AREAS, "href")
    }

    fn id_confirmation(&self, page: &Page, id: NativeId) -> Option<String> {
        page.find_own_text(&format!("a{id}"))
    }

    fn tag_hrefs(&self, page: &Page) -> Vec<String> {
        page.attrs(&TAG_ANCHORS, "href")
    }

    fn next_page_href(&self, page: &Page) -> Option<String> {
        page.attrs(&NEXT_PAGE, "href").into_iter().next()
    }
}
