//! Page-structure layer for the TVDb catalog.
//!
//! All coupling to the site's current markup lives behind [`TvdbLayout`]
//! so a layout change only touches this module.

use std::sync::LazyLock;

use scraper::Selector;

use crate::convert::NativeId;
use crate::page::Page;
use crate::tvdb::MediaType;

// Selectors are compile-time constants; Selector::parse cannot fail on them.
static ENGLISH_TITLE: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"div.change_translation_text[data-language="eng"]"#)
        .expect("invalid title selector")
});
static POSTER: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("div.row.hidden-xs.hidden-sm > div > img").expect("invalid poster selector")
});
static SUMMARY: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"div.block > div:not([style="display:none"]) > p"#)
        .expect("invalid summary selector")
});
static LIST_ROWS: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("div.col-xs-12.col-sm-12.col-md-8.col-lg-8.col-md-pull-4 > div.row")
        .expect("invalid list row selector")
});
static ROW_LINK: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("div.col-xs-12.col-sm-9.mt-2 a").expect("invalid row link selector")
});

/// One entry of a list page. Fields are optional so a malformed row can
/// be reported and skipped by the caller instead of aborting the list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListRow {
    pub title: Option<String>,
    pub href: Option<String>,
}

/// Extraction strategy for TVDb pages.
pub trait TvdbLayout {
    /// The provider's own numeric ID, from the caption/value pair keyed
    /// by `TheTVDB.com {Series|Movie} ID`.
    fn native_id(&self, page: &Page, media_type: MediaType) -> Option<NativeId>;

    /// English-localized title from the translation block.
    fn english_title(&self, page: &Page) -> Option<String>;

    fn poster_path(&self, page: &Page) -> Option<String>;

    /// First artwork link following the `Backgrounds` heading.
    fn background_path(&self, page: &Page) -> Option<String>;

    fn summary(&self, page: &Page) -> Option<String>;

    /// Href of the external TheMovieDB.com link, if present.
    fn tmdb_link(&self, page: &Page) -> Option<String>;

    /// Href of the external IMDB link, if present.
    fn imdb_link(&self, page: &Page) -> Option<String>;

    /// Per-row title and item link of a list page, in document order.
    fn list_rows(&self, page: &Page) -> Vec<ListRow>;

    /// Description paragraph of a list page.
    fn list_description(&self, page: &Page) -> Option<String>;
}

/// Layout of the current TVDb page markup.
#[derive(Debug, Default)]
pub struct DefaultTvdbLayout;

impl TvdbLayout for DefaultTvdbLayout {
    fn native_id(&self, page: &Page, media_type: MediaType) -> Option<NativeId> {
        page.labeled_value(&format!("TheTVDB.com {media_type} ID"))
            .and_then(|value| value.trim().parse().ok())
    }

    fn english_title(&self, page: &Page) -> Option<String> {
        page.attrs(&ENGLISH_TITLE, "data-title").into_iter().next()
    }

    fn poster_path(&self, page: &Page) -> Option<String> {
        page.attrs(&POSTER, "src").into_iter().next()
    }

    fn background_path(&self, page: &Page) -> Option<String> {
        page.first_href_after_heading("h2", "Backgrounds")
    }

    fn summary(&self, page: &Page) -> Option<String> {
        page.texts(&SUMMARY).into_iter().next()
    }

    fn tmdb_link(&self, page: &Page) -> Option<String> {
        page.href_of_text("TheMovieDB.com")
    }

    fn imdb_link(&self, page: &Page) -> Option<String> {
        page.href_of_text("IMDB")
    }

    fn list_rows(&self, page: &Page) -> Vec<ListRow> {
        page.select(&LIST_ROWS)
            .map(|row| {
                let link = row.select(&ROW_LINK).next();
                ListRow {
                    title: link.map(|a| a.text().collect::<String>().trim().to_string()),
                    href: link
                        .and_then(|a| a.value().attr("href"))
                        .map(str::to_string),
                }
            })
            .collect()
    }

    fn list_description(&self, page: &Page) -> Option<String> {
        page.texts(&SUMMARY).into_iter().next()
    }
}
