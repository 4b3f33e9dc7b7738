//! TVDb client.
//!
//! Resolves TV/movie catalog queries (direct ID, URL, or list page) into
//! `(movie_ids, show_ids)`. Movie results are expressed in the target
//! namespace through cross-reference discovery on the detail page; show
//! results stay TVDb-native.

pub mod layout;

use std::fmt;
use std::thread;
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, error, info};

use crate::BuilderData;
use crate::convert::{IdConverter, MovieId, NativeId, ShowId};
use crate::error::ResolutionError;
use crate::fetch::Fetcher;
use crate::ids;
use crate::page::Page;
use layout::{DefaultTvdbLayout, TvdbLayout};

/// Read-only host table and request pacing for the TVDb client.
///
/// Section prefixes are derived from the two accepted hosts so a host
/// override keeps every prefix consistent.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TvdbEndpoints {
    pub base_url: String,
    pub alt_url: String,
    /// Pause between successive rows during list traversal.
    pub courtesy_delay: Duration,
}

impl Default for TvdbEndpoints {
    fn default() -> Self {
        Self {
            base_url: "https://www.thetvdb.com".to_string(),
            alt_url: "https://thetvdb.com".to_string(),
            courtesy_delay: Duration::from_secs(2),
        }
    }
}

impl TvdbEndpoints {
    fn list_prefix(&self) -> String {
        format!("{}/lists/", self.base_url)
    }

    fn alt_list_prefix(&self) -> String {
        format!("{}/lists/", self.alt_url)
    }

    fn series_prefix(&self) -> String {
        format!("{}/series/", self.base_url)
    }

    fn alt_series_prefix(&self) -> String {
        format!("{}/series/", self.alt_url)
    }

    fn movies_prefix(&self) -> String {
        format!("{}/movies/", self.base_url)
    }

    fn alt_movies_prefix(&self) -> String {
        format!("{}/movies/", self.alt_url)
    }

    /// Numeric "dereferrer" URL form for series lookups by bare ID.
    pub fn series_id_prefix(&self) -> String {
        format!("{}/dereferrer/series/", self.base_url)
    }

    /// Numeric "dereferrer" URL form for movie lookups by bare ID.
    pub fn movie_id_prefix(&self) -> String {
        format!("{}/dereferrer/movie/", self.base_url)
    }
}

/// Media-type context a TVDb URL is resolved in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Series,
    Movie,
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaType::Series => write!(f, "Series"),
            MediaType::Movie => write!(f, "Movie"),
        }
    }
}

/// A record resolved from one TVDb detail page.
///
/// Immutable after construction; the caller usually extracts one ID and
/// discards the rest.
#[derive(Debug, Clone, PartialEq)]
pub struct TvdbItem {
    pub url: String,
    pub media_type: MediaType,
    /// TVDb's own numeric ID.
    pub id: NativeId,
    pub title: String,
    pub poster_path: Option<String>,
    pub background_path: Option<String>,
    pub summary: Option<String>,
    /// Target-namespace movie ID; always present for movies.
    pub tmdb_id: Option<MovieId>,
}

/// One resolution strategy for [`Tvdb::get_items`].
///
/// The `…Details` variants exist for callers that also consume the
/// resolved titles and artwork; they funnel through the same resolution
/// paths as their plain counterparts.
#[derive(Debug, Clone, PartialEq)]
pub enum TvdbBuilder {
    Show(String),
    ShowDetails(String),
    Movie(String),
    MovieDetails(String),
    List(String),
    ListDetails(String),
}

impl TvdbBuilder {
    /// Builds from the string method surface consumed by the pipeline.
    ///
    /// Supported methods: `tvdb_show`, `tvdb_show_details`, `tvdb_movie`,
    /// `tvdb_movie_details`, `tvdb_list`, `tvdb_list_details`.
    pub fn from_method(method: &str, data: BuilderData) -> Result<Self, ResolutionError> {
        let reference = match data {
            BuilderData::Reference(text) => text,
            BuilderData::Id(id) => id.to_string(),
            other => {
                return Err(ResolutionError::InvalidData(format!(
                    "method {method} expects an ID or URL, got {other:?}"
                )));
            }
        };
        match method {
            "tvdb_show" => Ok(Self::Show(reference)),
            "tvdb_show_details" => Ok(Self::ShowDetails(reference)),
            "tvdb_movie" => Ok(Self::Movie(reference)),
            "tvdb_movie_details" => Ok(Self::MovieDetails(reference)),
            "tvdb_list" => Ok(Self::List(reference)),
            "tvdb_list_details" => Ok(Self::ListDetails(reference)),
            _ => Err(ResolutionError::UnsupportedMethod {
                method: method.to_string(),
            }),
        }
    }
}

/// Client for the TVDb catalog.
pub struct Tvdb<F, C>
where
    F: Fetcher,
    C: IdConverter,
{
    fetcher: F,
    converter: C,
    layout: Box<dyn TvdbLayout>,
    endpoints: TvdbEndpoints,
}

impl<F, C> Tvdb<F, C>
where
    F: Fetcher,
    C: IdConverter,
{
    /// Creates a client with the current page layout.
    pub fn new(fetcher: F, converter: C, endpoints: TvdbEndpoints) -> Self {
        Self::with_layout(fetcher, converter, endpoints, Box::new(DefaultTvdbLayout))
    }

    /// Creates a client with a custom extraction strategy.
    pub fn with_layout(
        fetcher: F,
        converter: C,
        endpoints: TvdbEndpoints,
        layout: Box<dyn TvdbLayout>,
    ) -> Self {
        Self {
            fetcher,
            converter,
            layout,
            endpoints,
        }
    }

    /// Resolves one detail page into a [`TvdbItem`].
    ///
    /// The URL must point into the catalog section matching `media_type`
    /// (either accepted host, or the numeric dereferrer form); a
    /// mismatch is fatal, never silently coerced.
    pub fn resolve(
        &self,
        tvdb_url: &str,
        language: &str,
        media_type: MediaType,
    ) -> Result<TvdbItem, ResolutionError> {
        let tvdb_url = tvdb_url.trim();
        let (prefixes, expected) = match media_type {
            MediaType::Series => (
                [
                    self.endpoints.series_prefix(),
                    self.endpoints.alt_series_prefix(),
                    self.endpoints.series_id_prefix(),
                ],
                self.endpoints.series_prefix(),
            ),
            MediaType::Movie => (
                [
                    self.endpoints.movies_prefix(),
                    self.endpoints.alt_movies_prefix(),
                    self.endpoints.movie_id_prefix(),
                ],
                self.endpoints.movies_prefix(),
            ),
        };
        if !prefixes.iter().any(|p| tvdb_url.starts_with(p.as_str())) {
            return Err(ResolutionError::UrlPrefix {
                url: tvdb_url.to_string(),
                expected,
            });
        }

        let page = self.fetcher.fetch(tvdb_url, language, None)?;

        let id = self
            .layout
            .native_id(&page, media_type)
            .ok_or_else(|| self.missing_id_error(tvdb_url, media_type))?;

        let title = self
            .layout
            .english_title(&page)
            .filter(|title| !title.is_empty())
            .ok_or_else(|| {
                ResolutionError::MissingStructure(format!(
                    "name not found from TVDb URL {tvdb_url}"
                ))
            })?;

        let poster_path = self.layout.poster_path(&page).filter(|p| !p.is_empty());
        let background_path = self
            .layout
            .background_path(&page)
            .filter(|p| !p.is_empty());
        let summary = self.layout.summary(&page).filter(|s| !s.is_empty());

        let tmdb_id = match media_type {
            MediaType::Movie => Some(self.movie_target_id(&page, &title)?),
            MediaType::Series => None,
        };

        Ok(TvdbItem {
            url: tvdb_url.to_string(),
            media_type,
            id,
            title,
            poster_path,
            background_path,
            summary,
            tmdb_id,
        })
    }

    /// Error for a page missing its native ID, worded by input form:
    /// dereferrer-movie, dereferrer-series, or plain URL.
    fn missing_id_error(&self, tvdb_url: &str, media_type: MediaType) -> ResolutionError {
        let movie_id_prefix = self.endpoints.movie_id_prefix();
        let series_id_prefix = self.endpoints.series_id_prefix();
        let message = if let Some(id) = tvdb_url.strip_prefix(movie_id_prefix.as_str()) {
            format!("could not find a TVDb movie using TVDb movie ID {id}")
        } else if let Some(id) = tvdb_url.strip_prefix(series_id_prefix.as_str()) {
            format!("could not find a TVDb series using TVDb series ID {id}")
        } else {
            format!("could not find a TVDb {media_type} ID at the URL {tvdb_url}")
        };
        ResolutionError::MissingStructure(message)
    }

    /// Discovers the target-namespace ID of a movie page, trying the
    /// direct TheMovieDB.com link first and the IMDb cross-reference
    /// second. The second is attempted even when the first is present
    /// but unusable.
    fn movie_target_id(&self, page: &Page, title: &str) -> Result<MovieId, ResolutionError> {
        if let Some(href) = self.layout.tmdb_link(page) {
            if let Some(tmdb_id) = ids::first_int(&href) {
                return Ok(tmdb_id);
            }
        }
        if let Some(href) = self.layout.imdb_link(page) {
            if let Some(imdb_id) = ids::imdb_id_from_url(&href) {
                match self.converter.alternate_to_target(&imdb_id, true) {
                    Ok(tmdb_id) => return Ok(tmdb_id),
                    Err(e) => debug!("cross-reference lookup failed for {imdb_id}: {e}"),
                }
            }
        }
        Err(ResolutionError::Conversion(format!(
            "no TMDb ID found for {title}"
        )))
    }

    /// Resolves a series from a bare numeric ID or a complete URL. A
    /// numeric reference is rewritten to the canonical dereferrer form.
    pub fn get_series(&self, language: &str, reference: &str) -> Result<TvdbItem, ResolutionError> {
        let url = match reference.trim().parse::<NativeId>() {
            Ok(id) => format!("{}{id}", self.endpoints.series_id_prefix()),
            Err(_) => reference.to_string(),
        };
        self.resolve(&url, language, MediaType::Series)
    }

    /// Resolves a movie from a bare numeric ID or a complete URL.
    pub fn get_movie(&self, language: &str, reference: &str) -> Result<TvdbItem, ResolutionError> {
        let url = match reference.trim().parse::<NativeId>() {
            Ok(id) => format!("{}{id}", self.endpoints.movie_id_prefix()),
            Err(_) => reference.to_string(),
        };
        self.resolve(&url, language, MediaType::Movie)
    }

    /// Description paragraph of a list page, or an empty string when the
    /// page has none. Absence is never fatal.
    pub fn get_list_description(
        &self,
        tvdb_url: &str,
        language: &str,
    ) -> Result<String, ResolutionError> {
        let page = self.fetcher.fetch(tvdb_url, language, None)?;
        Ok(self
            .layout
            .list_description(&page)
            .filter(|d| !d.is_empty())
            .unwrap_or_default())
    }

    /// Traverses a list page row by row, collecting series native IDs
    /// and movie target IDs. Individual row failures are logged and
    /// skipped; only a list yielding nothing at all is fatal.
    fn ids_from_list_url(
        &self,
        tvdb_url: &str,
        language: &str,
    ) -> Result<(Vec<MovieId>, Vec<ShowId>), ResolutionError> {
        let tvdb_url = tvdb_url.trim();
        let list_prefix = self.endpoints.list_prefix();
        if !(tvdb_url.starts_with(list_prefix.as_str())
            || tvdb_url.starts_with(self.endpoints.alt_list_prefix().as_str()))
        {
            return Err(ResolutionError::UrlPrefix {
                url: tvdb_url.to_string(),
                expected: list_prefix,
            });
        }

        let page = self.fetcher.fetch(tvdb_url, language, None)?;
        let mut movie_ids = Vec::new();
        let mut show_ids = Vec::new();
        for row in self.layout.list_rows(&page) {
            let (Some(title), Some(item_url)) = (row.title, row.href) else {
                error!("TVDb: skipping malformed list row at {tvdb_url}");
                continue;
            };
            if item_url.starts_with("/series/") {
                let full_url = format!("{}{item_url}", self.endpoints.base_url);
                match self.get_series(language, &full_url) {
                    Ok(item) => show_ids.push(item.id),
                    Err(e) => error!("{e} for series {title}"),
                }
            } else if item_url.starts_with("/movies/") {
                let full_url = format!("{}{item_url}", self.endpoints.base_url);
                match self.get_movie(language, &full_url) {
                    Ok(TvdbItem {
                        tmdb_id: Some(tmdb_id),
                        ..
                    }) => movie_ids.push(tmdb_id),
                    Ok(_) => error!("TVDb: no TMDb ID found for movie {title}"),
                    Err(e) => error!("{e} for movie {title}"),
                }
            } else {
                error!("TVDb: skipping unrecognized entry {title}");
            }
            thread::sleep(self.endpoints.courtesy_delay);
        }

        if movie_ids.is_empty() && show_ids.is_empty() {
            return Err(ResolutionError::NoResults(format!(
                "no TVDb IDs found at {tvdb_url}"
            )));
        }
        Ok((movie_ids, show_ids))
    }

    /// Resolves a builder to `(movie_ids, show_ids)`.
    pub fn get_items(
        &self,
        builder: &TvdbBuilder,
        language: &str,
    ) -> Result<(Vec<MovieId>, Vec<ShowId>), ResolutionError> {
        let mut movie_ids = Vec::new();
        let mut show_ids = Vec::new();
        match builder {
            TvdbBuilder::Show(reference) | TvdbBuilder::ShowDetails(reference) => {
                info!("processing TVDb show: {reference}");
                show_ids.push(self.get_series(language, reference)?.id);
            }
            TvdbBuilder::Movie(reference) | TvdbBuilder::MovieDetails(reference) => {
                info!("processing TVDb movie: {reference}");
                if let Some(tmdb_id) = self.get_movie(language, reference)?.tmdb_id {
                    movie_ids.push(tmdb_id);
                }
            }
            TvdbBuilder::List(url) | TvdbBuilder::ListDetails(url) => {
                info!("processing TVDb list: {url}");
                let (movies, shows) = self.ids_from_list_url(url, language)?;
                movie_ids.extend(movies);
                show_ids.extend(shows);
            }
        }
        debug!("{} movie IDs found: {movie_ids:?}", movie_ids.len());
        debug!("{} show IDs found: {show_ids:?}", show_ids.len());
        Ok((movie_ids, show_ids))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockFetcher, StaticConverter};

    fn endpoints() -> TvdbEndpoints {
        TvdbEndpoints {
            courtesy_delay: Duration::ZERO,
            ..TvdbEndpoints::default()
        }
    }

    fn client(fetcher: MockFetcher) -> Tvdb<MockFetcher, StaticConverter> {
        Tvdb::new(fetcher, StaticConverter::default(), endpoints())
    }

    fn series_page(id: NativeId, title: &str) -> String {
        format!(
            r#"<html><body>
                 <div><strong>TheTVDB.com Series ID</strong><span>{id}</span></div>
                 <div class="change_translation_text" data-language="eng" data-title="{title}"></div>
               </body></html>"#
        )
    }

    fn movie_page(id: NativeId, title: &str, links: &str) -> String {
        format!(
            r#"<html><body>
                 <div><strong>TheTVDB.com Movie ID</strong><span>{id}</span></div>
                 <div class="change_translation_text" data-language="eng" data-title="{title}"></div>
                 {links}
               </body></html>"#
        )
    }

    const TMDB_LINK: &str = r#"<a href="https://www.themoviedb.org/movie/603">TheMovieDB.com</a>"#;
    const IMDB_LINK: &str = r#"<a href="https://www.imdb.com/title/tt0133093/">IMDB</a>"#;

    #[test]
    fn test_resolve_rejects_wrong_media_type_prefix() {
        let ep = endpoints();
        let tvdb = client(MockFetcher::new());
        let movie_url = format!("{}the-matrix", ep.movies_prefix());
        let err = tvdb
            .resolve(&movie_url, "en", MediaType::Series)
            .unwrap_err();
        match err {
            ResolutionError::UrlPrefix { expected, .. } => {
                assert_eq!(expected, ep.series_prefix());
            }
            other => panic!("expected UrlPrefix, got {other:?}"),
        }
    }

    #[test]
    fn test_get_series_by_id_and_url_are_equivalent() {
        let ep = endpoints();
        let dereferrer = format!("{}12345", ep.series_id_prefix());
        let fetcher = MockFetcher::new().with_page(&dereferrer, &series_page(12345, "Firefly"));
        let tvdb = client(fetcher);

        let by_id = tvdb.get_series("en", "12345").unwrap();
        let by_url = tvdb.get_series("en", &dereferrer).unwrap();
        assert_eq!(by_id.id, 12345);
        assert_eq!(by_id.id, by_url.id);
        assert_eq!(by_id.title, by_url.title);
    }

    #[test]
    fn test_missing_native_id_message_names_input_form() {
        let ep = endpoints();
        let dereferrer = format!("{}99", ep.movie_id_prefix());
        let fetcher = MockFetcher::new().with_page(&dereferrer, "<html><body></body></html>");
        let tvdb = client(fetcher);
        let err = tvdb.get_movie("en", "99").unwrap_err();
        assert!(err.to_string().contains("TVDb movie ID 99"));

        let url = format!("{}some-show", ep.series_prefix());
        let fetcher = MockFetcher::new().with_page(&url, "<html><body></body></html>");
        let tvdb = client(fetcher);
        let err = tvdb.get_series("en", &url).unwrap_err();
        assert!(err.to_string().contains("at the URL"));
        assert!(err.to_string().contains("Series"));
    }

    #[test]
    fn test_missing_title_is_fatal() {
        let ep = endpoints();
        let url = format!("{}firefly", ep.series_prefix());
        let html = r#"<html><body>
            <div><strong>TheTVDB.com Series ID</strong><span>321</span></div>
        </body></html>"#;
        let fetcher = MockFetcher::new().with_page(&url, html);
        let tvdb = client(fetcher);
        let err = tvdb.get_series("en", &url).unwrap_err();
        assert!(matches!(err, ResolutionError::MissingStructure(_)));
        assert!(err.to_string().contains("name not found"));
    }

    #[test]
    fn test_movie_tmdb_id_from_direct_link() {
        let ep = endpoints();
        let url = format!("{}the-matrix", ep.movies_prefix());
        let fetcher =
            MockFetcher::new().with_page(&url, &movie_page(113, "The Matrix", TMDB_LINK));
        let tvdb = client(fetcher);
        let item = tvdb.get_movie("en", &url).unwrap();
        assert_eq!(item.tmdb_id, Some(603));
        assert_eq!(item.id, 113);
    }

    #[test]
    fn test_movie_falls_back_to_imdb_cross_reference() {
        let ep = endpoints();
        let url = format!("{}the-matrix", ep.movies_prefix());
        // The TMDb link is present but carries no usable ID, so the IMDb
        // cross-reference must still be attempted.
        let links = format!(
            r#"<a href="https://www.themoviedb.org/">TheMovieDB.com</a>{IMDB_LINK}"#
        );
        let fetcher = MockFetcher::new().with_page(&url, &movie_page(113, "The Matrix", &links));
        let tvdb = client(fetcher);
        let item = tvdb.get_movie("en", &url).unwrap();
        // StaticConverter maps tt0133093 to its digits.
        assert_eq!(item.tmdb_id, Some(133093));
    }

    #[test]
    fn test_movie_without_cross_reference_is_fatal() {
        let ep = endpoints();
        let url = format!("{}obscure", ep.movies_prefix());
        let fetcher = MockFetcher::new().with_page(&url, &movie_page(7, "Obscure Film", ""));
        let tvdb = client(fetcher);
        let err = tvdb.get_movie("en", &url).unwrap_err();
        assert!(matches!(err, ResolutionError::Conversion(_)));
        assert!(err.to_string().contains("Obscure Film"));
    }

    #[test]
    fn test_movie_conversion_failure_names_title() {
        let ep = endpoints();
        let url = format!("{}the-matrix", ep.movies_prefix());
        let fetcher =
            MockFetcher::new().with_page(&url, &movie_page(113, "The Matrix", IMDB_LINK));
        let converter = StaticConverter {
            fail_alternate: true,
            ..StaticConverter::default()
        };
        let tvdb = Tvdb::new(fetcher, converter, endpoints());
        let err = tvdb.get_movie("en", &url).unwrap_err();
        assert!(err.to_string().contains("no TMDb ID found for The Matrix"));
    }

    fn list_fixture(rows: &str) -> String {
        format!(
            r#"<html><body>
                 <div class="col-xs-12 col-sm-12 col-md-8 col-lg-8 col-md-pull-4">{rows}</div>
               </body></html>"#
        )
    }

    fn list_row(href: &str, title: &str) -> String {
        format!(
            r#"<div class="row">
                 <div class="col-xs-12 col-sm-9 mt-2"><a href="{href}">{title}</a></div>
               </div>"#
        )
    }

    #[test]
    fn test_list_traversal_collects_series_and_movies() {
        let ep = endpoints();
        let list_url = format!("{}favorites", ep.list_prefix());
        let rows = format!(
            "{}{}",
            list_row("/series/321", "Firefly"),
            list_row("/movies/the-matrix", "The Matrix")
        );
        let fetcher = MockFetcher::new()
            .with_page(&list_url, &list_fixture(&rows))
            .with_page(
                &format!("{}/series/321", ep.base_url),
                &series_page(321, "Firefly"),
            )
            .with_page(
                &format!("{}/movies/the-matrix", ep.base_url),
                &movie_page(113, "The Matrix", TMDB_LINK),
            );
        let tvdb = client(fetcher);
        let (movie_ids, show_ids) = tvdb
            .get_items(&TvdbBuilder::List(list_url), "en")
            .unwrap();
        assert_eq!(movie_ids, vec![603]);
        assert_eq!(show_ids, vec![321]);
    }

    #[test]
    fn test_list_traversal_skips_failing_rows() {
        let ep = endpoints();
        let list_url = format!("{}favorites", ep.list_prefix());
        let rows = format!(
            "{}{}{}{}",
            list_row("/series/321", "Firefly"),
            // No fixture page for this one, so its lookup fails.
            list_row("/series/999", "Vaporware"),
            // Unrecognized section.
            list_row("/people/7", "Some Actor"),
            // Malformed row without a link.
            r#"<div class="row"><div class="other">stray text</div></div>"#
        );
        let fetcher = MockFetcher::new()
            .with_page(&list_url, &list_fixture(&rows))
            .with_page(
                &format!("{}/series/321", ep.base_url),
                &series_page(321, "Firefly"),
            );
        let tvdb = client(fetcher);
        let (movie_ids, show_ids) = tvdb
            .get_items(&TvdbBuilder::List(list_url), "en")
            .unwrap();
        assert!(movie_ids.is_empty());
        assert_eq!(show_ids, vec![321]);
    }

    #[test]
    fn test_list_with_no_usable_rows_is_fatal() {
        let ep = endpoints();
        let list_url = format!("{}empty", ep.list_prefix());
        let fetcher = MockFetcher::new().with_page(
            &list_url,
            &list_fixture(r#"<div class="row"><div class="other">nothing</div></div>"#),
        );
        let tvdb = client(fetcher);
        let err = tvdb
            .get_items(&TvdbBuilder::List(list_url), "en")
            .unwrap_err();
        assert!(matches!(err, ResolutionError::NoResults(_)));
    }

    #[test]
    fn test_list_url_outside_lists_section_is_rejected() {
        let ep = endpoints();
        let tvdb = client(MockFetcher::new());
        let err = tvdb
            .get_items(
                &TvdbBuilder::List(format!("{}firefly", ep.series_prefix())),
                "en",
            )
            .unwrap_err();
        match err {
            ResolutionError::UrlPrefix { expected, .. } => {
                assert_eq!(expected, ep.list_prefix());
            }
            other => panic!("expected UrlPrefix, got {other:?}"),
        }
    }

    #[test]
    fn test_get_list_description_defaults_to_empty() {
        let ep = endpoints();
        let list_url = format!("{}favorites", ep.list_prefix());
        let fetcher =
            MockFetcher::new().with_page(&list_url, "<html><body></body></html>");
        let tvdb = client(fetcher);
        assert_eq!(tvdb.get_list_description(&list_url, "en").unwrap(), "");

        let described = format!("{}described", ep.list_prefix());
        let html = r#"<div class="block"><div><p>Curated favorites.</p></div></div>"#;
        let fetcher = MockFetcher::new().with_page(&described, html);
        let tvdb = client(fetcher);
        assert_eq!(
            tvdb.get_list_description(&described, "en").unwrap(),
            "Curated favorites."
        );
    }

    #[test]
    fn test_details_methods_funnel_through_same_paths() {
        let ep = endpoints();
        let dereferrer = format!("{}12345", ep.series_id_prefix());
        let fetcher = MockFetcher::new().with_page(&dereferrer, &series_page(12345, "Firefly"));
        let tvdb = client(fetcher);
        let plain = tvdb
            .get_items(&TvdbBuilder::Show("12345".to_string()), "en")
            .unwrap();
        let details = tvdb
            .get_items(&TvdbBuilder::ShowDetails("12345".to_string()), "en")
            .unwrap();
        assert_eq!(plain, details);
        assert_eq!(plain.1, vec![12345]);
    }

    #[test]
    fn test_from_method_rejects_unknown_method() {
        let err =
            TvdbBuilder::from_method("tvdb_person", BuilderData::Reference("x".to_string()))
                .unwrap_err();
        match err {
            ResolutionError::UnsupportedMethod { method } => assert_eq!(method, "tvdb_person"),
            other => panic!("expected UnsupportedMethod, got {other:?}"),
        }
    }

    #[test]
    fn test_from_method_accepts_bare_id() {
        let builder = TvdbBuilder::from_method("tvdb_show", BuilderData::Id(12345)).unwrap();
        assert_eq!(builder, TvdbBuilder::Show("12345".to_string()));
    }
}
