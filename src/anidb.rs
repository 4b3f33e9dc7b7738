//! AniDB client.
//!
//! Resolves anime catalog queries (direct ID, relation-graph traversal,
//! popularity list, tag search) to provider-native IDs and hands them to
//! the [`IdConverter`] for translation into the target namespace.

pub mod layout;

use std::thread;
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, error, info};

use crate::BuilderData;
use crate::convert::{IdConverter, MovieId, NativeId, Provider, ShowId};
use crate::error::ResolutionError;
use crate::fetch::Fetcher;
use crate::ids;
use crate::page::Page;
use layout::{AnidbLayout, DefaultAnidbLayout};

/// Accept-Language used for requests that are not tied to a caller's
/// language preference (the login POST).
const DEFAULT_LANGUAGE: &str = "en-US,en;q=0.5";

/// Read-only URL table and request pacing for the AniDB client.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnidbEndpoints {
    pub base_url: String,
    pub anime_url: String,
    pub popular_url: String,
    pub relation_suffix: String,
    pub tag_url: String,
    pub login_url: String,
    /// Pause between successive page fetches during pagination. A
    /// courtesy to the site's rate limiting, not a retry mechanism.
    pub courtesy_delay: Duration,
}

impl Default for AnidbEndpoints {
    fn default() -> Self {
        let base_url = "https://anidb.net".to_string();
        Self {
            anime_url: format!("{base_url}/anime"),
            popular_url: format!("{base_url}/latest/anime/popular/?h=1"),
            relation_suffix: "/relation/graph".to_string(),
            tag_url: format!("{base_url}/tag"),
            login_url: format!("{base_url}/perl-bin/animedb.pl"),
            courtesy_delay: Duration::from_secs(2),
            base_url,
        }
    }
}

/// Username/password pair for an optional authenticated session.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// One resolution strategy for [`Anidb::get_items`].
#[derive(Debug, Clone, PartialEq)]
pub enum AnidbBuilder {
    /// A single native ID, passed through as-is.
    Id(NativeId),
    /// Every ID referenced by the relation graph of the given ID.
    Relation(NativeId),
    /// The first `count` entries of the popularity listing.
    Popular(usize),
    /// Tag search. A `limit` of zero or below collects everything
    /// available.
    Tag { tag: String, limit: i64 },
}

impl AnidbBuilder {
    /// Builds from the string method surface consumed by the pipeline.
    ///
    /// Supported methods: `anidb_id`, `anidb_relation`, `anidb_popular`,
    /// `anidb_tag`. Anything else is a [`ResolutionError::UnsupportedMethod`].
    pub fn from_method(method: &str, data: BuilderData) -> Result<Self, ResolutionError> {
        match method {
            "anidb_id" => Ok(Self::Id(require_id(method, data)?)),
            "anidb_relation" => Ok(Self::Relation(require_id(method, data)?)),
            "anidb_popular" => Ok(Self::Popular(require_id(method, data)? as usize)),
            "anidb_tag" => match data {
                BuilderData::Tag { tag, limit } => Ok(Self::Tag { tag, limit }),
                other => Err(ResolutionError::InvalidData(format!(
                    "method {method} expects a tag/limit pair, got {other:?}"
                ))),
            },
            _ => Err(ResolutionError::UnsupportedMethod {
                method: method.to_string(),
            }),
        }
    }
}

fn require_id(method: &str, data: BuilderData) -> Result<NativeId, ResolutionError> {
    match data {
        BuilderData::Id(id) => Ok(id),
        BuilderData::Reference(text) => text.trim().parse().map_err(|_| {
            ResolutionError::InvalidData(format!(
                "method {method} expects a numeric ID, got {text:?}"
            ))
        }),
        other => Err(ResolutionError::InvalidData(format!(
            "method {method} expects a numeric ID, got {other:?}"
        ))),
    }
}

/// Client for the AniDB catalog.
///
/// Holds only immutable configuration and the collaborator handles; safe
/// to reuse sequentially across `get_items` calls.
pub struct Anidb<F, C>
where
    F: Fetcher,
    C: IdConverter,
{
    fetcher: F,
    converter: C,
    layout: Box<dyn AnidbLayout>,
    endpoints: AnidbEndpoints,
}

impl<F, C> Anidb<F, C>
where
    F: Fetcher,
    C: IdConverter,
{
    /// Creates a client with the current page layout.
    ///
    /// When `credentials` are supplied a login POST is performed and the
    /// authenticated-menu marker must appear in the response; otherwise
    /// construction fails with [`ResolutionError::LoginFailed`]. There is
    /// no retry.
    pub fn new(
        fetcher: F,
        converter: C,
        endpoints: AnidbEndpoints,
        credentials: Option<&Credentials>,
    ) -> Result<Self, ResolutionError> {
        Self::with_layout(
            fetcher,
            converter,
            endpoints,
            Box::new(DefaultAnidbLayout),
            credentials,
        )
    }

    /// Creates a client with a custom extraction strategy.
    pub fn with_layout(
        fetcher: F,
        converter: C,
        endpoints: AnidbEndpoints,
        layout: Box<dyn AnidbLayout>,
        credentials: Option<&Credentials>,
    ) -> Result<Self, ResolutionError> {
        let client = Self {
            fetcher,
            converter,
            layout,
            endpoints,
        };
        if let Some(credentials) = credentials {
            let response = client.login(credentials)?;
            if !client.layout.logged_in(&response) {
                return Err(ResolutionError::LoginFailed {
                    provider: Provider::AniDb,
                });
            }
        }
        Ok(client)
    }

    fn login(&self, credentials: &Credentials) -> Result<Page, ResolutionError> {
        let form = [
            ("show", "main"),
            ("xuser", credentials.username.as_str()),
            ("xpass", credentials.password.as_str()),
            ("xdoautologin", "on"),
        ];
        self.fetcher
            .fetch(&self.endpoints.login_url, DEFAULT_LANGUAGE, Some(&form))
    }

    /// The first `count` native IDs of the popularity listing, in
    /// document order.
    pub fn popular(&self, language: &str, count: usize) -> Result<Vec<NativeId>, ResolutionError> {
        let page = self
            .fetcher
            .fetch(&self.endpoints.popular_url, language, None)?;
        let mut anidb_ids = ids::int_list(&self.layout.popular_hrefs(&page), "AniDB ID");
        anidb_ids.truncate(count);
        Ok(anidb_ids)
    }

    /// Every native ID referenced by the relation graph of `anidb_id`.
    pub fn relations(
        &self,
        anidb_id: NativeId,
        language: &str,
    ) -> Result<Vec<NativeId>, ResolutionError> {
        let url = format!(
            "{}/{anidb_id}{}",
            self.endpoints.anime_url, self.endpoints.relation_suffix
        );
        let page = self.fetcher.fetch(&url, language, None)?;
        Ok(ids::int_list(&self.layout.relation_hrefs(&page), "AniDB ID"))
    }

    fn validate(&self, anidb_id: NativeId, language: &str) -> Result<NativeId, ResolutionError> {
        let url = format!("{}/{anidb_id}", self.endpoints.anime_url);
        let page = self.fetcher.fetch(&url, language, None)?;
        self.layout
            .id_confirmation(&page, anidb_id)
            .as_deref()
            .and_then(ids::first_int)
            .ok_or_else(|| {
                ResolutionError::MissingStructure(format!("AniDB ID {anidb_id} not found"))
            })
    }

    /// Checks each ID against its detail page, returning the valid
    /// subset in input order. Invalid entries are logged and dropped;
    /// an all-invalid input is a fatal [`ResolutionError::NoResults`].
    pub fn validate_list(
        &self,
        anidb_ids: &[NativeId],
        language: &str,
    ) -> Result<Vec<NativeId>, ResolutionError> {
        let mut valid = Vec::new();
        for &anidb_id in anidb_ids {
            match self.validate(anidb_id, language) {
                Ok(id) => valid.push(id),
                Err(e) => error!("{e}"),
            }
        }
        if valid.is_empty() {
            return Err(ResolutionError::NoResults(format!(
                "no valid AniDB IDs in {anidb_ids:?}"
            )));
        }
        Ok(valid)
    }

    /// Paginates the tag listing for `tag`, accumulating native IDs in
    /// first-seen order. Stops once `limit` is reached (when positive)
    /// or no next-page link exists; a `limit` of zero or below collects
    /// everything available. Pages are fetched with the courtesy delay
    /// in between.
    pub fn tag(
        &self,
        tag: &str,
        limit: i64,
        language: &str,
    ) -> Result<Vec<NativeId>, ResolutionError> {
        let mut anidb_ids: Vec<NativeId> = Vec::new();
        let mut current_url = format!("{}/{tag}", self.endpoints.tag_url);
        loop {
            let page = self.fetcher.fetch(&current_url, language, None)?;
            anidb_ids.extend(ids::int_list(&self.layout.tag_hrefs(&page), "AniDB ID"));
            match self.layout.next_page_href(&page) {
                Some(next) if limit <= 0 || (anidb_ids.len() as i64) < limit => {
                    thread::sleep(self.endpoints.courtesy_delay);
                    current_url = format!("{}{next}", self.endpoints.base_url);
                }
                _ => break,
            }
        }
        if limit > 0 {
            anidb_ids.truncate(limit as usize);
        }
        Ok(anidb_ids)
    }

    /// Resolves a builder to native IDs and converts them into
    /// `(movie_ids, show_ids)` in the target namespace.
    pub fn get_items(
        &self,
        builder: &AnidbBuilder,
        language: &str,
    ) -> Result<(Vec<MovieId>, Vec<ShowId>), ResolutionError> {
        let anidb_ids = match builder {
            AnidbBuilder::Id(anidb_id) => {
                info!("processing AniDB ID: {anidb_id}");
                vec![*anidb_id]
            }
            AnidbBuilder::Relation(anidb_id) => {
                info!("processing AniDB relation: {anidb_id}");
                self.relations(*anidb_id, language)?
            }
            AnidbBuilder::Popular(count) => {
                info!("processing AniDB popular: {count} anime");
                self.popular(language, *count)?
            }
            AnidbBuilder::Tag { tag, limit } => {
                if *limit > 0 {
                    info!("processing AniDB tag: {limit} anime from tag {tag}");
                } else {
                    info!("processing AniDB tag: all anime from tag {tag}");
                }
                self.tag(tag, *limit, language)?
            }
        };
        let (movie_ids, show_ids) = self
            .converter
            .native_to_target(Provider::AniDb, &anidb_ids)?;
        debug!("{} AniDB IDs found: {anidb_ids:?}", anidb_ids.len());
        debug!("{} movie IDs found: {movie_ids:?}", movie_ids.len());
        debug!("{} show IDs found: {show_ids:?}", show_ids.len());
        Ok((movie_ids, show_ids))
    }
}
