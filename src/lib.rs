//! catalog-resolver - Resolve external media-catalog identifiers
//!
//! This library resolves AniDB and TVDb catalog queries ("builders":
//! direct ID, relation-graph traversal, popularity list, tag search,
//! list-page scrape) into a common pair of identifier lists (TMDb movie
//! IDs and TVDb show IDs) for a downstream metadata-management pipeline.
//!
//! Each resolution is a fresh, strictly sequential fetch sequence: fetch
//! a specific page, extract a handful of fields through the provider's
//! page-structure layer, paginate or traverse links until a limit is
//! reached, then convert provider-native IDs through the pipeline's
//! [`IdConverter`]. Paginated fetches are paced by a fixed courtesy
//! delay; there is no caching, no retrying, and no concurrency.
//!
//! ```ignore
//! use catalog_resolver::{Anidb, AnidbBuilder, AnidbEndpoints, HttpFetcher};
//!
//! let converter = pipeline.id_converter();
//! let anidb = Anidb::new(HttpFetcher::new(), converter, AnidbEndpoints::default(), None)?;
//! let builder = AnidbBuilder::Tag { tag: "action".to_string(), limit: 5 };
//! let (movie_ids, show_ids) = anidb.get_items(&builder, "en")?;
//! ```

mod anidb;
mod convert;
mod error;
mod fetch;
mod ids;
mod page;
#[cfg(test)]
mod test_support;
mod tvdb;

pub use anidb::layout::{AnidbLayout, DefaultAnidbLayout};
pub use anidb::{Anidb, AnidbBuilder, AnidbEndpoints, Credentials};
pub use convert::{IdConverter, MovieId, NativeId, Provider, ShowId};
pub use error::ResolutionError;
pub use fetch::{Fetcher, HttpFetcher};
pub use page::Page;
pub use tvdb::layout::{DefaultTvdbLayout, ListRow, TvdbLayout};
pub use tvdb::{MediaType, Tvdb, TvdbBuilder, TvdbEndpoints, TvdbItem};

/// Data accompanying a builder method name, as supplied by the pipeline.
///
/// The accepted shape depends on the method: a bare ID, an ID-or-URL
/// reference string, or a tag/limit pair.
#[derive(Debug, Clone, PartialEq)]
pub enum BuilderData {
    /// A bare numeric identifier (also used for popularity counts).
    Id(NativeId),
    /// A URL or numeric string reference.
    Reference(String),
    /// A tag name with a result limit; zero or below means unlimited.
    Tag { tag: String, limit: i64 },
}
