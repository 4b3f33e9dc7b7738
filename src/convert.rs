//! The ID-conversion seam.
//!
//! Resolved provider-native IDs leave this crate through an
//! [`IdConverter`], an external collaborator that maps them into the
//! target namespace (TMDb movie IDs and TVDb show IDs). The crate ships
//! only the contract; the orchestrating pipeline supplies the
//! implementation.

use std::fmt;

use crate::error::ResolutionError;

/// An identifier meaningful only within one provider's catalog.
pub type NativeId = u32;

/// A movie identifier in the target namespace (TMDb).
pub type MovieId = u32;

/// A show identifier in the target namespace (TVDb).
pub type ShowId = u32;

/// Tag naming the provider a batch of native IDs belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    AniDb,
    Tvdb,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::AniDb => write!(f, "AniDB"),
            Provider::Tvdb => write!(f, "TVDb"),
        }
    }
}

/// Maps provider-native identifiers into the target namespace.
pub trait IdConverter {
    /// Converts a batch of native IDs into `(movie_ids, show_ids)`.
    fn native_to_target(
        &self,
        provider: Provider,
        native_ids: &[NativeId],
    ) -> Result<(Vec<MovieId>, Vec<ShowId>), ResolutionError>;

    /// Resolves an alternate identifier (an IMDb-style `tt…` ID) into a
    /// target-namespace movie ID. With `fail_on_miss` the implementation
    /// must return an error rather than a placeholder when the mapping
    /// is unknown.
    fn alternate_to_target(
        &self,
        alternate_id: &str,
        fail_on_miss: bool,
    ) -> Result<MovieId, ResolutionError>;
}
