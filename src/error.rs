//! The single error type shared by every resolution path.
//!
//! Both provider clients surface failures as [`ResolutionError`]: one
//! user-facing kind whose variants classify the failure while the message
//! names the provider, the offending input, and the missing or invalid
//! structure. Transport failures from the fetcher are wrapped into the
//! same taxonomy rather than leaking through.

use thiserror::Error;

use crate::convert::Provider;

/// Error raised when a catalog query cannot be resolved.
#[derive(Debug, Error)]
pub enum ResolutionError {
    /// Transport or URL failure raised while fetching a page.
    #[error("URL lookup failed for {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// A required element was absent from an otherwise well-formed page.
    #[error("{0}")]
    MissingStructure(String),

    /// The input URL does not point into the expected catalog section.
    #[error("{url} must begin with {expected}")]
    UrlPrefix { url: String, expected: String },

    /// Credentials were supplied but the authenticated-menu marker never
    /// appeared in the login response.
    #[error("{provider}: login failed")]
    LoginFailed { provider: Provider },

    /// A batch or list operation produced zero usable identifiers.
    #[error("{0}")]
    NoResults(String),

    /// A builder method name outside the supported set.
    #[error("method {method} not supported")]
    UnsupportedMethod { method: String },

    /// A builder was given data of the wrong shape for its method.
    #[error("{0}")]
    InvalidData(String),

    /// Cross-reference discovery produced no target-namespace ID.
    #[error("{0}")]
    Conversion(String),
}
