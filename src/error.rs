//! URL construction error types.

use crate::site::SiteId;
use thiserror::Error;

/// Errors from the host's site-scoped URL builder.
///
/// These never propagate out of the resolvers: the affected entry is logged
/// and dropped while resolution of other entries continues.
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("unknown site id `{0}`")]
    UnknownSite(SiteId),

    #[error("site id `{0}` has no base URL configured")]
    MissingBaseUrl(SiteId),

    #[error("invalid URL for site id `{site}`")]
    InvalidUrl {
        site: SiteId,
        #[source]
        source: url::ParseError,
    },
}
