use std::ffi::c_int;
use std::io;

use thiserror::Error;

/// Every recoverable way a lookup run can fail.
///
/// A resolver handing back a non-IPv4 record for an IPv4-only request is
/// not represented here: that is a broken contract and panics instead.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("gethostname(): {0}")]
    LocalHostName(io::Error),

    #[error("getaddrinfo: host name contains a NUL byte")]
    InvalidHostName,

    #[error("getaddrinfo: {message}")]
    Lookup { code: c_int, message: String },

    #[error("getaddrinfo: resolver returned no address records for '{0}'")]
    NoRecords(String),

    #[error("Quitting, error: {0}")]
    Format(io::Error),
}

impl ResolveError {
    /// True for failures reported by the resolver itself.
    pub fn is_lookup(&self) -> bool {
        matches!(
            self,
            ResolveError::Lookup { .. } | ResolveError::NoRecords(_) | ResolveError::InvalidHostName
        )
    }
}
