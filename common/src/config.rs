use std::ffi::c_int;

/// Environment variable holding the log filter (tracing `EnvFilter` syntax).
pub const LOG_ENV: &str = "RESOLVE_LOG";

/// Filter used when [`LOG_ENV`] is unset or unparsable.
pub const DEFAULT_LOG_FILTER: &str = "warn";

pub struct Config {
    /// Request sent to the system resolver.
    pub hints: LookupHints,
    /// Log filter directive handed to the subscriber.
    pub log_filter: String,
}

impl Config {
    /// Default lookup hints, with the log filter taken from [`LOG_ENV`].
    pub fn from_env() -> Self {
        let log_filter: String = std::env::var(LOG_ENV)
            .ok()
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self {
            log_filter,
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hints: LookupHints::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// Restricts which address records the system resolver may return.
///
/// Only the address family, socket type, protocol and flags are carried.
/// No service (port) is ever looked up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LookupHints {
    pub family: c_int,
    pub socktype: c_int,
    pub protocol: c_int,
    pub flags: c_int,
}

impl LookupHints {
    /// IPv4 addresses usable for a TCP stream.
    pub const fn ipv4_tcp() -> Self {
        Self {
            family: libc::AF_INET,
            socktype: libc::SOCK_STREAM,
            protocol: libc::IPPROTO_TCP,
            flags: 0,
        }
    }

    pub fn is_ipv4(&self) -> bool {
        self.family == libc::AF_INET
    }
}

impl Default for LookupHints {
    fn default() -> Self {
        Self::ipv4_tcp()
    }
}
