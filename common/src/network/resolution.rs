use std::fmt;
use std::net::Ipv4Addr;

/// Outcome of a successful lookup: the name as given and the first
/// IPv4 address the resolver returned for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub host: String,
    pub address: Ipv4Addr,
    /// Dotted-decimal rendering of `address`.
    pub text: String,
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} has address {}", self.host, self.text)
    }
}
