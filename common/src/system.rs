use std::net::Ipv4Addr;

use crate::config::LookupHints;
use crate::error::ResolveError;

/// Operating-system name facilities the lookup pipeline depends on.
pub trait NameService {
    /// Name of the machine the program runs on.
    fn local_hostname(&self) -> Result<String, ResolveError>;

    /// Blocking lookup of `host`, returning the address held by the first
    /// record the resolver produced.
    fn lookup_ipv4(&self, host: &str, hints: &LookupHints) -> Result<Ipv4Addr, ResolveError>;
}
