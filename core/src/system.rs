use std::ffi::c_char;
use std::io;
use std::net::Ipv4Addr;
use std::time::Instant;

use tracing::{debug, trace};

use resolve_common::config::LookupHints;
use resolve_common::error::ResolveError;
use resolve_common::system::NameService;

use crate::network::addrinfo::{self, AddrInfoList};

/// Used when the platform does not report `HOST_NAME_MAX`.
const FALLBACK_HOST_NAME_MAX: usize = 255;

/// [`NameService`] backed by the C library.
pub struct SystemRepo;

impl NameService for SystemRepo {
    fn local_hostname(&self) -> Result<String, ResolveError> {
        let mut buf: Vec<u8> = vec![0; host_name_max() + 1];

        let rc = unsafe { libc::gethostname(buf.as_mut_ptr().cast::<c_char>(), buf.len()) };
        if rc == -1 {
            return Err(ResolveError::LocalHostName(io::Error::last_os_error()));
        }

        // POSIX leaves termination unspecified on truncation.
        let len: usize = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
        Ok(String::from_utf8_lossy(&buf[..len]).into_owned())
    }

    fn lookup_ipv4(&self, host: &str, hints: &LookupHints) -> Result<Ipv4Addr, ResolveError> {
        debug!("querying system resolver for '{host}'");
        let start: Instant = Instant::now();

        let records: AddrInfoList = AddrInfoList::query(host, hints)?;
        debug!("resolver answered in {:.2?}", start.elapsed());

        let address: Ipv4Addr = addrinfo::record_ipv4(records.first());
        trace!("first record for '{host}' holds {address}");
        Ok(address)
    }
}

fn host_name_max() -> usize {
    match unsafe { libc::sysconf(libc::_SC_HOST_NAME_MAX) } {
        n if n > 0 => n as usize,
        _ => FALLBACK_HOST_NAME_MAX,
    }
}
