//! # Resolver Result List
//!
//! Owns the linked list handed back by `getaddrinfo(3)` and releases it
//! with `freeaddrinfo(3)` when dropped, whichever way the caller leaves.

use std::ffi::{CStr, CString, c_int};
use std::io;
use std::mem;
use std::net::Ipv4Addr;
use std::ptr::{self, NonNull};

use resolve_common::config::LookupHints;
use resolve_common::error::ResolveError;
use tracing::trace;

/// Non-empty list of address records returned by the system resolver.
pub struct AddrInfoList {
    head: NonNull<libc::addrinfo>,
}

impl AddrInfoList {
    /// Asks the system resolver for `host` under `hints`. Blocks until the
    /// resolver answers; its own timeout policy applies.
    pub fn query(host: &str, hints: &LookupHints) -> Result<Self, ResolveError> {
        let c_host: CString = CString::new(host).map_err(|_| ResolveError::InvalidHostName)?;
        let request: libc::addrinfo = to_request(hints);
        let mut result: *mut libc::addrinfo = ptr::null_mut();

        let code: c_int =
            unsafe { libc::getaddrinfo(c_host.as_ptr(), ptr::null(), &request, &mut result) };
        if code != 0 {
            return Err(lookup_error(code));
        }

        NonNull::new(result)
            .map(|head| Self { head })
            .ok_or_else(|| ResolveError::NoRecords(host.to_string()))
    }

    /// The first record; the only one this tool consults.
    pub fn first(&self) -> &libc::addrinfo {
        // SAFETY: `head` came from a successful getaddrinfo call and stays
        // valid until `drop` frees it.
        unsafe { self.head.as_ref() }
    }
}

impl Drop for AddrInfoList {
    fn drop(&mut self) {
        trace!("releasing resolver result list");
        // SAFETY: freed exactly once, here.
        unsafe { libc::freeaddrinfo(self.head.as_ptr()) };
    }
}

/// Reads the IPv4 address out of a resolver record.
///
/// # Panics
///
/// If the record is not an IPv4 record. The request only ever allows
/// IPv4, so anything else means the resolver ignored it.
pub fn record_ipv4(record: &libc::addrinfo) -> Ipv4Addr {
    assert!(!record.ai_addr.is_null(), "resolver record carries no address");

    // SAFETY: non-null, and every sockaddr starts with its family field.
    let family: c_int = c_int::from(unsafe { (*record.ai_addr).sa_family });
    assert_eq!(
        family,
        libc::AF_INET,
        "resolver returned a non-IPv4 record for an IPv4-only request"
    );

    // SAFETY: the family is AF_INET, so the address is a sockaddr_in.
    let sin: &libc::sockaddr_in = unsafe { &*record.ai_addr.cast::<libc::sockaddr_in>() };
    Ipv4Addr::from(u32::from_be(sin.sin_addr.s_addr))
}

fn to_request(hints: &LookupHints) -> libc::addrinfo {
    // SAFETY: addrinfo is plain data; all-zero is "no constraint" with
    // null name/address/next pointers.
    let mut request: libc::addrinfo = unsafe { mem::zeroed() };
    request.ai_family = hints.family;
    request.ai_socktype = hints.socktype;
    request.ai_protocol = hints.protocol;
    request.ai_flags = hints.flags;
    request
}

fn lookup_error(code: c_int) -> ResolveError {
    // errno is only meaningful for EAI_SYSTEM and must be read first.
    let os_error: io::Error = io::Error::last_os_error();

    // SAFETY: gai_strerror returns a static NUL-terminated string.
    let description = unsafe { CStr::from_ptr(libc::gai_strerror(code)) };
    let mut message: String = description.to_string_lossy().into_owned();

    if code == libc::EAI_SYSTEM {
        message = format!("{message}: {os_error}");
    }

    ResolveError::Lookup { code, message }
}
