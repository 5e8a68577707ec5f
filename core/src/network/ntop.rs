use std::ffi::{CStr, c_char, c_int, c_void};
use std::io;
use std::net::Ipv4Addr;

use resolve_common::error::ResolveError;

unsafe extern "C" {
    fn inet_ntop(
        af: c_int,
        src: *const c_void,
        dst: *mut c_char,
        size: libc::socklen_t,
    ) -> *const c_char;
}

/// Room for `255.255.255.255` plus the terminating NUL.
pub const INET_ADDRSTRLEN: usize = 16;

/// Renders `addr` as dotted-decimal text with `inet_ntop(3)`.
pub fn format_ipv4(addr: Ipv4Addr) -> Result<String, ResolveError> {
    let mut buf: [c_char; INET_ADDRSTRLEN] = [0; INET_ADDRSTRLEN];
    ntop_into(addr, &mut buf)
}

fn ntop_into(addr: Ipv4Addr, buf: &mut [c_char]) -> Result<String, ResolveError> {
    let in_addr = libc::in_addr {
        s_addr: u32::from(addr).to_be(),
    };

    let out: *const c_char = unsafe {
        inet_ntop(
            libc::AF_INET,
            (&in_addr as *const libc::in_addr).cast(),
            buf.as_mut_ptr(),
            buf.len() as libc::socklen_t,
        )
    };
    if out.is_null() {
        return Err(ResolveError::Format(io::Error::last_os_error()));
    }

    // SAFETY: on success inet_ntop wrote a NUL-terminated string into `buf`.
    let text = unsafe { CStr::from_ptr(buf.as_ptr()) };
    Ok(text.to_string_lossy().into_owned())
}
