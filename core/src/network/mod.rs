pub mod addrinfo;
pub mod ntop;
