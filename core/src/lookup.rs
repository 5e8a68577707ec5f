//! # Lookup Service
//!
//! Drives one run: query the local name, resolve the remote name, render
//! the address. Every step either succeeds or ends the run; nothing is
//! retried.

use std::net::Ipv4Addr;

use tracing::debug;

use resolve_common::config::LookupHints;
use resolve_common::error::ResolveError;
use resolve_common::network::resolution::Resolution;
use resolve_common::system::NameService;

use crate::network::ntop;

pub struct LookupService {
    names: Box<dyn NameService>,
    hints: LookupHints,
}

impl LookupService {
    /// # Panics
    ///
    /// If `hints` ask for anything but IPv4; results are read as IPv4 only.
    pub fn new(names: Box<dyn NameService>, hints: LookupHints) -> Self {
        assert!(hints.is_ipv4(), "lookup service only issues IPv4 requests");
        Self { names, hints }
    }

    /// Name of the machine running the lookup, for display.
    pub fn local_hostname(&self) -> Result<String, ResolveError> {
        self.names.local_hostname()
    }

    /// Resolves `host` to its first IPv4 address and renders it.
    pub fn resolve(&self, host: &str) -> Result<Resolution, ResolveError> {
        let address: Ipv4Addr = self.names.lookup_ipv4(host, &self.hints)?;
        let text: String = ntop::format_ipv4(address)?;
        debug!("'{host}' resolved to {text}");

        Ok(Resolution {
            host: host.to_string(),
            address,
            text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::io;
    use std::rc::Rc;

    #[derive(Default)]
    struct FakeNames {
        records: HashMap<&'static str, Ipv4Addr>,
        seen: Rc<RefCell<Vec<(String, LookupHints)>>>,
        broken_hostname: bool,
    }

    impl NameService for FakeNames {
        fn local_hostname(&self) -> Result<String, ResolveError> {
            if self.broken_hostname {
                return Err(ResolveError::LocalHostName(io::Error::from_raw_os_error(
                    libc::EINVAL,
                )));
            }
            Ok("workstation".to_string())
        }

        fn lookup_ipv4(&self, host: &str, hints: &LookupHints) -> Result<Ipv4Addr, ResolveError> {
            self.seen.borrow_mut().push((host.to_string(), *hints));
            self.records
                .get(host)
                .copied()
                .ok_or_else(|| ResolveError::Lookup {
                    code: libc::EAI_NONAME,
                    message: "Name or service not known".into(),
                })
        }
    }

    fn service_with(records: &[(&'static str, Ipv4Addr)]) -> LookupService {
        let names = FakeNames {
            records: records.iter().copied().collect(),
            ..FakeNames::default()
        };
        LookupService::new(Box::new(names), LookupHints::default())
    }

    #[test]
    fn resolves_and_renders_first_address() {
        let svc = service_with(&[("db.internal", Ipv4Addr::new(10, 4, 0, 12))]);
        let res = svc.resolve("db.internal").unwrap();

        assert_eq!(res.host, "db.internal");
        assert_eq!(res.address, Ipv4Addr::new(10, 4, 0, 12));
        assert_eq!(res.text, "10.4.0.12");
        assert_eq!(res.to_string(), "db.internal has address 10.4.0.12");
    }

    #[test]
    fn passes_ipv4_hints_and_verbatim_name() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let names = FakeNames {
            records: HashMap::from([(" Mixed.Case ", Ipv4Addr::LOCALHOST)]),
            seen: Rc::clone(&seen),
            ..FakeNames::default()
        };
        let svc = LookupService::new(Box::new(names), LookupHints::ipv4_tcp());
        svc.resolve(" Mixed.Case ").unwrap();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, " Mixed.Case ");
        assert!(seen[0].1.is_ipv4());
        assert_eq!(seen[0].1.protocol, libc::IPPROTO_TCP);
    }

    #[test]
    #[should_panic(expected = "only issues IPv4 requests")]
    fn rejects_non_ipv4_hints() {
        let hints = LookupHints {
            family: libc::AF_INET6,
            ..LookupHints::ipv4_tcp()
        };
        LookupService::new(Box::new(FakeNames::default()), hints);
    }

    #[test]
    fn unknown_host_is_a_lookup_error() {
        let svc = service_with(&[]);
        let err = svc.resolve("example.test").unwrap_err();

        assert!(err.is_lookup());
        assert_eq!(err.to_string(), "getaddrinfo: Name or service not known");
    }

    #[test]
    fn local_hostname_errors_propagate() {
        let names = FakeNames {
            broken_hostname: true,
            ..FakeNames::default()
        };
        let svc = LookupService::new(Box::new(names), LookupHints::default());

        let err = svc.local_hostname().unwrap_err();
        assert!(matches!(err, ResolveError::LocalHostName(_)));
    }

    #[test]
    fn repeated_lookups_agree() {
        let svc = service_with(&[("localhost", Ipv4Addr::LOCALHOST)]);
        let first = svc.resolve("localhost").unwrap();
        let second = svc.resolve("localhost").unwrap();
        assert_eq!(first, second);
        assert_eq!(first.text, "127.0.0.1");
    }
}
