#![cfg(test)]
use resolve_common::config::{Config, LookupHints};
use resolve_common::error::ResolveError;
use resolve_common::network::resolution::Resolution;
use resolve_core::lookup::LookupService;
use resolve_core::network::addrinfo::{self, AddrInfoList};
use resolve_core::system::SystemRepo;
use std::net::Ipv4Addr;

fn system_service() -> LookupService {
    let cfg: Config = Config::default();
    LookupService::new(Box::new(SystemRepo), cfg.hints)
}

/// `localhost` should come back as the loopback address on any host whose
/// name service maps it the usual way.
#[test]
fn localhost_resolves_to_loopback() {
    let service: LookupService = system_service();

    let result = service.resolve("localhost");

    assert!(result.is_ok(), "Lookup failed: {:?}", result.as_ref().err());
    let resolution: Resolution = result.unwrap();
    assert_eq!(resolution.address, Ipv4Addr::LOCALHOST);
    assert_eq!(resolution.text, "127.0.0.1");
    assert_eq!(resolution.to_string(), "localhost has address 127.0.0.1");
}

#[test]
fn reserved_test_domain_does_not_resolve() {
    let service: LookupService = system_service();

    let result = service.resolve("example.test");

    match result {
        Err(err @ ResolveError::Lookup { .. }) => {
            assert!(err.to_string().starts_with("getaddrinfo: "));
        }
        other => panic!("Expected a resolver error, got {other:?}"),
    }
}

#[test]
fn repeated_lookups_return_the_same_address() {
    let service: LookupService = system_service();

    let first: Resolution = service.resolve("localhost").unwrap();
    let second: Resolution = service.resolve("localhost").unwrap();

    assert_eq!(first, second, "Resolver answered differently on a repeat query");
}

#[test]
fn first_record_of_ipv4_query_is_ipv4() {
    let records: AddrInfoList = AddrInfoList::query("localhost", &LookupHints::ipv4_tcp())
        .expect("localhost must resolve");

    let first = records.first();
    assert_eq!(first.ai_family, libc::AF_INET);
    assert_eq!(addrinfo::record_ipv4(first), Ipv4Addr::LOCALHOST);
}

#[test]
fn local_hostname_is_reported() {
    let service: LookupService = system_service();

    let result = service.local_hostname();

    assert!(result.is_ok(), "gethostname failed: {:?}", result.err());
}
