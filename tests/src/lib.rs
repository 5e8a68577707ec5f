//! Integration tests against the live system resolver.

#[cfg(test)]
mod lookup;
