//! # Resolve Core
//!
//! Operating-system adapters behind [`resolve_common::system::NameService`]
//! and the [`lookup::LookupService`] that drives a single lookup run.

pub mod lookup;
pub mod network;
pub mod system;
