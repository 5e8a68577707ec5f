//! # Resolve Common
//!
//! Shared models, configuration and error types used by the lookup
//! pipeline and its adapters.

pub mod config;
pub mod error;
pub mod network;
pub mod system;
