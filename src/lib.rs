//! # selector_golf
//!
//! Searches for Solidity function names whose 4-byte selector starts with
//! as many zero bytes as possible.
//!
//! ## Architecture
//!
//! - `signature`: Template grammar, validation and candidate formatting
//! - `crypto`: Keccak-256 selectors and address derivation
//! - `ranking`: Acceptance rule and result aggregation
//! - `worker`: Index partitioning and parallel workers
//! - `search`: Coordination of a single search run
//! - `config`: Runtime configuration

pub mod config;
pub mod crypto;
pub mod logging;
pub mod ranking;
pub mod search;
pub mod signature;
pub mod worker;

pub use config::Config;
pub use crypto::{derive_address, fingerprint, leading_zero_count, Address, Selector};
pub use ranking::SelectorResult;
pub use search::{search, Search, SearchError, SearchOptions};
pub use signature::{validate, SignatureError, SignatureTemplate};
pub use worker::{SearchSpace, WorkerPool};
