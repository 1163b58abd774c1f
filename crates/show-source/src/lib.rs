//! # show-source
//!
//! Project source resolution pipeline for Showcase.
//!
//! Decides where the displayed project list comes from, via an ordered
//! fallback chain:
//! 1. Cache snapshot (TTL'd, from a previous remote fetch)
//! 2. Remote fetch (pinned-repos service, then the repository-list API)
//! 3. Local project-description files (`*.toml`, `*.json`)
//! 4. Bundled defaults (compiled in, never empty)
//!
//! The chain never fails: every per-source error is absorbed and logged,
//! and the worst observable outcome is the bundled list.

pub mod cache;
pub mod local;
pub mod pinned;
pub mod remote;
pub mod repos;
pub mod resolve;

mod error;
mod fetch;

pub use error::SourceError;
pub use fetch::{FetchPolicy, Fetcher};
pub use remote::Endpoints;
pub use resolve::{Origin, Resolution, Resolver, Tier};
