//! # show-core
//!
//! Core domain types for Showcase.
//!
//! This crate provides the foundational types shared across all Showcase
//! crates:
//! - The [`Project`] entity and its normalization invariant
//! - Tagline truncation and tech-stack normalization helpers
//! - The compiled-in bundled project list (terminal fallback)

pub mod bundled;
pub mod project;

pub use bundled::bundled_projects;
pub use project::{Metrics, Project, TAGLINE_MAX_CHARS, truncate_tagline};
