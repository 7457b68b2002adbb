//! Common utilities for amber.
//!
//! This crate provides the caller-owned sinks every serialization pass writes
//! into:
//! - **Warnings** - ordered, deduplicated messages with colored terminal output
//! - **Resources** - append-only store of externally addressable text blobs
//! - **Uids** - address generation for new resources

pub mod resource;
pub mod uid;
pub mod warning;

pub use resource::{Resource, Resources, resource_from_text};
pub use uid::{RandomUids, SequentialUids, UidGenerator};
pub use warning::Warnings;
