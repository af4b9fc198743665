//! # Workflows Module
//!
//! High-level entry points that turn raw [`SequenceRecord`](crate::core::io::traits::SequenceRecord)s
//! into [`PhysicochemicalProfile`](crate::core::models::profile::PhysicochemicalProfile)s.
//!
//! Both workflows are thin wrappers over [`PropertyEngine::profile_raw`](crate::engine::profiler::PropertyEngine::profile_raw):
//!
//! - **Single Workflow** ([`single`]) - Profiles one record and fails on the first error.
//! - **Batch Workflow** ([`batch`]) - Profiles many records, in parallel when the
//!   `parallel` feature is enabled, recording failures per record instead of
//!   aborting, and honoring a cancellation flag.

pub mod batch;
pub mod single;
