//! Top-level module for the URL-path generation system.
//!
//! This crate provides a deterministic generator of synthetic URL
//! paths, including:
//! - A seedable bounded-integer source (`random`)
//! - Weighted sampling over fixed item tables (`chooser`)
//! - Hierarchy-aware path construction with uniqueness (`path_generator`)

/// High-level interface for generating unique hierarchical URL paths.
///
/// Exposes seeded construction, directory-locality handling, word
/// budgeting and collision-checked path emission.
pub mod path_generator;

/// Weighted sampling over a fixed, ordered set of alternatives.
///
/// Precomputes a cumulative-weight table at construction and maps one
/// bounded draw per call onto an item via binary search.
pub mod chooser;

/// Bounded-integer randomness.
///
/// Defines the `IntSource` capability injected into every sampling
/// component, and the seeded implementation used in production.
pub mod random;

/// Static weight tables (words, separators, extensions).
///
/// Fixed internal data shared by every generator instance.
/// This module is not exposed publicly.
pub(crate) mod tables;
