//! Deterministic URL-path workload generation library.
//!
//! This crate provides a reproducible synthetic-workload generator
//! producing hierarchically structured URL paths, including:
//! - A seedable source of uniform bounded integers
//! - Weighted sampling over fixed item tables
//! - Hierarchy-aware path construction with global uniqueness
//!
//! Only the high-level API is exposed publicly. The static word,
//! separator and extension tables are kept internal so that every
//! generator instance samples from the same fixed data.

/// Core sampling and path-construction logic.
///
/// This module exposes the generator interface while keeping the
/// static weight tables private.
pub mod generator;

/// Error taxonomy shared by the whole generation pipeline.
pub mod error;
