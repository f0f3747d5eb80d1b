use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GenerateError>;

/// Errors produced while building or running a path generator.
///
/// Duplicate path candidates are the only condition that is retried
/// (silently, up to a ceiling); every other failure aborts the whole
/// operation with no partial output, so that a run for a given seed is
/// either complete or absent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerateError {
	/// An integer draw was requested from an empty range.
	#[error("draw bound must be positive, got {bound}")]
	InvalidBound { bound: u64 },

	/// A chooser was built from an empty table or a table containing
	/// a non-positive weight.
	#[error("weight table is empty or contains non-positive weights")]
	InvalidWeights,

	/// Too many duplicate candidates in a row while filling a single
	/// pending slot; the fixed tables cannot yield the requested
	/// number of distinct paths.
	#[error("keyspace exhausted after {retries} duplicate candidates ({generated} paths generated)")]
	ExhaustedKeyspace { retries: u32, generated: usize },
}
