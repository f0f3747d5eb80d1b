use crate::error::{GenerateError, Result};
use super::random::IntSource;

/// A single weighted alternative: a positive weight paired with the
/// item it selects.
#[derive(Debug, Clone)]
pub struct Choice<T> {
	pub weight: u64,
	pub item: T,
}

/// Weighted sampler over a fixed, ordered set of alternatives.
///
/// Conceptually each item owns an interval of the `[0, total_weight)`
/// range proportional to its weight; one bounded draw lands in exactly
/// one interval, so the long-run frequency of an item converges to
/// `weight / total_weight`.
///
/// ## Responsibilities
/// - Validate the weight table once, at construction
/// - Precompute the cumulative-weight table
/// - Map one `IntSource` draw per call onto an item via binary search
///
/// ## Invariants
/// - `cumulative` is strictly increasing and `cumulative[i]` is the sum
///   of the first `i + 1` weights
/// - `total` equals the last entry of `cumulative` and is positive
/// - Exactly one draw is consumed per `choose` call, so call order
///   across choosers sharing a source fully determines reproducibility
#[derive(Debug, Clone)]
pub struct WeightedChooser<T> {
	items: Vec<T>,
	cumulative: Vec<u64>,
	total: u64,
}

impl<T> WeightedChooser<T> {
	/// Builds a chooser from an ordered list of weighted alternatives.
	///
	/// # Errors
	/// Returns `InvalidWeights` if the list is empty or any weight is
	/// zero (a zero-weight entry could never be chosen and is always a
	/// table-authoring mistake).
	pub fn new(choices: Vec<Choice<T>>) -> Result<Self> {
		if choices.is_empty() {
			return Err(GenerateError::InvalidWeights);
		}

		let mut items = Vec::with_capacity(choices.len());
		let mut cumulative = Vec::with_capacity(choices.len());
		let mut total: u64 = 0;
		for choice in choices {
			if choice.weight == 0 {
				return Err(GenerateError::InvalidWeights);
			}
			total += choice.weight;
			cumulative.push(total);
			items.push(choice.item);
		}

		Ok(Self { items, cumulative, total })
	}

	/// Selects one item, consuming exactly one draw from `source`.
	///
	/// The draw is taken in `[0, total_weight)` and mapped to the item
	/// whose cumulative interval contains it.
	///
	/// # Errors
	/// Propagates any `IntSource` failure.
	pub fn choose<S: IntSource + ?Sized>(&self, source: &mut S) -> Result<&T> {
		let draw = source.next_int(self.total)?;
		// First index whose cumulative bound exceeds the draw.
		let index = self.cumulative.partition_point(|&bound| bound <= draw);
		Ok(&self.items[index])
	}

	/// Number of alternatives in the table.
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Sum of all weights.
	pub fn total_weight(&self) -> u64 {
		self.total
	}
}
