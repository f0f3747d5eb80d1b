use std::collections::HashSet;

use crate::error::{GenerateError, Result};
use super::chooser::WeightedChooser;
use super::random::{IntSource, SeededIntSource};
use super::tables;

/// Range of the directory-climb draw. One integer in
/// `[0, CLIMB_RANGE)` is drawn per non-initial path.
pub(crate) const CLIMB_RANGE: u64 = 10;

/// Climb one extra directory level when the climb draw falls below
/// this threshold (2 in 10, i.e. 20% of non-initial paths).
pub(crate) const CLIMB_THRESHOLD: u64 = 2;

/// Consecutive duplicate candidates tolerated for a single pending
/// path before generation gives up with `ExhaustedKeyspace`.
pub(crate) const MAX_COLLISION_RETRIES: u32 = 10_000;

/// Deterministic generator of unique, hierarchically structured URL
/// paths.
///
/// # Responsibilities
/// - Own the integer source and the three weight-table choosers
/// - Track directory locality from one emitted path to the next
/// - Budget the number of words appended under a working directory
/// - Guarantee that every path of a run is distinct
///
/// # Invariants
/// - All randomness flows through the single `IntSource`, in a fixed
///   per-path draw order: climb decision (non-initial paths), word
///   budget, words and separators interleaved, extension. Two
///   generators built over identical sources therefore emit identical
///   sequences.
/// - Every emitted path starts with `/`, contains no empty segment and
///   ends with an extension from the extension table.
#[derive(Debug)]
pub struct PathGenerator<S: IntSource = SeededIntSource> {
	source: S,
	words: WeightedChooser<&'static str>,
	separators: WeightedChooser<char>,
	extensions: WeightedChooser<&'static str>,
	max_words: u64,
}

impl PathGenerator<SeededIntSource> {
	/// Creates a generator whose whole output is determined by `seed`.
	///
	/// `max_words` bounds the word budget per segment group and must be
	/// at least 2; smaller values leave the budget draw with an empty
	/// range, so `generate` fails with `InvalidBound`.
	///
	/// # Errors
	/// Fails if one of the internal weight tables cannot be turned
	/// into a chooser.
	pub fn new(seed: u64, max_words: u64) -> Result<Self> {
		Self::with_source(SeededIntSource::new(seed), max_words)
	}
}

impl<S: IntSource> PathGenerator<S> {
	/// Creates a generator over an injected integer source.
	///
	/// The source is the sole supplier of randomness, so a scripted
	/// source makes every climb and budgeting decision reproducible in
	/// isolation.
	pub fn with_source(source: S, max_words: u64) -> Result<Self> {
		Ok(Self {
			source,
			words: tables::word_chooser()?,
			separators: tables::separator_chooser()?,
			extensions: tables::extension_chooser()?,
			max_words,
		})
	}

	/// Assembles a generator from explicit parts, bypassing the fixed
	/// tables.
	#[cfg(test)]
	pub(crate) fn from_parts(
		source: S,
		words: WeightedChooser<&'static str>,
		separators: WeightedChooser<char>,
		extensions: WeightedChooser<&'static str>,
		max_words: u64,
	) -> Self {
		Self { source, words, separators, extensions, max_words }
	}

	/// Generates exactly `count` unique paths, in emission order.
	///
	/// # Behavior
	/// - The first path grows from the root directory `/`; every later
	///   path grows from the previous path's directory, climbing one
	///   extra level up for `CLIMB_THRESHOLD` in `CLIMB_RANGE` draws
	///   (climbing above the root is a no-op).
	/// - A word budget in `[1, max_words - 1]` is drawn per path and
	///   reduced by the words already present in the working directory
	///   (never below one).
	/// - A candidate colliding with an already-emitted path is
	///   discarded and regenerated without counting toward `count`, up
	///   to `MAX_COLLISION_RETRIES` consecutive times per slot.
	///
	/// # Errors
	/// Any source or chooser failure aborts the whole call with no
	/// partial result; `ExhaustedKeyspace` reports a slot whose retry
	/// ceiling was reached.
	///
	/// # Notes
	/// - The previous-path pointer and the dedup set live and die with
	///   one call; independent runs never interfere.
	pub fn generate(&mut self, count: usize) -> Result<Vec<String>> {
		let mut seen: HashSet<String> = HashSet::with_capacity(count);
		let mut paths: Vec<String> = Vec::with_capacity(count);
		let mut prev: Option<String> = None;

		while paths.len() < count {
			let mut retries: u32 = 0;
			let path = loop {
				let candidate = self.next_candidate(prev.as_deref())?;
				if !seen.contains(&candidate) {
					break candidate;
				}
				retries += 1;
				if retries >= MAX_COLLISION_RETRIES {
					return Err(GenerateError::ExhaustedKeyspace {
						retries,
						generated: paths.len(),
					});
				}
			};
			seen.insert(path.clone());
			paths.push(path.clone());
			prev = Some(path);
		}

		Ok(paths)
	}

	/// Builds one path candidate below the working directory derived
	/// from `prev`. Collision checking is the caller's concern.
	fn next_candidate(&mut self, prev: Option<&str>) -> Result<String> {
		let dir = match prev {
			None => "/",
			Some(previous) => {
				let mut dir = parent_dir(previous);
				if self.source.next_int(CLIMB_RANGE)? < CLIMB_THRESHOLD {
					dir = parent_dir(dir);
				}
				dir
			}
		};

		// Word budget in [1, max_words - 1], reduced by the words the
		// working directory already carries, floored at one.
		let drawn = self.source.next_int(self.max_words.saturating_sub(1))? + 1;
		let budget = (drawn as usize).saturating_sub(segment_words(dir)).max(1);

		let mut path = String::from(dir);
		if !path.ends_with('/') {
			path.push('/');
		}
		for index in 0..budget {
			if index > 0 {
				path.push(*self.separators.choose(&mut self.source)?);
			}
			path.push_str(self.words.choose(&mut self.source)?);
		}
		path.push_str(self.extensions.choose(&mut self.source)?);

		Ok(path)
	}
}

/// Returns the parent directory of a path. The root is its own parent.
pub(crate) fn parent_dir(path: &str) -> &str {
	match path.rfind('/') {
		Some(0) | None => "/",
		Some(index) => &path[..index],
	}
}

/// Counts the words of a path: maximal runs of characters that are
/// neither `/` nor `-`.
pub(crate) fn segment_words(path: &str) -> usize {
	path.split(['/', '-']).filter(|part| !part.is_empty()).count()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::generator::chooser::Choice;
	use crate::generator::random::ScriptedIntSource;

	fn scripted(script: &[u64], max_words: u64) -> PathGenerator<ScriptedIntSource> {
		PathGenerator::with_source(ScriptedIntSource::new(script), max_words).unwrap()
	}

	// Word indices used below: 0 = "a", 4 = "act", 5 = "active",
	// 47 = "baby". Extension intervals: 0 -> .css, 1 -> .js,
	// 2..4 -> .html, 4..10 -> .png. Separators: 0..3 -> '/',
	// 3..10 -> '-'.

	#[test]
	fn first_path_grows_from_root() {
		// budget draw 2 -> three words; separators '-' then '/'.
		let mut generator = scripted(&[2, 0, 9, 4, 0, 5, 4], 8);
		let paths = generator.generate(1).unwrap();
		assert_eq!(paths, ["/a-act/active.png"]);
	}

	#[test]
	fn next_path_stays_in_previous_directory_without_climb() {
		let mut generator = scripted(&[1, 0, 0, 4, 4, /* path 2 */ 5, 0, 47, 0], 8);
		let paths = generator.generate(2).unwrap();
		// Climb draw 5 keeps the working directory at /a; the budget
		// draw of one word is already consumed by the directory and
		// gets floored back to one.
		assert_eq!(paths, ["/a/act.png", "/a/baby.css"]);
	}

	#[test]
	fn climb_draw_moves_one_level_up() {
		let mut generator = scripted(&[1, 0, 0, 4, 4, /* path 2 */ 0, 0, 47, 2], 8);
		let paths = generator.generate(2).unwrap();
		assert_eq!(paths, ["/a/act.png", "/baby.html"]);
	}

	#[test]
	fn climbing_above_root_is_a_no_op() {
		let mut generator = scripted(&[0, 0, 0, /* path 2 */ 1, 0, 4, 1], 8);
		let paths = generator.generate(2).unwrap();
		assert_eq!(paths, ["/a.css", "/act.js"]);
	}

	#[test]
	fn budget_subtracts_words_already_in_directory() {
		let script = [
			// Path 1: four words joined by '/', building a three-word
			// directory: /a/act/active/baby.png
			3, 0, 0, 4, 0, 5, 0, 47, 4,
			// Path 2: no climb; budget draw of six minus three
			// directory words leaves three words joined by '-'.
			9, 5, 0, 9, 4, 9, 5, 0,
		];
		let mut generator = scripted(&script, 8);
		let paths = generator.generate(2).unwrap();
		assert_eq!(paths[0], "/a/act/active/baby.png");
		assert_eq!(paths[1], "/a/act/active/a-act-active.css");
	}

	#[test]
	fn duplicate_candidates_are_regenerated() {
		let script = [
			0, 0, 0, // path 1: /a.css
			5, 0, 0, 0, // path 2, first attempt: /a.css again
			5, 0, 4, 0, // path 2, second attempt: /act.css
		];
		let mut generator = scripted(&script, 8);
		let paths = generator.generate(2).unwrap();
		assert_eq!(paths, ["/a.css", "/act.css"]);
	}

	#[test]
	fn source_failure_aborts_with_no_partial_output() {
		// Enough draws for one path only; the climb draw of the second
		// path fails.
		let mut generator = scripted(&[0, 0, 0], 8);
		assert_eq!(
			generator.generate(2).unwrap_err(),
			GenerateError::InvalidBound { bound: CLIMB_RANGE }
		);
	}

	#[test]
	fn max_words_below_two_fails_the_budget_draw() {
		for max_words in [0, 1] {
			let mut generator = PathGenerator::new(7, max_words).unwrap();
			assert_eq!(
				generator.generate(1).unwrap_err(),
				GenerateError::InvalidBound { bound: 0 }
			);
		}
	}

	#[test]
	fn tiny_keyspace_reports_exhaustion() {
		// One word, one separator, one extension and max_words = 2
		// admit exactly one path below the root.
		let words = WeightedChooser::new(vec![Choice { weight: 1, item: "a" }]).unwrap();
		let separators = WeightedChooser::new(vec![Choice { weight: 1, item: '-' }]).unwrap();
		let extensions = WeightedChooser::new(vec![Choice { weight: 1, item: ".css" }]).unwrap();
		let mut generator = PathGenerator::from_parts(
			SeededIntSource::new(11),
			words,
			separators,
			extensions,
			2,
		);
		assert_eq!(
			generator.generate(2).unwrap_err(),
			GenerateError::ExhaustedKeyspace { retries: MAX_COLLISION_RETRIES, generated: 1 }
		);
	}

	#[test]
	fn generate_zero_returns_empty() {
		let mut generator = PathGenerator::new(1, 8).unwrap();
		assert!(generator.generate(0).unwrap().is_empty());
	}

	#[test]
	fn parent_dir_walks_up_one_level() {
		assert_eq!(parent_dir("/a/act.png"), "/a");
		assert_eq!(parent_dir("/a"), "/");
		assert_eq!(parent_dir("/"), "/");
		assert_eq!(parent_dir("/a/b-c/d.html"), "/a/b-c");
	}

	#[test]
	fn segment_words_counts_separator_delimited_runs() {
		assert_eq!(segment_words("/"), 0);
		assert_eq!(segment_words("/a"), 1);
		assert_eq!(segment_words("/a/b-c"), 3);
		assert_eq!(segment_words("/a/act/active"), 3);
		assert_eq!(segment_words("a--b//c"), 3);
	}
}
