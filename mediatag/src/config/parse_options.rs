/// The parsing strictness mode
///
/// # Examples
///
/// ```rust
/// use mediatag::config::{ParseOptions, ParsingMode};
///
/// // We only want to read well-formed inputs
/// let parsing_options = ParseOptions::new().parsing_mode(ParsingMode::Strict);
/// ```
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Default)]
#[non_exhaustive]
pub enum ParsingMode {
	/// Will eagerly error on invalid input
	///
	/// This mode will eagerly error on any malformed input.
	///
	/// ## Examples of behavior
	///
	/// * An ASF file header disagrees with the real stream length - The parser will error
	/// * An APE item has an empty key - The parser will error and the entire tag is discarded
	Strict,
	/// Default mode, less eager to error on recoverably malformed input
	///
	/// ## Examples of behavior
	///
	/// * An ASF file header disagrees with the real stream length - A warning is logged
	/// * An APE item has an empty key - The item is skipped
	/// * An ASF string is not valid UTF-16 - Invalid sequences are replaced
	#[default]
	BestAttempt,
	/// Least eager to error, may produce invalid/partial output
	///
	/// ## Examples of behavior
	///
	/// * An ASF string is not valid UTF-16 - The string is left empty
	Relaxed,
}

/// Options to control how mediatag parses its input
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct ParseOptions {
	pub(crate) parsing_mode: ParsingMode,
	pub(crate) max_item_size: u32,
}

impl Default for ParseOptions {
	/// The default implementation for `ParseOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// ParseOptions {
	/// 	parsing_mode: ParsingMode::BestAttempt,
	/// 	max_item_size: 500_000,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}

impl ParseOptions {
	/// Default parsing mode
	pub const DEFAULT_PARSING_MODE: ParsingMode = ParsingMode::BestAttempt;

	/// Default upper bound for the size of a single APE item value
	pub const DEFAULT_MAX_ITEM_SIZE: u32 = 500_000;

	/// Creates a new `ParseOptions`, alias for `Default` implementation
	///
	/// See also: [`ParseOptions::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use mediatag::config::ParseOptions;
	///
	/// let parsing_options = ParseOptions::new();
	/// ```
	#[must_use]
	pub const fn new() -> Self {
		Self {
			parsing_mode: Self::DEFAULT_PARSING_MODE,
			max_item_size: Self::DEFAULT_MAX_ITEM_SIZE,
		}
	}

	/// The parsing mode to use, see [`ParsingMode`] for details
	///
	/// # Examples
	///
	/// ```rust
	/// use mediatag::config::{ParseOptions, ParsingMode};
	///
	/// // By default, `parsing_mode` is ParsingMode::BestAttempt. Here, we need absolute correctness.
	/// let parsing_options = ParseOptions::new().parsing_mode(ParsingMode::Strict);
	/// ```
	pub fn parsing_mode(&mut self, parsing_mode: ParsingMode) -> Self {
		self.parsing_mode = parsing_mode;
		*self
	}

	/// The largest APE item value (in bytes) to accept
	///
	/// Any item declaring a larger value is treated as corruption, and the tag is rejected.
	///
	/// # Examples
	///
	/// ```rust
	/// use mediatag::config::ParseOptions;
	///
	/// // My tags carry large cover art
	/// let parsing_options = ParseOptions::new().max_item_size(4 * 1024 * 1024);
	/// ```
	pub fn max_item_size(&mut self, max_item_size: u32) -> Self {
		self.max_item_size = max_item_size;
		*self
	}
}
