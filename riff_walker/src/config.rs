/// The parsing strictness mode
///
/// This can be set with [`ParseOptions::parsing_mode`].
///
/// # Examples
///
/// ```rust
/// use riff_walker::{ParseOptions, ParsingMode};
///
/// // We only want to read spec-compliant inputs
/// let parsing_options = ParseOptions::new().parsing_mode(ParsingMode::Strict);
/// ```
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Default)]
#[non_exhaustive]
pub enum ParsingMode {
	/// Will eagerly error on invalid input
	///
	/// ## Examples of behavior
	///
	/// * The stream must begin with a `RIFF` chunk, and its form type must be
	///   `WAVE` - anything else is an error
	/// * Any truncation is an error
	Strict,
	/// Default mode
	///
	/// This mode does not question the container's identity, but truncation is
	/// still an explicit error - a cut-off file is never mistaken for a clean
	/// end of stream.
	#[default]
	BestAttempt,
	/// Least eager to error, may produce partial output
	///
	/// A payload truncated mid-chunk stops the walk cleanly, yielding
	/// everything decoded up to that point. A stream ending in the middle of a
	/// chunk *tag* remains an error in this mode too, since byte alignment is
	/// lost and decoding cannot continue.
	Relaxed,
}

/// Options to control how a chunk stream is walked
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct ParseOptions {
	pub(crate) parsing_mode: ParsingMode,
	pub(crate) allocation_limit: usize,
	pub(crate) continue_past_data: bool,
}

impl Default for ParseOptions {
	/// The default implementation for `ParseOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// ParseOptions {
	/// 	parsing_mode: ParsingMode::BestAttempt,
	/// 	allocation_limit: Self::DEFAULT_ALLOCATION_LIMIT,
	/// 	continue_past_data: false,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}

impl ParseOptions {
	/// Default parsing mode
	pub const DEFAULT_PARSING_MODE: ParsingMode = ParsingMode::BestAttempt;

	/// Default maximum number of bytes to allocate for a single payload
	pub const DEFAULT_ALLOCATION_LIMIT: usize = 16 * 1024 * 1024;

	/// Creates a new `ParseOptions`, alias for `Default` implementation
	///
	/// See also: [`ParseOptions::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use riff_walker::ParseOptions;
	///
	/// let parsing_options = ParseOptions::new();
	/// ```
	#[must_use]
	pub const fn new() -> Self {
		Self {
			parsing_mode: Self::DEFAULT_PARSING_MODE,
			allocation_limit: Self::DEFAULT_ALLOCATION_LIMIT,
			continue_past_data: false,
		}
	}

	/// The parsing mode to use, see [`ParsingMode`] for details
	///
	/// # Examples
	///
	/// ```rust
	/// use riff_walker::{ParseOptions, ParsingMode};
	///
	/// // By default, `parsing_mode` is ParsingMode::BestAttempt. Here, we need absolute correctness.
	/// let parsing_options = ParseOptions::new().parsing_mode(ParsingMode::Strict);
	/// ```
	pub fn parsing_mode(&mut self, parsing_mode: ParsingMode) -> Self {
		self.parsing_mode = parsing_mode;
		*self
	}

	/// The maximum number of bytes to allocate for a single chunk payload
	///
	/// The declared size of a chunk is untrusted input. This limit bounds how
	/// much memory a single `data` payload may claim before the walk fails with
	/// [`ChunkError::TooMuchData`](crate::ChunkError::TooMuchData). Skipped
	/// chunks never allocate, so the limit does not apply to them.
	///
	/// # Examples
	///
	/// ```rust
	/// use riff_walker::ParseOptions;
	///
	/// // I have half-hour recordings, I'll raise the ceiling!
	/// let parsing_options = ParseOptions::new().allocation_limit(512 * 1024 * 1024);
	/// ```
	pub fn allocation_limit(&mut self, allocation_limit: usize) -> Self {
		self.allocation_limit = allocation_limit;
		*self
	}

	/// Whether to keep walking after a `data` chunk
	///
	/// A `data` chunk ends the walk by default, matching the common
	/// single-`data` WAVE layout. Enabling this continues past it, so trailing
	/// chunks (metadata, additional `data`) are reported as well.
	///
	/// # Examples
	///
	/// ```rust
	/// use riff_walker::ParseOptions;
	///
	/// // I want to see trailing LIST chunks too
	/// let parsing_options = ParseOptions::new().continue_past_data(true);
	/// ```
	pub fn continue_past_data(&mut self, continue_past_data: bool) -> Self {
		self.continue_past_data = continue_past_data;
		*self
	}
}
