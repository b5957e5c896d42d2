use std::error::Error;
use std::fmt;

/// Alias for `Result<T, ChunkError>`
pub type Result<T> = std::result::Result<T, ChunkError>;

/// Errors that can occur while walking a chunk stream
#[derive(Debug)]
#[non_exhaustive]
pub enum ChunkError {
	/// The stream ended with 1-3 bytes where a chunk tag was expected
	///
	/// A tag is exactly 4 bytes. Ending on a partial tag means byte alignment
	/// is lost, so this is fatal in every [`ParsingMode`](crate::ParsingMode).
	/// A stream ending with *zero* bytes available is a clean end, not an error.
	TruncatedTag,
	/// A read claimed more bytes than the stream has left
	///
	/// Either a fixed-width field came up short, or a chunk's declared size
	/// exceeds the remaining stream length (a truncated or lying file).
	UnexpectedEndOfStream,
	/// A payload would allocate more than the configured limit
	///
	/// See [`ParseOptions::allocation_limit`](crate::ParseOptions::allocation_limit).
	TooMuchData,
	/// The stream does not begin with a `RIFF` chunk
	///
	/// Only raised by [`ParsingMode::Strict`](crate::ParsingMode::Strict).
	MissingMagic,
	/// The RIFF form type is not `WAVE`
	///
	/// Only raised by [`ParsingMode::Strict`](crate::ParsingMode::Strict).
	/// Carries the form type that was found.
	FormTypeMismatch([u8; 4]),
	/// Any std::io::Error
	Io(std::io::Error),
}

impl fmt::Display for ChunkError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ChunkError::TruncatedTag => {
				write!(f, "Stream ended in the middle of a chunk tag")
			},
			ChunkError::UnexpectedEndOfStream => {
				write!(f, "Too little data is available for the expected read")
			},
			ChunkError::TooMuchData => {
				write!(f, "A chunk payload is larger than the allocation limit")
			},
			ChunkError::MissingMagic => {
				write!(f, "Stream does not begin with a RIFF chunk")
			},
			ChunkError::FormTypeMismatch(found) => {
				write!(
					f,
					"Found a RIFF container, form type is not WAVE (got \"{}\")",
					found.escape_ascii()
				)
			},
			ChunkError::Io(err) => write!(f, "{}", err),
		}
	}
}

impl Error for ChunkError {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		match *self {
			ChunkError::Io(ref e) => Some(e),
			_ => None,
		}
	}
}

impl From<std::io::Error> for ChunkError {
	fn from(err: std::io::Error) -> ChunkError {
		ChunkError::Io(err)
	}
}
