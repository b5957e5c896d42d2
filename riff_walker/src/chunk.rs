//! The chunk layout and the records a walk produces

use crate::error::Result;
use crate::reader::ReadChunkExt;

use std::fmt;
use std::io::Read;

/// The fixed `fmt ` field layout: 2+2+4+4+2+2
pub(crate) const FMT_FIELDS_SIZE: u32 = 16;

/// A chunk's 4 byte identifier
///
/// Tags are opaque bytes compared for exact equality. They are not numbers
/// (no byte-order interpretation applies), not case-folded, and not
/// guaranteed to be printable text.
///
/// # Examples
///
/// ```rust
/// use riff_walker::Tag;
///
/// assert_eq!(Tag::FMT, Tag(*b"fmt "));
/// assert_ne!(Tag::FMT, Tag(*b"FMT "));
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Tag(pub [u8; 4]);

impl Tag {
	/// The outer container header
	pub const RIFF: Self = Self(*b"RIFF");
	/// The format descriptor
	pub const FMT: Self = Self(*b"fmt ");
	/// The audio sample payload
	pub const DATA: Self = Self(*b"data");

	/// Returns the raw tag bytes
	pub const fn bytes(self) -> [u8; 4] {
		self.0
	}
}

impl From<[u8; 4]> for Tag {
	fn from(bytes: [u8; 4]) -> Self {
		Self(bytes)
	}
}

impl fmt::Display for Tag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0.escape_ascii())
	}
}

impl fmt::Debug for Tag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Tag(b\"{}\")", self.0.escape_ascii())
	}
}

/// The 8 byte header every chunk starts with
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ChunkHeader {
	/// The chunk's tag
	pub tag: Tag,
	/// The payload byte count following the header, as declared by the stream
	///
	/// Untrusted input: it may be zero, and it may claim more bytes than the
	/// stream actually has left.
	pub size: u32,
}

impl ChunkHeader {
	/// The encoded byte length of every header: a 4 byte tag plus a 4 byte size
	pub const SIZE: u64 = 8;

	/// Attempts to read a chunk header from the current stream position
	///
	/// Returns `Ok(None)` when the stream ends cleanly, with zero bytes
	/// available where the next tag would start.
	///
	/// # Errors
	///
	/// * [`TruncatedTag`](crate::ChunkError::TruncatedTag): the stream ended
	///   1-3 bytes into the tag
	/// * [`UnexpectedEndOfStream`](crate::ChunkError::UnexpectedEndOfStream):
	///   the stream ended inside the size field
	pub fn read<R>(reader: &mut R) -> Result<Option<Self>>
	where
		R: Read,
	{
		let Some(tag) = reader.read_tag_bytes()? else {
			return Ok(None);
		};

		let size = reader.read_u32_le()?;

		Ok(Some(Self {
			tag: Tag(tag),
			size,
		}))
	}
}

/// The decoded outer `RIFF` chunk
///
/// Unlike every other chunk, the declared size here spans the whole remainder
/// of the file (all nested chunks), not a skippable payload. The walker
/// consumes only the 4 byte form type after the header and never uses this
/// size to advance the stream.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RiffHeader {
	/// The declared size of everything following the size field
	pub size: u32,
	/// The container's content family, `WAVE` for wave audio
	pub form_type: [u8; 4],
}

impl RiffHeader {
	/// Whether the form type is the wave audio marker
	pub fn is_wave(&self) -> bool {
		self.form_type == *b"WAVE"
	}
}

/// The decoded `fmt ` format descriptor
///
/// All numeric fields are read little-endian from the fixed 16 byte layout.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct FmtChunk {
	/// The declared chunk size
	///
	/// 16 for the plain layout; 18 and 40 byte extended variants exist in the
	/// wild. Bytes beyond the fixed layout are skipped, not decoded.
	pub size: u32,
	/// The wave format tag, e.g. [`FmtChunk::PCM`]
	pub format_tag: u16,
	/// Channel count
	pub channels: u16,
	/// Sample rate (Hz)
	pub sample_rate: u32,
	/// Average bytes per second
	pub bytes_per_second: u32,
	/// Bytes per sample frame across all channels
	pub block_align: u16,
	/// Bits per sample
	pub bits_per_sample: u16,
}

impl FmtChunk {
	/// Uncompressed PCM
	pub const PCM: u16 = 0x0001;
	/// IEEE floating-point samples
	pub const IEEE_FLOAT: u16 = 0x0003;
	/// Extended descriptor, the real format tag lives in the extension bytes
	pub const EXTENSIBLE: u16 = 0xFFFE;

	/// Whether the declared size disagrees with the 16 byte layout actually decoded
	///
	/// This is an advisory, never an error: the fields above are valid either
	/// way, and the walker stays aligned on the declared size.
	pub fn size_mismatch(&self) -> bool {
		self.size != FMT_FIELDS_SIZE
	}
}

/// The decoded `data` chunk: the raw audio sample payload
///
/// The payload is owned by this record alone; it never aliases the input
/// stream's buffer. A record is only produced once the full declared size has
/// been read, so `samples.len()` always equals the size the stream declared.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DataChunk {
	/// The raw sample bytes, exactly as stored in the stream
	pub samples: Vec<u8>,
}

impl DataChunk {
	/// The declared (and actual) payload size
	pub fn size(&self) -> u32 {
		self.samples.len() as u32
	}
}

/// A chunk with an unrecognized tag
///
/// Not an error: RIFF permits vendor-specific chunks. The payload was
/// consumed from the stream but not retained.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct UnknownChunk {
	/// The unrecognized tag
	pub tag: Tag,
	/// The declared payload size that was skipped
	pub size: u32,
}

/// A decoded chunk record
///
/// Produced in file order by [`ChunkWalker`](crate::ChunkWalker), one record
/// per chunk.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Chunk {
	/// The outer container header
	Riff(RiffHeader),
	/// The format descriptor
	Fmt(FmtChunk),
	/// The audio sample payload
	Data(DataChunk),
	/// Anything else
	Unknown(UnknownChunk),
}

impl Chunk {
	/// The tag this record was decoded from
	pub fn tag(&self) -> Tag {
		match self {
			Chunk::Riff(_) => Tag::RIFF,
			Chunk::Fmt(_) => Tag::FMT,
			Chunk::Data(_) => Tag::DATA,
			Chunk::Unknown(unknown) => unknown.tag,
		}
	}
}
