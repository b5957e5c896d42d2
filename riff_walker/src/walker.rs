//! The chunk-by-chunk walk over a stream

use crate::chunk::{
	Chunk, ChunkHeader, DataChunk, FMT_FIELDS_SIZE, FmtChunk, RiffHeader, Tag, UnknownChunk,
};
use crate::config::{ParseOptions, ParsingMode};
use crate::error::{ChunkError, Result};
use crate::reader::{ReadChunkExt, SeekStreamLen, eof_to_end_of_stream};

use std::io::{Read, Seek, SeekFrom};
use std::iter::FusedIterator;

/// A lazy, chunk-by-chunk walk over a stream
///
/// Each call to [`next_chunk`](ChunkWalker::next_chunk) decodes exactly one
/// chunk and leaves the stream at the next chunk boundary, so the walk never
/// holds more memory than the record it is handing out.
///
/// The walker is fused: after the stream ends, or after the first error,
/// every further call returns `Ok(None)`.
///
/// # Examples
///
/// ```rust,no_run
/// use riff_walker::ChunkWalker;
///
/// # fn main() -> riff_walker::Result<()> {
/// let file = std::fs::File::open("music.wav")?;
/// let mut walker = ChunkWalker::new(file)?;
///
/// while let Some(chunk) = walker.next_chunk()? {
/// 	println!("{} at offset {}", chunk.tag(), walker.position()?);
/// }
/// # Ok(()) }
/// ```
pub struct ChunkWalker<R> {
	reader: R,
	options: ParseOptions,
	stream_len: u64,
	at_start: bool,
	finished: bool,
}

impl<R> ChunkWalker<R>
where
	R: Read + Seek,
{
	/// Creates a walker with [`ParseOptions::default`]
	///
	/// The walk starts wherever `reader` is currently positioned.
	///
	/// # Errors
	///
	/// * The reader could not seek to its end (done once up front, so that
	///   declared sizes can be checked against the bytes actually remaining)
	pub fn new(reader: R) -> Result<Self> {
		Self::with_options(reader, ParseOptions::default())
	}

	/// Creates a walker with explicit [`ParseOptions`]
	///
	/// # Errors
	///
	/// * The reader could not seek to its end (done once up front, so that
	///   declared sizes can be checked against the bytes actually remaining)
	pub fn with_options(mut reader: R, options: ParseOptions) -> Result<Self> {
		let stream_len = reader.stream_len_hack()?;

		Ok(Self {
			reader,
			options,
			stream_len,
			at_start: true,
			finished: false,
		})
	}

	/// Decodes the next chunk, or returns `Ok(None)` once the stream ends
	/// cleanly at a chunk boundary
	///
	/// One call consumes exactly one chunk: the 8 byte header plus the
	/// declared payload. The outer `RIFF` chunk is the exception, consuming
	/// only the 4 byte form type past its header, since its declared size
	/// spans every chunk that follows.
	///
	/// By default the walk also ends after the `data` chunk; see
	/// [`ParseOptions::continue_past_data`].
	///
	/// # Errors
	///
	/// Every error is terminal for the walker. Records returned before it
	/// remain valid.
	///
	/// * [`ChunkError::TruncatedTag`]: the stream ended 1-3 bytes into a tag
	/// * [`ChunkError::UnexpectedEndOfStream`]: a size field was torn, or a
	///   declared size claimed more bytes than the stream has left (under
	///   [`ParsingMode::Relaxed`], the payload case ends the walk cleanly
	///   instead)
	/// * [`ChunkError::TooMuchData`]: a `data` payload exceeded
	///   [`ParseOptions::allocation_limit`]
	/// * [`ChunkError::MissingMagic`] / [`ChunkError::FormTypeMismatch`]: the
	///   [`ParsingMode::Strict`] identity checks failed
	/// * [`ChunkError::Io`]: the reader failed with something other than a
	///   clean end
	pub fn next_chunk(&mut self) -> Result<Option<Chunk>> {
		if self.finished {
			return Ok(None);
		}

		match self.walk_one() {
			Ok(Some(chunk)) => Ok(Some(chunk)),
			Ok(None) => {
				self.finished = true;
				Ok(None)
			},
			Err(err) => {
				self.finished = true;
				Err(err)
			},
		}
	}

	fn walk_one(&mut self) -> Result<Option<Chunk>> {
		let Some(header) = ChunkHeader::read(&mut self.reader)? else {
			return Ok(None);
		};

		let first = self.at_start;
		self.at_start = false;

		if first && self.options.parsing_mode == ParsingMode::Strict && header.tag != Tag::RIFF {
			return Err(ChunkError::MissingMagic);
		}

		log::debug!("Chunk {}, declared size: {} bytes", header.tag, header.size);

		let decoded = match header.tag {
			Tag::RIFF => self.read_riff_header(&header).map(Chunk::Riff),
			Tag::FMT => self.read_fmt(&header).map(Chunk::Fmt),
			Tag::DATA => self.read_data(&header).map(Chunk::Data),
			tag => self.skip_unknown(tag, header.size).map(Chunk::Unknown),
		};

		let chunk = match decoded {
			Ok(chunk) => chunk,
			Err(ChunkError::UnexpectedEndOfStream)
				if self.options.parsing_mode == ParsingMode::Relaxed =>
			{
				log::warn!(
					"Chunk {} claims {} bytes, more than the stream has left; ending the walk",
					header.tag,
					header.size
				);
				return Ok(None);
			},
			Err(err) => return Err(err),
		};

		if header.tag == Tag::DATA && !self.options.continue_past_data {
			log::debug!("data chunk decoded, ending the walk");
			self.finished = true;
		}

		Ok(Some(chunk))
	}

	fn read_riff_header(&mut self, header: &ChunkHeader) -> Result<RiffHeader> {
		let mut form_type = [0; 4];
		self.reader
			.read_exact(&mut form_type)
			.map_err(eof_to_end_of_stream)?;

		let riff = RiffHeader {
			size: header.size,
			form_type,
		};

		if self.options.parsing_mode == ParsingMode::Strict && !riff.is_wave() {
			return Err(ChunkError::FormTypeMismatch(form_type));
		}

		Ok(riff)
	}

	fn read_fmt(&mut self, header: &ChunkHeader) -> Result<FmtChunk> {
		let fmt = FmtChunk {
			size: header.size,
			format_tag: self.reader.read_u16_le()?,
			channels: self.reader.read_u16_le()?,
			sample_rate: self.reader.read_u32_le()?,
			bytes_per_second: self.reader.read_u32_le()?,
			block_align: self.reader.read_u16_le()?,
			bits_per_sample: self.reader.read_u16_le()?,
		};

		if fmt.size_mismatch() {
			log::warn!(
				"fmt chunk declares {} bytes, decoded the fixed {}",
				fmt.size,
				FMT_FIELDS_SIZE
			);
		}

		// Extended descriptors (18 and 40 byte variants) are valid. Whatever
		// follows the fixed fields still counts toward the declared size, so
		// it is passed over to land on the next chunk boundary.
		if fmt.size > FMT_FIELDS_SIZE {
			self.skip_ahead(u64::from(fmt.size - FMT_FIELDS_SIZE))?;
		}

		Ok(fmt)
	}

	fn read_data(&mut self, header: &ChunkHeader) -> Result<DataChunk> {
		if u64::from(header.size) > self.remaining()? {
			return Err(ChunkError::UnexpectedEndOfStream);
		}

		let samples = self
			.reader
			.read_owned(header.size, self.options.allocation_limit)?;

		Ok(DataChunk { samples })
	}

	fn skip_unknown(&mut self, tag: Tag, size: u32) -> Result<UnknownChunk> {
		self.skip_ahead(u64::from(size))?;

		Ok(UnknownChunk { tag, size })
	}

	fn skip_ahead(&mut self, count: u64) -> Result<()> {
		// Seeking past the end succeeds silently, so the declared size has
		// to be checked against the bytes actually remaining first.
		if count > self.remaining()? {
			return Err(ChunkError::UnexpectedEndOfStream);
		}

		self.reader.seek(SeekFrom::Current(count as i64))?;
		Ok(())
	}

	fn remaining(&mut self) -> Result<u64> {
		let pos = self.reader.stream_position()?;
		Ok(self.stream_len.saturating_sub(pos))
	}

	/// The stream offset the next read will start from
	///
	/// After a fully decoded chunk, this is exactly the chunk's start plus 8
	/// plus its declared size, whatever kind of chunk it was. The outer
	/// `RIFF` chunk is the exception, advancing the offset by 12 in total.
	///
	/// # Errors
	///
	/// * The reader could not report its position
	pub fn position(&mut self) -> Result<u64> {
		Ok(self.reader.stream_position()?)
	}

	/// Returns the underlying reader
	///
	/// The reader is positioned wherever the walk left it.
	pub fn into_inner(self) -> R {
		self.reader
	}
}

impl<R> Iterator for ChunkWalker<R>
where
	R: Read + Seek,
{
	type Item = Result<Chunk>;

	fn next(&mut self) -> Option<Self::Item> {
		self.next_chunk().transpose()
	}
}

impl<R> FusedIterator for ChunkWalker<R> where R: Read + Seek {}
