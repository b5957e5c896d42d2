//! A one-call read of every chunk a wave file is made of

use crate::chunk::{Chunk, DataChunk, FmtChunk, RiffHeader, UnknownChunk};
use crate::config::ParseOptions;
use crate::error::Result;
use crate::walker::ChunkWalker;

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

/// Every chunk of a wave file, walked to the end in one call
///
/// This is the eager counterpart to driving a [`ChunkWalker`] by hand: the
/// whole stream is walked up front and the typed records are kept. Chunks
/// the walk does not recognize are retained as [`UnknownChunk`] stubs, in
/// file order.
///
/// # Examples
///
/// ```rust,no_run
/// use riff_walker::{ParseOptions, WavFile};
///
/// # fn main() -> riff_walker::Result<()> {
/// let wav = WavFile::read_from_path("music.wav", ParseOptions::new())?;
///
/// if let Some(fmt) = wav.fmt() {
/// 	println!("{} Hz, {} channel(s)", fmt.sample_rate, fmt.channels);
/// }
/// # Ok(()) }
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct WavFile {
	riff: Option<RiffHeader>,
	fmt: Option<FmtChunk>,
	data: Option<DataChunk>,
	unknown_chunks: Vec<UnknownChunk>,
}

impl WavFile {
	/// Walks every chunk of `reader`
	///
	/// The reader is left wherever the walk ended. Should a chunk kind occur
	/// more than once, the first occurrence wins and the rest are dropped
	/// with a warning.
	///
	/// # Errors
	///
	/// Any error a [`ChunkWalker`] can return; see
	/// [`ChunkWalker::next_chunk`].
	pub fn read_from<R>(reader: &mut R, options: ParseOptions) -> Result<Self>
	where
		R: Read + Seek,
	{
		let mut file = Self::default();
		let mut walker = ChunkWalker::with_options(reader, options)?;

		while let Some(chunk) = walker.next_chunk()? {
			match chunk {
				Chunk::Riff(riff) => {
					if file.riff.is_some() {
						log::warn!("Duplicate RIFF header found, keeping the first");
						continue;
					}

					file.riff = Some(riff);
				},
				Chunk::Fmt(fmt) => {
					if file.fmt.is_some() {
						log::warn!("Duplicate fmt chunk found, keeping the first");
						continue;
					}

					file.fmt = Some(fmt);
				},
				Chunk::Data(data) => {
					if file.data.is_some() {
						log::warn!("Duplicate data chunk found, keeping the first");
						continue;
					}

					file.data = Some(data);
				},
				Chunk::Unknown(unknown) => file.unknown_chunks.push(unknown),
			}
		}

		Ok(file)
	}

	/// Opens the file at `path` and walks every chunk
	///
	/// # Errors
	///
	/// * `path` does not exist
	/// * Any error a [`ChunkWalker`] can return; see
	///   [`ChunkWalker::next_chunk`]
	pub fn read_from_path<P>(path: P, options: ParseOptions) -> Result<Self>
	where
		P: AsRef<Path>,
	{
		let mut reader = BufReader::new(File::open(path)?);
		Self::read_from(&mut reader, options)
	}

	/// The outer `RIFF` header, if the stream had one
	pub fn riff(&self) -> Option<&RiffHeader> {
		self.riff.as_ref()
	}

	/// The format descriptor, if the stream had one
	pub fn fmt(&self) -> Option<&FmtChunk> {
		self.fmt.as_ref()
	}

	/// The audio sample payload, if the stream had one
	pub fn data(&self) -> Option<&DataChunk> {
		self.data.as_ref()
	}

	/// Every chunk the walk did not recognize, in file order
	pub fn unknown_chunks(&self) -> &[UnknownChunk] {
		&self.unknown_chunks
	}
}
