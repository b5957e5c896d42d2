//! A simple RIFF/WAVE chunk walker
//!
//! A [RIFF] stream is a flat sequence of chunks. Every chunk starts with an
//! 8 byte header, a 4 byte tag plus a 4 byte little-endian payload size, and
//! carries exactly that many payload bytes after it. Walking the stream is
//! nothing more than reading a header, then either decoding the payload or
//! seeking past it.
//!
//! Three tags get typed records: the outer `RIFF` header (whose declared
//! size spans the rest of the file, and which is therefore never skipped),
//! the `fmt ` format descriptor, and the `data` sample payload. Every other
//! tag becomes an [`UnknownChunk`] stub and its payload is passed over
//! byte-exactly, leaving the stream on the next chunk boundary.
//!
//! Declared sizes are untrusted throughout: a chunk claiming more bytes than
//! the stream has left is an explicit [`ChunkError`], never a silent
//! short read.
//!
//! # Examples
//!
//! ```rust
//! use riff_walker::{Chunk, ChunkWalker};
//! use std::io::Cursor;
//!
//! # fn main() -> riff_walker::Result<()> {
//! // An 8 kHz, 8 bit, mono wave file with four samples
//! let mut bytes = Vec::new();
//! bytes.extend_from_slice(b"RIFF");
//! bytes.extend_from_slice(&40_u32.to_le_bytes());
//! bytes.extend_from_slice(b"WAVE");
//! bytes.extend_from_slice(b"fmt ");
//! bytes.extend_from_slice(&16_u32.to_le_bytes());
//! bytes.extend_from_slice(&1_u16.to_le_bytes()); // PCM
//! bytes.extend_from_slice(&1_u16.to_le_bytes());
//! bytes.extend_from_slice(&8000_u32.to_le_bytes());
//! bytes.extend_from_slice(&8000_u32.to_le_bytes());
//! bytes.extend_from_slice(&1_u16.to_le_bytes());
//! bytes.extend_from_slice(&8_u16.to_le_bytes());
//! bytes.extend_from_slice(b"data");
//! bytes.extend_from_slice(&4_u32.to_le_bytes());
//! bytes.extend_from_slice(&[0x80, 0x7F, 0x80, 0x7F]);
//!
//! let mut walker = ChunkWalker::new(Cursor::new(bytes))?;
//!
//! let Some(Chunk::Riff(riff)) = walker.next_chunk()? else { unreachable!() };
//! assert!(riff.is_wave());
//!
//! let Some(Chunk::Fmt(fmt)) = walker.next_chunk()? else { unreachable!() };
//! assert_eq!(fmt.sample_rate, 8000);
//!
//! let Some(Chunk::Data(data)) = walker.next_chunk()? else { unreachable!() };
//! assert_eq!(data.samples, [0x80, 0x7F, 0x80, 0x7F]);
//!
//! assert_eq!(walker.next_chunk()?, None);
//! # Ok(()) }
//! ```
//!
//! [RIFF]: https://en.wikipedia.org/wiki/Resource_Interchange_File_Format

mod chunk;
mod config;
mod error;
mod reader;
mod walker;
mod wav;

pub use chunk::{Chunk, ChunkHeader, DataChunk, FmtChunk, RiffHeader, Tag, UnknownChunk};
pub use config::{ParseOptions, ParsingMode};
pub use error::{ChunkError, Result};
pub use walker::ChunkWalker;
pub use wav::WavFile;
