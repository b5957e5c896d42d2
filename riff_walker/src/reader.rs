//! Byte-level reads shared by the header decoder and the walker
//!
//! Everything here consumes exactly what it reports consuming. Short reads are
//! classified into [`ChunkError`] kinds instead of being silently zero-filled.

use crate::error::{ChunkError, Result};

use std::io::{ErrorKind, Read, Seek, SeekFrom};

use byteorder::{LittleEndian, ReadBytesExt};

pub(crate) fn eof_to_end_of_stream(err: std::io::Error) -> ChunkError {
	if err.kind() == ErrorKind::UnexpectedEof {
		ChunkError::UnexpectedEndOfStream
	} else {
		ChunkError::Io(err)
	}
}

pub(crate) trait ReadChunkExt: Read {
	/// Consumes exactly 2 bytes, low-order byte first
	fn read_u16_le(&mut self) -> Result<u16> {
		self.read_u16::<LittleEndian>().map_err(eof_to_end_of_stream)
	}

	/// Consumes exactly 4 bytes, low-order byte first
	fn read_u32_le(&mut self) -> Result<u32> {
		self.read_u32::<LittleEndian>().map_err(eof_to_end_of_stream)
	}

	/// Consumes exactly 4 raw bytes, with no byte-order interpretation
	///
	/// Returns `Ok(None)` if the stream ended with zero bytes available (a
	/// clean end), and [`ChunkError::TruncatedTag`] if it ended after 1-3
	/// bytes (alignment is lost).
	fn read_tag_bytes(&mut self) -> Result<Option<[u8; 4]>> {
		let mut tag = [0; 4];
		let mut filled = 0;
		while filled < tag.len() {
			match self.read(&mut tag[filled..]) {
				Ok(0) => break,
				Ok(n) => filled += n,
				Err(e) if e.kind() == ErrorKind::Interrupted => {},
				Err(e) => return Err(e.into()),
			}
		}

		match filled {
			0 => Ok(None),
			4 => Ok(Some(tag)),
			_ => Err(ChunkError::TruncatedTag),
		}
	}

	/// Consumes exactly `len` bytes into a freshly allocated buffer
	///
	/// The allocation is fallible: `len` is untrusted input, so anything over
	/// `limit` (or whatever the allocator refuses) fails with
	/// [`ChunkError::TooMuchData`] before a single byte is read.
	fn read_owned(&mut self, len: u32, limit: usize) -> Result<Vec<u8>> {
		let len = len as usize;
		if len > limit {
			return Err(ChunkError::TooMuchData);
		}

		let mut buf = Vec::new();
		buf.try_reserve_exact(len)
			.map_err(|_| ChunkError::TooMuchData)?;
		buf.resize(len, 0);

		self.read_exact(&mut buf).map_err(eof_to_end_of_stream)?;
		Ok(buf)
	}
}

impl<R: Read + ?Sized> ReadChunkExt for R {}

// TODO: https://github.com/rust-lang/rust/issues/59359
pub(crate) trait SeekStreamLen: Seek {
	fn stream_len_hack(&mut self) -> Result<u64> {
		let current_pos = self.stream_position()?;
		let len = self.seek(SeekFrom::End(0))?;

		self.seek(SeekFrom::Start(current_pos))?;

		Ok(len)
	}
}

impl<T> SeekStreamLen for T where T: Seek {}

#[cfg(test)]
mod tests {
	use super::{ReadChunkExt, SeekStreamLen};
	use crate::error::ChunkError;

	use std::io::Cursor;

	#[test_log::test]
	fn u16_is_little_endian() {
		let mut data: &[u8] = &[0x34, 0x12];
		assert_eq!(data.read_u16_le().unwrap(), 0x1234);

		let mut data: &[u8] = &[0xFF, 0x00];
		assert_eq!(data.read_u16_le().unwrap(), 0x00FF);
	}

	#[test_log::test]
	fn u32_is_little_endian() {
		let mut data: &[u8] = &[0x78, 0x56, 0x34, 0x12];
		assert_eq!(data.read_u32_le().unwrap(), 0x1234_5678);

		let mut data: &[u8] = &[0x01, 0x00, 0x00, 0x00];
		assert_eq!(data.read_u32_le().unwrap(), 1);
	}

	#[test_log::test]
	fn short_fixed_width_reads_fail() {
		let mut data: &[u8] = &[0x34];
		assert!(matches!(
			data.read_u16_le(),
			Err(ChunkError::UnexpectedEndOfStream)
		));

		let mut data: &[u8] = &[0x78, 0x56, 0x34];
		assert!(matches!(
			data.read_u32_le(),
			Err(ChunkError::UnexpectedEndOfStream)
		));
	}

	#[test_log::test]
	fn tag_read_classifies_stream_ends() {
		let mut data: &[u8] = b"RIFF";
		assert_eq!(data.read_tag_bytes().unwrap(), Some(*b"RIFF"));

		let mut data: &[u8] = &[];
		assert_eq!(data.read_tag_bytes().unwrap(), None);

		for torn in 1..4 {
			let mut data = &b"RIFF"[..torn];
			assert!(matches!(
				data.read_tag_bytes(),
				Err(ChunkError::TruncatedTag)
			));
		}
	}

	#[test_log::test]
	fn owned_read_respects_the_limit() {
		let mut data: &[u8] = &[1, 2, 3, 4, 5, 6, 7, 8];
		assert_eq!(data.read_owned(4, 1024).unwrap(), vec![1, 2, 3, 4]);
		assert_eq!(data, &[5, 6, 7, 8]);

		let mut data: &[u8] = &[1, 2, 3, 4, 5, 6, 7, 8];
		assert!(matches!(
			data.read_owned(6, 5),
			Err(ChunkError::TooMuchData)
		));

		let mut data: &[u8] = &[1, 2];
		assert!(matches!(
			data.read_owned(3, 1024),
			Err(ChunkError::UnexpectedEndOfStream)
		));
	}

	#[test_log::test]
	fn zero_length_owned_read_consumes_nothing() {
		let mut data: &[u8] = &[9, 9];
		assert!(data.read_owned(0, 0).unwrap().is_empty());
		assert_eq!(data, &[9, 9]);
	}

	#[test_log::test]
	fn stream_len_restores_position() {
		let mut cursor = Cursor::new(vec![0_u8; 32]);
		cursor.set_position(7);

		assert_eq!(cursor.stream_len_hack().unwrap(), 32);
		assert_eq!(cursor.position(), 7);
	}
}
