#![allow(missing_docs)]

//! Cross-checks against `hound`, which writes the files these tests walk

use riff_walker::{FmtChunk, ParseOptions, ParsingMode, WavFile};

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};

use std::path::Path;

fn write_ramp(path: &Path, spec: WavSpec, frames: u32) {
	let mut writer = WavWriter::create(path, spec).unwrap();
	for i in 0..frames * u32::from(spec.channels) {
		writer.write_sample((i % 128) as i16).unwrap();
	}
	writer.finalize().unwrap();
}

#[test_log::test]
fn agrees_with_hound_on_the_format_fields() {
	let specs = [
		WavSpec {
			channels: 1,
			sample_rate: 8000,
			bits_per_sample: 16,
			sample_format: SampleFormat::Int,
		},
		WavSpec {
			channels: 2,
			sample_rate: 44_100,
			bits_per_sample: 16,
			sample_format: SampleFormat::Int,
		},
		WavSpec {
			channels: 2,
			sample_rate: 48_000,
			bits_per_sample: 16,
			sample_format: SampleFormat::Int,
		},
	];

	let dir = tempfile::tempdir().unwrap();

	for (i, spec) in specs.into_iter().enumerate() {
		let path = dir.path().join(format!("hound_{i}.wav"));
		write_ramp(&path, spec, 64);

		// hound output is well-formed, so the strict checks must hold too
		let options = ParseOptions::new().parsing_mode(ParsingMode::Strict);
		let wav = WavFile::read_from_path(&path, options).unwrap();

		let fmt = wav.fmt().expect("hound always writes a fmt chunk");
		assert_eq!(fmt.format_tag, FmtChunk::PCM);
		assert_eq!(fmt.channels, spec.channels);
		assert_eq!(fmt.sample_rate, spec.sample_rate);
		assert_eq!(fmt.bits_per_sample, spec.bits_per_sample);
		assert_eq!(fmt.block_align, spec.channels * 2);
		assert_eq!(
			fmt.bytes_per_second,
			spec.sample_rate * u32::from(spec.channels) * 2
		);

		let data = wav.data().expect("hound always writes a data chunk");
		assert_eq!(data.samples.len(), 64 * usize::from(spec.channels) * 2);
	}
}

#[test_log::test]
fn agrees_with_hound_on_eight_bit_files() {
	let spec = WavSpec {
		channels: 1,
		sample_rate: 11_025,
		bits_per_sample: 8,
		sample_format: SampleFormat::Int,
	};

	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("eight_bit.wav");

	let mut writer = WavWriter::create(&path, spec).unwrap();
	for i in 0..32_i32 {
		writer.write_sample((i % 64) as i8).unwrap();
	}
	writer.finalize().unwrap();

	let wav = WavFile::read_from_path(&path, ParseOptions::new()).unwrap();

	let fmt = wav.fmt().unwrap();
	assert_eq!(fmt.format_tag, FmtChunk::PCM);
	assert_eq!(fmt.bits_per_sample, 8);
	assert_eq!(fmt.block_align, 1);

	assert_eq!(wav.data().unwrap().samples.len(), 32);
}

#[test_log::test]
fn data_payload_matches_hound_sample_readback() {
	let spec = WavSpec {
		channels: 1,
		sample_rate: 8000,
		bits_per_sample: 16,
		sample_format: SampleFormat::Int,
	};

	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("ramp.wav");

	let mut writer = WavWriter::create(&path, spec).unwrap();
	for i in -8..8_i16 {
		writer.write_sample(i * 1000).unwrap();
	}
	writer.finalize().unwrap();

	let wav = WavFile::read_from_path(&path, ParseOptions::new()).unwrap();
	let samples = &wav.data().unwrap().samples;

	let mut reader = WavReader::open(&path).unwrap();
	let decoded: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();

	// The data payload is the same little-endian bytes hound decodes
	assert_eq!(samples.len(), decoded.len() * 2);
	for (bytes, sample) in samples.chunks_exact(2).zip(decoded) {
		assert_eq!(i16::from_le_bytes([bytes[0], bytes[1]]), sample);
	}
}
