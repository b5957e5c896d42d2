//! Walks a RIFF/WAVE file and prints a summary of each chunk.

use riff_walker::{Chunk, ChunkWalker, ParseOptions};

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

fn main() {
	let path_str = std::env::args().nth(1).expect("ERROR: No path specified!");
	let path = Path::new(&path_str);

	if !path.is_file() {
		panic!("ERROR: Path is not a file!");
	}

	let file = File::open(path).expect("ERROR: Bad path provided!");
	let options = ParseOptions::new().continue_past_data(true);
	let mut walker = ChunkWalker::with_options(BufReader::new(file), options)
		.expect("ERROR: Failed to open the stream!");

	println!("--- Chunks ---");

	loop {
		match walker.next_chunk() {
			Ok(Some(Chunk::Riff(riff))) => {
				println!(
					"RIFF: {} bytes declared, form type \"{}\"",
					riff.size,
					riff.form_type.escape_ascii()
				);
			},
			Ok(Some(Chunk::Fmt(fmt))) => {
				println!(
					"fmt : format {:#06X}, {} channel(s), {} Hz, {} bits per sample",
					fmt.format_tag, fmt.channels, fmt.sample_rate, fmt.bits_per_sample
				);
			},
			Ok(Some(Chunk::Data(data))) => {
				println!("data: {} bytes of samples", data.size());
			},
			Ok(Some(Chunk::Unknown(unknown))) => {
				println!("{}: {} bytes skipped", unknown.tag, unknown.size);
			},
			Ok(None) => break,
			Err(err) => panic!("ERROR: Failed to walk the file: {err}"),
		}
	}

	println!(
		"--- End of walk at offset {} ---",
		walker.position().expect("ERROR: Failed to read the offset!")
	);
}
