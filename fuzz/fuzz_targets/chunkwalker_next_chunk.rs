#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use riff_walker::{ChunkWalker, ParseOptions};

fuzz_target!(|data: Vec<u8>| {
    let options = ParseOptions::new().continue_past_data(true);
    if let Ok(walker) = ChunkWalker::with_options(Cursor::new(data), options) {
        for chunk in walker {
            if chunk.is_err() {
                break;
            }
        }
    }
});
