#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use riff_walker::{ParseOptions, WavFile};

fuzz_target!(|data: Vec<u8>| {
    let _ = WavFile::read_from(&mut Cursor::new(data), ParseOptions::new());
});
