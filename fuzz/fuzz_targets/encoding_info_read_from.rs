#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use mediatag::config::ParseOptions;

fuzz_target!(|data: Vec<u8>| {
    let _ = mediatag::ape::read_encoding_info(&mut Cursor::new(data), ParseOptions::new());
});
