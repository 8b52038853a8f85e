#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use mediatag::ape::ApeTag;
use mediatag::config::ParseOptions;

fuzz_target!(|data: Vec<u8>| {
    let _ = ApeTag::read_from(&mut Cursor::new(data), ParseOptions::new());
});
