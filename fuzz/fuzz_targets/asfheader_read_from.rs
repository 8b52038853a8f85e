#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use mediatag::asf::AsfHeader;
use mediatag::config::ParseOptions;

fuzz_target!(|data: Vec<u8>| {
    let _ = AsfHeader::read_from(&mut Cursor::new(data), ParseOptions::new());
});
