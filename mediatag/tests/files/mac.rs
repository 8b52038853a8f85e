use crate::util::{mac_file, temp_file};

use mediatag::ape::{CompressionLevel, read_encoding_info};
use mediatag::config::ParseOptions;

use std::io::{Cursor, Seek, SeekFrom};
use std::time::Duration;

fn padded(mut file: Vec<u8>, len: usize) -> Vec<u8> {
	file.resize(len, 0);
	file
}

#[test_log::test]
fn read_properties() {
	let file = padded(mac_file(3990, 73728, 10000, 10), 1_000_000);

	let info = read_encoding_info(&mut Cursor::new(file), ParseOptions::new()).unwrap();

	assert_eq!(info.version(), 3990);
	assert_eq!(info.compression_level(), CompressionLevel::High);
	assert_eq!(info.length_seconds(), 15);
	assert_eq!(info.duration(), Duration::from_millis(15273));
	assert_eq!(info.bitrate_kbps(), 533);
	assert_eq!(info.channel_number(), 2);
	assert_eq!(info.sampling_rate(), 44100);
	assert_eq!(info.bits_per_sample(), 16);
	assert_eq!(info.encoding_type(), "Monkey Audio v3, compression level High");
}

#[test_log::test]
fn version_gate() {
	let too_old = padded(mac_file(3969, 73728, 10000, 10), 1_000_000);
	let err = read_encoding_info(&mut Cursor::new(too_old), ParseOptions::new()).unwrap_err();
	assert!(err.is_cannot_read());

	let oldest = padded(mac_file(3970, 73728, 10000, 10), 1_000_000);
	assert!(read_encoding_info(&mut Cursor::new(oldest), ParseOptions::new()).is_ok());
}

#[test_log::test]
fn shorter_than_one_second() {
	// 9 * 1024 + 500 blocks, well under a second at 44.1 kHz
	let file = mac_file(3990, 1024, 500, 10);

	let err = read_encoding_info(&mut Cursor::new(file), ParseOptions::new()).unwrap_err();
	assert!(err.is_cannot_read());
}

#[test_log::test]
fn read_from_file_offset() {
	// Something (an ID3v2 tag, for example) sits before the audio
	let mut content = vec![0xAA; 128];
	content.extend_from_slice(&mac_file(3990, 73728, 10000, 10));
	let content = padded(content, 1_000_000);

	let mut file = temp_file(&content);
	file.seek(SeekFrom::Start(128)).unwrap();

	let info = read_encoding_info(&mut file, ParseOptions::new()).unwrap();
	assert_eq!(info.length_seconds(), 15);
	// The whole file is counted towards the bitrate
	assert_eq!(info.bitrate_kbps(), 533);
}

#[test_log::test]
fn not_monkeys_audio() {
	let err = read_encoding_info(&mut Cursor::new(b"fLaC\0\0\0\x22".to_vec()), ParseOptions::new())
		.unwrap_err();
	assert!(err.is_cannot_read());

	let err = read_encoding_info(&mut Cursor::new(Vec::new()), ParseOptions::new()).unwrap_err();
	assert!(err.is_cannot_read());
}
