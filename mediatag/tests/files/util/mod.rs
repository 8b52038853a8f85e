use mediatag::asf::Guid;

use std::fs::File;
use std::io::{Seek as _, Write as _};

/// Create a new temporary file holding `content`
pub fn temp_file(content: &[u8]) -> File {
	let mut file = tempfile::tempfile().unwrap();
	file.write_all(content).unwrap();
	file.rewind().unwrap();

	file
}

/// An APE item: length, flags, NUL terminated key, value
pub fn ape_item(key: &[u8], flags: u32, value: &[u8]) -> Vec<u8> {
	let mut item = (value.len() as u32).to_le_bytes().to_vec();
	item.extend_from_slice(&flags.to_le_bytes());
	item.extend_from_slice(key);
	item.push(0);
	item.extend_from_slice(value);
	item
}

/// A footer-only APE tag holding `items`
pub fn ape_tag(version: u32, items: &[Vec<u8>]) -> Vec<u8> {
	let body = items.concat();

	let mut tag = body.clone();
	tag.extend_from_slice(b"APETAGEX");
	tag.extend_from_slice(&version.to_le_bytes());
	tag.extend_from_slice(&(body.len() as u32 + 32).to_le_bytes());
	tag.extend_from_slice(&(items.len() as u32).to_le_bytes());
	tag.extend_from_slice(&(1_u32 << 30).to_le_bytes());
	tag.extend_from_slice(&[0; 8]);
	tag
}

/// UTF-16 LE, optionally NUL terminated
pub fn utf16(s: &str, terminated: bool) -> Vec<u8> {
	let mut bytes = s
		.encode_utf16()
		.flat_map(u16::to_le_bytes)
		.collect::<Vec<_>>();

	if terminated {
		bytes.extend_from_slice(&[0, 0]);
	}

	bytes
}

/// An ASF object with a correct length
pub fn asf_object(guid: Guid, payload: &[u8]) -> Vec<u8> {
	let mut object = guid.as_bytes().to_vec();
	object.extend_from_slice(&(24 + payload.len() as u64).to_le_bytes());
	object.extend_from_slice(payload);
	object
}

/// An ASF header object holding `children`
pub fn asf_header(children: &[Vec<u8>]) -> Vec<u8> {
	let mut payload = (children.len() as u32).to_le_bytes().to_vec();
	payload.extend_from_slice(&[0x01, 0x02]);
	for child in children {
		payload.extend_from_slice(child);
	}

	asf_object(mediatag::asf::guid::HEADER_OBJECT, &payload)
}

/// A file properties payload
pub fn file_properties(file_size: u64, play_duration: u64, preroll: u64) -> Vec<u8> {
	let mut payload = vec![0x42; 16];
	payload.extend_from_slice(&file_size.to_le_bytes());
	payload.extend_from_slice(&0_u64.to_le_bytes());
	payload.extend_from_slice(&1_u64.to_le_bytes());
	payload.extend_from_slice(&play_duration.to_le_bytes());
	payload.extend_from_slice(&play_duration.to_le_bytes());
	payload.extend_from_slice(&preroll.to_le_bytes());
	// Seekable
	payload.extend_from_slice(&2_u32.to_le_bytes());
	payload.extend_from_slice(&3200_u32.to_le_bytes());
	payload.extend_from_slice(&3200_u32.to_le_bytes());
	payload.extend_from_slice(&128_000_u32.to_le_bytes());
	payload
}

/// A Monkey's Audio file header, up to and including the WAV fmt chunk
pub fn mac_file(version: u32, blocks_per_frame: u32, final_frame_blocks: u32, total_frames: u32) -> Vec<u8> {
	let mut file = b"MAC ".to_vec();
	file.extend_from_slice(&version.to_le_bytes());

	// Descriptor, with an empty seek table
	for field in [52_u32, 24, 0, 44, 0, 0, 0] {
		file.extend_from_slice(&field.to_le_bytes());
	}
	file.extend_from_slice(&[0; 16]);

	// Header
	file.extend_from_slice(&3000_u16.to_le_bytes());
	file.extend_from_slice(&0_u16.to_le_bytes());
	file.extend_from_slice(&blocks_per_frame.to_le_bytes());
	file.extend_from_slice(&final_frame_blocks.to_le_bytes());
	file.extend_from_slice(&total_frames.to_le_bytes());
	file.extend_from_slice(&16_u16.to_le_bytes());
	file.extend_from_slice(&2_u16.to_le_bytes());
	file.extend_from_slice(&44100_u32.to_le_bytes());

	file.extend_from_slice(b"RIFF\x00\x00\x00\x00WAVE");
	file.extend_from_slice(b"fmt \x10\x00\x00\x00\x01\x00\x02\x00");
	file.extend_from_slice(&44100_u32.to_le_bytes());
	file.extend_from_slice(&176_400_u32.to_le_bytes());
	file.extend_from_slice(b"\x04\x00\x10\x00");
	file
}
