use crate::util::{asf_header, asf_object, file_properties, temp_file, utf16};

use mediatag::asf::guid::{
	AUDIO_MEDIA, AUDIO_SPREAD, CONTENT_DESCRIPTION_OBJECT, DATA_OBJECT,
	EXTENDED_CONTENT_DESCRIPTION_OBJECT, FILE_PROPERTIES_OBJECT, STREAM_PROPERTIES_OBJECT,
};
use mediatag::asf::objects::DescriptorValue;
use mediatag::asf::{AsfHeader, Guid};
use mediatag::config::{ParseOptions, ParsingMode};
use mediatag::error::ErrorKind;
use mediatag::file::FileType;

use std::io::{Cursor, Seek};
use std::time::Duration;

const UNKNOWN_OBJECT: Guid = Guid::from_bytes([0x11; 16]);

fn content_description() -> Vec<u8> {
	let title = utf16("Foo title", true);
	let author = utf16("Bar artist", false);

	let mut payload = Vec::new();
	for len in [title.len(), author.len(), 0, 0, 0] {
		payload.extend_from_slice(&(len as u16).to_le_bytes());
	}
	payload.extend_from_slice(&title);
	payload.extend_from_slice(&author);

	asf_object(CONTENT_DESCRIPTION_OBJECT, &payload)
}

fn extended_content_description() -> Vec<u8> {
	let mut payload = 2_u16.to_le_bytes().to_vec();

	let album_name = utf16("WM/AlbumTitle", true);
	let album = utf16("Baz album", true);
	payload.extend_from_slice(&(album_name.len() as u16).to_le_bytes());
	payload.extend_from_slice(&album_name);
	payload.extend_from_slice(&0_u16.to_le_bytes());
	payload.extend_from_slice(&(album.len() as u16).to_le_bytes());
	payload.extend_from_slice(&album);

	let track_name = utf16("WM/TrackNumber", true);
	payload.extend_from_slice(&(track_name.len() as u16).to_le_bytes());
	payload.extend_from_slice(&track_name);
	payload.extend_from_slice(&3_u16.to_le_bytes());
	payload.extend_from_slice(&4_u16.to_le_bytes());
	payload.extend_from_slice(&5_u32.to_le_bytes());

	asf_object(EXTENDED_CONTENT_DESCRIPTION_OBJECT, &payload)
}

fn audio_stream() -> Vec<u8> {
	// WAVEFORMATEX for a WMA v2 stream
	let mut type_specific = Vec::new();
	type_specific.extend_from_slice(&0x0161_u16.to_le_bytes());
	type_specific.extend_from_slice(&2_u16.to_le_bytes());
	type_specific.extend_from_slice(&44100_u32.to_le_bytes());
	type_specific.extend_from_slice(&16000_u32.to_le_bytes());
	type_specific.extend_from_slice(&2973_u16.to_le_bytes());
	type_specific.extend_from_slice(&16_u16.to_le_bytes());
	type_specific.extend_from_slice(&0_u16.to_le_bytes());

	let error_correction = [0x01, 0x00, 0x02, 0x00, 0x02, 0x00, 0x01, 0x00];

	let mut payload = AUDIO_MEDIA.as_bytes().to_vec();
	payload.extend_from_slice(AUDIO_SPREAD.as_bytes());
	payload.extend_from_slice(&0_u64.to_le_bytes());
	payload.extend_from_slice(&(type_specific.len() as u32).to_le_bytes());
	payload.extend_from_slice(&(error_correction.len() as u32).to_le_bytes());
	// Stream #1
	payload.extend_from_slice(&1_u16.to_le_bytes());
	payload.extend_from_slice(&0_u32.to_le_bytes());
	payload.extend_from_slice(&type_specific);
	payload.extend_from_slice(&error_correction);

	asf_object(STREAM_PROPERTIES_OBJECT, &payload)
}

// Header, followed by an empty data object
fn asf_file(children: impl Fn(u64) -> Vec<Vec<u8>>) -> Vec<u8> {
	let data = asf_object(DATA_OBJECT, &[0; 26]);

	// The file size is part of the header itself, so measure it first
	let len = (asf_header(&children(0)).len() + data.len()) as u64;

	let mut file = asf_header(&children(len));
	file.extend_from_slice(&data);
	file
}

fn full_file() -> Vec<u8> {
	asf_file(|file_size| {
		vec![
			asf_object(
				FILE_PROPERTIES_OBJECT,
				&file_properties(file_size, 63_000_000, 3000),
			),
			content_description(),
			asf_object(UNKNOWN_OBJECT, &[0xDE, 0xAD, 0xBE, 0xEF]),
			extended_content_description(),
			audio_stream(),
		]
	})
}

fn strict() -> ParseOptions {
	ParseOptions::new().parsing_mode(ParsingMode::Strict)
}

#[test_log::test]
fn not_asf() {
	let mut reader = Cursor::new(b"RIFF\x24\x00\x00\x00WAVEfmt \x10\x00\x00\x00".to_vec());

	assert!(AsfHeader::read_from(&mut reader, strict()).unwrap().is_none());
	assert_eq!(reader.stream_position().unwrap(), 0);
}

#[test_log::test]
fn truncated() {
	let file = full_file();

	for len in [16, 24, 29, 100, file.len() - 51] {
		let truncated = file[..len].to_vec();

		let err = AsfHeader::read_from(&mut Cursor::new(truncated), ParseOptions::new())
			.unwrap_err();
		assert!(err.is_cannot_read(), "truncating to {len} bytes was accepted");
	}
}

#[test_log::test]
fn read_header() {
	let file = full_file();
	let header_len = file.len() as u64 - 50;

	let mut reader = Cursor::new(file);
	let header = AsfHeader::read_from(&mut reader, strict()).unwrap().unwrap();

	assert_eq!(header.chunk().length(), header_len);
	assert_eq!(header.declared_chunk_count(), 5);
	// Positioned at the data object
	assert_eq!(reader.stream_position().unwrap(), header_len);

	let file_header = header.file_header().unwrap();
	assert_eq!(file_header.file_size(), header_len + 50);
	assert_eq!(file_header.preroll(), 3000);
	assert_eq!(file_header.duration(), Duration::from_millis(3300));
	assert!(file_header.is_seekable());
	assert!(!file_header.is_broadcast());

	let description = header.content_description().unwrap();
	assert_eq!(description.title(), Some("Foo title"));
	assert_eq!(description.author(), Some("Bar artist"));
	assert_eq!(description.copyright(), None);
	assert_eq!(description.rating(), None);

	let extended = header.extended_content_description().unwrap();
	assert_eq!(extended.descriptors().len(), 2);
	assert_eq!(
		extended.get("WM/AlbumTitle"),
		Some(&DescriptorValue::String(String::from("Baz album")))
	);
	assert_eq!(extended.get("WM/TrackNumber"), Some(&DescriptorValue::DWord(5)));

	assert!(header.encoding().is_none());
	assert_eq!(header.streams().len(), 1);
	assert_eq!(header.streams()[0].stream_number(), 1);
}

#[test_log::test]
fn unknown_objects_are_preserved() {
	let header = AsfHeader::read_from(&mut Cursor::new(full_file()), strict())
		.unwrap()
		.unwrap();

	let [unknown] = header.unspecified_chunks() else {
		panic!("expected a single unknown object");
	};

	// Header object (30), file properties (104), content description
	let content_description_len = content_description().len() as u64;
	assert_eq!(unknown.guid(), UNKNOWN_OBJECT);
	assert_eq!(unknown.start(), 30 + 104 + content_description_len);
	assert_eq!(unknown.length(), 28);
	assert_eq!(unknown.end(), unknown.start() + 28);
}

#[test_log::test]
fn audio_stream_properties() {
	let header = AsfHeader::read_from(&mut Cursor::new(full_file()), strict())
		.unwrap()
		.unwrap();

	let audio = header.audio_stream().unwrap();
	assert_eq!(audio.codec_id(), 0x0161);
	assert_eq!(audio.channels(), 2);
	assert_eq!(audio.sample_rate(), 44100);
	assert_eq!(audio.bitrate_kbps(), 128);
	assert_eq!(audio.bits_per_sample(), 16);

	assert_eq!(header.streams()[0].error_correction_type(), AUDIO_SPREAD);
	assert_eq!(header.streams()[0].error_correction_data().len(), 8);
}

#[test_log::test]
fn malformed_descriptor_keeps_other_objects() {
	// A DWORD descriptor holding only 2 bytes
	let name = utf16("WM/TrackNumber", true);
	let mut payload = 1_u16.to_le_bytes().to_vec();
	payload.extend_from_slice(&(name.len() as u16).to_le_bytes());
	payload.extend_from_slice(&name);
	payload.extend_from_slice(&3_u16.to_le_bytes());
	payload.extend_from_slice(&2_u16.to_le_bytes());
	payload.extend_from_slice(&[7, 0]);

	let file = asf_file(|_| {
		vec![
			content_description(),
			asf_object(EXTENDED_CONTENT_DESCRIPTION_OBJECT, &payload),
		]
	});

	let header = AsfHeader::read_from(&mut Cursor::new(file.clone()), ParseOptions::new())
		.unwrap()
		.unwrap();
	assert_eq!(
		header.content_description().and_then(|d| d.title()),
		Some("Foo title")
	);
	assert_eq!(
		header
			.extended_content_description()
			.and_then(|e| e.get("WM/TrackNumber")),
		Some(&DescriptorValue::Unknown {
			value_type: 3,
			data: vec![7, 0]
		})
	);

	let err = AsfHeader::read_from(&mut Cursor::new(file), strict()).unwrap_err();
	let ErrorKind::FileDecoding(decoding) = err.kind() else {
		panic!("expected a decoding error, got {err:?}");
	};
	assert_eq!(decoding.format(), Some(FileType::Asf));
}

#[test_log::test]
fn file_size_mismatch() {
	let file = asf_file(|_| {
		vec![asf_object(
			FILE_PROPERTIES_OBJECT,
			&file_properties(1, 63_000_000, 3000),
		)]
	});

	let header = AsfHeader::read_from(&mut Cursor::new(file.clone()), ParseOptions::new())
		.unwrap()
		.unwrap();
	assert_eq!(header.file_header().unwrap().file_size(), 1);

	assert!(AsfHeader::read_from(&mut Cursor::new(file), strict()).is_err());
}

#[test_log::test]
fn read_from_file() {
	let mut file = temp_file(&full_file());

	let header = AsfHeader::read_from(&mut file, strict()).unwrap().unwrap();
	assert_eq!(
		header.content_description().and_then(|d| d.title()),
		Some("Foo title")
	);
}
