use crate::util::{ape_item, ape_tag, temp_file};

use mediatag::ape::{ApeTag, FieldValue, TagField};
use mediatag::config::ParseOptions;
use mediatag::error::ErrorKind;

use std::io::{Cursor, Seek, SeekFrom, Write};

fn read(bytes: Vec<u8>) -> mediatag::error::Result<ApeTag> {
	ApeTag::read_from(&mut Cursor::new(bytes), ParseOptions::new())
}

fn single_field_tag(field: &TagField) -> Vec<u8> {
	// A single item, described by a bare footer
	let item = field.raw_content().unwrap();

	let mut bytes = vec![0xAA; 16];
	bytes.extend_from_slice(&ape_tag(2000, &[item]));
	bytes
}

#[test_log::test]
fn text_field_round_trip() {
	let cases = [
		("Title", "Foo title"),
		("Artist", ""),
		("Caf\u{00e9}", "\u{65e5}\u{672c}\u{8a9e}"),
		("Comment", "Line one\nLine two\0embedded NUL"),
	];

	for (id, content) in cases {
		let field = TagField::text(id, content).unwrap();
		let tag = read(single_field_tag(&field)).unwrap();

		let read_back = tag.get(id).unwrap();
		assert_eq!(read_back.id(), id);
		assert!(!read_back.is_binary());
		assert_eq!(read_back.as_text(), Some(content));
	}
}

#[test_log::test]
fn binary_field_round_trip() {
	let all_bytes = (0..=255).collect::<Vec<u8>>();

	for content in [Vec::new(), vec![0], all_bytes] {
		let field = TagField::binary("Cover Art (Front)", content.clone()).unwrap();
		assert_eq!(field.raw_content().unwrap()[4], 0x02);

		let tag = read(single_field_tag(&field)).unwrap();

		let read_back = tag.get("Cover Art (Front)").unwrap();
		assert!(read_back.is_binary());
		assert_eq!(read_back.value(), &FieldValue::Binary(content));
	}
}

#[test_log::test]
fn version_gate() {
	let items = [ape_item(b"Title", 0, b"Foo")];

	for version in [1000, 1999, 2001, 3000] {
		let err = read(ape_tag(version, &items)).unwrap_err();
		assert!(err.is_cannot_read(), "version {version} was accepted");
	}

	assert!(read(ape_tag(2000, &items)).is_ok());
}

#[test_log::test]
fn magic_gate() {
	// A valid tag, followed by junk
	let mut bytes = ape_tag(2000, &[ape_item(b"Title", 0, b"Foo")]);
	bytes.extend_from_slice(&[0; 32]);

	assert!(read(bytes).unwrap_err().is_cannot_read());

	// Too short to contain a footer at all
	assert!(read(b"APETAGEX".to_vec()).unwrap_err().is_cannot_read());
}

#[test_log::test]
fn item_size_guard() {
	let accepted = ape_tag(2000, &[ape_item(b"Cover", 0b10, &vec![0; 500_000])]);
	assert!(read(accepted).is_ok());

	let rejected = ape_tag(2000, &[ape_item(b"Cover", 0b10, &vec![0; 500_001])]);
	assert!(read(rejected).unwrap_err().is_cannot_read());
}

#[test_log::test]
fn truncated_item_is_cannot_read() {
	// The footer claims more than it holds
	let mut bytes = ape_tag(2000, &[ape_item(b"Title", 0, b"Foo")]);
	let count_offset = bytes.len() - 16;
	bytes[count_offset..count_offset + 4].copy_from_slice(&5_u32.to_le_bytes());

	let err = read(bytes).unwrap_err();
	let ErrorKind::FileDecoding(decoding) = err.kind() else {
		panic!("expected a decoding error, got {err:?}");
	};

	assert_eq!(decoding.format(), Some(mediatag::file::FileType::Ape));
}

#[test_log::test]
fn write_to_file() {
	let mut tag = ApeTag::new();
	tag.add(TagField::text("Title", "Foo title").unwrap());
	tag.add(TagField::text("Artist", "Bar artist").unwrap());
	tag.add(TagField::binary("Cover Art (Front)", vec![0xFF, 0xD8, 0xFF, 0xE0]).unwrap());

	let mut file = temp_file(b"MAC not really audio");
	file.seek(SeekFrom::End(0)).unwrap();
	tag.dump_to(&mut file).unwrap();
	file.flush().unwrap();
	file.rewind().unwrap();

	let read_back = ApeTag::read_from(&mut file, ParseOptions::new()).unwrap();
	assert_eq!(read_back, tag);

	// The reader leaves the stream to the caller
	file.rewind().unwrap();
	let mut magic = [0; 4];
	std::io::Read::read_exact(&mut file, &mut magic).unwrap();
	assert_eq!(&magic, b"MAC ");
}
