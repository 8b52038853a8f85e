use super::chunk::Chunk;
use super::guid::Guid;
use crate::config::ParsingMode;
use crate::error::Result;
use crate::macros::{decode_err, err, parse_mode_choice, try_vec};
use crate::util::text::utf16le_decode;

use std::io::{Read, Seek, SeekFrom};

use byteorder::{LittleEndian, ReadBytesExt};

/// Re-read the header of `chunk` and return its payload
///
/// The GUID and length are checked against the values recorded while walking the header object.
pub(super) fn chunk_payload<R>(reader: &mut R, chunk: &Chunk, expected: Guid) -> Result<Vec<u8>>
where
	R: Read + Seek,
{
	reader.seek(SeekFrom::Start(chunk.start))?;

	if Guid::read(reader)? != expected {
		decode_err!(@BAIL Asf, "Chunk GUID changed while reading");
	}

	let len = reader.read_u64::<LittleEndian>()?;
	if len != chunk.len {
		err!(SizeMismatch);
	}

	let mut payload = try_vec![0; chunk.payload_len() as usize];
	reader.read_exact(&mut payload)?;

	Ok(payload)
}

/// Read a UTF-16 LE string of `byte_len` bytes
///
/// A trailing NUL is optional, and is dropped if present.
pub(super) fn read_utf16_string<R>(
	reader: &mut R,
	byte_len: usize,
	parse_mode: ParsingMode,
) -> Result<String>
where
	R: Read,
{
	let mut bytes = try_vec![0; byte_len];
	reader.read_exact(&mut bytes)?;

	if bytes.len() % 2 != 0 {
		parse_mode_choice!(
			parse_mode,
			STRICT: err!(TextDecode("UTF-16 string has an odd length")),
			DEFAULT: {
				log::warn!("ASF: Dropping the final byte of an odd length UTF-16 string");
				bytes.pop();
			}
		);
	}

	utf16le_decode(&bytes, parse_mode)
}

/// Read a string prefixed with its length in UTF-16 code units
pub(super) fn read_character_string<R>(reader: &mut R, parse_mode: ParsingMode) -> Result<String>
where
	R: Read,
{
	let char_count = reader.read_u16::<LittleEndian>()?;
	read_utf16_string(reader, usize::from(char_count) * 2, parse_mode)
}

#[cfg(test)]
mod tests {
	use super::{read_character_string, read_utf16_string};
	use crate::config::ParsingMode;

	#[test_log::test]
	fn terminator_is_optional() {
		let terminated = b"F\x00o\x00o\x00\x00\x00";

		let mut reader = &terminated[..];
		assert_eq!(read_utf16_string(&mut reader, 8, ParsingMode::Strict).unwrap(), "Foo");

		let mut reader = &terminated[..];
		assert_eq!(read_utf16_string(&mut reader, 6, ParsingMode::Strict).unwrap(), "Foo");
	}

	#[test_log::test]
	fn odd_length() {
		let bytes = b"F\x00o\x00o";

		assert!(read_utf16_string(&mut &bytes[..], 5, ParsingMode::Strict).is_err());
		assert_eq!(
			read_utf16_string(&mut &bytes[..], 5, ParsingMode::BestAttempt).unwrap(),
			"Fo"
		);
	}

	#[test_log::test]
	fn character_sized() {
		let bytes = b"\x03\x00B\x00a\x00r\x00trailing";
		let mut reader = &bytes[..];

		assert_eq!(
			read_character_string(&mut reader, ParsingMode::Strict).unwrap(),
			"Bar"
		);
		assert_eq!(reader, b"trailing");
	}

	#[test_log::test]
	fn truncated() {
		let bytes = b"\x04\x00B\x00a\x00r\x00";
		assert!(read_character_string(&mut &bytes[..], ParsingMode::BestAttempt).is_err());
	}
}
