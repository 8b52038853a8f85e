use crate::asf::chunk::Chunk;
use crate::asf::guid::CODEC_LIST_OBJECT;
use crate::asf::util::{chunk_payload, read_character_string};
use crate::config::ParsingMode;
use crate::error::Result;
use crate::macros::decode_err;

use std::io::{Read, Seek};

use byteorder::{LittleEndian, ReadBytesExt};

// Reserved GUID (16) and the codec entry count (4)
const SKIPPED_PREFIX: usize = 20;

/// The codec list object, describing the encoder
///
/// Only the strings are kept, in the order they appear.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EncodingChunk {
	pub(crate) strings: Vec<String>,
}

impl EncodingChunk {
	pub(crate) fn read<R>(reader: &mut R, chunk: &Chunk, parse_mode: ParsingMode) -> Result<Self>
	where
		R: Read + Seek,
	{
		let payload = chunk_payload(reader, chunk, CODEC_LIST_OBJECT)?;

		let Some(mut payload) = payload.get(SKIPPED_PREFIX..) else {
			decode_err!(@BAIL Asf, "Codec list object is too small");
		};

		let count = payload.read_u16::<LittleEndian>()?;

		let mut strings = Vec::with_capacity(usize::from(count));
		for _ in 0..count {
			strings.push(read_character_string(&mut payload, parse_mode)?);
		}

		Ok(Self { strings })
	}

	/// The strings, such as the codec name and description
	pub fn strings(&self) -> &[String] {
		&self.strings
	}
}

#[cfg(test)]
mod tests {
	use super::EncodingChunk;
	use crate::asf::chunk::Chunk;
	use crate::asf::guid::CODEC_LIST_OBJECT;
	use crate::config::ParsingMode;

	use std::io::Cursor;

	fn encoding_chunk(strings: &[&str], declared_count: u16) -> Vec<u8> {
		let mut payload = vec![0; 20];
		payload.extend_from_slice(&declared_count.to_le_bytes());
		for s in strings {
			let units = s.encode_utf16().collect::<Vec<_>>();
			payload.extend_from_slice(&(units.len() as u16).to_le_bytes());
			payload.extend(units.into_iter().flat_map(u16::to_le_bytes));
		}

		let mut object = CODEC_LIST_OBJECT.as_bytes().to_vec();
		object.extend_from_slice(&(24 + payload.len() as u64).to_le_bytes());
		object.extend(payload);
		object
	}

	fn read(object: Vec<u8>) -> crate::error::Result<EncodingChunk> {
		let mut reader = Cursor::new(object);
		let chunk = Chunk::read(&mut reader)?;
		EncodingChunk::read(&mut reader, &chunk, ParsingMode::BestAttempt)
	}

	#[test_log::test]
	fn strings() {
		let object = encoding_chunk(&["Windows Media Audio 9.2", "", "64 kbps, 44 kHz, stereo"], 3);

		let encoding = read(object).unwrap();
		assert_eq!(
			encoding.strings(),
			["Windows Media Audio 9.2", "", "64 kbps, 44 kHz, stereo"]
		);
	}

	#[test_log::test]
	fn count_past_chunk_end() {
		let object = encoding_chunk(&["Windows Media Audio 9.2"], 2);
		assert!(read(object).is_err());
	}

	#[test_log::test]
	fn too_small() {
		let mut object = CODEC_LIST_OBJECT.as_bytes().to_vec();
		object.extend_from_slice(&34_u64.to_le_bytes());
		object.extend_from_slice(&[0; 10]);

		assert!(read(object).is_err());
	}
}
