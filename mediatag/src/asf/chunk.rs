use super::guid::Guid;
use crate::error::Result;
use crate::macros::decode_err;

use std::io::{Read, Seek};

use byteorder::{LittleEndian, ReadBytesExt};

/// The size of a chunk header, a [`Guid`] followed by a 64-bit length
pub const CHUNK_HEADER_SIZE: u64 = 24;

/// The location of an ASF object
///
/// The length covers the entire object, including its 24 byte header.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Chunk {
	pub(crate) guid: Guid,
	pub(crate) start: u64,
	pub(crate) len: u64,
}

impl Chunk {
	/// Read a chunk header at the current position of `reader`
	///
	/// The reader is left at the start of the chunk's payload.
	///
	/// # Errors
	///
	/// * `reader` doesn't hold a complete chunk header
	/// * The declared length is smaller than the header itself
	pub fn read<R>(reader: &mut R) -> Result<Self>
	where
		R: Read + Seek,
	{
		let start = reader.stream_position()?;
		let guid = Guid::read(reader)?;
		let len = reader.read_u64::<LittleEndian>()?;

		if len < CHUNK_HEADER_SIZE {
			log::debug!("ASF: Chunk {guid} at {start} has a length of {len}");
			decode_err!(@BAIL Asf, "Chunk is smaller than its own header");
		}

		if start.checked_add(len).is_none() {
			decode_err!(@BAIL Asf, "Chunk length overflows the stream");
		}

		Ok(Self { guid, start, len })
	}

	/// The object type
	pub fn guid(&self) -> Guid {
		self.guid
	}

	/// Offset of the chunk header
	pub fn start(&self) -> u64 {
		self.start
	}

	/// Length of the entire chunk, including the header
	pub fn length(&self) -> u64 {
		self.len
	}

	/// Offset of the first byte after the chunk
	pub fn end(&self) -> u64 {
		// Overflow is checked in `Chunk::read`
		self.start + self.len
	}

	/// Length of the payload following the header
	pub fn payload_len(&self) -> u64 {
		self.len - CHUNK_HEADER_SIZE
	}
}
