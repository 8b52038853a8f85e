use crate::asf::chunk::Chunk;
use crate::asf::guid::EXTENDED_CONTENT_DESCRIPTION_OBJECT;
use crate::asf::util::{chunk_payload, read_utf16_string};
use crate::config::ParsingMode;
use crate::error::Result;
use crate::macros::{decode_err, parse_mode_choice, try_vec};
use crate::util::bytes::{read_u16_le, read_u32_le, read_u64_le};

use std::io::{Read, Seek};

use byteorder::{LittleEndian, ReadBytesExt};

/// The value of a [`ContentDescriptor`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DescriptorValue {
	/// A UTF-16 string (type 0)
	String(String),
	/// Raw bytes (type 1)
	Bytes(Vec<u8>),
	/// A boolean, stored as a 32-bit integer (type 2)
	Bool(bool),
	/// A 32-bit integer (type 3)
	DWord(u32),
	/// A 64-bit integer (type 4)
	QWord(u64),
	/// A 16-bit integer (type 5)
	Word(u16),
	/// A value of an unrecognized type, kept as-is
	Unknown {
		/// The value type
		value_type: u16,
		/// The raw value
		data: Vec<u8>,
	},
}

/// A named value in the [`ExtendedContentDescription`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentDescriptor {
	pub(crate) name: String,
	pub(crate) value: DescriptorValue,
}

impl ContentDescriptor {
	/// The descriptor name, such as `WM/AlbumTitle`
	pub fn name(&self) -> &str {
		&self.name
	}

	/// The descriptor value
	pub fn value(&self) -> &DescriptorValue {
		&self.value
	}
}

/// The extended content description object
///
/// Holds any number of named values, in the order they appear.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtendedContentDescription {
	pub(crate) descriptors: Vec<ContentDescriptor>,
}

impl ExtendedContentDescription {
	pub(crate) fn read<R>(reader: &mut R, chunk: &Chunk, parse_mode: ParsingMode) -> Result<Self>
	where
		R: Read + Seek,
	{
		let payload = chunk_payload(reader, chunk, EXTENDED_CONTENT_DESCRIPTION_OBJECT)?;
		let payload = &mut &payload[..];

		let count = payload.read_u16::<LittleEndian>()?;

		let mut descriptors = Vec::with_capacity(usize::from(count));
		for _ in 0..count {
			let name_len = payload.read_u16::<LittleEndian>()?;
			let name = read_utf16_string(payload, usize::from(name_len), parse_mode)?;

			let value_type = payload.read_u16::<LittleEndian>()?;
			let value_len = payload.read_u16::<LittleEndian>()?;

			let value = match value_type {
				0 => DescriptorValue::String(read_utf16_string(
					payload,
					usize::from(value_len),
					parse_mode,
				)?),
				_ => {
					let mut data = try_vec![0; usize::from(value_len)];
					payload.read_exact(&mut data)?;

					parse_value(value_type, data, parse_mode)?
				},
			};

			log::trace!("ASF: Read extended content descriptor `{name}`");
			descriptors.push(ContentDescriptor { name, value });
		}

		Ok(Self { descriptors })
	}

	/// Get a descriptor's value by name
	pub fn get(&self, name: &str) -> Option<&DescriptorValue> {
		self.descriptors
			.iter()
			.find(|d| d.name == name)
			.map(ContentDescriptor::value)
	}

	/// All descriptors, in order
	pub fn descriptors(&self) -> &[ContentDescriptor] {
		&self.descriptors
	}
}

fn parse_value(value_type: u16, data: Vec<u8>, parse_mode: ParsingMode) -> Result<DescriptorValue> {
	let width = match value_type {
		2 | 3 => 4,
		4 => 8,
		5 => 2,
		_ => 0,
	};

	if data.len() < width {
		parse_mode_choice!(
			parse_mode,
			STRICT: decode_err!(@BAIL Asf, "Extended content descriptor value is too short for its type"),
			DEFAULT: {
				log::warn!(
					"ASF: Descriptor of type {value_type} holds {} bytes, expected {width}, keeping \
					 raw bytes",
					data.len()
				);
				return Ok(DescriptorValue::Unknown { value_type, data });
			}
		);
	}

	Ok(match value_type {
		1 => DescriptorValue::Bytes(data),
		2 => DescriptorValue::Bool(read_u32_le(&data, 0)? != 0),
		3 => DescriptorValue::DWord(read_u32_le(&data, 0)?),
		4 => DescriptorValue::QWord(read_u64_le(&data, 0)?),
		5 => DescriptorValue::Word(read_u16_le(&data, 0)?),
		_ => {
			log::debug!("ASF: Keeping a descriptor of unknown type {value_type} as raw bytes");
			DescriptorValue::Unknown { value_type, data }
		},
	})
}
