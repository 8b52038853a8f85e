use crate::asf::chunk::Chunk;
use crate::asf::guid::CONTENT_DESCRIPTION_OBJECT;
use crate::asf::util::{chunk_payload, read_utf16_string};
use crate::config::ParsingMode;
use crate::error::Result;

use std::io::{Read, Seek};

use byteorder::{LittleEndian, ReadBytesExt};

/// The content description object
///
/// Holds five fixed strings. A field is `None` when its declared length is zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContentDescription {
	pub(crate) title: Option<String>,
	pub(crate) author: Option<String>,
	pub(crate) copyright: Option<String>,
	pub(crate) description: Option<String>,
	pub(crate) rating: Option<String>,
}

impl ContentDescription {
	pub(crate) fn read<R>(reader: &mut R, chunk: &Chunk, parse_mode: ParsingMode) -> Result<Self>
	where
		R: Read + Seek,
	{
		let payload = chunk_payload(reader, chunk, CONTENT_DESCRIPTION_OBJECT)?;
		let payload = &mut &payload[..];

		// The lengths are in bytes, and precede all of the strings
		let mut lengths = [0_u16; 5];
		for len in &mut lengths {
			*len = payload.read_u16::<LittleEndian>()?;
		}

		let mut read_string = |len: u16| match len {
			0 => Ok(None),
			len => read_utf16_string(payload, usize::from(len), parse_mode).map(Some),
		};

		let [title, author, copyright, description, rating] = lengths;
		Ok(Self {
			title: read_string(title)?,
			author: read_string(author)?,
			copyright: read_string(copyright)?,
			description: read_string(description)?,
			rating: read_string(rating)?,
		})
	}

	/// Title
	pub fn title(&self) -> Option<&str> {
		self.title.as_deref()
	}

	/// Author
	pub fn author(&self) -> Option<&str> {
		self.author.as_deref()
	}

	/// Copyright notice
	pub fn copyright(&self) -> Option<&str> {
		self.copyright.as_deref()
	}

	/// Description, commonly used as a comment
	pub fn description(&self) -> Option<&str> {
		self.description.as_deref()
	}

	/// Rating
	pub fn rating(&self) -> Option<&str> {
		self.rating.as_deref()
	}
}
