use super::chunk::Chunk;
use super::objects::{
	AudioStreamProperties, ContentDescription, EncodingChunk, ExtendedContentDescription,
	FileHeader, StreamChunk,
};
use super::read::read_header;
use crate::config::ParseOptions;
use crate::error::Result;
use crate::file::FileType;

use std::io::{Read, Seek};

/// The ASF header object
///
/// Each recognized sub-object appears at most once, except for the stream properties, of which
/// there is one per stream. Anything else is kept in [`AsfHeader::unspecified_chunks`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AsfHeader {
	pub(crate) chunk: Chunk,
	pub(crate) declared_chunk_count: u32,
	pub(crate) file_header: Option<FileHeader>,
	pub(crate) extended_content_description: Option<ExtendedContentDescription>,
	pub(crate) encoding: Option<EncodingChunk>,
	pub(crate) content_description: Option<ContentDescription>,
	pub(crate) streams: Vec<StreamChunk>,
	pub(crate) unspecified_chunks: Vec<Chunk>,
}

impl AsfHeader {
	/// Read the header object at the current position of `reader`
	///
	/// This is a probe: if `reader` doesn't start with the header object GUID, `Ok(None)` is
	/// returned and the reader is left where it started.
	///
	/// # Errors
	///
	/// The header object GUID matched, but the object is malformed or truncated. Any failure
	/// is reported as a [`FileDecodingError`](crate::error::FileDecodingError).
	///
	/// # Examples
	///
	/// ```rust
	/// use mediatag::asf::AsfHeader;
	/// use mediatag::config::ParseOptions;
	/// use std::io::Cursor;
	///
	/// # fn main() -> mediatag::error::Result<()> {
	/// let mut reader = Cursor::new(b"RIFF\x24\x00\x00\x00WAVEfmt \x10\x00\x00\x00".to_vec());
	/// assert!(AsfHeader::read_from(&mut reader, ParseOptions::new())?.is_none());
	/// # Ok(()) }
	/// ```
	pub fn read_from<R>(reader: &mut R, parse_options: ParseOptions) -> Result<Option<Self>>
	where
		R: Read + Seek,
	{
		read_header(reader, parse_options)
			.map_err(|e| e.into_cannot_read(FileType::Asf, "Unable to read the ASF header object"))
	}

	/// The location of the header object itself
	pub fn chunk(&self) -> Chunk {
		self.chunk
	}

	/// The number of sub-objects the header declares
	///
	/// This is not guaranteed to match the number actually present.
	pub fn declared_chunk_count(&self) -> u32 {
		self.declared_chunk_count
	}

	/// The file properties object
	pub fn file_header(&self) -> Option<&FileHeader> {
		self.file_header.as_ref()
	}

	/// The extended content description object
	pub fn extended_content_description(&self) -> Option<&ExtendedContentDescription> {
		self.extended_content_description.as_ref()
	}

	/// The codec list object
	pub fn encoding(&self) -> Option<&EncodingChunk> {
		self.encoding.as_ref()
	}

	/// The content description object
	pub fn content_description(&self) -> Option<&ContentDescription> {
		self.content_description.as_ref()
	}

	/// The stream properties objects, in order
	pub fn streams(&self) -> &[StreamChunk] {
		&self.streams
	}

	/// The properties of the first audio stream
	pub fn audio_stream(&self) -> Option<&AudioStreamProperties> {
		self.streams.iter().find_map(StreamChunk::audio)
	}

	/// Sub-objects that weren't parsed, in order
	///
	/// This includes unrecognized objects, and any repeats of objects that may only appear once.
	pub fn unspecified_chunks(&self) -> &[Chunk] {
		&self.unspecified_chunks
	}
}
