use super::chunk::Chunk;
use super::guid::{
	CODEC_LIST_OBJECT, CONTENT_DESCRIPTION_OBJECT, EXTENDED_CONTENT_DESCRIPTION_OBJECT,
	FILE_PROPERTIES_OBJECT, Guid, HEADER_OBJECT, STREAM_PROPERTIES_OBJECT,
};
use super::header::AsfHeader;
use super::objects::{
	ContentDescription, EncodingChunk, ExtendedContentDescription, FileHeader, StreamChunk,
};
use crate::config::ParseOptions;
use crate::error::Result;
use crate::macros::{decode_err, parse_mode_choice};
use crate::util::io::SeekStreamLen;

use std::io::{Read, Seek, SeekFrom};

use byteorder::{LittleEndian, ReadBytesExt};

// Sub-object count (4) and two reserved bytes
const HEADER_FIELDS_SIZE: u64 = 6;

#[derive(Copy, Clone, Debug)]
enum Slot {
	FileHeader,
	ExtendedContentDescription,
	Encoding,
	Stream,
	ContentDescription,
}

// Sub-objects are matched in this order
const REGISTRY: &[(Guid, Slot)] = &[
	(FILE_PROPERTIES_OBJECT, Slot::FileHeader),
	(
		EXTENDED_CONTENT_DESCRIPTION_OBJECT,
		Slot::ExtendedContentDescription,
	),
	(CODEC_LIST_OBJECT, Slot::Encoding),
	(STREAM_PROPERTIES_OBJECT, Slot::Stream),
	(CONTENT_DESCRIPTION_OBJECT, Slot::ContentDescription),
];

fn classify(guid: Guid) -> Option<Slot> {
	REGISTRY
		.iter()
		.find(|(known, _)| *known == guid)
		.map(|(_, slot)| *slot)
}

pub(super) fn read_header<R>(reader: &mut R, parse_options: ParseOptions) -> Result<Option<AsfHeader>>
where
	R: Read + Seek,
{
	let parse_mode = parse_options.parsing_mode;

	let start = reader.stream_position()?;
	let stream_len = reader.stream_len_hack()?.saturating_sub(start);

	// Too short to even hold a GUID, this can't be ASF
	if stream_len < 16 {
		return Ok(None);
	}

	if Guid::read(reader)? != HEADER_OBJECT {
		reader.seek(SeekFrom::Start(start))?;
		return Ok(None);
	}

	reader.seek(SeekFrom::Start(start))?;
	let header_chunk = Chunk::read(reader)?;

	if header_chunk.payload_len() < HEADER_FIELDS_SIZE {
		decode_err!(@BAIL Asf, "Header object is too small");
	}

	if header_chunk.end() > start + stream_len {
		decode_err!(@BAIL Asf, "Header object extends past the end of the stream");
	}

	let declared_chunk_count = reader.read_u32::<LittleEndian>()?;
	let mut _reserved = [0; 2];
	reader.read_exact(&mut _reserved)?;

	let chunks = collect_chunks(reader, &header_chunk)?;

	if chunks.len() as u64 != u64::from(declared_chunk_count) {
		parse_mode_choice!(
			parse_mode,
			STRICT: decode_err!(@BAIL Asf, "Header object declares the wrong number of sub-objects"),
			DEFAULT: log::warn!(
				"ASF: Header object declares {declared_chunk_count} sub-objects, found {}",
				chunks.len()
			)
		);
	}

	let mut header = AsfHeader {
		chunk: header_chunk,
		declared_chunk_count,
		file_header: None,
		extended_content_description: None,
		encoding: None,
		content_description: None,
		streams: Vec::new(),
		unspecified_chunks: Vec::new(),
	};

	for chunk in chunks {
		match classify(chunk.guid) {
			Some(Slot::FileHeader) if header.file_header.is_none() => {
				header.file_header = Some(FileHeader::read(reader, &chunk, stream_len, parse_mode)?);
			},
			Some(Slot::ExtendedContentDescription)
				if header.extended_content_description.is_none() =>
			{
				header.extended_content_description =
					Some(ExtendedContentDescription::read(reader, &chunk, parse_mode)?);
			},
			Some(Slot::Encoding) if header.encoding.is_none() => {
				header.encoding = Some(EncodingChunk::read(reader, &chunk, parse_mode)?);
			},
			Some(Slot::Stream) => {
				header
					.streams
					.push(StreamChunk::read(reader, &chunk, parse_mode)?);
			},
			Some(Slot::ContentDescription) if header.content_description.is_none() => {
				header.content_description =
					Some(ContentDescription::read(reader, &chunk, parse_mode)?);
			},
			slot => {
				match slot {
					Some(slot) => log::warn!("ASF: Found a duplicate {slot:?} object, skipping"),
					None => log::debug!(
						"ASF: Skipping unknown object {} at offset {}",
						chunk.guid,
						chunk.start
					),
				}

				header.unspecified_chunks.push(chunk);
			},
		}
	}

	// Leave the reader at the end of the header object, where the data object should be
	reader.seek(SeekFrom::Start(header.chunk.end()))?;

	Ok(Some(header))
}

// Record the range of every sub-object, without reading their content
fn collect_chunks<R>(reader: &mut R, header_chunk: &Chunk) -> Result<Vec<Chunk>>
where
	R: Read + Seek,
{
	let mut chunks = Vec::new();

	let mut pos = reader.stream_position()?;
	while pos < header_chunk.end() {
		let chunk = Chunk::read(reader)?;

		if chunk.end() > header_chunk.end() {
			log::debug!(
				"ASF: Object {} ends at {}, past the header object end at {}",
				chunk.guid,
				chunk.end(),
				header_chunk.end()
			);
			decode_err!(@BAIL Asf, "Sub-object extends past the end of the header object");
		}

		log::trace!(
			"ASF: Found object {} ({} bytes) at offset {}",
			chunk.guid,
			chunk.len,
			chunk.start
		);

		pos = reader.seek(SeekFrom::Start(chunk.end()))?;
		chunks.push(chunk);
	}

	Ok(chunks)
}
