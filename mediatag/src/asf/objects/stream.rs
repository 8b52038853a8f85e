use crate::asf::chunk::Chunk;
use crate::asf::guid::{AUDIO_MEDIA, Guid, STREAM_PROPERTIES_OBJECT};
use crate::asf::util::chunk_payload;
use crate::config::ParsingMode;
use crate::error::Result;
use crate::macros::{decode_err, parse_mode_choice, try_vec};

use std::io::{Read, Seek};

use byteorder::{LittleEndian, ReadBytesExt};

// WAVEFORMATEX, without the trailing cbSize
const AUDIO_PROPERTIES_SIZE: usize = 16;

/// The audio specific part of a [`StreamChunk`]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AudioStreamProperties {
	pub(crate) codec_id: u16,
	pub(crate) channels: u16,
	pub(crate) sample_rate: u32,
	pub(crate) average_bytes_per_second: u32,
	pub(crate) block_align: u16,
	pub(crate) bits_per_sample: u16,
}

impl AudioStreamProperties {
	fn parse(mut data: &[u8]) -> Result<Self> {
		Ok(Self {
			codec_id: data.read_u16::<LittleEndian>()?,
			channels: data.read_u16::<LittleEndian>()?,
			sample_rate: data.read_u32::<LittleEndian>()?,
			average_bytes_per_second: data.read_u32::<LittleEndian>()?,
			block_align: data.read_u16::<LittleEndian>()?,
			bits_per_sample: data.read_u16::<LittleEndian>()?,
		})
	}

	/// The codec identifier, such as `0x0161` for WMA
	pub fn codec_id(&self) -> u16 {
		self.codec_id
	}

	/// Channel count
	pub fn channels(&self) -> u16 {
		self.channels
	}

	/// Sample rate (Hz)
	pub fn sample_rate(&self) -> u32 {
		self.sample_rate
	}

	/// Average bytes per second
	pub fn average_bytes_per_second(&self) -> u32 {
		self.average_bytes_per_second
	}

	/// Bitrate (kbps), derived from the average bytes per second
	pub fn bitrate_kbps(&self) -> u32 {
		(u64::from(self.average_bytes_per_second) * 8 / 1000) as u32
	}

	/// Block alignment in bytes
	pub fn block_align(&self) -> u16 {
		self.block_align
	}

	/// Bits per sample
	pub fn bits_per_sample(&self) -> u16 {
		self.bits_per_sample
	}
}

/// The type specific data of a [`StreamChunk`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StreamTypeData {
	/// An audio stream
	Audio(AudioStreamProperties),
	/// Any other stream type, kept as-is
	Other(Vec<u8>),
}

/// The stream properties object
///
/// There is one per stream in the file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StreamChunk {
	pub(crate) stream_type: Guid,
	pub(crate) error_correction_type: Guid,
	pub(crate) time_offset: u64,
	pub(crate) flags: u16,
	pub(crate) type_specific: StreamTypeData,
	pub(crate) error_correction_data: Vec<u8>,
}

impl StreamChunk {
	pub(crate) fn read<R>(reader: &mut R, chunk: &Chunk, parse_mode: ParsingMode) -> Result<Self>
	where
		R: Read + Seek,
	{
		let payload = chunk_payload(reader, chunk, STREAM_PROPERTIES_OBJECT)?;
		let payload = &mut &payload[..];

		let stream_type = Guid::read(payload)?;
		let error_correction_type = Guid::read(payload)?;
		let time_offset = payload.read_u64::<LittleEndian>()?;
		let type_specific_len = payload.read_u32::<LittleEndian>()?;
		let error_correction_len = payload.read_u32::<LittleEndian>()?;
		let flags = payload.read_u16::<LittleEndian>()?;
		let _reserved = payload.read_u32::<LittleEndian>()?;

		if u64::from(type_specific_len) + u64::from(error_correction_len) > payload.len() as u64 {
			decode_err!(@BAIL Asf, "Stream properties data exceeds the object");
		}

		let mut type_specific = try_vec![0; type_specific_len as usize];
		payload.read_exact(&mut type_specific)?;

		let mut error_correction_data = try_vec![0; error_correction_len as usize];
		payload.read_exact(&mut error_correction_data)?;

		let type_specific = if stream_type == AUDIO_MEDIA {
			if type_specific.len() < AUDIO_PROPERTIES_SIZE {
				parse_mode_choice!(
					parse_mode,
					STRICT: decode_err!(@BAIL Asf, "Audio stream properties are too small"),
					DEFAULT: {
						log::warn!("ASF: Audio stream properties are too small, keeping raw data");
						StreamTypeData::Other(type_specific)
					}
				)
			} else {
				StreamTypeData::Audio(AudioStreamProperties::parse(&type_specific)?)
			}
		} else {
			StreamTypeData::Other(type_specific)
		};

		Ok(Self {
			stream_type,
			error_correction_type,
			time_offset,
			flags,
			type_specific,
			error_correction_data,
		})
	}

	/// The media type, such as [`AUDIO_MEDIA`]
	pub fn stream_type(&self) -> Guid {
		self.stream_type
	}

	/// The error correction type
	pub fn error_correction_type(&self) -> Guid {
		self.error_correction_type
	}

	/// Presentation time offset, in 100 nanosecond units
	pub fn time_offset(&self) -> u64 {
		self.time_offset
	}

	/// The stream number, between 1 and 127
	pub fn stream_number(&self) -> u8 {
		(self.flags & 0x7F) as u8
	}

	/// Whether the stream content is encrypted
	pub fn is_encrypted(&self) -> bool {
		self.flags & 0x8000 != 0
	}

	/// The type specific data
	pub fn type_specific(&self) -> &StreamTypeData {
		&self.type_specific
	}

	/// The audio properties, if this is an audio stream
	pub fn audio(&self) -> Option<&AudioStreamProperties> {
		match &self.type_specific {
			StreamTypeData::Audio(audio) => Some(audio),
			StreamTypeData::Other(_) => None,
		}
	}

	/// The error correction data
	pub fn error_correction_data(&self) -> &[u8] {
		&self.error_correction_data
	}
}
