use crate::asf::chunk::Chunk;
use crate::asf::guid::{FILE_PROPERTIES_OBJECT, Guid};
use crate::asf::util::chunk_payload;
use crate::config::ParsingMode;
use crate::error::Result;
use crate::macros::{decode_err, parse_mode_choice};

use std::io::{Read, Seek};
use std::time::{Duration, SystemTime};

use byteorder::{LittleEndian, ReadBytesExt};

const PAYLOAD_SIZE: u64 = 80;

// Seconds between 1601-01-01 and 1970-01-01
const FILETIME_UNIX_OFFSET: u64 = 11_644_473_600;

/// The file properties object
///
/// All times are in 100 nanosecond units, except for the preroll (milliseconds).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FileHeader {
	pub(crate) file_id: Guid,
	pub(crate) file_size: u64,
	pub(crate) creation_time: u64,
	pub(crate) packet_count: u64,
	pub(crate) play_duration: u64,
	pub(crate) send_duration: u64,
	pub(crate) preroll: u64,
	pub(crate) flags: u32,
	pub(crate) min_packet_size: u32,
	pub(crate) max_packet_size: u32,
	pub(crate) max_bitrate: u32,
}

impl FileHeader {
	pub(crate) fn read<R>(
		reader: &mut R,
		chunk: &Chunk,
		stream_len: u64,
		parse_mode: ParsingMode,
	) -> Result<Self>
	where
		R: Read + Seek,
	{
		if chunk.payload_len() < PAYLOAD_SIZE {
			decode_err!(@BAIL Asf, "File properties object is too small");
		}

		let payload = chunk_payload(reader, chunk, FILE_PROPERTIES_OBJECT)?;
		let payload = &mut &payload[..];

		let header = Self {
			file_id: Guid::read(payload)?,
			file_size: payload.read_u64::<LittleEndian>()?,
			creation_time: payload.read_u64::<LittleEndian>()?,
			packet_count: payload.read_u64::<LittleEndian>()?,
			play_duration: payload.read_u64::<LittleEndian>()?,
			send_duration: payload.read_u64::<LittleEndian>()?,
			preroll: payload.read_u64::<LittleEndian>()?,
			flags: payload.read_u32::<LittleEndian>()?,
			min_packet_size: payload.read_u32::<LittleEndian>()?,
			max_packet_size: payload.read_u32::<LittleEndian>()?,
			max_bitrate: payload.read_u32::<LittleEndian>()?,
		};

		// Invalid while broadcasting
		if !header.is_broadcast() && header.file_size != stream_len {
			parse_mode_choice!(
				parse_mode,
				STRICT: decode_err!(@BAIL Asf, "File properties size doesn't match the stream length"),
				DEFAULT: log::warn!(
					"ASF: File properties declare a size of {} bytes, the stream is {stream_len} bytes",
					header.file_size
				)
			);
		}

		Ok(header)
	}

	/// Unique identifier of the file
	pub fn file_id(&self) -> Guid {
		self.file_id
	}

	/// Size of the file in bytes, as declared by the writer
	pub fn file_size(&self) -> u64 {
		self.file_size
	}

	/// Creation time as a FILETIME (100 nanosecond intervals since 1601-01-01)
	pub fn creation_time_raw(&self) -> u64 {
		self.creation_time
	}

	/// Creation time
	///
	/// Returns `None` if the time can't be represented on this platform.
	pub fn creation_time(&self) -> Option<SystemTime> {
		let since_1601 = Duration::from_nanos(self.creation_time).checked_mul(100)?;
		let offset = Duration::from_secs(FILETIME_UNIX_OFFSET);

		match since_1601.checked_sub(offset) {
			Some(since_epoch) => SystemTime::UNIX_EPOCH.checked_add(since_epoch),
			None => SystemTime::UNIX_EPOCH.checked_sub(offset - since_1601),
		}
	}

	/// Number of data packets
	pub fn packet_count(&self) -> u64 {
		self.packet_count
	}

	/// Time to play the file, including the preroll
	pub fn play_duration(&self) -> u64 {
		self.play_duration
	}

	/// Time to send the file
	pub fn send_duration(&self) -> u64 {
		self.send_duration
	}

	/// Time to buffer before playing, in milliseconds
	pub fn preroll(&self) -> u64 {
		self.preroll
	}

	/// Duration of the audio, which is the play duration minus the preroll
	pub fn duration(&self) -> Duration {
		let play_duration = Duration::from_nanos(self.play_duration.saturating_mul(100));
		play_duration.saturating_sub(Duration::from_millis(self.preroll))
	}

	/// Raw flags
	pub fn flags(&self) -> u32 {
		self.flags
	}

	/// Whether the file is being broadcast, in which case most sizes and durations are invalid
	pub fn is_broadcast(&self) -> bool {
		self.flags & 0b1 != 0
	}

	/// Whether the file is seekable
	pub fn is_seekable(&self) -> bool {
		self.flags & 0b10 != 0
	}

	/// Minimum data packet size in bytes
	pub fn min_packet_size(&self) -> u32 {
		self.min_packet_size
	}

	/// Maximum data packet size in bytes
	pub fn max_packet_size(&self) -> u32 {
		self.max_packet_size
	}

	/// Maximum instantaneous bitrate (bps)
	pub fn max_bitrate(&self) -> u32 {
		self.max_bitrate
	}
}
