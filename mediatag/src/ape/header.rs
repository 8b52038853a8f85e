use crate::error::Result;
use crate::macros::decode_err;
use crate::util::bytes::{read_u16_le, read_u32_le};

pub(crate) const DESCRIPTOR_SIZE: usize = 44;
pub(crate) const HEADER_SIZE: usize = 24;

/// The block following `"MAC "` and the version
///
/// ```text
/// descriptor length (4) | header length (4) | seek table length (4) | RIFF/WAV length (4)
/// frame data length, low (4) | frame data length, high (4) | terminating data length (4)
/// MD5 (16)
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct MonkeyDescriptor {
	pub(crate) descriptor_len: u32,
	pub(crate) header_len: u32,
	pub(crate) seek_table_len: u32,
	pub(crate) frame_data_len: u64,
	pub(crate) md5: [u8; 16],
}

impl MonkeyDescriptor {
	pub(crate) fn parse(buf: &[u8]) -> Result<Self> {
		let frame_data_low = read_u32_le(buf, 16)?;
		let frame_data_high = read_u32_le(buf, 20)?;

		let Some(hash) = buf.get(28..DESCRIPTOR_SIZE) else {
			decode_err!(@BAIL Ape, "Not enough data left in reader to finish the MAC descriptor");
		};

		let mut md5 = [0; 16];
		md5.copy_from_slice(hash);

		Ok(Self {
			descriptor_len: read_u32_le(buf, 0)?,
			header_len: read_u32_le(buf, 4)?,
			seek_table_len: read_u32_le(buf, 8)?,
			// RIFF/WAV length (4) is implied by the fmt chunk, and the terminating data length (4)
			// is irrelevant to the audio properties
			frame_data_len: (u64::from(frame_data_high) << 32) | u64::from(frame_data_low),
			md5,
		})
	}

	/// Offset of the embedded RIFF/WAVE header, relative to the start of the file
	pub(crate) fn riff_wav_offset(&self) -> u64 {
		u64::from(self.descriptor_len) + u64::from(self.header_len) + u64::from(self.seek_table_len)
	}
}

/// The block following the descriptor
///
/// ```text
/// compression level (2) | format flags (2) | blocks per frame (4) | final frame blocks (4)
/// total frames (4) | bits per sample (2) | channels (2) | sample rate (4)
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct MonkeyHeader {
	pub(crate) compression_level: u16,
	pub(crate) blocks_per_frame: u32,
	pub(crate) final_frame_blocks: u32,
	pub(crate) total_frames: u32,
	pub(crate) bits_per_sample: u16,
	pub(crate) channels: u16,
	pub(crate) sample_rate: u32,
}

impl MonkeyHeader {
	pub(crate) fn parse(buf: &[u8]) -> Result<Self> {
		Ok(Self {
			compression_level: read_u16_le(buf, 0)?,
			// Format flags (2), only meaningful for versions without a descriptor
			blocks_per_frame: read_u32_le(buf, 4)?,
			final_frame_blocks: read_u32_le(buf, 8)?,
			total_frames: read_u32_le(buf, 12)?,
			bits_per_sample: read_u16_le(buf, 16)?,
			channels: read_u16_le(buf, 18)?,
			sample_rate: read_u32_le(buf, 20)?,
		})
	}

	/// The number of samples per channel
	///
	/// Every frame but the last holds `blocks_per_frame` blocks.
	pub(crate) fn total_blocks(&self) -> u64 {
		match self.total_frames {
			0 => 0,
			frames => {
				u64::from(self.blocks_per_frame) * u64::from(frames - 1)
					+ u64::from(self.final_frame_blocks)
			},
		}
	}
}
