//! Minimal RIFF/WAVE validation
//!
//! Both headers are copied out of a byte buffer once, and only check the fields needed to confirm
//! the audio is PCM.

use crate::error::Result;
use crate::util::bytes::{read_u8, read_u32_le};

const RIFF: &[u8; 4] = b"RIFF";
const WAVE: &[u8; 4] = b"WAVE";
const FMT: &[u8; 3] = b"fmt";
const WAVE_FORMAT_PCM: u8 = 1;

/// The 12 byte block opening a RIFF/WAVE file
///
/// ```text
/// "RIFF" (4) | chunk size (4) | "WAVE" (4)
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RiffHeader {
	riff: [u8; 4],
	size: u32,
	wave: [u8; 4],
}

impl RiffHeader {
	/// The size of the block
	pub const SIZE: usize = 12;

	/// Copy a `RiffHeader` out of `buf`
	///
	/// # Errors
	///
	/// `buf` is shorter than [`RiffHeader::SIZE`]
	pub fn from_bytes(buf: &[u8]) -> Result<Self> {
		// The size field is bounds checked first, so both identifiers are in range
		let size = read_u32_le(buf, 4)?;
		let wave = read_u32_le(buf, 8)?;

		Ok(Self {
			riff: read_u32_le(buf, 0)?.to_le_bytes(),
			size,
			wave: wave.to_le_bytes(),
		})
	}

	/// The RIFF chunk size
	///
	/// This is never validated.
	pub fn size(&self) -> u32 {
		self.size
	}

	/// Whether the block starts with `"RIFF"` and declares a `"WAVE"` form
	///
	/// # Examples
	///
	/// ```rust
	/// use mediatag::iff::wav::RiffHeader;
	///
	/// # fn main() -> mediatag::error::Result<()> {
	/// let header = RiffHeader::from_bytes(b"RIFF\xFF\xFF\xFF\xFFWAVE")?;
	/// assert!(header.is_valid());
	///
	/// let header = RiffHeader::from_bytes(b"RIFF\x00\x00\x00\x00AVI ")?;
	/// assert!(!header.is_valid());
	/// # Ok(()) }
	/// ```
	pub fn is_valid(&self) -> bool {
		&self.riff == RIFF && &self.wave == WAVE
	}
}

/// The 24 byte `fmt ` sub-chunk of a RIFF/WAVE file
///
/// ```text
/// "fmt " (4) | chunk size (4) | format tag (2) | channels (2) | sample rate (4)
/// byte rate (4) | block align (2) | bits per sample (2)
/// ```
///
/// Only the low byte of the format tag and channel count are considered, so channel counts
/// above 255 cannot be represented.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WavFormatHeader {
	id: [u8; 3],
	format_tag: u8,
	channels: u8,
	sample_rate: u32,
	byte_rate: u32,
	bits_per_sample: u8,
}

impl WavFormatHeader {
	/// The size of the block
	pub const SIZE: usize = 24;

	/// Copy a `WavFormatHeader` out of `buf`
	///
	/// # Errors
	///
	/// `buf` is shorter than [`WavFormatHeader::SIZE`]
	pub fn from_bytes(buf: &[u8]) -> Result<Self> {
		let bits_per_sample = read_u8(buf, 22)?;

		Ok(Self {
			id: [buf[0], buf[1], buf[2]],
			format_tag: read_u8(buf, 8)?,
			channels: read_u8(buf, 10)?,
			sample_rate: read_u32_le(buf, 12)?,
			byte_rate: read_u32_le(buf, 16)?,
			bits_per_sample,
		})
	}

	/// Whether this is a `fmt` chunk describing PCM audio
	///
	/// Only the first 3 bytes of the chunk identifier are compared.
	///
	/// # Examples
	///
	/// ```rust
	/// use mediatag::iff::wav::WavFormatHeader;
	///
	/// # fn main() -> mediatag::error::Result<()> {
	/// let mut fmt = [0; 24];
	/// fmt[..4].copy_from_slice(b"fmt ");
	/// fmt[8] = 1;
	/// assert!(WavFormatHeader::from_bytes(&fmt)?.is_valid());
	///
	/// // IEEE float
	/// fmt[8] = 3;
	/// assert!(!WavFormatHeader::from_bytes(&fmt)?.is_valid());
	/// # Ok(()) }
	/// ```
	pub fn is_valid(&self) -> bool {
		&self.id == FMT && self.format_tag == WAVE_FORMAT_PCM
	}

	/// Channel count
	pub fn channels(&self) -> u8 {
		self.channels
	}

	/// Sample rate (Hz)
	pub fn sample_rate(&self) -> u32 {
		self.sample_rate
	}

	/// Average bytes per second
	pub fn byte_rate(&self) -> u32 {
		self.byte_rate
	}

	/// The byte at offset 22
	///
	/// This is the low byte of the bits per sample field. It is read as a single byte, so
	/// depths above 255 are truncated.
	pub fn bits_per_sample(&self) -> u8 {
		self.bits_per_sample
	}
}
