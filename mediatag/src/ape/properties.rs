use std::fmt::{Display, Formatter};
use std::time::Duration;

/// A Monkey's Audio compression level
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum CompressionLevel {
	Fast,
	Normal,
	High,
	ExtraHigh,
	Insane,
	/// A level outside of the known presets
	Unknown(u16),
}

impl CompressionLevel {
	/// Get a `CompressionLevel` from its on-disk value
	///
	/// # Examples
	///
	/// ```rust
	/// use mediatag::ape::CompressionLevel;
	///
	/// assert_eq!(CompressionLevel::from_u16(4000), CompressionLevel::ExtraHigh);
	/// assert_eq!(CompressionLevel::from_u16(4500), CompressionLevel::Unknown(4500));
	/// ```
	pub fn from_u16(level: u16) -> Self {
		match level {
			1000 => Self::Fast,
			2000 => Self::Normal,
			3000 => Self::High,
			4000 => Self::ExtraHigh,
			5000 => Self::Insane,
			_ => Self::Unknown(level),
		}
	}

	/// The human-readable name of the level
	pub fn name(&self) -> &'static str {
		match self {
			Self::Fast => "Fast",
			Self::Normal => "Normal",
			Self::High => "High",
			Self::ExtraHigh => "Extra High",
			Self::Insane => "Insane",
			Self::Unknown(_) => "Unknown",
		}
	}
}

impl Display for CompressionLevel {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

/// A Monkey's Audio file's audio properties
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub struct EncodingInfo {
	pub(crate) version: u32,
	pub(crate) compression_level: CompressionLevel,
	pub(crate) duration: Duration,
	pub(crate) length_seconds: u64,
	pub(crate) bitrate_kbps: u64,
	pub(crate) audio_bitrate_kbps: u64,
	pub(crate) channel_number: u8,
	pub(crate) sampling_rate: u32,
	pub(crate) bits_per_sample: u16,
	pub(crate) md5: [u8; 16],
}

impl EncodingInfo {
	/// Duration of the audio, in whole seconds
	pub fn length_seconds(&self) -> u64 {
		self.length_seconds
	}

	/// Duration of the audio, to the millisecond
	pub fn duration(&self) -> Duration {
		self.duration
	}

	/// Overall bitrate (kbps), derived from the total file size
	pub fn bitrate_kbps(&self) -> u64 {
		self.bitrate_kbps
	}

	/// Audio bitrate (kbps), derived from the size of the compressed frames
	pub fn audio_bitrate_kbps(&self) -> u64 {
		self.audio_bitrate_kbps
	}

	/// Channel count
	pub fn channel_number(&self) -> u8 {
		self.channel_number
	}

	/// Sample rate (Hz)
	pub fn sampling_rate(&self) -> u32 {
		self.sampling_rate
	}

	/// Bits per sample
	pub fn bits_per_sample(&self) -> u16 {
		self.bits_per_sample
	}

	/// The format version, such as `3990` for 3.99
	pub fn version(&self) -> u32 {
		self.version
	}

	/// The compression level used by the encoder
	pub fn compression_level(&self) -> CompressionLevel {
		self.compression_level
	}

	/// MD5 of the file, as stored by the encoder
	pub fn md5(&self) -> &[u8; 16] {
		&self.md5
	}

	/// A description of the encoding
	///
	/// # Examples
	///
	/// ```rust,ignore
	/// assert_eq!(info.encoding_type(), "Monkey Audio v3, compression level Extra High");
	/// ```
	pub fn encoding_type(&self) -> String {
		format!(
			"Monkey Audio v{}, compression level {}",
			self.version / 1000,
			self.compression_level
		)
	}
}
