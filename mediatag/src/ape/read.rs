use super::constants::{MAC_MAGIC, MAC_MIN_VERSION};
use super::header::{DESCRIPTOR_SIZE, HEADER_SIZE, MonkeyDescriptor, MonkeyHeader};
use super::properties::{CompressionLevel, EncodingInfo};
use crate::config::ParseOptions;
use crate::error::Result;
use crate::file::FileType;
use crate::iff::wav::{RiffHeader, WavFormatHeader};
use crate::macros::{decode_err, parse_mode_choice};
use crate::util::io::SeekStreamLen;

use std::io::{Read, Seek, SeekFrom};
use std::time::Duration;

use byteorder::{LittleEndian, ReadBytesExt};

/// Read the audio properties of a Monkey's Audio stream
///
/// `reader` is expected to be positioned at the `"MAC "` signature. All offsets in the descriptor
/// are relative to that position, while the bitrate is computed from the length of the entire
/// stream.
///
/// Only files created by Monkey's Audio 3.97 and newer are supported.
///
/// # Errors
///
/// Any failure is reported as a [`FileDecodingError`](crate::error::FileDecodingError), such as:
///
/// * The stream is empty
/// * The signature or version is invalid
/// * The embedded RIFF/WAVE or `fmt` header is invalid
/// * The stream is too short to describe any audio
///
/// # Examples
///
/// ```rust,no_run
/// use mediatag::ape::read_encoding_info;
/// use mediatag::config::ParseOptions;
/// use std::fs::File;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut file = File::open("song.ape")?;
/// let info = read_encoding_info(&mut file, ParseOptions::new())?;
///
/// println!("{} ({}s)", info.encoding_type(), info.length_seconds());
/// # Ok(()) }
/// ```
pub fn read_encoding_info<R>(reader: &mut R, parse_options: ParseOptions) -> Result<EncodingInfo>
where
	R: Read + Seek,
{
	read_properties(reader, parse_options).map_err(|e| {
		e.into_cannot_read(FileType::Ape, "Unable to read the Monkey's Audio header")
	})
}

fn read_properties<R>(reader: &mut R, parse_options: ParseOptions) -> Result<EncodingInfo>
where
	R: Read + Seek,
{
	let parse_mode = parse_options.parsing_mode;

	let file_size = reader.stream_len_hack()?;
	if file_size == 0 {
		decode_err!(@BAIL Ape, "File is empty");
	}

	let start = reader.stream_position()?;

	let mut magic = [0; 4];
	reader.read_exact(&mut magic)?;
	if &magic != MAC_MAGIC {
		decode_err!(@BAIL Ape, "Invalid Monkey's Audio signature (expected \"MAC \")");
	}

	let version = reader.read_u32::<LittleEndian>()?;
	log::debug!("MAC: Found version {version}");

	if version < MAC_MIN_VERSION {
		decode_err!(@BAIL Ape, "Unsupported Monkey's Audio version (< 3.97)");
	}

	let mut descriptor = [0; DESCRIPTOR_SIZE];
	reader.read_exact(&mut descriptor)?;
	let descriptor = MonkeyDescriptor::parse(&descriptor)?;

	let mut header = [0; HEADER_SIZE];
	reader.read_exact(&mut header)?;
	let header = MonkeyHeader::parse(&header)?;

	reader.seek(SeekFrom::Start(start + descriptor.riff_wav_offset()))?;

	let mut riff = [0; RiffHeader::SIZE];
	reader.read_exact(&mut riff)?;
	if !RiffHeader::from_bytes(&riff)?.is_valid() {
		decode_err!(@BAIL Ape, "Invalid RIFF/WAVE header");
	}

	let mut fmt = [0; WavFormatHeader::SIZE];
	reader.read_exact(&mut fmt)?;
	let fmt = WavFormatHeader::from_bytes(&fmt)?;
	if !fmt.is_valid() {
		decode_err!(@BAIL Ape, "Invalid WAV fmt chunk (expected PCM)");
	}

	if u16::from(fmt.channels()) != header.channels || fmt.sample_rate() != header.sample_rate {
		parse_mode_choice!(
			parse_mode,
			STRICT: decode_err!(@BAIL Ape, "MAC header disagrees with the WAV fmt chunk"),
			DEFAULT: log::warn!(
				"MAC: Header ({} channels, {} Hz) disagrees with the fmt chunk ({} channels, {} \
				 Hz), using the fmt chunk",
				header.channels,
				header.sample_rate,
				fmt.channels(),
				fmt.sample_rate()
			)
		);
	}

	let sample_rate = fmt.sample_rate();
	if header.total_frames == 0 || sample_rate == 0 {
		decode_err!(@BAIL Ape, "File contains no audio frames");
	}

	let total_blocks = header.total_blocks();
	let length_seconds = total_blocks / u64::from(sample_rate);
	if length_seconds == 0 {
		decode_err!(@BAIL Ape, "File is shorter than one second, unable to compute the bitrate");
	}

	// Non-zero, since the length is at least one second
	let duration_ms = total_blocks.saturating_mul(1000) / u64::from(sample_rate);

	Ok(EncodingInfo {
		version,
		compression_level: CompressionLevel::from_u16(header.compression_level),
		duration: Duration::from_millis(duration_ms),
		length_seconds,
		bitrate_kbps: file_size / 1000 * 8 / length_seconds,
		audio_bitrate_kbps: descriptor.frame_data_len.saturating_mul(8) / duration_ms,
		channel_number: fmt.channels(),
		sampling_rate: sample_rate,
		bits_per_sample: header.bits_per_sample,
		md5: descriptor.md5,
	})
}
