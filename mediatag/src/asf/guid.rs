//! ASF object identifiers

use crate::error::Result;

use std::fmt::{Display, Formatter};
use std::io::Read;

/// A 16 byte ASF object identifier
///
/// The bytes are kept in their on-disk order. Only the textual form reorders them: the first
/// three groups are little-endian.
///
/// # Examples
///
/// ```rust
/// use mediatag::asf::guid::{Guid, HEADER_OBJECT};
///
/// let guid = Guid::parse_str("75B22630-668E-11CF-A6D9-00AA0062CE6C");
/// assert_eq!(guid, Some(HEADER_OBJECT));
/// assert_eq!(HEADER_OBJECT.to_string(), "75B22630-668E-11CF-A6D9-00AA0062CE6C");
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Guid([u8; 16]);

impl Guid {
	/// Create a `Guid` from its on-disk bytes
	pub const fn from_bytes(bytes: [u8; 16]) -> Self {
		Self(bytes)
	}

	/// The on-disk bytes
	pub fn as_bytes(&self) -> &[u8; 16] {
		&self.0
	}

	/// Read a `Guid` from `reader`
	///
	/// # Errors
	///
	/// `reader` holds fewer than 16 bytes
	pub fn read<R>(reader: &mut R) -> Result<Self>
	where
		R: Read,
	{
		let mut bytes = [0; 16];
		reader.read_exact(&mut bytes)?;

		Ok(Self(bytes))
	}

	/// Parse the textual form, `XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX`
	///
	/// Hex digits may be of either case. Returns `None` if `s` is malformed.
	pub fn parse_str(s: &str) -> Option<Self> {
		let s = s.as_bytes();
		if s.len() != 36 || [8, 13, 18, 23].iter().any(|&i| s[i] != b'-') {
			return None;
		}

		let mut canonical = [0_u8; 16];
		let mut digits = s.iter().filter(|&&c| c != b'-');

		for byte in &mut canonical {
			let high = hex_value(*digits.next()?)?;
			let low = hex_value(*digits.next()?)?;
			*byte = (high << 4) | low;
		}

		if digits.next().is_some() {
			return None;
		}

		Some(Self(swap_groups(canonical)))
	}
}

fn hex_value(c: u8) -> Option<u8> {
	match c {
		b'0'..=b'9' => Some(c - b'0'),
		b'a'..=b'f' => Some(c - b'a' + 10),
		b'A'..=b'F' => Some(c - b'A' + 10),
		_ => None,
	}
}

// Converts between the on-disk and textual byte orders, which only differ in the first 3 groups
fn swap_groups(mut bytes: [u8; 16]) -> [u8; 16] {
	bytes[..4].reverse();
	bytes[4..6].reverse();
	bytes[6..8].reverse();
	bytes
}

impl Display for Guid {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let b = swap_groups(self.0);

		write!(
			f,
			"{:02X}{:02X}{:02X}{:02X}-{:02X}{:02X}-{:02X}{:02X}-{:02X}{:02X}-{:02X}{:02X}{:02X}{:02X}{:02X}{:02X}",
			b[0],
			b[1],
			b[2],
			b[3],
			b[4],
			b[5],
			b[6],
			b[7],
			b[8],
			b[9],
			b[10],
			b[11],
			b[12],
			b[13],
			b[14],
			b[15]
		)
	}
}

// Top level objects

/// The header object, `75B22630-668E-11CF-A6D9-00AA0062CE6C`
pub const HEADER_OBJECT: Guid = Guid([
	0x30, 0x26, 0xB2, 0x75, 0x8E, 0x66, 0xCF, 0x11, 0xA6, 0xD9, 0x00, 0xAA, 0x00, 0x62, 0xCE, 0x6C,
]);
/// The data object, `75B22636-668E-11CF-A6D9-00AA0062CE6C`
pub const DATA_OBJECT: Guid = Guid([
	0x36, 0x26, 0xB2, 0x75, 0x8E, 0x66, 0xCF, 0x11, 0xA6, 0xD9, 0x00, 0xAA, 0x00, 0x62, 0xCE, 0x6C,
]);

// Header sub-objects

/// The file properties object, `8CABDCA1-A947-11CF-8EE4-00C00C205365`
pub const FILE_PROPERTIES_OBJECT: Guid = Guid([
	0xA1, 0xDC, 0xAB, 0x8C, 0x47, 0xA9, 0xCF, 0x11, 0x8E, 0xE4, 0x00, 0xC0, 0x0C, 0x20, 0x53, 0x65,
]);
/// The stream properties object, `B7DC0791-A9B7-11CF-8EE6-00C00C205365`
pub const STREAM_PROPERTIES_OBJECT: Guid = Guid([
	0x91, 0x07, 0xDC, 0xB7, 0xB7, 0xA9, 0xCF, 0x11, 0x8E, 0xE6, 0x00, 0xC0, 0x0C, 0x20, 0x53, 0x65,
]);
/// The content description object, `75B22633-668E-11CF-A6D9-00AA0062CE6C`
pub const CONTENT_DESCRIPTION_OBJECT: Guid = Guid([
	0x33, 0x26, 0xB2, 0x75, 0x8E, 0x66, 0xCF, 0x11, 0xA6, 0xD9, 0x00, 0xAA, 0x00, 0x62, 0xCE, 0x6C,
]);
/// The extended content description object, `D2D0A440-E307-11D2-97F0-00A0C95EA850`
pub const EXTENDED_CONTENT_DESCRIPTION_OBJECT: Guid = Guid([
	0x40, 0xA4, 0xD0, 0xD2, 0x07, 0xE3, 0xD2, 0x11, 0x97, 0xF0, 0x00, 0xA0, 0xC9, 0x5E, 0xA8, 0x50,
]);
/// The codec list object, `86D15240-311D-11D0-A3A4-00A0C90348F6`
pub const CODEC_LIST_OBJECT: Guid = Guid([
	0x40, 0x52, 0xD1, 0x86, 0x1D, 0x31, 0xD0, 0x11, 0xA3, 0xA4, 0x00, 0xA0, 0xC9, 0x03, 0x48, 0xF6,
]);
/// The header extension object, `5FBF03B5-A92E-11CF-8EE3-00C00C205365`
pub const HEADER_EXTENSION_OBJECT: Guid = Guid([
	0xB5, 0x03, 0xBF, 0x5F, 0x2E, 0xA9, 0xCF, 0x11, 0x8E, 0xE3, 0x00, 0xC0, 0x0C, 0x20, 0x53, 0x65,
]);

// Stream types

/// Audio media, `F8699E40-5B4D-11CF-A8FD-00805F5C442B`
pub const AUDIO_MEDIA: Guid = Guid([
	0x40, 0x9E, 0x69, 0xF8, 0x4D, 0x5B, 0xCF, 0x11, 0xA8, 0xFD, 0x00, 0x80, 0x5F, 0x5C, 0x44, 0x2B,
]);
/// Video media, `BC19EFC0-5B4D-11CF-A8FD-00805F5C442B`
pub const VIDEO_MEDIA: Guid = Guid([
	0xC0, 0xEF, 0x19, 0xBC, 0x4D, 0x5B, 0xCF, 0x11, 0xA8, 0xFD, 0x00, 0x80, 0x5F, 0x5C, 0x44, 0x2B,
]);

// Error correction types

/// No error correction, `20FB5700-5B55-11CF-A8FD-00805F5C442B`
pub const NO_ERROR_CORRECTION: Guid = Guid([
	0x00, 0x57, 0xFB, 0x20, 0x55, 0x5B, 0xCF, 0x11, 0xA8, 0xFD, 0x00, 0x80, 0x5F, 0x5C, 0x44, 0x2B,
]);
/// Audio spread, `BFC3CD50-618F-11CF-8BB2-00AA00B4E220`
pub const AUDIO_SPREAD: Guid = Guid([
	0x50, 0xCD, 0xC3, 0xBF, 0x8F, 0x61, 0xCF, 0x11, 0x8B, 0xB2, 0x00, 0xAA, 0x00, 0xB4, 0xE2, 0x20,
]);
