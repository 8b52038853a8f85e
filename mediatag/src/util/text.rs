use crate::config::ParsingMode;
use crate::error::Result;
use crate::macros::err;

/// Errors that can occur while encoding text
#[derive(Copy, Clone, Debug)]
pub struct TextEncodingError {
	encoding: TextEncoding,
	valid_up_to: usize,
}

impl TextEncodingError {
	/// The target text encoding
	pub fn encoding(&self) -> TextEncoding {
		self.encoding
	}

	/// The character index in the provided string up to which the encoding was valid
	pub fn valid_up_to(&self) -> usize {
		self.valid_up_to
	}
}

impl core::fmt::Display for TextEncodingError {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		let encoding = match self.encoding {
			TextEncoding::Latin1 => "Latin-1",
			TextEncoding::UTF8 => "UTF-8",
			TextEncoding::UTF16LE => "UTF-16 LE",
		};

		write!(
			f,
			"invalid {encoding} sequence from index {}",
			self.valid_up_to
		)
	}
}

impl core::error::Error for TextEncodingError {}

/// The text encodings found in the supported formats
///
/// * APE item keys are [`TextEncoding::Latin1`]
/// * APE text values are [`TextEncoding::UTF8`]
/// * ASF strings are [`TextEncoding::UTF16LE`]
#[derive(Debug, Clone, Eq, PartialEq, Copy, Hash)]
pub enum TextEncoding {
	/// ISO-8859-1
	Latin1,
	/// UTF-8
	UTF8,
	/// UTF-16 little endian, without a byte order mark
	UTF16LE,
}

pub(crate) fn latin1_decode(bytes: &[u8]) -> String {
	bytes.iter().map(|c| char::from(*c)).collect::<String>()
}

pub(crate) fn latin1_encode(s: &str) -> std::result::Result<Vec<u8>, TextEncodingError> {
	s.chars()
		.enumerate()
		.map(|(index, c)| {
			u8::try_from(u32::from(c)).map_err(|_| TextEncodingError {
				encoding: TextEncoding::Latin1,
				valid_up_to: index,
			})
		})
		.collect()
}

/// Decode UTF-16 LE bytes, dropping a trailing NUL if present
///
/// How invalid sequences are handled depends on `parse_mode`:
///
/// * Strict: error
/// * BestAttempt: replaced with U+FFFD
/// * Relaxed: the whole string is discarded
pub(crate) fn utf16le_decode(bytes: &[u8], parse_mode: ParsingMode) -> Result<String> {
	if bytes.len() % 2 != 0 {
		err!(TextDecode("UTF-16 string has an odd length"));
	}

	let mut units = bytes
		.chunks_exact(2)
		.map(|c| u16::from_le_bytes([c[0], c[1]]))
		.collect::<Vec<_>>();

	if units.last() == Some(&0) {
		units.pop();
	}

	match String::from_utf16(&units) {
		Ok(text) => Ok(text),
		Err(_) => match parse_mode {
			ParsingMode::Strict => err!(TextDecode("Given an invalid UTF-16 string")),
			ParsingMode::Relaxed => {
				log::warn!("Discarding an invalid UTF-16 string");
				Ok(String::new())
			},
			_ => {
				log::warn!("Replacing invalid sequences in a UTF-16 string");
				Ok(String::from_utf16_lossy(&units))
			},
		},
	}
}
