//! Format identification

use std::ffi::OsStr;

/// The formats mediatag knows how to read
///
/// APEv2 tags are reported as [`FileType::Ape`], since Monkey's Audio is their native container.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
#[allow(missing_docs)]
#[non_exhaustive]
pub enum FileType {
	Ape,
	Asf,
	Wav,
}

impl FileType {
	/// All recognized file extensions
	pub const EXTENSIONS: &'static [&'static str] = &["ape", "asf", "wma", "wmv", "wav", "wave"];

	/// Attempts to extract a [`FileType`] from an extension
	///
	/// # Examples
	///
	/// ```rust
	/// use mediatag::file::FileType;
	///
	/// let extension = "wma";
	/// assert_eq!(FileType::from_ext(extension), Some(FileType::Asf));
	/// ```
	pub fn from_ext<E>(ext: E) -> Option<Self>
	where
		E: AsRef<OsStr>,
	{
		let ext = ext.as_ref().to_str()?.to_ascii_lowercase();

		// Also update `EXTENSIONS` above
		match ext.as_str() {
			"ape" => Some(Self::Ape),
			"asf" | "wma" | "wmv" => Some(Self::Asf),
			"wav" | "wave" => Some(Self::Wav),
			_ => None,
		}
	}

	/// Attempts to determine a [`FileType`] from a buffer holding the start of a file
	///
	/// This only inspects signatures, a match does not guarantee the file is readable.
	///
	/// # Examples
	///
	/// ```rust
	/// use mediatag::file::FileType;
	///
	/// let mut buf = b"MAC ".to_vec();
	/// buf.extend_from_slice(&3990_u32.to_le_bytes());
	/// assert_eq!(FileType::from_buffer(&buf), Some(FileType::Ape));
	/// ```
	pub fn from_buffer(buf: &[u8]) -> Option<Self> {
		use crate::asf::guid::HEADER_OBJECT;

		match buf {
			[b'M', b'A', b'C', b' ', ..] => Some(Self::Ape),
			[b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'A', b'V', b'E', ..] => Some(Self::Wav),
			_ if buf.len() >= 16 && buf[..16] == *HEADER_OBJECT.as_bytes() => Some(Self::Asf),
			_ => None,
		}
	}
}
