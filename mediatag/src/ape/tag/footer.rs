use crate::ape::constants::{APE_FOOTER_SIZE, APE_PREAMBLE, APE_TAG_VERSION};
use crate::error::Result;
use crate::macros::decode_err;

use std::io::Read;

use byteorder::{LittleEndian, ReadBytesExt};

/// The 32 byte block closing an APE tag
///
/// ```text
/// "APETAGEX" (8) | version (4) | tag size (4) | item count (4) | flags (4) | reserved (8)
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct ApeTagFooter {
	/// Size of the items and this footer, excluding the optional header
	pub(crate) size: u32,
	pub(crate) item_count: u32,
	pub(crate) flags: u32,
}

impl ApeTagFooter {
	pub(crate) fn read<R>(reader: &mut R) -> Result<Self>
	where
		R: Read,
	{
		let mut preamble = [0; 8];
		reader.read_exact(&mut preamble)?;

		if &preamble != APE_PREAMBLE {
			decode_err!(@BAIL Ape, "No APE tag found (missing \"APETAGEX\" footer)");
		}

		let version = reader.read_u32::<LittleEndian>()?;
		if version != APE_TAG_VERSION {
			log::debug!("APE: Found an unsupported tag version: {version}");
			decode_err!(@BAIL Ape, "Unsupported APE tag version (only 2.0 is supported)");
		}

		let size = reader.read_u32::<LittleEndian>()?;
		let item_count = reader.read_u32::<LittleEndian>()?;
		let flags = reader.read_u32::<LittleEndian>()?;

		// Reserved (8)
		let mut _reserved = [0; 8];
		reader.read_exact(&mut _reserved)?;

		if size < APE_FOOTER_SIZE {
			// The size includes the footer and all items
			decode_err!(@BAIL Ape, "APE tag has an invalid size (< 32)");
		}

		Ok(Self {
			size,
			item_count,
			flags,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::ApeTagFooter;

	fn footer(version: u32, size: u32, item_count: u32) -> Vec<u8> {
		let mut footer = b"APETAGEX".to_vec();
		footer.extend_from_slice(&version.to_le_bytes());
		footer.extend_from_slice(&size.to_le_bytes());
		footer.extend_from_slice(&item_count.to_le_bytes());
		footer.extend_from_slice(&(1_u32 << 31).to_le_bytes());
		footer.extend_from_slice(&[0; 8]);
		footer
	}

	#[test_log::test]
	fn read_footer() {
		let footer = ApeTagFooter::read(&mut &footer(2000, 64, 2)[..]).unwrap();

		assert_eq!(footer.size, 64);
		assert_eq!(footer.item_count, 2);
		assert_eq!(footer.flags, 1 << 31);
	}

	#[test_log::test]
	fn reject_versions() {
		for version in [0, 1000, 1999, 2001] {
			let err = ApeTagFooter::read(&mut &footer(version, 64, 2)[..]).unwrap_err();
			assert!(err.is_cannot_read());
		}
	}

	#[test_log::test]
	fn reject_small_size() {
		assert!(ApeTagFooter::read(&mut &footer(2000, 31, 0)[..]).is_err());
		assert!(ApeTagFooter::read(&mut &footer(2000, 32, 0)[..]).is_ok());
	}

	#[test_log::test]
	fn reject_bad_preamble() {
		let mut bytes = footer(2000, 64, 2);
		bytes[0] = b'X';

		assert!(ApeTagFooter::read(&mut &bytes[..]).is_err());
	}
}
