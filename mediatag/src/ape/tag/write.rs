use super::ApeTag;
use crate::ape::constants::{
	APE_FOOTER_SIZE, APE_PREAMBLE, APE_TAG_VERSION, TAG_HAS_FOOTER, TAG_HAS_HEADER, TAG_IS_HEADER,
};
use crate::error::Result;
use crate::macros::err;

use std::io::{Cursor, Seek, SeekFrom, Write};

use byteorder::{LittleEndian, WriteBytesExt};

/// Serialize `tag` as a complete APEv2 block: header, items, footer
///
/// An empty tag produces no bytes at all.
pub(super) fn create_ape_tag(tag: &ApeTag) -> Result<Vec<u8>> {
	// Unnecessary to write anything if there's no metadata
	if tag.is_empty() {
		return Ok(Vec::new());
	}

	let mut tag_write = Vec::<u8>::new();
	for field in tag {
		tag_write.extend_from_slice(&field.raw_content()?);
	}

	let size = tag_write.len();

	if size as u64 + u64::from(APE_FOOTER_SIZE) > u64::from(u32::MAX) {
		err!(TooMuchData);
	}

	let Ok(item_count) = u32::try_from(tag.len()) else {
		err!(TooMuchData);
	};

	let mut footer = [0_u8; APE_FOOTER_SIZE as usize];
	let mut footer = Cursor::new(&mut footer[..]);

	footer.write_all(APE_PREAMBLE)?;
	footer.write_u32::<LittleEndian>(APE_TAG_VERSION)?;
	// The total size includes the 32 bytes of the footer
	footer.write_u32::<LittleEndian>(size as u32 + APE_FOOTER_SIZE)?;
	footer.write_u32::<LittleEndian>(item_count)?;
	// Bit 29 unset: this is the footer
	footer.write_u32::<LittleEndian>(TAG_HAS_HEADER | TAG_HAS_FOOTER)?;
	// The header/footer must end in 8 bytes of zeros
	footer.write_u64::<LittleEndian>(0)?;

	tag_write.extend_from_slice(footer.get_ref());

	// The header is exactly the same as the footer, except for the flags
	footer.seek(SeekFrom::Current(-12))?;
	footer.write_u32::<LittleEndian>(TAG_HAS_HEADER | TAG_HAS_FOOTER | TAG_IS_HEADER)?;

	let header = footer.into_inner();
	tag_write.splice(0..0, header.iter().copied());

	Ok(tag_write)
}
