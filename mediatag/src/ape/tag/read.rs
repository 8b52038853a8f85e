use super::ApeTag;
use super::field::{FieldValue, TagField};
use super::footer::ApeTagFooter;
use crate::ape::constants::{APE_FOOTER_SIZE, ITEM_TYPE_BINARY, ITEM_TYPE_MASK};
use crate::config::ParseOptions;
use crate::error::Result;
use crate::macros::{decode_err, parse_mode_choice, try_vec};
use crate::util::text::latin1_decode;

use std::io::{Read, Seek, SeekFrom};

use byteorder::{LittleEndian, ReadBytesExt};

/// Read the APEv2 tag at the very end of `reader`
pub(crate) fn read_ape_tag<R>(reader: &mut R, parse_options: ParseOptions) -> Result<ApeTag>
where
	R: Read + Seek,
{
	let stream_len = reader.seek(SeekFrom::End(0))?;
	if stream_len < u64::from(APE_FOOTER_SIZE) {
		decode_err!(@BAIL Ape, "No APE tag found (stream is too short)");
	}

	reader.seek(SeekFrom::Start(stream_len - u64::from(APE_FOOTER_SIZE)))?;
	let footer = ApeTagFooter::read(reader)?;

	if u64::from(footer.size) > stream_len {
		decode_err!(@BAIL Ape, "APE tag has an invalid size (> stream length)");
	}

	// The size covers every item and the footer, so this lands on the first item
	reader.seek(SeekFrom::Start(stream_len - u64::from(footer.size)))?;

	// Every item has to fit between the first item and the footer
	let mut remaining_size = footer.size - APE_FOOTER_SIZE;

	let mut tag = ApeTag::new();
	for _ in 0..footer.item_count {
		let Some(field) = read_item(reader, &mut remaining_size, parse_options)? else {
			continue;
		};

		if tag.get(field.id()).is_some() {
			log::debug!("APE: Found a duplicate item `{}`", field.id());
		}

		tag.add(field);
	}

	Ok(tag)
}

fn read_item<R>(
	reader: &mut R,
	remaining_size: &mut u32,
	parse_options: ParseOptions,
) -> Result<Option<TagField>>
where
	R: Read,
{
	let parse_mode = parse_options.parsing_mode;

	// Value size (4) and flags (4)
	let Some(remaining) = remaining_size.checked_sub(8) else {
		decode_err!(@BAIL Ape, "APE tag declares more items than it holds");
	};
	*remaining_size = remaining;

	let value_size = reader.read_u32::<LittleEndian>()?;
	if value_size > parse_options.max_item_size {
		log::debug!("APE: Encountered an item with a size of {value_size} bytes");
		decode_err!(@BAIL Ape, "APE tag item is too large, the tag is likely corrupt");
	}

	// Only the item type is of interest, the remaining flag bits are reserved
	let flags = reader.read_u32::<LittleEndian>()?;
	let is_binary = (flags & ITEM_TYPE_MASK) >> 1 == ITEM_TYPE_BINARY;

	// The key runs up to the first NUL
	let mut key = Vec::new();
	let mut key_char = reader.read_u8()?;

	while key_char != 0 {
		key.push(key_char);
		key_char = reader.read_u8()?;
	}

	let Some(remaining) = u32::try_from(key.len() + 1)
		.ok()
		.and_then(|key_len| remaining_size.checked_sub(key_len))
	else {
		decode_err!(@BAIL Ape, "APE tag item key extends past the end of the tag");
	};
	*remaining_size = remaining;

	if value_size > *remaining_size {
		log::debug!(
			"APE: Item claims {value_size} bytes, only {} remain in the tag",
			*remaining_size
		);
		decode_err!(@BAIL Ape, "APE tag item value extends past the end of the tag");
	}
	*remaining_size -= value_size;

	let key = latin1_decode(&key);

	let mut value = try_vec![0; value_size as usize];
	reader.read_exact(&mut value)?;

	if key.is_empty() {
		parse_mode_choice!(
			parse_mode,
			STRICT: decode_err!(@BAIL Ape, "APE tag item has an empty key"),
			DEFAULT: {
				log::warn!("APE: Skipping an item with an empty key");
				return Ok(None);
			}
		);
	}

	let value = if is_binary {
		FieldValue::Binary(value)
	} else {
		match String::from_utf8(value) {
			Ok(text) => FieldValue::Text(text),
			Err(e) => parse_mode_choice!(
				parse_mode,
				STRICT: return Err(e.into()),
				DEFAULT: {
					log::warn!("APE: Item `{key}` is not valid UTF-8, replacing invalid sequences");
					FieldValue::Text(String::from_utf8_lossy(e.as_bytes()).into_owned())
				}
			),
		}
	};

	TagField::new(key, value).map(Some)
}
