// https://wiki.hydrogenaud.io/index.php?title=APE_Tags_Header
pub(crate) const APE_PREAMBLE: &[u8; 8] = b"APETAGEX";
pub(crate) const APE_TAG_VERSION: u32 = 2000;
pub(crate) const APE_FOOTER_SIZE: u32 = 32;

// Item flags, bits 1-2 hold the item type
pub(crate) const ITEM_TYPE_MASK: u32 = 0b110;
pub(crate) const ITEM_TYPE_BINARY: u32 = 1;

// Tag flags
pub(crate) const TAG_HAS_HEADER: u32 = 1 << 31;
pub(crate) const TAG_HAS_FOOTER: u32 = 1 << 30;
pub(crate) const TAG_IS_HEADER: u32 = 1 << 29;

pub(crate) const MAC_MAGIC: &[u8; 4] = b"MAC ";
// Anything before 3.97 uses the old header layout, which has no descriptor
pub(crate) const MAC_MIN_VERSION: u32 = 3970;
