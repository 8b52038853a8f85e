//! Fixed-width little-endian integers at absolute buffer offsets
//!
//! These are used for the fixed-offset header views, where reading through a cursor would
//! only obscure the layout. A read past the end of the buffer means the input is malformed.

use crate::error::Result;
use crate::macros::decode_err;

use byteorder::{ByteOrder, LittleEndian};

fn field(buf: &[u8], offset: usize, width: usize) -> Result<&[u8]> {
	match offset.checked_add(width) {
		Some(end) if end <= buf.len() => Ok(&buf[offset..end]),
		_ => decode_err!(@BAIL "Attempted to read a field past the end of its buffer"),
	}
}

pub(crate) fn read_u16_le(buf: &[u8], offset: usize) -> Result<u16> {
	field(buf, offset, 2).map(LittleEndian::read_u16)
}

pub(crate) fn read_u32_le(buf: &[u8], offset: usize) -> Result<u32> {
	field(buf, offset, 4).map(LittleEndian::read_u32)
}

pub(crate) fn read_u64_le(buf: &[u8], offset: usize) -> Result<u64> {
	field(buf, offset, 8).map(LittleEndian::read_u64)
}

pub(crate) fn read_u8(buf: &[u8], offset: usize) -> Result<u8> {
	field(buf, offset, 1).map(|b| b[0])
}

/// The inverse of [`read_u32_le`], used for size prefixes
pub(crate) fn size_bytes(size: u32) -> [u8; 4] {
	let mut out = [0; 4];
	LittleEndian::write_u32(&mut out, size);
	out
}
