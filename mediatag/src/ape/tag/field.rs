use crate::ape::constants::ITEM_TYPE_BINARY;
use crate::error::Result;
use crate::macros::err;
use crate::util::bytes::size_bytes;
use crate::util::text::{TextEncoding, latin1_encode};

use std::fmt::{Display, Formatter};

use byteorder::{LittleEndian, WriteBytesExt};

/// The content of a [`TagField`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
	/// A UTF-8 string
	Text(String),
	/// Arbitrary bytes, such as cover art
	Binary(Vec<u8>),
}

/// A single APE tag item
///
/// The identifier is a case-sensitive, Latin-1 encodable string. Whether a field is binary is
/// decided when it is created, and can never change afterwards.
///
/// # Examples
///
/// ```rust
/// use mediatag::ape::TagField;
///
/// # fn main() -> mediatag::error::Result<()> {
/// let title = TagField::text("Title", "Foo title")?;
/// assert!(!title.is_binary());
/// assert_eq!(title.as_text(), Some("Foo title"));
/// # Ok(()) }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagField {
	id: String,
	value: FieldValue,
}

impl TagField {
	/// Create a new `TagField`
	///
	/// # Errors
	///
	/// * `id` is empty or contains a NUL
	/// * `id` contains characters that cannot be represented in Latin-1
	pub fn new(id: impl Into<String>, value: FieldValue) -> Result<Self> {
		let id = id.into();

		if id.is_empty() || id.contains('\0') {
			err!(InvalidFieldId);
		}

		latin1_encode(&id)?;

		Ok(Self { id, value })
	}

	/// Create a new text field
	///
	/// # Errors
	///
	/// See [`TagField::new`]
	pub fn text(id: impl Into<String>, content: impl Into<String>) -> Result<Self> {
		Self::new(id, FieldValue::Text(content.into()))
	}

	/// Create a new binary field
	///
	/// # Errors
	///
	/// See [`TagField::new`]
	pub fn binary(id: impl Into<String>, content: impl Into<Vec<u8>>) -> Result<Self> {
		Self::new(id, FieldValue::Binary(content.into()))
	}

	/// The field's identifier
	pub fn id(&self) -> &str {
		&self.id
	}

	/// The field's content
	pub fn value(&self) -> &FieldValue {
		&self.value
	}

	/// Whether the field holds binary content
	pub fn is_binary(&self) -> bool {
		matches!(self.value, FieldValue::Binary(_))
	}

	/// Whether the field has no content
	pub fn is_empty(&self) -> bool {
		match &self.value {
			FieldValue::Text(text) => text.is_empty(),
			FieldValue::Binary(bytes) => bytes.is_empty(),
		}
	}

	/// The text content, if this is a text field
	pub fn as_text(&self) -> Option<&str> {
		match &self.value {
			FieldValue::Text(text) => Some(text),
			FieldValue::Binary(_) => None,
		}
	}

	/// The binary content, if this is a binary field
	pub fn as_binary(&self) -> Option<&[u8]> {
		match &self.value {
			FieldValue::Binary(bytes) => Some(bytes),
			FieldValue::Text(_) => None,
		}
	}

	/// Copy the content of `other` into this field
	///
	/// Content is only copied between fields of the same kind, the identifier is left untouched.
	/// Returns `false` if the kinds differ, in which case nothing happens.
	///
	/// # Examples
	///
	/// ```rust
	/// use mediatag::ape::TagField;
	///
	/// # fn main() -> mediatag::error::Result<()> {
	/// let mut title = TagField::text("Title", "Foo title")?;
	///
	/// assert!(title.copy_content(&TagField::text("Album", "Bar album")?));
	/// assert_eq!(title.as_text(), Some("Bar album"));
	///
	/// assert!(!title.copy_content(&TagField::binary("Cover Art (Front)", vec![0xFF])?));
	/// assert_eq!(title.as_text(), Some("Bar album"));
	/// # Ok(()) }
	/// ```
	pub fn copy_content(&mut self, other: &TagField) -> bool {
		match (&mut self.value, &other.value) {
			(FieldValue::Text(this), FieldValue::Text(other)) => this.clone_from(other),
			(FieldValue::Binary(this), FieldValue::Binary(other)) => this.clone_from(other),
			_ => return false,
		}

		true
	}

	/// The encoding used for text content, always [`TextEncoding::UTF8`]
	pub fn encoding(&self) -> TextEncoding {
		TextEncoding::UTF8
	}

	/// APE text is always UTF-8, so this does nothing
	pub fn set_encoding(&mut self, encoding: TextEncoding) {
		if encoding != TextEncoding::UTF8 {
			log::debug!("APE: Ignoring request to encode `{}` as {encoding:?}", self.id);
		}
	}

	/// The on-disk layout of this field
	///
	/// ```text
	/// [content length: u32 LE][flags: u32 LE][id: Latin-1][0x00][content]
	/// ```
	///
	/// # Errors
	///
	/// The content is larger than [`u32::MAX`] bytes
	///
	/// # Examples
	///
	/// ```rust
	/// use mediatag::ape::TagField;
	///
	/// # fn main() -> mediatag::error::Result<()> {
	/// let field = TagField::binary("Data", vec![1, 2])?;
	/// assert_eq!(
	/// 	field.raw_content()?,
	/// 	[2, 0, 0, 0, 2, 0, 0, 0, b'D', b'a', b't', b'a', 0, 1, 2]
	/// );
	/// # Ok(()) }
	/// ```
	pub fn raw_content(&self) -> Result<Vec<u8>> {
		let (flags, content) = match &self.value {
			FieldValue::Text(text) => (0, text.as_bytes()),
			FieldValue::Binary(bytes) => (ITEM_TYPE_BINARY << 1, bytes.as_slice()),
		};

		let Ok(content_len) = u32::try_from(content.len()) else {
			err!(TooMuchData);
		};

		// Verified in `TagField::new`
		let id = latin1_encode(&self.id)?;

		let mut raw = Vec::with_capacity(8 + id.len() + 1 + content.len());
		raw.extend_from_slice(&size_bytes(content_len));
		raw.write_u32::<LittleEndian>(flags)?;
		raw.extend_from_slice(&id);
		raw.push(0);
		raw.extend_from_slice(content);

		Ok(raw)
	}
}

impl Display for TagField {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match &self.value {
			FieldValue::Text(text) => f.write_str(text),
			FieldValue::Binary(bytes) => write!(f, "<{} bytes of binary data>", bytes.len()),
		}
	}
}
