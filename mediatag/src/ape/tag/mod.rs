pub(crate) mod field;
mod footer;
pub(crate) mod read;
mod write;

use crate::config::ParseOptions;
use crate::error::Result;
use crate::file::FileType;
use field::TagField;

use std::io::{Read, Seek, Write};

/// An APEv2 tag
///
/// ## Item storage
///
/// Fields are kept in the order they were read or added. Identifiers may repeat, in which case
/// lookups see the first occurrence. Unlike many readers, lookups are case-sensitive: `Title`
/// and `TITLE` are distinct fields.
///
/// # Examples
///
/// ```rust
/// use mediatag::ape::{ApeTag, TagField};
///
/// # fn main() -> mediatag::error::Result<()> {
/// let mut tag = ApeTag::new();
/// tag.add(TagField::text("Title", "Foo title")?);
/// tag.add(TagField::text("Title", "Bar title")?);
///
/// assert_eq!(tag.len(), 2);
/// assert_eq!(tag.text("Title"), Some("Foo title"));
///
/// // `set` leaves a single field behind
/// tag.set(TagField::text("Title", "Baz title")?);
/// assert_eq!(tag.len(), 1);
/// assert_eq!(tag.text("Title"), Some("Baz title"));
/// # Ok(()) }
/// ```
#[derive(Default, Debug, PartialEq, Eq, Clone)]
pub struct ApeTag {
	fields: Vec<TagField>,
}

impl ApeTag {
	/// Create a new empty `ApeTag`
	pub fn new() -> Self {
		Self::default()
	}

	/// Read the APEv2 tag at the end of `reader`
	///
	/// The tag must end exactly at the end of the stream, with no trailing ID3v1 tag.
	///
	/// # Errors
	///
	/// Any failure is reported as a [`FileDecodingError`](crate::error::FileDecodingError),
	/// see [`MediaTagError::is_cannot_read`](crate::error::MediaTagError::is_cannot_read).
	pub fn read_from<R>(reader: &mut R, parse_options: ParseOptions) -> Result<Self>
	where
		R: Read + Seek,
	{
		read::read_ape_tag(reader, parse_options)
			.map_err(|e| e.into_cannot_read(FileType::Ape, "Unable to read the APE tag"))
	}

	/// Get a [`TagField`] by its identifier
	pub fn get(&self, id: &str) -> Option<&TagField> {
		self.fields.iter().find(|f| f.id() == id)
	}

	/// Get a mutable reference to a [`TagField`] by its identifier
	pub fn get_mut(&mut self, id: &str) -> Option<&mut TagField> {
		self.fields.iter_mut().find(|f| f.id() == id)
	}

	/// Get the content of a text field
	///
	/// Returns `None` if the field doesn't exist or is binary.
	pub fn text(&self, id: &str) -> Option<&str> {
		self.get(id).and_then(TagField::as_text)
	}

	/// Append a [`TagField`]
	///
	/// Existing fields with the same identifier are kept, see [`ApeTag::set`] to replace them.
	pub fn add(&mut self, field: TagField) {
		self.fields.push(field);
	}

	/// Insert a [`TagField`], replacing every field with the same identifier
	///
	/// The new field takes the position of the first one replaced.
	pub fn set(&mut self, field: TagField) {
		let Some(pos) = self.fields.iter().position(|f| f.id() == field.id()) else {
			self.fields.push(field);
			return;
		};

		let mut index = 0;
		self.fields.retain(|f| {
			let keep = index <= pos || f.id() != field.id();
			index += 1;
			keep
		});

		self.fields[pos] = field;
	}

	/// Remove the first [`TagField`] with the identifier `id`
	pub fn remove(&mut self, id: &str) -> Option<TagField> {
		let pos = self.fields.iter().position(|f| f.id() == id)?;
		Some(self.fields.remove(pos))
	}

	/// Remove all fields
	pub fn clear(&mut self) {
		self.fields.clear();
	}

	/// The number of fields
	pub fn len(&self) -> usize {
		self.fields.len()
	}

	/// Whether the tag has no fields
	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// An iterator over the fields, in order
	pub fn iter(&self) -> impl Iterator<Item = &TagField> {
		self.fields.iter()
	}

	/// Write the complete tag block to `writer`
	///
	/// The block consists of a header, the fields, and a footer. Nothing is written for an
	/// empty tag.
	///
	/// # Errors
	///
	/// * The tag is too large to describe
	/// * `writer` fails
	pub fn dump_to<W: Write>(&self, writer: &mut W) -> Result<()> {
		let bytes = write::create_ape_tag(self)?;
		writer.write_all(&bytes)?;

		Ok(())
	}

	/// The complete tag block as bytes
	///
	/// # Errors
	///
	/// See [`ApeTag::dump_to`]
	pub fn as_bytes(&self) -> Result<Vec<u8>> {
		write::create_ape_tag(self)
	}
}

impl IntoIterator for ApeTag {
	type Item = TagField;
	type IntoIter = std::vec::IntoIter<TagField>;

	fn into_iter(self) -> Self::IntoIter {
		self.fields.into_iter()
	}
}

impl<'a> IntoIterator for &'a ApeTag {
	type Item = &'a TagField;
	type IntoIter = std::slice::Iter<'a, TagField>;

	fn into_iter(self) -> Self::IntoIter {
		self.fields.iter()
	}
}
