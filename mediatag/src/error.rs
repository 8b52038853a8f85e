//! Contains the errors that can arise within mediatag
//!
//! The primary error is [`MediaTagError`]. The type of error is determined by [`ErrorKind`],
//! which can be extended at any time.
//!
//! A reader that rejects its input always reports [`ErrorKind::FileDecoding`], see
//! [`MediaTagError::is_cannot_read`].

use crate::file::FileType;
pub use crate::util::text::TextEncodingError;

use std::collections::TryReserveError;
use std::fmt::{Debug, Display, Formatter};

/// Alias for `Result<T, MediaTagError>`
pub type Result<T> = std::result::Result<T, MediaTagError>;

/// The types of errors that can occur
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
	// File data related errors
	/// Attempting to read/write an abnormally large amount of data
	TooMuchData,
	/// Expected the data to be a different size than provided
	///
	/// This occurs when the size of an item is written as one value, but that size is either too
	/// big or small to be valid within the bounds of that item.
	SizeMismatch,
	/// Errors that occur while decoding a file
	FileDecoding(FileDecodingError),

	// Tag related errors
	/// Arises when a tag field is created with an unusable identifier (empty or containing a NUL)
	InvalidFieldId,
	/// Errors that arise while decoding text
	TextDecode(&'static str),
	/// Errors that arise while encoding text
	TextEncode(TextEncodingError),

	// Conversions for external errors
	/// Unable to convert bytes to a String
	StringFromUtf8(std::string::FromUtf8Error),
	/// Represents all cases of [`std::io::Error`].
	Io(std::io::Error),
	/// Failure to allocate enough memory
	Alloc(TryReserveError),
}

/// An error that arises while decoding a file
///
/// The wrapped error, if any, is the lower level failure (usually I/O) that caused the
/// reader to give up. It is exposed through [`std::error::Error::source`].
pub struct FileDecodingError {
	format: Option<FileType>,
	description: &'static str,
	source: Option<Box<MediaTagError>>,
}

impl FileDecodingError {
	/// Create a `FileDecodingError` from a [`FileType`] and description
	#[must_use]
	pub const fn new(format: FileType, description: &'static str) -> Self {
		Self {
			format: Some(format),
			description,
			source: None,
		}
	}

	/// Create a `FileDecodingError` without binding it to a [`FileType`]
	pub fn from_description(description: &'static str) -> Self {
		Self {
			format: None,
			description,
			source: None,
		}
	}

	pub(crate) fn with_source(mut self, source: MediaTagError) -> Self {
		self.source = Some(Box::new(source));
		self
	}

	/// Returns the associated [`FileType`], if one exists
	pub fn format(&self) -> Option<FileType> {
		self.format
	}

	/// Returns the error description
	pub fn description(&self) -> &str {
		self.description
	}

	/// Returns the lower level error that caused this one, if any
	pub fn cause(&self) -> Option<&MediaTagError> {
		self.source.as_deref()
	}
}

impl Debug for FileDecodingError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		if let Some(format) = self.format {
			write!(f, "{:?}: {:?}", format, self.description)?;
		} else {
			write!(f, "{:?}", self.description)?;
		}

		if let Some(source) = &self.source {
			write!(f, " (caused by {source:?})")?;
		}

		Ok(())
	}
}

impl Display for FileDecodingError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		if let Some(format) = self.format {
			write!(f, "{:?}: {}", format, self.description)?;
		} else {
			write!(f, "{}", self.description)?;
		}

		if let Some(source) = &self.source {
			write!(f, ": {source}")?;
		}

		Ok(())
	}
}

/// Errors that could occur within mediatag
pub struct MediaTagError {
	pub(crate) kind: ErrorKind,
}

impl MediaTagError {
	/// Create a `MediaTagError` from an [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use mediatag::error::{ErrorKind, MediaTagError};
	///
	/// let too_much_data = MediaTagError::new(ErrorKind::TooMuchData);
	/// ```
	#[must_use]
	pub const fn new(kind: ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`ErrorKind`]
	pub fn kind(&self) -> &ErrorKind {
		&self.kind
	}

	/// Whether the input was rejected by a reader
	///
	/// This is the case for any error returned from a top-level reader, such as a missing
	/// `APETAGEX` footer, an unsupported version, or a truncated stream.
	///
	/// # Examples
	///
	/// ```rust
	/// use mediatag::ape::ApeTag;
	/// use mediatag::config::ParseOptions;
	/// use std::io::Cursor;
	///
	/// let mut reader = Cursor::new(vec![0; 64]);
	/// let err = ApeTag::read_from(&mut reader, ParseOptions::new()).unwrap_err();
	/// assert!(err.is_cannot_read());
	/// ```
	pub fn is_cannot_read(&self) -> bool {
		matches!(self.kind, ErrorKind::FileDecoding(_))
	}

	/// Converts any error into a [`FileDecodingError`] for `format`
	///
	/// Decoding errors keep their description, and are bound to `format` if they have no
	/// format yet. Anything else is wrapped as the cause.
	pub(crate) fn into_cannot_read(mut self, format: FileType, description: &'static str) -> Self {
		if let ErrorKind::FileDecoding(ref mut decoding) = self.kind {
			if decoding.format.is_none() {
				decoding.format = Some(format);
			}

			return self;
		}

		FileDecodingError::new(format, description)
			.with_source(self)
			.into()
	}
}

impl std::error::Error for MediaTagError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self.kind {
			ErrorKind::FileDecoding(ref err) => {
				let source: &(dyn std::error::Error + 'static) = err.source.as_deref()?;
				Some(source)
			},
			ErrorKind::Io(ref err) => Some(err),
			ErrorKind::StringFromUtf8(ref err) => Some(err),
			_ => None,
		}
	}
}

impl Debug for MediaTagError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.kind)
	}
}

impl From<FileDecodingError> for MediaTagError {
	fn from(input: FileDecodingError) -> Self {
		Self {
			kind: ErrorKind::FileDecoding(input),
		}
	}
}

impl From<TextEncodingError> for MediaTagError {
	fn from(input: TextEncodingError) -> Self {
		Self {
			kind: ErrorKind::TextEncode(input),
		}
	}
}

impl From<std::io::Error> for MediaTagError {
	fn from(input: std::io::Error) -> Self {
		Self {
			kind: ErrorKind::Io(input),
		}
	}
}

impl From<std::string::FromUtf8Error> for MediaTagError {
	fn from(input: std::string::FromUtf8Error) -> Self {
		Self {
			kind: ErrorKind::StringFromUtf8(input),
		}
	}
}

impl From<TryReserveError> for MediaTagError {
	fn from(input: TryReserveError) -> Self {
		Self {
			kind: ErrorKind::Alloc(input),
		}
	}
}

impl Display for MediaTagError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.kind {
			// Conversions
			ErrorKind::StringFromUtf8(ref err) => write!(f, "{err}"),
			ErrorKind::Io(ref err) => write!(f, "{err}"),
			ErrorKind::Alloc(ref err) => write!(f, "{err}"),

			ErrorKind::InvalidFieldId => write!(
				f,
				"Tag field identifiers must be non-empty and cannot contain NUL"
			),
			ErrorKind::TextDecode(message) => write!(f, "Text decoding: {message}"),
			ErrorKind::TextEncode(ref message) => write!(f, "Text encoding: {message}"),

			// Files
			ErrorKind::TooMuchData => write!(
				f,
				"Attempted to read/write an abnormally large amount of data"
			),
			ErrorKind::SizeMismatch => write!(
				f,
				"Encountered an invalid item size, either too big or too small to be valid"
			),
			ErrorKind::FileDecoding(ref file_decode_err) => write!(f, "{file_decode_err}"),
		}
	}
}
