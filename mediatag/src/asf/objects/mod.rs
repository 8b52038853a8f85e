//! The header sub-objects mediatag understands

mod content_description;
mod encoding;
mod extended_content_description;
mod file_header;
mod stream;

pub use content_description::ContentDescription;
pub use encoding::EncodingChunk;
pub use extended_content_description::{
	ContentDescriptor, DescriptorValue, ExtendedContentDescription,
};
pub use file_header::FileHeader;
pub use stream::{AudioStreamProperties, StreamChunk, StreamTypeData};
