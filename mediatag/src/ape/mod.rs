//! APE specific items
//!
//! ## File notes
//!
//! APEv2 tags are read from the very end of a stream, and only version 2.0 tags are supported.
//! Monkey's Audio properties require a file created by version 3.97 or newer, which always
//! carries a descriptor block.
pub(crate) mod constants;
pub(crate) mod header;
mod properties;
mod read;
pub(crate) mod tag;

// Exports

pub use properties::{CompressionLevel, EncodingInfo};
pub use read::read_encoding_info;
pub use tag::ApeTag;
pub use tag::field::{FieldValue, TagField};
