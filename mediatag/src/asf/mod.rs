//! ASF specific items
//!
//! ## File notes
//!
//! Only the header object is read. It is a tree of GUID-keyed, length-prefixed objects, of which
//! the file properties, stream properties, codec list, and both content description objects are
//! parsed. Any other object is kept by location only, so newer writers never cause a failure.
pub(crate) mod chunk;
pub mod guid;
mod header;
pub mod objects;
mod read;
mod util;

// Exports

pub use chunk::{CHUNK_HEADER_SIZE, Chunk};
pub use guid::Guid;
pub use header::AsfHeader;
