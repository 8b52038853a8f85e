//! Read APEv2 tags, Monkey's Audio headers, and ASF header objects.
//!
//! All readers work on any seekable stream, and never take ownership of it.
//!
//! # Examples
//!
//! ## Reading and writing an APEv2 tag
//!
//! ```rust
//! # fn main() -> mediatag::error::Result<()> {
//! use mediatag::ape::{ApeTag, TagField};
//! use mediatag::config::ParseOptions;
//! use std::io::Cursor;
//!
//! let mut tag = ApeTag::new();
//! tag.add(TagField::text("Title", "Foo title")?);
//! tag.add(TagField::binary("Cover Art (Front)", vec![0xFF, 0xD8, 0xFF])?);
//!
//! // Tags live at the very end of a file
//! let mut file = b"MAC audio data".to_vec();
//! tag.dump_to(&mut file)?;
//!
//! let read_back = ApeTag::read_from(&mut Cursor::new(file), ParseOptions::new())?;
//! assert_eq!(read_back.text("Title"), Some("Foo title"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Probing for ASF
//!
//! ```rust,no_run
//! # fn main() -> mediatag::error::Result<()> {
//! use mediatag::asf::AsfHeader;
//! use mediatag::config::ParseOptions;
//! use std::fs::File;
//!
//! let mut file = File::open("song.wma")?;
//!
//! // `None` means this isn't an ASF file, and another reader can be tried
//! if let Some(header) = AsfHeader::read_from(&mut file, ParseOptions::new())? {
//! 	if let Some(description) = header.content_description() {
//! 		println!("Title: {:?}", description.title());
//! 	}
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Parsing modes
//!
//! Every reader takes [`ParseOptions`](config::ParseOptions). The default
//! [`ParsingMode::BestAttempt`](config::ParsingMode::BestAttempt) recovers from minor
//! inconsistencies with a logged warning, while [`ParsingMode::Strict`](config::ParsingMode::Strict)
//! turns them into errors.
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod config;
pub mod error;
pub mod file;
pub(crate) mod macros;
mod util;

pub mod ape;
pub mod asf;
pub mod iff;

pub use util::text::TextEncoding;
