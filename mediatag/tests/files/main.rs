#![allow(missing_docs)]

mod ape;
mod asf;
mod mac;
pub(crate) mod util;
