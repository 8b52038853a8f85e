//! RIFF/WAVE structures
//!
//! Only the blocks embedded in other containers are handled, there is no standalone WAV reader.

pub mod wav;
