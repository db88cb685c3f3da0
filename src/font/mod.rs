//! The tinyfont binary format.
//!
//! All multi-byte integers are big-endian. Layout:
//!
//! ```text
//! magic "tinyfont"                          8 bytes
//! copyright length                          2 bytes
//! copyright bytes                           variable
//! em (ascent + descent)                     2 bytes
//! index byte length (= 4 * glyph count)     2 bytes
//! repeated: (code point, offset)            4 bytes each
//! repeated glyph record:
//!     (code point, width, command length)   6 bytes
//!     command bytes                         variable
//! ```
//!
//! Index offsets are relative to the start of the glyph-record region.
//! Command bytes encode each segment as two (`m`/`l`) or six (`c`) 32-bit
//! big-endian floats followed by a 4-byte tag: the segment letter's ASCII
//! value stored as a big-endian u32.

pub use encode::FontWriter;
pub use font_file::FontFile;
pub use glyph::Glyph;

mod encode;
mod font_file;
mod glyph;
mod index;
pub(crate) mod parse;

pub(crate) const TAG_MOVE_TO: u32 = 'm' as u32;
pub(crate) const TAG_LINE_TO: u32 = 'l' as u32;
pub(crate) const TAG_CURVE_TO: u32 = 'c' as u32;

/// Byte length of one glyph record header: code point, width, command length.
pub(crate) const GLYPH_HEADER_LEN: usize = 6;

pub(crate) const MAGIC: &[u8; 8] = b"tinyfont";
