//! Legacy input formats
//!
//! Each decoder turns a complete file image into an [`Image`](crate::Image)
//! over the palette it is given.

mod printfox;
mod raw;
mod raw_charset;

pub use printfox::{decode_printfox, unpack_printfox};
pub use raw::decode_raw;
pub use raw_charset::{decode_raw_charset, CHARSET_COLUMNS, CHARSET_MAX_ROWS};
