//! Convenient re-exports for common usage.
//!
//! ```
//! use radix_codec::prelude::*;
//!
//! let text = BaseType::Base10.codec().encode(&[0x00, 0xff]);
//! assert_eq!(text, "0255");
//! ```

pub use crate::{
    Alphabet, BASE2, BASE10, BASE16, BASE64, BASE91, BASE256, BaseCodec, BaseType, CodecRegistry,
    DecodeError, RadixCodec, decode, encode,
};
