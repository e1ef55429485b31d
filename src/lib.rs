//! Arbitrary-radix binary-to-text codecs.
//!
//! Six shared codecs ([`BASE2`], [`BASE10`], [`BASE16`], [`BASE64`],
//! [`BASE91`], [`BASE256`]) and any custom [`Alphabet`] use one positional
//! engine: the input is read as a big-endian number and written in base R,
//! with one zero-symbol per leading `0x00` byte so the exact byte length
//! survives the round trip.
//!
//! ```
//! use radix_codec::{BASE16, BaseCodec};
//!
//! assert_eq!(BASE16.encode(&[0x00, 0x01, 0x00]), "0100");
//! assert_eq!(BASE16.decode("0100").unwrap(), vec![0x00, 0x01, 0x00]);
//! assert_eq!(BASE16.encode(&[]), "");
//! ```

mod codec;
mod core;
mod encoders;

pub mod prelude;

pub use codec::{BASE2, BASE10, BASE16, BASE64, BASE91, BASE256, BaseCodec, BaseType, RadixCodec};
pub use crate::core::alphabet::Alphabet;
pub use crate::core::config::{CodecConfig, CodecRegistry, Settings};
pub use encoders::algorithms::{
    AlphabetError, CodecError, CodecNotFoundError, ConfigError, DecodeError, find_closest_codec,
};

/// Encode `data` with an arbitrary alphabet.
pub fn encode(data: &[u8], alphabet: &Alphabet) -> String {
    encoders::radix::encode(data, alphabet)
}

/// Decode `encoded` with an arbitrary alphabet.
pub fn decode(encoded: &str, alphabet: &Alphabet) -> Result<Vec<u8>, DecodeError> {
    encoders::radix::decode(encoded, alphabet)
}
