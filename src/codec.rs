//! The `BaseCodec` contract and the six built-in codecs.
//!
//! ```
//! use radix_codec::{BASE91, BaseCodec};
//!
//! let id = [0x00, 0x00, 0x01, 0x8f, 0x3a, 0x2b];
//! let text = BASE91.encode(&id);
//! assert_eq!(BASE91.decode(&text).unwrap(), id);
//! ```

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::core::alphabet::Alphabet;
use crate::core::builtin;
use crate::encoders::algorithms::errors::{CodecError, CodecNotFoundError, DecodeError};
use crate::encoders::radix;

/// Binary-to-text conversion with an exact round trip.
///
/// For every byte slice `b`, `decode(&encode(b))` returns `b` unchanged,
/// leading zero bytes and length included.
pub trait BaseCodec: Send + Sync {
    /// Encode bytes as text. Never fails.
    fn encode(&self, bytes: &[u8]) -> String;

    /// Decode text back to bytes.
    ///
    /// # Errors
    ///
    /// [`DecodeError::InvalidSymbol`] when the text contains a symbol outside
    /// the codec's alphabet.
    fn decode(&self, text: &str) -> Result<Vec<u8>, DecodeError>;

    /// Read a whole file and encode its contents.
    fn encode_file(&self, path: &Path) -> Result<String, CodecError> {
        let bytes = fs::read(path)?;
        Ok(self.encode(&bytes))
    }

    /// Decode `text` and write the bytes to `path`, replacing any existing
    /// file. Nothing is written if decoding fails.
    fn decode_to_file(&self, path: &Path, text: &str) -> Result<(), CodecError> {
        let bytes = self.decode(text)?;
        fs::write(path, bytes)?;
        Ok(())
    }
}

/// A positional codec over one alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadixCodec {
    name: String,
    alphabet: Alphabet,
}

impl RadixCodec {
    pub fn new(name: impl Into<String>, alphabet: Alphabet) -> Self {
        RadixCodec {
            name: name.into(),
            alphabet,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn radix(&self) -> usize {
        self.alphabet.base()
    }
}

impl BaseCodec for RadixCodec {
    fn encode(&self, bytes: &[u8]) -> String {
        radix::encode(bytes, &self.alphabet)
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>, DecodeError> {
        radix::decode(text, &self.alphabet)
    }
}

/// Binary, digits `01`.
pub static BASE2: LazyLock<RadixCodec> = LazyLock::new(|| BaseType::Base2.build());
/// Decimal, digits `0-9`.
pub static BASE10: LazyLock<RadixCodec> = LazyLock::new(|| BaseType::Base10.build());
/// Lowercase hexadecimal; decoding accepts either case.
pub static BASE16: LazyLock<RadixCodec> = LazyLock::new(|| BaseType::Base16.build());
/// RFC 4648 base64 symbols, positional, unpadded.
pub static BASE64: LazyLock<RadixCodec> = LazyLock::new(|| BaseType::Base64.build());
/// basE91 symbols, positional.
pub static BASE91: LazyLock<RadixCodec> = LazyLock::new(|| BaseType::Base91.build());
/// One `char` per byte (U+0000..U+00FF).
pub static BASE256: LazyLock<RadixCodec> = LazyLock::new(|| BaseType::Base256.build());

/// Selector for the built-in codecs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseType {
    Base2,
    Base10,
    Base16,
    Base64,
    Base91,
    Base256,
}

impl BaseType {
    pub const ALL: [BaseType; 6] = [
        BaseType::Base2,
        BaseType::Base10,
        BaseType::Base16,
        BaseType::Base64,
        BaseType::Base91,
        BaseType::Base256,
    ];

    pub fn radix(self) -> usize {
        match self {
            BaseType::Base2 => 2,
            BaseType::Base10 => 10,
            BaseType::Base16 => 16,
            BaseType::Base64 => 64,
            BaseType::Base91 => 91,
            BaseType::Base256 => 256,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BaseType::Base2 => "base2",
            BaseType::Base10 => "base10",
            BaseType::Base16 => "base16",
            BaseType::Base64 => "base64",
            BaseType::Base91 => "base91",
            BaseType::Base256 => "base256",
        }
    }

    /// The shared codec instance for this radix.
    pub fn codec(self) -> &'static RadixCodec {
        match self {
            BaseType::Base2 => &*BASE2,
            BaseType::Base10 => &*BASE10,
            BaseType::Base16 => &*BASE16,
            BaseType::Base64 => &*BASE64,
            BaseType::Base91 => &*BASE91,
            BaseType::Base256 => &*BASE256,
        }
    }

    fn build(self) -> RadixCodec {
        tracing::trace!(codec = self.name(), "building built-in codec");
        let alphabet = match self {
            BaseType::Base2 => Alphabet::from_table(builtin::BASE2, false),
            BaseType::Base10 => Alphabet::from_table(builtin::BASE10, false),
            BaseType::Base16 => Alphabet::from_table(builtin::BASE16, true),
            BaseType::Base64 => Alphabet::from_table(builtin::BASE64, false),
            BaseType::Base91 => Alphabet::from_table(builtin::BASE91, false),
            BaseType::Base256 => {
                let table: String = (builtin::BASE256_START..builtin::BASE256_START + 256)
                    .filter_map(char::from_u32)
                    .collect();
                Alphabet::from_table(&table, false)
            }
        };
        RadixCodec::new(self.name(), alphabet)
    }
}

impl fmt::Display for BaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BaseType {
    type Err = CodecNotFoundError;

    /// Accepts `base16`, `16`, and the aliases `bin`, `dec`, `hex`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let digits = lowered.strip_prefix("base").unwrap_or(&lowered);
        match digits {
            "2" | "bin" => Ok(BaseType::Base2),
            "10" | "dec" => Ok(BaseType::Base10),
            "16" | "hex" => Ok(BaseType::Base16),
            "64" => Ok(BaseType::Base64),
            "91" => Ok(BaseType::Base91),
            "256" => Ok(BaseType::Base256),
            _ => {
                let names: Vec<String> =
                    BaseType::ALL.iter().map(|t| t.name().to_string()).collect();
                let suggestion = crate::find_closest_codec(&lowered, &names);
                Err(CodecNotFoundError::new(s, suggestion))
            }
        }
    }
}
