pub mod bitpacked;
pub mod errors;
pub mod math;
pub mod radix;

// Re-export error types for public API
pub use errors::{
    AlphabetError, CodecError, CodecNotFoundError, ConfigError, DecodeError, find_closest_codec,
};
