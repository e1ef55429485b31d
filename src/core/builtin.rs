//! Symbol tables for the built-in radices.
//!
//! Digit value `i` is the `i`-th character of each table.

pub const BASE2: &str = "01";

pub const BASE10: &str = "0123456789";

/// Lowercase is canonical; decoding also accepts uppercase.
pub const BASE16: &str = "0123456789abcdef";

/// RFC 4648 standard symbols. There is no padding character: the
/// leading-zero prefix already pins the byte length.
pub const BASE64: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// The basE91 table. Contains no `-`, `\` or `'`.
pub const BASE91: &str = concat!(
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "abcdefghijklmnopqrstuvwxyz",
    "0123456789",
    "!#$%&()*+,./:;<=>?@[]^_`{|}~\"",
);

/// Radix 256 uses code points U+0000..U+00FF, one per byte value.
pub const BASE256_START: u32 = 0x00;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::alphabet::Alphabet;

    #[test]
    fn test_table_sizes() {
        assert_eq!(BASE2.chars().count(), 2);
        assert_eq!(BASE10.chars().count(), 10);
        assert_eq!(BASE16.chars().count(), 16);
        assert_eq!(BASE64.chars().count(), 64);
        assert_eq!(BASE91.chars().count(), 91);
    }

    #[test]
    fn test_tables_are_valid_alphabets() {
        for table in [BASE2, BASE10, BASE64, BASE91] {
            assert!(table.parse::<Alphabet>().is_ok(), "invalid table {table}");
        }
        assert!(Alphabet::new_case_insensitive(BASE16.chars().collect()).is_ok());
        assert!(Alphabet::from_range(BASE256_START, 256).is_ok());
    }

    #[test]
    fn test_printable_ascii_only() {
        for table in [BASE2, BASE10, BASE16, BASE64, BASE91] {
            assert!(table.bytes().all(|b| b.is_ascii_graphic()));
        }
    }

    #[test]
    fn test_base91_avoids_delimiters() {
        for c in ['-', '\\', '\'', ' '] {
            assert!(!BASE91.contains(c), "base91 contains {c:?}");
        }
    }
}
