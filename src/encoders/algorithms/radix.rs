use crate::core::alphabet::Alphabet;

use super::{bitpacked, math};

use super::errors::DecodeError;

/// Encode `data` as positional base-R text.
///
/// Each leading `0x00` byte becomes one zero-symbol; the rest of the input is
/// written as the canonical digits of its big-endian magnitude. Empty input
/// gives an empty string.
pub fn encode(data: &[u8], alphabet: &Alphabet) -> String {
    if data.is_empty() {
        return String::new();
    }

    let leading_zeros = data.iter().take_while(|&&b| b == 0).count();
    let digits = magnitude_to_digits(&data[leading_zeros..], alphabet);

    // Symbols may be multi-byte in UTF-8, so this is only a lower bound
    let mut result = String::with_capacity(leading_zeros + digits.len());
    result.extend(std::iter::repeat_n(alphabet.zero_symbol(), leading_zeros));
    result.extend(digits.into_iter().map(|d| alphabet.symbol_at(d)));
    result
}

/// Decode text produced by [`encode`] with the same alphabet.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidSymbol`] for the first symbol that is not in
/// the alphabet.
pub fn decode(encoded: &str, alphabet: &Alphabet) -> Result<Vec<u8>, DecodeError> {
    if encoded.is_empty() {
        return Ok(Vec::new());
    }

    let mut leading_zeros = 0;
    let mut in_prefix = true;
    let mut digits = Vec::with_capacity(encoded.len());

    for (position, c) in encoded.chars().enumerate() {
        let digit = alphabet.decode_char(c).ok_or_else(|| {
            DecodeError::invalid_symbol(c, position, encoded, &alphabet.describe())
        })?;

        if in_prefix && digit == 0 {
            leading_zeros += 1;
            continue;
        }
        in_prefix = false;
        digits.push(digit as u32);
    }

    let magnitude = digits_to_magnitude(&digits, alphabet);

    let mut result = Vec::with_capacity(leading_zeros + magnitude.len());
    result.resize(leading_zeros, 0u8);
    result.extend_from_slice(&magnitude);
    Ok(result)
}

fn magnitude_to_digits(magnitude: &[u8], alphabet: &Alphabet) -> Vec<u32> {
    if magnitude.is_empty() {
        return Vec::new();
    }
    match alphabet.bits_per_digit() {
        Some(bits) => bitpacked::to_digits(magnitude, bits),
        None => math::to_digits(magnitude, alphabet.base() as u32),
    }
}

fn digits_to_magnitude(digits: &[u32], alphabet: &Alphabet) -> Vec<u8> {
    if digits.is_empty() {
        return Vec::new();
    }
    match alphabet.bits_per_digit() {
        Some(bits) => bitpacked::from_digits(digits, bits),
        None => math::from_digits(digits, alphabet.base() as u32),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alphabet(symbols: &str) -> Alphabet {
        symbols.parse().unwrap()
    }

    #[test]
    fn test_empty_input() {
        let hex = alphabet("0123456789abcdef");
        assert_eq!(encode(&[], &hex), "");
        assert_eq!(decode("", &hex).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_all_zero_input() {
        let dec = alphabet("0123456789");
        assert_eq!(encode(&[0, 0, 0], &dec), "000");
        assert_eq!(decode("000", &dec).unwrap(), vec![0, 0, 0]);
    }

    #[test]
    fn test_leading_zero_prefix() {
        let hex = alphabet("0123456789abcdef");
        assert_eq!(encode(&[0x00, 0x00, 0x01, 0x02], &hex), "00102");
        assert_eq!(decode("00102", &hex).unwrap(), vec![0x00, 0x00, 0x01, 0x02]);
    }

    #[test]
    fn test_zero_digits_inside_magnitude_survive() {
        let hex = alphabet("0123456789abcdef");
        assert_eq!(encode(&[0x01, 0x00], &hex), "100");
        assert_eq!(decode("100", &hex).unwrap(), vec![0x01, 0x00]);
    }

    #[test]
    fn test_invalid_symbol_position_counts_chars() {
        let symbols = alphabet("αβγ");
        let err = decode("αβx", &symbols).unwrap_err();
        assert_eq!(err.symbol(), 'x');
        assert_eq!(err.position(), 2);
    }

    #[test]
    fn test_packed_radix_with_leading_zero() {
        // 0x1be4 in base 4 is 0123 3210; the top zero digit is dropped
        let quaternary = alphabet("abcd");
        let data = [0x00, 0x1b, 0xe4];
        let text = encode(&data, &quaternary);
        assert_eq!(text, "abcddcba");
        assert_eq!(decode(&text, &quaternary).unwrap(), data);
    }

    #[test]
    fn test_non_canonical_input_still_decodes() {
        // Extra zero-symbols are read as extra zero bytes
        let dec = alphabet("0123456789");
        assert_eq!(decode("00255", &dec).unwrap(), vec![0, 0, 0xff]);
    }
}
