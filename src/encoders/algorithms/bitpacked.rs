//! Bit-packing conversion for power-of-two radices.
//!
//! Packs bits starting at the least significant end of the magnitude, so the
//! digit groups line up with positional base-2^b digits and the output equals
//! what `math` produces. Classic RFC 4648 packing starts at the most
//! significant end and would not match.

/// Convert a magnitude to `bits`-wide digits, most significant first, with no
/// leading zero digit.
pub fn to_digits(magnitude: &[u8], bits: u32) -> Vec<u32> {
    debug_assert!((1..=16).contains(&bits));

    let magnitude = trim_leading_zeros(magnitude);

    // One digit per byte: identity on the trimmed magnitude
    if bits == 8 {
        return magnitude.iter().map(|&b| u32::from(b)).collect();
    }

    let mask = (1u32 << bits) - 1;
    let mut digits = Vec::with_capacity((magnitude.len() * 8).div_ceil(bits as usize));
    let mut bit_buffer = 0u32;
    let mut bits_in_buffer = 0u32;

    for &byte in magnitude.iter().rev() {
        bit_buffer |= u32::from(byte) << bits_in_buffer;
        bits_in_buffer += 8;

        while bits_in_buffer >= bits {
            digits.push(bit_buffer & mask);
            bit_buffer >>= bits;
            bits_in_buffer -= bits;
        }
    }

    if bits_in_buffer > 0 {
        digits.push(bit_buffer);
    }

    // The top digit group may be padding above the most significant set bit
    while digits.last() == Some(&0) {
        digits.pop();
    }

    digits.reverse();
    digits
}

/// Convert `bits`-wide digits (most significant first) back to the minimal
/// big-endian magnitude.
pub fn from_digits(digits: &[u32], bits: u32) -> Vec<u8> {
    debug_assert!((1..=16).contains(&bits));

    if bits == 8 {
        let bytes: Vec<u8> = digits.iter().map(|&d| d as u8).collect();
        return trim_leading_zeros(&bytes).to_vec();
    }

    let mut bytes = Vec::with_capacity((digits.len() * bits as usize).div_ceil(8));
    let mut bit_buffer = 0u32;
    let mut bits_in_buffer = 0u32;

    for &digit in digits.iter().rev() {
        bit_buffer |= digit << bits_in_buffer;
        bits_in_buffer += bits;

        while bits_in_buffer >= 8 {
            bytes.push((bit_buffer & 0xFF) as u8);
            bit_buffer >>= 8;
            bits_in_buffer -= 8;
        }
    }

    if bits_in_buffer > 0 {
        bytes.push(bit_buffer as u8);
    }

    while bytes.last() == Some(&0) {
        bytes.pop();
    }

    bytes.reverse();
    bytes
}

fn trim_leading_zeros(bytes: &[u8]) -> &[u8] {
    let first = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    &bytes[first..]
}
