//! Positional conversion between a big-endian magnitude and base-R digits.
//!
//! Works for any radix `2..=u32::MAX`. Leading zero bytes are not this
//! module's concern: callers strip them first (see `radix`).

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

/// Largest `k` with `base^k <= u64::MAX`, together with `base^k`.
///
/// One big-integer division by `base^k` yields `k` digits, which keeps the
/// number of passes over the magnitude down by that factor.
fn chunk_params(base: u32) -> (usize, u64) {
    let base = u64::from(base);
    let mut digits = 1;
    let mut divisor = base;
    while let Some(next) = divisor.checked_mul(base) {
        divisor = next;
        digits += 1;
    }
    (digits, divisor)
}

/// Upper bound on the number of digits a magnitude of `bytes` bytes needs.
fn estimate_digits(bytes: usize, base: u32) -> usize {
    let bits_per_digit = f64::from(base).log2();
    ((bytes as f64 * 8.0) / bits_per_digit).ceil() as usize + 1
}

/// Convert a magnitude to digits, most significant first.
///
/// The result has no leading zero digit; an empty or all-zero magnitude
/// yields no digits at all.
pub fn to_digits(magnitude: &[u8], base: u32) -> Vec<u32> {
    debug_assert!(base >= 2);

    let (chunk_digits, chunk_divisor) = chunk_params(base);
    let divisor = BigUint::from(chunk_divisor);
    let base64 = u64::from(base);

    let mut num = BigUint::from_bytes_be(magnitude);
    let mut digits = Vec::with_capacity(estimate_digits(magnitude.len(), base));

    // Digits are collected least significant first and reversed at the end
    while !num.is_zero() {
        let (quotient, remainder) = num.div_rem(&divisor);
        // remainder < base^k <= u64::MAX, so it is a single limb (or none for 0)
        let mut chunk = remainder.iter_u64_digits().next().unwrap_or(0);

        if quotient.is_zero() {
            // Most significant chunk: emit only the digits that carry value
            while chunk > 0 {
                digits.push((chunk % base64) as u32);
                chunk /= base64;
            }
        } else {
            // Inner chunks are zero-padded to exactly k digits
            for _ in 0..chunk_digits {
                digits.push((chunk % base64) as u32);
                chunk /= base64;
            }
        }
        num = quotient;
    }

    digits.reverse();
    digits
}

/// Convert digits (most significant first, each `< base`) back to the
/// minimal big-endian magnitude.
///
/// Zero, including the empty digit string, yields an empty byte vector.
pub fn from_digits(digits: &[u32], base: u32) -> Vec<u8> {
    debug_assert!(base >= 2);

    let (chunk_digits, chunk_multiplier) = chunk_params(base);
    let base64 = u64::from(base);
    let mut num = BigUint::zero();

    for group in digits.chunks(chunk_digits) {
        let value = group
            .iter()
            .fold(0u64, |acc, &digit| acc * base64 + u64::from(digit));
        // Only the final group can be short
        let scale = if group.len() == chunk_digits {
            chunk_multiplier
        } else {
            base64.pow(group.len() as u32)
        };
        num *= scale;
        num += value;
    }

    if num.is_zero() {
        Vec::new()
    } else {
        num.to_bytes_be()
    }
}
