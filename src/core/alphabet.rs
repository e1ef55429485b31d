use std::collections::HashMap;
use std::str::FromStr;

use crate::encoders::algorithms::errors::AlphabetError;

/// Ordered set of digit symbols for one radix.
///
/// Index `i` of the symbol table is the symbol for digit value `i`, and the
/// reverse map answers the opposite question. Both are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
    char_to_index: HashMap<char, usize>,
    case_insensitive: bool,
}

impl Alphabet {
    /// Creates a case-sensitive alphabet.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than two symbols or a symbol repeats.
    pub fn new(chars: Vec<char>) -> Result<Self, AlphabetError> {
        Self::build(chars, false)
    }

    /// Creates an alphabet whose decoder folds ASCII case before lookup.
    ///
    /// Encoding always emits the symbols exactly as given, so pass the
    /// canonical case (e.g. lowercase hex digits).
    ///
    /// # Errors
    ///
    /// Same as [`Alphabet::new`], plus [`AlphabetError::CaseCollision`] when two
    /// symbols differ only by ASCII case.
    pub fn new_case_insensitive(chars: Vec<char>) -> Result<Self, AlphabetError> {
        Self::build(chars, true)
    }

    /// Creates an alphabet from `length` consecutive code points starting at `start`.
    ///
    /// # Errors
    ///
    /// Fails when the range passes U+10FFFF, crosses the surrogate gap, or is
    /// too short to form a radix.
    pub fn from_range(start: u32, length: usize) -> Result<Self, AlphabetError> {
        Self::new(generate_range(start, length)?)
    }

    /// Builds one of the crate's own tables, which are known to be valid.
    pub(crate) fn from_table(table: &str, case_insensitive: bool) -> Self {
        let chars: Vec<char> = table.chars().collect();
        let char_to_index = chars.iter().enumerate().map(|(i, &c)| (c, i)).collect();
        Alphabet {
            chars,
            char_to_index,
            case_insensitive,
        }
    }

    fn build(chars: Vec<char>, case_insensitive: bool) -> Result<Self, AlphabetError> {
        if chars.len() < 2 {
            return Err(AlphabetError::TooFewSymbols(chars.len()));
        }

        let mut char_to_index = HashMap::with_capacity(chars.len());
        for (i, &c) in chars.iter().enumerate() {
            if char_to_index.insert(c, i).is_some() {
                return Err(AlphabetError::DuplicateSymbol(c));
            }
        }

        if case_insensitive {
            let mut folded: HashMap<char, char> = HashMap::with_capacity(chars.len());
            for &c in &chars {
                if let Some(previous) = folded.insert(c.to_ascii_lowercase(), c) {
                    return Err(AlphabetError::CaseCollision(previous, c));
                }
            }
        }

        Ok(Alphabet {
            chars,
            char_to_index,
            case_insensitive,
        })
    }

    /// Returns the base (radix) of the alphabet.
    pub fn base(&self) -> usize {
        self.chars.len()
    }

    /// The symbol for digit value 0, used for the leading-zero-byte prefix.
    pub fn zero_symbol(&self) -> char {
        self.chars[0]
    }

    /// All symbols in digit order.
    pub fn symbols(&self) -> &[char] {
        &self.chars
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Bits carried by one digit when the radix is a power of two small
    /// enough for the bit-packing path, `None` otherwise.
    pub fn bits_per_digit(&self) -> Option<u32> {
        let base = self.base();
        if base.is_power_of_two() && base <= 1 << 16 {
            Some(base.trailing_zeros())
        } else {
            None
        }
    }

    /// Encodes a digit (0 to base-1) as a symbol.
    ///
    /// Returns `None` if the digit is out of range.
    pub fn encode_digit(&self, digit: usize) -> Option<char> {
        self.chars.get(digit).copied()
    }

    /// Decodes a symbol back to its digit value.
    ///
    /// Returns `None` if the symbol is not in the alphabet.
    pub fn decode_char(&self, c: char) -> Option<usize> {
        if let Some(&digit) = self.char_to_index.get(&c) {
            return Some(digit);
        }
        if self.case_insensitive && c.is_ascii_alphabetic() {
            let swapped = if c.is_ascii_lowercase() {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            };
            return self.char_to_index.get(&swapped).copied();
        }
        None
    }

    /// Symbol for a digit the engine produced itself, so always in range.
    pub(crate) fn symbol_at(&self, digit: u32) -> char {
        self.chars[digit as usize]
    }

    /// Human-readable list of valid symbols for error hints.
    pub(crate) fn describe(&self) -> String {
        let printable = self.chars.iter().all(|c| !c.is_control() && !c.is_whitespace());
        if printable && self.base() <= 96 {
            let mut listed: String = self.chars.iter().collect();
            if self.case_insensitive {
                listed.push_str(" (case-insensitive)");
            }
            listed
        } else {
            format!("{} symbols in alphabet", self.base())
        }
    }
}

impl FromStr for Alphabet {
    type Err = AlphabetError;

    /// Creates a case-sensitive alphabet from the characters of `s`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.chars().collect())
    }
}

/// Generate sequential Unicode characters from a range.
pub(crate) fn generate_range(start: u32, length: usize) -> Result<Vec<char>, AlphabetError> {
    const MAX_UNICODE: u32 = 0x10FFFF;
    const SURROGATE_START: u32 = 0xD800;
    const SURROGATE_END: u32 = 0xDFFF;

    if length == 0 {
        return Err(AlphabetError::InvalidRange(
            "length must be greater than 0".to_string(),
        ));
    }

    let end = u32::try_from(length - 1)
        .ok()
        .and_then(|offset| start.checked_add(offset))
        .filter(|&end| end <= MAX_UNICODE)
        .ok_or_else(|| {
            AlphabetError::InvalidRange(format!(
                "range starting at U+{:04X} exceeds maximum Unicode codepoint U+{:X}",
                start, MAX_UNICODE
            ))
        })?;

    if start <= SURROGATE_END && end >= SURROGATE_START {
        return Err(AlphabetError::InvalidRange(format!(
            "range U+{:04X}..U+{:04X} crosses surrogate gap (U+D800..U+DFFF)",
            start, end
        )));
    }

    (start..=end)
        .map(|cp| {
            char::from_u32(cp)
                .ok_or_else(|| AlphabetError::InvalidRange(format!("invalid codepoint U+{:04X}", cp)))
        })
        .collect()
}
