use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that can occur during decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input contains a symbol that is not in the codec's alphabet
    InvalidSymbol {
        symbol: char,
        /// Zero-based character (not byte) offset into the input
        position: usize,
        input: String,
        valid_symbols: String,
    },
}

impl DecodeError {
    /// Create an InvalidSymbol error with context
    pub fn invalid_symbol(symbol: char, position: usize, input: &str, valid_symbols: &str) -> Self {
        // Keep roughly the first 60 characters, cut on a char boundary
        let display_input = match input.char_indices().nth(60) {
            Some((cut, _)) => format!("{}...", &input[..cut]),
            None => input.to_string(),
        };

        DecodeError::InvalidSymbol {
            symbol,
            position,
            input: display_input,
            valid_symbols: valid_symbols.to_string(),
        }
    }

    /// The offending symbol.
    pub fn symbol(&self) -> char {
        match self {
            DecodeError::InvalidSymbol { symbol, .. } => *symbol,
        }
    }

    /// Character position of the offending symbol.
    pub fn position(&self) -> usize {
        match self {
            DecodeError::InvalidSymbol { position, .. } => *position,
        }
    }

    /// Render the error with or without ANSI colors.
    ///
    /// `Display` picks the mode from the environment; this is the
    /// deterministic form used when the caller already knows.
    pub fn render(&self, use_color: bool) -> String {
        match self {
            DecodeError::InvalidSymbol {
                symbol,
                position,
                input,
                valid_symbols,
            } => {
                let mut out = String::new();
                out.push_str(&header(
                    &format!("invalid symbol {:?} at position {}", symbol, position),
                    use_color,
                ));
                out.push_str("\n\n");

                // Caret under the offending symbol; only meaningful while the
                // position falls inside the (possibly truncated) echo
                out.push_str(&format!("  {}\n", printable(input)));
                if *position < input.chars().count() {
                    out.push_str(&format!("  {}", " ".repeat(*position)));
                    if use_color {
                        out.push_str("\x1b[1;31m^\x1b[0m");
                    } else {
                        out.push('^');
                    }
                    out.push('\n');
                }
                out.push('\n');

                let hint_symbols = match valid_symbols.char_indices().nth(80) {
                    Some((cut, _)) => format!("{}...", &valid_symbols[..cut]),
                    None => valid_symbols.clone(),
                };
                out.push_str(&hint(&format!("valid symbols: {}", hint_symbols), use_color));
                out
            }
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(should_use_color()))
    }
}

impl std::error::Error for DecodeError {}

/// Errors raised while building an alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    /// A radix needs at least two symbols
    TooFewSymbols(usize),
    /// The same symbol appears twice
    DuplicateSymbol(char),
    /// Two symbols are equal once ASCII case is folded
    CaseCollision(char, char),
    /// A code point range could not be turned into symbols
    InvalidRange(String),
    /// Registry alphabets may not use whitespace; the CLI trims it from input
    WhitespaceSymbol(char),
}

impl fmt::Display for AlphabetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlphabetError::TooFewSymbols(n) => {
                write!(f, "alphabet needs at least 2 symbols, got {}", n)
            }
            AlphabetError::DuplicateSymbol(c) => write!(f, "duplicate symbol in alphabet: {:?}", c),
            AlphabetError::CaseCollision(a, b) => write!(
                f,
                "symbols {:?} and {:?} collide in a case-insensitive alphabet",
                a, b
            ),
            AlphabetError::InvalidRange(msg) => write!(f, "invalid alphabet range: {}", msg),
            AlphabetError::WhitespaceSymbol(c) => {
                write!(f, "whitespace symbol {:?} is not allowed in a registry alphabet", c)
            }
        }
    }
}

impl std::error::Error for AlphabetError {}

/// Error returned by the file helpers on `BaseCodec`.
#[derive(Debug)]
pub enum CodecError {
    Io(io::Error),
    Decode(DecodeError),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::Io(e) => write!(f, "i/o error: {}", e),
            CodecError::Decode(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CodecError::Io(e) => Some(e),
            CodecError::Decode(e) => Some(e),
        }
    }
}

impl From<io::Error> for CodecError {
    fn from(e: io::Error) -> Self {
        CodecError::Io(e)
    }
}

impl From<DecodeError> for CodecError {
    fn from(e: DecodeError) -> Self {
        CodecError::Decode(e)
    }
}

/// Errors raised while loading the codec registry.
#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: io::Error },
    Parse(toml::de::Error),
    InvalidCodec { name: String, source: AlphabetError },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "cannot read {}: {}", path.display(), source)
            }
            ConfigError::Parse(e) => write!(f, "invalid codec registry: {}", e),
            ConfigError::InvalidCodec { name, source } => {
                write!(f, "codec '{}' is invalid: {}", name, source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse(e) => Some(e),
            ConfigError::InvalidCodec { source, .. } => Some(source),
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// Error when a codec name is not known
#[derive(Debug)]
pub struct CodecNotFoundError {
    pub name: String,
    pub suggestion: Option<String>,
}

impl CodecNotFoundError {
    pub fn new(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self {
            name: name.into(),
            suggestion,
        }
    }

    pub fn render(&self, use_color: bool) -> String {
        let mut out = header(&format!("codec '{}' not found", self.name), use_color);
        out.push_str("\n\n");

        if let Some(suggestion) = &self.suggestion {
            out.push_str(&hint(&format!("did you mean '{}'?", suggestion), use_color));
            out.push('\n');
        }

        if use_color {
            out.push_str("      run \x1b[1m`radix-codec list`\x1b[0m to see all codecs");
        } else {
            out.push_str("      run `radix-codec list` to see all codecs");
        }
        out
    }
}

impl fmt::Display for CodecNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(should_use_color()))
    }
}

impl std::error::Error for CodecNotFoundError {}

fn header(message: &str, use_color: bool) -> String {
    if use_color {
        format!("\x1b[1;31merror:\x1b[0m {}", message)
    } else {
        format!("error: {}", message)
    }
}

fn hint(message: &str, use_color: bool) -> String {
    if use_color {
        format!("\x1b[1;36mhint:\x1b[0m {}", message)
    } else {
        format!("hint: {}", message)
    }
}

/// Control characters (radix 256 text) would garble the terminal
fn printable(input: &str) -> String {
    input
        .chars()
        .map(|c| if c.is_control() { '.' } else { c })
        .collect()
}

/// Check if colored output should be used
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

/// Edit distance between two names, one DP row at a time.
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    // row[j]: distance from the part of `a` seen so far to b[..j]
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitution = diagonal + usize::from(ca != cb);
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(diagonal + 1);
        }
    }

    row[b.len()]
}

/// Find the closest matching codec name
///
/// Matching ignores case; registry names are stored lowercase.
pub fn find_closest_codec(name: &str, available: &[String]) -> Option<String> {
    let name = name.to_lowercase();
    let threshold = if name.chars().count() < 5 { 2 } else { 3 };

    available
        .iter()
        .map(|candidate| (edit_distance(&name, &candidate.to_lowercase()), candidate))
        .filter(|(distance, _)| *distance <= threshold)
        // Ties go to the alphabetically first name so suggestions are stable
        .min_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)))
        .map(|(_, candidate)| candidate.clone())
}
