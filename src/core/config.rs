use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::codec::{BaseType, RadixCodec};
use crate::core::alphabet::{Alphabet, generate_range};
use crate::encoders::algorithms::errors::{
    AlphabetError, CodecNotFoundError, ConfigError, find_closest_codec,
};

/// Configuration for a single extra codec loaded from TOML.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// The symbols comprising the alphabet (explicit list)
    #[serde(default)]
    pub chars: String,
    /// First symbol of a range-based alphabet; use with `length`
    #[serde(default)]
    pub start: Option<String>,
    /// Number of consecutive code points in a range-based alphabet
    #[serde(default)]
    pub length: Option<usize>,
    /// Decode letters regardless of ASCII case
    #[serde(default)]
    pub case_insensitive: bool,
    /// Free-form note shown by `radix-codec list`
    #[serde(default)]
    pub description: Option<String>,
}

impl CodecConfig {
    /// Returns the effective symbol list, generating it from a range if needed.
    ///
    /// Explicit `chars` take priority over `start` + `length`.
    pub fn effective_chars(&self) -> Result<Vec<char>, AlphabetError> {
        if !self.chars.is_empty() {
            return Ok(self.chars.chars().collect());
        }

        if let (Some(start), Some(length)) = (&self.start, self.length) {
            let start_char = start.chars().next().ok_or_else(|| {
                AlphabetError::InvalidRange("start must contain at least one character".to_string())
            })?;
            return generate_range(start_char as u32, length);
        }

        Err(AlphabetError::TooFewSymbols(0))
    }

    /// Build the validated alphabet this entry describes.
    ///
    /// Whitespace symbols are rejected: text read by the CLI is trimmed, which
    /// would silently drop leading zero-symbols.
    pub fn alphabet(&self) -> Result<Alphabet, AlphabetError> {
        let chars = self.effective_chars()?;
        if let Some(&c) = chars.iter().find(|c| c.is_whitespace()) {
            return Err(AlphabetError::WhitespaceSymbol(c));
        }
        if self.case_insensitive {
            Alphabet::new_case_insensitive(chars)
        } else {
            Alphabet::new(chars)
        }
    }
}

/// Global settings.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Codec the CLI falls back to when none is named
    #[serde(default)]
    pub default_codec: Option<String>,
}

/// Extra codecs layered on top of the six built-ins.
#[derive(Debug, Deserialize, Default)]
pub struct CodecRegistry {
    /// Map of codec names to their configurations
    #[serde(default)]
    pub codecs: HashMap<String, CodecConfig>,
    #[serde(default)]
    pub settings: Settings,
}

impl CodecRegistry {
    /// Parses a registry from TOML content.
    ///
    /// Names are folded to lowercase. Entries named after a built-in codec
    /// are dropped with a warning; the built-in tables cannot be redefined.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let mut registry: CodecRegistry = toml::from_str(content)?;
        let mut folded = HashMap::with_capacity(registry.codecs.len());
        for (name, config) in registry.codecs.drain() {
            if BaseType::from_str(&name).is_ok() {
                tracing::warn!(codec = %name, "ignoring registry entry that shadows a built-in codec");
                continue;
            }
            let key = name.to_lowercase();
            if folded.insert(key, config).is_some() {
                tracing::warn!(codec = %name, "registry entry differs from another only by case");
            }
        }
        registry.codecs = folded;
        Ok(registry)
    }

    /// Loads the registry bundled with the library.
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::from_toml(include_str!("../../codecs.toml"))
    }

    /// Loads a registry from a file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Loads the bundled registry with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in registry (from library)
    /// 2. `~/.config/radix-codec/codecs.toml` (user overrides)
    /// 3. `./codecs.toml` (project-local overrides)
    ///
    /// Later files override earlier ones for matching codec names. A file
    /// that fails to load is skipped with a warning.
    pub fn load_with_overrides() -> Result<Self, ConfigError> {
        let mut candidates = Vec::new();
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join("radix-codec").join("codecs.toml"));
        }
        candidates.push(PathBuf::from("codecs.toml"));
        Self::load_with_files(&candidates)
    }

    /// Loads the bundled registry, then merges each existing file in order.
    pub fn load_with_files(paths: &[PathBuf]) -> Result<Self, ConfigError> {
        let mut registry = Self::load_default()?;

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load_from_file(path) {
                Ok(overrides) => {
                    tracing::debug!(path = %path.display(), codecs = overrides.codecs.len(), "merging codec registry");
                    registry.merge(overrides);
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "failed to load codec registry");
                }
            }
        }

        Ok(registry)
    }

    /// Merges another registry into this one.
    ///
    /// Codecs from `other` replace codecs with the same name in `self`; a
    /// default codec set in `other` wins.
    pub fn merge(&mut self, other: CodecRegistry) {
        self.codecs.extend(other.codecs);
        if other.settings.default_codec.is_some() {
            self.settings.default_codec = other.settings.default_codec;
        }
    }

    /// Retrieves a codec configuration by name, ignoring case.
    pub fn get_codec(&self, name: &str) -> Option<&CodecConfig> {
        self.codecs
            .get(name)
            .or_else(|| self.codecs.get(&name.to_lowercase()))
    }

    /// Every resolvable name: the built-ins followed by registry entries,
    /// each group sorted.
    pub fn names(&self) -> Vec<String> {
        let mut extra: Vec<String> = self.codecs.keys().cloned().collect();
        extra.sort();
        BaseType::ALL
            .iter()
            .map(|t| t.name().to_string())
            .chain(extra)
            .collect()
    }

    /// Build the codec called `name`.
    ///
    /// Built-in names and their aliases (`hex`, `16`, ...) resolve to a copy
    /// of the shared built-in codec; anything else must be a registry entry.
    pub fn resolve(&self, name: &str) -> Result<RadixCodec, Box<dyn std::error::Error>> {
        if let Ok(base_type) = BaseType::from_str(name) {
            return Ok(base_type.codec().clone());
        }

        let config = self.get_codec(name).ok_or_else(|| {
            let suggestion = find_closest_codec(name, &self.names());
            CodecNotFoundError::new(name, suggestion)
        })?;

        let alphabet = config.alphabet().map_err(|source| ConfigError::InvalidCodec {
            name: name.to_string(),
            source,
        })?;
        Ok(RadixCodec::new(name.to_lowercase(), alphabet))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BaseCodec;
    use tracing_test::traced_test;

    fn entry(chars: &str) -> CodecConfig {
        CodecConfig {
            chars: chars.to_string(),
            start: None,
            length: None,
            case_insensitive: false,
            description: None,
        }
    }

    #[test]
    fn test_load_default_config() {
        let registry = CodecRegistry::load_default().unwrap();
        for name in ["base32", "base36", "base58", "base62"] {
            assert!(registry.codecs.contains_key(name), "missing {name}");
        }
        assert_eq!(registry.settings.default_codec.as_deref(), Some("base64"));
    }

    #[test]
    fn test_bundled_codecs_are_valid() {
        let registry = CodecRegistry::load_default().unwrap();
        for (name, config) in &registry.codecs {
            let alphabet = config.alphabet().unwrap();
            let codec = RadixCodec::new(name.clone(), alphabet);
            let data = [0u8, 0, 1, 2, 3, 250];
            assert_eq!(codec.decode(&codec.encode(&data)).unwrap(), data, "{name}");
        }
    }

    #[test]
    fn test_base58_radix() {
        let registry = CodecRegistry::load_default().unwrap();
        assert_eq!(registry.resolve("base58").unwrap().radix(), 58);
    }

    #[test]
    fn test_resolve_builtin_and_alias() {
        let registry = CodecRegistry::default();
        let hex = registry.resolve("hex").unwrap();
        assert_eq!(hex.name(), "base16");
        assert_eq!(&hex, BaseType::Base16.codec());
    }

    #[test]
    fn test_resolve_unknown_suggests() {
        let registry = CodecRegistry::load_default().unwrap();
        let err = registry.resolve("bse58").unwrap_err();
        let not_found = err.downcast_ref::<CodecNotFoundError>().unwrap();
        assert_eq!(not_found.suggestion.as_deref(), Some("base58"));
    }

    #[test]
    fn test_resolve_invalid_entry() {
        let mut registry = CodecRegistry::default();
        registry.codecs.insert("broken".to_string(), entry("aab"));
        let err = registry.resolve("broken").unwrap_err();
        assert!(err.downcast_ref::<ConfigError>().is_some());
    }

    #[test]
    fn test_merge_configs() {
        let mut registry = CodecRegistry::default();
        registry.codecs.insert("test1".to_string(), entry("ABC"));

        let mut other = CodecRegistry::default();
        other.codecs.insert("test2".to_string(), entry("XYZ"));
        other.codecs.insert("test1".to_string(), entry("DEF"));
        other.settings.default_codec = Some("test2".to_string());

        registry.merge(other);

        assert_eq!(registry.codecs.len(), 2);
        assert_eq!(registry.get_codec("test1").unwrap().chars, "DEF");
        assert_eq!(registry.get_codec("test2").unwrap().chars, "XYZ");
        assert_eq!(registry.settings.default_codec.as_deref(), Some("test2"));
    }

    #[test]
    fn test_merge_keeps_default_when_other_has_none() {
        let mut registry = CodecRegistry::default();
        registry.settings.default_codec = Some("base91".to_string());
        registry.merge(CodecRegistry::default());
        assert_eq!(registry.settings.default_codec.as_deref(), Some("base91"));
    }

    #[test]
    fn test_load_from_toml_string() {
        let toml_content = r#"
[codecs.custom]
chars = "0123456789ABCDEF"
case_insensitive = true
"#;
        let registry = CodecRegistry::from_toml(toml_content).unwrap();
        let custom = registry.get_codec("custom").unwrap();
        assert!(custom.case_insensitive);
        assert!(custom.alphabet().unwrap().is_case_insensitive());
    }

    #[test]
    #[traced_test]
    fn test_builtin_names_cannot_be_shadowed() {
        let toml_content = r#"
[codecs.base16]
chars = "0123456789ABCDEF"

[codecs.hex]
chars = "fedcba9876543210"

[codecs.octal]
chars = "01234567"
"#;
        let registry = CodecRegistry::from_toml(toml_content).unwrap();
        assert_eq!(registry.codecs.len(), 1);
        assert!(registry.codecs.contains_key("octal"));
        assert!(logs_contain("shadows a built-in codec"));
    }

    #[test]
    #[traced_test]
    fn test_broken_override_file_is_skipped() {
        let dir = std::env::temp_dir().join(format!("radix-codec-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let broken = dir.join("broken.toml");
        let good = dir.join("good.toml");
        std::fs::write(&broken, "[codecs.oops\nchars = ").unwrap();
        std::fs::write(&good, "[codecs.ternary]\nchars = \"012\"\n").unwrap();

        let registry =
            CodecRegistry::load_with_files(&[broken.clone(), good.clone(), dir.join("missing.toml")])
                .unwrap();

        assert!(registry.codecs.contains_key("ternary"));
        assert!(registry.codecs.contains_key("base58"));
        assert!(logs_contain("failed to load codec registry"));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_effective_chars_from_range() {
        let config = CodecConfig {
            chars: String::new(),
            start: Some("A".to_string()),
            length: Some(4),
            case_insensitive: false,
            description: None,
        };
        assert_eq!(config.effective_chars().unwrap(), vec!['A', 'B', 'C', 'D']);
    }

    #[test]
    fn test_effective_chars_explicit_takes_priority() {
        let config = CodecConfig {
            chars: "XYZ".to_string(),
            start: Some("A".to_string()),
            length: Some(4),
            case_insensitive: false,
            description: None,
        };
        assert_eq!(config.effective_chars().unwrap(), vec!['X', 'Y', 'Z']);
    }

    #[test]
    fn test_effective_chars_surrogate_gap_error() {
        let config = CodecConfig {
            chars: String::new(),
            start: Some("\u{D700}".to_string()),
            length: Some(512),
            case_insensitive: false,
            description: None,
        };
        assert!(config.effective_chars().is_err());
    }

    #[test]
    fn test_empty_entry_is_rejected() {
        assert_eq!(entry("").alphabet(), Err(AlphabetError::TooFewSymbols(0)));
    }

    #[test]
    fn test_names_lists_builtins_first() {
        let registry = CodecRegistry::load_default().unwrap();
        let names = registry.names();
        assert_eq!(&names[..6], &["base2", "base10", "base16", "base64", "base91", "base256"]);
        assert!(names.contains(&"base36".to_string()));
    }

    #[test]
    fn test_whitespace_symbols_are_rejected() {
        let registry = CodecRegistry::from_toml("[codecs.spacey]\nchars = \" .:-\"\n").unwrap();
        let spacey = registry.get_codec("spacey").unwrap();
        assert_eq!(spacey.alphabet(), Err(AlphabetError::WhitespaceSymbol(' ')));

        let err = registry.resolve("spacey").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::InvalidCodec {
                source: AlphabetError::WhitespaceSymbol(' '),
                ..
            })
        ));

        // Not only the zero symbol: any whitespace is refused
        assert_eq!(
            entry("ab\tc").alphabet(),
            Err(AlphabetError::WhitespaceSymbol('\t'))
        );
    }

    #[test]
    fn test_registry_names_ignore_case() {
        let registry = CodecRegistry::from_toml("[codecs.Crockford]\nchars = \"0123456789ABCDEFGHJKMNPQRSTVWXYZ\"\n").unwrap();
        assert!(registry.codecs.contains_key("crockford"));

        let codec = registry.resolve("CROCKFORD").unwrap();
        assert_eq!(codec.name(), "crockford");
        assert_eq!(codec.radix(), 32);

        let bundled = CodecRegistry::load_default().unwrap();
        assert_eq!(bundled.resolve("Base58").unwrap().radix(), 58);
        assert_eq!(bundled.resolve("BASE16").unwrap().name(), "base16");
    }

    #[test]
    fn test_resolve_suggestion_ignores_case() {
        let registry = CodecRegistry::load_default().unwrap();
        let err = registry.resolve("BSE58").unwrap_err();
        let not_found = err.downcast_ref::<CodecNotFoundError>().unwrap();
        assert_eq!(not_found.suggestion.as_deref(), Some("base58"));
    }
}
