use crate::cli::args::ListArgs;
use radix_codec::{BaseType, CodecRegistry};
use serde::Serialize;
use std::str::FromStr;

#[derive(Serialize)]
struct CodecEntry {
    name: String,
    radix: usize,
    builtin: bool,
    case_insensitive: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    preview: String,
}

pub fn handle(args: ListArgs, config: &CodecRegistry) -> Result<(), Box<dyn std::error::Error>> {
    let mut entries = Vec::new();
    for name in config.names() {
        let codec = match config.resolve(&name) {
            Ok(codec) => codec,
            Err(err) => {
                tracing::warn!(codec = %name, error = %err, "skipping unusable codec");
                continue;
            }
        };
        let alphabet = codec.alphabet();
        let description = config.get_codec(&name).and_then(|c| c.description.clone());
        let preview: String = alphabet
            .symbols()
            .iter()
            .take(20)
            .map(|&c| if c.is_control() || c.is_whitespace() { '.' } else { c })
            .collect();

        entries.push(CodecEntry {
            builtin: BaseType::from_str(&name).is_ok(),
            radix: codec.radix(),
            case_insensitive: alphabet.is_case_insensitive(),
            description,
            preview,
            name,
        });
    }

    if args.json {
        let output = serde_json::json!({
            "default": config.settings.default_codec,
            "codecs": entries,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Available codecs:\n");
    for entry in &entries {
        let suffix = if entry.radix > 20 { "..." } else { "" };
        let kind = if entry.builtin { "builtin" } else { "config" };
        println!(
            "  {:<12} base-{:<4} {:>7}  {}{}",
            entry.name, entry.radix, kind, entry.preview, suffix
        );
    }
    if let Some(default) = &config.settings.default_codec {
        println!("\nDefault: {}", default);
    }

    Ok(())
}
