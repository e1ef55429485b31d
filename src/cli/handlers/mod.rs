pub mod decode;
pub mod encode;
pub mod list;

use crate::cli::global::GlobalArgs;
use radix_codec::{BaseType, CodecRegistry, RadixCodec};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// Resolve `--codec`, falling back to `settings.default_codec`, then base64.
pub fn select_codec(
    name: Option<&str>,
    config: &CodecRegistry,
) -> Result<RadixCodec, Box<dyn std::error::Error>> {
    let name = name
        .or(config.settings.default_codec.as_deref())
        .unwrap_or(BaseType::Base64.name());
    tracing::debug!(codec = name, "selected codec");
    config.resolve(name)
}

/// Radix-256 text is exchanged as raw bytes, one byte per symbol.
pub fn is_raw_bytes(codec: &RadixCodec) -> bool {
    codec.name() == BaseType::Base256.name()
}

pub fn read_input(
    file: Option<&PathBuf>,
    global: &GlobalArgs,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    if let Some(file_path) = file {
        if global.max_size > 0 {
            let file_size = fs::metadata(file_path)?.len() as usize;

            if file_size > global.max_size {
                if global.force {
                    tracing::warn!(
                        file_size,
                        limit = global.max_size,
                        "processing file above size limit"
                    );
                } else {
                    return Err(format!(
                        "File size ({} bytes) exceeds limit ({} bytes). Use --force to process anyway.",
                        file_size, global.max_size
                    )
                    .into());
                }
            }
        }

        Ok(fs::read(file_path)?)
    } else {
        let mut buffer = Vec::new();
        io::stdin().read_to_end(&mut buffer)?;

        if global.max_size > 0 && buffer.len() > global.max_size && !global.force {
            return Err(format!(
                "Input size ({} bytes) exceeds maximum ({} bytes). Use --force to process anyway.",
                buffer.len(),
                global.max_size
            )
            .into());
        }

        Ok(buffer)
    }
}

pub fn write_output(
    bytes: &[u8],
    output: Option<&PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(output_path) = output {
        fs::write(output_path, bytes)?;
        tracing::debug!(path = %output_path.display(), len = bytes.len(), "wrote output");
    } else {
        let mut stdout = io::stdout().lock();
        stdout.write_all(bytes)?;
        stdout.flush()?;
    }
    Ok(())
}
