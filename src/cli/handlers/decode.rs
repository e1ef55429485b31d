use crate::cli::{
    args::DecodeArgs,
    global::GlobalArgs,
    handlers::{is_raw_bytes, read_input, select_codec, write_output},
};
use radix_codec::{BaseCodec, CodecRegistry};

pub fn handle(
    args: DecodeArgs,
    global: &GlobalArgs,
    config: &CodecRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let codec = select_codec(args.codec.as_deref(), config)?;
    let input = read_input(args.file.as_ref(), global)?;

    // Raw bytes map straight to U+0000..U+00FF; anything else is trimmed text.
    let text: String = if is_raw_bytes(&codec) {
        input.iter().map(|&b| b as char).collect()
    } else {
        let text = String::from_utf8(input).map_err(|_| "Input must be valid UTF-8 for decoding")?;
        text.trim().to_string()
    };

    let decoded = codec.decode(&text)?;
    tracing::debug!(codec = codec.name(), output_len = decoded.len(), "decoded");

    if args.hex {
        let mut line = hex::encode(&decoded).into_bytes();
        if args.output.is_none() {
            line.push(b'\n');
        }
        write_output(&line, args.output.as_ref())
    } else {
        write_output(&decoded, args.output.as_ref())
    }
}
