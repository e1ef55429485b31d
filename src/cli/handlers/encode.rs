use crate::cli::{
    args::EncodeArgs,
    global::GlobalArgs,
    handlers::{is_raw_bytes, read_input, select_codec, write_output},
};
use radix_codec::{BaseCodec, CodecRegistry};

pub fn handle(
    args: EncodeArgs,
    global: &GlobalArgs,
    config: &CodecRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let codec = select_codec(args.codec.as_deref(), config)?;
    let input = read_input(args.file.as_ref(), global)?;

    let data = if args.hex {
        let text = String::from_utf8(input).map_err(|_| "Hex input must be valid UTF-8")?;
        hex::decode(text.trim()).map_err(|e| format!("Invalid hex input: {}", e))?
    } else {
        input
    };

    let encoded = codec.encode(&data);
    tracing::debug!(
        codec = codec.name(),
        input_len = data.len(),
        output_symbols = encoded.chars().count(),
        "encoded"
    );

    let mut out: Vec<u8> = if is_raw_bytes(&codec) {
        encoded.chars().map(|c| c as u8).collect()
    } else {
        encoded.into_bytes()
    };
    if args.output.is_none() && !is_raw_bytes(&codec) {
        out.push(b'\n');
    }

    write_output(&out, args.output.as_ref())
}
