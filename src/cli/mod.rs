mod args;
mod global;
mod handlers;

use clap::Parser;
use radix_codec::{CodecNotFoundError, CodecRegistry, DecodeError};
use std::error::Error;
use tracing_subscriber::EnvFilter;

use args::Command;
use global::GlobalArgs;

#[derive(Parser)]
#[command(name = "radix-codec")]
#[command(version)]
#[command(about = "Encode and decode binary data in base 2, 10, 16, 64, 91, 256 and custom alphabets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    global: GlobalArgs,
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(&cli.global);

    let use_color = cli.global.use_color();
    dispatch(cli).map_err(|err| render_error(err, use_color))
}

fn dispatch(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = CodecRegistry::load_with_overrides()?;

    match cli.command {
        Command::Encode(args) => handlers::encode::handle(args, &cli.global, &config),
        Command::Decode(args) => handlers::decode::handle(args, &cli.global, &config),
        Command::List(args) => handlers::list::handle(args, &config),
    }
}

fn init_tracing(global: &GlobalArgs) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(global.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(global.use_color())
        .with_target(false)
        .init();
}

/// Re-render errors that know how to draw themselves, honouring `--no-color`.
fn render_error(err: Box<dyn Error>, use_color: bool) -> Box<dyn Error> {
    if let Some(decode) = err.downcast_ref::<DecodeError>() {
        return decode.render(use_color).into();
    }
    if let Some(not_found) = err.downcast_ref::<CodecNotFoundError>() {
        return not_found.render(use_color).into();
    }
    err
}
