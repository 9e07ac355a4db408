// fb64fix -- print self-consistent Base64 filler
//
// Usage: b64fix [--pad] COUNT
// Writes COUNT symbols of a Base64 stream that encodes its own prefix.

use std::io::{self, Write};
use std::process;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use b64fix_rs::b64fix::cli::parse_count;
use b64fix_rs::b64fix::{Alphabet, Error, Generator, Seed, Termination};
use b64fix_rs::common::io_error_msg;

const TOOL_NAME: &str = "b64fix";

#[derive(Parser)]
#[command(
    name = "b64fix",
    about = "Print COUNT symbols of self-consistent Base64 filler to standard output.",
    after_help = "The output starts from the self-reproducing seed \"Vm0\" and feeds every\n\
        symbol back into the encoder, so it is the Base64 encoding of its own\n\
        prefix. Without --pad exactly COUNT bytes are written and no '=' appears.\n\
        With --pad the final group is closed with standard padding, giving\n\
        4*ceil(COUNT/3) bytes that decode to the first COUNT bytes of the output.",
    version
)]
struct Cli {
    /// Close the final group with '=' padding after COUNT self-fed symbols
    #[arg(short = 'p', long = "pad")]
    pad: bool,

    /// Number of symbols to generate
    #[arg(value_name = "COUNT", value_parser = parse_count)]
    count: usize,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let alphabet = Alphabet::STANDARD;
    let seed = Seed::find(&alphabet).context("internal error")?;
    debug!(
        seed = %String::from_utf8_lossy(seed.as_bytes()),
        count = cli.count,
        pad = cli.pad,
        "seed found"
    );

    let termination = if cli.pad {
        Termination::Padded
    } else {
        Termination::Exact
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    Generator::new(&alphabet, &seed, cli.count, termination)
        .write_to(&mut out)
        .map_err(|e| {
            let what = if e.is_internal() {
                "internal error"
            } else {
                "standard output"
            };
            anyhow::Error::new(e).context(what)
        })?;
    out.flush().context("standard output")?;
    Ok(())
}

fn main() {
    b64fix_rs::common::reset_sigpipe();
    init_tracing();

    // Usage and count errors exit 2 from here.
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        if let Some(Error::Io(err)) = e.downcast_ref::<Error>() {
            if err.kind() == io::ErrorKind::BrokenPipe {
                process::exit(0);
            }
            eprintln!("{}: standard output: {}", TOOL_NAME, io_error_msg(err));
        } else if let Some(err) = e.downcast_ref::<io::Error>() {
            if err.kind() == io::ErrorKind::BrokenPipe {
                process::exit(0);
            }
            eprintln!("{}: standard output: {}", TOOL_NAME, io_error_msg(err));
        } else {
            eprintln!("{}: {:#}", TOOL_NAME, e);
        }
        process::exit(1);
    }
}
