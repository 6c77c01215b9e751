use blockpad::cli::{
    inspect_data, read_source, regroup_bits, run_transform, show_algorithms, unescape, Direction,
    Source, TransformOptions,
};
use blockpad::codec::{PadOptions, DEFAULT_BLOCK_SIZE};
use blockpad::{Padding, PaddingAlgorithm};
use clap::{Args, Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Version info from build.rs
const VERSION: &str = env!("BLOCKPAD_VERSION");
const BUILD: &str = env!("BLOCKPAD_BUILD");
const PROFILE: &str = env!("BLOCKPAD_PROFILE");
const GIT_HASH: &str = env!("BLOCKPAD_GIT_HASH");

/// Combined version string (compile-time concatenation not possible, so we build at runtime)
fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH))
}

#[derive(Parser)]
#[command(name = "blockpad")]
#[command(author, about = "Block padding for raw, hex and binary strings", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    /// Log codec decisions to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct CodecArgs {
    /// Data to transform (reads --input or stdin when omitted)
    #[arg(conflicts_with = "input")]
    data: Option<String>,

    /// Padding algorithm: ansic9.23, bit, incremental, iso7816-4, pkcs5, pkcs7, w3c, zero
    #[arg(short, long, value_parser = parse_algorithm, conflicts_with = "pattern")]
    algorithm: Option<PaddingAlgorithm>,

    /// Custom fill pattern; prefix with '>' to prepend or '<' to append
    #[arg(short, long, allow_hyphen_values = true)]
    pattern: Option<String>,

    /// Block size in bytes (bits for bit padding)
    #[arg(short, long, default_value_t = DEFAULT_BLOCK_SIZE)]
    block_size: usize,

    /// Treat the data as raw bytes even if it looks like hex or binary
    #[arg(long)]
    raw: bool,

    /// Read data from a file
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Write the result to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Use \xNN escapes for input, pattern and output
    #[arg(short, long)]
    escaped: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Pad data to a block boundary
    #[command(alias = "p")]
    Pad(CodecArgs),

    /// Remove padding (data is returned unchanged if no valid padding is found)
    #[command(alias = "u")]
    Unpad(CodecArgs),

    /// Show how data is classified and what each algorithm would add
    #[command(alias = "i")]
    Inspect {
        /// Data to inspect (reads --input or stdin when omitted)
        #[arg(conflicts_with = "input")]
        data: Option<String>,

        /// Read data from a file
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Block size in bytes (bits for bit padding)
        #[arg(short, long, default_value_t = DEFAULT_BLOCK_SIZE)]
        block_size: usize,

        /// Treat the data as raw bytes
        #[arg(long)]
        raw: bool,

        /// JSON output
        #[arg(long)]
        json: bool,
    },

    /// List padding algorithms
    Algorithms {
        /// JSON output
        #[arg(long)]
        json: bool,
    },

    /// Regroup a bit string into groups of another width
    Regroup {
        /// Binary digits, optionally prefixed with 0b
        bits: String,

        /// Current group width in bits
        #[arg(long, default_value = "8")]
        from: usize,

        /// New group width in bits
        #[arg(long)]
        to: usize,

        /// JSON output
        #[arg(long)]
        json: bool,
    },
}

fn parse_algorithm(s: &str) -> Result<PaddingAlgorithm, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "blockpad=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn transform(args: CodecArgs, direction: Direction) -> blockpad::Result<()> {
    let padding = match (args.algorithm, args.pattern) {
        (_, Some(pattern)) if args.escaped => Padding::fill(unescape(&pattern)?)?,
        (_, Some(pattern)) => Padding::fill(pattern)?,
        (Some(algorithm), None) => Padding::Algorithm(algorithm),
        (None, None) => Padding::default(),
    };
    let options = TransformOptions {
        codec: PadOptions {
            padding,
            block_size: args.block_size,
            raw: args.raw,
        },
        escaped: args.escaped,
        output: args.output,
    };

    let source = Source::from_args(args.data, args.input);
    let report = run_transform(&source, direction, &options)?;

    if let Some(path) = &options.output {
        let verb = match direction {
            Direction::Pad => "Padded",
            Direction::Unpad => "Unpadded",
        };
        println!(
            "{} {} data: {} -> {} symbols, written to {}",
            verb,
            report.representation,
            report.input_len,
            report.output_len,
            path.display()
        );
        if direction == Direction::Unpad && !report.changed() {
            println!("No valid padding found, data left unchanged");
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle --version flag
    if cli.version {
        println!("blockpad {}", get_version());
        return ExitCode::SUCCESS;
    }

    init_logging(cli.verbose);

    // Require a command if not showing version
    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            // Show help when no command provided
            use clap::CommandFactory;
            if let Err(e) = Cli::command().print_help() {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Pad(args) => transform(args, Direction::Pad),
        Commands::Unpad(args) => transform(args, Direction::Unpad),

        Commands::Inspect {
            data,
            input,
            block_size,
            raw,
            json,
        } => read_source(&Source::from_args(data, input), false)
            .and_then(|bytes| inspect_data(&bytes, raw, block_size, json))
            .map(|report| print!("{}", report)),

        Commands::Algorithms { json } => show_algorithms(json).map(|list| print!("{}", list)),

        Commands::Regroup {
            bits,
            from,
            to,
            json,
        } => regroup_bits(&bits, from, to, json).map(|report| print!("{}", report)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
