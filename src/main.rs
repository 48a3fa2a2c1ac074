//! b2x CLI - convert between textual encodings of bytes

use b2x::{Conversion, Converter, CopyType, InputType};
use clap::Parser;
use log::LevelFilter;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

/// Convert between hex, Base64, C escapes, quoted-printable and text.
///
/// The input type is autodetected unless --from is given. Input is taken
/// from TEXT, from --file, or from stdin when neither is present.
#[derive(Parser, Debug)]
#[command(name = "b2x")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text to convert
    text: Option<String>,

    /// Read the input from a file
    #[arg(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Force the input type instead of autodetecting it
    #[arg(short = 'F', long, value_enum, ignore_case = true)]
    from: Option<InputType>,

    /// Output format
    #[arg(short, long, value_enum, ignore_case = true, default_value = "utf8")]
    to: CopyType,

    /// Print a report about the input before the output
    #[arg(short, long)]
    info: bool,

    /// Undo double-encoded UTF-8
    #[arg(short, long)]
    repair: bool,

    /// Fail instead of falling back to the raw text when decoding fails
    #[arg(short, long)]
    strict: bool,

    /// Keep trailing line breaks of file and stdin input
    #[arg(long)]
    keep_newline: bool,

    /// Increase log verbosity (-v, -vv, -vvv, -vvvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(log_level(args.verbose))
        .parse_default_env()
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> b2x::Result<()> {
    let mut converter = Converter::new();
    converter
        .copy_type(args.to)
        .repair_double_encoding(args.repair)
        .trim_trailing_newline(!args.keep_newline)
        .strict(args.strict);

    if let Some(input_type) = args.from {
        converter.input_type(input_type);
    }

    let conversion = if let Some(ref path) = args.file {
        log::debug!("reading {}", path.display());
        converter.convert_path(path)?
    } else if let Some(ref text) = args.text {
        if args.strict {
            converter.convert_strict(text)?
        } else {
            converter.convert(text)
        }
    } else {
        converter.convert_reader(io::stdin().lock())?
    };

    if args.info {
        print_info(&conversion, args.to);
    }
    println!("{}", conversion.output);

    Ok(())
}

fn print_info(conversion: &Conversion, copy_type: CopyType) {
    println!(
        "Input type: {} ({})",
        conversion.input_type,
        if conversion.detected { "detected" } else { "forced" }
    );
    if conversion.fell_back {
        println!("  Decoding failed, showing the raw text");
    }
    println!("Data type: {}", conversion.data_type);
    println!("Length: {} bytes", conversion.len());
    if conversion.data_type.is_text() {
        println!("Characters: {}", conversion.char_count());
    }
    println!(
        "Double-encoded: {}",
        match (conversion.double_encoded, conversion.repaired) {
            (true, true) => "yes (repaired)",
            (true, false) => "yes",
            (false, _) => "no",
        }
    );
    if let Some(encoding) = conversion.legacy_encoding() {
        println!("Legacy encoding guess: {encoding}");
    }
    println!("Output ({copy_type}):");
}

const fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        3 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
