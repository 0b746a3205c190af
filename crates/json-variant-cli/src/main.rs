//! `jvar` CLI: render JSON and numbers through the json-variant printer.
//!
//! ## Usage
//!
//! ```sh
//! # Re-serialize JSON compactly (stdin → stdout)
//! echo '{"name": "Alice", "age": 30}' | jvar encode
//!
//! # Indented output from file to file
//! jvar encode --pretty -i data.json -o out.json
//!
//! # Print every non-integer number with 3 decimals
//! jvar encode --decimals 3 -i data.json
//!
//! # Rendered length in bytes
//! jvar measure --pretty -i data.json
//!
//! # Print a single number
//! jvar int -128 --type i8
//! jvar float 1.23456 --digits 3
//! ```

mod document;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use json_variant_core::print::LINE_ENDING;
use json_variant_core::{CountingSink, Fixed, IoSink, JsonPrintable, Print, Printable};
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::str::FromStr;

use document::BridgeOptions;

#[derive(Parser)]
#[command(
    name = "jvar",
    version,
    about = "Render JSON through an allocation-free variant printer"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse JSON and print it back through the variant serializer
    Encode {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Indent the output
        #[arg(long)]
        pretty: bool,
        /// Digits after the decimal point for non-integer numbers
        #[arg(long)]
        decimals: Option<u8>,
    },
    /// Print the length of the rendered JSON in bytes
    Measure {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Measure the indented rendering
        #[arg(long)]
        pretty: bool,
        /// Digits after the decimal point for non-integer numbers
        #[arg(long)]
        decimals: Option<u8>,
    },
    /// Print an integer in decimal
    Int {
        #[arg(allow_negative_numbers = true)]
        value: String,
        /// Integer type the value is parsed as
        #[arg(long = "type", value_enum, default_value_t = IntType::I64)]
        ty: IntType,
    },
    /// Print a float in fixed-point notation
    Float {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        /// Digits after the decimal point
        #[arg(long, default_value_t = 2)]
        digits: u8,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum IntType {
    I8,
    I16,
    I32,
    I64,
    I128,
    U8,
    U16,
    U32,
    U64,
    U128,
}

type Output = IoSink<BufWriter<Box<dyn Write>>>;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            input,
            output,
            pretty,
            decimals,
        } => {
            let value = parse_input(input.as_deref())?;
            let mut sink = open_output(output.as_deref())?;
            document::with_variant(&value, &BridgeOptions { decimals }, |root| {
                if pretty {
                    root.try_pretty_print_to(&mut sink)
                } else {
                    root.try_print_to(&mut sink)
                }
            })
            .context("Failed to write JSON output")?;
            finish(sink)?;
        }
        Commands::Measure {
            input,
            pretty,
            decimals,
        } => {
            let value = parse_input(input.as_deref())?;
            let length = document::with_variant(&value, &BridgeOptions { decimals }, |root| {
                if pretty {
                    root.measure_pretty_length()
                } else {
                    root.measure_length()
                }
            });
            let mut sink = open_output(None)?;
            print_line(&mut sink, length)?;
            finish(sink)?;
        }
        Commands::Int { value, ty } => {
            let mut sink = open_output(None)?;
            match ty {
                IntType::I8 => print_parsed::<i8>(&mut sink, &value, ty)?,
                IntType::I16 => print_parsed::<i16>(&mut sink, &value, ty)?,
                IntType::I32 => print_parsed::<i32>(&mut sink, &value, ty)?,
                IntType::I64 => print_parsed::<i64>(&mut sink, &value, ty)?,
                IntType::I128 => print_parsed::<i128>(&mut sink, &value, ty)?,
                IntType::U8 => print_parsed::<u8>(&mut sink, &value, ty)?,
                IntType::U16 => print_parsed::<u16>(&mut sink, &value, ty)?,
                IntType::U32 => print_parsed::<u32>(&mut sink, &value, ty)?,
                IntType::U64 => print_parsed::<u64>(&mut sink, &value, ty)?,
                IntType::U128 => print_parsed::<u128>(&mut sink, &value, ty)?,
            }
            finish(sink)?;
        }
        Commands::Float { value, digits } => {
            let mut sink = open_output(None)?;
            print_line(&mut sink, Fixed::new(value, digits))?;
            finish(sink)?;
        }
    }

    Ok(())
}

fn print_parsed<T>(sink: &mut Output, text: &str, ty: IntType) -> Result<()>
where
    T: FromStr + Printable + Copy,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value: T = text
        .trim()
        .parse()
        .with_context(|| format!("Invalid {:?} value: '{}'", ty, text))?;
    print_line(sink, value)
}

/// Prints `value` and a line ending, failing if the sink refuses any of it.
fn print_line<T: Printable + Copy>(sink: &mut Output, value: T) -> Result<()> {
    let expected = value.print_to(&mut CountingSink::new()) + LINE_ENDING.len();
    let written = sink.print(value) + sink.println();
    if written != expected {
        anyhow::bail!("Short write: {} of {} bytes", written, expected);
    }
    Ok(())
}

fn parse_input(path: Option<&str>) -> Result<serde_json::Value> {
    let json = read_input(path)?;
    serde_json::from_str(&json).context("Failed to parse JSON input")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn open_output(path: Option<&str>) -> Result<Output> {
    let writer: Box<dyn Write> = match path {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("Failed to create file: {}", path))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    Ok(IoSink::new(BufWriter::new(writer)))
}

fn finish(mut sink: Output) -> Result<()> {
    sink.get_mut().flush().context("Failed to flush output")
}
