use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use taglog_rs::util::hex::{decode_hex, format_mac};
use taglog_rs::{global, init_logger, log_hex_dump, log_printf, LoggerOptions, OutputTarget};

#[derive(Parser)]
#[command(name = "taglog")]
#[command(about = "Caller-tagged logging and hex dump tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct OutputArgs {
    /// Write to this file instead of standard output
    #[arg(short, long, conflicts_with = "stderr")]
    out: Option<PathBuf>,
    /// Write to standard error
    #[arg(long)]
    stderr: bool,
    /// Second-precision timestamps
    #[arg(long)]
    no_micros: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Hex-dump bytes given as hex text or read from a file
    Dump {
        #[arg(long, conflicts_with = "file", required_unless_present = "file")]
        hex: Option<String>,
        #[arg(short, long)]
        file: Option<PathBuf>,
        #[arg(short, long, default_value = "data")]
        label: String,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Render six hex bytes as a MAC address
    Mac { hex: String },
    /// Write one tagged, timestamped line
    Log {
        message: String,
        #[command(flatten)]
        output: OutputArgs,
    },
}

/// Environment settings first, then command-line overrides.
fn configure(output: &OutputArgs) -> Result<()> {
    let mut options = LoggerOptions::from_env().context("reading TAGLOG_* environment")?;
    if let Some(path) = &output.out {
        options.target = OutputTarget::File(path.clone());
    } else if output.stderr {
        options.target = OutputTarget::Stderr;
    }
    if output.no_micros {
        options.microseconds = false;
    }
    global::init(&options).with_context(|| format!("configuring output to {}", options.target))
}

fn main() -> Result<()> {
    init_logger();

    let cli = Cli::parse();

    match cli.command {
        Commands::Dump {
            hex,
            file,
            label,
            output,
        } => {
            let data = match (hex, file) {
                (Some(hex), _) => decode_hex(&hex)?,
                (None, Some(path)) => std::fs::read(&path)
                    .with_context(|| format!("reading {}", path.display()))?,
                (None, None) => bail!("either --hex or --file is required"),
            };
            configure(&output)?;
            log_hex_dump!(label, data);
        }
        Commands::Mac { hex } => {
            let data = decode_hex(&hex)?;
            println!("{}", format_mac(&data));
        }
        Commands::Log { message, output } => {
            configure(&output)?;
            log_printf!("{message}");
        }
    }

    global::deinit();
    Ok(())
}
