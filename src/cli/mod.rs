use crate::normalizer::Normalizer;
use anyhow::{bail, Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "chatsift")]
#[command(about = "Chat transcript cleanup and analysis relay", long_about = None)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Normalize a chat export from a file or stdin
    Normalize(NormalizeCliArgs),
    /// Print version information
    Version,
}

#[derive(ClapArgs, Debug)]
pub struct NormalizeCliArgs {
    /// Transcript file to normalize (reads stdin when omitted)
    pub input: Option<PathBuf>,
    /// Export format: line, discord, or auto to sniff
    #[arg(short, long, default_value = "auto")]
    pub format: String,
    /// Write the normalized transcript to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn handle_normalize_command(args: NormalizeCliArgs) -> Result<()> {
    let raw_text = match &args.input {
        Some(path) => {
            if !path.exists() {
                bail!("Transcript file not found: {}", path.display());
            }
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read transcript file {}", path.display()))?
        }
        None => {
            debug!("Reading transcript from stdin");
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read transcript from stdin")?;
            buffer
        }
    };

    let normalizer = Normalizer::for_format(Some(&args.format), &raw_text)?;
    let cleaned = normalizer.run(&raw_text);

    if cleaned.is_empty() {
        bail!("Transcript contained no usable content");
    }

    match &args.output {
        Some(path) => {
            std::fs::write(path, format!("{}\n", cleaned))
                .with_context(|| format!("Failed to write output file {}", path.display()))?;
            println!(
                "Wrote {} normalized lines to {}",
                cleaned.lines().count(),
                path.display()
            );
        }
        None => println!("{}", cleaned),
    }

    Ok(())
}
