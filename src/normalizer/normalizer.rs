use anyhow::{bail, Result};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

use crate::normalizer::{DiscordExportNormalizer, LineExportNormalizer, TranscriptNormalizer};

/// The chat export shapes the normalizer understands. A transcript is expected
/// to be wholly one shape or the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Single-line exports: `<speaker> message-text` per line
    Line,
    /// Two-line exports: `<speaker> — <timestamp>` header, body on next line
    Discord,
}

impl FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "line" => Ok(ExportFormat::Line),
            "discord" => Ok(ExportFormat::Discord),
            _ => bail!(
                "Unknown export format '{}'. Supported formats: line, discord, auto",
                s
            ),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Line => write!(f, "line"),
            ExportFormat::Discord => write!(f, "discord"),
        }
    }
}

/// Enum to hold different normalizer types
#[derive(Debug)]
pub enum Normalizer {
    LineExport(LineExportNormalizer),
    DiscordExport(DiscordExportNormalizer),
}

impl Normalizer {
    /// Create a normalizer for an explicitly-selected export format
    pub fn create(format: ExportFormat) -> Result<Self> {
        match format {
            ExportFormat::Line => Ok(Normalizer::LineExport(LineExportNormalizer::new()?)),
            ExportFormat::Discord => {
                Ok(Normalizer::DiscordExport(DiscordExportNormalizer::new()?))
            }
        }
    }

    /// Sniff which export shape a transcript is in and create the matching
    /// normalizer. Any line shaped like a two-line message header selects the
    /// Discord strategy; everything else falls back to single-line.
    pub fn detect(raw_text: &str) -> Result<Self> {
        let discord = DiscordExportNormalizer::new()?;

        if raw_text.lines().any(|line| discord.is_header(line)) {
            info!("Detected two-line export format");
            Ok(Normalizer::DiscordExport(discord))
        } else {
            info!("Detected single-line export format");
            Ok(Normalizer::LineExport(LineExportNormalizer::new()?))
        }
    }

    /// Resolve a caller-supplied format string. `auto` (or nothing) sniffs the
    /// transcript; anything else must name a format explicitly.
    pub fn for_format(format: Option<&str>, raw_text: &str) -> Result<Self> {
        match format {
            None | Some("auto") => Self::detect(raw_text),
            Some(name) => Self::create(name.parse()?),
        }
    }

    /// The format this normalizer handles
    pub fn format(&self) -> ExportFormat {
        match self {
            Normalizer::LineExport(_) => ExportFormat::Line,
            Normalizer::DiscordExport(_) => ExportFormat::Discord,
        }
    }

    /// Run normalization using the appropriate normalizer
    pub fn run(&self, raw_text: &str) -> String {
        match self {
            Normalizer::LineExport(n) => {
                debug!("Running {}", n.name());
                n.normalize(raw_text)
            }
            Normalizer::DiscordExport(n) => {
                debug!("Running {}", n.name());
                n.normalize(raw_text)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_discord_export() {
        let raw = "Alice — 5/1/2024 2:32 PM\nwent to the store";
        let normalizer = Normalizer::detect(raw).unwrap();

        assert_eq!(normalizer.format(), ExportFormat::Discord);
    }

    #[test]
    fn test_detect_line_export() {
        let raw = "14:32 Alice went to the store";
        let normalizer = Normalizer::detect(raw).unwrap();

        assert_eq!(normalizer.format(), ExportFormat::Line);
    }

    #[test]
    fn test_for_format_auto_sniffs() {
        let raw = "Alice — 5/1/2024 2:32 PM\nwent to the store";

        let auto = Normalizer::for_format(Some("auto"), raw).unwrap();
        assert_eq!(auto.format(), ExportFormat::Discord);

        let explicit = Normalizer::for_format(Some("line"), raw).unwrap();
        assert_eq!(explicit.format(), ExportFormat::Line);
    }

    #[test]
    fn test_unknown_format_rejected() {
        let err = Normalizer::for_format(Some("slack"), "").unwrap_err();

        assert!(err.to_string().contains("Unknown export format"));
    }

    #[test]
    fn test_format_round_trips_through_strings() {
        for format in [ExportFormat::Line, ExportFormat::Discord] {
            assert_eq!(format.to_string().parse::<ExportFormat>().unwrap(), format);
        }
    }
}
