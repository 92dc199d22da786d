use anyhow::Result;
use chrono::NaiveDateTime;
use regex::Regex;
use tracing::debug;

use crate::normalizer::TranscriptNormalizer;

/// Normalizer for Discord-style two-line chat exports.
///
/// Each message arrives as a header line `<speaker> — <M>/<D>/<YYYY> <H>:<MM>
/// <AM|PM>` followed by the message body on the next physical line. The
/// 12-hour timestamp is reformatted to a 24-hour `HH:MM` clock.
#[derive(Debug)]
pub struct DiscordExportNormalizer {
    header_regex: Regex,
}

impl DiscordExportNormalizer {
    pub fn new() -> Result<Self> {
        // Matches headers like Alice — 5/1/2024 2:32 PM
        let header_regex = Regex::new(r"^(.+?)\s+—\s+(\d+/\d+/\d+ \d+:\d+ [AP]M)")?;

        Ok(Self { header_regex })
    }

    /// Whether a line looks like a message header. Used for format sniffing.
    pub fn is_header(&self, line: &str) -> bool {
        self.header_regex.is_match(line)
    }

    /// Parse a header line into `(speaker, HH:MM)`. A header whose timestamp
    /// substring does not parse is treated as a non-match.
    fn parse_header(&self, line: &str) -> Option<(String, String)> {
        let captures = self.header_regex.captures(line)?;
        let speaker = captures.get(1)?.as_str().to_string();

        let timestamp = NaiveDateTime::parse_from_str(captures.get(2)?.as_str(), "%m/%d/%Y %I:%M %p")
            .ok()?;

        Some((speaker, timestamp.format("%H:%M").to_string()))
    }
}

impl TranscriptNormalizer for DiscordExportNormalizer {
    fn normalize(&self, raw_text: &str) -> String {
        debug!("Normalizing two-line chat export");

        let lines: Vec<&str> = raw_text.trim().lines().collect();
        let mut cleaned: Vec<String> = Vec::new();

        let mut i = 0;
        while i < lines.len() {
            if let Some((speaker, time)) = self.parse_header(lines[i]) {
                i += 1;
                // A header at end of input has no body and produces nothing
                if i < lines.len() {
                    let message = lines[i].trim();
                    cleaned.push(format!("{} {} {}", time, speaker, message));
                }
            }
            i += 1;
        }

        let result = cleaned.join("\n");
        debug!(
            "Normalized {} chars to {} messages",
            raw_text.len(),
            cleaned.len()
        );

        result
    }

    fn name(&self) -> &'static str {
        "DiscordExportNormalizer"
    }
}
