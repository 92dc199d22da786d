use anyhow::Result;
use regex::Regex;
use tracing::debug;

use crate::normalizer::TranscriptNormalizer;

/// Bare attachment placeholders that LINE inserts for non-text messages.
/// English tokens plus their zh-TW equivalents.
const ATTACHMENT_PLACEHOLDERS: &[&str] = &["Stickers", "Photos", "Videos", "貼圖", "照片", "影片"];

/// Normalizer for LINE-style single-line chat exports.
///
/// Each message arrives as one line shaped `<speaker> message-text`, possibly
/// prefixed with a clock time and interleaved with date dividers, attachment
/// placeholders, and decorative separators.
#[derive(Debug)]
pub struct LineExportNormalizer {
    date_divider_regex: Regex,
    clock_prefix_regex: Regex,
    mention_regex: Regex,
}

impl LineExportNormalizer {
    pub fn new() -> Result<Self> {
        // Matches date dividers like 2024.05.01 Wednesday or 2024.05.01 週三
        let date_divider_regex = Regex::new(r"^\d{4}\.\d{2}\.\d{2}\s+\S+$")?;
        // Matches clock prefixes like 14:32 at the start of a line
        let clock_prefix_regex = Regex::new(r"^\d{2}:\d{2}\s+")?;
        // Matches whitespace-delimited tokens beginning with @, e.g. @carol
        let mention_regex = Regex::new(r"(?:^|\s+)@\S+")?;

        Ok(Self {
            date_divider_regex,
            clock_prefix_regex,
            mention_regex,
        })
    }

    fn is_noise(&self, line: &str) -> bool {
        if self.date_divider_regex.is_match(line) {
            return true;
        }

        if ATTACHMENT_PLACEHOLDERS.contains(&line) {
            return true;
        }

        // Lines that are nothing but a pasted URL
        if (line.starts_with("http://") || line.starts_with("https://"))
            && !line.contains(char::is_whitespace)
        {
            return true;
        }

        // Decorative separator lines like === or ----
        line.chars().all(|c| matches!(c, '+' | '=' | '-' | ' '))
    }
}

impl TranscriptNormalizer for LineExportNormalizer {
    fn normalize(&self, raw_text: &str) -> String {
        debug!("Normalizing single-line chat export");

        let mut cleaned: Vec<String> = Vec::new();

        for line in raw_text.trim().lines() {
            let line = line.trim();

            if line.is_empty() || self.is_noise(line) {
                continue;
            }

            let line = self.clock_prefix_regex.replace(line, "");
            let line = self.mention_regex.replace_all(&line, "");
            let line = line.trim();

            // A valid line holds both a speaker and a message, separated by a
            // space. This also drops single-word messages with no speaker
            // context, e.g. a lone "ok".
            if line.contains(' ') {
                cleaned.push(line.to_string());
            }
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
        "LineExportNormalizer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_prefix_stripped() {
        let normalizer = LineExportNormalizer::new().unwrap();

        let input = "14:32 Alice went to the store";
        let expected = "Alice went to the store";

        assert_eq!(normalizer.normalize(input), expected);
    }

    #[test]
    fn test_mentions_stripped() {
        let normalizer = LineExportNormalizer::new().unwrap();

        let input = "Bob hi @carol how are you";
        let expected = "Bob hi how are you";

        assert_eq!(normalizer.normalize(input), expected);
    }

    #[test]
    fn test_leading_mention_stripped() {
        let normalizer = LineExportNormalizer::new().unwrap();

        assert_eq!(normalizer.normalize("@bob Alice are you around"), "Alice are you around");
    }

    #[test]
    fn test_email_address_not_treated_as_mention() {
        let normalizer = LineExportNormalizer::new().unwrap();

        let input = "Alice mail me at foo@bar.com";
        assert_eq!(normalizer.normalize(input), input);
    }

    #[test]
    fn test_date_divider_dropped() {
        let normalizer = LineExportNormalizer::new().unwrap();

        assert_eq!(normalizer.normalize("2024.05.01 Wednesday"), "");
    }

    #[test]
    fn test_attachment_placeholders_dropped() {
        let normalizer = LineExportNormalizer::new().unwrap();

        assert_eq!(normalizer.normalize("Stickers"), "");
        assert_eq!(normalizer.normalize("貼圖"), "");
    }

    #[test]
    fn test_bare_url_dropped() {
        let normalizer = LineExportNormalizer::new().unwrap();

        assert_eq!(normalizer.normalize("https://example.com/x"), "");
    }

    #[test]
    fn test_separator_line_dropped() {
        let normalizer = LineExportNormalizer::new().unwrap();

        assert_eq!(normalizer.normalize("==="), "");
        assert_eq!(normalizer.normalize("+-+-+- ="), "");
    }

    #[test]
    fn test_bare_name_dropped() {
        let normalizer = LineExportNormalizer::new().unwrap();

        assert_eq!(normalizer.normalize("Alice"), "");
    }

    #[test]
    fn test_single_word_message_dropped() {
        // Known limitation: the space heuristic cannot tell a bare name from a
        // single-word message, so a lone "ok" is lost.
        let normalizer = LineExportNormalizer::new().unwrap();

        assert_eq!(normalizer.normalize("ok"), "");
    }

    #[test]
    fn test_idempotent_on_clean_transcript() {
        let normalizer = LineExportNormalizer::new().unwrap();

        let clean = "Alice went to the store\nBob hi how are you";
        assert_eq!(normalizer.normalize(clean), clean);
    }

    #[test]
    fn test_surrounding_blank_lines_discarded() {
        let normalizer = LineExportNormalizer::new().unwrap();

        let input = "\n\nAlice went to the store\n\nBob me too\n\n";
        assert_eq!(
            normalizer.normalize(input),
            "Alice went to the store\nBob me too"
        );
    }

    #[test]
    fn test_mixed_transcript() {
        let normalizer = LineExportNormalizer::new().unwrap();

        let input = "2024.05.01 Wednesday\n\
                     14:32 Alice went to the store\n\
                     Stickers\n\
                     ===\n\
                     15:01 Bob hi @alice nice\n\
                     https://example.com/x\n\
                     Carol";
        let expected = "Alice went to the store\nBob hi nice";

        assert_eq!(normalizer.normalize(input), expected);
    }

    #[test]
    fn test_every_output_line_has_interior_space() {
        let normalizer = LineExportNormalizer::new().unwrap();

        let input = "Alice hello there\nBob\n12:00 Carol\nDave ok then";
        let result = normalizer.normalize(input);

        for line in result.lines() {
            assert!(!line.is_empty());
            assert!(line.contains(' '), "line without space: {line:?}");
        }
    }
}
