mod discord_export;
mod line_export;
mod normalizer;
mod transcript_normalizer;

pub use discord_export::DiscordExportNormalizer;
pub use line_export::LineExportNormalizer;
pub use normalizer::{ExportFormat, Normalizer};
pub use transcript_normalizer::TranscriptNormalizer;
