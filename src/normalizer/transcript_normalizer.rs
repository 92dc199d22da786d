/// Trait for cleaning raw chat exports from various chat clients
pub trait TranscriptNormalizer: Send + Sync {
    /// Normalize the raw pasted export into one line per message
    fn normalize(&self, raw_text: &str) -> String;

    /// Get the name of this normalizer for logging
    fn name(&self) -> &'static str;
}
