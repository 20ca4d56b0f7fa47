use super::error::CapabilityError;
use crate::language::Language;

/// Trait for the platform speech capabilities (recognition + synthesis)
///
/// The production implementation forwards to the webview, which owns the
/// actual engines; tests substitute a mock. Each implementation knows how
/// to:
/// - Start continuous recognition for a given language
/// - Stop recognition
/// - Submit an utterance for synthesis
pub trait SpeechHost: Send {
    /// Start continuous recognition; transcript updates are pushed back
    /// asynchronously through the session command channel
    fn start_recognition(&self, language: Language) -> Result<(), CapabilityError>;

    /// Stop recognition; already-captured text is kept
    fn stop_recognition(&self) -> Result<(), CapabilityError>;

    /// Submit one utterance, tagged with a language. Fire-and-forget: a
    /// new utterance interrupts any in-flight one
    fn speak(&self, text: &str, language: Language) -> Result<(), CapabilityError>;
}
