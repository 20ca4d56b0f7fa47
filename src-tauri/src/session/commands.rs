use crate::language::Language;

/// Commands for driving the session
/// These are sent through channels (NOT Tauri events) for zero-overhead
/// internal communication; the controller consumes them one at a time,
/// which keeps every state mutation serialized.
#[derive(Debug, Clone)]
pub enum SessionCommand {
    /// Start listening if idle, stop if listening
    Toggle,
    /// Stop any capture and clear the transcript
    Reset,
    /// Select the language used for the next capture and narration
    SetLanguage(Language),
    /// Full current transcript pushed by the recognition capability
    TranscriptUpdate(String),
    /// The recognition capability reported an error code
    CaptureFailed(String),
}
